pub mod clients;
pub mod schema;
pub mod table;

pub use table::RecordStore;
