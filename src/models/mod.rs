pub mod entry;
pub mod role;
