pub mod add;
pub mod clients;
pub mod config;
pub mod export;
pub mod init;
pub mod list;
pub mod serve;
