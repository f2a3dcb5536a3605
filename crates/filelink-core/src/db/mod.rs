//! Local host storage for S3 FileLink
//!
//! A libSQL database stands in for the mail client's extension storage and
//! account registry.

mod account_host;
mod account_store;
mod connection;
mod migrations;

pub use account_host::LibSqlAccountHost;
pub use account_store::{AccountStore, LibSqlAccountStore};
pub use connection::Database;
