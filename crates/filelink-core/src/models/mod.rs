//! Data models for S3 FileLink

mod account;
mod fields;

pub use account::{AccountId, AccountStorageConfig, AccountUpdate};
pub use fields::{Field, FormFields};
