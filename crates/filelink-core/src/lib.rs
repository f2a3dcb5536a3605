//! filelink-core - Core library for S3 FileLink
//!
//! This crate contains the account settings model, the endpoint/bucket
//! validators, the host storage layer, and the settings form controller
//! shared by every S3 FileLink front-end.

pub mod db;
pub mod error;
pub mod form;
pub mod host;
pub mod i18n;
pub mod models;
pub mod status;
pub mod util;
pub mod validation;

pub use error::{Error, Result};
pub use form::SettingsForm;
pub use models::{AccountId, AccountStorageConfig, AccountUpdate, Field, FormFields};
pub use status::{StatusKind, StatusMessage};
pub use validation::ValidationError;
