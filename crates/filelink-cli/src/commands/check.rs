use filelink_core::validation::{
    is_valid_bucket, is_valid_endpoint, normalize_endpoint, normalize_prefix,
};

use crate::cli::CheckField;
use crate::error::CliError;

/// Check one field value the way the settings page does when the field loses
/// focus, returning the value that would be stored.
pub fn check_field(field: CheckField, value: &str) -> Result<String, CliError> {
    let value = value.trim();
    match field {
        CheckField::Endpoint => {
            if is_valid_endpoint(value) {
                Ok(normalize_endpoint(value))
            } else {
                Err(CliError::InvalidField(
                    "Invalid endpoint format. Use format like: s3.amazonaws.com".to_string(),
                ))
            }
        }
        CheckField::Bucket => {
            if is_valid_bucket(value) {
                Ok(value.to_string())
            } else {
                Err(CliError::InvalidField(
                    "Invalid bucket name. Use lowercase letters, numbers, and hyphens only"
                        .to_string(),
                ))
            }
        }
        CheckField::Prefix => Ok(normalize_prefix(value)),
    }
}

pub fn run_check(field: CheckField, value: &str) -> Result<(), CliError> {
    let normalized = check_field(field, value)?;
    println!("{normalized}");
    Ok(())
}
