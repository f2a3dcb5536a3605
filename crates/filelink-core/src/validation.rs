//! Endpoint and bucket validation, plus the normalization applied before
//! settings are persisted.
//!
//! Every function here is pure; callers decide how to surface a rejection.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::models::{AccountStorageConfig, Field, FormFields};
use crate::util::trim_input;

const BUCKET_MIN_LEN: usize = 3;
const BUCKET_MAX_LEN: usize = 63;

static PROTOCOL_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://").expect("Invalid regex"));

static ENDPOINT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9]([a-zA-Z0-9.-]*[a-zA-Z0-9])?$").expect("Invalid regex")
});

static BUCKET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9][a-z0-9-]*[a-z0-9]$").expect("Invalid regex"));

/// Reasons a settings form cannot be saved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// One or more required fields are empty
    #[error("Required fields are empty: {}", join_fields(.0))]
    MissingRequired(Vec<Field>),

    /// Endpoint is not a bare hostname
    #[error("Invalid endpoint format: {0}")]
    InvalidEndpoint(String),

    /// Bucket violates S3 bucket naming rules
    #[error("Invalid bucket name: {0}")]
    InvalidBucket(String),
}

/// Strip a leading `http://` or `https://` from an endpoint.
///
/// The scheme match is case-sensitive and the rest of the value is returned
/// unchanged.
pub fn normalize_endpoint(raw: &str) -> String {
    PROTOCOL_PREFIX.replace(raw, "").into_owned()
}

/// Check that an endpoint (with any protocol removed) is a bare hostname:
/// alphanumeric at both ends, only alphanumerics, `-` and `.` in between.
pub fn is_valid_endpoint(value: &str) -> bool {
    ENDPOINT.is_match(&normalize_endpoint(value))
}

/// Check a bucket name against S3 naming rules: 3-63 characters of lowercase
/// letters, digits and hyphens, not starting or ending with a hyphen.
pub fn is_valid_bucket(value: &str) -> bool {
    (BUCKET_MIN_LEN..=BUCKET_MAX_LEN).contains(&value.len()) && BUCKET.is_match(value)
}

/// Trim a key prefix and make sure a non-empty prefix ends with `/`.
pub fn normalize_prefix(raw: &str) -> String {
    let value = trim_input(raw);
    if value.is_empty() || value.ends_with('/') {
        value.to_string()
    } else {
        format!("{value}/")
    }
}

/// Required fields whose trimmed value is empty, in form order.
pub fn missing_required_fields(fields: &FormFields) -> Vec<Field> {
    Field::ALL
        .into_iter()
        .filter(|field| field.is_required() && fields.trimmed(*field).is_empty())
        .collect()
}

/// Validate raw form values and build the record to persist.
///
/// Checks run in order: required fields, endpoint, bucket. On success every
/// value is trimmed, the endpoint protocol is stripped and the prefix is
/// slash-terminated.
pub fn validate_for_save(fields: &FormFields) -> Result<AccountStorageConfig, ValidationError> {
    let missing = missing_required_fields(fields);
    if !missing.is_empty() {
        return Err(ValidationError::MissingRequired(missing));
    }

    let endpoint = fields.trimmed(Field::Endpoint);
    if !is_valid_endpoint(endpoint) {
        return Err(ValidationError::InvalidEndpoint(endpoint.to_string()));
    }

    let bucket = fields.trimmed(Field::Bucket);
    if !is_valid_bucket(bucket) {
        return Err(ValidationError::InvalidBucket(bucket.to_string()));
    }

    Ok(AccountStorageConfig {
        endpoint: normalize_endpoint(endpoint),
        region: fields.trimmed(Field::Region).to_string(),
        bucket: bucket.to_string(),
        prefix: normalize_prefix(fields.get(Field::Prefix)),
        access_key: fields.trimmed(Field::AccessKey).to_string(),
        secret_key: fields.trimmed(Field::SecretKey).to_string(),
    })
}

fn join_fields(fields: &[Field]) -> String {
    fields
        .iter()
        .map(|field| field.name())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn complete_fields() -> FormFields {
        FormFields {
            endpoint: " https://s3.amazonaws.com ".to_string(),
            region: " us-east-1 ".to_string(),
            bucket: " valid-bucket ".to_string(),
            prefix: " data ".to_string(),
            access_key: " AKIAEXAMPLE ".to_string(),
            secret_key: " secret ".to_string(),
        }
    }

    #[test]
    fn normalize_endpoint_strips_one_protocol() {
        assert_eq!(normalize_endpoint("https://s3.amazonaws.com"), "s3.amazonaws.com");
        assert_eq!(normalize_endpoint("http://minio.local"), "minio.local");
        assert_eq!(normalize_endpoint("s3.amazonaws.com"), "s3.amazonaws.com");
        assert_eq!(normalize_endpoint(""), "");
    }

    #[test]
    fn normalize_endpoint_is_case_sensitive_on_scheme() {
        assert_eq!(normalize_endpoint("HTTPS://host"), "HTTPS://host");
        assert_eq!(normalize_endpoint(" https://host"), " https://host");
    }

    #[test]
    fn normalize_endpoint_is_idempotent() {
        for raw in [
            "https://s3.amazonaws.com",
            "http://minio.local",
            "https://",
            "plain",
        ] {
            let once = normalize_endpoint(raw);
            assert_eq!(normalize_endpoint(&once), once, "input: {raw}");
        }
    }

    #[test]
    fn is_valid_endpoint_accepts_hostnames() {
        assert!(is_valid_endpoint("s3.amazonaws.com"));
        assert!(is_valid_endpoint("https://s3.eu-west-1.amazonaws.com"));
        assert!(is_valid_endpoint("localhost"));
        assert!(is_valid_endpoint("a"));
    }

    #[test]
    fn is_valid_endpoint_rejects_malformed_values() {
        assert!(!is_valid_endpoint(""));
        assert!(!is_valid_endpoint("https://"));
        assert!(!is_valid_endpoint("-bad-.com"));
        assert!(!is_valid_endpoint(".leading.dot"));
        assert!(!is_valid_endpoint("trailing.dot."));
        assert!(!is_valid_endpoint("host:9000"));
        assert!(!is_valid_endpoint("s3.amazonaws.com/path"));
        assert!(!is_valid_endpoint("under_score.com"));
    }

    #[test]
    fn is_valid_bucket_enforces_naming_rules() {
        assert!(is_valid_bucket("my-bucket-1"));
        assert!(is_valid_bucket("abc"));
        assert!(is_valid_bucket(&"a".repeat(63)));

        assert!(!is_valid_bucket("UpperCase"));
        assert!(!is_valid_bucket("ab"));
        assert!(!is_valid_bucket(&"a".repeat(64)));
        assert!(!is_valid_bucket("-bucket"));
        assert!(!is_valid_bucket("bucket-"));
        assert!(!is_valid_bucket("my.bucket"));
        assert!(!is_valid_bucket("Invalid_Bucket"));
    }

    #[test]
    fn normalize_prefix_appends_slash() {
        assert_eq!(normalize_prefix("logs"), "logs/");
        assert_eq!(normalize_prefix("logs/"), "logs/");
        assert_eq!(normalize_prefix("  nested/path  "), "nested/path/");
        assert_eq!(normalize_prefix(""), "");
        assert_eq!(normalize_prefix("   "), "");
    }

    #[test]
    fn normalize_prefix_strips_byte_order_mark() {
        assert_eq!(normalize_prefix("\u{feff}logs"), "logs/");
        assert_eq!(normalize_prefix(" \u{feff} "), "");
    }

    #[test]
    fn validate_for_save_builds_normalized_record() {
        let config = validate_for_save(&complete_fields()).unwrap();
        assert_eq!(
            config,
            AccountStorageConfig {
                endpoint: "s3.amazonaws.com".to_string(),
                region: "us-east-1".to_string(),
                bucket: "valid-bucket".to_string(),
                prefix: "data/".to_string(),
                access_key: "AKIAEXAMPLE".to_string(),
                secret_key: "secret".to_string(),
            }
        );
    }

    #[test]
    fn validate_for_save_reports_missing_required_fields_first() {
        let fields = FormFields {
            endpoint: "not valid!".to_string(),
            bucket: "   ".to_string(),
            ..FormFields::default()
        };
        assert_eq!(
            validate_for_save(&fields),
            Err(ValidationError::MissingRequired(vec![
                Field::Bucket,
                Field::AccessKey,
                Field::SecretKey,
            ]))
        );
    }

    #[test]
    fn validate_for_save_checks_endpoint_before_bucket() {
        let fields = FormFields {
            endpoint: "-bad-.com".to_string(),
            bucket: "Invalid_Bucket".to_string(),
            ..complete_fields()
        };
        assert_eq!(
            validate_for_save(&fields),
            Err(ValidationError::InvalidEndpoint("-bad-.com".to_string()))
        );

        let fields = FormFields {
            bucket: "Invalid_Bucket".to_string(),
            ..complete_fields()
        };
        assert_eq!(
            validate_for_save(&fields),
            Err(ValidationError::InvalidBucket("Invalid_Bucket".to_string()))
        );
    }

    #[test]
    fn missing_required_error_lists_field_names() {
        let error = ValidationError::MissingRequired(vec![Field::Endpoint, Field::SecretKey]);
        assert_eq!(
            error.to_string(),
            "Required fields are empty: endpoint, secret_key"
        );
    }
}
