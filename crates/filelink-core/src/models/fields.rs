//! Settings form fields

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::AccountStorageConfig;
use crate::util::trim_input;
use crate::Error;

/// A field of the account settings form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Endpoint,
    Region,
    Bucket,
    Prefix,
    AccessKey,
    SecretKey,
}

impl Field {
    /// All fields in form order.
    pub const ALL: [Self; 6] = [
        Self::Endpoint,
        Self::Region,
        Self::Bucket,
        Self::Prefix,
        Self::AccessKey,
        Self::SecretKey,
    ];

    /// Form and storage key of the field.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Endpoint => "endpoint",
            Self::Region => "region",
            Self::Bucket => "bucket",
            Self::Prefix => "prefix",
            Self::AccessKey => "access_key",
            Self::SecretKey => "secret_key",
        }
    }

    /// Message key of the field's label in a message catalog.
    #[must_use]
    pub const fn label_key(self) -> &'static str {
        match self {
            Self::Endpoint => "labelEndpoint",
            Self::Region => "labelRegion",
            Self::Bucket => "labelBucket",
            Self::Prefix => "labelPrefix",
            Self::AccessKey => "labelAccessKey",
            Self::SecretKey => "labelSecretKey",
        }
    }

    /// Whether the form declares the field as required.
    #[must_use]
    pub const fn is_required(self) -> bool {
        matches!(
            self,
            Self::Endpoint | Self::Bucket | Self::AccessKey | Self::SecretKey
        )
    }

    /// Whether the field holds credential material.
    #[must_use]
    pub const fn is_secret(self) -> bool {
        matches!(self, Self::SecretKey)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|field| field.name() == name)
            .ok_or_else(|| Error::InvalidInput(format!("Unknown settings field: {s}")))
    }
}

/// Raw, user-entered form values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub endpoint: String,
    pub region: String,
    pub bucket: String,
    pub prefix: String,
    pub access_key: String,
    pub secret_key: String,
}

impl FormFields {
    /// Current value of a field.
    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Endpoint => &self.endpoint,
            Field::Region => &self.region,
            Field::Bucket => &self.bucket,
            Field::Prefix => &self.prefix,
            Field::AccessKey => &self.access_key,
            Field::SecretKey => &self.secret_key,
        }
    }

    /// Replace the value of a field.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Endpoint => self.endpoint = value,
            Field::Region => self.region = value,
            Field::Bucket => self.bucket = value,
            Field::Prefix => self.prefix = value,
            Field::AccessKey => self.access_key = value,
            Field::SecretKey => self.secret_key = value,
        }
    }

    /// Trimmed value of a field.
    #[must_use]
    pub fn trimmed(&self, field: Field) -> &str {
        trim_input(self.get(field))
    }
}

impl From<&AccountStorageConfig> for FormFields {
    fn from(config: &AccountStorageConfig) -> Self {
        Self {
            endpoint: config.endpoint.clone(),
            region: config.region.clone(),
            bucket: config.bucket.clone(),
            prefix: config.prefix.clone(),
            access_key: config.access_key.clone(),
            secret_key: config.secret_key.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_names_follow_form_order() {
        let names: Vec<&str> = Field::ALL.iter().map(|field| field.name()).collect();
        assert_eq!(
            names,
            [
                "endpoint",
                "region",
                "bucket",
                "prefix",
                "access_key",
                "secret_key"
            ]
        );
    }

    #[test]
    fn field_parses_cli_spelling() {
        assert_eq!("access-key".parse::<Field>().unwrap(), Field::AccessKey);
        assert_eq!(" Bucket ".parse::<Field>().unwrap(), Field::Bucket);
        assert!("password".parse::<Field>().is_err());
    }

    #[test]
    fn get_and_set_address_the_same_field() {
        let mut fields = FormFields::default();
        for field in Field::ALL {
            fields.set(field, format!("value-{}", field.name()));
        }
        for field in Field::ALL {
            assert_eq!(fields.get(field), format!("value-{}", field.name()));
        }
    }

    #[test]
    fn trimmed_treats_byte_order_mark_as_whitespace() {
        let mut fields = FormFields::default();
        fields.set(Field::Bucket, "\u{feff}valid-bucket ");
        fields.set(Field::AccessKey, "\u{feff}");
        assert_eq!(fields.trimmed(Field::Bucket), "valid-bucket");
        assert_eq!(fields.trimmed(Field::AccessKey), "");
    }

    #[test]
    fn region_and_prefix_are_optional() {
        let optional: Vec<Field> = Field::ALL
            .into_iter()
            .filter(|field| !field.is_required())
            .collect();
        assert_eq!(optional, [Field::Region, Field::Prefix]);
    }
}
