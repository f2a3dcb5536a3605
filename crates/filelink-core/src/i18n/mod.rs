//! Localized UI text.
//!
//! Catalogs use the WebExtension `messages.json` layout:
//! `{"key": {"message": "...", "description": "..."}}`.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::Result;

pub const BUTTON_SAVE: &str = "buttonSave";
pub const BUTTON_SAVING: &str = "buttonSaving";
pub const STATUS_PLEASE_CONFIGURE: &str = "statusPleaseConfigure";
pub const STATUS_LOADED: &str = "statusLoaded";
pub const STATUS_LOAD_ERROR: &str = "statusLoadError";
pub const STATUS_REQUIRED_FIELDS: &str = "statusRequiredFields";
pub const STATUS_INVALID_ENDPOINT: &str = "statusInvalidEndpoint";
pub const STATUS_INVALID_BUCKET: &str = "statusInvalidBucket";
pub const STATUS_INVALID_ENDPOINT_HINT: &str = "statusInvalidEndpointHint";
pub const STATUS_INVALID_BUCKET_HINT: &str = "statusInvalidBucketHint";
pub const STATUS_SAVING: &str = "statusSaving";
pub const STATUS_SAVED: &str = "statusSaved";
pub const STATUS_SAVE_ERROR: &str = "statusSaveError";

/// Source of translated messages.
pub trait MessageCatalog {
    /// Look up a message; `None` when the catalog has no usable text for `key`.
    fn get_message(&self, key: &str) -> Option<String>;
}

#[derive(Debug, Clone, Deserialize)]
struct CatalogEntry {
    message: String,
}

/// Catalog loaded from a `messages.json` file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JsonMessageCatalog {
    messages: HashMap<String, String>,
}

impl JsonMessageCatalog {
    /// Parse a catalog from a raw JSON payload.
    pub fn parse(payload: &str) -> Result<Self> {
        let entries: HashMap<String, CatalogEntry> = serde_json::from_str(payload)?;
        let messages = entries
            .into_iter()
            .map(|(key, entry)| (key, entry.message))
            .collect();
        Ok(Self { messages })
    }

    /// Load a catalog from a file on disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::parse(&raw)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl MessageCatalog for JsonMessageCatalog {
    fn get_message(&self, key: &str) -> Option<String> {
        self.messages
            .get(key)
            .filter(|message| !message.is_empty())
            .cloned()
    }
}

/// Resolves UI text through an optional catalog, falling back to English.
#[derive(Default)]
pub struct Localizer {
    catalog: Option<Box<dyn MessageCatalog + Send + Sync>>,
}

impl Localizer {
    pub fn new(catalog: impl MessageCatalog + Send + Sync + 'static) -> Self {
        Self {
            catalog: Some(Box::new(catalog)),
        }
    }

    /// Localizer that always returns the English fallback.
    pub fn english() -> Self {
        Self::default()
    }

    /// Catalog text for `key`, or `fallback` when it is absent.
    pub fn text(&self, key: &str, fallback: &str) -> String {
        self.catalog
            .as_ref()
            .and_then(|catalog| catalog.get_message(key))
            .unwrap_or_else(|| fallback.to_string())
    }

    /// Resolve the translatable elements of a page. Keys without a catalog
    /// message are skipped so their built-in text stays in place.
    pub fn localize_elements<'a>(
        &self,
        keys: impl IntoIterator<Item = &'a str>,
    ) -> Vec<(&'a str, String)> {
        let Some(catalog) = self.catalog.as_ref() else {
            return Vec::new();
        };

        keys.into_iter()
            .filter_map(|key| catalog.get_message(key).map(|message| (key, message)))
            .collect()
    }
}

impl std::fmt::Debug for Localizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Localizer")
            .field("has_catalog", &self.catalog.is_some())
            .finish()
    }
}
