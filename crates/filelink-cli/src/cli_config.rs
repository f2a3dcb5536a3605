//! Persistent CLI configuration.

use std::path::{Path, PathBuf};

use filelink_core::util::normalize_text_option;
use serde::{Deserialize, Serialize};

const CONFIG_FILE_NAME: &str = "cli-config.json";
const DATABASE_FILE_NAME: &str = "filelink.db";
const APP_DIR_NAME: &str = "filelink";

pub const ENV_DB_PATH: &str = "FILELINK_DB_PATH";
pub const ENV_ACCOUNT: &str = "FILELINK_ACCOUNT";
pub const ENV_MESSAGES: &str = "FILELINK_MESSAGES";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CliConfig {
    #[serde(default = "default_config_version")]
    pub version: u32,
    #[serde(default)]
    pub database_path: Option<String>,
    #[serde(default)]
    pub default_account: Option<String>,
    #[serde(default)]
    pub messages_path: Option<String>,
}

const fn default_config_version() -> u32 {
    1
}

pub fn default_config_path() -> Result<PathBuf, String> {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
        .ok_or_else(|| "Failed to resolve CLI config directory".to_string())
}

pub fn default_database_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
        .join(DATABASE_FILE_NAME)
}

impl CliConfig {
    pub fn load() -> Result<Self, String> {
        Self::load_from_path(&default_config_path()?)
    }

    pub fn load_from_path(path: &Path) -> Result<Self, String> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|error| format!("Failed to read config at {}: {}", path.display(), error))?;
        let mut config = serde_json::from_str::<Self>(&raw)
            .map_err(|error| format!("Failed to parse config at {}: {}", path.display(), error))?;
        config.normalize();
        Ok(config)
    }

    pub fn save(&self) -> Result<PathBuf, String> {
        let path = default_config_path()?;
        self.save_to_path(&path)?;
        Ok(path)
    }

    pub fn save_to_path(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|error| {
                format!(
                    "Failed to create config directory {}: {}",
                    parent.display(),
                    error
                )
            })?;
        }

        let mut normalized = self.clone();
        normalized.normalize();
        let serialized = serde_json::to_string_pretty(&normalized)
            .map_err(|error| format!("Failed to serialize config: {error}"))?;
        std::fs::write(path, serialized)
            .map_err(|error| format!("Failed to write config at {}: {}", path.display(), error))
    }

    /// Settings database path: explicit flag, then env, then config, then default.
    pub fn resolve_database_path(
        &self,
        explicit: Option<PathBuf>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> PathBuf {
        explicit
            .or_else(|| normalize_text_option(lookup(ENV_DB_PATH)).map(PathBuf::from))
            .or_else(|| self.database_path.clone().map(PathBuf::from))
            .unwrap_or_else(default_database_path)
    }

    /// Account identifier: explicit flag, then env, then config.
    pub fn resolve_account(
        &self,
        explicit: Option<String>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Option<String> {
        normalize_text_option(explicit)
            .or_else(|| normalize_text_option(lookup(ENV_ACCOUNT)))
            .or_else(|| self.default_account.clone())
    }

    /// Message catalog path: explicit flag, then env, then config.
    pub fn resolve_messages_path(
        &self,
        explicit: Option<PathBuf>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Option<PathBuf> {
        explicit
            .or_else(|| normalize_text_option(lookup(ENV_MESSAGES)).map(PathBuf::from))
            .or_else(|| self.messages_path.clone().map(PathBuf::from))
    }

    fn normalize(&mut self) {
        self.database_path = normalize_text_option(self.database_path.take());
        self.default_account = normalize_text_option(self.default_account.take());
        self.messages_path = normalize_text_option(self.messages_path.take());
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;

    use super::*;

    fn lookup_from(map: HashMap<&'static str, &'static str>) -> impl Fn(&str) -> Option<String> {
        move |key: &str| map.get(key).map(|value| (*value).to_string())
    }

    #[test]
    fn config_roundtrip_normalizes_values() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("nested").join(CONFIG_FILE_NAME);

        let config = CliConfig {
            version: 1,
            database_path: Some(" /var/lib/filelink.db ".to_string()),
            default_account: Some(" account1 ".to_string()),
            messages_path: Some("   ".to_string()),
        };

        config.save_to_path(&path).unwrap();
        let loaded = CliConfig::load_from_path(&path).unwrap();
        assert_eq!(
            loaded,
            CliConfig {
                version: 1,
                database_path: Some("/var/lib/filelink.db".to_string()),
                default_account: Some("account1".to_string()),
                messages_path: None,
            }
        );
    }

    #[test]
    fn load_missing_file_returns_default() {
        let tmp = tempfile::tempdir().unwrap();
        let loaded = CliConfig::load_from_path(&tmp.path().join("absent.json")).unwrap();
        assert_eq!(loaded, CliConfig::default());
    }

    #[test]
    fn load_rejects_malformed_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "{ not json").unwrap();

        let error = CliConfig::load_from_path(&path).unwrap_err();
        assert!(error.contains("Failed to parse config"));
    }

    #[test]
    fn resolve_account_prefers_explicit_then_env_then_config() {
        let config = CliConfig {
            default_account: Some("from-config".to_string()),
            ..CliConfig::default()
        };
        let env = lookup_from(HashMap::from([(ENV_ACCOUNT, "from-env")]));
        let no_env = lookup_from(HashMap::new());

        assert_eq!(
            config.resolve_account(Some("explicit".to_string()), &env),
            Some("explicit".to_string())
        );
        assert_eq!(
            config.resolve_account(Some("  ".to_string()), &env),
            Some("from-env".to_string())
        );
        assert_eq!(
            config.resolve_account(None, &no_env),
            Some("from-config".to_string())
        );
        assert_eq!(CliConfig::default().resolve_account(None, &no_env), None);
    }

    #[test]
    fn resolve_database_path_falls_back_to_default() {
        let no_env = lookup_from(HashMap::new());
        assert_eq!(
            CliConfig::default().resolve_database_path(None, &no_env),
            default_database_path()
        );

        let env = lookup_from(HashMap::from([(ENV_DB_PATH, "/tmp/env.db")]));
        assert_eq!(
            CliConfig::default().resolve_database_path(None, &env),
            PathBuf::from("/tmp/env.db")
        );
        assert_eq!(
            CliConfig::default().resolve_database_path(Some(PathBuf::from("/tmp/flag.db")), &env),
            PathBuf::from("/tmp/flag.db")
        );
    }

    #[test]
    fn resolve_messages_path_reads_config() {
        let config = CliConfig {
            messages_path: Some("/opt/filelink/_locales/de/messages.json".to_string()),
            ..CliConfig::default()
        };
        let no_env = lookup_from(HashMap::new());
        assert_eq!(
            config.resolve_messages_path(None, &no_env),
            Some(PathBuf::from("/opt/filelink/_locales/de/messages.json"))
        );
    }
}
