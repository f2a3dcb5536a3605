use std::path::{Path, PathBuf};

use filelink_core::db::{Database, LibSqlAccountHost, LibSqlAccountStore};
use filelink_core::i18n::{JsonMessageCatalog, Localizer};
use filelink_core::util::mask_secret;
use filelink_core::{AccountId, Field, FormFields, SettingsForm, StatusMessage};
use serde::Serialize;

use crate::cli_config::CliConfig;
use crate::error::CliError;

pub type CliForm<'a> = SettingsForm<LibSqlAccountStore<'a>, LibSqlAccountHost<'a>>;

/// Paths and account resolved from flags, environment, and config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Context {
    pub db_path: PathBuf,
    pub account: Option<String>,
    pub messages_path: Option<PathBuf>,
}

impl Context {
    pub fn resolve(
        config: &CliConfig,
        account: Option<String>,
        db_path: Option<PathBuf>,
        messages_path: Option<PathBuf>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Self {
        Self {
            db_path: config.resolve_database_path(db_path, &lookup),
            account: config.resolve_account(account, &lookup),
            messages_path: config.resolve_messages_path(messages_path, &lookup),
        }
    }

    pub fn account_id(&self) -> Result<AccountId, CliError> {
        let account = self.account.as_deref().ok_or(CliError::AccountNotSelected)?;
        Ok(AccountId::new(account)?)
    }
}

/// Account named on the command line. A settings page URL wins over a bare id.
pub fn explicit_account(
    account: Option<String>,
    page_url: Option<&str>,
) -> Result<Option<String>, CliError> {
    let Some(page_url) = page_url else {
        return Ok(account);
    };
    let account_id = AccountId::from_page_url(page_url)?;
    tracing::debug!(account_id = %account_id, "Account selected from page URL");
    Ok(Some(account_id.to_string()))
}

#[derive(Debug, Serialize)]
pub struct SettingsView {
    pub account_id: String,
    pub configured: bool,
    pub status: StatusMessage,
    pub endpoint: String,
    pub region: String,
    pub bucket: String,
    pub prefix: String,
    pub access_key: String,
    pub secret_key: String,
}

pub async fn open_database(db_path: &Path) -> Result<Database, CliError> {
    Ok(Database::open(db_path).await?)
}

pub fn load_localizer(messages_path: Option<&Path>) -> Result<Localizer, CliError> {
    let Some(path) = messages_path else {
        return Ok(Localizer::english());
    };

    let catalog = JsonMessageCatalog::load(path).map_err(|error| {
        CliError::Config(format!(
            "Failed to load message catalog {}: {error}",
            path.display()
        ))
    })?;
    tracing::debug!("Loaded {} messages from {}", catalog.len(), path.display());
    Ok(Localizer::new(catalog))
}

pub fn open_form<'a>(db: &'a Database, account_id: AccountId, localizer: Localizer) -> CliForm<'a> {
    SettingsForm::new(
        account_id,
        LibSqlAccountStore::new(db.connection()),
        LibSqlAccountHost::new(db.connection()),
        localizer,
    )
}

/// Display value of a field; secrets are masked.
pub fn display_value(fields: &FormFields, field: Field) -> String {
    let value = fields.get(field);
    if field.is_secret() {
        mask_secret(value)
    } else {
        value.to_string()
    }
}

pub fn settings_view(
    account_id: &AccountId,
    configured: bool,
    status: StatusMessage,
    fields: &FormFields,
) -> SettingsView {
    SettingsView {
        account_id: account_id.to_string(),
        configured,
        status,
        endpoint: display_value(fields, Field::Endpoint),
        region: display_value(fields, Field::Region),
        bucket: display_value(fields, Field::Bucket),
        prefix: display_value(fields, Field::Prefix),
        access_key: display_value(fields, Field::AccessKey),
        secret_key: display_value(fields, Field::SecretKey),
    }
}

pub fn format_status_line(status: &StatusMessage) -> String {
    format!("[{}] {}", status.kind.as_str(), status.text)
}

/// One `label  value` line per field, using catalog labels when available.
pub fn format_field_lines(fields: &FormFields, localizer: &Localizer) -> Vec<String> {
    let labels = localizer.localize_elements(Field::ALL.map(Field::label_key));

    Field::ALL
        .into_iter()
        .map(|field| {
            let label = labels
                .iter()
                .find(|(key, _)| *key == field.label_key())
                .map_or_else(|| field.name().to_string(), |(_, label)| label.clone());
            let value = display_value(fields, field);
            if value.is_empty() {
                format!("{label:<12}  -")
            } else {
                format!("{label:<12}  {value}")
            }
        })
        .collect()
}
