//! Settings form controller
//!
//! Holds the editable state of the account settings page for one account and
//! drives the load and save flows against the host storage and the account
//! registry. All failures end up in the status banner; nothing propagates.

use crate::db::AccountStore;
use crate::host::AccountHost;
use crate::i18n::{self, Localizer};
use crate::models::{AccountId, AccountStorageConfig, AccountUpdate, Field, FormFields};
use crate::status::StatusMessage;
use crate::validation::{
    is_valid_bucket, is_valid_endpoint, validate_for_save, ValidationError,
};

const TEXT_PLEASE_CONFIGURE: &str = "Please configure your S3 settings below";
const TEXT_LOADED: &str = "Configuration loaded successfully";
const TEXT_LOAD_ERROR: &str = "Error loading existing configuration";
const TEXT_REQUIRED_FIELDS: &str = "Please fill in all required fields";
const TEXT_INVALID_ENDPOINT: &str = "Invalid endpoint format";
const TEXT_INVALID_BUCKET: &str = "Invalid bucket name format";
const TEXT_INVALID_ENDPOINT_HINT: &str =
    "Invalid endpoint format. Use format like: s3.amazonaws.com";
const TEXT_INVALID_BUCKET_HINT: &str =
    "Invalid bucket name. Use lowercase letters, numbers, and hyphens only";
const TEXT_SAVING: &str = "Saving configuration...";
const TEXT_SAVED: &str =
    "Configuration saved successfully! You can now use S3 FileLink in Thunderbird.";
const TEXT_SAVE_ERROR: &str = "Error saving configuration. Please try again.";
const TEXT_BUTTON_SAVE: &str = "Save Configuration";
const TEXT_BUTTON_SAVING: &str = "Saving...";

/// Editable settings page for a single account.
pub struct SettingsForm<S, H> {
    account_id: AccountId,
    store: S,
    host: H,
    localizer: Localizer,
    fields: FormFields,
    status: Option<StatusMessage>,
    disabled: bool,
}

impl<S: AccountStore, H: AccountHost> SettingsForm<S, H> {
    pub fn new(account_id: AccountId, store: S, host: H, localizer: Localizer) -> Self {
        Self {
            account_id,
            store,
            host,
            localizer,
            fields: FormFields::default(),
            status: None,
            disabled: false,
        }
    }

    pub const fn account_id(&self) -> &AccountId {
        &self.account_id
    }

    pub const fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub const fn store(&self) -> &S {
        &self.store
    }

    pub const fn host(&self) -> &H {
        &self.host
    }

    pub const fn localizer(&self) -> &Localizer {
        &self.localizer
    }

    /// Banner currently on display, if any.
    pub const fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    /// Whether inputs and the save button are disabled.
    pub const fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn save_button_label(&self) -> String {
        if self.disabled {
            self.localizer.text(i18n::BUTTON_SAVING, TEXT_BUTTON_SAVING)
        } else {
            self.localizer.text(i18n::BUTTON_SAVE, TEXT_BUTTON_SAVE)
        }
    }

    /// Hide the banner (e.g. once a success banner's dismiss delay elapsed).
    pub fn dismiss_status(&mut self) {
        self.status = None;
    }

    /// Edit a field. Returns `false` and leaves the value untouched while the
    /// form is disabled.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) -> bool {
        if self.disabled {
            return false;
        }
        self.fields.set(field, value);
        true
    }

    /// Populate the form from the stored record for this account.
    pub async fn load(&mut self) -> StatusMessage {
        let result = self.store.get(&self.account_id).await;
        match result {
            Ok(None) => {
                let text = self
                    .localizer
                    .text(i18n::STATUS_PLEASE_CONFIGURE, TEXT_PLEASE_CONFIGURE);
                self.show(StatusMessage::info(text))
            }
            Ok(Some(config)) => {
                self.fields = FormFields::from(&config);
                let text = self.localizer.text(i18n::STATUS_LOADED, TEXT_LOADED);
                self.show(StatusMessage::success(text))
            }
            Err(error) => {
                tracing::error!(
                    account_id = %self.account_id,
                    "Error loading account data: {error}"
                );
                let text = self.localizer.text(i18n::STATUS_LOAD_ERROR, TEXT_LOAD_ERROR);
                self.show(StatusMessage::error(text))
            }
        }
    }

    /// Field-level check run when a field loses focus.
    ///
    /// Flags malformed endpoint and bucket values and slash-terminates the
    /// prefix. Empty values are left alone.
    pub fn blur(&mut self, field: Field) -> Option<StatusMessage> {
        let value = self.fields.trimmed(field).to_string();
        if value.is_empty() {
            return None;
        }

        match field {
            Field::Endpoint if !is_valid_endpoint(&value) => {
                let text = self
                    .localizer
                    .text(i18n::STATUS_INVALID_ENDPOINT_HINT, TEXT_INVALID_ENDPOINT_HINT);
                Some(self.show(StatusMessage::error(text)))
            }
            Field::Bucket if !is_valid_bucket(&value) => {
                let text = self
                    .localizer
                    .text(i18n::STATUS_INVALID_BUCKET_HINT, TEXT_INVALID_BUCKET_HINT);
                Some(self.show(StatusMessage::error(text)))
            }
            Field::Prefix if !value.ends_with('/') => {
                self.fields.set(Field::Prefix, format!("{value}/"));
                None
            }
            _ => None,
        }
    }

    /// Validate, persist the full record, then mark the account configured.
    ///
    /// Invalid input never reaches the store. Runs [`Self::begin_save`],
    /// [`Self::persist`] and [`Self::finish_save`] in sequence; front-ends
    /// that render the busy state between those steps call them directly.
    pub async fn save(&mut self) -> StatusMessage {
        let config = match self.begin_save() {
            Ok(config) => config,
            Err(status) => return status,
        };
        let result = self.persist(&config).await;
        self.finish_save(result)
    }

    /// Validate the fields and enter the busy state.
    ///
    /// On success the form is disabled, the "saving" banner is shown and the
    /// normalized record is returned for [`Self::persist`]. A validation
    /// failure leaves the form enabled and returns the error banner.
    pub fn begin_save(&mut self) -> Result<AccountStorageConfig, StatusMessage> {
        let config = validate_for_save(&self.fields).map_err(|error| {
            tracing::debug!(account_id = %self.account_id, "Settings rejected: {error}");
            let status = self.validation_status(&error);
            self.show(status)
        })?;

        self.disabled = true;
        let text = self.localizer.text(i18n::STATUS_SAVING, TEXT_SAVING);
        self.show(StatusMessage::info(text));
        Ok(config)
    }

    /// Write the whole record, then report the account as configured.
    ///
    /// The host is only called once the store write succeeded.
    pub async fn persist(&self, config: &AccountStorageConfig) -> crate::Result<()> {
        self.store.set(&self.account_id, config).await?;
        self.host
            .update_account(&self.account_id, AccountUpdate::configured())
            .await
    }

    /// Leave the busy state and show the outcome of [`Self::persist`].
    pub fn finish_save(&mut self, result: crate::Result<()>) -> StatusMessage {
        self.disabled = false;

        match result {
            Ok(()) => {
                tracing::info!(account_id = %self.account_id, "Account storage settings saved");
                let text = self.localizer.text(i18n::STATUS_SAVED, TEXT_SAVED);
                self.show(StatusMessage::success(text))
            }
            Err(error) => {
                tracing::error!(
                    account_id = %self.account_id,
                    "Error saving configuration: {error}"
                );
                let text = self.localizer.text(i18n::STATUS_SAVE_ERROR, TEXT_SAVE_ERROR);
                self.show(StatusMessage::error(text))
            }
        }
    }

    fn validation_status(&self, error: &ValidationError) -> StatusMessage {
        let text = match error {
            ValidationError::MissingRequired(_) => self
                .localizer
                .text(i18n::STATUS_REQUIRED_FIELDS, TEXT_REQUIRED_FIELDS),
            ValidationError::InvalidEndpoint(_) => self
                .localizer
                .text(i18n::STATUS_INVALID_ENDPOINT, TEXT_INVALID_ENDPOINT),
            ValidationError::InvalidBucket(_) => self
                .localizer
                .text(i18n::STATUS_INVALID_BUCKET, TEXT_INVALID_BUCKET),
        };
        StatusMessage::error(text)
    }

    fn show(&mut self, status: StatusMessage) -> StatusMessage {
        self.status = Some(status.clone());
        status
    }
}
