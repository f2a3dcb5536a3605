//! Per-account storage settings repository

use crate::error::Result;
use crate::models::{AccountId, AccountStorageConfig};
use crate::util::unix_timestamp_millis_now;
use libsql::{params, Connection};

/// Key-value storage of account settings, keyed by account identifier (async)
#[allow(async_fn_in_trait)]
pub trait AccountStore {
    /// Read the stored record for an account, if one exists
    async fn get(&self, account_id: &AccountId) -> Result<Option<AccountStorageConfig>>;

    /// Write the full record for an account, replacing any previous one
    async fn set(&self, account_id: &AccountId, config: &AccountStorageConfig) -> Result<()>;
}

/// libSQL implementation of `AccountStore`
pub struct LibSqlAccountStore<'a> {
    conn: &'a Connection,
}

impl<'a> LibSqlAccountStore<'a> {
    /// Create a new store with the given connection
    pub const fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }
}

impl AccountStore for LibSqlAccountStore<'_> {
    async fn get(&self, account_id: &AccountId) -> Result<Option<AccountStorageConfig>> {
        tracing::debug!(account_id = %account_id, "Reading account storage settings");

        let mut rows = self
            .conn
            .query(
                "SELECT config FROM account_storage WHERE account_id = ?1",
                [account_id.as_str()],
            )
            .await?;

        let Some(row) = rows.next().await? else {
            return Ok(None);
        };

        let raw: String = row.get(0)?;
        Ok(Some(serde_json::from_str(&raw)?))
    }

    async fn set(&self, account_id: &AccountId, config: &AccountStorageConfig) -> Result<()> {
        tracing::debug!(account_id = %account_id, "Writing account storage settings");

        let serialized = serde_json::to_string(config)?;
        self.conn
            .execute(
                "INSERT OR REPLACE INTO account_storage (account_id, config, updated_at)
                 VALUES (?1, ?2, ?3)",
                params![account_id.as_str(), serialized, unix_timestamp_millis_now()],
            )
            .await?;
        Ok(())
    }
}
