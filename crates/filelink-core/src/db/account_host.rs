//! libSQL-backed account registry

use crate::error::Result;
use crate::host::AccountHost;
use crate::models::{AccountId, AccountUpdate};
use crate::util::unix_timestamp_millis_now;
use libsql::{params, Connection};

/// libSQL implementation of `AccountHost`
pub struct LibSqlAccountHost<'a> {
    conn: &'a Connection,
}

impl<'a> LibSqlAccountHost<'a> {
    /// Create a new host registry with the given connection
    pub const fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Whether the account has been marked configured. Unknown accounts are not.
    pub async fn is_configured(&self, account_id: &AccountId) -> Result<bool> {
        let mut rows = self
            .conn
            .query(
                "SELECT configured FROM accounts WHERE account_id = ?1",
                [account_id.as_str()],
            )
            .await?;

        if let Some(row) = rows.next().await? {
            Ok(row.get::<i64>(0)? != 0)
        } else {
            Ok(false)
        }
    }
}

impl AccountHost for LibSqlAccountHost<'_> {
    async fn update_account(&self, account_id: &AccountId, update: AccountUpdate) -> Result<()> {
        tracing::debug!(
            account_id = %account_id,
            configured = update.configured,
            "Updating host account state"
        );

        self.conn
            .execute(
                "INSERT INTO accounts (account_id, configured, updated_at) VALUES (?1, ?2, ?3)
                 ON CONFLICT(account_id) DO UPDATE SET
                     configured = excluded.configured,
                     updated_at = excluded.updated_at",
                params![
                    account_id.as_str(),
                    i64::from(update.configured),
                    unix_timestamp_millis_now()
                ],
            )
            .await?;
        Ok(())
    }
}
