//! Account-management host callback

use crate::models::{AccountId, AccountUpdate};
use crate::Result;

/// The mail client's account registry, notified after settings are saved (async)
#[allow(async_fn_in_trait)]
pub trait AccountHost {
    /// Update the host's view of an account
    async fn update_account(&self, account_id: &AccountId, update: AccountUpdate) -> Result<()>;
}
