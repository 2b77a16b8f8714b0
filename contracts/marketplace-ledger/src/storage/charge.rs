use crate::*;

use super::types::storage_byte_cost;

impl Contract {
    pub(crate) fn storage_account_of(&self, account_id: &AccountId) -> StorageAccount {
        self.storage_accounts
            .get(account_id)
            .cloned()
            .unwrap_or_default()
    }

    // Cached collection writes must reach the trie before usage is read.
    pub(crate) fn storage_usage_flushed(&mut self) -> u64 {
        self.listings.flush();
        self.pending_purchases.flush();
        self.proceeds.flush();
        self.storage_accounts.flush();
        env::storage_usage()
    }

    /// `bytes_used` must be the `storage_usage_flushed` delta of the write being paid for.
    pub(crate) fn charge_storage(
        &mut self,
        account_id: &AccountId,
        bytes_used: u64,
    ) -> Result<(), MarketplaceError> {
        if bytes_used == 0 {
            return Ok(());
        }

        let mut account = self.storage_account_of(account_id);
        let cost = (bytes_used as u128) * storage_byte_cost();
        if account.available() < cost {
            return Err(MarketplaceError::InsufficientStorage(format!(
                "Need {} yoctoNEAR ({} bytes), {} available. Call storage_deposit first.",
                cost,
                bytes_used,
                account.available()
            )));
        }

        account.used_bytes += bytes_used;
        self.storage_accounts.insert(account_id.clone(), account);
        Ok(())
    }

    pub(crate) fn release_storage(&mut self, account_id: &AccountId, bytes_freed: u64) {
        if bytes_freed == 0 {
            return;
        }
        if let Some(account) = self.storage_accounts.get_mut(account_id) {
            account.used_bytes = account.used_bytes.saturating_sub(bytes_freed);
        }
    }
}
