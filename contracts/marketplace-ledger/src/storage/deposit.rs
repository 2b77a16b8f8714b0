use crate::guards::check_one_yocto;
use crate::*;

#[near]
impl Contract {
    /// Credits the attached deposit to `account_id`, or to the caller when unset.
    #[payable]
    #[handle_result]
    pub fn storage_deposit(
        &mut self,
        account_id: Option<AccountId>,
    ) -> Result<StorageBalanceView, MarketplaceError> {
        let storage_account_id = account_id.unwrap_or_else(env::predecessor_account_id);
        let deposit = env::attached_deposit().as_yoctonear();
        if deposit == 0 {
            return Err(MarketplaceError::InsufficientDeposit(
                "Requires attached deposit of at least 1 yoctoNEAR".to_string(),
            ));
        }

        let mut account = self.storage_account_of(&storage_account_id);
        account.balance = account
            .balance
            .checked_add(deposit)
            .ok_or_else(|| MarketplaceError::InternalError("storage balance overflow".to_string()))?;
        let view = StorageBalanceView::from(&account);
        self.storage_accounts.insert(storage_account_id.clone(), account);

        events::emit_storage_deposit(&storage_account_id, deposit, view.total.0);
        Ok(view)
    }

    /// Requires exactly 1 yoctoNEAR. Pays out everything not reserved by live listings.
    #[payable]
    #[handle_result]
    pub fn storage_withdraw(&mut self) -> Result<Promise, MarketplaceError> {
        check_one_yocto()?;
        let account_id = env::predecessor_account_id();
        let mut account = self.storage_account_of(&account_id);

        let available = account.available();
        if available == 0 {
            return Err(MarketplaceError::InvalidState(
                "No storage available to withdraw".to_string(),
            ));
        }

        account.balance -= available;
        let new_balance = account.balance;
        if account.used_bytes == 0 && new_balance == 0 {
            self.storage_accounts.remove(&account_id);
        } else {
            self.storage_accounts.insert(account_id.clone(), account);
        }

        events::emit_storage_withdraw(&account_id, available, new_balance);
        Ok(Promise::new(account_id).transfer(NearToken::from_yoctonear(available)))
    }

    pub fn storage_balance_of(&self, account_id: AccountId) -> StorageBalanceView {
        StorageBalanceView::from(&self.storage_account_of(&account_id))
    }
}
