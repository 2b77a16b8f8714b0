use crate::external::*;
use crate::guards::*;
use crate::*;

#[near]
impl Contract {
    /// Requires exactly 1 yoctoNEAR. Pays out everything not held by an
    /// unresolved purchase; the balance is debited before the transfer is issued.
    #[payable]
    #[handle_result]
    pub fn withdraw_proceeds(&mut self) -> Result<Promise, MarketplaceError> {
        check_one_yocto()?;

        let seller_id = env::predecessor_account_id();
        let mut entry = self.proceeds_of(&seller_id);
        if entry.balance == 0 {
            return Err(MarketplaceError::NoProceeds);
        }
        let amount = entry.withdrawable();
        if amount == 0 {
            return Err(MarketplaceError::ProceedsLocked {
                pending: U128(entry.pending),
            });
        }

        entry.balance -= amount;
        self.store_proceeds(&seller_id, entry);

        Ok(Promise::new(seller_id.clone())
            .transfer(NearToken::from_yoctonear(amount))
            .then(
                ext_self::ext(env::current_account_id())
                    .with_static_gas(self.gas_config.callback_gas())
                    .on_proceeds_withdrawn(seller_id, U128(amount)),
            ))
    }

    /// Only callable by this contract. Must not panic: a failed payout restores
    /// the debited amount and reports `false`.
    #[private]
    pub fn on_proceeds_withdrawn(&mut self, seller_id: AccountId, amount: U128) -> bool {
        if upstream_succeeded() {
            events::emit_proceeds_withdrawn(&seller_id, amount.0);
            return true;
        }

        let mut entry = self.proceeds_of(&seller_id);
        entry.balance = entry.balance.saturating_add(amount.0);
        self.store_proceeds(&seller_id, entry);

        let reason = MarketplaceError::TransferFailed(format!(
            "payout of {} yoctoNEAR to {} failed",
            amount.0, seller_id
        ));
        events::emit_withdraw_failed(&seller_id, amount.0, reason.to_string());
        false
    }

    pub fn get_proceeds(&self, seller_id: AccountId) -> U128 {
        U128(self.proceeds_of(&seller_id).balance)
    }

    pub fn get_proceeds_breakdown(&self, seller_id: AccountId) -> ProceedsView {
        ProceedsView::from(&self.proceeds_of(&seller_id))
    }
}
