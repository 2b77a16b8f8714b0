use crate::*;

impl Contract {
    pub(crate) fn proceeds_of(&self, seller_id: &AccountId) -> ProceedsBalance {
        self.proceeds.get(seller_id).cloned().unwrap_or_default()
    }

    /// Zeroed entries are dropped so `Absent` and a zero balance look the same.
    pub(crate) fn store_proceeds(&mut self, seller_id: &AccountId, entry: ProceedsBalance) {
        if entry.is_empty() {
            self.proceeds.remove(seller_id);
        } else {
            self.proceeds.insert(seller_id.clone(), entry);
        }
    }

    /// Credits a purchase payment and holds it as pending until the transfer resolves.
    pub(crate) fn credit_pending_proceeds(
        &mut self,
        seller_id: &AccountId,
        amount: u128,
    ) -> Result<(), MarketplaceError> {
        let mut entry = self.proceeds_of(seller_id);
        entry.balance = entry
            .balance
            .checked_add(amount)
            .ok_or_else(|| MarketplaceError::InternalError("Proceeds balance overflow".into()))?;
        entry.pending = entry
            .pending
            .checked_add(amount)
            .ok_or_else(|| MarketplaceError::InternalError("Pending proceeds overflow".into()))?;
        self.store_proceeds(seller_id, entry);
        Ok(())
    }

    /// Transfer succeeded: the credit stays, the hold is lifted.
    pub(crate) fn release_pending_proceeds(&mut self, seller_id: &AccountId, amount: u128) {
        let mut entry = self.proceeds_of(seller_id);
        entry.pending = entry.pending.saturating_sub(amount);
        self.store_proceeds(seller_id, entry);
    }

    /// Transfer failed: undo exactly what `credit_pending_proceeds` added.
    pub(crate) fn revert_pending_proceeds(&mut self, seller_id: &AccountId, amount: u128) {
        let mut entry = self.proceeds_of(seller_id);
        entry.balance = entry.balance.saturating_sub(amount);
        entry.pending = entry.pending.saturating_sub(amount);
        self.store_proceeds(seller_id, entry);
    }
}
