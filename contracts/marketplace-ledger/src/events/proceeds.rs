use near_sdk::AccountId;

use super::builder::EventBuilder;
use super::PROCEEDS;

// --- PROCEEDS_UPDATE ---

pub fn emit_proceeds_withdrawn(seller_id: &AccountId, amount: u128) {
    EventBuilder::new(PROCEEDS, "proceeds_withdrawn", seller_id)
        .field("seller_id", seller_id)
        .field("amount", amount)
        .emit();
}

pub fn emit_withdraw_failed(seller_id: &AccountId, amount: u128, reason: String) {
    EventBuilder::new(PROCEEDS, "withdraw_failed", seller_id)
        .field("seller_id", seller_id)
        .field("amount", amount)
        .field("reason", reason)
        .emit();
}
