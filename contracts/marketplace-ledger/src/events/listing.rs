use near_sdk::AccountId;
use near_sdk::json_types::U128;

use super::LISTING;
use super::builder::EventBuilder;

// --- LISTING_UPDATE ---

/// Emitted on creation and on every price update.
pub fn emit_item_listed(seller_id: &AccountId, collection_id: &AccountId, token_id: &str, price: U128) {
    EventBuilder::new(LISTING, "item_listed", seller_id)
        .field("seller_id", seller_id)
        .field("collection_id", collection_id)
        .field("token_id", token_id)
        .field("price", price)
        .emit();
}

pub fn emit_item_canceled(seller_id: &AccountId, collection_id: &AccountId, token_id: &str) {
    EventBuilder::new(LISTING, "item_canceled", seller_id)
        .field("seller_id", seller_id)
        .field("collection_id", collection_id)
        .field("token_id", token_id)
        .emit();
}

pub fn emit_item_bought(
    buyer_id: &AccountId,
    seller_id: &AccountId,
    collection_id: &AccountId,
    token_id: &str,
    price: U128,
    payment: U128,
) {
    EventBuilder::new(LISTING, "item_bought", buyer_id)
        .field("buyer_id", buyer_id)
        .field("seller_id", seller_id)
        .field("collection_id", collection_id)
        .field("token_id", token_id)
        .field("price", price)
        .field("payment", payment)
        .emit();
}

pub fn emit_purchase_failed(
    buyer_id: &AccountId,
    seller_id: &AccountId,
    collection_id: &AccountId,
    token_id: &str,
    price: U128,
    reason: String,
) {
    EventBuilder::new(LISTING, "purchase_failed", buyer_id)
        .field("buyer_id", buyer_id)
        .field("seller_id", seller_id)
        .field("collection_id", collection_id)
        .field("token_id", token_id)
        .field("price", price)
        .field("reason", reason)
        .emit();
}
