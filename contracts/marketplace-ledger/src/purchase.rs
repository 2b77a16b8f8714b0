//! Purchase of a listed item.
//!
//! `buy_item` applies every ledger effect before the registry transfer is
//! issued: the seller is credited the full payment, the listing is removed and
//! a `PendingPurchase` marks the item as in flight. `on_purchase_resolved`
//! either settles the credit or undoes all three effects and refunds the buyer.
//! The listing's storage stays charged to the seller until the purchase settles;
//! a rollback restores the listing under that same charge.

use crate::external::*;
use crate::*;

/// In-flight purchase; keyed like the listing it replaced.
#[near(serializers = [borsh, json])]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingPurchase {
    pub seller_id: AccountId,
    pub buyer_id: AccountId,
    pub price: U128,
    /// Full attached deposit; credited to the seller, excess included.
    pub payment: U128,
    pub approval_id: u64,
    /// Bytes of the removed listing, still charged to the seller.
    pub storage_bytes: u64,
}

#[near]
impl Contract {
    /// Attached deposit is the payment and must be at least the listed price.
    /// Any excess is credited to the seller, not refunded.
    #[payable]
    #[handle_result]
    pub fn buy_item(
        &mut self,
        collection_id: AccountId,
        token_id: String,
    ) -> Result<Promise, MarketplaceError> {
        let listing_id = Contract::make_listing_id(&collection_id, &token_id);
        let listing = self
            .listings
            .get(&listing_id)
            .cloned()
            .ok_or_else(|| MarketplaceError::not_listed(&collection_id, &token_id))?;

        let payment = env::attached_deposit().as_yoctonear();
        if payment < listing.price.0 {
            return Err(MarketplaceError::price_not_met(
                &collection_id,
                &token_id,
                listing.price.0,
            ));
        }

        let buyer_id = env::predecessor_account_id();

        self.credit_pending_proceeds(&listing.seller_id, payment)?;
        let before = self.storage_usage_flushed();
        self.listings.remove(&listing_id);
        let storage_bytes = before.saturating_sub(self.storage_usage_flushed());
        self.pending_purchases.insert(
            listing_id,
            PendingPurchase {
                seller_id: listing.seller_id.clone(),
                buyer_id: buyer_id.clone(),
                price: listing.price,
                payment: U128(payment),
                approval_id: listing.approval_id,
                storage_bytes,
            },
        );

        Ok(ext_registry::ext(collection_id.clone())
            .with_static_gas(self.gas_config.transfer_gas())
            .with_attached_deposit(ONE_YOCTO)
            .nft_transfer(
                buyer_id,
                token_id.clone(),
                Some(listing.approval_id),
                Some(PURCHASE_MEMO.to_string()),
            )
            .then(
                ext_self::ext(env::current_account_id())
                    .with_static_gas(self.gas_config.callback_gas())
                    .on_purchase_resolved(collection_id, token_id),
            ))
    }

    /// Only callable by this contract. Must not panic: the buyer's payment is
    /// already held here, so failure rolls the ledger back and refunds instead.
    #[private]
    pub fn on_purchase_resolved(&mut self, collection_id: AccountId, token_id: String) -> bool {
        let listing_id = Contract::make_listing_id(&collection_id, &token_id);
        let Some(pending) = self.pending_purchases.remove(&listing_id) else {
            env::log_str(&format!(
                "Purchase resolution skipped: no pending purchase for {}",
                listing_id
            ));
            return false;
        };

        if upstream_succeeded() {
            self.release_pending_proceeds(&pending.seller_id, pending.payment.0);
            self.release_storage(&pending.seller_id, pending.storage_bytes);
            events::emit_item_bought(
                &pending.buyer_id,
                &pending.seller_id,
                &collection_id,
                &token_id,
                pending.price,
                pending.payment,
            );
            return true;
        }

        self.revert_pending_proceeds(&pending.seller_id, pending.payment.0);
        self.listings.insert(
            listing_id,
            Listing {
                seller_id: pending.seller_id.clone(),
                price: pending.price,
                approval_id: pending.approval_id,
            },
        );

        if pending.payment.0 > 0 {
            let _ = Promise::new(pending.buyer_id.clone())
                .transfer(NearToken::from_yoctonear(pending.payment.0));
        }

        let reason = MarketplaceError::TransferFailed(format!(
            "registry {} did not transfer {} to {}",
            collection_id, token_id, pending.buyer_id
        ));
        events::emit_purchase_failed(
            &pending.buyer_id,
            &pending.seller_id,
            &collection_id,
            &token_id,
            pending.price,
            reason.to_string(),
        );
        false
    }

    pub fn get_pending_purchase(
        &self,
        collection_id: AccountId,
        token_id: String,
    ) -> Option<PendingPurchase> {
        let listing_id = Contract::make_listing_id(&collection_id, &token_id);
        self.pending_purchases.get(&listing_id).cloned()
    }
}
