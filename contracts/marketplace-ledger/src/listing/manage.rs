//! Owner-gated listing transitions.
//!
//! Each entry point validates what it can locally, asks the registry for the
//! current owner via `nft_token`, and finishes in an `on_*_checked` callback.
//! Callbacks return `Err` before touching state, so a rejection fails the
//! receipt and leaves the listing exactly as it was.

use crate::external::*;
use crate::guards::*;
use crate::*;

fn owned_by(token: Option<Token>, account_id: &AccountId) -> Option<Token> {
    token.filter(|token| &token.owner_id == account_id)
}

#[near]
impl Contract {
    /// Requires exactly 1 yoctoNEAR. The marketplace must already hold a NEP-178
    /// approval on the token, and the caller's storage balance must cover the
    /// listing's bytes.
    #[payable]
    #[handle_result]
    pub fn list_item(
        &mut self,
        collection_id: AccountId,
        token_id: String,
        price: U128,
    ) -> Result<Promise, MarketplaceError> {
        check_one_yocto()?;
        check_token_id(&token_id)?;

        let listing_id = Contract::make_listing_id(&collection_id, &token_id);
        if self.listings.contains_key(&listing_id) {
            return Err(MarketplaceError::already_listed(&collection_id, &token_id));
        }
        if self.pending_purchases.contains_key(&listing_id) {
            return Err(MarketplaceError::sale_in_progress(&collection_id, &token_id));
        }

        let seller_id = env::predecessor_account_id();
        Ok(self
            .query_registry_token(&collection_id, &token_id)
            .then(
                ext_self::ext(env::current_account_id())
                    .with_static_gas(self.gas_config.callback_gas())
                    .on_listing_checked(collection_id, token_id, price, seller_id),
            ))
    }

    #[private]
    #[handle_result]
    pub fn on_listing_checked(
        &mut self,
        collection_id: AccountId,
        token_id: String,
        price: U128,
        seller_id: AccountId,
    ) -> Result<(), MarketplaceError> {
        let token = owned_by(read_registry_token()?, &seller_id)
            .ok_or_else(|| MarketplaceError::not_owner(&collection_id, &token_id))?;
        if price.0 == 0 {
            return Err(MarketplaceError::PriceMustBeAboveZero);
        }
        let approval_id = token
            .approval_for(&env::current_account_id())
            .ok_or_else(|| MarketplaceError::not_approved(&collection_id, &token_id))?;

        // Re-checked: another listing or purchase may have landed while the registry answered.
        let listing_id = Contract::make_listing_id(&collection_id, &token_id);
        if self.listings.contains_key(&listing_id) {
            return Err(MarketplaceError::already_listed(&collection_id, &token_id));
        }
        if self.pending_purchases.contains_key(&listing_id) {
            return Err(MarketplaceError::sale_in_progress(&collection_id, &token_id));
        }

        let before = self.storage_usage_flushed();
        self.listings.insert(
            listing_id.clone(),
            Listing {
                seller_id: seller_id.clone(),
                price,
                approval_id,
            },
        );
        let bytes_used = self.storage_usage_flushed().saturating_sub(before);
        if let Err(e) = self.charge_storage(&seller_id, bytes_used) {
            self.listings.remove(&listing_id);
            return Err(e);
        }

        events::emit_item_listed(&seller_id, &collection_id, &token_id, price);
        Ok(())
    }

    /// Requires exactly 1 yoctoNEAR. Only the current registry owner may cancel.
    #[payable]
    #[handle_result]
    pub fn cancel_listing(
        &mut self,
        collection_id: AccountId,
        token_id: String,
    ) -> Result<Promise, MarketplaceError> {
        check_one_yocto()?;
        check_token_id(&token_id)?;

        let caller_id = env::predecessor_account_id();
        Ok(self
            .query_registry_token(&collection_id, &token_id)
            .then(
                ext_self::ext(env::current_account_id())
                    .with_static_gas(self.gas_config.callback_gas())
                    .on_cancel_checked(collection_id, token_id, caller_id),
            ))
    }

    #[private]
    #[handle_result]
    pub fn on_cancel_checked(
        &mut self,
        collection_id: AccountId,
        token_id: String,
        caller_id: AccountId,
    ) -> Result<(), MarketplaceError> {
        if owned_by(read_registry_token()?, &caller_id).is_none() {
            return Err(MarketplaceError::not_owner(&collection_id, &token_id));
        }

        let listing_id = Contract::make_listing_id(&collection_id, &token_id);
        let before = self.storage_usage_flushed();
        let listing = self
            .listings
            .remove(&listing_id)
            .ok_or_else(|| MarketplaceError::not_listed(&collection_id, &token_id))?;
        let bytes_freed = before.saturating_sub(self.storage_usage_flushed());
        self.release_storage(&listing.seller_id, bytes_freed);

        events::emit_item_canceled(&listing.seller_id, &collection_id, &token_id);
        Ok(())
    }

    /// Requires exactly 1 yoctoNEAR. Reprices an existing listing; emits
    /// `item_listed` with the new price.
    #[payable]
    #[handle_result]
    pub fn update_listing(
        &mut self,
        collection_id: AccountId,
        token_id: String,
        new_price: U128,
    ) -> Result<Promise, MarketplaceError> {
        check_one_yocto()?;
        check_token_id(&token_id)?;

        let caller_id = env::predecessor_account_id();
        Ok(self
            .query_registry_token(&collection_id, &token_id)
            .then(
                ext_self::ext(env::current_account_id())
                    .with_static_gas(self.gas_config.callback_gas())
                    .on_update_checked(collection_id, token_id, new_price, caller_id),
            ))
    }

    #[private]
    #[handle_result]
    pub fn on_update_checked(
        &mut self,
        collection_id: AccountId,
        token_id: String,
        new_price: U128,
        caller_id: AccountId,
    ) -> Result<(), MarketplaceError> {
        let token = owned_by(read_registry_token()?, &caller_id)
            .ok_or_else(|| MarketplaceError::not_owner(&collection_id, &token_id))?;

        let marketplace_id = env::current_account_id();
        let listing_id = Contract::make_listing_id(&collection_id, &token_id);
        let listing = self
            .listings
            .get_mut(&listing_id)
            .ok_or_else(|| MarketplaceError::not_listed(&collection_id, &token_id))?;
        if new_price.0 == 0 {
            return Err(MarketplaceError::PriceMustBeAboveZero);
        }

        listing.price = new_price;
        // A token that changed hands keeps the old approval so the purchase cannot move it.
        if token.owner_id == listing.seller_id {
            if let Some(approval_id) = token.approval_for(&marketplace_id) {
                listing.approval_id = approval_id;
            }
        }
        let seller_id = listing.seller_id.clone();

        events::emit_item_listed(&seller_id, &collection_id, &token_id, new_price);
        Ok(())
    }
}
