use crate::*;

#[near]
impl Contract {
    pub fn get_listing(&self, collection_id: AccountId, token_id: String) -> ListingState {
        let listing_id = Contract::make_listing_id(&collection_id, &token_id);
        ListingState::from(self.listings.get(&listing_id))
    }

    /// Full stored record, including the approval id the purchase transfer will present.
    pub fn get_listing_record(&self, collection_id: AccountId, token_id: String) -> Option<Listing> {
        let listing_id = Contract::make_listing_id(&collection_id, &token_id);
        self.listings.get(&listing_id).cloned()
    }
}
