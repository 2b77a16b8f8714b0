use crate::*;

impl Contract {
    pub(crate) fn make_listing_id(collection_id: &AccountId, token_id: &str) -> String {
        format!("{}{}{}", collection_id, DELIMETER, token_id)
    }

    /// Owner lookup on the registry; every owner-gated transition starts here.
    pub(crate) fn query_registry_token(&self, collection_id: &AccountId, token_id: &str) -> Promise {
        external::ext_registry::ext(collection_id.clone())
            .with_static_gas(self.gas_config.view_gas())
            .nft_token(token_id.to_string())
    }
}
