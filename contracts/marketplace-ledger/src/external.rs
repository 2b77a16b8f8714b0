// `#[ext_contract]` generates helper structs that the compiler flags as dead_code
// even though they are used at runtime for cross-contract calls.
#![allow(dead_code)]

use near_sdk::json_types::U128;
use near_sdk::{AccountId, PromiseError, env, ext_contract, near};
use std::collections::HashMap;

use crate::{MAX_TOKEN_RESULT_LEN, MarketplaceError};

/// NEP-171 token as returned by `nft_token`; metadata is ignored.
#[near(serializers = [json])]
#[derive(Clone)]
pub struct Token {
    pub token_id: String,
    pub owner_id: AccountId,
    #[serde(default)]
    pub approved_account_ids: Option<HashMap<AccountId, u64>>,
}

impl Token {
    /// NEP-178 approval id the owner granted to `account_id`, if any.
    pub fn approval_for(&self, account_id: &AccountId) -> Option<u64> {
        self.approved_account_ids
            .as_ref()
            .and_then(|approvals| approvals.get(account_id).copied())
    }
}

/// Ownership registry: any NEP-171 contract with NEP-178 approvals.
#[ext_contract(ext_registry)]
pub trait ExtRegistry {
    fn nft_token(&self, token_id: String) -> Option<Token>;

    fn nft_transfer(
        &mut self,
        receiver_id: AccountId,
        token_id: String,
        approval_id: Option<u64>,
        memo: Option<String>,
    );
}

#[ext_contract(ext_self)]
pub trait ExtSelf {
    fn on_listing_checked(
        &mut self,
        collection_id: AccountId,
        token_id: String,
        price: U128,
        seller_id: AccountId,
    );

    fn on_cancel_checked(&mut self, collection_id: AccountId, token_id: String, caller_id: AccountId);

    fn on_update_checked(
        &mut self,
        collection_id: AccountId,
        token_id: String,
        new_price: U128,
        caller_id: AccountId,
    );

    fn on_purchase_resolved(&mut self, collection_id: AccountId, token_id: String) -> bool;

    fn on_proceeds_withdrawn(&mut self, seller_id: AccountId, amount: U128) -> bool;
}

/// Decodes the single `nft_token` result a registry-checked callback receives.
pub(crate) fn read_registry_token() -> Result<Option<Token>, MarketplaceError> {
    if env::promise_results_count() != 1 {
        return Err(MarketplaceError::RegistryCallFailed(
            "expected 1 promise result".into(),
        ));
    }
    match env::promise_result_checked(0, MAX_TOKEN_RESULT_LEN) {
        Ok(value) => near_sdk::serde_json::from_slice::<Option<Token>>(&value).map_err(|_| {
            MarketplaceError::RegistryCallFailed("could not parse nft_token result".into())
        }),
        Err(PromiseError::TooLong(len)) => Err(MarketplaceError::RegistryCallFailed(format!(
            "nft_token result too long ({len} bytes)"
        ))),
        Err(_) => Err(MarketplaceError::RegistryCallFailed(
            "nft_token call failed".into(),
        )),
    }
}

/// True when the single upstream receipt (registry transfer or payout) succeeded.
/// An oversized return value still means the receipt succeeded.
pub(crate) fn upstream_succeeded() -> bool {
    env::promise_results_count() == 1
        && matches!(
            env::promise_result_checked(0, MAX_TOKEN_RESULT_LEN),
            Ok(_) | Err(PromiseError::TooLong(_))
        )
}
