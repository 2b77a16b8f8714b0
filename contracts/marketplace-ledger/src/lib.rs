//! Marketplace ledger: fixed-price NFT listings keyed by (collection, token) and
//! escrowed seller proceeds, with the NFT contract as the ownership registry.

use near_sdk::json_types::U128;
use near_sdk::store::LookupMap;
use near_sdk::{AccountId, BorshStorageKey, Gas, NearToken, PanicOnDefault, Promise, env, near};

pub mod constants;
mod errors;
mod guards;

mod config;
mod events;
mod external;

mod listing;
mod proceeds;
mod purchase;
mod storage;

mod admin;


pub use config::{GasConfig, GasConfigUpdate};
pub use constants::*;
pub use errors::MarketplaceError;
pub use external::Token;
pub use listing::{Listing, ListingState};
pub use proceeds::{ProceedsBalance, ProceedsView};
pub use purchase::PendingPurchase;
pub use storage::{StorageAccount, StorageBalanceView};

#[near]
#[derive(BorshStorageKey)]
pub enum StorageKey {
    Listings,
    Proceeds,
    PendingPurchases,
    StorageAccounts,
}

#[near(
    contract_state,
    contract_metadata(
        version = "0.1.0",
        standard(standard = "nep297", version = "1.0.0"),
    )
)]
#[derive(PanicOnDefault)]
pub struct Contract {
    pub version: String,

    /// Governs gas configuration only; has no authority over listings or proceeds.
    pub owner_id: AccountId,
    pub gas_config: GasConfig,

    /// Key: "{collection_id}:{token_id}". A missing entry is the `Absent` state.
    pub listings: LookupMap<String, Listing>,
    pub proceeds: LookupMap<AccountId, ProceedsBalance>,
    /// Purchases whose registry transfer has not resolved; same key as `listings`.
    pub pending_purchases: LookupMap<String, PendingPurchase>,
    /// Prepaid storage of listers; listings are charged here, not to the contract.
    pub storage_accounts: LookupMap<AccountId, StorageAccount>,
}
