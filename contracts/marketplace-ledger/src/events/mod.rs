//! NEP-297 JSON events. Every record carries `collection_id`, `token_id` and the
//! seller/buyer as top-level data fields so indexers can filter on them.

mod builder;
mod types;

mod contract;
mod listing;
mod proceeds;
mod storage;

pub use contract::*;
pub use listing::*;
pub use proceeds::*;
pub use storage::*;

pub(crate) const STANDARD: &str = "marketplace_ledger";
pub(crate) const VERSION: &str = "1.0.0";
pub(crate) const PREFIX: &str = "EVENT_JSON:";

pub(crate) const LISTING: &str = "LISTING_UPDATE";
pub(crate) const PROCEEDS: &str = "PROCEEDS_UPDATE";
pub(crate) const STORAGE: &str = "STORAGE_UPDATE";
pub(crate) const CONTRACT: &str = "CONTRACT_UPDATE";
