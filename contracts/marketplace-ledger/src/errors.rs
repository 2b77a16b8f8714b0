//! Typed error handling for the marketplace ledger.
//!
//! Uses `#[derive(near_sdk::FunctionError)]` so public methods can be marked
//! `#[handle_result]`. When a method returns `Err(MarketplaceError::Xxx)`, the
//! SDK calls `env::panic_str()` with the Display message and the receipt
//! reverts as a whole.

use near_sdk::AccountId;
use near_sdk::json_types::U128;
use near_sdk_macros::NearSchema;

#[derive(NearSchema, near_sdk::FunctionError)]
#[abi(json)]
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub enum MarketplaceError {
    AlreadyListed {
        collection_id: AccountId,
        token_id: String,
    },
    NotOwner {
        collection_id: AccountId,
        token_id: String,
    },
    PriceMustBeAboveZero,
    NotApprovedForMarketplace {
        collection_id: AccountId,
        token_id: String,
    },
    NotListed {
        collection_id: AccountId,
        token_id: String,
    },
    PriceNotMet {
        collection_id: AccountId,
        token_id: String,
        price: U128,
    },
    NoProceeds,
    TransferFailed(String),
    /// A purchase of this item is waiting on the registry transfer.
    SaleInProgress {
        collection_id: AccountId,
        token_id: String,
    },
    /// The whole balance is backing purchases that have not resolved yet.
    ProceedsLocked {
        pending: U128,
    },
    /// The lister's storage balance does not cover the bytes a listing adds.
    InsufficientStorage(String),
    InvalidState(String),
    RegistryCallFailed(String),
    InvalidInput(String),
    InsufficientDeposit(String),
    Unauthorized(String),
    InternalError(String),
}

impl std::fmt::Display for MarketplaceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AlreadyListed {
                collection_id,
                token_id,
            } => write!(f, "AlreadyListed: {}:{} is already listed", collection_id, token_id),
            Self::NotOwner {
                collection_id,
                token_id,
            } => write!(
                f,
                "NotOwner: caller does not own {}:{}",
                collection_id, token_id
            ),
            Self::PriceMustBeAboveZero => write!(f, "PriceMustBeAboveZero: price must be greater than 0"),
            Self::NotApprovedForMarketplace {
                collection_id,
                token_id,
            } => write!(
                f,
                "NotApprovedForMarketplace: marketplace is not approved for {}:{}",
                collection_id, token_id
            ),
            Self::NotListed {
                collection_id,
                token_id,
            } => write!(f, "NotListed: {}:{} is not listed", collection_id, token_id),
            Self::PriceNotMet {
                collection_id,
                token_id,
                price,
            } => write!(
                f,
                "PriceNotMet: {}:{} requires {} yoctoNEAR",
                collection_id, token_id, price.0
            ),
            Self::NoProceeds => write!(f, "NoProceeds: nothing to withdraw"),
            Self::TransferFailed(msg) => write!(f, "TransferFailed: {}", msg),
            Self::SaleInProgress {
                collection_id,
                token_id,
            } => write!(
                f,
                "SaleInProgress: a purchase of {}:{} is being settled",
                collection_id, token_id
            ),
            Self::ProceedsLocked { pending } => write!(
                f,
                "ProceedsLocked: {} yoctoNEAR is held by unsettled purchases",
                pending.0
            ),
            Self::InsufficientStorage(msg) => write!(f, "InsufficientStorage: {}", msg),
            Self::InvalidState(msg) => write!(f, "Invalid state: {}", msg),
            Self::RegistryCallFailed(msg) => write!(f, "RegistryCallFailed: {}", msg),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::InsufficientDeposit(msg) => write!(f, "Insufficient deposit: {}", msg),
            Self::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            Self::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl MarketplaceError {
    pub fn already_listed(collection_id: &AccountId, token_id: &str) -> Self {
        Self::AlreadyListed {
            collection_id: collection_id.clone(),
            token_id: token_id.to_string(),
        }
    }
    pub fn not_owner(collection_id: &AccountId, token_id: &str) -> Self {
        Self::NotOwner {
            collection_id: collection_id.clone(),
            token_id: token_id.to_string(),
        }
    }
    pub fn not_approved(collection_id: &AccountId, token_id: &str) -> Self {
        Self::NotApprovedForMarketplace {
            collection_id: collection_id.clone(),
            token_id: token_id.to_string(),
        }
    }
    pub fn not_listed(collection_id: &AccountId, token_id: &str) -> Self {
        Self::NotListed {
            collection_id: collection_id.clone(),
            token_id: token_id.to_string(),
        }
    }
    pub fn price_not_met(collection_id: &AccountId, token_id: &str, price: u128) -> Self {
        Self::PriceNotMet {
            collection_id: collection_id.clone(),
            token_id: token_id.to_string(),
            price: U128(price),
        }
    }
    pub fn sale_in_progress(collection_id: &AccountId, token_id: &str) -> Self {
        Self::SaleInProgress {
            collection_id: collection_id.clone(),
            token_id: token_id.to_string(),
        }
    }
    pub fn only_owner(what: &str) -> Self {
        Self::Unauthorized(format!("Only {} can perform this action", what))
    }
}
