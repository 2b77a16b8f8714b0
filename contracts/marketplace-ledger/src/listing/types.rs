use near_sdk::json_types::U128;
use near_sdk::{AccountId, near};

#[near(serializers = [borsh, json])]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Listing {
    pub seller_id: AccountId,
    /// Always > 0 while stored.
    pub price: U128,
    /// NEP-178 approval id captured at listing time; the purchase transfer presents it
    /// so a token that changed hands or was re-approved fails to move.
    pub approval_id: u64,
}

/// State of one (collection, token) key as seen by callers.
#[near(serializers = [json])]
#[derive(Clone, Debug, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ListingState {
    Absent,
    Listed { price: U128, seller_id: AccountId },
}

impl ListingState {
    /// Zero for `Absent`.
    pub fn price(&self) -> U128 {
        match self {
            Self::Absent => U128(0),
            Self::Listed { price, .. } => *price,
        }
    }

    pub fn seller_id(&self) -> Option<&AccountId> {
        match self {
            Self::Absent => None,
            Self::Listed { seller_id, .. } => Some(seller_id),
        }
    }

    pub fn is_listed(&self) -> bool {
        matches!(self, Self::Listed { .. })
    }
}

impl From<Option<&Listing>> for ListingState {
    fn from(listing: Option<&Listing>) -> Self {
        match listing {
            Some(listing) => Self::Listed {
                price: listing.price,
                seller_id: listing.seller_id.clone(),
            },
            None => Self::Absent,
        }
    }
}
