use near_sdk::NearToken;

pub const MAX_TOKEN_ID_LEN: usize = 256;

// Storage key invariant: delimiter cannot appear in NEAR account IDs, preventing listing_id key collisions.
pub const DELIMETER: &str = ":";
pub const ONE_YOCTO: NearToken = NearToken::from_yoctonear(1);

// Gas constants (TGas)
pub const DEFAULT_REGISTRY_VIEW_GAS: u64 = 15;
pub const DEFAULT_REGISTRY_TRANSFER_GAS: u64 = 30;
pub const DEFAULT_CALLBACK_GAS: u64 = 30;
pub const MAX_TGAS: u64 = 300;

// Upper bound on an `nft_token` reply; metadata-heavy tokens above this are treated as a failed read.
pub const MAX_TOKEN_RESULT_LEN: usize = 16_384;

pub const PURCHASE_MEMO: &str = "Purchased via marketplace ledger";
