//! Lister-funded storage. Accounts prepay with `storage_deposit`; every byte a
//! listing adds to contract state is charged against that balance and released
//! when the listing leaves state through cancel or a settled purchase.

pub mod types;
mod charge;
mod deposit;

pub use types::*;
