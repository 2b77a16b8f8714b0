//! Seller proceeds: credited in full on purchase, paid out on withdrawal.

pub mod types;
mod ledger;
mod withdraw;

pub use types::*;
