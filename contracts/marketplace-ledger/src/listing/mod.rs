//! Listing lifecycle: create, cancel and reprice, each gated on registry ownership.

pub mod types;
mod index;
mod manage;
mod views;

pub use types::*;
