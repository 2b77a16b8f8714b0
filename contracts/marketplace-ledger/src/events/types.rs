use near_sdk::serde::Serialize;
use near_sdk::serde_json::{Map, Value};

/// NEP-297 envelope. Every ledger event describes exactly one item, so `data`
/// always holds a single record.
#[derive(Serialize)]
#[serde(crate = "near_sdk::serde")]
pub(crate) struct Event<'a> {
    pub(crate) standard: &'a str,
    pub(crate) version: &'a str,
    pub(crate) event: &'a str,
    pub(crate) data: [EventData<'a>; 1],
}

#[derive(Serialize)]
#[serde(crate = "near_sdk::serde")]
pub(crate) struct EventData<'a> {
    pub(crate) operation: &'a str,
    pub(crate) author: &'a str,
    #[serde(flatten)]
    pub(crate) fields: Map<String, Value>,
}
