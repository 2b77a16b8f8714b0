use near_sdk::json_types::U128;
use near_sdk::serde_json::{self, Map, Value};
use near_sdk::{AccountId, env};

use super::types::{Event, EventData};
use super::{PREFIX, STANDARD, VERSION};

// --- Value conversion ---

pub(crate) trait IntoEventValue {
    fn into_event_value(self) -> Value;
}

impl IntoEventValue for &str {
    fn into_event_value(self) -> Value {
        Value::String(self.to_string())
    }
}

impl IntoEventValue for String {
    fn into_event_value(self) -> Value {
        Value::String(self)
    }
}

impl IntoEventValue for &AccountId {
    fn into_event_value(self) -> Value {
        Value::String(self.to_string())
    }
}

// u128 amounts exceed JSON's safe integer range; emitted as strings like U128.
impl IntoEventValue for u128 {
    fn into_event_value(self) -> Value {
        Value::String(self.to_string())
    }
}

impl IntoEventValue for U128 {
    fn into_event_value(self) -> Value {
        Value::String(self.0.to_string())
    }
}

// --- EventBuilder ---

pub(crate) struct EventBuilder {
    event_type: &'static str,
    operation: &'static str,
    author: AccountId,
    fields: Map<String, Value>,
}

impl EventBuilder {
    pub(crate) fn new(event_type: &'static str, operation: &'static str, author: &AccountId) -> Self {
        Self {
            event_type,
            operation,
            author: author.clone(),
            fields: Map::new(),
        }
    }

    pub(crate) fn field(mut self, key: &str, value: impl IntoEventValue) -> Self {
        self.fields.insert(key.into(), value.into_event_value());
        self
    }

    pub(crate) fn emit(self) {
        let event = Event {
            standard: STANDARD,
            version: VERSION,
            event: self.event_type,
            data: [EventData {
                operation: self.operation,
                author: self.author.as_str(),
                fields: self.fields,
            }],
        };
        match serde_json::to_string(&event) {
            Ok(json) => env::log_str(&format!("{PREFIX}{json}")),
            Err(_) => env::log_str("Event serialization failed"),
        }
    }
}
