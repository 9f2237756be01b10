use alloc::string::String;
use serde_json::{Value, json};

/// Interactions reported to the page's analytics sink.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    Mark { text: String },
    Load { resource: String },
    Restore { age_secs: i64 },
    Reset,
}

impl Event {
    pub const fn action(&self) -> &'static str {
        use Event::*;
        match self {
            Mark { .. } => "mark",
            Load { .. } => "load",
            Restore { .. } => "restore",
            Reset => "reset",
        }
    }

    pub fn params(&self) -> Value {
        use Event::*;
        match self {
            Mark { text } => json!({ "event_category": "user", "value": text }),
            Load { resource } => json!({ "value": resource }),
            Restore { age_secs } => json!({ "value": age_secs }),
            Reset => json!({ "event_category": "user" }),
        }
    }
}

/// Receives [`Event`]s. Implementations must not fail or block.
pub trait Tracker {
    fn track(&self, event: &Event);
}
