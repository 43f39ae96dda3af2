//! The boundary between the transport layer and the aggregation core.

use serde_json::Value;

/// What the transport layer hands to the aggregation core for one family:
/// either the decoded JSON body, or the reason no body could be obtained.
#[derive(Debug, Clone, PartialEq)]
pub enum PayloadOrFailure {
    Payload(Value),
    Failure(String),
}

impl PayloadOrFailure {
    pub fn into_payload(self) -> Option<Value> {
        match self {
            PayloadOrFailure::Payload(value) => Some(value),
            PayloadOrFailure::Failure(_) => None,
        }
    }
}
