//! Result normalization
//!
//! The V2 backend wraps results in an array, the Seed backend in a single
//! object. Both collapse to one [`RecognitionEvent`]. Nothing here fails:
//! payloads that do not decode are logged and ignored.

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::debug;

/// Canonical transcript update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecognitionEvent {
    pub text: String,
    pub is_final: bool,
}

/// Error reported by the engine or by the client itself
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorEvent {
    pub message: String,
}

impl ErrorEvent {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ErrorPayload {
    err_msg: Option<String>,
}

/// Decode a payload whose top level must be a JSON object
fn decode_object(payload: &[u8]) -> Option<Map<String, Value>> {
    match serde_json::from_slice(payload) {
        Ok(Value::Object(map)) => Some(map),
        Ok(_) => {
            debug!("Ignoring non-object payload");
            None
        }
        Err(e) => {
            debug!("JSON parse error: {}", e);
            None
        }
    }
}

/// The "text" of one result item. Only objects are items.
fn item_text(item: &Value) -> Option<&str> {
    item.as_object()?.get("text")?.as_str()
}

/// Parse a result payload. `is_final` comes from the message tag.
pub fn parse_result(payload: &[u8], is_final: bool) -> Option<RecognitionEvent> {
    let parsed = decode_object(payload)?;
    let text = match parsed.get("result")? {
        // websocketV2: `{"result": [{"text": ...}, ...]}`, every entry an object
        Value::Array(items) if items.iter().all(Value::is_object) => item_text(items.first()?),
        // seedV3: `{"result": {"text": ...}}`
        single @ Value::Object(_) => item_text(single),
        other => {
            debug!("Unrecognized result shape: {}", other);
            None
        }
    }?;

    if text.is_empty() {
        return None;
    }

    Some(RecognitionEvent {
        text: text.to_string(),
        is_final,
    })
}

/// Parse an engine error payload; a payload without `err_msg` is dropped
pub fn parse_error(payload: &[u8]) -> Option<ErrorEvent> {
    let parsed: ErrorPayload = match serde_json::from_value(Value::Object(decode_object(payload)?)) {
        Ok(p) => p,
        Err(e) => {
            debug!("Unrecognized error payload: {}", e);
            return None;
        }
    };
    match parsed.err_msg {
        Some(message) => Some(ErrorEvent { message }),
        None => {
            debug!("Engine error payload without err_msg");
            None
        }
    }
}
