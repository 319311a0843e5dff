//! Recognition parameters
//!
//! Strongly-typed knobs for recognition behaviour, plus a passthrough bag for
//! engine parameters this struct does not model.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::warn;

/// Default VAD tail silence before auto-stop, in milliseconds
pub const DEFAULT_VAD_TAIL_SILENCE_MS: u32 = 2000;

/// A single engine parameter value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl ParamValue {
    /// Convert a raw JSON value. Null, arrays and objects have no engine
    /// setter and yield `None`.
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::Bool(b) => Some(ParamValue::Bool(*b)),
            serde_json::Value::String(s) => Some(ParamValue::Str(s.clone())),
            serde_json::Value::Number(n) => n
                .as_i64()
                .map(ParamValue::Int)
                .or_else(|| n.as_f64().map(ParamValue::Float)),
            _ => None,
        }
    }

    /// Parse a `key=value` style literal: bool, then integer, then float,
    /// falling back to string.
    pub fn parse_literal(raw: &str) -> Self {
        if let Ok(b) = raw.parse::<bool>() {
            ParamValue::Bool(b)
        } else if let Ok(i) = raw.parse::<i64>() {
            ParamValue::Int(i)
        } else if let Ok(f) = raw.parse::<f64>() {
            ParamValue::Float(f)
        } else {
            ParamValue::Str(raw.to_string())
        }
    }
}

impl std::fmt::Display for ParamValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParamValue::Bool(b) => write!(f, "{}", b),
            ParamValue::Int(i) => write!(f, "{}", i),
            ParamValue::Float(x) => write!(f, "{}", x),
            ParamValue::Str(s) => write!(f, "{:?}", s),
        }
    }
}

impl From<bool> for ParamValue {
    fn from(v: bool) -> Self {
        ParamValue::Bool(v)
    }
}

impl From<i64> for ParamValue {
    fn from(v: i64) -> Self {
        ParamValue::Int(v)
    }
}

impl From<f64> for ParamValue {
    fn from(v: f64) -> Self {
        ParamValue::Float(v)
    }
}

impl From<&str> for ParamValue {
    fn from(v: &str) -> Self {
        ParamValue::Str(v.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(v: String) -> Self {
        ParamValue::Str(v)
    }
}

/// Recognition behaviour for one `setup` call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParameterSet {
    /// Inverse text normalization: "24" instead of spelled-out numbers
    pub enable_itn: bool,
    pub enable_punc: bool,
    /// Disfluency removal (drops filler words)
    pub enable_ddc: bool,
    /// Server-side VAD auto-stop after trailing silence
    pub auto_stop: bool,
    /// Only emitted when `auto_stop` is set
    pub vad_tail_silence_ms: u32,
    /// Extra engine parameters, applied last; they override mapped keys
    pub extras: BTreeMap<String, ParamValue>,
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self {
            enable_itn: true,
            enable_punc: true,
            enable_ddc: false,
            auto_stop: false,
            vad_tail_silence_ms: DEFAULT_VAD_TAIL_SILENCE_MS,
            extras: BTreeMap::new(),
        }
    }
}

impl ParameterSet {
    /// Add or replace one extra parameter
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.extras.insert(key.into(), value.into());
        self
    }

    /// Merge untyped extras (e.g. from a config file). Values without a
    /// matching engine type are dropped with a warning.
    pub fn with_json_extras(mut self, extras: &serde_json::Map<String, serde_json::Value>) -> Self {
        for (key, raw) in extras {
            match ParamValue::from_json(raw) {
                Some(value) => {
                    self.extras.insert(key.clone(), value);
                }
                None => warn!("⚠️ Dropping extra '{}': unsupported value {}", key, raw),
            }
        }
        self
    }
}
