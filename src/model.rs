//! Model profiles
//!
//! Maps each logical model to the backend protocol it speaks. The table is
//! data, not dispatch: everything protocol-specific downstream is keyed off
//! [`ProtocolFamily`] so a new selector sharing a family inherits its wire
//! conventions.

use crate::error::VolcError;
use serde::{Deserialize, Serialize};

/// Shared gateway for every current backend
pub const OPENSPEECH_ADDRESS: &str = "wss://openspeech.bytedance.com";

/// Logical model selection exposed to callers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModelSelector {
    /// One-sentence recognition, one minute cap (WebSocket V2).
    /// Short utterances and command interaction.
    #[default]
    Standard,
    /// Streaming big model (Seed V3). Long-form, high-accuracy audio.
    BigModel,
    /// Doubao big model 2.0 (Seed V3, hourly billing).
    SeedAsr,
}

impl ModelSelector {
    /// Every selector, in declaration order
    pub const ALL: [ModelSelector; 3] = [
        ModelSelector::Standard,
        ModelSelector::BigModel,
        ModelSelector::SeedAsr,
    ];
}

impl std::fmt::Display for ModelSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelSelector::Standard => write!(f, "standard"),
            ModelSelector::BigModel => write!(f, "big-model"),
            ModelSelector::SeedAsr => write!(f, "seed-asr"),
        }
    }
}

impl std::str::FromStr for ModelSelector {
    type Err = VolcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "standard" | "v2" => Ok(ModelSelector::Standard),
            "big-model" | "bigmodel" | "big_model" => Ok(ModelSelector::BigModel),
            "seed-asr" | "seedasr" | "seed_asr" | "seed" => Ok(ModelSelector::SeedAsr),
            _ => Err(VolcError::UnknownModel(s.to_string())),
        }
    }
}

/// Wire/auth convention shared by a group of backends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProtocolFamily {
    /// Legacy WebSocket protocol: "Bearer;" token, resource under the cluster key
    WebsocketV2,
    /// Seed protocol: raw token, resource under the resource id key
    SeedV3,
}

impl ProtocolFamily {
    /// Numeric discriminator the engine expects under `protocol_type`
    pub fn protocol_type(self) -> i64 {
        match self {
            ProtocolFamily::WebsocketV2 => 0,
            ProtocolFamily::SeedV3 => 1,
        }
    }
}

/// Everything the mapper needs to know about a backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelProfile {
    pub protocol_family: ProtocolFamily,
    pub address: &'static str,
    pub uri_path: &'static str,
    pub resource_id: &'static str,
    pub requires_bearer_prefix: bool,
}

/// Resolve a selector to its backend profile
pub fn resolve(selector: ModelSelector) -> ModelProfile {
    match selector {
        ModelSelector::Standard => ModelProfile {
            protocol_family: ProtocolFamily::WebsocketV2,
            address: OPENSPEECH_ADDRESS,
            uri_path: "/api/v2/asr",
            resource_id: "volcengine_input_common",
            requires_bearer_prefix: true,
        },
        ModelSelector::BigModel => ModelProfile {
            protocol_family: ProtocolFamily::SeedV3,
            address: OPENSPEECH_ADDRESS,
            uri_path: "/api/v3/sauc/bigmodel_async",
            resource_id: "volc.bigasr.sauc.duration",
            requires_bearer_prefix: false,
        },
        ModelSelector::SeedAsr => ModelProfile {
            protocol_family: ProtocolFamily::SeedV3,
            address: OPENSPEECH_ADDRESS,
            uri_path: "/api/v3/sauc/bigmodel_async",
            resource_id: "volc.seedasr.sauc.duration",
            requires_bearer_prefix: false,
        },
    }
}
