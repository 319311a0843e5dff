//! Engine configuration mapping
//!
//! Turns a resolved [`ModelProfile`], credentials and a [`ParameterSet`] into
//! the flat key/value batch the engine is configured with. Key names and
//! literal values are the engine's wire contract.

use crate::config::{AuthConfig, EngineLogLevel};
use crate::model::{ModelProfile, ProtocolFamily};
use crate::params::{ParamValue, ParameterSet};
use tracing::debug;

/// Engine parameter keys
pub mod keys {
    pub const ENGINE_NAME: &str = "engine_name";
    pub const LOG_LEVEL: &str = "log_level";
    pub const APP_ID: &str = "appid";
    pub const UID: &str = "uid";
    pub const RECORDER_TYPE: &str = "recorder_type";
    pub const ASR_ADDRESS: &str = "asr_address";
    pub const ASR_URI: &str = "asr_uri";
    pub const APP_TOKEN: &str = "app_token";
    pub const ASR_CLUSTER: &str = "asr_cluster";
    pub const RESOURCE_ID: &str = "resource_id";
    pub const PROTOCOL_TYPE: &str = "protocol_type";
    pub const MODEL_NAME: &str = "model_name";
    pub const ENABLE_ITN: &str = "asr_enable_itn";
    pub const SHOW_PUNC: &str = "asr_show_nlu_punc";
    pub const ENABLE_DDC: &str = "asr_enable_ddc";
    pub const AUTO_STOP: &str = "asr_auto_stop";
    pub const VAD_TAIL_SILENCE: &str = "vad_tail_silence_threshold";
    pub const RESULT_TYPE: &str = "asr_result_type";
}

pub const ENGINE_ASR: &str = "ASR";
pub const RECORDER_BUILTIN: &str = "Recorder";
pub const BEARER_PREFIX: &str = "Bearer;";
/// Forced on Seed backends, which do not reliably infer it
pub const SEED_MODEL_NAME: &str = "bigmodel";
/// Incremental streaming results
pub const RESULT_TYPE_SINGLE: &str = "single";

/// Ordered configuration batch. Keys are unique; a later `set` of an
/// existing key replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigAssignment {
    entries: Vec<(String, ParamValue)>,
}

impl ConfigAssignment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign `key`, returning the value it replaced
    pub fn set(&mut self, key: &str, value: impl Into<ParamValue>) -> Option<ParamValue> {
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((key.to_string(), value));
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Position of `key` in emission order
    pub fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One `key = value` per line, with the token redacted
impl std::fmt::Display for ConfigAssignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (key, value) in &self.entries {
            if key == keys::APP_TOKEN {
                writeln!(f, "{} = \"***\"", key)?;
            } else {
                writeln!(f, "{} = {}", key, value)?;
            }
        }
        Ok(())
    }
}

/// Build the full configuration batch for one setup call
pub fn build_config(
    profile: &ModelProfile,
    auth: &AuthConfig,
    params: &ParameterSet,
    log_level: Option<EngineLogLevel>,
) -> ConfigAssignment {
    let mut out = ConfigAssignment::new();
    let log_level = log_level.unwrap_or_default();

    // Environment
    out.set(keys::ENGINE_NAME, ENGINE_ASR);
    out.set(keys::LOG_LEVEL, log_level.as_str());
    out.set(keys::APP_ID, auth.app_id.as_str());
    out.set(keys::UID, auth.uid.as_str());
    out.set(keys::RECORDER_TYPE, RECORDER_BUILTIN);

    // Protocol
    out.set(keys::ASR_ADDRESS, profile.address);
    out.set(keys::ASR_URI, profile.uri_path);
    let token = if profile.requires_bearer_prefix {
        format!("{}{}", BEARER_PREFIX, auth.token)
    } else {
        auth.token.clone()
    };
    out.set(keys::APP_TOKEN, token);
    let resource_key = match profile.protocol_family {
        ProtocolFamily::WebsocketV2 => keys::ASR_CLUSTER,
        ProtocolFamily::SeedV3 => keys::RESOURCE_ID,
    };
    out.set(resource_key, profile.resource_id);
    out.set(keys::PROTOCOL_TYPE, profile.protocol_family.protocol_type());

    // Must follow the resource key
    if profile.protocol_family == ProtocolFamily::SeedV3 {
        out.set(keys::MODEL_NAME, SEED_MODEL_NAME);
    }

    // Behaviour
    out.set(keys::ENABLE_ITN, params.enable_itn);
    out.set(keys::SHOW_PUNC, params.enable_punc);
    out.set(keys::ENABLE_DDC, params.enable_ddc);
    out.set(keys::AUTO_STOP, params.auto_stop);
    if params.auto_stop {
        out.set(keys::VAD_TAIL_SILENCE, i64::from(params.vad_tail_silence_ms));
    }

    out.set(keys::RESULT_TYPE, RESULT_TYPE_SINGLE);

    for (key, value) in &params.extras {
        if let Some(previous) = out.set(key, value.clone()) {
            debug!("Extra '{}' overrides mapped value {}", key, previous);
        }
    }

    out
}
