use crate::error::{VolcError, VolcResult};
use crate::model::ModelSelector;
use crate::params::ParameterSet;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Credentials for the speech service. Fixed for the life of a client.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AuthConfig {
    pub app_id: String,
    /// Raw token, without any "Bearer;" prefix
    pub token: String,
    pub uid: String,
}

impl AuthConfig {
    pub fn new(app_id: impl Into<String>, token: impl Into<String>, uid: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
            token: token.into(),
            uid: uid.into(),
        }
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("app_id", &self.app_id)
            .field("token", &"***")
            .field("uid", &self.uid)
            .finish()
    }
}

/// Verbosity of the engine's own logging
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EngineLogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl EngineLogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            EngineLogLevel::Trace => "TRACE",
            EngineLogLevel::Debug => "DEBUG",
            EngineLogLevel::Info => "INFO",
            EngineLogLevel::Warn => "WARN",
            EngineLogLevel::Error => "ERROR",
        }
    }
}

/// DEBUG in debug builds, WARN in release
impl Default for EngineLogLevel {
    fn default() -> Self {
        if cfg!(debug_assertions) {
            EngineLogLevel::Debug
        } else {
            EngineLogLevel::Warn
        }
    }
}

/// Application configuration. Missing fields take their defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // Auth
    pub app_id: String,
    pub token: String,
    pub uid: String,

    // Recognition
    pub model: ModelSelector,
    pub engine_log_level: Option<EngineLogLevel>,
    pub enable_itn: bool,
    pub enable_punc: bool,
    pub enable_ddc: bool,
    pub auto_stop: bool,
    pub vad_tail_silence_ms: u32,

    /// Passthrough engine parameters; unsupported value types are dropped
    pub extras: serde_json::Map<String, serde_json::Value>,
}

impl Default for Config {
    fn default() -> Self {
        let params = ParameterSet::default();
        Self {
            app_id: "".to_string(),
            token: "".to_string(),
            uid: "volc-asr".to_string(),
            model: ModelSelector::default(),
            engine_log_level: None,
            enable_itn: params.enable_itn,
            enable_punc: params.enable_punc,
            enable_ddc: params.enable_ddc,
            auto_stop: params.auto_stop,
            vad_tail_silence_ms: params.vad_tail_silence_ms,
            extras: serde_json::Map::new(),
        }
    }
}

impl Config {
    /// Load config from the default path, or fall back to defaults.
    /// Environment overrides are applied either way.
    pub fn load() -> VolcResult<Self> {
        Self::load_with_env(&config_path())
    }

    /// Load config from `path`, then apply `VOLC_*` environment overrides
    pub fn load_with_env(path: &Path) -> VolcResult<Self> {
        let mut config = Self::load_from(path)?;
        config.apply_env();
        Ok(config)
    }

    /// Load config from `path`. A missing file yields defaults; a corrupt one
    /// is moved aside and defaults are used.
    pub fn load_from(path: &Path) -> VolcResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        match serde_json::from_str(&content) {
            Ok(config) => Ok(config),
            Err(e) => {
                tracing::warn!("⚠️ Config file corrupted or invalid, using defaults: {}", e);
                let backup_path = path.with_extension("json.corrupt");
                let _ = std::fs::rename(path, &backup_path);
                Ok(Self::default())
            }
        }
    }

    /// Save config to the default path
    pub fn save(&self) -> VolcResult<()> {
        self.save_to(&config_path())
    }

    pub fn save_to(&self, path: &Path) -> VolcResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    fn apply_env(&mut self) {
        if let Ok(v) = std::env::var("VOLC_APP_ID") {
            self.app_id = v;
        }
        if let Ok(v) = std::env::var("VOLC_TOKEN") {
            self.token = v;
        }
        if let Ok(v) = std::env::var("VOLC_UID") {
            self.uid = v;
        }
    }

    /// Credentials, rejecting an incomplete set
    pub fn auth(&self) -> VolcResult<AuthConfig> {
        if self.app_id.is_empty() {
            return Err(VolcError::Config("app_id is not set".to_string()));
        }
        if self.token.is_empty() {
            return Err(VolcError::Config("token is not set".to_string()));
        }
        Ok(AuthConfig::new(&self.app_id, &self.token, &self.uid))
    }

    pub fn parameter_set(&self) -> ParameterSet {
        ParameterSet {
            enable_itn: self.enable_itn,
            enable_punc: self.enable_punc,
            enable_ddc: self.enable_ddc,
            auto_stop: self.auto_stop,
            vad_tail_silence_ms: self.vad_tail_silence_ms,
            ..Default::default()
        }
        .with_json_extras(&self.extras)
    }
}

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("volc-asr")
        .join("config.json")
}
