//! VolcAsr Library
//!
//! One stable API over the Volcengine streaming ASR engine: model/protocol
//! mapping into engine parameters, and normalization of the backends'
//! result payloads.

pub mod client;
pub mod config;
pub mod engine;
pub mod error;
pub mod mapper;
pub mod model;
pub mod normalizer;
pub mod params;

pub use client::{AsrEvent, AsrListener, SessionState, VolcAsrClient};
pub use config::{AuthConfig, Config, EngineLogLevel};
pub use engine::{Directive, EngineFacade, EngineFactory, MessageKind, ENGINE_OK};
pub use error::{VolcError, VolcResult};
pub use mapper::{build_config, ConfigAssignment};
pub use model::{resolve, ModelProfile, ModelSelector, ProtocolFamily};
pub use normalizer::{parse_error, parse_result, ErrorEvent, RecognitionEvent};
pub use params::{ParamValue, ParameterSet};
