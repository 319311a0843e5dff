//! Recognition client
//!
//! Owns at most one engine instance and drives it through the session
//! lifecycle. Failures never escape as Rust errors: they reach the listener
//! as [`ErrorEvent`]s or are logged and ignored.

use crate::config::{AuthConfig, EngineLogLevel};
use crate::engine::{Directive, EngineFacade, EngineFactory, MessageKind, ENGINE_OK};
use crate::mapper::build_config;
use crate::model::{resolve, ModelSelector};
use crate::normalizer::{parse_error, parse_result, ErrorEvent, RecognitionEvent};
use crate::params::ParameterSet;
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, info, warn};

/// Receives normalized events, in the order the engine produced them
pub trait AsrListener: Send {
    fn on_result(&self, event: RecognitionEvent);
    fn on_error(&self, event: ErrorEvent);
}

/// Event for channel-based delivery
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AsrEvent {
    Result(RecognitionEvent),
    Error(ErrorEvent),
}

impl AsrListener for UnboundedSender<AsrEvent> {
    fn on_result(&self, event: RecognitionEvent) {
        if self.send(AsrEvent::Result(event)).is_err() {
            debug!("Event receiver dropped");
        }
    }

    fn on_error(&self, event: ErrorEvent) {
        if self.send(AsrEvent::Error(event)).is_err() {
            debug!("Event receiver dropped");
        }
    }
}

/// Session state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Uninitialized,
    Configured,
    Running,
    /// Finish requested; waiting for the engine to confirm
    Stopping,
}

/// Client over a swappable engine instance
pub struct VolcAsrClient {
    auth: AuthConfig,
    factory: Box<dyn EngineFactory>,
    listener: Box<dyn AsrListener>,
    engine: Option<Box<dyn EngineFacade>>,
    state: SessionState,
    model: Option<ModelSelector>,
    log_level: Option<EngineLogLevel>,
}

impl VolcAsrClient {
    pub fn new(
        auth: AuthConfig,
        factory: impl EngineFactory + 'static,
        listener: impl AsrListener + 'static,
    ) -> Self {
        Self {
            auth,
            factory: Box::new(factory),
            listener: Box::new(listener),
            engine: None,
            state: SessionState::Uninitialized,
            model: None,
            log_level: None,
        }
    }

    /// Engine verbosity for subsequent `setup` calls; `None` picks the
    /// build-mode default
    pub fn with_log_level(mut self, level: Option<EngineLogLevel>) -> Self {
        self.log_level = level;
        self
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Model of the current engine instance, if configured
    pub fn model(&self) -> Option<ModelSelector> {
        self.model
    }

    /// Configure a fresh engine for `model`, tearing down any previous one first
    pub fn setup(&mut self, model: ModelSelector, params: &ParameterSet) {
        self.destroy();

        let profile = resolve(model);
        info!(
            "⚙️ Setting up {} ({:?}, {})",
            model, profile.protocol_family, profile.uri_path
        );

        let assignment = build_config(&profile, &self.auth, params, self.log_level);
        let mut engine = self.factory.create_instance();
        for (key, value) in assignment.iter() {
            engine.set_param(key, value);
        }
        debug!("Applied {} engine parameters", assignment.len());

        let ret = engine.init();
        if ret != ENGINE_OK {
            let msg = format!("Engine init failed, code: {}", ret);
            warn!("❌ {}", msg);
            engine.destroy();
            self.listener.on_error(ErrorEvent::new(msg));
            return;
        }

        self.engine = Some(engine);
        self.model = Some(model);
        self.state = SessionState::Configured;
        info!("✅ Engine ready: {}", model);
    }

    /// Start recognition. A stale session is reset first, so calling this
    /// while running restarts cleanly.
    pub fn start(&mut self) {
        let Some(engine) = self.engine.as_mut() else {
            warn!("start() called before setup");
            return;
        };

        info!("🎙️ Start recording");
        if !engine.send_directive(Directive::SyncStop, b"") {
            debug!("SyncStop rejected (no active session)");
        }
        if engine.send_directive(Directive::Start, b"") {
            self.state = SessionState::Running;
        } else {
            warn!("Engine rejected start directive");
            self.state = SessionState::Configured;
            self.listener
                .on_error(ErrorEvent::new("Engine rejected start directive"));
        }
    }

    /// Graceful stop; trailing results still arrive until the engine confirms
    pub fn stop(&mut self) {
        if self.state != SessionState::Running {
            debug!("stop() ignored in state {:?}", self.state);
            return;
        }
        let Some(engine) = self.engine.as_mut() else {
            return;
        };

        info!("⏹️ Stop recording");
        if engine.send_directive(Directive::FinishTalking, b"") {
            self.state = SessionState::Stopping;
        } else {
            warn!("Engine rejected finish directive");
            self.listener
                .on_error(ErrorEvent::new("Engine rejected finish directive"));
        }
    }

    /// Abort the session without draining
    pub fn cancel(&mut self) {
        if !matches!(self.state, SessionState::Running | SessionState::Stopping) {
            debug!("cancel() ignored in state {:?}", self.state);
            return;
        }
        let Some(engine) = self.engine.as_mut() else {
            return;
        };

        info!("Cancel recording");
        if !engine.send_directive(Directive::Stop, b"") {
            warn!("Engine rejected stop directive");
        }
        self.state = SessionState::Configured;
    }

    /// Release the engine instance, if any
    pub fn destroy(&mut self) {
        if let Some(mut engine) = self.engine.take() {
            debug!("Destroying engine instance");
            engine.destroy();
        }
        self.model = None;
        self.state = SessionState::Uninitialized;
    }

    /// Feed one inbound engine message
    pub fn handle_message(&mut self, kind: MessageKind, payload: &[u8]) {
        match kind {
            MessageKind::PartialResult | MessageKind::FinalResult => {
                let is_final = kind == MessageKind::FinalResult;
                if let Some(event) = parse_result(payload, is_final) {
                    self.listener.on_result(event);
                }
            }
            MessageKind::EngineError => {
                if let Some(event) = parse_error(payload) {
                    warn!("Engine error: {}", event.message);
                    self.listener.on_error(event);
                }
            }
            MessageKind::EngineStart => debug!("Engine session started"),
            MessageKind::EngineStop => {
                if matches!(self.state, SessionState::Running | SessionState::Stopping) {
                    debug!("Engine session finished");
                    self.state = SessionState::Configured;
                }
            }
            MessageKind::Other(code) => debug!("Ignoring engine message type {}", code),
        }
    }
}

impl Drop for VolcAsrClient {
    fn drop(&mut self) {
        self.destroy();
    }
}
