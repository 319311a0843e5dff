//! Engine boundary
//!
//! The recognition engine is an external collaborator. The client only needs
//! a key/value configuration sink, a directive sender and a tagged inbound
//! message stream.

use crate::params::ParamValue;

/// Success code returned by [`EngineFacade::init`]
pub const ENGINE_OK: i32 = 0;

/// Control directives understood by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Directive {
    Start,
    /// Immediate stop, no drain
    Stop,
    /// Graceful stop: the server drains buffered audio and emits trailing results
    FinishTalking,
    /// Blocking stop, used to reset a stale session
    SyncStop,
}

/// Tag of an inbound engine message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKind {
    PartialResult,
    FinalResult,
    EngineStart,
    /// The engine finished a session (after a drain, cancel or VAD auto-stop)
    EngineStop,
    EngineError,
    Other(i32),
}

/// One live engine instance
pub trait EngineFacade: Send {
    fn set_param(&mut self, key: &str, value: &ParamValue);

    /// Returns [`ENGINE_OK`] on success
    fn init(&mut self) -> i32;

    fn send_directive(&mut self, directive: Directive, payload: &[u8]) -> bool;

    /// Release the instance. Called exactly once before it is dropped.
    fn destroy(&mut self);
}

/// Creates engine instances on demand
pub trait EngineFactory: Send {
    fn create_instance(&self) -> Box<dyn EngineFacade>;
}

impl<F> EngineFactory for F
where
    F: Fn() -> Box<dyn EngineFacade> + Send,
{
    fn create_instance(&self) -> Box<dyn EngineFacade> {
        self()
    }
}
