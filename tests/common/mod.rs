pub mod mock_engine;

use std::sync::{Arc, Mutex};
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver};
use volc_asr::{AsrEvent, AuthConfig, VolcAsrClient};

pub use mock_engine::{EngineLog, LogEntry, MockFactory};

pub struct TestContext {
    pub client: VolcAsrClient,
    pub log: Arc<Mutex<EngineLog>>,
    pub events: UnboundedReceiver<AsrEvent>,
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_factory(MockFactory::new())
    }

    pub fn with_factory(factory: MockFactory) -> Self {
        let log = factory.log.clone();
        let (tx, events) = unbounded_channel();
        let client = VolcAsrClient::new(
            AuthConfig::new("test-app", "secret-token", "test-uid"),
            factory,
            tx,
        );
        Self { client, log, events }
    }

    /// Drain every event delivered so far
    pub fn drain_events(&mut self) -> Vec<AsrEvent> {
        let mut out = Vec::new();
        while let Ok(event) = self.events.try_recv() {
            out.push(event);
        }
        out
    }
}
