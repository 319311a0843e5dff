//! Mock recognition engine for testing
//!
//! Records every call across all instances it hands out, so tests can check
//! ordering and instance overlap.

use std::sync::{Arc, Mutex};
use volc_asr::{Directive, EngineFacade, EngineFactory, ParamValue, ENGINE_OK};

#[derive(Debug, Clone, PartialEq)]
pub enum LogEntry {
    Created(usize),
    SetParam(usize, String, ParamValue),
    Init(usize),
    Directive(usize, Directive),
    Destroyed(usize),
}

#[derive(Debug, Default)]
pub struct EngineLog {
    pub entries: Vec<LogEntry>,
    pub live: usize,
    pub max_live: usize,
    next_id: usize,
}

impl EngineLog {
    pub fn directives(&self) -> Vec<Directive> {
        self.entries
            .iter()
            .filter_map(|e| match e {
                LogEntry::Directive(_, d) => Some(*d),
                _ => None,
            })
            .collect()
    }

    /// Params applied to instance `id`, in order
    pub fn params_for(&self, id: usize) -> Vec<(String, ParamValue)> {
        self.entries
            .iter()
            .filter_map(|e| match e {
                LogEntry::SetParam(i, k, v) if *i == id => Some((k.clone(), v.clone())),
                _ => None,
            })
            .collect()
    }
}

pub struct MockEngine {
    id: usize,
    log: Arc<Mutex<EngineLog>>,
    init_code: i32,
    rejected: Vec<Directive>,
}

impl EngineFacade for MockEngine {
    fn set_param(&mut self, key: &str, value: &ParamValue) {
        self.log.lock().unwrap().entries.push(LogEntry::SetParam(
            self.id,
            key.to_string(),
            value.clone(),
        ));
    }

    fn init(&mut self) -> i32 {
        self.log.lock().unwrap().entries.push(LogEntry::Init(self.id));
        self.init_code
    }

    fn send_directive(&mut self, directive: Directive, _payload: &[u8]) -> bool {
        self.log
            .lock()
            .unwrap()
            .entries
            .push(LogEntry::Directive(self.id, directive));
        !self.rejected.contains(&directive)
    }

    fn destroy(&mut self) {
        let mut log = self.log.lock().unwrap();
        log.live -= 1;
        log.entries.push(LogEntry::Destroyed(self.id));
    }
}

pub struct MockFactory {
    pub log: Arc<Mutex<EngineLog>>,
    /// Init codes handed out per instance; `ENGINE_OK` once exhausted
    pub init_codes: Mutex<Vec<i32>>,
    /// Directives every instance answers with `false`
    pub rejected_directives: Vec<Directive>,
}

impl MockFactory {
    pub fn new() -> Self {
        Self {
            log: Arc::new(Mutex::new(EngineLog::default())),
            init_codes: Mutex::new(Vec::new()),
            rejected_directives: Vec::new(),
        }
    }

    pub fn failing_init(code: i32) -> Self {
        let factory = Self::new();
        factory.init_codes.lock().unwrap().push(code);
        factory
    }
}

impl EngineFactory for MockFactory {
    fn create_instance(&self) -> Box<dyn EngineFacade> {
        let mut log = self.log.lock().unwrap();
        let id = log.next_id;
        log.next_id += 1;
        log.live += 1;
        log.max_live = log.max_live.max(log.live);
        log.entries.push(LogEntry::Created(id));

        let mut codes = self.init_codes.lock().unwrap();
        let init_code = if codes.is_empty() {
            ENGINE_OK
        } else {
            codes.remove(0)
        };

        Box::new(MockEngine {
            id,
            log: self.log.clone(),
            init_code,
            rejected: self.rejected_directives.clone(),
        })
    }
}
