#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::Mutex;

use firehose_send_action::adapters::action_environment::{ActionEnvironment, LogLevel};
use firehose_send_action::adapters::record_submitter::RecordSubmitter;
use firehose_send_core::SendError;

/// Submitter that records every call and replays a fixed response.
pub struct StubSubmitter {
    response: Result<Option<String>, String>,
    calls: Mutex<Vec<(String, Vec<u8>)>>,
}

impl StubSubmitter {
    pub fn returning(record_id: Option<&str>) -> Self {
        Self::new(Ok(record_id.map(str::to_string)))
    }

    pub fn failing(message: &str) -> Self {
        Self::new(Err(message.to_string()))
    }

    fn new(response: Result<Option<String>, String>) -> Self {
        Self {
            response,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<(String, Vec<u8>)> {
        self.calls.lock().expect("poisoned mutex").clone()
    }
}

impl RecordSubmitter for StubSubmitter {
    fn put_record(&self, stream_name: &str, data: &[u8]) -> Result<Option<String>, String> {
        self.calls
            .lock()
            .expect("poisoned mutex")
            .push((stream_name.to_string(), data.to_vec()));
        self.response.clone()
    }
}

impl RecordSubmitter for &StubSubmitter {
    fn put_record(&self, stream_name: &str, data: &[u8]) -> Result<Option<String>, String> {
        (*self).put_record(stream_name, data)
    }
}

/// In-memory runner: fixed inputs, captured outputs and log lines.
#[derive(Default)]
pub struct MemoryEnvironment {
    inputs: BTreeMap<String, String>,
    outputs: Mutex<Vec<(String, String)>>,
    lines: Mutex<Vec<(LogLevel, String)>>,
}

impl MemoryEnvironment {
    pub fn with_input(mut self, name: &str, value: &str) -> Self {
        self.inputs.insert(name.to_string(), value.to_string());
        self
    }

    pub fn outputs(&self) -> Vec<(String, String)> {
        self.outputs.lock().expect("poisoned mutex").clone()
    }

    pub fn lines(&self) -> Vec<(LogLevel, String)> {
        self.lines.lock().expect("poisoned mutex").clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.lines().into_iter().map(|(_, message)| message).collect()
    }
}

impl ActionEnvironment for MemoryEnvironment {
    fn get_input(&self, name: &str, required: bool) -> Result<String, SendError> {
        let value = self.inputs.get(name).cloned().unwrap_or_default();
        if required && value.trim().is_empty() {
            return Err(SendError::MissingRequiredInput(name.to_string()));
        }
        Ok(value)
    }

    fn set_output(&self, name: &str, value: &str) -> Result<(), String> {
        self.outputs
            .lock()
            .expect("poisoned mutex")
            .push((name.to_string(), value.to_string()));
        Ok(())
    }

    fn log(&self, level: LogLevel, message: &str) {
        self.lines
            .lock()
            .expect("poisoned mutex")
            .push((level, message.to_string()));
    }
}
