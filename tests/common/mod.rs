//! Shared handler doubles for integration tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use kvlog::{Handler, HandlerError, Record};

/// Stores every record it receives. Clones share storage.
#[derive(Clone, Default)]
pub struct RecordingHandler {
    records: Arc<Mutex<Vec<Record>>>,
}

impl RecordingHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<Record> {
        self.records.lock().unwrap().clone()
    }

    pub fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }
}

impl Handler for RecordingHandler {
    fn log(&self, record: Record) -> Result<(), HandlerError> {
        self.records.lock().unwrap().push(record);
        Ok(())
    }
}

/// Rejects every record, counting attempts.
#[derive(Clone, Default)]
pub struct FailingHandler {
    attempts: Arc<AtomicUsize>,
}

impl FailingHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

impl Handler for FailingHandler {
    fn log(&self, _record: Record) -> Result<(), HandlerError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(HandlerError::msg("sink unavailable"))
    }
}
