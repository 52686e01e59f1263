use std::sync::Arc;

use parking_lot::Mutex;

use crate::colour_correction::common::error::{CorrectionError, Result};
use crate::colour_correction::store::backend::KeyValueStore;
use crate::colour_correction::store::properties::Properties;

#[derive(Debug)]
struct MemoryState {
    entries: Option<Properties>,
    available: bool,
    persist_count: usize,
}

/// In-process settings store.
///
/// Clones share the same entries, so a caller can keep a handle and inspect
/// what a [`MatrixStore`](super::MatrixStore) persisted.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    state: Arc<Mutex<MemoryState>>,
}

impl MemoryStore {
    /// An empty store that has never been written.
    pub fn new() -> Self {
        Self::from_state(None)
    }

    pub fn with_entries(entries: Properties) -> Self {
        Self::from_state(Some(entries))
    }

    fn from_state(entries: Option<Properties>) -> Self {
        Self {
            state: Arc::new(Mutex::new(MemoryState {
                entries,
                available: true,
                persist_count: 0,
            })),
        }
    }

    /// When unavailable, both reads and writes fail with `PersistenceUnavailable`.
    pub fn set_available(&self, available: bool) {
        self.state.lock().available = available;
    }

    pub fn entries(&self) -> Option<Properties> {
        self.state.lock().entries.clone()
    }

    pub fn persist_count(&self) -> usize {
        self.state.lock().persist_count
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyValueStore for MemoryStore {
    fn load(&self) -> Result<Option<Properties>> {
        let state = self.state.lock();
        if !state.available {
            return Err(CorrectionError::PersistenceUnavailable(
                "memory store offline".to_string(),
            ));
        }
        Ok(state.entries.clone())
    }

    fn persist(&mut self, entries: &Properties) -> Result<()> {
        let mut state = self.state.lock();
        if !state.available {
            return Err(CorrectionError::PersistenceUnavailable(
                "memory store offline".to_string(),
            ));
        }
        state.entries = Some(entries.clone());
        state.persist_count += 1;
        Ok(())
    }
}
