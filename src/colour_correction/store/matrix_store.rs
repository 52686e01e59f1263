use parking_lot::Mutex;
use tracing::{info, instrument, warn};

use crate::colour_correction::common::error::{CorrectionError, Result};
use crate::colour_correction::matrix::{ColourMatrix, DEFAULT_TITLE};
use crate::colour_correction::pattern::CfaPattern;
use crate::colour_correction::store::backend::KeyValueStore;
use crate::colour_correction::store::config::{CorrectionConfig, CorrectionSnapshot};

struct Inner<S> {
    backend: S,
    config: CorrectionConfig,
}

/// Owner of the correction state.
///
/// Every mutation and every snapshot read goes through one lock, and every
/// mutation is written to the backend before the lock is released.
pub struct MatrixStore<S: KeyValueStore> {
    inner: Mutex<Inner<S>>,
}

impl<S: KeyValueStore> MatrixStore<S> {
    /// Loads the persisted state from `backend`, falling back to defaults.
    pub fn open(backend: S) -> Self {
        let config = Self::load(&backend);
        Self {
            inner: Mutex::new(Inner { backend, config }),
        }
    }

    /// Reads the persisted state. Never fails: an absent or unreadable store
    /// yields the default state.
    #[instrument(skip(backend))]
    pub fn load(backend: &S) -> CorrectionConfig {
        match backend.load() {
            Ok(Some(props)) => {
                let config = CorrectionConfig::from_properties(&props);
                info!(
                    matrices = config.matrices().len(),
                    pattern = %config.pattern,
                    "Loaded correction settings"
                );
                config
            }
            Ok(None) => {
                info!("No stored correction settings, using defaults");
                CorrectionConfig::default()
            }
            Err(e) => {
                warn!("{}; using defaults", e);
                CorrectionConfig::default()
            }
        }
    }

    /// Replaces the in-memory state with what the backend currently holds.
    pub fn reload(&self) {
        let mut inner = self.inner.lock();
        inner.config = Self::load(&inner.backend);
    }

    #[instrument(skip(self, matrix))]
    pub fn add(&self, title: &str, matrix: ColourMatrix) -> Result<()> {
        let mut inner = self.inner.lock();
        if title.is_empty() || inner.config.contains(title) {
            return Err(CorrectionError::DuplicateTitle(title.to_string()));
        }
        if !matrix.is_finite() {
            return Err(CorrectionError::InvalidMatrix(title.to_string()));
        }
        inner.config.insert(title.to_string(), matrix);
        info!(title, "Matrix added");
        Self::flush(&mut inner)
    }

    /// Removes `title`. Removing an absent title is a no-op.
    #[instrument(skip(self))]
    pub fn delete(&self, title: &str) -> Result<()> {
        if title == DEFAULT_TITLE {
            return Err(CorrectionError::ProtectedEntry(title.to_string()));
        }
        let mut inner = self.inner.lock();
        if inner.config.remove(title).is_none() {
            return Ok(());
        }
        info!(title, "Matrix deleted");
        Self::flush(&mut inner)
    }

    /// Makes `title` active, whether or not it currently resolves.
    #[instrument(skip(self))]
    pub fn select(&self, title: &str) -> Result<()> {
        let mut inner = self.inner.lock();
        inner.config.active_title = title.to_string();
        if !inner.config.contains(title) {
            warn!(title, "Selected matrix is not defined, identity will be used");
        }
        info!(title, "Matrix selected");
        Self::flush(&mut inner)
    }

    #[instrument(skip(self))]
    pub fn set_pattern(&self, pattern: CfaPattern) -> Result<()> {
        let mut inner = self.inner.lock();
        inner.config.pattern = pattern;
        info!(%pattern, "Pattern set");
        Self::flush(&mut inner)
    }

    /// The active matrix (resolved) and pattern, read under one lock.
    pub fn snapshot(&self) -> CorrectionSnapshot {
        self.inner.lock().config.snapshot()
    }

    pub fn config(&self) -> CorrectionConfig {
        self.inner.lock().config.clone()
    }

    pub fn titles(&self) -> Vec<String> {
        self.inner.lock().config.titles().map(str::to_string).collect()
    }

    pub fn status(&self) -> String {
        self.snapshot().status()
    }

    fn flush(inner: &mut Inner<S>) -> Result<()> {
        let props = inner.config.to_properties();
        inner.backend.persist(&props).inspect_err(|e| {
            warn!("Failed to persist correction settings: {}", e);
        })
    }
}
