//! Settings file backed by a flat JSON object of string values.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::colour_correction::common::error::{CorrectionError, Result};
use crate::colour_correction::store::backend::KeyValueStore;
use crate::colour_correction::store::config::StoreConfig;
use crate::colour_correction::store::properties::Properties;

pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn from_config(config: &StoreConfig) -> Self {
        Self::new(config.path.clone())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn unavailable(&self, e: impl std::fmt::Display) -> CorrectionError {
        CorrectionError::PersistenceUnavailable(format!("{}: {}", self.path.display(), e))
    }
}

impl KeyValueStore for JsonFileStore {
    fn load(&self) -> Result<Option<Properties>> {
        if !self.path.is_file() {
            debug!("No settings file at {}", self.path.display());
            return Ok(None);
        }

        let contents = fs::read_to_string(&self.path).map_err(|e| self.unavailable(e))?;
        let object: serde_json::Map<String, serde_json::Value> =
            serde_json::from_str(&contents).map_err(|e| self.unavailable(e))?;

        // Non-string values are kept as JSON text so each key is judged on its own.
        let entries = object
            .into_iter()
            .map(|(key, value)| match value {
                serde_json::Value::String(s) => (key, s),
                other => (key, other.to_string()),
            })
            .collect::<Properties>();

        debug!("Loaded {} settings from {}", entries.len(), self.path.display());
        Ok(Some(entries))
    }

    fn persist(&mut self, entries: &Properties) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.unavailable(e))?;
        }

        let object: serde_json::Map<String, serde_json::Value> = entries
            .iter()
            .map(|(k, v)| (k.to_string(), serde_json::Value::String(v.to_string())))
            .collect();
        let text = serde_json::to_string_pretty(&object).map_err(|e| self.unavailable(e))?;

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);
        fs::write(&tmp, text).map_err(|e| self.unavailable(e))?;
        fs::rename(&tmp, &self.path).map_err(|e| self.unavailable(e))?;

        debug!("Persisted {} settings to {}", entries.len(), self.path.display());
        Ok(())
    }
}
