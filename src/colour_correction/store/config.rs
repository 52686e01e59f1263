//! Correction settings and store location types

use std::collections::BTreeMap;
use std::path::PathBuf;

use tracing::warn;

use crate::colour_correction::common::error::CorrectionError;
use crate::colour_correction::matrix::{ColourMatrix, DEFAULT_TITLE};
use crate::colour_correction::pattern::CfaPattern;
use crate::colour_correction::store::properties::Properties;

pub(crate) const PATTERN_KEY: &str = "bayerPattern";
pub(crate) const ACTIVE_KEY: &str = "activeMatrix";
pub(crate) const MATRIX_PREFIX: &str = "matrix.";

/// File name used when no explicit settings path is configured.
const DEFAULT_FILE_NAME: &str = ".bayer_ccm_matrices.json";

/// Process-wide correction state: the named matrices, the active title and the CFA pattern.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrectionConfig {
    pub active_title: String,
    pub pattern: CfaPattern,
    matrices: BTreeMap<String, ColourMatrix>,
}

/// Consistent view of the state used for one transform call.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrectionSnapshot {
    /// Title as selected, even when it did not resolve.
    pub title: String,
    pub pattern: CfaPattern,
    pub matrix: ColourMatrix,
}

impl CorrectionSnapshot {
    pub fn status(&self) -> String {
        format!("Matrix: {}, Pattern: {}", self.title, self.pattern)
    }
}

impl Default for CorrectionConfig {
    fn default() -> Self {
        let mut matrices = BTreeMap::new();
        matrices.insert(DEFAULT_TITLE.to_string(), ColourMatrix::IDENTITY);
        Self {
            active_title: DEFAULT_TITLE.to_string(),
            pattern: CfaPattern::default(),
            matrices,
        }
    }
}

impl CorrectionConfig {
    pub fn matrices(&self) -> &BTreeMap<String, ColourMatrix> {
        &self.matrices
    }

    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.matrices.keys().map(String::as_str)
    }

    pub fn contains(&self, title: &str) -> bool {
        self.matrices.contains_key(title)
    }

    pub fn get(&self, title: &str) -> Option<&ColourMatrix> {
        self.matrices.get(title)
    }

    /// The active matrix, or the identity when the active title does not resolve.
    pub fn active_matrix(&self) -> ColourMatrix {
        self.matrices
            .get(&self.active_title)
            .copied()
            .unwrap_or(ColourMatrix::IDENTITY)
    }

    pub fn snapshot(&self) -> CorrectionSnapshot {
        CorrectionSnapshot {
            title: self.active_title.clone(),
            pattern: self.pattern,
            matrix: self.active_matrix(),
        }
    }

    pub(crate) fn insert(&mut self, title: String, matrix: ColourMatrix) {
        self.matrices.insert(title, matrix);
    }

    pub(crate) fn remove(&mut self, title: &str) -> Option<ColourMatrix> {
        if title == DEFAULT_TITLE {
            return None;
        }
        self.matrices.remove(title)
    }

    /// Builds the state from persisted settings.
    ///
    /// Entries that fail to parse are logged and skipped; the identity matrix is
    /// always reinstated under its reserved title.
    pub fn from_properties(props: &Properties) -> Self {
        let mut config = Self::default();

        if let Some(value) = props.get(PATTERN_KEY) {
            match value.parse::<CfaPattern>() {
                Ok(pattern) => config.pattern = pattern,
                Err(e) => warn!("{}; using {}", e, config.pattern),
            }
        }

        if let Some(title) = props.get(ACTIVE_KEY) {
            config.active_title = title.to_string();
        }

        for (key, value) in props.iter() {
            let Some(title) = key.strip_prefix(MATRIX_PREFIX) else {
                continue;
            };
            if title == DEFAULT_TITLE || title.is_empty() {
                continue;
            }
            match value.parse::<ColourMatrix>() {
                Ok(matrix) => config.insert(title.to_string(), matrix),
                Err(CorrectionError::MalformedPersistedEntry { reason, .. }) => {
                    let skipped = CorrectionError::MalformedPersistedEntry {
                        key: key.to_string(),
                        reason,
                    };
                    warn!("Skipping settings entry: {}", skipped);
                }
                Err(e) => warn!("Skipping settings entry {}: {}", key, e),
            }
        }

        config
    }

    pub fn to_properties(&self) -> Properties {
        let mut props = Properties::new();
        props.set(PATTERN_KEY, self.pattern.as_str());
        props.set(ACTIVE_KEY, self.active_title.clone());
        for (title, matrix) in &self.matrices {
            props.set(format!("{MATRIX_PREFIX}{title}"), matrix.to_string());
        }
        props
    }
}

/// Location of the persisted settings.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        let base = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        Self {
            path: base.join(DEFAULT_FILE_NAME),
        }
    }
}

impl StoreConfig {
    pub fn builder() -> StoreConfigBuilder {
        StoreConfigBuilder::default()
    }
}

#[derive(Default)]
pub struct StoreConfigBuilder {
    path: Option<PathBuf>,
}

impl StoreConfigBuilder {
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn build(self) -> StoreConfig {
        let default = StoreConfig::default();
        StoreConfig {
            path: self.path.unwrap_or(default.path),
        }
    }
}
