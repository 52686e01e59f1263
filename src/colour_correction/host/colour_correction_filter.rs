use std::sync::Arc;

use parking_lot::Mutex;
use tracing::debug;

use crate::colour_correction::common::error::Result;
use crate::colour_correction::engine::{CorrectionEngine, Rect};
use crate::colour_correction::host::filter::{CamInfo, FilterListener, MonoFilter};
use crate::colour_correction::matrix::ColourMatrix;
use crate::colour_correction::pattern::CfaPattern;
use crate::colour_correction::store::{KeyValueStore, MatrixStore};

const NAME: &str = "Colour Correction";
const DESCRIPTION: &str = "Applies a colour correction matrix to Bayer mosaic data";
const FILENAME_APPENDIX: &str = "_colour_corrected";

/// Host-facing colour correction stage backed by a shared [`MatrixStore`].
pub struct ColourCorrectionFilter<S: KeyValueStore> {
    store: Arc<MatrixStore<S>>,
    engine: CorrectionEngine,
    listener: Mutex<Option<Arc<dyn FilterListener>>>,
}

impl<S: KeyValueStore> ColourCorrectionFilter<S> {
    pub fn new(store: Arc<MatrixStore<S>>, engine: CorrectionEngine) -> Self {
        Self {
            store,
            engine,
            listener: Mutex::new(None),
        }
    }

    pub fn store(&self) -> &Arc<MatrixStore<S>> {
        &self.store
    }

    pub fn register_listener(&self, listener: Arc<dyn FilterListener>) {
        *self.listener.lock() = Some(listener);
    }

    pub fn add_matrix(&self, title: &str, matrix: ColourMatrix) -> Result<()> {
        self.store.add(title, matrix)
    }

    pub fn delete_matrix(&self, title: &str) -> Result<()> {
        self.store.delete(title)
    }

    /// Selects `title` and tells the listener the output changed.
    pub fn select(&self, title: &str) -> Result<()> {
        let result = self.store.select(title);
        self.notify();
        result
    }

    /// Switches the pattern and tells the listener the output changed.
    pub fn set_pattern(&self, pattern: CfaPattern) -> Result<()> {
        let result = self.store.set_pattern(pattern);
        self.notify();
        result
    }

    fn notify(&self) {
        // Called outside the lock so the listener may re-register.
        let listener = self.listener.lock().clone();
        if let Some(listener) = listener {
            listener.filter_done(NAME);
        }
    }
}

impl<S: KeyValueStore> MonoFilter for ColourCorrectionFilter<S> {
    fn name(&self) -> &str {
        NAME
    }

    fn description(&self) -> &str {
        DESCRIPTION
    }

    fn filename_appendix(&self) -> &str {
        FILENAME_APPENDIX
    }

    fn supports_mono(&self) -> bool {
        true
    }

    fn supports_color(&self) -> bool {
        false
    }

    fn compute_mono(&self, pixels: &mut [u8], rect: Rect, _cam_info: &CamInfo) -> Result<()> {
        let snapshot = self.store.snapshot();
        debug!(title = %snapshot.title, pattern = %snapshot.pattern, ?rect, "Correcting frame");
        self.engine.apply_snapshot(pixels, rect, &snapshot)
    }

    fn status(&self) -> String {
        self.store.status()
    }
}
