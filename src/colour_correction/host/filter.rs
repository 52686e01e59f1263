use crate::colour_correction::common::error::Result;
use crate::colour_correction::engine::Rect;

/// Camera metadata delivered with each frame.
#[derive(Debug, Clone, Default)]
pub struct CamInfo {
    pub camera: String,
    pub bits_per_pixel: u32,
}

/// Notified when a filter's output would change for the same input.
pub trait FilterListener: Send + Sync {
    fn filter_done(&self, filter_name: &str);
}

/// A per-frame processing stage for raw single-channel frames.
pub trait MonoFilter {
    fn name(&self) -> &str;

    fn description(&self) -> &str;

    fn interface_version(&self) -> &str {
        "1.1"
    }

    /// Suffix the host appends to file names of processed captures.
    fn filename_appendix(&self) -> &str;

    /// Operates on mono / raw mosaic data.
    fn supports_mono(&self) -> bool;

    /// Operates on already-demosaiced colour data.
    fn supports_color(&self) -> bool;

    /// Whether the stage runs before the host's own processing.
    fn process_early(&self) -> bool {
        true
    }

    /// Processes `rect` of `pixels` in place.
    fn compute_mono(&self, pixels: &mut [u8], rect: Rect, cam_info: &CamInfo) -> Result<()>;

    /// Human-readable summary of the current settings.
    fn status(&self) -> String;
}
