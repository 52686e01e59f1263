//! Host integration module
//!
//! The surface a capture application's mono-processing stage talks to.

mod colour_correction_filter;
mod filter;


pub use colour_correction_filter::ColourCorrectionFilter;
pub use filter::{CamInfo, FilterListener, MonoFilter};
