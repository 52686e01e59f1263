//! Correction engine module
//!
//! Applies a colour matrix to a Bayer mosaic, one 2x2 block at a time.

mod correction_engine;
pub mod types;


pub use correction_engine::CorrectionEngine;
pub use types::{EngineConfig, EngineConfigBuilder, Rect};
