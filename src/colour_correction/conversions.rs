//! File conversions module
//!
//! Orchestrates reading a mosaic file, correcting it and writing it back.

mod tiff_correction;

#[cfg(test)]
mod tests;

pub use tiff_correction::TiffCorrectionPipeline;
