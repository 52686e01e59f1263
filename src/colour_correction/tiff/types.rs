//! Mosaic image and TIFF output configuration types

use crate::colour_correction::common::error::{CorrectionError, Result};
use crate::colour_correction::engine::Rect;

/// A full mono frame holding one 8-bit sample per site
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MosaicImage {
    /// Width of the frame in pixels (also the row stride)
    pub width: usize,
    /// Height of the frame in pixels
    pub height: usize,
    /// Row-major samples
    pub data: Vec<u8>,
}

impl MosaicImage {
    /// Region covering the whole frame.
    pub fn rect(&self) -> Result<Rect> {
        let invalid = || CorrectionError::InvalidGeometry {
            x: 0,
            y: 0,
            width: i32::try_from(self.width).unwrap_or(i32::MAX),
            height: i32::try_from(self.height).unwrap_or(i32::MAX),
        };
        let width = i32::try_from(self.width).map_err(|_| invalid())?;
        let height = i32::try_from(self.height).map_err(|_| invalid())?;
        Ok(Rect::sized(width, height))
    }
}

/// TIFF compression methods
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TiffCompression {
    /// No compression (fastest, largest file)
    None,
    /// LZW compression
    Lzw,
    /// Deflate compression, balanced level
    Deflate,
}

/// Configuration for writing corrected mosaics
#[derive(Debug, Clone)]
pub struct TiffOutputConfig {
    /// Compression method to use
    pub compression: TiffCompression,
    /// Predictor value for compression (2 for horizontal differencing)
    pub predictor: Option<u16>,
}

impl Default for TiffOutputConfig {
    fn default() -> Self {
        Self {
            compression: TiffCompression::None,
            predictor: None,
        }
    }
}

impl TiffOutputConfig {
    pub fn builder() -> TiffOutputConfigBuilder {
        TiffOutputConfigBuilder::default()
    }
}

/// Builder for TiffOutputConfig
#[derive(Default)]
pub struct TiffOutputConfigBuilder {
    compression: Option<TiffCompression>,
    predictor: Option<Option<u16>>,
}

impl TiffOutputConfigBuilder {
    pub fn compression(mut self, compression: TiffCompression) -> Self {
        self.compression = Some(compression);
        self
    }

    pub fn predictor(mut self, predictor: Option<u16>) -> Self {
        self.predictor = Some(predictor);
        self
    }

    pub fn build(self) -> TiffOutputConfig {
        let default = TiffOutputConfig::default();
        TiffOutputConfig {
            compression: self.compression.unwrap_or(default.compression),
            predictor: self.predictor.unwrap_or(default.predictor),
        }
    }
}
