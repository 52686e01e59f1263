use std::io::Cursor;

use ::tiff::decoder::{Decoder, DecodingResult};
use ::tiff::ColorType;
use tracing::debug;

use crate::colour_correction::common::error::{CorrectionError, Result};
use crate::colour_correction::tiff::reader::MosaicReader;
use crate::colour_correction::tiff::types::MosaicImage;

/// Reads 8-bit grayscale TIFF files as mosaics.
pub struct StandardTiffReader;

impl MosaicReader for StandardTiffReader {
    fn read_mosaic(&self, data: &[u8]) -> Result<MosaicImage> {
        debug!("Decoding TIFF mosaic, {} bytes", data.len());

        let mut decoder = Decoder::new(Cursor::new(data))
            .map_err(|e| CorrectionError::DecodeError(e.to_string()))?;

        let (width, height) = decoder
            .dimensions()
            .map_err(|e| CorrectionError::DecodeError(e.to_string()))?;

        let color_type = decoder
            .colortype()
            .map_err(|e| CorrectionError::DecodeError(e.to_string()))?;
        if color_type != ColorType::Gray(8) {
            return Err(CorrectionError::DecodeError(format!(
                "expected 8-bit grayscale mosaic, found {:?}",
                color_type
            )));
        }

        let data = match decoder
            .read_image()
            .map_err(|e| CorrectionError::DecodeError(e.to_string()))?
        {
            DecodingResult::U8(values) => values,
            _ => {
                return Err(CorrectionError::DecodeError(
                    "unexpected sample format".to_string(),
                ))
            }
        };

        debug!("Decoded mosaic: {}x{}", width, height);

        Ok(MosaicImage {
            width: width as usize,
            height: height as usize,
            data,
        })
    }
}
