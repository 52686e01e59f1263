use std::io::Write;

use tracing::debug;

use crate::colour_correction::common::error::{CorrectionError, Result};
use crate::colour_correction::tiff::types::{MosaicImage, TiffCompression, TiffOutputConfig};
use crate::colour_correction::tiff::writer::MosaicWriter;

pub struct StandardTiffWriter;

impl MosaicWriter for StandardTiffWriter {
    fn write_mosaic(&self, image: &MosaicImage, output: &mut dyn Write, config: &TiffOutputConfig) -> Result<()> {
        debug!("Encoding TIFF mosaic: {}x{}", image.width, image.height);

        let mut buffer = Vec::new();

        let compression = match config.compression {
            TiffCompression::None => ::tiff::encoder::Compression::Uncompressed,
            TiffCompression::Lzw => ::tiff::encoder::Compression::Lzw,
            TiffCompression::Deflate => ::tiff::encoder::Compression::Deflate(
                ::tiff::encoder::compression::DeflateLevel::Balanced,
            ),
        };

        let mut encoder = ::tiff::encoder::TiffEncoder::new(std::io::Cursor::new(&mut buffer))
            .map_err(|e| CorrectionError::EncodeError(e.to_string()))?
            .with_compression(compression);

        if let Some(predictor_val) = config.predictor {
            let predictor = match predictor_val {
                2 => ::tiff::tags::Predictor::Horizontal,
                _ => ::tiff::tags::Predictor::None,
            };
            encoder = encoder.with_predictor(predictor);
        }

        encoder
            .write_image::<::tiff::encoder::colortype::Gray8>(
                image.width as u32,
                image.height as u32,
                &image.data,
            )
            .map_err(|e| CorrectionError::EncodeError(e.to_string()))?;

        output.write_all(&buffer)?;

        debug!("TIFF encoding complete");
        Ok(())
    }
}
