use std::io::Write;

use crate::colour_correction::common::error::Result;
use crate::colour_correction::tiff::types::{MosaicImage, TiffOutputConfig};

pub trait MosaicWriter {
    fn write_mosaic(&self, image: &MosaicImage, output: &mut dyn Write, config: &TiffOutputConfig) -> Result<()>;
}
