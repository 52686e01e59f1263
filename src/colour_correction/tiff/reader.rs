use crate::colour_correction::common::error::Result;
use crate::colour_correction::tiff::types::MosaicImage;

pub trait MosaicReader {
    fn read_mosaic(&self, data: &[u8]) -> Result<MosaicImage>;
}
