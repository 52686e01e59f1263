//! TIFF mosaic I/O module
//!
//! Reads and writes 8-bit single-channel Bayer mosaics as grayscale TIFF files.

mod reader;
mod standard_tiff_reader;
mod standard_tiff_writer;
pub mod types;
mod writer;

pub use reader::MosaicReader;
pub use standard_tiff_reader::StandardTiffReader;
pub use standard_tiff_writer::StandardTiffWriter;
pub use types::{MosaicImage, TiffCompression, TiffOutputConfig, TiffOutputConfigBuilder};
pub use writer::MosaicWriter;
