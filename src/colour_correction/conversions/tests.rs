use std::io::{Cursor, Write};
use std::sync::{Arc, Mutex};

use crate::colour_correction::common::error::{CorrectionError, Result};
use crate::colour_correction::conversions::TiffCorrectionPipeline;
use crate::colour_correction::engine::CorrectionEngine;
use crate::colour_correction::matrix::ColourMatrix;
use crate::colour_correction::pattern::CfaPattern;
use crate::colour_correction::store::{MatrixStore, MemoryStore};
use crate::colour_correction::tiff::{
    MosaicImage, MosaicReader, MosaicWriter, StandardTiffReader, StandardTiffWriter,
    TiffCompression, TiffOutputConfig,
};

struct MockReader {
    should_fail: bool,
    mock_data: Option<MosaicImage>,
}

impl MosaicReader for MockReader {
    fn read_mosaic(&self, _data: &[u8]) -> Result<MosaicImage> {
        if self.should_fail {
            return Err(CorrectionError::DecodeError("Mock decode error".to_string()));
        }
        Ok(self.mock_data.clone().unwrap_or(MosaicImage {
            width: 2,
            height: 2,
            data: vec![10, 20, 40, 30],
        }))
    }
}

struct MockWriter {
    should_fail: bool,
    written_data: Arc<Mutex<Vec<MosaicImage>>>,
}

impl MosaicWriter for MockWriter {
    fn write_mosaic(&self, image: &MosaicImage, _output: &mut dyn Write, _config: &TiffOutputConfig) -> Result<()> {
        if self.should_fail {
            return Err(CorrectionError::EncodeError("Mock encode error".to_string()));
        }
        self.written_data.lock().unwrap().push(image.clone());
        Ok(())
    }
}

fn store() -> Arc<MatrixStore<MemoryStore>> {
    Arc::new(MatrixStore::open(MemoryStore::new()))
}

#[test]
fn test_output_config_builder() {
    let config = TiffOutputConfig::builder()
        .compression(TiffCompression::Deflate)
        .predictor(Some(2))
        .build();

    assert_eq!(config.compression, TiffCompression::Deflate);
    assert_eq!(config.predictor, Some(2));
}

#[test]
fn test_successful_correction() {
    let written = Arc::new(Mutex::new(Vec::new()));
    let pipeline = TiffCorrectionPipeline::with_custom(
        store(),
        CorrectionEngine::default(),
        MockReader { should_fail: false, mock_data: None },
        MockWriter { should_fail: false, written_data: written.clone() },
        TiffOutputConfig::default(),
    );

    let mut output = Cursor::new(Vec::new());
    let timings = pipeline.correct(b"fake tiff data", &mut output).unwrap();

    let written = written.lock().unwrap();
    assert_eq!(written.len(), 1);
    assert_eq!(written[0].data, vec![10, 30, 30, 30]);
    assert!(timings.get_step("correct").is_some());
}

#[test]
fn test_correction_uses_active_pattern() {
    let store = store();
    let swap = ColourMatrix::new([[0.0, 0.0, 1.0], [0.0, 1.0, 0.0], [1.0, 0.0, 0.0]]);
    store.add("Swap", swap).unwrap();
    store.select("Swap").unwrap();
    store.set_pattern(CfaPattern::Bggr).unwrap();

    let written = Arc::new(Mutex::new(Vec::new()));
    let pipeline = TiffCorrectionPipeline::with_custom(
        store,
        CorrectionEngine::default(),
        MockReader { should_fail: false, mock_data: None },
        MockWriter { should_fail: false, written_data: written.clone() },
        TiffOutputConfig::default(),
    );

    pipeline.correct(b"", &mut Cursor::new(Vec::new())).unwrap();

    // BGGR: B at (0,0), R at (1,1)
    assert_eq!(written.lock().unwrap()[0].data, vec![30, 30, 30, 10]);
}

#[test]
fn test_reader_failure() {
    let written = Arc::new(Mutex::new(Vec::new()));
    let pipeline = TiffCorrectionPipeline::with_custom(
        store(),
        CorrectionEngine::default(),
        MockReader { should_fail: true, mock_data: None },
        MockWriter { should_fail: false, written_data: written.clone() },
        TiffOutputConfig::default(),
    );

    let result = pipeline.correct(b"fake tiff data", &mut Cursor::new(Vec::new()));

    assert!(matches!(result.unwrap_err(), CorrectionError::DecodeError(_)));
    assert!(written.lock().unwrap().is_empty());
}

#[test]
fn test_writer_failure() {
    let pipeline = TiffCorrectionPipeline::with_custom(
        store(),
        CorrectionEngine::default(),
        MockReader { should_fail: false, mock_data: None },
        MockWriter { should_fail: true, written_data: Arc::new(Mutex::new(Vec::new())) },
        TiffOutputConfig::default(),
    );

    let result = pipeline.correct(b"fake tiff data", &mut Cursor::new(Vec::new()));

    assert!(matches!(result.unwrap_err(), CorrectionError::EncodeError(_)));
}

#[test]
fn test_short_image_data_is_rejected() {
    let pipeline = TiffCorrectionPipeline::with_custom(
        store(),
        CorrectionEngine::default(),
        MockReader {
            should_fail: false,
            mock_data: Some(MosaicImage { width: 4, height: 4, data: vec![0; 6] }),
        },
        MockWriter { should_fail: false, written_data: Arc::new(Mutex::new(Vec::new())) },
        TiffOutputConfig::default(),
    );

    let result = pipeline.correct(b"", &mut Cursor::new(Vec::new()));

    assert!(matches!(result.unwrap_err(), CorrectionError::BufferTooSmall { .. }));
}

#[test]
fn test_tiff_file_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("frame.tiff");
    let output = dir.path().join("frame_colour_corrected.tiff");

    let frame = MosaicImage {
        width: 3,
        height: 2,
        data: vec![10, 20, 99, 40, 30, 77],
    };
    let mut encoded = Vec::new();
    StandardTiffWriter
        .write_mosaic(&frame, &mut encoded, &TiffOutputConfig::default())
        .unwrap();
    std::fs::write(&input, encoded).unwrap();

    let pipeline = TiffCorrectionPipeline::new(
        store(),
        CorrectionEngine::default(),
        TiffOutputConfig::builder().compression(TiffCompression::Lzw).build(),
    );
    let timings = pipeline.correct_file(&input, &output).unwrap();
    assert!(timings.get_step("read_input_file").is_some());

    let corrected = StandardTiffReader
        .read_mosaic(&std::fs::read(&output).unwrap())
        .unwrap();
    assert_eq!(corrected.width, 3);
    assert_eq!(corrected.height, 2);
    // Third column has no partner and passes through.
    assert_eq!(corrected.data, vec![10, 30, 99, 30, 30, 77]);
}

#[test]
fn test_missing_input_file() {
    let dir = tempfile::tempdir().unwrap();
    let pipeline = TiffCorrectionPipeline::new(
        store(),
        CorrectionEngine::default(),
        TiffOutputConfig::default(),
    );

    let result = pipeline.correct_file(dir.path().join("nope.tiff"), dir.path().join("out.tiff"));

    assert!(matches!(result.unwrap_err(), CorrectionError::InputReadError(_)));
}
