use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use tracing::{info, instrument};

use crate::colour_correction::{
    common::error::{CorrectionError, Result},
    engine::CorrectionEngine,
    store::{KeyValueStore, MatrixStore},
    tiff::{MosaicReader, MosaicWriter, StandardTiffReader, StandardTiffWriter, TiffOutputConfig},
    timing::PipelineTimings,
};

/// Corrects mosaic files using the store's active matrix and pattern.
pub struct TiffCorrectionPipeline<S: KeyValueStore, R: MosaicReader, W: MosaicWriter> {
    store: Arc<MatrixStore<S>>,
    engine: CorrectionEngine,
    reader: R,
    writer: W,
    config: TiffOutputConfig,
}

impl<S: KeyValueStore> TiffCorrectionPipeline<S, StandardTiffReader, StandardTiffWriter> {
    pub fn new(store: Arc<MatrixStore<S>>, engine: CorrectionEngine, config: TiffOutputConfig) -> Self {
        Self {
            store,
            engine,
            reader: StandardTiffReader,
            writer: StandardTiffWriter,
            config,
        }
    }
}

impl<S: KeyValueStore, R: MosaicReader, W: MosaicWriter> TiffCorrectionPipeline<S, R, W> {
    pub fn with_custom(
        store: Arc<MatrixStore<S>>,
        engine: CorrectionEngine,
        reader: R,
        writer: W,
        config: TiffOutputConfig,
    ) -> Self {
        Self {
            store,
            engine,
            reader,
            writer,
            config,
        }
    }

    #[instrument(skip(self, input_data, output), fields(input_size = input_data.len()))]
    pub fn correct(&self, input_data: &[u8], output: &mut dyn Write) -> Result<PipelineTimings> {
        let mut timings = PipelineTimings::new();
        info!("Starting mosaic correction");

        let mut image = timings.time("read_tiff", || self.reader.read_mosaic(input_data))?;

        let snapshot = self.store.snapshot();
        let rect = image.rect()?;
        timings.time("correct", || {
            let _span = tracing::info_span!("correct",
                width = image.width,
                height = image.height,
                pattern = %snapshot.pattern
            )
            .entered();
            self.engine.apply_snapshot(&mut image.data, rect, &snapshot)
        })?;

        timings.time("write_tiff", || self.writer.write_mosaic(&image, output, &self.config))?;

        info!(
            width = image.width,
            height = image.height,
            matrix = %snapshot.title,
            "Correction complete in {:.3}ms",
            timings.total_duration().as_secs_f64() * 1000.0
        );
        Ok(timings)
    }

    #[instrument(skip(self, input_path, output_path))]
    pub fn correct_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
    ) -> Result<PipelineTimings> {
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        info!(
            input = %input_path.display(),
            output = %output_path.display(),
            "Correcting file"
        );

        let mut timings = PipelineTimings::new();

        let input_data = timings.time("read_input_file", || {
            std::fs::read(input_path).map_err(|e| {
                CorrectionError::InputReadError(format!("{}: {}", input_path.display(), e))
            })
        })?;

        let mut output_file = timings.time("create_output_file", || {
            std::fs::File::create(output_path).map_err(|e| {
                CorrectionError::OutputWriteError(format!("{}: {}", output_path.display(), e))
            })
        })?;

        let inner = self.correct(&input_data, &mut output_file)?;
        for step in inner.steps() {
            timings.add_step(step.name.clone(), step.duration);
        }

        Ok(timings)
    }

    pub fn config(&self) -> &TiffOutputConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: TiffOutputConfig) {
        self.config = config;
    }
}
