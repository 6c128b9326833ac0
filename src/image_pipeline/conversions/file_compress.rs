use tracing::{info, instrument};
use std::io::Write;
use std::path::Path;

use crate::image_pipeline::{
    common::error::{CompressionError, Result},
    config::CompressionConfig,
    encode::{RasterWriter, StandardTiffWriter},
    raster::{ImageCrateReader, RasterReader},
    svd::{CompressionStats, SvdCompressor},
};

pub struct FileCompressionPipeline<R: RasterReader, W: RasterWriter> {
    reader: R,
    writer: W,
    compressor: SvdCompressor,
}

impl FileCompressionPipeline<ImageCrateReader, StandardTiffWriter> {
    pub fn new(config: CompressionConfig) -> Self {
        Self {
            reader: ImageCrateReader,
            writer: StandardTiffWriter,
            compressor: SvdCompressor::new(config),
        }
    }
}

impl<R: RasterReader, W: RasterWriter> FileCompressionPipeline<R, W> {
    pub fn with_custom(reader: R, writer: W, config: CompressionConfig) -> Self {
        Self {
            reader,
            writer,
            compressor: SvdCompressor::new(config),
        }
    }

    #[instrument(skip(self, input_data, output), fields(input_size = input_data.len()))]
    pub fn convert(&self, input_data: &[u8], output: &mut dyn Write, rank: i64) -> Result<CompressionStats> {
        info!("Starting rank-{} compression", rank);

        let image = {
            let _span = tracing::info_span!("decode").entered();
            self.reader.read_raster(input_data)?
        };

        let (reconstructed, stats) = {
            let _span = tracing::info_span!("compress",
                width = image.width,
                height = image.height
            ).entered();
            self.compressor.compress(&image, rank)?
        };

        {
            let _span = tracing::info_span!("encode").entered();
            self.writer.write_raster(&reconstructed, output, self.compressor.config())?;
        }

        info!(
            width = image.width,
            height = image.height,
            rank = stats.rank,
            ratio = stats.ratio,
            "Conversion complete"
        );
        Ok(stats)
    }

    #[instrument(skip(self, input_path, output_path))]
    pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
        rank: i64,
    ) -> Result<CompressionStats> {
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        info!(
            input = %input_path.display(),
            output = %output_path.display(),
            "Compressing file"
        );

        let input_data = {
            let _span = tracing::info_span!("read_input_file").entered();
            std::fs::read(input_path).map_err(|e| {
                CompressionError::InputReadError(format!("{}: {}", input_path.display(), e))
            })?
        };

        // Encode into memory first so a failed compression never truncates an existing output.
        let mut encoded = Vec::new();
        let stats = self.convert(&input_data, &mut encoded, rank)?;

        {
            let _span = tracing::info_span!("write_output_file").entered();
            std::fs::write(output_path, &encoded).map_err(|e| {
                CompressionError::OutputWriteError(format!("{}: {}", output_path.display(), e))
            })?;
        }

        Ok(stats)
    }

    pub fn compressor(&self) -> &SvdCompressor {
        &self.compressor
    }

    pub fn config(&self) -> &CompressionConfig {
        self.compressor.config()
    }

    pub fn set_config(&mut self, config: CompressionConfig) {
        self.compressor.set_config(config);
    }
}
