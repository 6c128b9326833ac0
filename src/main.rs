use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use lowrank_image_rs::image_pipeline::{
    CompressionConfig, CompressionStats, FileCompressionPipeline, ImageCrateReader,
    ImageFormatWriter, ResampleFilter, TiffCompression,
    svd::{DEFAULT_COST_CAP, DEFAULT_MAX_RANK},
};
use lowrank_image_rs::logger;

use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "lowrank_image", about = "Approximate an image with a rank-k SVD per color channel")]
struct Args {
    /// Image to compress (PNG, JPEG, TIFF, BMP)
    input: PathBuf,
    /// Output path; `.tif`/`.tiff` goes through the TIFF writer, other extensions pick their format
    output: PathBuf,
    /// Number of singular values kept per channel
    #[arg(short, long, default_value_t = 50, allow_negative_numbers = true)]
    rank: i64,
    /// Longest side of the working resolution
    #[arg(long, default_value_t = DEFAULT_COST_CAP)]
    cost_cap: usize,
    /// Upper bound accepted for --rank
    #[arg(long, default_value_t = DEFAULT_MAX_RANK)]
    max_rank: usize,
    #[arg(long, value_enum, default_value_t = FilterArg::Bilinear)]
    filter: FilterArg,
    #[arg(long, value_enum, default_value_t = TiffCompressionArg::None)]
    tiff_compression: TiffCompressionArg,
    /// Process the color channels one after another
    #[arg(long)]
    sequential: bool,
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FilterArg {
    Nearest,
    Bilinear,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum TiffCompressionArg {
    None,
    Lzw,
    DeflateFast,
    DeflateBalanced,
    DeflateBest,
}

impl From<FilterArg> for ResampleFilter {
    fn from(arg: FilterArg) -> Self {
        match arg {
            FilterArg::Nearest => ResampleFilter::Nearest,
            FilterArg::Bilinear => ResampleFilter::Bilinear,
        }
    }
}

impl From<TiffCompressionArg> for TiffCompression {
    fn from(arg: TiffCompressionArg) -> Self {
        match arg {
            TiffCompressionArg::None => TiffCompression::None,
            TiffCompressionArg::Lzw => TiffCompression::Lzw,
            TiffCompressionArg::DeflateFast => TiffCompression::DeflateFast,
            TiffCompressionArg::DeflateBalanced => TiffCompression::DeflateBalanced,
            TiffCompressionArg::DeflateBest => TiffCompression::DeflateBest,
        }
    }
}

fn is_tiff(path: &std::path::Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("tif") || ext.eq_ignore_ascii_case("tiff"))
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::init(if args.verbose { "debug" } else { "info" });

    let config = CompressionConfig::builder()
        .cost_cap(args.cost_cap)
        .max_rank(args.max_rank)
        .resample_filter(args.filter.into())
        .parallel_channels(!args.sequential)
        .tiff_compression(args.tiff_compression.into())
        .build();

    info!("Rank: {}", args.rank);
    info!("Working resolution cap: {}", config.cost_cap);
    info!("Resample filter: {:?}", config.resample_filter);

    let result = if is_tiff(&args.output) {
        let pipeline = FileCompressionPipeline::new(config);
        pipeline.convert_file(&args.input, &args.output, args.rank)
    } else {
        let writer = ImageFormatWriter::for_path(&args.output)?;
        let pipeline = FileCompressionPipeline::with_custom(ImageCrateReader, writer, config);
        pipeline.convert_file(&args.input, &args.output, args.rank)
    };
    let stats: CompressionStats =
        result.with_context(|| format!("compressing {}", args.input.display()))?;

    info!(
        "Rank {} on {}x{} channel matrices: {} -> {} samples, ratio {:.2}, {:.1}% saved",
        stats.rank,
        stats.rows,
        stats.columns,
        stats.original_sample_count,
        stats.compressed_sample_count,
        stats.ratio,
        stats.space_saved_percent()
    );

    Ok(())
}
