use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, bail};
use bayer_ccm::colour_correction::{
    CfaPattern, ColourMatrix, CorrectionEngine, JsonFileStore, MatrixStore, StoreConfig,
    TiffCompression, TiffCorrectionPipeline, TiffOutputConfig,
};
use bayer_ccm::logger;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;

#[derive(Parser)]
#[command(name = "bayer-ccm")]
#[command(version, about = "Colour correction matrices for raw Bayer frames", long_about = None)]
struct Cli {
    /// Settings file (defaults to ~/.bayer_ccm_matrices.json)
    #[arg(long, global = true, value_name = "FILE")]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List stored matrices
    List,
    /// Show the active matrix and pattern
    Status,
    /// Add a named matrix from nine row-major coefficients
    Add {
        title: String,
        /// Coefficients, e.g. 1.2,-0.1,-0.1,0,1,0,-0.1,-0.1,1.2
        #[arg(value_name = "COEFFS", num_args = 1.., allow_hyphen_values = true)]
        coefficients: Vec<String>,
    },
    /// Delete a named matrix
    Delete { title: String },
    /// Make a matrix active
    Select { title: String },
    /// Set the CFA pattern
    Pattern {
        /// RGGB, BGGR, GRBG or GBRG
        pattern: String,
    },
    /// Correct an 8-bit grayscale TIFF mosaic
    Apply {
        #[arg(value_name = "INPUT")]
        input: PathBuf,
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,
        #[arg(long, value_enum, default_value = "none")]
        compression: Compression,
        /// Print per-step timings
        #[arg(long)]
        timings: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Compression {
    None,
    Lzw,
    Deflate,
}

impl From<Compression> for TiffCompression {
    fn from(c: Compression) -> Self {
        match c {
            Compression::None => TiffCompression::None,
            Compression::Lzw => TiffCompression::Lzw,
            Compression::Deflate => TiffCompression::Deflate,
        }
    }
}

fn main() -> anyhow::Result<()> {
    logger::init();

    let cli = Cli::parse();

    let store_config = match cli.store {
        Some(path) => StoreConfig::builder().path(path).build(),
        None => StoreConfig::default(),
    };
    info!("Settings file: {}", store_config.path.display());
    let store = Arc::new(MatrixStore::open(JsonFileStore::from_config(&store_config)));

    match cli.command {
        Commands::List => {
            let config = store.config();
            for (title, matrix) in config.matrices() {
                let marker = if *title == config.active_title { "*" } else { " " };
                println!("{marker} {title}: {matrix}");
            }
        }
        Commands::Status => println!("{}", store.status()),
        Commands::Add { title, coefficients } => {
            let joined = coefficients.join(",");
            let matrix: ColourMatrix = joined
                .parse()
                .with_context(|| format!("invalid coefficients {joined:?}"))?;
            store.add(&title, matrix)?;
        }
        Commands::Delete { title } => store.delete(&title)?,
        Commands::Select { title } => {
            if !store.config().contains(&title) {
                eprintln!("warning: {title:?} is not defined, the identity matrix will be used");
            }
            store.select(&title)?;
        }
        Commands::Pattern { pattern } => {
            let pattern: CfaPattern = pattern.parse()?;
            store.set_pattern(pattern)?;
        }
        Commands::Apply { input, output, compression, timings } => {
            if input == output {
                bail!("input and output must differ");
            }
            let config = TiffOutputConfig::builder()
                .compression(compression.into())
                .build();
            let pipeline = TiffCorrectionPipeline::new(store.clone(), CorrectionEngine::default(), config);
            let result = pipeline
                .correct_file(&input, &output)
                .with_context(|| format!("correcting {}", input.display()))?;
            if timings {
                println!("{result}");
            }
            info!("{}", store.status());
        }
    }

    Ok(())
}
