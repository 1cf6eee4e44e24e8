//! ciphersniff - Detect cryptographic algorithms in binary data
//!
//! This tool scans a binary for the characteristic 32-bit constants of
//! well-known crypto primitives (S-boxes, round constants, IVs) and reports
//! how completely and how compactly each one was found.

mod progress;
mod render;

use anyhow::{bail, Context, Result};
use ciphersniff_core::scanner::DEFAULT_MAX_GAP;
use ciphersniff_core::{
    DetectionReport, Detector, DetectorConfig, MatcherConfig, NameFilter, NullObserver, Registry,
    ScanObserver,
};
use clap::{Parser, ValueEnum};
use progress::ProgressObserver;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn, Level};
use tracing_subscriber::EnvFilter;

/// Detect cryptographic algorithms in binary data
#[derive(Parser, Debug)]
#[command(name = "ciphersniff")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Binary data file, or '-' to read stdin
    #[arg(required_unless_present = "list")]
    file: Option<PathBuf>,

    /// Algorithm(s) to detect, e.g. 'cha,md,zip'. Blank entries are ignored,
    /// so 'aes,' selects only AES
    #[arg(short, long, default_value = "", env = "CIPHERSNIFF_FILTER")]
    filter: String,

    /// Show progress bars
    #[arg(short, long)]
    progress: bool,

    /// List supported algorithms
    #[arg(short, long)]
    list: bool,

    /// JSON file with additional algorithm constants
    #[arg(long, value_name = "FILE", env = "CIPHERSNIFF_CONSTANTS")]
    constants: Option<PathBuf>,

    /// Largest distance in bytes between matched constants that still counts as consecutive
    #[arg(long, value_name = "BYTES", default_value_t = DEFAULT_MAX_GAP)]
    max_gap: usize,

    /// Worker threads (1 = sequential, 0 = one per CPU)
    #[arg(short, long, default_value = "1")]
    jobs: usize,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Output format for reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Coloured, one line per indicator
    Text,
    /// Machine-readable JSON
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing; stdout is reserved for the report
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let registry = load_registry(cli.constants.as_deref())?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.list {
        match cli.format {
            OutputFormat::Text => render::write_supported(&registry, &mut out)?,
            OutputFormat::Json => render::write_supported_json(&registry, &mut out)?,
        }
        return Ok(());
    }

    let Some(file) = cli.file.as_deref() else {
        bail!("Input file is required");
    };

    let report = scan_file(&cli, &registry, file)?;

    match cli.format {
        OutputFormat::Text => render::write_text(&report, &mut out)?,
        OutputFormat::Json => render::write_json(&report, &mut out)?,
    }
    out.flush()?;

    Ok(())
}

/// Built-in constants, extended by a user registry if one is given
fn load_registry(constants: Option<&Path>) -> Result<Registry> {
    let registry = Registry::builtin();
    let Some(path) = constants else {
        return Ok(registry);
    };

    let extra = Registry::from_json_file(path)
        .with_context(|| format!("Failed to load constants: {}", path.display()))?;
    info!(
        "Loaded {} algorithm(s) from {}",
        extra.len(),
        path.display()
    );

    registry
        .merge(extra)
        .with_context(|| format!("Conflicting constants in {}", path.display()))
}

/// Path argument that stands for standard input
const STDIN_PATH: &str = "-";

/// Read a binary and run detection over it
fn scan_file(cli: &Cli, registry: &Registry, file: &Path) -> Result<DetectionReport> {
    let data = read_input(file)?;
    debug!("Read {} bytes from {}", data.len(), file.display());
    scan_data(cli, registry, &data)
}

/// Read the whole input: stdin for `-`, otherwise any readable path
/// (regular files, FIFOs, `/dev/stdin`)
fn read_input(file: &Path) -> Result<Vec<u8>> {
    if file == Path::new(STDIN_PATH) {
        return read_from(io::stdin().lock()).context("Failed to read input from stdin");
    }
    if file.is_dir() {
        bail!("Input path is a directory: {}", file.display());
    }
    fs::read(file).with_context(|| format!("Failed to read input file: {}", file.display()))
}

fn read_from(mut reader: impl Read) -> io::Result<Vec<u8>> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;
    Ok(data)
}

/// Run detection over an in-memory buffer
fn scan_data(cli: &Cli, registry: &Registry, data: &[u8]) -> Result<DetectionReport> {
    let filter = NameFilter::parse(&cli.filter);
    let config = DetectorConfig::new()
        .matcher(MatcherConfig::new().max_gap(cli.max_gap))
        .parallel(cli.jobs != 1);
    let detector = Detector::with_config(registry, config);

    let selected: usize = detector
        .selected(&filter)
        .map(|algorithm| algorithm.indicators().len())
        .sum();
    if selected == 0 {
        warn!("No supported algorithm matches filter '{}'", cli.filter);
    }

    if cli.progress {
        let observer = ProgressObserver::new(selected)?;
        let report = run_detection(cli.jobs, &detector, data, &filter, &observer);
        observer.finish();
        report
    } else {
        run_detection(cli.jobs, &detector, data, &filter, &NullObserver)
    }
}

/// Run the detector, on a dedicated worker pool unless `jobs` is 1
fn run_detection(
    jobs: usize,
    detector: &Detector<'_>,
    data: &[u8],
    filter: &NameFilter,
    observer: &dyn ScanObserver,
) -> Result<DetectionReport> {
    if jobs == 1 {
        return Ok(detector.detect_observed(data, filter, observer));
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(jobs)
        .build()
        .context("Failed to build worker pool")?;

    Ok(pool.install(|| detector.detect_observed(data, filter, observer)))
}
