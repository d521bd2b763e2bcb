use anyhow::Context;
use clap::{ArgAction, Parser};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gif2anim::error::ConvertError;
use gif2anim::models::ConvertConfig;
use gif2anim::services::{ConvertPipeline, ConvertReport, ConvertRequest};

#[derive(Parser)]
#[command(name = "gif2anim", version)]
#[command(about = "Convert an animated GIF into 1-bit animation data for display firmware")]
struct Cli {
    /// Animated GIF to convert
    source: PathBuf,

    /// Symbol name (defaults to the source file stem, sanitized)
    #[arg(long)]
    name: Option<String>,

    /// JSON descriptor output path (default: <json_dir>/<name>.json)
    #[arg(long)]
    json_out: Option<PathBuf>,

    /// Header output path (default: <header_dir>/<name>.h)
    #[arg(long)]
    header_out: Option<PathBuf>,

    /// Namespace path for the generated declarations, e.g. "robot::eyes"
    #[arg(long)]
    namespace: Option<String>,

    /// Manual threshold 0-255; disables dithering
    #[arg(short, long, allow_negative_numbers = true)]
    threshold: Option<i32>,

    /// Floyd-Steinberg dithering when no threshold is given (default)
    #[arg(long, overrides_with = "no_dither")]
    dither: bool,

    /// Plain 50% cut instead of Floyd-Steinberg when no threshold is given
    #[arg(long, overrides_with = "dither")]
    no_dither: bool,

    /// Complement the packed bitmaps
    #[arg(long)]
    invert: bool,

    /// Also write animation_format.h to this path
    #[arg(long)]
    format_header_out: Option<PathBuf>,

    /// Hex values per line in the byte table
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
    bytes_per_line: Option<u16>,

    /// YAML file with conversion defaults (or set GIF2ANIM_CONFIG)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Only print errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

/// Exit status for command-line usage errors, shared with configuration errors.
const USAGE_EXIT_CODE: u8 = 3;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => return usage_error(e),
    };
    init_logging(cli.verbose, cli.quiet);
    let quiet = cli.quiet;

    match run(cli) {
        Ok(report) => {
            if !quiet {
                print_report(&report);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            let code = e
                .downcast_ref::<ConvertError>()
                .map(ConvertError::exit_code)
                .unwrap_or(1);
            ExitCode::from(code)
        }
    }
}

/// `--help` and `--version` exit normally; other parse errors are
/// configuration errors.
fn usage_error(e: clap::Error) -> ExitCode {
    use clap::error::ErrorKind;

    match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
        _ => {
            let _ = e.print();
            ExitCode::from(USAGE_EXIT_CODE)
        }
    }
}

fn init_logging(verbose: u8, quiet: bool) {
    let default = match (quiet, verbose) {
        (true, _) => "gif2anim=error",
        (false, 0) => "gif2anim=warn",
        (false, 1) => "gif2anim=info",
        _ => "gif2anim=debug",
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();
}

fn run(cli: Cli) -> anyhow::Result<ConvertReport> {
    let mut config = ConvertConfig::resolve(cli.config.as_deref())
        .map_err(ConvertError::from)
        .context("Failed to load configuration")?;

    // Flags override the config file
    if let Some(namespace) = cli.namespace {
        config.namespace = namespace;
    }
    if cli.threshold.is_some() {
        config.threshold = cli.threshold;
    }
    if cli.dither {
        config.dither = true;
    }
    if cli.no_dither {
        config.dither = false;
    }
    if cli.invert {
        config.invert = true;
    }
    if let Some(n) = cli.bytes_per_line {
        config.bytes_per_line = n as usize;
    }

    let mut request = ConvertRequest::from_config(cli.source, &config);
    request.name = cli.name;
    request.json_out = cli.json_out;
    request.header_out = cli.header_out;
    request.format_header_out = cli.format_header_out;

    tracing::debug!(?request, "Starting conversion");
    let report = ConvertPipeline::new(request).run()?;
    Ok(report)
}

fn print_report(report: &ConvertReport) {
    println!(
        "Converted {}: {} frames, {} bytes per frame, {} bytes total",
        report.name, report.frame_count, report.bytes_per_frame, report.total_bytes
    );
    println!("  + {}", report.json_path.display());
    println!("  + {}", report.header_path.display());
    if let Some(path) = &report.format_header_path {
        println!("  + {}", path.display());
    }
}
