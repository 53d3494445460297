use clap::{ArgAction, Parser};
use js2c::config::EmbedConfig;
use js2c::embedder::{BuildMode, EmbedError, EmbedOptions, Embedder};
use log::LevelFilter;
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "js2c", version, about = "Embed ./js/*.js as C arrays in a generated header")]
struct Cli {
    /// Build type: release strips comments and indentation, debug embeds verbatim
    #[arg(long, value_parser = ["release", "debug"])]
    build_type: Option<String>,
    /// File name to skip (repeatable)
    #[arg(long = "ignore", value_name = "FILE", action = ArgAction::Append)]
    ignore_files: Vec<String>,
    /// Don't require a 'main.js' file
    #[arg(long)]
    no_main: bool,
    /// Source directory of JavaScript files (default: ./js)
    #[arg(long = "js-source", value_name = "DIR")]
    js_source_path: Option<PathBuf>,
    /// Destination directory of the generated header (default: ./source)
    #[arg(long = "dest", value_name = "DIR")]
    output_path: Option<PathBuf>,
    /// Output file name (default: jerry-targetjs.h)
    #[arg(long, value_name = "FILE")]
    output_name: Option<String>,
    /// File whose text replaces the built-in license block
    #[arg(long, value_name = "FILE")]
    license: Option<PathBuf>,
    /// JSON configuration file; flags given on the command line win
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            let mut source = e.source();
            while let Some(cause) = source {
                eprintln!("  caused by: {}", cause);
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), EmbedError> {
    let opts = resolve_options(cli)?;
    let report = Embedder::new(opts).run()?;
    println!(
        "Generated: {} ({} files, {} bytes)",
        report.output_path.display(),
        report.entries.len(),
        report.embedded_bytes
    );
    Ok(())
}

// ── helpers ──────────────────────────────────────────────────────────────────

/// Defaults, then the config file, then explicit flags.
fn resolve_options(cli: Cli) -> Result<EmbedOptions, EmbedError> {
    let mut opts = match &cli.config {
        Some(path) => EmbedConfig::load(path)?.into_options(),
        None       => EmbedOptions::default(),
    };

    if let Some(mode) = cli.build_type.as_deref() {
        opts.build_mode = mode.parse::<BuildMode>()?;
    }
    opts.ignore.extend(cli.ignore_files);
    if cli.no_main {
        opts.require_main = false;
    }
    if let Some(dir) = cli.js_source_path {
        opts.source_dir = dir;
    }
    if let Some(dir) = cli.output_path {
        opts.dest_dir = dir;
    }
    if let Some(name) = cli.output_name {
        opts.output_name = name;
    }
    if let Some(license) = cli.license {
        opts.license = Some(license);
    }
    Ok(opts)
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .parse_default_env()
        .init();
}
