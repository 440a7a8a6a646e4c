//! repofind - find every git repository under a directory.
//!
//! Usage:
//!   repofind [PATH]                     List repositories as they are found
//!   repofind [PATH] --throttle-ms 200   Batch progress output
//!   repofind [PATH] --json              Print the final result as JSON
//!   repofind --help                     Show help

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::Parser;
use color_eyre::eyre::{Context, Result};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use repofind_scan::{FindOptions, ScanStats, ScanTask};

#[derive(Parser)]
#[command(
    name = "repofind",
    version,
    about = "Find every git repository under a directory",
    long_about = "repofind walks a directory tree breadth first and reports every \
                  repository root (a directory containing `.git`). Repositories \
                  are not searched for nested repositories and symbolic links are \
                  never followed.\n\n\
                  Set RUST_LOG=repofind_scan=debug to see skipped directories."
)]
struct Cli {
    /// Directory to search (defaults to current directory)
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Minimum milliseconds between progress updates (0-60000)
    #[arg(short, long, default_value_t = 0)]
    throttle_ms: u64,

    /// Options as a JSON object, e.g. '{"throttleTimeoutMS": 250}'
    #[arg(long, conflicts_with = "throttle_ms")]
    options: Option<String>,

    /// Print the final result as JSON on stdout
    #[arg(long)]
    json: bool,

    /// Do not print progress to stderr
    #[arg(short, long)]
    quiet: bool,
}

/// Final result in `--json` mode.
#[derive(Serialize)]
struct JsonReport<'a> {
    root: &'a Path,
    repositories: &'a [PathBuf],
    stats: &'a ScanStats,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let options = resolve_options(&cli)?;
    let quiet = cli.quiet;

    let mut discovered = 0usize;
    let task = ScanTask::new(&cli.path, options, move |batch: Vec<PathBuf>| {
        if quiet {
            return;
        }
        discovered += batch.len();
        let mut stderr = std::io::stderr().lock();
        for path in &batch {
            let _ = writeln!(stderr, "  {}", path.display());
        }
        let _ = writeln!(stderr, "found {discovered} repositories...");
    })
    .context("Invalid arguments")?;

    let report = task.run().await.context("Scan failed")?;

    if cli.json {
        let json = JsonReport {
            root: &cli.path,
            repositories: &report.repositories,
            stats: &report.stats,
        };
        println!("{}", serde_json::to_string_pretty(&json)?);
    } else {
        let mut stdout = std::io::stdout().lock();
        for path in &report.repositories {
            writeln!(stdout, "{}", path.display())?;
        }
    }

    if !cli.quiet {
        eprintln!(
            "{} repositories in {} directories ({:.2}s)",
            report.stats.repos_found,
            report.stats.dirs_scanned,
            report.stats.elapsed.as_secs_f64()
        );
    }

    Ok(())
}

/// Build scan options from either `--options` or `--throttle-ms`.
fn resolve_options(cli: &Cli) -> Result<FindOptions> {
    match &cli.options {
        Some(raw) => {
            let value: serde_json::Value =
                serde_json::from_str(raw).context("--options is not valid JSON")?;
            Ok(FindOptions::from_value(&value)?)
        }
        None => Ok(FindOptions::with_throttle_ms(cli.throttle_ms)),
    }
}
