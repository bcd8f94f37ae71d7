//! fsinspect - filesystem inspection from the command line.
//!
//! Usage:
//!   fsinspect scan [PATH] [-i PATTERN]...   List directories and files
//!   fsinspect hash FILE...                  SHA-256 digest of each file
//!   fsinspect exists PATH                   Report file/directory/missing
//!   fsinspect ensure-dir PATH               Create a directory if missing
//!   fsinspect rm-file PATH                  Remove a file if present
//!   fsinspect rm-dir PATH                   Remove a directory tree if present
//!   fsinspect ping HOST                     Probe host reachability
//!   fsinspect exec PROGRAM [ARGS]...        Run a program, print its output
//!   fsinspect --help                        Show help

use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{Context, Result};
use tracing_subscriber::EnvFilter;

use fsinspect_digest::file_hash;
use fsinspect_host::{color, ping, run_capture};
use fsinspect_ops::{
    directory_exists, ensure_directory_exists, file_exists, remove_directory_if_exists,
    remove_file_if_exists,
};
use fsinspect_scan::{DirectoryScanner, ScanConfig, ScanResult};

#[derive(Parser)]
#[command(
    name = "fsinspect",
    version,
    about = "Filesystem inspection: tree scans, content digests, idempotent create/remove",
    long_about = "fsinspect walks directory trees, computes SHA-256 content digests and \
                  creates or removes files and directories without failing when the \
                  work is already done.\n\n\
                  Set RUST_LOG to control log output (default: warn)."
)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Walk a directory tree and list its directories and files
    Scan {
        /// Root to scan (defaults to the config root, then the current directory)
        path: Option<PathBuf>,

        /// Leave out any path containing this substring (repeatable)
        #[arg(short, long = "ignore", value_name = "PATTERN")]
        ignore: Vec<String>,

        /// Do not descend into ignored directories
        #[arg(long)]
        prune: bool,

        /// Load scan settings from a JSON file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Print the SHA-256 digest of files
    Hash {
        /// Files to hash
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Report whether a path is a file, a directory, or missing
    Exists {
        path: PathBuf,
    },

    /// Create a directory and its parents if it does not exist
    EnsureDir {
        path: PathBuf,
    },

    /// Remove a file if it exists
    RmFile {
        path: PathBuf,
    },

    /// Remove a directory and everything in it if it exists
    RmDir {
        path: PathBuf,
    },

    /// Check whether a host answers a ping
    Ping {
        host: String,
    },

    /// Run a program and print its captured output
    Exec {
        program: String,

        /// Arguments passed through to the program
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Scan {
            path,
            ignore,
            prune,
            config,
            format,
        } => {
            run_scan(path, ignore, prune, config.as_deref(), format)?;
        }
        Command::Hash { files, format } => {
            run_hash(&files, format)?;
        }
        Command::Exists { path } => {
            run_exists(&path);
        }
        Command::EnsureDir { path } => {
            ensure_directory_exists(&path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            if !directory_exists(&path) {
                eprintln!(
                    "{} {} exists but is not a directory",
                    paint(&io::stderr(), color::warn, "warning:"),
                    path.display()
                );
            }
        }
        Command::RmFile { path } => {
            remove_file_if_exists(&path)
                .with_context(|| format!("Failed to remove {}", path.display()))?;
        }
        Command::RmDir { path } => {
            remove_directory_if_exists(&path)
                .with_context(|| format!("Failed to remove {}", path.display()))?;
        }
        Command::Ping { host } => {
            if ping(&host) {
                let mark = paint(&io::stdout(), color::green, "✓");
                println!("{mark} {host} is reachable");
            } else {
                let mark = paint(&io::stdout(), color::red, "✗");
                println!("{mark} {host} is unreachable");
            }
        }
        Command::Exec { program, args } => {
            let output = run_capture(&program, &args)?;
            print!("{output}");
        }
    }

    Ok(())
}

/// Install the stderr log subscriber.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Run a scan and print the directories and files found.
fn run_scan(
    path: Option<PathBuf>,
    ignore: Vec<String>,
    prune: bool,
    config_path: Option<&Path>,
    format: OutputFormat,
) -> Result<()> {
    let mut config = match config_path {
        Some(config_path) => load_config(config_path)?,
        None => ScanConfig::default(),
    };
    if let Some(path) = path {
        config.root = path;
    }
    config.ignore_patterns.extend(ignore);
    config.prune_ignored |= prune;

    eprintln!(
        "{}",
        paint(
            &io::stderr(),
            color::info,
            format!("Scanning {}...", config.root.display())
        )
    );

    let result = DirectoryScanner::new(config).scan().context("Scan failed")?;

    match format {
        OutputFormat::Text => print_scan(&result),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
    }

    Ok(())
}

/// Load a scan config from a JSON file.
fn load_config(path: &Path) -> Result<ScanConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Invalid config {}", path.display()))
}

fn print_scan(result: &ScanResult) {
    for dir in &result.directories {
        println!("{}", paint(&io::stdout(), color::purple, format!("{}/", dir.display())));
    }
    for file in &result.files {
        println!("{}", file.display());
    }

    eprintln!();
    eprintln!(
        " {} directories, {} files",
        result.directories.len(),
        result.files.len()
    );
}

/// Hash each file, stopping at the first failure.
fn run_hash(files: &[PathBuf], format: OutputFormat) -> Result<()> {
    let mut digests = Vec::with_capacity(files.len());
    for file in files {
        let hex = file_hash(file).with_context(|| format!("Failed to hash {}", file.display()))?;
        digests.push((file, hex));
    }

    match format {
        OutputFormat::Text => {
            for (file, hex) in &digests {
                println!("{hex}  {}", file.display());
            }
        }
        OutputFormat::Json => {
            let entries: Vec<_> = digests
                .iter()
                .map(|(file, hex)| {
                    serde_json::json!({
                        "path": file.display().to_string(),
                        "sha256": hex,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
    }

    Ok(())
}

fn run_exists(path: &Path) {
    let kind = if directory_exists(path) {
        "directory"
    } else if file_exists(path) {
        "file"
    } else {
        "missing"
    };
    println!("{}: {kind}", path.display());
}

/// Apply a color helper only when `stream` is a terminal.
fn paint<S: IsTerminal>(
    stream: &S,
    style: fn(String) -> String,
    text: impl Into<String>,
) -> String {
    let text = text.into();
    if stream.is_terminal() {
        style(text)
    } else {
        text
    }
}
