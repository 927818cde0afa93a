//! nestwalk CLI - walk a JSON document and print one line per key.
//!
//! ```text
//! main() -> Args + NestwalkConfig -> Settings -> Walker -> render() -> stdout
//! ```
//!
//! Flags override `~/.nestwalk/config.toml` (or `--config PATH`), which
//! overrides built-in defaults. A config file that fails to parse is an error. Logs go to stderr (`RUST_LOG`, default `warn`) so stdout only
//! carries records.

mod render;
mod settings;

use std::fs;
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::Value;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use nestwalk_config::{NestwalkConfig, OutputFormat};
use nestwalk_engine::{KeyOrder, Order, Walker};

use crate::settings::Settings;

#[derive(Debug, Parser)]
#[command(name = "nestwalk", version, about = "Walk a JSON document and print every key path")]
struct Args {
    /// JSON file to walk. Reads stdin when omitted.
    file: Option<PathBuf>,

    /// Descent order: depth or breadth.
    #[arg(long)]
    order: Option<Order>,

    /// Key order within a container: lexicographic or natural.
    #[arg(long)]
    key_order: Option<KeyOrder>,

    /// Prune containers at this depth or deeper.
    #[arg(long, value_name = "N")]
    max_depth: Option<usize>,

    /// Prune containers stored under KEY. Repeatable.
    #[arg(long = "skip", value_name = "KEY")]
    skip: Vec<String>,

    /// Output format: plain or json.
    #[arg(long)]
    format: Option<OutputFormat>,

    /// Read config from PATH instead of the default location.
    #[arg(long, value_name = "PATH", conflicts_with = "no_config")]
    config: Option<PathBuf>,

    /// Ignore the config file.
    #[arg(long)]
    no_config: bool,
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("warn"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(env_filter)
        .init();
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok(text)
        }
    }
}

/// A config file that exists but is unreadable or malformed is an error.
fn load_config(args: &Args) -> Result<Option<NestwalkConfig>> {
    if args.no_config {
        return Ok(None);
    }
    match &args.config {
        Some(path) => {
            anyhow::ensure!(
                path.exists(),
                "config file {} does not exist",
                path.display()
            );
            Ok(NestwalkConfig::load_from(path)?)
        }
        None => Ok(NestwalkConfig::load()?),
    }
}

fn run(args: &Args) -> Result<()> {
    let config = load_config(args)?;
    let settings = Settings::resolve(args, config.as_ref());
    tracing::debug!(?settings, "resolved settings");

    let text = read_input(args.file.as_deref())?;
    let document: Value = serde_json::from_str(&text).context("failed to parse JSON input")?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let walker = Walker::with_options(&document, settings.options)
        .prevent_step_into(settings.pruner::<&Value>());
    for visit in walker {
        let visit = visit?;
        writeln!(out, "{}", render::render(&visit, settings.format))?;
    }
    out.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    init_tracing();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:?}");
            ExitCode::FAILURE
        }
    }
}
