//! fsvars: FullStory-style property name normalizer.
//!
//! Reads newline-delimited JSON (raw property bags or analytics events),
//! normalizes property names and writes one JSON object per input line. This
//! crate exposes the CLI definition and [`run`] so integration tests can
//! drive the binary in-process.
//!
//! # Architecture
//!
//! ```text
//! Feed (stdin | file) ──► Normalizer / Preparer ──► NDJSON writer
//! ```

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use fsvars_core::config::Config;
use fsvars_core::{DateDetection, NormalizeOptions, Normalizer};
use fsvars_feeds::{Feed, FeedError, FeedKind, Preparer};

#[derive(Debug, Parser)]
#[command(name = "fsvars", version, about = "Normalize property names for FullStory-style destinations")]
pub struct Cli {
    /// Config file (defaults to $XDG_CONFIG_HOME/fsvars/config.toml when present).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Write debug logs to /tmp/fsvars-debug.log (tail -f to inspect).
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Normalize flat JSON objects, one per line.
    Normalize(InputArgs),
    /// Prepare track/identify/delete events, one per line.
    Events(InputArgs),
}

#[derive(Debug, Args)]
pub struct InputArgs {
    /// Camel-case property names (suffixes are left untouched).
    #[arg(long)]
    pub camel_case: bool,

    /// Strip characters outside [A-Za-z0-9_] from property names.
    #[arg(long)]
    pub sanitize: bool,

    /// Only treat genuine dates as dates.
    #[arg(long)]
    pub strict_dates: bool,

    /// Input file; stdin when omitted or `-`.
    pub input: Option<PathBuf>,
}

impl InputArgs {
    /// Layer the command-line flags over the configured options.
    fn options(&self, config: &Config) -> NormalizeOptions {
        let mut opts = config.normalize_options();
        opts.camel_case |= self.camel_case;
        opts.sanitize |= self.sanitize;
        if self.strict_dates {
            opts.dates = DateDetection::Strict;
        }
        opts
    }
}

/// Line counts for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub written: usize,
    pub skipped: usize,
}

/// Execute `cli`, writing NDJSON to `out`.
pub fn run(cli: Cli, out: &mut impl Write) -> anyhow::Result<Summary> {
    let config = Config::load(cli.config.as_deref()).context("failed to load configuration")?;
    config_loaded(&config);

    let summary = match cli.command {
        Command::Normalize(args) => {
            let normalizer = Normalizer::new(args.options(&config));
            let feed = Feed::open(FeedKind::from(args.input))?;
            write_all(feed.bags().map(|bag| bag.map(|b| normalizer.normalize(b))), out)?
        }
        Command::Events(args) => {
            let preparer = Preparer::new(
                args.options(&config),
                config.identify.reserved_traits.clone(),
            );
            let feed = Feed::open(FeedKind::from(args.input))?;
            write_all(feed.events().map(|ev| ev.map(|e| preparer.prepare(e))), out)?
        }
    };

    tracing::info!(written = summary.written, skipped = summary.skipped, "run complete");
    Ok(summary)
}

fn config_loaded(config: &Config) {
    tracing::debug!(
        camel_case = config.normalize.camel_case,
        sanitize = config.normalize.sanitize,
        date_detection = ?config.normalize.date_detection,
        reserved_traits = ?config.identify.reserved_traits,
        "loaded config"
    );
}

fn write_all<T, I>(items: I, out: &mut impl Write) -> anyhow::Result<Summary>
where
    T: serde::Serialize,
    I: Iterator<Item = Result<T, FeedError>>,
{
    let mut summary = Summary::default();
    for item in items {
        match item {
            Ok(value) => {
                serde_json::to_writer(&mut *out, &value).context("failed to encode output")?;
                out.write_all(b"\n").context("failed to write output")?;
                summary.written += 1;
            }
            Err(e) if e.is_recoverable() => {
                tracing::warn!(error = %e, "skipping line");
                summary.skipped += 1;
            }
            Err(e) => return Err(e).context("failed to read input"),
        }
    }
    out.flush().context("failed to flush output")?;
    Ok(summary)
}
