//! CLI for urlkit.

mod commands;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use url::Url;
use urlkit_core::config::{self, ProbeConfig};

use commands::{
    run_backup, run_head, run_hide, run_query, run_resume, run_same, run_size, run_stat,
};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "urlkit")]
#[command(about = "URL comparison, HEAD probes and file attributes", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Check whether two URLs denote the same resource.
    Same { a: String, b: String },

    /// Print the declared size of a remote resource ("unknown" if none).
    Size {
        url: String,
        /// Probe timeout in seconds (default from config).
        #[arg(long, value_name = "SECS")]
        timeout: Option<u64>,
    },

    /// Check whether a server honours byte-range requests.
    Resume {
        url: String,
        /// Probe timeout in seconds (default from config).
        #[arg(long, value_name = "SECS")]
        timeout: Option<u64>,
    },

    /// Show the response head of a HEAD request.
    Head {
        url: String,
        /// Probe timeout in seconds (default from config).
        #[arg(long, value_name = "SECS")]
        timeout: Option<u64>,
    },

    /// Print a URL's query parameters.
    Query { url: String },

    /// Show file attributes for a local path.
    Stat { path: PathBuf },

    /// Show or change whether a path is excluded from backups.
    Backup {
        path: PathBuf,
        /// Mark the path (recursively) as excluded.
        #[arg(long, conflicts_with = "include")]
        exclude: bool,
        /// Clear the exclusion mark (recursively).
        #[arg(long)]
        include: bool,
    },

    /// Hide a file by dot-prefixing its name, or reveal it with --reveal.
    Hide {
        path: PathBuf,
        #[arg(long)]
        reveal: bool,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Same { a, b } => run_same(&parse_url(&a)?, &parse_url(&b)?)?,
            CliCommand::Size { url, timeout } => {
                run_size(&parse_url(&url)?, &probe_config(&cfg.probe, timeout)).await?
            }
            CliCommand::Resume { url, timeout } => {
                run_resume(&parse_url(&url)?, &probe_config(&cfg.probe, timeout)).await?
            }
            CliCommand::Head { url, timeout } => {
                run_head(&parse_url(&url)?, &probe_config(&cfg.probe, timeout)).await?
            }
            CliCommand::Query { url } => run_query(&parse_url(&url)?)?,
            CliCommand::Stat { path } => run_stat(&path)?,
            CliCommand::Backup {
                path,
                exclude,
                include,
            } => run_backup(&path, backup_change(exclude, include))?,
            CliCommand::Hide { path, reveal } => run_hide(&path, !reveal)?,
        }

        Ok(())
    }
}

fn parse_url(s: &str) -> Result<Url> {
    Url::parse(s).with_context(|| format!("invalid URL: {s}"))
}

/// `Some(true)` to exclude, `Some(false)` to include, `None` to only show.
fn backup_change(exclude: bool, include: bool) -> Option<bool> {
    match (exclude, include) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

/// Config probe settings with the command-line timeout applied.
fn probe_config(base: &ProbeConfig, timeout: Option<u64>) -> ProbeConfig {
    let mut cfg = base.clone();
    if let Some(secs) = timeout {
        cfg.timeout_secs = secs;
    }
    cfg
}

#[cfg(test)]
mod tests;
