//! CLI for the logofetch image resolver.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use logofetch_core::config;
use logofetch_core::resolve::Resolver;

use commands::{run_resolve, run_snapshot, run_validate};

/// Top-level CLI for the logofetch image resolver.
#[derive(Debug, Parser)]
#[command(name = "logofetch")]
#[command(about = "logofetch: resolve a usable logo image URL from a seed URL", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Resolve a seed URL (image or page) to a validated image URL.
    Resolve {
        /// Direct image URL or page URL to resolve.
        url: String,

        /// Print the result as JSON instead of human-readable lines.
        #[arg(long)]
        json: bool,

        /// Abort the whole resolution after this many seconds.
        #[arg(long, value_name = "SECS")]
        timeout_secs: Option<u64>,
    },

    /// Check whether a URL points at a fetchable, well-formed image.
    Validate {
        /// Image URL to check.
        url: String,
    },

    /// Look up the closest archived snapshot of a URL.
    Snapshot {
        /// URL to look up in the archive.
        url: String,

        /// Print the result as JSON instead of human-readable lines.
        #[arg(long)]
        json: bool,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        let resolver = Resolver::from_config(&cfg)?;

        match cli.command {
            CliCommand::Resolve {
                url,
                json,
                timeout_secs,
            } => run_resolve(&resolver, &url, json, timeout_secs).await?,
            CliCommand::Validate { url } => run_validate(resolver.fetcher(), &url).await?,
            CliCommand::Snapshot { url, json } => {
                run_snapshot(resolver.fetcher(), &cfg.archive_endpoint, &url, json).await?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
