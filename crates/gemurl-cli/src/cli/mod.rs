//! CLI for gemurl.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use gemurl_core::config;

use commands::{run_capsule, run_completions, run_host, run_man, run_normalize};

/// Top-level CLI for gemurl.
#[derive(Debug, Parser)]
#[command(name = "gemurl")]
#[command(about = "Normalize Gemini URLs and derive capsule prefixes", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the canonical form of a Gemini URL.
    Normalize {
        /// URL to normalize.
        url: String,
    },

    /// Print the capsule prefix (content root) a Gemini URL belongs to.
    Capsule {
        /// URL whose capsule to derive.
        url: String,
    },

    /// Print the host and port a client connects to for a Gemini URL.
    Host {
        /// URL to take the authority from.
        url: String,
    },

    /// Print shell completions to stdout.
    Completions {
        /// Target shell.
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Print the man page (roff) to stdout.
    Man,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Normalize { url } => run_normalize(&url)?,
            CliCommand::Capsule { url } => {
                let cfg = config::load()?;
                tracing::debug!("loaded config: {:?}", cfg);
                run_capsule(&url, &cfg.capsule)?;
            }
            CliCommand::Host { url } => run_host(&url)?,
            CliCommand::Completions { shell } => run_completions(shell),
            CliCommand::Man => run_man()?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
