//! Logging init: file under XDG state dir, or graceful fallback to stderr.
//!
//! Only the CLI and config layers log; normalization itself is silent.

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "warn,gemurl=info,gemurl_core=info";

/// Where log events end up after [`init`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogSink {
    File(PathBuf),
    Stderr,
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// `~/.local/state/gemurl/gemurl.log`, with its directory created.
pub fn log_file_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("gemurl")?;
    let log_dir = xdg_dirs.get_state_home().join("gemurl");
    fs::create_dir_all(&log_dir)
        .with_context(|| format!("creating log dir {}", log_dir.display()))?;
    Ok(log_dir.join("gemurl.log"))
}

/// Install the global subscriber, appending to the state-dir log file.
///
/// If the file cannot be opened the subscriber writes to stderr instead, so
/// the CLI never fails on logging setup.
pub fn init() -> LogSink {
    let opened = log_file_path().and_then(|path| {
        let file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("opening log file {}", path.display()))?;
        Ok((path, file))
    });

    match opened {
        Ok((path, file)) => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .init();
            tracing::debug!("logging to {}", path.display());
            LogSink::File(path)
        }
        Err(err) => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_writer(std::io::stderr)
                .with_ansi(false)
                .init();
            tracing::debug!("file logging unavailable ({:#}), using stderr", err);
            LogSink::Stderr
        }
    }
}
