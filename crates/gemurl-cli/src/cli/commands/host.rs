//! `gemurl host <url>` – print `host:port` for a URL.

use anyhow::{Context, Result};
use gemurl_core::normalize;

/// `host:port` line for `url`; the port is always spelled out.
fn host_line(url: &str) -> Result<String> {
    let normalized = normalize(url).with_context(|| format!("cannot normalize {url:?}"))?;
    Ok(normalized.host_port().to_string())
}

pub fn run_host(url: &str) -> Result<()> {
    println!("{}", host_line(url)?);
    Ok(())
}
