//! `gemurl normalize <url>` – print the canonical URL.

use anyhow::{Context, Result};
use gemurl_core::normalize;

pub fn run_normalize(url: &str) -> Result<()> {
    let normalized = normalize(url).with_context(|| format!("cannot normalize {url:?}"))?;
    tracing::debug!("normalized {} -> {}", url, normalized);
    println!("{normalized}");
    Ok(())
}
