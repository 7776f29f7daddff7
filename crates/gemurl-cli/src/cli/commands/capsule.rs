//! `gemurl capsule <url>` – print the capsule prefix of a URL.

use anyhow::{Context, Result};
use gemurl_core::{
    capsule_prefix_with, normalize, CapsulePolicy, NormalizationError, NormalizedUrl,
};

/// Normalizes `url` and derives its capsule under `policy`.
fn capsule_of(url: &str, policy: &CapsulePolicy) -> Result<NormalizedUrl, NormalizationError> {
    let normalized = normalize(url)?;
    Ok(capsule_prefix_with(&normalized, policy))
}

pub fn run_capsule(url: &str, policy: &CapsulePolicy) -> Result<()> {
    let prefix = capsule_of(url, policy).with_context(|| format!("cannot normalize {url:?}"))?;
    println!("{prefix}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capsule_of_normalizes_first() {
        let policy = CapsulePolicy::default();
        let prefix = capsule_of("GEMINI://Host/./~alice/../~bob/x.gmi", &policy).unwrap();
        assert_eq!(prefix, "gemini://host/~bob/");
    }

    #[test]
    fn capsule_of_reports_normalization_errors() {
        let err = capsule_of("https://host/~alice/", &CapsulePolicy::default()).unwrap_err();
        assert!(err.is_not_gemini());
    }
}
