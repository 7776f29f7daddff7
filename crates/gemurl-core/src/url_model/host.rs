//! Host canonicalization: percent-decoding followed by IDNA (UTS #46) ToASCII.

use super::error::NormalizationError;
use percent_encoding::percent_decode_str;
use url::Host;

/// Canonical ASCII form of a host as split out by the `url` crate.
///
/// Gemini is not a WHATWG "special" scheme, so `url` hands domains back
/// opaque: still percent-encoded and in their original case. IP literals
/// arrive already parsed.
pub(crate) fn normalize_host(host: Host<&str>) -> Result<String, NormalizationError> {
    match host {
        Host::Domain(domain) => domain_to_ascii(domain),
        Host::Ipv4(addr) => Ok(addr.to_string()),
        Host::Ipv6(addr) => Ok(format!("[{addr}]")),
    }
}

fn domain_to_ascii(raw: &str) -> Result<String, NormalizationError> {
    let decoded = percent_decode_str(raw)
        .decode_utf8()
        .map_err(|e| NormalizationError::InvalidHost {
            host: raw.to_string(),
            reason: e.to_string(),
        })?;

    let ascii = idna::domain_to_ascii(&decoded).map_err(|_| NormalizationError::InvalidHost {
        host: decoded.to_string(),
        reason: "invalid internationalized label".to_string(),
    })?;

    if ascii.is_empty() {
        return Err(NormalizationError::InvalidHost {
            host: decoded.into_owned(),
            reason: "host is empty after IDNA processing".to_string(),
        });
    }
    Ok(ascii)
}
