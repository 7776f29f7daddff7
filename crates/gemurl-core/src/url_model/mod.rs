//! Gemini URL normalization.
//!
//! Turns arbitrary link text into one canonical, comparable string per
//! resource, and derives the connection authority and the capsule root from
//! it. Everything here is pure: string in, value or error out.

mod capsule;
mod encode;
mod error;
mod host;
mod path;

pub use capsule::{capsule_prefix, capsule_prefix_with, CapsulePolicy};
pub use error::NormalizationError;

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use url::{Host, Url};

/// The Gemini URI scheme, in canonical case.
pub const SCHEME: &str = "gemini";

/// Port implied when a Gemini URL carries none.
pub const DEFAULT_PORT: u16 = 1965;

/// A Gemini URL in canonical form.
///
/// Only [`normalize`] builds one, so holding a `NormalizedUrl` means the
/// canonical-form invariants hold. Equality, ordering and hashing follow the
/// canonical string.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NormalizedUrl {
    serialization: String,
    host: String,
    port: Option<u16>,
    path: String,
    query: Option<String>,
    fragment: Option<String>,
}

/// Where a client connects for a URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HostPort {
    /// ASCII host name, or a bare IP address (IPv6 without brackets).
    pub host: String,
    pub port: u16,
}

/// Normalizes `raw` into its canonical Gemini form.
///
/// # Examples
///
/// - `normalize("GEMINI://Example.com:1965/a/./b/../c")` → `"gemini://example.com/a/c"`
/// - `normalize("gemini://host/?")` → `"gemini://host/?"` (empty query kept)
/// - `normalize("https://host/")` → `Err(NotGeminiScheme)`
pub fn normalize(raw: &str) -> Result<NormalizedUrl, NormalizationError> {
    let parsed = Url::parse(raw)?;

    if !parsed.scheme().eq_ignore_ascii_case(SCHEME) {
        return Err(NormalizationError::NotGeminiScheme(
            parsed.scheme().to_string(),
        ));
    }

    let host = match parsed.host() {
        None | Some(Host::Domain("")) => return Err(NormalizationError::MissingAuthority),
        Some(host) => host,
    };

    if !parsed.username().is_empty() || parsed.password().is_some() {
        return Err(NormalizationError::UserinfoNotAllowed);
    }

    let host = host::normalize_host(host)?;

    let port = match parsed.port() {
        Some(0) => return Err(url::ParseError::InvalidPort.into()),
        Some(DEFAULT_PORT) | None => None,
        Some(port) => Some(port),
    };

    Ok(NormalizedUrl::from_parts(
        host,
        port,
        path::normalize_path(&path::raw_path(raw)),
        parsed.query().map(encode::recode),
        parsed.fragment().map(encode::recode),
    ))
}

/// Host and port of a normalized URL; the port defaults to [`DEFAULT_PORT`].
pub fn host_port(url: &NormalizedUrl) -> HostPort {
    let host = url.host();
    let host = host
        .strip_prefix('[')
        .and_then(|h| h.strip_suffix(']'))
        .unwrap_or(host);
    HostPort {
        host: host.to_string(),
        port: url.port().unwrap_or(DEFAULT_PORT),
    }
}

impl NormalizedUrl {
    fn from_parts(
        host: String,
        port: Option<u16>,
        path: String,
        query: Option<String>,
        fragment: Option<String>,
    ) -> Self {
        let mut serialization = format!("{SCHEME}://{host}");
        if let Some(port) = port {
            serialization.push_str(&format!(":{port}"));
        }
        serialization.push_str(&path);
        // An empty query or fragment still gets its delimiter.
        if let Some(query) = &query {
            serialization.push('?');
            serialization.push_str(query);
        }
        if let Some(fragment) = &fragment {
            serialization.push('#');
            serialization.push_str(fragment);
        }

        Self {
            serialization,
            host,
            port,
            path,
            query,
            fragment,
        }
    }

    /// Same authority, new path, no query or fragment.
    fn with_root(&self, path: String) -> Self {
        Self::from_parts(self.host.clone(), self.port, path, None, None)
    }

    pub fn as_str(&self) -> &str {
        &self.serialization
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// The explicit port, if it differs from [`DEFAULT_PORT`].
    pub fn port(&self) -> Option<u16> {
        self.port
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// `Some("")` for a URL ending in a bare `?`.
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    /// `Some("")` for a URL ending in a bare `#`.
    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    pub fn host_port(&self) -> HostPort {
        host_port(self)
    }

    pub fn capsule_prefix(&self) -> NormalizedUrl {
        capsule_prefix(self)
    }
}

impl fmt::Display for NormalizedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialization)
    }
}

impl AsRef<str> for NormalizedUrl {
    fn as_ref(&self) -> &str {
        &self.serialization
    }
}

impl FromStr for NormalizedUrl {
    type Err = NormalizationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        normalize(s)
    }
}

impl TryFrom<String> for NormalizedUrl {
    type Error = NormalizationError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        normalize(&s)
    }
}

impl From<NormalizedUrl> for String {
    fn from(url: NormalizedUrl) -> Self {
        url.serialization
    }
}

impl PartialEq for NormalizedUrl {
    fn eq(&self, other: &Self) -> bool {
        self.serialization == other.serialization
    }
}

impl Eq for NormalizedUrl {}

impl PartialEq<str> for NormalizedUrl {
    fn eq(&self, other: &str) -> bool {
        self.serialization == other
    }
}

impl PartialEq<&str> for NormalizedUrl {
    fn eq(&self, other: &&str) -> bool {
        self.serialization == *other
    }
}

impl Hash for NormalizedUrl {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.serialization.hash(state);
    }
}

impl PartialOrd for NormalizedUrl {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for NormalizedUrl {
    fn cmp(&self, other: &Self) -> Ordering {
        self.serialization.cmp(&other.serialization)
    }
}

impl fmt::Display for HostPort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.host.contains(':') {
            write!(f, "[{}]:{}", self.host, self.port)
        } else {
            write!(f, "{}:{}", self.host, self.port)
        }
    }
}

impl From<HostPort> for (String, u16) {
    fn from(hp: HostPort) -> Self {
        (hp.host, hp.port)
    }
}
