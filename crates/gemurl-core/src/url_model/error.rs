//! Error type for Gemini URL normalization.

/// Why a string could not be normalized into a Gemini URL.
///
/// Every failure is a property of the input; nothing here is transient.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NormalizationError {
    /// The string is not a syntactically valid absolute URL.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The URL is valid but uses another scheme. Crawlers usually skip these.
    #[error("URL is not a Gemini URL (scheme {0:?})")]
    NotGeminiScheme(String),

    #[error("Gemini URI scheme requires the authority component")]
    MissingAuthority,

    #[error("Gemini URI scheme does not support userinfo components")]
    UserinfoNotAllowed,

    /// Bad percent-encoding in the host or a label IDNA refuses.
    #[error("invalid host {host:?}: {reason}")]
    InvalidHost { host: String, reason: String },
}

impl NormalizationError {
    /// True for links that are well-formed but not Gemini links.
    pub fn is_not_gemini(&self) -> bool {
        matches!(self, NormalizationError::NotGeminiScheme(_))
    }
}
