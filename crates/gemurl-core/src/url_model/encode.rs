//! Canonical percent-encoding for path segments, queries and fragments.

use percent_encoding::{percent_decode_str, percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::borrow::Cow;

/// Everything except the RFC 3986 unreserved characters is escaped.
///
/// `/` is escaped too: components are split before they are re-encoded, so a
/// decoded slash is data, not a separator.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Percent-decodes to raw bytes. Malformed escapes (`%zz`, a trailing `%`) are
/// kept literally.
pub(crate) fn decode(component: &str) -> Cow<'_, [u8]> {
    percent_decode_str(component).into()
}

/// Percent-encodes raw bytes with the minimal escaping set and uppercase hex.
pub(crate) fn encode(bytes: &[u8]) -> String {
    percent_encode(bytes, COMPONENT).to_string()
}

/// Decodes then re-encodes a component, yielding its canonical spelling.
pub(crate) fn recode(component: &str) -> String {
    encode(&decode(component))
}
