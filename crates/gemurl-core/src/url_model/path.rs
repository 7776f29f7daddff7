//! Path canonicalization: segment re-encoding and dot-segment removal.

use super::encode::{decode, encode};

/// Path text of `raw` exactly as written, before any splitter rewriting.
///
/// Only called on input `url::Url::parse` accepted with an authority, so
/// `raw` has the shape `scheme://authority[path][?query][#fragment]`.
/// Surrounding C0/space and embedded tab/newline are dropped the way the
/// splitter drops them.
pub(crate) fn raw_path(raw: &str) -> String {
    let cleaned: String = raw
        .trim_matches(|c: char| c <= ' ')
        .chars()
        .filter(|c| !matches!(c, '\t' | '\n' | '\r'))
        .collect();

    let rest = cleaned.split_once(':').map_or("", |(_, rest)| rest);
    let Some(hier) = rest.strip_prefix("//") else {
        return String::new();
    };
    let hier = &hier[..hier.find(['?', '#']).unwrap_or(hier.len())];
    match hier.find('/') {
        Some(start) => hier[start..].to_string(),
        None => String::new(),
    }
}

/// Canonicalizes the path of a Gemini URL.
///
/// Each segment is percent-decoded before it is inspected, so `%2e` and
/// `%2E%2E` count as dot segments. `.` is dropped, `..` pops the previous
/// segment and is discarded when nothing is left to pop. Empty segments
/// (`//`, trailing `/`) are kept. The result always starts with `/`.
pub(crate) fn normalize_path(path: &str) -> String {
    if path.is_empty() {
        return "/".to_string();
    }

    let rest = path.strip_prefix('/').unwrap_or(path);
    let mut stack: Vec<String> = Vec::new();

    for segment in rest.split('/') {
        match decode(segment).as_ref() {
            b"." => {}
            b".." => {
                stack.pop();
            }
            bytes => stack.push(encode(bytes)),
        }
    }

    if stack.is_empty() {
        return "/".to_string();
    }

    let mut out = String::with_capacity(path.len());
    for segment in &stack {
        out.push('/');
        out.push_str(segment);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_path_is_untouched_text() {
        assert_eq!(raw_path("gemini://host/a/b/.."), "/a/b/..");
        assert_eq!(raw_path("gemini://host:1970/a/%2e?x/y#z"), "/a/%2e");
        assert_eq!(raw_path("gemini://host#/frag"), "");
        assert_eq!(raw_path("gemini://host?/q"), "");
        assert_eq!(raw_path(" gemini://[::1]/a\tb "), "/ab");
    }

    #[test]
    fn empty_is_root() {
        assert_eq!(normalize_path(""), "/");
        assert_eq!(normalize_path("/"), "/");
    }

    #[test]
    fn resolves_dot_segments() {
        assert_eq!(normalize_path("/a/./b/../c"), "/a/c");
        assert_eq!(normalize_path("/a/b/.."), "/a");
        assert_eq!(normalize_path("/a/.."), "/");
    }

    #[test]
    fn clamps_at_root() {
        assert_eq!(normalize_path("/../../a"), "/a");
        assert_eq!(normalize_path("/.."), "/");
    }

    #[test]
    fn encoded_dots_are_dot_segments() {
        assert_eq!(normalize_path("/%2e"), "/");
        assert_eq!(normalize_path("/a/%2E%2e/b"), "/b");
    }

    #[test]
    fn keeps_empty_segments() {
        assert_eq!(normalize_path("/a/"), "/a/");
        assert_eq!(normalize_path("//a"), "//a");
        assert_eq!(normalize_path("/a//b/"), "/a//b/");
    }

    #[test]
    fn encoded_slash_stays_inside_segment() {
        assert_eq!(normalize_path("/a%2fb"), "/a%2Fb");
        assert_eq!(normalize_path("/a%2Fb/.."), "/");
    }

    #[test]
    fn canonical_segment_encoding() {
        assert_eq!(normalize_path("/a%20b"), "/a%20b");
        assert_eq!(normalize_path("/%7ealice/caf%c3%a9"), "/~alice/caf%C3%A9");
    }
}
