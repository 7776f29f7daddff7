//! Capsule prefix derivation: which part of a URL identifies its content root.

use super::encode::recode;
use super::NormalizedUrl;
use serde::{Deserialize, Serialize};

/// Hosting conventions used to find the capsule a page belongs to.
///
/// Loaded from the `[capsule]` section of the config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CapsulePolicy {
    /// A first segment starting with `~` (e.g. `/~alice/`) is a personal capsule.
    pub tilde_dirs: bool,
    /// Directories whose children are hosted user capsules (`/users/bob/`).
    pub multi_user_dirs: Vec<String>,
}

impl Default for CapsulePolicy {
    fn default() -> Self {
        Self {
            tilde_dirs: true,
            multi_user_dirs: vec!["users".to_string()],
        }
    }
}

impl CapsulePolicy {
    fn is_multi_user_dir(&self, segment: &str) -> bool {
        self.multi_user_dirs
            .iter()
            .filter(|dir| !dir.is_empty())
            .any(|dir| recode(dir) == segment)
    }
}

/// Capsule prefix under the default conventions (`~name` and `users/name`).
pub fn capsule_prefix(url: &NormalizedUrl) -> NormalizedUrl {
    capsule_prefix_with(url, &CapsulePolicy::default())
}

/// Capsule prefix of an already normalized URL.
///
/// The result keeps scheme, host and port, drops query and fragment, and has
/// one of three paths:
/// - `/~name/` when the first segment starts with `~`;
/// - `/<dir>/<name>/` when the first segment is a multi-user directory and a
///   non-empty second segment follows;
/// - `/` otherwise, including a bare `/users` or `/users/`.
pub fn capsule_prefix_with(url: &NormalizedUrl, policy: &CapsulePolicy) -> NormalizedUrl {
    let path = url.path();
    let mut segments = path.strip_prefix('/').unwrap_or(path).split('/');
    let first = segments.next().unwrap_or_default();

    let root = if policy.tilde_dirs && first.starts_with('~') {
        format!("/{first}/")
    } else if policy.is_multi_user_dir(first) {
        match segments.next() {
            Some(name) if !name.is_empty() => format!("/{first}/{name}/"),
            _ => "/".to_string(),
        }
    } else {
        "/".to_string()
    };

    url.with_root(root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::url_model::normalize;

    fn prefix(raw: &str) -> String {
        capsule_prefix(&normalize(raw).unwrap()).to_string()
    }

    #[test]
    fn tilde_capsule() {
        assert_eq!(prefix("gemini://host/~alice/page.gmi"), "gemini://host/~alice/");
        assert_eq!(prefix("gemini://host/~alice"), "gemini://host/~alice/");
        assert_eq!(prefix("gemini://host/%7Ealice/x"), "gemini://host/~alice/");
    }

    #[test]
    fn users_capsule() {
        assert_eq!(prefix("gemini://host/users/bob/x"), "gemini://host/users/bob/");
        assert_eq!(prefix("gemini://host/users/bob"), "gemini://host/users/bob/");
    }

    #[test]
    fn users_without_name_is_host_capsule() {
        assert_eq!(prefix("gemini://host/users"), "gemini://host/");
        assert_eq!(prefix("gemini://host/users/"), "gemini://host/");
        assert_eq!(prefix("gemini://host/users//x"), "gemini://host/");
    }

    #[test]
    fn host_capsule() {
        assert_eq!(prefix("gemini://host/other"), "gemini://host/");
        assert_eq!(prefix("gemini://host"), "gemini://host/");
        assert_eq!(prefix("gemini://host/a/~b/"), "gemini://host/");
    }

    #[test]
    fn keeps_port_drops_query_and_fragment() {
        assert_eq!(
            prefix("gemini://host:1970/~alice/x?q#f"),
            "gemini://host:1970/~alice/"
        );
        assert_eq!(prefix("gemini://host/?#"), "gemini://host/");
    }

    #[test]
    fn custom_policy() {
        let policy = CapsulePolicy {
            tilde_dirs: false,
            multi_user_dirs: vec!["u".into(), "home dirs".into()],
        };
        let at = |raw: &str| capsule_prefix_with(&normalize(raw).unwrap(), &policy).to_string();

        assert_eq!(at("gemini://host/~alice/x"), "gemini://host/");
        assert_eq!(at("gemini://host/users/bob/x"), "gemini://host/");
        assert_eq!(at("gemini://host/u/carol/x"), "gemini://host/u/carol/");
        assert_eq!(
            at("gemini://host/home%20dirs/dave/x"),
            "gemini://host/home%20dirs/dave/"
        );
    }

    #[test]
    fn policy_defaults_fill_missing_keys() {
        let policy: CapsulePolicy = toml::from_str("tilde_dirs = false").unwrap();
        assert!(!policy.tilde_dirs);
        assert_eq!(policy.multi_user_dirs, vec!["users".to_string()]);
    }
}
