//! Rewrite configuration supplied by the surrounding build tool.

use serde::{Deserialize, Serialize};

use crate::error::DocflowError;

/// Configuration for the link rewrite stage, built once per site build.
///
/// The surrounding build tool usually passes this as JSON, so field names
/// follow its camelCase convention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewriteConfig {
    /// Base URL of the external source host (e.g. a repository blob view).
    pub base_host: String,
    /// Revision identifier (branch or tag) used to pin rewritten links.
    pub revision: String,
    /// Literal path prefix marking link targets that point at raw source files.
    pub match_prefix: String,
    /// Directory of the documents relative to the repository root.
    pub mount_path: String,
}

impl RewriteConfig {
    /// Create a new rewrite configuration.
    pub fn new(
        base_host: impl Into<String>,
        revision: impl Into<String>,
        match_prefix: impl Into<String>,
        mount_path: impl Into<String>,
    ) -> Self {
        Self {
            base_host: base_host.into(),
            revision: revision.into(),
            match_prefix: match_prefix.into(),
            mount_path: mount_path.into(),
        }
    }

    /// Validate that the configuration can only match relative targets.
    ///
    /// Rewritten targets always carry a URL scheme, so a `match_prefix` that
    /// is itself empty or scheme-qualified would re-match its own output on a
    /// second pass. Build tools should call this once per build.
    pub fn validate(&self) -> Result<(), DocflowError> {
        if self.match_prefix.is_empty() {
            return Err(DocflowError::invalid_config(
                "matchPrefix must not be empty: an empty prefix matches every link",
            ));
        }
        if has_url_scheme(&self.match_prefix) {
            return Err(DocflowError::invalid_config(format!(
                "matchPrefix '{}' must be a relative path segment, not a URL",
                self.match_prefix
            )));
        }
        Ok(())
    }

    /// Whether a link target is eligible for rewriting.
    ///
    /// Already-qualified URLs never match, regardless of prefix. This keeps
    /// the rewrite idempotent even when `base_host` happens to share a prefix
    /// with `match_prefix`.
    pub fn matches_target(&self, target: &str) -> bool {
        !target.is_empty() && !has_url_scheme(target) && target.starts_with(&self.match_prefix)
    }

    /// The fully-qualified replacement for a matching target.
    pub fn rewritten_target(&self, target: &str) -> String {
        format!(
            "{}/{}/{}/{}",
            self.base_host, self.revision, self.mount_path, target
        )
    }
}

/// Check whether a link target starts with a URL scheme (`https:`, `mailto:`, ...).
pub(crate) fn has_url_scheme(target: &str) -> bool {
    match target.split_once(':') {
        Some((scheme, _)) => {
            let mut chars = scheme.chars();
            match chars.next() {
                Some(first) if first.is_ascii_alphabetic() => {
                    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
                }
                _ => false,
            }
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tutorial_config() -> RewriteConfig {
        RewriteConfig::new(
            "https://host/x/blob",
            "master",
            "sources/",
            "docs/tutorial",
        )
    }

    #[test]
    fn matches_relative_targets_with_prefix() {
        let cfg = tutorial_config();
        assert!(cfg.matches_target("sources/example.c"));
        assert!(!cfg.matches_target("images/example.png"));
        assert!(!cfg.matches_target(""));
    }

    #[test]
    fn qualified_urls_never_match() {
        let cfg = tutorial_config();
        assert!(!cfg.matches_target("https://host/x/blob/master/docs/tutorial/sources/example.c"));
        assert!(!cfg.matches_target("mailto:someone@example.org"));
    }

    #[test]
    fn rewritten_target_joins_all_segments() {
        let cfg = tutorial_config();
        assert_eq!(
            cfg.rewritten_target("sources/example.c"),
            "https://host/x/blob/master/docs/tutorial/sources/example.c"
        );
    }

    #[test]
    fn deserializes_from_camel_case_json() {
        let cfg: RewriteConfig = serde_json::from_str(
            r#"{
                "baseHost": "https://host/x/blob",
                "revision": "master",
                "matchPrefix": "sources/",
                "mountPath": "docs/tutorial"
            }"#,
        )
        .expect("config should deserialize");
        assert_eq!(cfg, tutorial_config());
    }

    #[test]
    fn validate_rejects_empty_prefix() {
        let cfg = RewriteConfig::new("https://host", "master", "", "docs");
        assert!(matches!(
            cfg.validate(),
            Err(DocflowError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn validate_rejects_scheme_qualified_prefix() {
        let cfg = RewriteConfig::new("https://host", "master", "https://host/", "docs");
        assert!(matches!(
            cfg.validate(),
            Err(DocflowError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn validate_accepts_relative_prefix() {
        assert!(tutorial_config().validate().is_ok());
    }

    #[test]
    fn scheme_detection_ignores_path_colons() {
        assert!(has_url_scheme("https://example.org"));
        assert!(has_url_scheme("mailto:a@b"));
        assert!(!has_url_scheme("sources/example.c"));
        assert!(!has_url_scheme("1:2"));
        assert!(!has_url_scheme("./relative:path"));
    }
}
