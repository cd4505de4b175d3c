//! Revision identifier resolution for versioned source links.

/// Default branch name used when no revision override is supplied.
pub const DEFAULT_BRANCH: &str = "master";

/// Resolve the revision identifier used to build source links.
///
/// A present, non-empty override is returned verbatim. This is how a build
/// pins documentation links to a tagged release instead of the moving
/// default branch. Total function, no failure modes.
pub fn resolve(env_override: Option<&str>) -> String {
    match env_override {
        Some(revision) if !revision.is_empty() => revision.to_string(),
        _ => DEFAULT_BRANCH.to_string(),
    }
}

/// Resolve the revision from an environment variable of the build tool.
pub fn resolve_from_env(var: &str) -> String {
    resolve(std::env::var(var).ok().as_deref())
}
