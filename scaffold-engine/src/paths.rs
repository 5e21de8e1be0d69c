//! Path conventions for template sets.

use std::path::{Path, PathBuf};

/// Suffix appended to every stored template.
pub const TEMPLATE_SUFFIX: &str = ".hbs";

/// Exclusion pattern matching stored templates, so extraction never reads them back.
pub const TEMPLATE_PATTERN: &str = r"\.hbs$";

/// Check whether a relative path names a template.
pub fn is_template(path: &str) -> bool {
    path.ends_with(TEMPLATE_SUFFIX) && path.len() > TEMPLATE_SUFFIX.len()
}

/// Append the template suffix (e.g., "User.java" -> "User.java.hbs").
pub fn to_template_path(path: &str) -> String {
    format!("{}{}", path, TEMPLATE_SUFFIX)
}

/// Strip the template suffix, recovering the output path.
pub fn strip_template_suffix(path: &str) -> &str {
    path.strip_suffix(TEMPLATE_SUFFIX).unwrap_or(path)
}

/// The template root for a profile; an empty profile means the base itself.
pub fn profile_root(base: &Path, profile: &str) -> PathBuf {
    if profile.is_empty() {
        base.to_path_buf()
    } else {
        base.join(profile)
    }
}

/// Join a forward-slash relative path onto a directory.
pub fn join_relative(base: &Path, relative: &str) -> PathBuf {
    relative
        .split('/')
        .filter(|segment| !segment.is_empty())
        .fold(base.to_path_buf(), |path, segment| path.join(segment))
}
