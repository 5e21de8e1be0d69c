//! Validation of a parsed configuration against its source.

use std::path::{Component, Path};

use regex::Regex;

use crate::{CONFIG_VERSION, Config, Result, error::SourceContext};

/// Token names the engine defines itself; user tokens may not reuse them.
pub const RESERVED_TOKENS: &[&str] = &[
    "package",
    "package-path",
    "entity-class",
    "entity-title",
    "entity-variable",
    "entity-comment",
    "entity-snake-upper",
    "entity-snake",
    "entity-hyphen",
];

/// Check if a token name is defined by the engine.
pub fn is_reserved_token(name: &str) -> bool {
    RESERVED_TOKENS.contains(&name)
}

/// Validate the configuration after parsing.
pub(crate) fn validate_config(config: &Config, ctx: &SourceContext) -> Result<()> {
    if config.version != CONFIG_VERSION {
        return Err(ctx.unsupported_version_error(config.version, CONFIG_VERSION));
    }

    for entity in &config.entities {
        if let Some(reason) = validate_entity(entity) {
            return Err(ctx.invalid_entity_error(entity, reason));
        }
    }

    for (literal, token) in &config.user_token_map {
        if let Some(reason) = validate_token(literal, token) {
            return Err(ctx.invalid_token_error(literal, token, reason));
        }
    }

    for pattern in &config.exclude {
        if let Err(e) = Regex::new(pattern) {
            return Err(ctx.invalid_pattern_error(pattern, e));
        }
    }

    if !is_relative_subpath(Path::new(&config.profile)) {
        return Err(ctx.validation_error(
            format!(
                "profile '{}' must be a relative path inside the template location",
                config.profile
            ),
            Some("profile"),
        ));
    }

    Ok(())
}

/// Validate that an entity name is a Pascal or camel case identifier.
/// Returns None if valid, Some(reason) if invalid.
pub(crate) fn validate_entity(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    match chars.next() {
        None => return Some("name cannot be empty"),
        Some(c) if !c.is_ascii_alphabetic() => return Some("name must start with a letter"),
        _ => {}
    }

    if !chars.all(|c| c.is_ascii_alphanumeric()) {
        return Some("name must contain only letters and digits");
    }

    None
}

/// Validate a user token entry.
/// Returns None if valid, Some(reason) if invalid.
pub(crate) fn validate_token(literal: &str, token: &str) -> Option<&'static str> {
    if literal.is_empty() {
        return Some("the literal text cannot be empty");
    }
    if token.is_empty() {
        return Some("the token name cannot be empty");
    }
    if token.chars().any(|c| c.is_whitespace() || c == '{' || c == '}') {
        return Some("token names cannot contain whitespace or braces");
    }
    if is_reserved_token(token) {
        return Some("the token name is reserved for a built-in directive");
    }
    None
}

fn is_relative_subpath(path: &Path) -> bool {
    path.components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}
