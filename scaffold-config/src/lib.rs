//! Configuration for scaffolding runs.
//!
//! A run is described by `scaffold.toml` (or a `.json` file using the same
//! keys). This crate parses the file, fills in defaults and validates it,
//! reporting problems as [`miette`] diagnostics that point into the source.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod error;
mod file;
mod validate;

pub use config::{
    BUNDLE_PREFIX, CONFIG_FILE, CONFIG_VERSION, Config, DEFAULT_BASE_PACKAGE,
    DEFAULT_TEMPLATE_DIR, Mode, TemplateLocation,
};
pub use error::{Error, Result, SourceContext};
pub use file::{ConfigFile, ConfigFormat, parse_config};
pub use validate::{RESERVED_TOKENS, is_reserved_token};
