use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for configuration operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Encapsulates the source content and filename, reducing parameter passing
/// in error factory functions.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Get the filename.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a toml error.
    pub fn toml_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            message: source.message().to_string(),
        })
    }

    /// Create a parse error from a serde_json error.
    pub fn json_error(&self, source: serde_json::Error) -> Box<Error> {
        let span = line_column_offset(&self.src, source.line(), source.column())
            .map(|offset| SourceSpan::from((offset, 0)));
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            message: source.to_string(),
        })
    }

    /// Create a validation error, pointing at `needle` when it can be found.
    pub fn validation_error(&self, message: impl Into<String>, needle: Option<&str>) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span: needle.and_then(|n| find_span(&self.src, n)),
            message: message.into(),
        })
    }

    /// Create an unsupported version error.
    pub fn unsupported_version_error(&self, found: u32, supported: u32) -> Box<Error> {
        Box::new(Error::UnsupportedVersion {
            src: self.named_source(),
            span: find_span(&self.src, "version"),
            found,
            supported,
        })
    }

    /// Create an invalid entity error.
    pub fn invalid_entity_error(&self, name: &str, reason: &str) -> Box<Error> {
        Box::new(Error::InvalidEntity {
            src: self.named_source(),
            span: find_quoted_span(&self.src, name),
            name: name.to_string(),
            reason: reason.to_string(),
        })
    }

    /// Create an invalid user token error.
    pub fn invalid_token_error(&self, literal: &str, token: &str, reason: &str) -> Box<Error> {
        let span = find_quoted_span(&self.src, token).or_else(|| find_quoted_span(&self.src, literal));
        Box::new(Error::InvalidToken {
            src: self.named_source(),
            span,
            literal: literal.to_string(),
            token: token.to_string(),
            reason: reason.to_string(),
        })
    }

    /// Create an invalid exclusion pattern error.
    pub fn invalid_pattern_error(&self, pattern: &str, source: regex::Error) -> Box<Error> {
        Box::new(Error::InvalidPattern {
            src: self.named_source(),
            span: find_quoted_span(&self.src, pattern),
            pattern: pattern.to_string(),
            source,
        })
    }
}

/// Find a quoted string value in the source, returning the span of its content.
fn find_quoted_span(src: &str, value: &str) -> Option<SourceSpan> {
    let quoted = format!("\"{}\"", value);
    src.find(&quoted)
        .map(|pos| SourceSpan::from((pos + 1, value.len())))
        .or_else(|| {
            if value.is_empty() {
                None
            } else {
                find_span(src, value)
            }
        })
}

fn find_span(src: &str, needle: &str) -> Option<SourceSpan> {
    src.find(needle)
        .map(|pos| SourceSpan::from((pos, needle.len())))
}

/// Convert a 1-based line/column pair into a byte offset.
fn line_column_offset(src: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }
    let mut offset = 0;
    for (index, text) in src.split_inclusive('\n').enumerate() {
        if index + 1 == line {
            return Some(offset + column.saturating_sub(1).min(text.len()));
        }
        offset += text.len();
    }
    None
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("run 'scaffold init' to create a starter configuration"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse configuration: {message}")]
    #[diagnostic(code(scaffold::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("unsupported configuration version {found}")]
    #[diagnostic(
        code(scaffold::unsupported_version),
        help("this release understands version = {supported}")
    )]
    UnsupportedVersion {
        #[source_code]
        src: NamedSource<String>,
        #[label("declared here")]
        span: Option<SourceSpan>,
        found: u32,
        supported: u32,
    },

    #[error("invalid entity name '{name}'")]
    #[diagnostic(
        code(scaffold::invalid_entity),
        help("{reason}. Entities are written in PascalCase or camelCase, e.g. 'AdminUser'.")
    )]
    InvalidEntity {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid entity")]
        span: Option<SourceSpan>,
        name: String,
        reason: String,
    },

    #[error("invalid user token '{token}' for '{literal}'")]
    #[diagnostic(code(scaffold::invalid_token), help("{reason}"))]
    InvalidToken {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid token")]
        span: Option<SourceSpan>,
        literal: String,
        token: String,
        reason: String,
    },

    #[error("invalid exclusion pattern '{pattern}'")]
    #[diagnostic(
        code(scaffold::invalid_pattern),
        help("exclusion patterns are regular expressions matched against file names")
    )]
    InvalidPattern {
        #[source_code]
        src: NamedSource<String>,
        #[label("does not compile")]
        span: Option<SourceSpan>,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(scaffold::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },
}
