//! Diagnostic types for extraction and generation runs.
//!
//! Nothing that goes wrong with a single file stops a run; it is recorded
//! here instead and the run moves on to the next unit of work.

use serde::Serialize;

/// How much a diagnostic matters to the run that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// A unit of work failed and was dropped.
    Error,
    /// A unit of work was skipped to protect existing data.
    Warning,
    /// A unit of work was deliberately left out.
    Info,
}

impl Severity {
    pub fn is_error(&self) -> bool {
        *self == Severity::Error
    }

    pub fn is_warning(&self) -> bool {
        *self == Severity::Warning
    }
}

/// Something a run noticed about one file, or about the run as a whole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    /// `extract`, `generate`, `store`, `write` or `check`.
    pub phase: String,
    pub message: String,
    /// Relative source or template path, when the diagnostic is about a file.
    pub location: Option<String>,
}

impl Diagnostic {
    fn new(severity: Severity, phase: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity,
            phase: phase.into(),
            message: message.into(),
            location: None,
        }
    }

    pub fn error(phase: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, phase, message)
    }

    pub fn warning(phase: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, phase, message)
    }

    pub fn info(phase: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Info, phase, message)
    }

    /// Attach the file this diagnostic is about.
    pub fn at(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}
