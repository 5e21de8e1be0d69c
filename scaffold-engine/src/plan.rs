//! Planned writes and their outcome.
//!
//! Extraction and generation never touch the disk directly. They record what
//! they would write in a [`Plan`]; executing the plan hands each file to the
//! never-overwrite writer.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use scaffolding_config::Mode;
use scaffolding_core::{File, WriteResult};
use serde::Serialize;

use crate::diagnostic::{Diagnostic, Severity};

/// A file the run intends to write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedFile {
    /// Destination on disk
    pub path: PathBuf,
    pub content: String,
    /// Entity the file was produced for
    pub entity: String,
    /// Relative path of the source or template it came from
    pub origin: String,
    /// Whether the path or content carries entity-specific text
    pub has_directives: bool,
}

impl PlannedFile {
    fn describe(&self) -> String {
        format!("'{}' for {}", self.origin, self.entity)
    }
}

/// Every file a run will write, in order, plus what planning reported.
#[derive(Debug, Clone)]
pub struct Plan {
    mode: Mode,
    files: IndexMap<PathBuf, PlannedFile>,
    diagnostics: Vec<Diagnostic>,
}

impl Plan {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            files: IndexMap::new(),
            diagnostics: Vec::new(),
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Claim a destination path.
    ///
    /// When two files claim the same path, a claim carrying entity
    /// directives replaces one without; otherwise the first claim stands.
    /// The losing claim is reported as superseded, unless it is the same
    /// file planned again.
    pub fn claim(&mut self, file: PlannedFile) {
        let Some(existing) = self.files.get_mut(&file.path) else {
            self.files.insert(file.path.clone(), file);
            return;
        };

        if existing.origin == file.origin && existing.content == file.content {
            return;
        }

        let (kept, dropped) = if file.has_directives && !existing.has_directives {
            let dropped = std::mem::replace(existing, file);
            (existing.describe(), dropped)
        } else {
            (existing.describe(), file)
        };

        self.diagnostics.push(
            Diagnostic::info(
                self.mode.as_str(),
                format!("{} superseded by {}", dropped.describe(), kept),
            )
            .at(dropped.path.display().to_string()),
        );
    }

    pub fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn extend(&mut self, diagnostics: impl IntoIterator<Item = Diagnostic>) {
        self.diagnostics.extend(diagnostics);
    }

    pub fn files(&self) -> impl Iterator<Item = &PlannedFile> {
        self.files.values()
    }

    pub fn get(&self, path: &Path) -> Option<&PlannedFile> {
        self.files.get(path)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Write every planned file.
    ///
    /// A file that cannot be written is reported and the remaining files are
    /// still attempted.
    pub fn execute(self) -> Outcome {
        let mut outcome = Outcome {
            mode: self.mode.as_str(),
            written: Vec::new(),
            skipped: Vec::new(),
            diagnostics: self.diagnostics,
        };

        for (path, planned) in self.files {
            let file = File::new(path, planned.content);
            match file.write() {
                Ok(WriteResult::Written) => outcome.written.push(file.path().to_path_buf()),
                Ok(WriteResult::Skipped) => {
                    outcome.diagnostics.push(
                        Diagnostic::warning(
                            "write",
                            format!("skipping '{}' to prevent an overwrite", file.path().display()),
                        )
                        .at(planned.origin),
                    );
                    outcome.skipped.push(file.path().to_path_buf());
                }
                Err(e) => {
                    outcome
                        .diagnostics
                        .push(Diagnostic::error("write", format!("{:#}", e)).at(planned.origin));
                }
            }
        }

        outcome
    }
}

/// What executing a plan did.
#[derive(Debug, Clone, Serialize)]
pub struct Outcome {
    pub mode: &'static str,
    pub written: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Outcome {
    pub fn count(&self, severity: Severity) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_error())
    }
}
