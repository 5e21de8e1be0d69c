//! Run command report data structures.

use std::path::PathBuf;

use scaffolding_config::Mode;
use scaffolding_engine::{Diagnostic, Outcome};

use super::{
    output::{Output, Report},
    count, render_diagnostic,
};

/// Report data from an extraction or generation run.
#[derive(Debug)]
pub struct RunReport {
    /// Direction of the run.
    pub mode: Mode,
    /// Entities the run was asked for.
    pub entities: Vec<String>,
    /// Files written, or a dry-run preview.
    pub result: RunResult,
}

/// Result of a run.
#[derive(Debug)]
pub enum RunResult {
    /// The plan was executed.
    Written(Outcome),
    /// Dry-run preview.
    Preview(PreviewResult),
}

/// Result of a dry-run preview.
#[derive(Debug)]
pub struct PreviewResult {
    /// Files that would be written.
    pub files: Vec<PreviewFile>,
    /// Diagnostics gathered while planning.
    pub diagnostics: Vec<Diagnostic>,
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    pub path: PathBuf,
    pub entity: String,
    pub content: String,
}

impl Report for RunReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            RunResult::Written(outcome) => self.render_written(out, outcome),
            RunResult::Preview(preview) => self.render_preview(out, preview),
        }
    }
}

impl RunReport {
    fn files(&self, n: usize) -> String {
        match self.mode {
            Mode::Extract => count(n, "template", "templates"),
            Mode::Generate => count(n, "file", "files"),
        }
    }

    fn render_written(&self, out: &mut dyn Output, outcome: &Outcome) {
        for diag in &outcome.diagnostics {
            render_diagnostic(out, diag);
        }

        if !outcome.written.is_empty() {
            out.section(match self.mode {
                Mode::Extract => "Extracted",
                Mode::Generate => "Generated",
            });
            for path in &outcome.written {
                out.added_item(&path.display().to_string());
            }
            out.newline();
        }

        let mut summary = format!(
            "{} written for {}",
            self.files(outcome.written.len()),
            count(self.entities.len(), "entity", "entities"),
        );
        if !outcome.skipped.is_empty() {
            summary.push_str(&format!(", {} skipped", outcome.skipped.len()));
        }
        out.preformatted(&summary);
    }

    fn render_preview(&self, out: &mut dyn Output, preview: &PreviewResult) {
        for diag in &preview.diagnostics {
            render_diagnostic(out, diag);
        }

        for file in &preview.files {
            out.divider(&format!("{} ({})", file.path.display(), file.entity));
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!(
            "{} would be written",
            self.files(preview.files.len())
        ));
    }
}
