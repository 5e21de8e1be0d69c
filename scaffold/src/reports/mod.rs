//! Report data structures for commands.
//!
//! This module provides data structures that separate data collection from rendering.
//! Commands build reports, then render them to an Output target.

mod check;
mod output;
mod run;

pub use check::{CheckReport, TemplateInfo};
pub use output::{Output, Report, TerminalOutput};
pub use run::{PreviewFile, PreviewResult, RunReport, RunResult};
use scaffolding_engine::{Diagnostic, Severity};

/// Render one engine diagnostic, with its location on a second line.
fn render_diagnostic(out: &mut dyn Output, diag: &Diagnostic) {
    let msg = match &diag.location {
        Some(loc) => format!("{}\n  --> {}", diag.message, loc),
        None => diag.message.clone(),
    };

    match diag.severity {
        Severity::Error => out.error(&msg),
        Severity::Warning => out.warning(&msg),
        Severity::Info => out.note(&msg),
    }
}

fn count(n: usize, one: &str, many: &str) -> String {
    format!("{} {}", n, if n == 1 { one } else { many })
}
