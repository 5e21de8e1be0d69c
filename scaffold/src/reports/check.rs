//! Check command report data structures.

use std::path::PathBuf;

use scaffolding_config::Mode;
use scaffolding_engine::Diagnostic;

use super::{
    count,
    output::{Output, Report},
    render_diagnostic,
};

/// Report data from configuration validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the config file.
    pub config_path: PathBuf,
    /// Direction a run would take.
    pub mode: Mode,
    pub entities: Vec<String>,
    /// Where templates are read from, after applying the profile.
    pub template_location: String,
    /// Templates found at that location.
    pub templates: Vec<TemplateInfo>,
    pub diagnostics: Vec<Diagnostic>,
}

/// A template found during the check.
#[derive(Debug)]
pub struct TemplateInfo {
    pub path: String,
    pub partition: String,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        !self.diagnostics.iter().any(|d| d.severity.is_error())
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for diag in &self.diagnostics {
            render_diagnostic(out, diag);
        }

        if !self.is_valid() {
            return;
        }

        out.preformatted(&format!("✓ {} is valid", self.config_path.display()));
        out.newline();
        out.key_value_indented("mode", self.mode.as_str());
        out.key_value_indented(
            "entities",
            &if self.entities.is_empty() {
                "(none)".to_string()
            } else {
                self.entities.join(", ")
            },
        );
        out.key_value_indented("templates", &self.template_location);
        out.newline();

        out.section(&count(self.templates.len(), "template", "templates"));
        for template in &self.templates {
            out.list_item(&format!("{} [{}]", template.path, template.partition));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::RecordingOutput;

    fn report(diagnostics: Vec<Diagnostic>) -> CheckReport {
        CheckReport {
            config_path: PathBuf::from("scaffold.toml"),
            mode: Mode::Generate,
            entities: vec!["Role".to_string(), "Invoice".to_string()],
            template_location: "bundle:starter".to_string(),
            templates: vec![TemplateInfo {
                path: "src/main/{{entity-class}}.java.hbs".to_string(),
                partition: "main".to_string(),
            }],
            diagnostics,
        }
    }

    #[test]
    fn test_render_valid() {
        let mut out = RecordingOutput::default();
        report(Vec::new()).render(&mut out);

        assert_eq!(
            out.stdout,
            [
                "✓ scaffold.toml is valid",
                "",
                "  mode: generate",
                "  entities: Role, Invoice",
                "  templates: bundle:starter",
                "",
                "1 template:",
                "  - src/main/{{entity-class}}.java.hbs [main]"
            ]
        );
        assert!(out.stderr.is_empty());
    }

    #[test]
    fn test_render_invalid() {
        let mut out = RecordingOutput::default();
        let report = report(vec![Diagnostic::error("check", "unknown bundle 'nope'")]);
        report.render(&mut out);

        assert!(!report.is_valid());
        assert!(out.stdout.is_empty());
        assert_eq!(out.stderr, ["error: unknown bundle 'nope'"]);
    }
}
