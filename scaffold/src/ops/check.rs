//! Check operation - configuration validation and template listing.

use scaffolding_config::ConfigFile;
use scaffolding_engine::{
    Diagnostic, TemplateStore, template_source,
};

use crate::{
    bundles::BUILTIN,
    reports::{CheckReport, TemplateInfo},
};

/// Execute the check operation.
///
/// The configuration has already been parsed and validated by the time it
/// gets here; this resolves its template location and reads every template
/// the configuration would use.
pub fn check(file: &ConfigFile) -> CheckReport {
    let config = file.config();
    let mut diagnostics = Vec::new();
    let mut templates = Vec::new();

    let location = match template_source(config, BUILTIN) {
        Ok(source) => {
            let (store, store_diagnostics) = TemplateStore::load(source.as_ref());
            diagnostics.extend(store_diagnostics);
            templates = store
                .records()
                .map(|r| TemplateInfo {
                    path: r.path.clone(),
                    partition: r.partition.to_string(),
                })
                .collect();
            source.describe()
        }
        Err(e) => {
            diagnostics.push(Diagnostic::error("check", format!("{:#}", e)));
            config.template_location.to_string()
        }
    };

    CheckReport {
        config_path: file.path().to_path_buf(),
        mode: config.mode(),
        entities: config.entities.iter().cloned().collect(),
        template_location: location,
        templates,
        diagnostics,
    }
}
