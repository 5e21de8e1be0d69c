//! Run operation - extraction or generation.

use eyre::Result;
use scaffolding_config::Config;
use scaffolding_engine::plan;

use crate::{
    bundles::BUILTIN,
    reports::{PreviewFile, PreviewResult, RunReport, RunResult},
};

/// Options for the run operation.
pub struct RunOptions {
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Execute the run operation.
///
/// Plans every file the configuration asks for, then writes the plan unless
/// this is a dry run.
pub fn run(config: &Config, opts: RunOptions) -> Result<RunReport> {
    let plan = plan(config, BUILTIN)?;
    let mode = plan.mode();

    let result = if opts.dry_run {
        let files = plan
            .files()
            .map(|f| PreviewFile {
                path: f.path.clone(),
                entity: f.entity.clone(),
                content: f.content.clone(),
            })
            .collect();
        RunResult::Preview(PreviewResult {
            files,
            diagnostics: plan.diagnostics().to_vec(),
        })
    } else {
        RunResult::Written(plan.execute())
    };

    Ok(RunReport {
        mode,
        entities: config.entities.iter().cloned().collect(),
        result,
    })
}
