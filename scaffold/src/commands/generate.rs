use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use scaffolding_config::{CONFIG_FILE, ConfigFile};

use super::{UnwrapOrExit, parse_entity};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to the configuration file (defaults to ./scaffold.toml)
    #[arg(short, long, default_value = CONFIG_FILE)]
    pub config: PathBuf,

    /// Entity to generate (repeatable, replaces `entities` from the configuration)
    #[arg(short, long = "entity", value_parser = parse_entity)]
    pub entities: Vec<String>,

    /// Output directory (overrides `output_directory`)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the files that would be written without writing them
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let mut config = ConfigFile::open(&self.config).unwrap_or_exit().into_config();
        config.read = false;
        if !self.entities.is_empty() {
            config.entities = self.entities.iter().cloned().collect();
        }
        if let Some(output) = &self.output {
            config.output_directory = output.clone();
        }

        let report = ops::run(
            &config,
            ops::run::RunOptions {
                dry_run: self.dry_run,
            },
        )?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
