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
pub struct ExtractCommand {
    /// Path to the configuration file (defaults to ./scaffold.toml)
    #[arg(short, long, default_value = CONFIG_FILE)]
    pub config: PathBuf,

    /// Entity to extract (repeatable, replaces `entities` from the configuration)
    #[arg(short, long = "entity", value_parser = parse_entity)]
    pub entities: Vec<String>,

    /// Print the templates that would be written without writing them
    #[arg(long)]
    pub dry_run: bool,
}

impl ExtractCommand {
    pub fn run(&self) -> Result<()> {
        let mut config = ConfigFile::open(&self.config).unwrap_or_exit().into_config();
        config.read = true;
        if !self.entities.is_empty() {
            config.entities = self.entities.iter().cloned().collect();
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
