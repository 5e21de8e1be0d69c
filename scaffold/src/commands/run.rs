use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use scaffolding_config::{CONFIG_FILE, ConfigFile};

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct RunCommand {
    /// Path to the configuration file (defaults to ./scaffold.toml)
    #[arg(short, long, default_value = CONFIG_FILE)]
    pub config: PathBuf,

    /// Print the files that would be written without writing them
    #[arg(long)]
    pub dry_run: bool,
}

impl RunCommand {
    pub fn run(&self) -> Result<()> {
        let config = ConfigFile::open(&self.config).unwrap_or_exit().into_config();

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
