mod check;
mod completions;
mod extract;
mod generate;
mod init;
mod run;

use check::CheckCommand;
use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use extract::ExtractCommand;
use generate::GenerateCommand;
use init::InitCommand;
use run::RunCommand;

/// Extension trait for exiting on configuration errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for scaffolding_config::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

/// Parse an `--entity` value: ASCII letters and digits, starting with a letter.
pub(crate) fn parse_entity(value: &str) -> std::result::Result<String, String> {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() && chars.all(|c| c.is_ascii_alphanumeric()) => {
            Ok(value.to_string())
        }
        _ => Err(format!(
            "'{}' is not an entity name (expected letters and digits, starting with a letter)",
            value
        )),
    }
}

#[derive(Parser)]
#[command(name = "scaffold")]
#[command(version)]
#[command(about = "Extract templates from a working source tree and generate new entities from them")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Run(cmd) => cmd.run(),
            Commands::Extract(cmd) => cmd.run(),
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Init(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Extract or generate, as selected by `read` in the configuration
    Run(RunCommand),

    /// Turn existing sources into templates
    Extract(ExtractCommand),

    /// Generate sources for new entities from templates
    Generate(GenerateCommand),

    /// Validate the configuration and list the templates it would use
    Check(CheckCommand),

    /// Write a starter configuration
    Init(InitCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
