use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use indexmap::IndexSet;
use scaffolding_config::{CONFIG_FILE, Config};
use scaffolding_core::{File, WriteResult};

use crate::reports::{Output, TerminalOutput};

/// Starter configuration, documenting every key with its default.
const STARTER_TOML: &str = r#"# Configuration for `scaffold`.
version = 1

# Extract templates from sources (true) or generate sources from templates (false)
read = true

# Base package; `org.example` appears as {{package}} and `org/example` as {{package-path}}
base_package = "org.example"

# Entities to extract from, or to generate
entities = ["AdminUser"]

# Relative paths are resolved against the directory holding this file
input_directory = "."
output_directory = "."

# A directory, or `bundle:starter` for the templates compiled into scaffold
template_location = "src/test/resources/scaffolding"

# Sub-directory of the template location, so several template sets can coexist
profile = ""

# Skip templates without an entity placeholder in their path or content
only_with_entity_directives = false

# Extra file name patterns (regular expressions) to ignore
exclude = []

# Literal text to replace with your own placeholders
[user_token_map]
# "Acme Corp" = "COMPANY"
"#;

#[derive(Args)]
pub struct InitCommand {
    /// Directory to write the configuration into
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Write scaffold.json instead of scaffold.toml
    #[arg(long)]
    pub json: bool,
}

impl InitCommand {
    pub fn run(&self) -> Result<()> {
        let file = if self.json {
            File::new(self.output.join("scaffold.json"), Self::starter_json()?)
        } else {
            File::new(self.output.join(CONFIG_FILE), STARTER_TOML)
        };

        let mut out = TerminalOutput::new();
        match file.write()? {
            WriteResult::Written => {
                out.added_item(&file.path().display().to_string());
                out.newline();
                out.section("Next steps");
                out.list_item("edit `entities` and `base_package`");
                out.list_item("scaffold check");
                out.list_item("scaffold run --dry-run");
            }
            WriteResult::Skipped => out.warning(&format!(
                "'{}' already exists; leaving it untouched",
                file.path().display()
            )),
        }

        Ok(())
    }

    fn starter_json() -> Result<String> {
        let config = Config {
            read: true,
            entities: IndexSet::from(["AdminUser".to_string()]),
            ..Config::default()
        };
        let mut json =
            serde_json::to_string_pretty(&config).wrap_err("Failed to serialize configuration")?;
        json.push('\n');
        Ok(json)
    }
}
