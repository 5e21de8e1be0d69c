//! Loading configuration files from disk or strings.

use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use crate::{Config, Error, Result, error::SourceContext, validate::validate_config};

/// Serialization format of a configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
}

impl ConfigFormat {
    /// Pick the format from a file extension, defaulting to TOML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ConfigFormat::Json,
            _ => ConfigFormat::Toml,
        }
    }
}

impl FromStr for Config {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_config(s, "scaffold.toml", ConfigFormat::Toml)
    }
}

impl Config {
    /// Parse a JSON configuration.
    pub fn from_json_str(content: &str) -> Result<Self> {
        parse_config(content, "scaffold.json", ConfigFormat::Json)
    }
}

/// Parse and validate configuration content, using `filename` for error reporting.
pub fn parse_config(content: &str, filename: &str, format: ConfigFormat) -> Result<Config> {
    let ctx = SourceContext::new(content, filename);
    let config: Config = match format {
        ConfigFormat::Toml => toml::from_str(content).map_err(|e| ctx.toml_error(e))?,
        ConfigFormat::Json => serde_json::from_str(content).map_err(|e| ctx.json_error(e))?,
    };
    validate_config(&config, &ctx)?;
    Ok(config)
}

/// A configuration file and its parsed record.
///
/// Relative directories in the record are resolved against the directory
/// holding the file, so a run behaves the same from any working directory.
#[derive(Debug)]
pub struct ConfigFile {
    path: PathBuf,
    config: Config,
}

impl ConfigFile {
    /// Open and parse a configuration file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let format = ConfigFormat::from_path(&path);
        let mut config = parse_config(&content, &path.display().to_string(), format)?;
        if let Some(dir) = path.parent() {
            config.resolve_paths(dir);
        }
        config.source_file = Some(path.clone());

        Ok(Self { path, config })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the parsed configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Take ownership of the parsed configuration.
    pub fn into_config(self) -> Config {
        self.config
    }
}
