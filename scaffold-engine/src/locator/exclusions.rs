use std::path::Path;

use eyre::{Context, Result};
use regex::Regex;
use scaffolding_config::Config;

/// File names that are never sources: VCS, IDE and editor metadata, plus
/// the usual configuration file names.
pub const DEFAULT_EXCLUSIONS: &[&str] = &[
    r"^\.git$",
    r"^\.svn$",
    r"^\.hg$",
    r"^\.idea$",
    r"^\.vscode$",
    r"\.iml$",
    r"^\.DS_Store$",
    r"^Thumbs\.db$",
    r"\.swp$",
    r"~$",
    r"^scaffold\.(toml|json)$",
    r"^scaffolding\.json$",
];

/// Regular expressions matched against file and directory names.
#[derive(Debug, Clone, Default)]
pub struct Exclusions {
    patterns: Vec<Regex>,
}

impl Exclusions {
    /// Compile a set of patterns.
    pub fn new<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = patterns
            .into_iter()
            .map(|p| {
                let p = p.as_ref();
                Regex::new(p).wrap_err_with(|| format!("invalid exclusion pattern '{}'", p))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { patterns })
    }

    /// The default patterns followed by `extra`.
    pub fn with_defaults<I, S>(extra: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(DEFAULT_EXCLUSIONS)?.and(extra)
    }

    /// The defaults, the configured `exclude` patterns and the name of the
    /// file the configuration was loaded from.
    pub fn for_config(config: &Config) -> Result<Self> {
        let own_name = config
            .source_file
            .as_deref()
            .and_then(Path::file_name)
            .and_then(|name| name.to_str())
            .map(|name| format!("^{}$", regex::escape(name)));

        Self::with_defaults(
            config
                .exclude
                .iter()
                .map(String::as_str)
                .chain(own_name.as_deref()),
        )
    }

    /// Append more patterns.
    pub fn and<I, S>(mut self, extra: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.patterns.extend(Self::new(extra)?.patterns);
        Ok(self)
    }

    /// Check a base name (not a full path) against every pattern.
    pub fn is_excluded(&self, name: &str) -> bool {
        self.patterns.iter().any(|p| p.is_match(name))
    }

    /// Check every segment of a forward-slash relative path.
    pub fn is_path_excluded(&self, path: &str) -> bool {
        path.split('/').any(|segment| self.is_excluded(segment))
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
