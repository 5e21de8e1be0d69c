//! The configuration record consumed by the engine.

use std::{
    fmt,
    path::{Path, PathBuf},
    str::FromStr,
};

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

/// The only configuration schema version this release understands.
pub const CONFIG_VERSION: u32 = 1;

/// Default configuration file name.
pub const CONFIG_FILE: &str = "scaffold.toml";

/// Default template location, relative to the working directory.
pub const DEFAULT_TEMPLATE_DIR: &str = "src/test/resources/scaffolding";

/// Default base package.
pub const DEFAULT_BASE_PACKAGE: &str = "org.example";

/// Prefix that marks a template location as a bundle compiled into the binary.
pub const BUNDLE_PREFIX: &str = "bundle:";

/// Configuration for a single extraction or generation run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Schema version
    #[serde(default = "default_version")]
    pub version: u32,

    /// Base package, e.g. `org.example`
    #[serde(default = "default_base_package", alias = "basePackage")]
    pub base_package: String,

    /// Extract templates (true) or generate sources (false)
    #[serde(default)]
    pub read: bool,

    /// Entities to extract from, or to generate
    #[serde(default)]
    pub entities: IndexSet<String>,

    /// Root of the source tree read during extraction
    #[serde(default = "default_directory", alias = "inputDirectory")]
    pub input_directory: PathBuf,

    /// Root that generated sources are written under
    #[serde(default = "default_directory", alias = "outputDirectory")]
    pub output_directory: PathBuf,

    /// Where templates are stored
    #[serde(default, alias = "templateLocation")]
    pub template_location: TemplateLocation,

    /// Sub-path of the template location, letting several template sets coexist
    #[serde(default)]
    pub profile: String,

    /// Only keep templates that carry at least one entity directive
    #[serde(default, alias = "onlyWithEntityDirectives")]
    pub only_with_entity_directives: bool,

    /// Literal text mapped to a user token name, e.g. `"Acme" = "COMPANY"`
    #[serde(default, alias = "userTokenMap")]
    pub user_token_map: IndexMap<String, String>,

    /// Additional file name patterns to ignore
    #[serde(default)]
    pub exclude: Vec<String>,

    /// File this configuration was loaded from, if any
    #[serde(skip)]
    pub source_file: Option<PathBuf>,
}

fn default_version() -> u32 {
    CONFIG_VERSION
}

fn default_base_package() -> String {
    DEFAULT_BASE_PACKAGE.to_string()
}

fn default_directory() -> PathBuf {
    PathBuf::from(".")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            base_package: default_base_package(),
            read: false,
            entities: IndexSet::new(),
            input_directory: default_directory(),
            output_directory: default_directory(),
            template_location: TemplateLocation::default(),
            profile: String::new(),
            only_with_entity_directives: false,
            user_token_map: IndexMap::new(),
            exclude: Vec::new(),
            source_file: None,
        }
    }
}

impl Config {
    /// Which direction this configuration runs in.
    pub fn mode(&self) -> Mode {
        if self.read {
            Mode::Extract
        } else {
            Mode::Generate
        }
    }

    /// Resolve relative directories against `base`, usually the directory
    /// holding the configuration file.
    pub fn resolve_paths(&mut self, base: &Path) {
        self.input_directory = resolve(base, &self.input_directory);
        self.output_directory = resolve(base, &self.output_directory);
        if let TemplateLocation::Directory(dir) = &self.template_location {
            self.template_location = TemplateLocation::Directory(resolve(base, dir));
        }
    }
}

fn resolve(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() || base.as_os_str().is_empty() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

/// Direction of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Read existing sources and write templates
    Extract,
    /// Read templates and write sources
    Generate,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Extract => "extract",
            Mode::Generate => "generate",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Where a template set lives.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(try_from = "String", into = "String")]
pub enum TemplateLocation {
    /// A directory on disk
    Directory(PathBuf),
    /// A named bundle compiled into the binary
    Bundle(String),
}

impl Default for TemplateLocation {
    fn default() -> Self {
        TemplateLocation::Directory(PathBuf::from(DEFAULT_TEMPLATE_DIR))
    }
}

impl TemplateLocation {
    /// The directory, if this location is on disk.
    pub fn as_directory(&self) -> Option<&Path> {
        match self {
            TemplateLocation::Directory(dir) => Some(dir),
            TemplateLocation::Bundle(_) => None,
        }
    }
}

impl FromStr for TemplateLocation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.strip_prefix(BUNDLE_PREFIX) {
            Some("") => Err(format!("bundle location '{}' is missing a name", s)),
            Some(name) => Ok(TemplateLocation::Bundle(name.to_string())),
            None if s.is_empty() => Err("template location cannot be empty".to_string()),
            None => Ok(TemplateLocation::Directory(PathBuf::from(s))),
        }
    }
}

impl TryFrom<String> for TemplateLocation {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<TemplateLocation> for String {
    fn from(location: TemplateLocation) -> Self {
        location.to_string()
    }
}

impl fmt::Display for TemplateLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateLocation::Directory(dir) => write!(f, "{}", dir.display()),
            TemplateLocation::Bundle(name) => write!(f, "{}{}", BUNDLE_PREFIX, name),
        }
    }
}
