use eyre::{Result, eyre};
use scaffolding_config::BUNDLE_PREFIX;

use super::{Exclusions, ResourceSource, decode};

/// A file compiled into the binary.
#[derive(Debug, Clone, Copy)]
pub struct BundledFile {
    /// Forward-slash path inside the bundle.
    pub path: &'static str,
    pub contents: &'static [u8],
}

/// A named, read-only template set compiled into the binary.
#[derive(Debug, Clone, Copy)]
pub struct Bundle {
    pub name: &'static str,
    pub description: &'static str,
    pub files: &'static [BundledFile],
}

impl Bundle {
    /// Find a bundle by name.
    pub fn find(bundles: &[&'static Bundle], name: &str) -> Option<&'static Bundle> {
        bundles.iter().copied().find(|b| b.name == name)
    }
}

/// Files of a bundle beneath a sub-path (the profile).
#[derive(Debug, Clone)]
pub struct BundleSource {
    bundle: &'static Bundle,
    root: String,
    exclusions: Exclusions,
}

impl BundleSource {
    pub fn new(bundle: &'static Bundle, root: &str, exclusions: Exclusions) -> Self {
        Self {
            bundle,
            root: root.trim_matches('/').to_string(),
            exclusions,
        }
    }

    fn relative<'a>(&self, path: &'a str) -> Option<&'a str> {
        if self.root.is_empty() {
            return Some(path);
        }
        path.strip_prefix(self.root.as_str())
            .and_then(|rest| rest.strip_prefix('/'))
    }
}

impl ResourceSource for BundleSource {
    fn describe(&self) -> String {
        if self.root.is_empty() {
            format!("{}{}", BUNDLE_PREFIX, self.bundle.name)
        } else {
            format!("{}{}/{}", BUNDLE_PREFIX, self.bundle.name, self.root)
        }
    }

    fn locate(&self) -> Result<Vec<String>> {
        let mut found: Vec<String> = self
            .bundle
            .files
            .iter()
            .filter_map(|file| self.relative(file.path))
            .filter(|relative| !relative.is_empty() && !self.exclusions.is_path_excluded(relative))
            .map(str::to_string)
            .collect();
        found.sort();
        Ok(found)
    }

    fn read(&self, location: &str) -> Result<String> {
        let file = self
            .bundle
            .files
            .iter()
            .find(|file| self.relative(file.path) == Some(location))
            .ok_or_else(|| eyre!("'{}' is not part of {}", location, self.describe()))?;
        decode(location, file.contents.to_vec())
    }
}
