//! Resource enumeration.
//!
//! Sources and templates are found the same way whether they live in a
//! directory on disk or in a bundle compiled into the binary: enumerate the
//! leaf files under a root, then read them one by one by relative path.

mod bundle;
mod directory;
mod exclusions;

pub use bundle::{Bundle, BundleSource, BundledFile};
pub use directory::DirectorySource;
pub use exclusions::{DEFAULT_EXCLUSIONS, Exclusions};
use eyre::Result;

/// A tree of files that can be enumerated and read.
pub trait ResourceSource {
    /// Describe the root for reports (a directory path or `bundle:<name>`).
    fn describe(&self) -> String;

    /// List every file beneath the root as a forward-slash relative path,
    /// sorted, with excluded names pruned.
    fn locate(&self) -> Result<Vec<String>>;

    /// Read one located file as text.
    fn read(&self, location: &str) -> Result<String>;
}

/// Decode bytes read from a resource as UTF-8 text.
pub(crate) fn decode(location: &str, bytes: Vec<u8>) -> Result<String> {
    String::from_utf8(bytes)
        .map_err(|_| eyre::eyre!("'{}' is not valid UTF-8 text", location))
}
