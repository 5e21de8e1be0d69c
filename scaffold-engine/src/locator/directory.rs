use std::path::{Path, PathBuf};

use eyre::{Context, Result, eyre};

use super::{Exclusions, ResourceSource, decode};
use crate::paths::join_relative;

/// Files beneath a directory on disk.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
    exclusions: Exclusions,
    pruned: Vec<PathBuf>,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>, exclusions: Exclusions) -> Self {
        Self {
            root: root.into(),
            exclusions,
            pruned: Vec::new(),
        }
    }

    /// Skip a subtree, e.g. a template directory that lives inside the sources.
    pub fn prune(mut self, dir: impl AsRef<Path>) -> Self {
        if let Ok(canonical) = dir.as_ref().canonicalize() {
            self.pruned.push(canonical);
        }
        self
    }

    fn is_pruned(&self, dir: &Path) -> bool {
        if self.pruned.is_empty() {
            return false;
        }
        dir.canonicalize()
            .map(|canonical| self.pruned.contains(&canonical))
            .unwrap_or(false)
    }

    fn scan(&self, dir: &Path, prefix: &str, found: &mut Vec<String>) -> Result<()> {
        let entries = std::fs::read_dir(dir)
            .wrap_err_with(|| format!("failed to list '{}'", dir.display()))?;

        for entry in entries {
            let entry = entry?;
            let path = entry.path();
            let file_name = entry.file_name().to_string_lossy().to_string();

            if self.exclusions.is_excluded(&file_name) {
                continue;
            }

            let relative = if prefix.is_empty() {
                file_name
            } else {
                format!("{}/{}", prefix, file_name)
            };

            // Symlinked directories are never followed.
            let file_type = entry.file_type()?;
            if file_type.is_dir() {
                if !self.is_pruned(&path) {
                    self.scan(&path, &relative, found)?;
                }
            } else if !(file_type.is_symlink() && path.is_dir()) {
                found.push(relative);
            }
        }

        Ok(())
    }
}

impl ResourceSource for DirectorySource {
    fn describe(&self) -> String {
        self.root.display().to_string()
    }

    fn locate(&self) -> Result<Vec<String>> {
        if !self.root.is_dir() {
            return Err(eyre!("'{}' is not a directory", self.root.display()));
        }

        let mut found = Vec::new();
        self.scan(&self.root, "", &mut found)?;
        found.sort();
        Ok(found)
    }

    fn read(&self, location: &str) -> Result<String> {
        let path = join_relative(&self.root, location);
        let bytes = std::fs::read(&path)
            .wrap_err_with(|| format!("failed to read '{}'", path.display()))?;
        decode(location, bytes)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn touch(root: &Path, relative: &str, content: &[u8]) {
        let path = join_relative(root, relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_locate_recurses_and_sorts() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "src/main/java/b/User.java", b"class User {}");
        touch(temp.path(), "src/main/java/a/Util.java", b"class Util {}");
        touch(temp.path(), "README.md", b"# readme");

        let source = DirectorySource::new(temp.path(), Exclusions::default());
        let found = source.locate().unwrap();

        assert_eq!(
            found,
            [
                "README.md",
                "src/main/java/a/Util.java",
                "src/main/java/b/User.java"
            ]
        );
        assert_eq!(source.read("README.md").unwrap(), "# readme");
    }

    #[test]
    fn test_locate_prunes_excluded_directories() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), ".git/HEAD", b"ref: refs/heads/main");
        touch(temp.path(), ".idea/workspace.xml", b"<xml/>");
        touch(temp.path(), "scaffold.toml", b"read = true");
        touch(temp.path(), "src/User.java", b"class User {}");

        let exclusions = Exclusions::with_defaults::<_, &str>([]).unwrap();
        let found = DirectorySource::new(temp.path(), exclusions)
            .locate()
            .unwrap();

        assert_eq!(found, ["src/User.java"]);
    }

    #[test]
    fn test_locate_prunes_subtree() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "src/User.java", b"class User {}");
        touch(temp.path(), "templates/User.java.hbs", b"class {{entity-class}} {}");

        let found = DirectorySource::new(temp.path(), Exclusions::default())
            .prune(temp.path().join("templates"))
            .locate()
            .unwrap();

        assert_eq!(found, ["src/User.java"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_locate_skips_directory_symlinks() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "src/User.java", b"class User {}");
        touch(temp.path(), "shared/Base.java", b"class Base {}");
        std::os::unix::fs::symlink("..", temp.path().join("src/loop")).unwrap();
        std::os::unix::fs::symlink("../shared/Base.java", temp.path().join("src/Base.java"))
            .unwrap();

        let found = DirectorySource::new(temp.path(), Exclusions::default())
            .locate()
            .unwrap();

        assert_eq!(found, ["shared/Base.java", "src/Base.java", "src/User.java"]);
    }

    #[test]
    fn test_locate_missing_root() {
        let temp = TempDir::new().unwrap();
        let source = DirectorySource::new(temp.path().join("missing"), Exclusions::default());
        assert!(source.locate().is_err());
    }

    #[test]
    fn test_read_rejects_binary() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "logo.png", &[0x89, 0x50, 0xff, 0xfe]);

        let source = DirectorySource::new(temp.path(), Exclusions::default());
        let err = source.read("logo.png").unwrap_err();

        assert!(err.to_string().contains("not valid UTF-8"));
    }
}
