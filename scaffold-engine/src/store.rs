//! Templates loaded into memory.

use std::fmt;

use indexmap::IndexMap;

use crate::{
    diagnostic::Diagnostic,
    locator::ResourceSource,
    paths::{is_template, strip_template_suffix},
};

/// Which part of a source tree a template belongs to.
///
/// Maven-style layouts keep production code under `src/main/` and tests
/// under `src/test/`; anything else under `src/` is a named partition.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Partition {
    Main,
    Test,
    Named(String),
    /// Outside `src/`
    Root,
}

impl Partition {
    /// Classify a forward-slash relative path.
    pub fn from_path(path: &str) -> Self {
        let mut segments = path.split('/');
        match (segments.next(), segments.next(), segments.next()) {
            (Some("src"), Some("main"), Some(_)) => Partition::Main,
            (Some("src"), Some("test"), Some(_)) => Partition::Test,
            (Some("src"), Some(name), Some(_)) => Partition::Named(name.to_string()),
            _ => Partition::Root,
        }
    }
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Partition::Main => write!(f, "main"),
            Partition::Test => write!(f, "test"),
            Partition::Named(name) => write!(f, "{}", name),
            Partition::Root => write!(f, "root"),
        }
    }
}

/// One template read from the template root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateRecord {
    /// Path relative to the template root, including the `.hbs` suffix
    pub path: String,
    pub content: String,
    pub partition: Partition,
}

impl TemplateRecord {
    /// The output path before substitution (the key without `.hbs`).
    pub fn target_path(&self) -> &str {
        strip_template_suffix(&self.path)
    }
}

/// Every template under a root, keyed by relative path in sorted order.
#[derive(Debug, Clone, Default)]
pub struct TemplateStore {
    records: IndexMap<String, TemplateRecord>,
}

impl TemplateStore {
    /// Read every template from a source.
    ///
    /// A template that cannot be read is reported and left out; the store is
    /// built from whatever remains. Failing to enumerate the source at all
    /// yields an empty store and an error diagnostic.
    pub fn load(source: &dyn ResourceSource) -> (Self, Vec<Diagnostic>) {
        let mut store = Self::default();
        let mut diagnostics = Vec::new();

        let located = match source.locate() {
            Ok(located) => located,
            Err(e) => {
                diagnostics.push(
                    Diagnostic::error("store", format!("{:#}", e)).at(source.describe()),
                );
                return (store, diagnostics);
            }
        };

        for path in located.into_iter().filter(|p| is_template(p)) {
            match source.read(&path) {
                Ok(content) => {
                    let partition = Partition::from_path(strip_template_suffix(&path));
                    store.records.insert(
                        path.clone(),
                        TemplateRecord {
                            path,
                            content,
                            partition,
                        },
                    );
                }
                Err(e) => {
                    diagnostics.push(Diagnostic::warning("store", format!("{:#}", e)).at(path));
                }
            }
        }

        (store, diagnostics)
    }

    pub fn get(&self, path: &str) -> Option<&TemplateRecord> {
        self.records.get(path)
    }

    pub fn records(&self) -> impl Iterator<Item = &TemplateRecord> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::{fs, path::Path};

    use tempfile::TempDir;

    use super::*;
    use crate::{locator::{DirectorySource, Exclusions}, paths::join_relative};

    fn touch(root: &Path, relative: &str, content: &[u8]) {
        let path = join_relative(root, relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_partition() {
        assert_eq!(Partition::from_path("src/main/java/User.java"), Partition::Main);
        assert_eq!(Partition::from_path("src/test/java/UserTest.java"), Partition::Test);
        assert_eq!(
            Partition::from_path("src/it/java/UserIT.java"),
            Partition::Named("it".to_string())
        );
        assert_eq!(Partition::from_path("pom.xml"), Partition::Root);
        assert_eq!(Partition::from_path("src/main"), Partition::Root);
        assert_eq!(Partition::Named("it".into()).to_string(), "it");
    }

    #[test]
    fn test_load_keeps_only_templates() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "src/main/{{entity-class}}.java.hbs", b"class {{entity-class}} {}");
        touch(temp.path(), "README.md", b"not a template");

        let source = DirectorySource::new(temp.path(), Exclusions::default());
        let (store, diagnostics) = TemplateStore::load(&source);

        assert!(diagnostics.is_empty());
        assert_eq!(store.len(), 1);
        let record = store.get("src/main/{{entity-class}}.java.hbs").unwrap();
        assert_eq!(record.target_path(), "src/main/{{entity-class}}.java");
        assert_eq!(record.partition, Partition::Main);
        assert_eq!(record.content, "class {{entity-class}} {}");
    }

    #[test]
    fn test_load_reports_unreadable_templates_and_continues() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "a/logo.png.hbs", &[0xff, 0xfe, 0x00]);
        touch(temp.path(), "b/{{entity-class}}.txt.hbs", b"{{entity-title}}");

        let source = DirectorySource::new(temp.path(), Exclusions::default());
        let (store, diagnostics) = TemplateStore::load(&source);

        assert_eq!(store.len(), 1);
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].severity.is_warning());
        assert_eq!(diagnostics[0].location.as_deref(), Some("a/logo.png.hbs"));
    }

    #[test]
    fn test_load_missing_root() {
        let temp = TempDir::new().unwrap();
        let source = DirectorySource::new(temp.path().join("missing"), Exclusions::default());
        let (store, diagnostics) = TemplateStore::load(&source);

        assert!(store.is_empty());
        assert!(diagnostics[0].severity.is_error());
    }
}
