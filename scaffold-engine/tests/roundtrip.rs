//! End-to-end extraction and generation against a scratch directory.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use std::{
    fs,
    path::{Path, PathBuf},
};

use indexmap::IndexSet;
use scaffolding_config::{Config, TemplateLocation};
use scaffolding_engine::{Outcome, Severity, plan};
use tempfile::TempDir;

const ADMIN_USER: &str = r#"package org.example.admin_user;

/**
 * The admin user entity.
 */
public class AdminUser {

  private final AdminUser adminUser;

  public static final String KEY = "ADMIN_USER";
}
"#;

const SOURCE_PATH: &str = "src/main/java/org/example/admin_user/AdminUser.java";

struct Workspace {
    temp: TempDir,
}

impl Workspace {
    fn new() -> Self {
        let workspace = Self {
            temp: TempDir::new().unwrap(),
        };
        workspace.write(&workspace.input().join(SOURCE_PATH), ADMIN_USER);
        workspace
    }

    fn input(&self) -> PathBuf {
        self.temp.path().join("input")
    }

    fn output(&self) -> PathBuf {
        self.temp.path().join("output")
    }

    fn templates(&self) -> PathBuf {
        self.temp.path().join("templates")
    }

    fn write(&self, path: &Path, content: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn config(&self, read: bool, entities: &[&str]) -> Config {
        Config {
            read,
            base_package: "org.example".to_string(),
            entities: entities.iter().map(|e| e.to_string()).collect::<IndexSet<_>>(),
            input_directory: self.input(),
            output_directory: self.output(),
            template_location: TemplateLocation::Directory(self.templates()),
            ..Config::default()
        }
    }

    fn run(&self, config: &Config) -> Outcome {
        plan(config, &[]).unwrap().execute()
    }
}

#[test]
fn test_extract_then_generate() {
    let ws = Workspace::new();

    let extracted = ws.run(&ws.config(true, &["AdminUser"]));
    let template_path = ws
        .templates()
        .join("src/main/java/{{package-path}}/{{entity-snake}}/{{entity-class}}.java.hbs");
    assert_eq!(extracted.written, [template_path.clone()]);
    assert!(extracted.diagnostics.is_empty());

    let template = fs::read_to_string(&template_path).unwrap();
    insta::assert_snapshot!("admin_user_template", template);

    let generated = ws.run(&ws.config(false, &["Role"]));
    let role_path = ws.output().join("src/main/java/org/example/role/Role.java");
    assert_eq!(generated.written, [role_path.clone()]);

    let role = fs::read_to_string(&role_path).unwrap();
    insta::assert_snapshot!("role_source", role);
}

#[test]
fn test_regenerating_the_original_entity_is_lossless() {
    let ws = Workspace::new();
    ws.run(&ws.config(true, &["AdminUser"]));
    ws.run(&ws.config(false, &["AdminUser"]));

    let regenerated = fs::read_to_string(ws.output().join(SOURCE_PATH)).unwrap();
    assert_eq!(regenerated, ADMIN_USER);
}

#[test]
fn test_existing_files_are_never_overwritten() {
    let ws = Workspace::new();
    ws.run(&ws.config(true, &["AdminUser"]));

    let seeded = ws.output().join("src/main/java/org/example/role/Role.java");
    ws.write(&seeded, "// hand edited\n");

    let outcome = ws.run(&ws.config(false, &["Role", "Invoice"]));

    assert_eq!(fs::read_to_string(&seeded).unwrap(), "// hand edited\n");
    assert_eq!(outcome.skipped, [seeded]);
    assert_eq!(
        outcome.written,
        [ws.output().join("src/main/java/org/example/invoice/Invoice.java")]
    );
    assert_eq!(outcome.count(Severity::Warning), 1);
    assert!(outcome.diagnostics[0].message.contains("to prevent an overwrite"));

    // Extracting again leaves the existing template alone too.
    let again = ws.run(&ws.config(true, &["AdminUser"]));
    assert!(again.written.is_empty());
    assert_eq!(again.skipped.len(), 1);
}

#[test]
fn test_restriction_drops_plain_files() {
    let ws = Workspace::new();
    ws.write(&ws.input().join("pom.xml"), "<groupId>org.example</groupId>\n");

    let mut extract = ws.config(true, &["AdminUser"]);
    extract.only_with_entity_directives = true;
    let outcome = ws.run(&extract);

    assert_eq!(outcome.written.len(), 1);
    assert!(!ws.templates().join("pom.xml.hbs").exists());
    assert_eq!(outcome.count(Severity::Info), 1);

    // Without the restriction the plain file becomes a template and is
    // generated once, however many entities there are.
    let ws = Workspace::new();
    ws.write(&ws.input().join("pom.xml"), "<groupId>org.example</groupId>\n");
    ws.run(&ws.config(true, &["AdminUser"]));
    assert_eq!(
        fs::read_to_string(ws.templates().join("pom.xml.hbs")).unwrap(),
        "<groupId>{{package}}</groupId>\n"
    );

    let mut generate = ws.config(false, &["Role", "Invoice"]);
    generate.only_with_entity_directives = true;
    let outcome = ws.run(&generate);
    assert!(!ws.output().join("pom.xml").exists());
    assert_eq!(outcome.written.len(), 2);

    generate.only_with_entity_directives = false;
    let outcome = ws.run(&generate);
    assert_eq!(outcome.written, [ws.output().join("pom.xml")]);
}

#[test]
fn test_outcome_serializes() {
    let ws = Workspace::new();
    let outcome = ws.run(&ws.config(true, &[]));

    let json = serde_json::to_value(&outcome).unwrap();
    assert_eq!(json["mode"], "extract");
    assert_eq!(json["written"], serde_json::json!([]));
    assert_eq!(json["diagnostics"][0]["severity"], "warning");
    assert_eq!(json["diagnostics"][0]["phase"], "extract");
    assert_eq!(json["diagnostics"][0]["message"], "no entities configured");
}
