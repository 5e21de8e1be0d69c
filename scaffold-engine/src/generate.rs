//! Write mode: instantiate templates for each entity.

use scaffolding_config::{Config, Mode};

use crate::{
    diagnostic::Diagnostic,
    directive::DirectiveMap,
    locator::ResourceSource,
    paths::join_relative,
    plan::{Plan, PlannedFile},
    store::TemplateStore,
};

const PHASE: &str = "generate";

/// Plans sources under `output_directory` from a template set.
pub struct Generator<'a> {
    config: &'a Config,
    templates: Box<dyn ResourceSource>,
}

impl<'a> Generator<'a> {
    pub fn new(config: &'a Config, templates: Box<dyn ResourceSource>) -> Self {
        Self { config, templates }
    }

    /// Plan one file per (entity, template) pair.
    ///
    /// Templates are read once up front. Entities are visited in configured
    /// order and templates in sorted path order.
    pub fn plan(&self) -> Plan {
        let config = self.config;
        let mut plan = Plan::new(Mode::Generate);

        let (store, diagnostics) = TemplateStore::load(self.templates.as_ref());
        plan.extend(diagnostics);

        if store.is_empty() {
            plan.report(
                Diagnostic::warning(PHASE, "no templates found").at(self.templates.describe()),
            );
            return plan;
        }
        if config.entities.is_empty() {
            plan.report(Diagnostic::warning(PHASE, "no entities configured"));
            return plan;
        }

        for entity in &config.entities {
            let map = DirectiveMap::new(entity, &config.base_package, &config.user_token_map);

            for record in store.records() {
                let target = record.target_path();
                let has_directives =
                    map.contains_directive(target) || map.contains_directive(&record.content);

                if config.only_with_entity_directives && !has_directives {
                    plan.report(
                        Diagnostic::info(PHASE, format!("ignored: no directives for {}", entity))
                            .at(record.path.as_str()),
                    );
                    continue;
                }

                plan.claim(PlannedFile {
                    path: join_relative(&config.output_directory, &map.generate(target)),
                    content: map.generate(&record.content),
                    entity: entity.clone(),
                    origin: record.path.clone(),
                    has_directives,
                });
            }
        }

        plan
    }
}

#[cfg(test)]
mod tests {
    use std::{fs, path::Path};

    use indexmap::{IndexMap, IndexSet};
    use tempfile::TempDir;

    use super::*;
    use crate::locator::{DirectorySource, Exclusions};

    fn touch(root: &Path, relative: &str, content: &str) {
        let path = join_relative(root, relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn config(output: &Path, entities: &[&str]) -> Config {
        Config {
            base_package: "org.example".to_string(),
            entities: entities.iter().map(|e| e.to_string()).collect::<IndexSet<_>>(),
            output_directory: output.to_path_buf(),
            ..Config::default()
        }
    }

    fn generator<'a>(config: &'a Config, templates: &Path) -> Generator<'a> {
        Generator::new(
            config,
            Box::new(DirectorySource::new(templates, Exclusions::default())),
        )
    }

    #[test]
    fn test_generates_path_and_content() {
        let temp = TempDir::new().unwrap();
        touch(
            temp.path(),
            "templates/src/{{package-path}}/{{entity-snake}}/{{entity-class}}.java.hbs",
            "package {{package}}.{{entity-snake}};\nclass {{entity-class}} {}",
        );

        let out = temp.path().join("out");
        let config = config(&out, &["AdminUser"]);
        let plan = generator(&config, &temp.path().join("templates")).plan();

        let file = plan
            .get(&out.join("src/org/example/admin_user/AdminUser.java"))
            .unwrap();
        assert_eq!(file.content, "package org.example.admin_user;\nclass AdminUser {}");
        assert_eq!(file.entity, "AdminUser");
        assert!(plan.diagnostics().is_empty());
    }

    #[test]
    fn test_every_entity_gets_every_template() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "t/{{entity-class}}.java.hbs", "class {{entity-class}} {}");
        touch(temp.path(), "t/{{entity-class}}Dao.java.hbs", "class {{entity-class}}Dao {}");

        let out = temp.path().join("out");
        let config = config(&out, &["Role", "User"]);
        let plan = generator(&config, &temp.path().join("t")).plan();

        let names: Vec<String> = plan
            .files()
            .map(|f| f.path.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, ["Role.java", "RoleDao.java", "User.java", "UserDao.java"]);
    }

    #[test]
    fn test_user_tokens() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "t/NOTICE.hbs", "(c) {{COMPANY}}");

        let out = temp.path().join("out");
        let mut config = config(&out, &["Role"]);
        config.user_token_map = IndexMap::from([("Acme".to_string(), "COMPANY".to_string())]);
        let plan = generator(&config, &temp.path().join("t")).plan();

        assert_eq!(plan.get(&out.join("NOTICE")).unwrap().content, "(c) Acme");
    }

    #[test]
    fn test_restriction_checks_template_before_substitution() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "t/pom.xml.hbs", "<groupId>{{package}}</groupId>");
        touch(temp.path(), "t/{{entity-class}}.java.hbs", "class {{entity-class}} {}");

        let out = temp.path().join("out");
        let mut config = config(&out, &["Role"]);
        config.only_with_entity_directives = true;
        let plan = generator(&config, &temp.path().join("t")).plan();

        assert_eq!(plan.len(), 1);
        assert!(plan.get(&out.join("Role.java")).is_some());
        assert_eq!(plan.diagnostics()[0].location.as_deref(), Some("pom.xml.hbs"));
    }

    #[test]
    fn test_shared_template_is_planned_once() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "t/README.md.hbs", "# {{package}}");

        let out = temp.path().join("out");
        let config = config(&out, &["Role", "User"]);
        let plan = generator(&config, &temp.path().join("t")).plan();

        assert_eq!(plan.len(), 1);
        assert_eq!(plan.files().next().unwrap().entity, "Role");
        assert!(plan.diagnostics().is_empty());
    }

    #[test]
    fn test_empty_template_set() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("t")).unwrap();

        let config = config(temp.path(), &["Role"]);
        let plan = generator(&config, &temp.path().join("t")).plan();

        assert!(plan.is_empty());
        assert!(plan.diagnostics()[0].severity.is_warning());
    }
}
