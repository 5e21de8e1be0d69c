//! Read mode: turn an existing source tree into templates.

use eyre::Result;
use scaffolding_config::{Config, Mode};

use crate::{
    diagnostic::Diagnostic,
    directive::DirectiveMap,
    locator::{DirectorySource, Exclusions, ResourceSource},
    paths::{TEMPLATE_PATTERN, join_relative, profile_root, to_template_path},
    plan::{Plan, PlannedFile},
};

const PHASE: &str = "extract";

/// Plans templates from the sources under `input_directory`.
pub struct Extractor<'a> {
    config: &'a Config,
}

impl<'a> Extractor<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Plan one template per (source file, entity) pair.
    ///
    /// Sources are visited in sorted path order and entities in configured
    /// order. The template directory itself and any existing templates are
    /// never read back as sources.
    pub fn plan(&self) -> Result<Plan> {
        let config = self.config;
        let mut plan = Plan::new(Mode::Extract);

        let Some(template_dir) = config.template_location.as_directory() else {
            plan.report(Diagnostic::error(
                PHASE,
                format!(
                    "cannot extract into '{}': bundles are read-only",
                    config.template_location
                ),
            ));
            return Ok(plan);
        };
        let template_root = profile_root(template_dir, &config.profile);

        if config.entities.is_empty() {
            plan.report(Diagnostic::warning(PHASE, "no entities configured"));
            return Ok(plan);
        }

        let exclusions = Exclusions::for_config(config)?.and([TEMPLATE_PATTERN])?;
        let source = DirectorySource::new(&config.input_directory, exclusions).prune(template_dir);

        let located = match source.locate() {
            Ok(located) => located,
            Err(e) => {
                plan.report(Diagnostic::error(PHASE, format!("{:#}", e)).at(source.describe()));
                return Ok(plan);
            }
        };

        let directives: Vec<(&str, DirectiveMap)> = config
            .entities
            .iter()
            .map(|entity| {
                (
                    entity.as_str(),
                    DirectiveMap::new(entity, &config.base_package, &config.user_token_map),
                )
            })
            .collect();

        for path in located {
            let content = match source.read(&path) {
                Ok(content) => content,
                Err(e) => {
                    plan.report(Diagnostic::warning(PHASE, format!("{:#}", e)).at(path));
                    continue;
                }
            };

            for (entity, map) in &directives {
                let template_path = map.extract(&path);
                let template_content = map.extract(&content);
                let has_directives = map.contains_directive(&template_path)
                    || map.contains_directive(&template_content);

                if config.only_with_entity_directives && !has_directives {
                    plan.report(
                        Diagnostic::info(PHASE, format!("ignored: no directives for {}", entity))
                            .at(path.as_str()),
                    );
                    continue;
                }

                plan.claim(PlannedFile {
                    path: join_relative(&template_root, &to_template_path(&template_path)),
                    content: template_content,
                    entity: entity.to_string(),
                    origin: path.clone(),
                    has_directives,
                });
            }
        }

        Ok(plan)
    }
}
