//! Bidirectional template engine for scaffolding.
//!
//! Extraction reads an existing source tree and rewrites the names of a
//! working entity into placeholders, producing templates. Generation reads
//! those templates back and rewrites the placeholders into the names of new
//! entities. Both directions produce a [`Plan`] that is written through the
//! never-overwrite file writer.
//!
//! # Module Organization
//!
//! - [`directive`] - Placeholder tokens and their per-entity literals
//! - [`locator`] - Enumerating files on disk or in compiled-in bundles
//! - [`paths`] - Template path conventions

mod diagnostic;
pub mod directive;
mod extract;
mod generate;
pub mod locator;
pub mod paths;
mod plan;
mod store;

pub use diagnostic::{Diagnostic, Severity};
pub use directive::{Direction, Directive, DirectiveMap};
pub use extract::Extractor;
use eyre::{Result, eyre};
pub use generate::Generator;
use locator::{Bundle, BundleSource, DirectorySource, Exclusions, ResourceSource};
pub use plan::{Outcome, Plan, PlannedFile};
use scaffolding_config::{Config, Mode, TemplateLocation};
pub use store::{Partition, TemplateRecord, TemplateStore};

/// Open the template set a configuration points at.
///
/// A directory location is read beneath `profile`; a `bundle:<name>`
/// location is looked up in `bundles`.
pub fn template_source(
    config: &Config,
    bundles: &[&'static Bundle],
) -> Result<Box<dyn ResourceSource>> {
    let exclusions = Exclusions::for_config(config)?;

    match &config.template_location {
        TemplateLocation::Directory(dir) => Ok(Box::new(DirectorySource::new(
            paths::profile_root(dir, &config.profile),
            exclusions,
        ))),
        TemplateLocation::Bundle(name) => {
            let bundle = Bundle::find(bundles, name).ok_or_else(|| {
                let available: Vec<&str> = bundles.iter().map(|b| b.name).collect();
                eyre!(
                    "unknown bundle '{}' (available: {})",
                    name,
                    available.join(", ")
                )
            })?;
            Ok(Box::new(BundleSource::new(
                bundle,
                &config.profile,
                exclusions,
            )))
        }
    }
}

/// Plan a run in the direction the configuration selects.
pub fn plan(config: &Config, bundles: &[&'static Bundle]) -> Result<Plan> {
    match config.mode() {
        Mode::Extract => Extractor::new(config).plan(),
        Mode::Generate => Ok(Generator::new(config, template_source(config, bundles)?).plan()),
    }
}
