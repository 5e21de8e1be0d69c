//! Template sets compiled into the binary, addressed as `bundle:<name>`.

use scaffolding_engine::locator::{Bundle, BundledFile};

macro_rules! bundled {
    ($bundle:literal, $path:literal) => {
        BundledFile {
            path: $path,
            contents: include_bytes!(concat!("../bundles/", $bundle, "/", $path)),
        }
    };
}

/// A Jackson DTO with a serialization test and its JSON fixture.
static STARTER: Bundle = Bundle {
    name: "starter",
    description: "Java DTO, unit test and JSON fixture",
    files: &[
        bundled!(
            "starter",
            "src/main/java/{{package-path}}/dto/{{entity-snake}}/{{entity-class}}.java.hbs"
        ),
        bundled!(
            "starter",
            "src/test/java/{{package-path}}/dto/{{entity-snake}}/{{entity-class}}Test.java.hbs"
        ),
        bundled!(
            "starter",
            "src/test/resources/fixtures/json/test-{{entity-hyphen}}-1.json.hbs"
        ),
    ],
};

/// Every bundle this binary ships.
pub static BUILTIN: &[&Bundle] = &[&STARTER];
