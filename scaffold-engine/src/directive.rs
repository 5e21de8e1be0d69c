//! Directives: placeholder tokens and the literals they stand for.
//!
//! A [`DirectiveMap`] is built for one entity at a time. Extraction rewrites
//! literals (`AdminUser`, `admin_user`, ...) into placeholders
//! (`{{entity-class}}`, `{{entity-snake}}`, ...); generation rewrites the
//! placeholders back into the literals of the target entity.

use std::fmt;

use indexmap::IndexMap;
use scaffolding_core::{CaseForm, CaseForms};

/// A placeholder kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Directive {
    /// `{{package}}`, e.g. `org.example`
    Package,
    /// `{{package-path}}`, e.g. `org/example`
    PackagePath,
    /// One case form of the entity, e.g. `{{entity-snake}}`
    Entity(CaseForm),
    /// A token declared in the configuration, e.g. `{{COMPANY}}`
    User(String),
}

impl Directive {
    /// The built-in directives, in precedence order.
    pub const BUILTIN: [Directive; 9] = [
        Directive::Package,
        Directive::PackagePath,
        Directive::Entity(CaseForm::Class),
        Directive::Entity(CaseForm::Title),
        Directive::Entity(CaseForm::Variable),
        Directive::Entity(CaseForm::Comment),
        Directive::Entity(CaseForm::UpperSnake),
        Directive::Entity(CaseForm::Snake),
        Directive::Entity(CaseForm::Hyphen),
    ];

    /// The token name between the braces.
    pub fn name(&self) -> &str {
        match self {
            Directive::Package => "package",
            Directive::PackagePath => "package-path",
            Directive::Entity(form) => match form {
                CaseForm::Class => "entity-class",
                CaseForm::Title => "entity-title",
                CaseForm::Variable => "entity-variable",
                CaseForm::Comment => "entity-comment",
                CaseForm::UpperSnake => "entity-snake-upper",
                CaseForm::Snake => "entity-snake",
                CaseForm::Hyphen => "entity-hyphen",
            },
            Directive::User(name) => name,
        }
    }

    /// The placeholder as it appears in templates, e.g. `{{entity-class}}`.
    pub fn token(&self) -> String {
        format!("{{{{{}}}}}", self.name())
    }

    /// Whether this directive ties a template to an entity.
    ///
    /// Package directives appear in generic boilerplate too, so they do not count.
    pub fn is_entity_specific(&self) -> bool {
        matches!(self, Directive::Entity(_) | Directive::User(_))
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{{{}}}}}", self.name())
    }
}

/// Which way a [`DirectiveMap`] rewrites text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Literals become placeholders.
    Extract,
    /// Placeholders become literals.
    Generate,
}

/// A directive paired with its literal value for one entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub directive: Directive,
    pub token: String,
    pub literal: String,
}

/// Ordered directive bindings for one (entity, base package, user tokens) combination.
#[derive(Debug, Clone, Default)]
pub struct DirectiveMap {
    bindings: Vec<Binding>,
}

impl DirectiveMap {
    /// Build the bindings for an entity.
    ///
    /// Order is precedence: user tokens, then package, then the entity's
    /// case forms from most to least specific.
    pub fn new(
        entity: &str,
        base_package: &str,
        user_tokens: &IndexMap<String, String>,
    ) -> Self {
        let mut map = Self::default();

        for (literal, name) in user_tokens {
            map.push(Directive::User(name.clone()), literal.clone());
        }

        map.push(Directive::Package, base_package.to_string());
        map.push(Directive::PackagePath, base_package.replace('.', "/"));

        let forms = CaseForms::new(entity);
        for form in CaseForm::ALL {
            map.push(Directive::Entity(form), forms.get(form).to_string());
        }

        map
    }

    fn push(&mut self, directive: Directive, literal: String) {
        let token = directive.token();
        self.bindings.push(Binding {
            directive,
            token,
            literal,
        });
    }

    /// All bindings in precedence order.
    pub fn bindings(&self) -> &[Binding] {
        &self.bindings
    }

    /// Replacement rules (from, to) in the order they are tried.
    ///
    /// Extraction resolves literals shared by several directives: built-in
    /// directives keep the first claim, user tokens give way to anything
    /// later. Empty literals are dropped, and longer literals are tried first
    /// so that `AdminUser` wins over a shorter `User`.
    pub fn rules(&self, direction: Direction) -> Vec<(&str, &str)> {
        match direction {
            Direction::Generate => {
                let mut rules: Vec<(&str, &str)> = Vec::new();
                for binding in &self.bindings {
                    if !rules.iter().any(|(token, _)| *token == binding.token) {
                        rules.push((&binding.token, &binding.literal));
                    }
                }
                rules
            }
            Direction::Extract => {
                let mut claims: IndexMap<&str, &Binding> = IndexMap::new();
                for binding in self.bindings.iter().filter(|b| !b.literal.is_empty()) {
                    match claims.get(binding.literal.as_str()) {
                        Some(existing) if !matches!(existing.directive, Directive::User(_)) => {}
                        _ => {
                            claims.shift_remove(binding.literal.as_str());
                            claims.insert(&binding.literal, binding);
                        }
                    }
                }

                let mut rules: Vec<(&str, &str)> = claims
                    .into_iter()
                    .map(|(literal, binding)| (literal, binding.token.as_str()))
                    .collect();
                rules.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
                rules
            }
        }
    }

    /// Rewrite text in the given direction.
    pub fn apply(&self, text: &str, direction: Direction) -> String {
        replace_all(text, &self.rules(direction))
    }

    /// Replace literals with placeholders.
    pub fn extract(&self, text: &str) -> String {
        self.apply(text, Direction::Extract)
    }

    /// Replace placeholders with literals.
    pub fn generate(&self, text: &str) -> String {
        self.apply(text, Direction::Generate)
    }

    /// Whether text carries a placeholder that ties it to an entity:
    /// any `{{entity-*}}` token or a user token.
    pub fn contains_directive(&self, text: &str) -> bool {
        self.bindings
            .iter()
            .filter(|b| b.directive.is_entity_specific())
            .any(|b| text.contains(&b.token))
    }
}

/// Replace every rule match in a single left-to-right pass.
///
/// At each position the first matching rule wins and the scan resumes after
/// the match, so replacement text is never matched again.
fn replace_all(text: &str, rules: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(c) = rest.chars().next() {
        match rules.iter().find(|(from, _)| rest.starts_with(from)) {
            Some((from, to)) => {
                out.push_str(to);
                rest = &rest[from.len()..];
            }
            None => {
                out.push(c);
                rest = &rest[c.len_utf8()..];
            }
        }
    }

    out
}
