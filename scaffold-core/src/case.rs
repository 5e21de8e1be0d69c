//! Case conversion for entity identifiers.
//!
//! Every form is derived from the identifier as written (Pascal or camel
//! case) by splitting it into words and re-joining them.

/// Split an identifier into words.
///
/// A word boundary sits
/// - before the last capital of an acronym that starts a new word ("ABCd" -> "AB", "Cd"),
/// - between any non-uppercase character and a following uppercase one,
/// - between a letter and a non-letter, in either direction.
///
/// `_`, `-` and whitespace only separate words and are dropped, which keeps
/// conversions of already converted names stable.
pub fn split_words(s: &str) -> Vec<String> {
    let chars: Vec<char> = s.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if is_separator(c) {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        if !current.is_empty() && is_boundary(&chars, i) {
            words.push(std::mem::take(&mut current));
        }
        current.push(c);
    }

    if !current.is_empty() {
        words.push(current);
    }
    words
}

fn is_separator(c: char) -> bool {
    c == '_' || c == '-' || c.is_whitespace()
}

fn is_boundary(chars: &[char], i: usize) -> bool {
    let prev = chars[i - 1];
    let cur = chars[i];

    if prev.is_uppercase()
        && cur.is_uppercase()
        && chars.get(i + 1).is_some_and(|next| next.is_lowercase())
    {
        return true;
    }

    if !prev.is_uppercase() && cur.is_uppercase() {
        return true;
    }

    prev.is_alphabetic() != cur.is_alphabetic()
}

fn join_lowercase(s: &str, separator: &str) -> String {
    split_words(s)
        .iter()
        .map(|word| word.to_lowercase())
        .collect::<Vec<_>>()
        .join(separator)
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Convert to snake_case (e.g., "AdminUser" -> "admin_user")
pub fn to_snake_case(s: &str) -> String {
    join_lowercase(s, "_")
}

/// Convert to UPPER_SNAKE_CASE (e.g., "AdminUser" -> "ADMIN_USER")
pub fn to_upper_snake_case(s: &str) -> String {
    to_snake_case(s).to_uppercase()
}

/// Convert to kebab-case (e.g., "AdminUser" -> "admin-user")
pub fn to_kebab_case(s: &str) -> String {
    join_lowercase(s, "-")
}

/// Convert to the lowercase prose used in comments (e.g., "AdminUser" -> "admin user")
pub fn to_comment_case(s: &str) -> String {
    join_lowercase(s, " ")
}

/// Convert to a title (e.g., "adminUser" -> "Admin User").
///
/// Only the first character is capitalized; the casing of later words is kept.
pub fn to_title_case(s: &str) -> String {
    capitalize(&split_words(s).join(" "))
}

/// Lowercase the first character only (e.g., "AdminUser" -> "adminUser")
pub fn to_camel_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}

/// A lexical form an entity identifier can take in source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaseForm {
    /// The identifier as written, e.g. `AdminUser`.
    Class,
    /// `Admin User`
    Title,
    /// `adminUser`
    Variable,
    /// `admin user`
    Comment,
    /// `ADMIN_USER`
    UpperSnake,
    /// `admin_user`
    Snake,
    /// `admin-user`
    Hyphen,
}

impl CaseForm {
    /// All forms, in the order their directives take precedence.
    pub const ALL: [CaseForm; 7] = [
        CaseForm::Class,
        CaseForm::Title,
        CaseForm::Variable,
        CaseForm::Comment,
        CaseForm::UpperSnake,
        CaseForm::Snake,
        CaseForm::Hyphen,
    ];

    /// Derive this form from an identifier.
    pub fn apply(&self, identifier: &str) -> String {
        match self {
            CaseForm::Class => identifier.to_string(),
            CaseForm::Title => to_title_case(identifier),
            CaseForm::Variable => to_camel_case(identifier),
            CaseForm::Comment => to_comment_case(identifier),
            CaseForm::UpperSnake => to_upper_snake_case(identifier),
            CaseForm::Snake => to_snake_case(identifier),
            CaseForm::Hyphen => to_kebab_case(identifier),
        }
    }
}

/// Every form of a single identifier, computed together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseForms {
    pub class: String,
    pub title: String,
    pub variable: String,
    pub comment: String,
    pub upper_snake: String,
    pub snake: String,
    pub hyphen: String,
}

impl CaseForms {
    pub fn new(identifier: &str) -> Self {
        Self {
            class: CaseForm::Class.apply(identifier),
            title: CaseForm::Title.apply(identifier),
            variable: CaseForm::Variable.apply(identifier),
            comment: CaseForm::Comment.apply(identifier),
            upper_snake: CaseForm::UpperSnake.apply(identifier),
            snake: CaseForm::Snake.apply(identifier),
            hyphen: CaseForm::Hyphen.apply(identifier),
        }
    }

    /// Get a single form.
    pub fn get(&self, form: CaseForm) -> &str {
        match form {
            CaseForm::Class => &self.class,
            CaseForm::Title => &self.title,
            CaseForm::Variable => &self.variable,
            CaseForm::Comment => &self.comment,
            CaseForm::UpperSnake => &self.upper_snake,
            CaseForm::Snake => &self.snake,
            CaseForm::Hyphen => &self.hyphen,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_words() {
        assert_eq!(split_words("ThisIsATest"), ["This", "Is", "A", "Test"]);
        assert_eq!(split_words("ABCd"), ["AB", "Cd"]);
        assert_eq!(split_words("HTTPServer"), ["HTTP", "Server"]);
        assert_eq!(
            split_words("this1Is12A123Test1234"),
            ["this", "1", "Is", "12", "A", "123", "Test", "1234"]
        );
        assert!(split_words("").is_empty());
    }

    #[test]
    fn test_to_snake_case() {
        assert_eq!(to_snake_case("ThisIs"), "this_is");
        assert_eq!(to_snake_case("ThisIsATest"), "this_is_a_test");
        assert_eq!(
            to_snake_case("this1Is12A123Test1234"),
            "this_1_is_12_a_123_test_1234"
        );
        assert_eq!(to_snake_case("Role"), "role");
        assert_eq!(to_snake_case(""), "");
    }

    #[test]
    fn test_to_snake_case_is_idempotent() {
        for input in ["ThisIsATest", "this1Is12A123Test1234", "AdminUser", "HTTPServer"] {
            let once = to_snake_case(input);
            assert_eq!(to_snake_case(&once), once);
        }
    }

    #[test]
    fn test_to_upper_snake_case() {
        assert_eq!(to_upper_snake_case("AdminUser"), "ADMIN_USER");
        assert_eq!(to_upper_snake_case("thisIsATest"), "THIS_IS_A_TEST");
    }

    #[test]
    fn test_to_kebab_case() {
        assert_eq!(to_kebab_case("thisIsATest"), "this-is-a-test");
        assert_eq!(to_kebab_case("AdminUser"), "admin-user");
    }

    #[test]
    fn test_to_comment_case() {
        assert_eq!(to_comment_case("ThisIs"), "this is");
        assert_eq!(to_comment_case("Role"), "role");
    }

    #[test]
    fn test_to_title_case() {
        assert_eq!(
            to_title_case("this1Is12A123Test1234"),
            "This 1 Is 12 A 123 Test 1234"
        );
        assert_eq!(to_title_case("adminUser"), "Admin User");
        assert_eq!(to_title_case("Role"), "Role");
        assert_eq!(to_title_case("role"), "Role");
    }

    #[test]
    fn test_to_camel_case() {
        assert_eq!(to_camel_case("AdminUser"), "adminUser");
        assert_eq!(to_camel_case("HTTPServer"), "hTTPServer");
        assert_eq!(to_camel_case(""), "");
    }

    #[test]
    fn test_case_forms() {
        let forms = CaseForms::new("AdminUser");
        assert_eq!(forms.class, "AdminUser");
        assert_eq!(forms.title, "Admin User");
        assert_eq!(forms.variable, "adminUser");
        assert_eq!(forms.comment, "admin user");
        assert_eq!(forms.upper_snake, "ADMIN_USER");
        assert_eq!(forms.snake, "admin_user");
        assert_eq!(forms.hyphen, "admin-user");

        for form in CaseForm::ALL {
            assert_eq!(forms.get(form), form.apply("AdminUser"));
        }
    }
}
