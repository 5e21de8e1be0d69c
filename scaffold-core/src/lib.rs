//! Core utilities and types for scaffolding.
//!
//! This crate provides the identifier case conversions and the
//! never-overwrite file writer shared by extraction and generation.

mod case;
mod file;

// Case conversion
pub use case::{
    CaseForm, CaseForms, split_words, to_camel_case, to_comment_case, to_kebab_case,
    to_snake_case, to_title_case, to_upper_snake_case,
};
// File operations
pub use file::{File, WriteResult};
