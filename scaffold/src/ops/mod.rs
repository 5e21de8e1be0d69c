//! Core operations.
//!
//! This module contains the business logic for scaffold commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod run;

pub use check::check;
pub use run::run;
