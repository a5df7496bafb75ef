//! Rewrite rules for lintfix.
//!
//! This module handles:
//! - The built-in rule catalog and its identifier template
//! - Compiling rules and applying them in order to a document

pub mod catalog;
pub mod pipeline;

pub use catalog::{DEFAULT_NULLABLE_IDENTIFIERS, RuleSpec, builtin_rules, default_rules};
pub use pipeline::{CompiledRule, Pipeline, compile_rules};
