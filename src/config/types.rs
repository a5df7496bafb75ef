use serde::Deserialize;
use std::path::PathBuf;

use crate::error::{LintfixError, Result};
use crate::rules::catalog::is_builtin_rule_id;

/// Top-level configuration from a `.lintfix.toml` file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
	/// If true, stop the directory cascade and jump directly to ~/.lintfix.toml.
	#[serde(default)]
	pub root: bool,

	/// Identifiers whose `!ident` negation is rewritten to `ident == null`.
	/// Replaces the built-in list when set.
	#[serde(default)]
	pub nullable_identifiers: Option<Vec<String>>,

	/// Built-in rule ids to skip. `nullable-check` disables every identifier rule.
	#[serde(default)]
	pub disabled_rules: Vec<String>,

	/// Extra rules, applied after the built-in rules.
	#[serde(default)]
	pub rules: Vec<ExtraRule>,
}

/// A user-defined substitution rule.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExtraRule {
	/// Stable id shown by `--list-rules`.
	pub id: String,

	/// Regex pattern, replaced globally.
	pub pattern: String,

	/// Replacement template. `$1` / `${name}` refer to capture groups.
	pub replacement: String,
}

/// A loaded configuration with its source path for debugging/display.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
	/// The parsed configuration.
	pub config: Config,

	/// The path this config was loaded from.
	pub path: PathBuf,
}

/// Merged configuration from every config file in the cascade.
#[derive(Debug, Clone, Default)]
pub struct MergedConfig {
	/// Identifier list from the most specific config that sets one.
	pub nullable_identifiers: Option<Vec<String>>,

	/// Union of disabled rule ids.
	pub disabled_rules: Vec<String>,

	/// Extra rules, outermost config first.
	pub rules: Vec<ExtraRuleWithSource>,
}

/// An extra rule with its source config path for debugging/display.
#[derive(Debug, Clone)]
pub struct ExtraRuleWithSource {
	/// The rule itself.
	pub rule: ExtraRule,

	/// The config file this rule came from.
	pub source: PathBuf,
}

impl ExtraRule {
	/// Reject empty ids and ids that collide with built-in rules.
	pub fn validate(&self) -> Result<()> {
		if self.id.trim().is_empty() {
			return Err(LintfixError::EmptyIdentifier {
				field: "rules.id".to_string(),
			});
		}

		if is_builtin_rule_id(&self.id) {
			return Err(LintfixError::ReservedRuleId {
				id: self.id.clone(),
			});
		}

		Ok(())
	}
}

impl Config {
	/// Validate identifiers and all extra rules in this config.
	pub fn validate(&self) -> Result<()> {
		if let Some(ref idents) = self.nullable_identifiers
			&& idents.iter().any(|ident| ident.is_empty())
		{
			return Err(LintfixError::EmptyIdentifier {
				field: "nullable-identifiers".to_string(),
			});
		}

		for rule in &self.rules {
			rule.validate()?;
		}
		Ok(())
	}
}
