use crate::config::types::MergedConfig;
use crate::error::{LintfixError, Result};
use crate::rules::catalog::{
	DEFAULT_NULLABLE_IDENTIFIERS, RuleSpec, builtin_rules, default_rules, is_builtin_rule_id,
	selector_matches,
};
use regex::Regex;
use std::borrow::Cow;
use std::path::PathBuf;

/// A compiled rule ready to rewrite documents.
#[derive(Debug)]
pub struct CompiledRule {
	/// Stable rule id.
	pub id: String,

	/// Compiled pattern.
	pub pattern: Regex,

	/// Replacement template.
	pub replacement: String,

	/// Config file the rule came from, `None` for built-in rules.
	pub source: Option<PathBuf>,
}

impl CompiledRule {
	/// Compile a rule spec.
	pub fn from_spec(spec: &RuleSpec, source: Option<PathBuf>) -> Result<Self> {
		Ok(CompiledRule {
			id: spec.id.clone(),
			pattern: compile_regex(&spec.id, &spec.pattern)?,
			replacement: spec.replacement.clone(),
			source,
		})
	}

	/// Replace every match in `input`. Borrows when nothing matched.
	pub fn apply<'t>(&self, input: &'t str) -> Cow<'t, str> {
		self.pattern.replace_all(input, self.replacement.as_str())
	}
}

/// Compile a regex pattern string.
fn compile_regex(rule: &str, pattern: &str) -> Result<Regex> {
	Regex::new(pattern).map_err(|source| LintfixError::InvalidRegex {
		rule: rule.to_string(),
		pattern: pattern.to_string(),
		source,
	})
}

/// Compile rule specs in order.
pub fn compile_rules(specs: &[RuleSpec]) -> Result<Vec<CompiledRule>> {
	specs
		.iter()
		.map(|spec| CompiledRule::from_spec(spec, None))
		.collect()
}

/// Ordered sequence of rules applied to a whole document.
///
/// Each rule runs exactly once, over the output of the rule before it.
#[derive(Debug)]
pub struct Pipeline {
	rules: Vec<CompiledRule>,
}

impl Pipeline {
	/// Build a pipeline from already compiled rules.
	pub fn new(rules: Vec<CompiledRule>) -> Self {
		Pipeline { rules }
	}

	/// The built-in rule set with default identifiers.
	pub fn builtin() -> Result<Self> {
		Ok(Pipeline::new(compile_rules(&default_rules())?))
	}

	/// Built-in rules adjusted by config, followed by the config's extra rules.
	pub fn from_config(config: &MergedConfig) -> Result<Self> {
		let builtins = match config.nullable_identifiers {
			Some(ref idents) => builtin_rules(idents),
			None => builtin_rules(&DEFAULT_NULLABLE_IDENTIFIERS),
		};

		// A nullable-check selector stays valid when another cascade level
		// swaps out the identifier list; it just selects nothing.
		for selector in &config.disabled_rules {
			let known = is_builtin_rule_id(selector)
				|| config.rules.iter().any(|extra| extra.rule.id == *selector);
			if !known {
				return Err(LintfixError::UnknownRule {
					id: selector.clone(),
				});
			}
		}

		let is_enabled = |id: &str| {
			!config
				.disabled_rules
				.iter()
				.any(|selector| selector_matches(selector, id))
		};

		let mut rules = Vec::new();
		for spec in builtins.iter().filter(|spec| is_enabled(&spec.id)) {
			rules.push(CompiledRule::from_spec(spec, None)?);
		}
		for extra in config.rules.iter().filter(|extra| is_enabled(&extra.rule.id)) {
			let spec = RuleSpec {
				id: extra.rule.id.clone(),
				pattern: extra.rule.pattern.clone(),
				replacement: extra.rule.replacement.clone(),
			};
			rules.push(CompiledRule::from_spec(&spec, Some(extra.source.clone()))?);
		}

		tracing::debug!(count = rules.len(), "compiled rules");
		Ok(Pipeline::new(rules))
	}

	/// Rules in application order.
	pub fn rules(&self) -> &[CompiledRule] {
		&self.rules
	}

	/// Apply every rule in order and return the rewritten document.
	pub fn apply(&self, text: &str) -> String {
		let mut document = text.to_string();
		for rule in &self.rules {
			let rewritten = match rule.apply(&document) {
				Cow::Borrowed(_) => continue,
				Cow::Owned(rewritten) => rewritten,
			};
			tracing::debug!(rule = %rule.id, "rule rewrote document");
			document = rewritten;
		}
		document
	}
}
