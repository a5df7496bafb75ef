//! Built-in rewrite rules, in application order.

/// Identifiers whose negation is rewritten to a null comparison by default.
pub const DEFAULT_NULLABLE_IDENTIFIERS: [&str; 6] = [
	"text", "result", "response", "jsonData", "instance", "options",
];

/// Rule id shared by every `nullable-check:<ident>` rule.
pub const NULLABLE_CHECK_ID: &str = "nullable-check";

/// Rules that run before the nullable checks.
///
/// The `[value]` rule deliberately emits `[name]`.
const LEADING_RULES: [(&str, &str, &str); 2] = [
	("nullish-name", r"(\w+)\[name\] \|\|", "${1}[name] ??"),
	("nullish-value", r"(\w+)\[value\] \|\|", "${1}[name] ??"),
];

/// Rules that run after the nullable checks.
const TRAILING_RULES: [(&str, &str, &str); 3] = [
	(
		"empty-object-condition",
		r"if\s*\(\s*\{\s*\}\s*\)",
		"if (false)",
	),
	("console-log-to-warn", r"console\.log\(", "console.warn("),
	("unused-prefix", r"\bunused(\w+)\b", "_${1}"),
];

/// An uncompiled rule: id, regex pattern and replacement template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSpec {
	pub id: String,
	pub pattern: String,
	pub replacement: String,
}

impl RuleSpec {
	fn from_entry((id, pattern, replacement): (&str, &str, &str)) -> Self {
		RuleSpec {
			id: id.to_string(),
			pattern: pattern.to_string(),
			replacement: replacement.to_string(),
		}
	}
}

/// Build the `!ident` -> `ident == null` rule for one identifier.
///
/// The identifier is matched and emitted literally.
pub fn nullable_check_rule(ident: &str) -> RuleSpec {
	RuleSpec {
		id: format!("{NULLABLE_CHECK_ID}:{ident}"),
		pattern: format!(r"!{}\b", regex::escape(ident)),
		replacement: format!("{} == null", ident.replace('$', "$$")),
	}
}

/// The full built-in rule list for the given nullable identifiers.
pub fn builtin_rules<S: AsRef<str>>(nullable_identifiers: &[S]) -> Vec<RuleSpec> {
	let mut rules: Vec<RuleSpec> = LEADING_RULES.into_iter().map(RuleSpec::from_entry).collect();
	rules.extend(
		nullable_identifiers
			.iter()
			.map(|ident| nullable_check_rule(ident.as_ref())),
	);
	rules.extend(TRAILING_RULES.into_iter().map(RuleSpec::from_entry));
	rules
}

/// Built-in rules with the default identifier list.
pub fn default_rules() -> Vec<RuleSpec> {
	builtin_rules(&DEFAULT_NULLABLE_IDENTIFIERS)
}

/// Whether `id` names a built-in rule (or the nullable-check family).
pub fn is_builtin_rule_id(id: &str) -> bool {
	id == NULLABLE_CHECK_ID
		|| id.starts_with(&format!("{NULLABLE_CHECK_ID}:"))
		|| LEADING_RULES
			.iter()
			.chain(TRAILING_RULES.iter())
			.any(|(builtin, _, _)| *builtin == id)
}

/// Whether a `disabled-rules` entry selects the rule with `id`.
pub fn selector_matches(selector: &str, id: &str) -> bool {
	if selector == id {
		return true;
	}
	selector == NULLABLE_CHECK_ID
		&& id
			.strip_prefix(NULLABLE_CHECK_ID)
			.is_some_and(|rest| rest.starts_with(':'))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_default_rule_order() {
		let ids: Vec<_> = default_rules().into_iter().map(|r| r.id).collect();
		assert_eq!(
			ids,
			vec![
				"nullish-name",
				"nullish-value",
				"nullable-check:text",
				"nullable-check:result",
				"nullable-check:response",
				"nullable-check:jsonData",
				"nullable-check:instance",
				"nullable-check:options",
				"empty-object-condition",
				"console-log-to-warn",
				"unused-prefix",
			]
		);
	}

	#[test]
	fn test_nullable_check_rule_escapes_identifier() {
		let rule = nullable_check_rule("$el");
		assert_eq!(rule.id, "nullable-check:$el");
		assert_eq!(rule.pattern, r"!\$el\b");
		assert_eq!(rule.replacement, "$$el == null");
	}

	#[test]
	fn test_custom_identifiers_replace_defaults() {
		let rules = builtin_rules(&["payload"]);
		assert_eq!(rules.len(), LEADING_RULES.len() + 1 + TRAILING_RULES.len());
		assert_eq!(rules[2].id, "nullable-check:payload");
	}

	#[test]
	fn test_is_builtin_rule_id() {
		assert!(is_builtin_rule_id("nullish-value"));
		assert!(is_builtin_rule_id("unused-prefix"));
		assert!(is_builtin_rule_id("nullable-check"));
		assert!(is_builtin_rule_id("nullable-check:anything"));
		assert!(!is_builtin_rule_id("nullable-checker"));
		assert!(!is_builtin_rule_id("logger-warn"));
	}

	#[test]
	fn test_selector_matches_family() {
		assert!(selector_matches("nullable-check", "nullable-check:text"));
		assert!(selector_matches("nullable-check:text", "nullable-check:text"));
		assert!(!selector_matches("nullable-check:text", "nullable-check:result"));
		assert!(!selector_matches("nullable-check", "unused-prefix"));
		assert!(selector_matches("unused-prefix", "unused-prefix"));
	}
}
