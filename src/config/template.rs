use crate::rules::catalog::DEFAULT_NULLABLE_IDENTIFIERS;

/// Generate the `.lintfix.toml` written by `lintfix --init`.
pub fn generate_init_template() -> String {
	let identifiers = DEFAULT_NULLABLE_IDENTIFIERS
		.iter()
		.map(|ident| format!("\"{ident}\""))
		.collect::<Vec<_>>()
		.join(", ");

	format!(
		r#"# lintfix configuration
# Stop looking for .lintfix.toml in parent directories.
root = true

# Identifiers whose `!ident` is rewritten to `ident == null`.
nullable-identifiers = [{identifiers}]

# Built-in rules to skip, e.g. "console-log-to-warn" or "nullable-check".
disabled-rules = []

# Extra rules run after the built-in ones, in file order.
# [[rules]]
# id = "logger-warn"
# pattern = 'console\.warn\('
# replacement = "logger.warn("
"#
	)
}
