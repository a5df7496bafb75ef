use std::path::PathBuf;

/// Library-level structured errors for lintfix.
///
/// Use `thiserror` for structured errors that library consumers can match on.
/// The CLI binary wraps these with `anyhow` for rich context chains.
#[derive(Debug, thiserror::Error)]
pub enum LintfixError {
	#[error("Failed to read file: {}", path.display())]
	FileRead {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("File is not valid UTF-8: {}", path.display())]
	FileDecode {
		path: PathBuf,
		#[source]
		source: std::string::FromUtf8Error,
	},

	#[error("Failed to write file: {}", path.display())]
	FileWrite {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to read config file: {}", path.display())]
	ConfigReadError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to parse config file: {}", path.display())]
	ConfigParseError {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},

	#[error("Invalid regex pattern in rule {rule}: {pattern}")]
	InvalidRegex {
		rule: String,
		pattern: String,
		#[source]
		source: regex::Error,
	},

	#[error("Unknown rule id: {id}")]
	UnknownRule { id: String },

	#[error("Rule id {id} is reserved for a built-in rule")]
	ReservedRuleId { id: String },

	#[error("Empty identifier in {field}")]
	EmptyIdentifier { field: String },

	#[error("Failed to resolve home directory")]
	HomeDirectoryNotFound,
}

impl LintfixError {
	/// One-line message including the underlying cause, for per-file reports.
	pub fn report_message(&self) -> String {
		match std::error::Error::source(self) {
			Some(source) => format!("{self}: {source}"),
			None => self.to_string(),
		}
	}
}

/// Result type alias using LintfixError.
pub type Result<T> = std::result::Result<T, LintfixError>;
