//! File fixing for lintfix.
//!
//! This module handles:
//! - Reading a file, running the pipeline, and writing back on change
//! - Containing failures to the file that caused them
//! - Rendering the per-file report line

use crate::error::{LintfixError, Result};
use crate::rules::Pipeline;
use std::fmt;
use std::path::{Path, PathBuf};

/// Whether changed files are written or only reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FixMode {
	#[default]
	Write,
	DryRun,
}

/// What happened to one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
	Unchanged,
	Fixed,
	WouldFix,
}

/// Result of processing one file, kept with its path.
#[derive(Debug)]
pub struct FileReport {
	pub path: PathBuf,
	pub result: Result<FileOutcome>,
}

impl FileReport {
	/// Whether processing this file failed.
	pub fn is_error(&self) -> bool {
		self.result.is_err()
	}
}

impl fmt::Display for FileReport {
	/// Unchanged files render as an empty string; callers skip them.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let path = self.path.display();
		match self.result {
			Ok(FileOutcome::Unchanged) => Ok(()),
			Ok(FileOutcome::Fixed) => write!(f, "Fixed: {path}"),
			Ok(FileOutcome::WouldFix) => write!(f, "Would fix: {path}"),
			Err(ref e) => write!(f, "Error fixing {path}: {}", e.report_message()),
		}
	}
}

/// Read a file as UTF-8 text.
pub fn read_document(path: &Path) -> Result<String> {
	let bytes = std::fs::read(path).map_err(|source| LintfixError::FileRead {
		path: path.to_path_buf(),
		source,
	})?;

	String::from_utf8(bytes).map_err(|source| LintfixError::FileDecode {
		path: path.to_path_buf(),
		source,
	})
}

/// Run the pipeline over one file and write it back if the text changed.
pub fn fix_file(path: &Path, pipeline: &Pipeline, mode: FixMode) -> Result<FileOutcome> {
	let original = read_document(path)?;
	let fixed = pipeline.apply(&original);

	if fixed == original {
		tracing::debug!(path = %path.display(), "unchanged");
		return Ok(FileOutcome::Unchanged);
	}

	if mode == FixMode::DryRun {
		return Ok(FileOutcome::WouldFix);
	}

	std::fs::write(path, fixed).map_err(|source| LintfixError::FileWrite {
		path: path.to_path_buf(),
		source,
	})?;

	Ok(FileOutcome::Fixed)
}

/// Fix files one at a time, in order. A failing file never stops the run.
pub fn fix_files<P: AsRef<Path>>(paths: &[P], pipeline: &Pipeline, mode: FixMode) -> Vec<FileReport> {
	paths
		.iter()
		.map(|path| {
			let path = path.as_ref();
			let result = fix_file(path, pipeline, mode);
			if let Err(ref e) = result {
				tracing::warn!(path = %path.display(), error = %e, "failed to fix file");
			}
			FileReport {
				path: path.to_path_buf(),
				result,
			}
		})
		.collect()
}
