//! Lintfix - CLI tool for mechanically repairing lint violations.
//!
//! This library provides the core functionality for lintfix, including:
//! - The ordered regex rule catalog and the pipeline that applies it
//! - Configuration file parsing and cascade discovery
//! - Per-file fixing with failures contained to the file that caused them
//!
//! # Example
//!
//! ```no_run
//! use lintfix_cli::config::load_merged_config;
//! use lintfix_cli::fixer::{FixMode, fix_files};
//! use lintfix_cli::rules::Pipeline;
//!
//! let cwd = std::env::current_dir().unwrap();
//! let config = load_merged_config(&cwd).unwrap();
//! let pipeline = Pipeline::from_config(&config).unwrap();
//!
//! for report in fix_files(&["src/app.ts"], &pipeline, FixMode::Write) {
//!     println!("{report}");
//! }
//! ```

pub mod config;
pub mod error;
pub mod fixer;
pub mod rules;

pub use error::{LintfixError, Result};
