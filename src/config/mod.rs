//! Configuration loading and parsing for lintfix.
//!
//! This module handles:
//! - TOML config file parsing
//! - Directory cascade discovery
//! - Config merging

pub mod cascade;
pub mod parser;
pub mod template;
pub mod types;

pub use cascade::{
	CONFIG_FILE_NAME, discover_configs, discover_configs_lenient, load_merged_config,
	merge_configs, user_config_path,
};
pub use parser::{parse_config_file, parse_config_str};
pub use template::generate_init_template;
pub use types::{Config, ExtraRule, ExtraRuleWithSource, LoadedConfig, MergedConfig};
