use crate::config::parser::parse_config_file;
use crate::config::types::{ExtraRuleWithSource, LoadedConfig, MergedConfig};
use crate::error::{LintfixError, Result};
use std::path::{Path, PathBuf};

/// Name of the config file looked up in each directory.
pub const CONFIG_FILE_NAME: &str = ".lintfix.toml";

/// Discover and load all config files in the cascade.
///
/// The cascade order is:
/// 1. Start from `start_dir` and look for `.lintfix.toml`
/// 2. If found and `root = true`, skip to user config only
/// 3. Otherwise, continue up the directory tree
/// 4. Finally, check ~/.lintfix.toml
///
/// Returns configs in cascade order (most specific first), or the first
/// config that failed to load.
pub fn discover_configs(start_dir: &Path) -> Result<Vec<LoadedConfig>> {
	let (configs, errors) = discover_configs_lenient(start_dir);
	match errors.into_iter().next() {
		Some(e) => Err(e),
		None => Ok(configs),
	}
}

/// Same cascade as [`discover_configs`], but a config that fails to load is
/// skipped and returned alongside the configs that did load.
///
/// A skipped file cannot end the walk, since its `root` flag is unknown.
pub fn discover_configs_lenient(start_dir: &Path) -> (Vec<LoadedConfig>, Vec<LintfixError>) {
	let mut configs = Vec::new();
	let mut errors = Vec::new();
	let mut current_dir = start_dir.to_path_buf();

	loop {
		let config_path = current_dir.join(CONFIG_FILE_NAME);

		if config_path.exists() {
			match parse_config_file(&config_path) {
				Ok(config) => {
					tracing::debug!(path = %config_path.display(), "loaded config");

					let is_root = config.root;
					configs.push(LoadedConfig {
						config,
						path: config_path,
					});

					if is_root {
						break;
					}
				}
				Err(e) => errors.push(e),
			}
		}

		if let Some(parent) = current_dir.parent() {
			current_dir = parent.to_path_buf();
		} else {
			break;
		}
	}

	match load_user_config(&configs) {
		Ok(Some(user_config)) => configs.push(user_config),
		Ok(None) => {}
		Err(e) => errors.push(e),
	}

	(configs, errors)
}

/// Load the user's ~/.lintfix.toml if it exists and wasn't already found
/// during the directory walk. No home directory means no user config.
fn load_user_config(existing_configs: &[LoadedConfig]) -> Result<Option<LoadedConfig>> {
	let Some(home_dir) = dirs::home_dir() else {
		tracing::debug!("no home directory, skipping user config");
		return Ok(None);
	};
	let user_config_path = home_dir.join(CONFIG_FILE_NAME);

	if existing_configs
		.iter()
		.any(|loaded| loaded.path == user_config_path)
	{
		return Ok(None);
	}

	if user_config_path.exists() {
		let config = parse_config_file(&user_config_path)?;
		tracing::debug!(path = %user_config_path.display(), "loaded user config");
		Ok(Some(LoadedConfig {
			config,
			path: user_config_path,
		}))
	} else {
		Ok(None)
	}
}

/// Merge multiple configs into a single effective config.
///
/// `configs` is in cascade order (most specific first). The identifier list
/// comes from the most specific config that sets one, disabled rules are
/// unioned, and extra rules run outermost first so the nearest config has
/// the last word.
pub fn merge_configs(configs: &[LoadedConfig]) -> MergedConfig {
	let mut merged = MergedConfig::default();

	for loaded in configs {
		if merged.nullable_identifiers.is_none() {
			merged.nullable_identifiers = loaded.config.nullable_identifiers.clone();
		}

		for id in &loaded.config.disabled_rules {
			if !merged.disabled_rules.contains(id) {
				merged.disabled_rules.push(id.clone());
			}
		}
	}

	for loaded in configs.iter().rev() {
		for rule in &loaded.config.rules {
			merged.rules.push(ExtraRuleWithSource {
				rule: rule.clone(),
				source: loaded.path.clone(),
			});
		}
	}

	merged
}

/// Convenience function to discover, load, and merge configs from a directory.
pub fn load_merged_config(start_dir: &Path) -> Result<MergedConfig> {
	let configs = discover_configs(start_dir)?;
	Ok(merge_configs(&configs))
}

/// Get the path to the user's config file.
pub fn user_config_path() -> Result<PathBuf> {
	let home_dir = dirs::home_dir().ok_or(LintfixError::HomeDirectoryNotFound)?;
	Ok(home_dir.join(CONFIG_FILE_NAME))
}
