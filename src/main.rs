use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lintfix_cli::config::{
	CONFIG_FILE_NAME, discover_configs, discover_configs_lenient, generate_init_template,
	merge_configs, user_config_path,
};
use lintfix_cli::fixer::{FileOutcome, FixMode, fix_files};
use lintfix_cli::rules::Pipeline;

#[derive(Parser)]
#[command(name = "lintfix")]
#[command(
	author,
	version,
	about = "CLI tool for mechanically repairing lint violations with ordered regex rewrites"
)]
#[command(arg_required_else_help = true)]
#[command(
	after_help = "Paths named like a subcommand or starting with '-' go after '--', e.g. `lintfix -- config -odd.ts`."
)]
struct Cli {
	#[command(subcommand)]
	command: Option<Commands>,

	/// Report files that would change without writing them
	#[arg(long)]
	dry_run: bool,

	/// Ignore .lintfix.toml files and use the built-in rules only
	#[arg(long)]
	no_config: bool,

	/// Print the effective rules in application order
	#[arg(long, conflicts_with = "files")]
	list_rules: bool,

	/// Create a template .lintfix.toml in the current directory
	#[arg(long, conflicts_with = "files")]
	init: bool,

	/// Overwrite existing .lintfix.toml when using --init
	#[arg(long, requires = "init")]
	force: bool,

	/// Files to fix, processed in order
	#[arg(value_name = "FILE")]
	files: Vec<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
	/// Configuration management commands
	Config {
		#[command(subcommand)]
		action: ConfigAction,
	},
}

#[derive(Subcommand)]
enum ConfigAction {
	/// Display discovered configuration files in cascade order
	Show,
	/// Check all config files and rules for errors without fixing anything
	Validate,
}

/// Initialize tracing on stderr so stdout carries only the file report.
fn init_tracing() {
	let filter = tracing_subscriber::EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("error"));

	tracing_subscriber::registry()
		.with(filter)
		.with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
		.init();
}

fn main() -> ExitCode {
	init_tracing();

	match run() {
		Ok(code) => code,
		Err(e) => {
			eprintln!("error: {e:?}");
			ExitCode::FAILURE
		}
	}
}

fn run() -> Result<ExitCode> {
	let cli = Cli::parse();

	if cli.init {
		return handle_init(cli.force);
	}

	if let Some(command) = cli.command {
		return match command {
			Commands::Config { action } => match action {
				ConfigAction::Show => handle_config_show(),
				ConfigAction::Validate => handle_config_validate(),
			},
		};
	}

	let pipeline = load_pipeline(cli.no_config)?;

	if cli.list_rules {
		return handle_list_rules(&pipeline);
	}

	if cli.files.is_empty() {
		anyhow::bail!("No files given. Pass one or more paths to fix.");
	}

	let mode = if cli.dry_run {
		FixMode::DryRun
	} else {
		FixMode::Write
	};
	handle_fix(&cli.files, &pipeline, mode)
}

/// Build the pipeline for a fixing run.
///
/// Configuration problems never stop a run: broken config files are skipped
/// with a warning, and if the remaining configs still don't compile, the
/// built-in rules are used.
fn load_pipeline(no_config: bool) -> Result<Pipeline> {
	if no_config {
		return Pipeline::builtin().context("Failed to compile built-in rules");
	}

	let cwd = match std::env::current_dir() {
		Ok(cwd) => cwd,
		Err(e) => {
			eprintln!("Warning: cannot read current directory ({e}), using built-in rules");
			return Pipeline::builtin().context("Failed to compile built-in rules");
		}
	};

	let (configs, errors) = discover_configs_lenient(&cwd);
	for e in &errors {
		eprintln!("Warning: skipping config: {}", e.report_message());
	}

	match Pipeline::from_config(&merge_configs(&configs)) {
		Ok(pipeline) => Ok(pipeline),
		Err(e) => {
			eprintln!(
				"Warning: ignoring configuration ({}), using built-in rules",
				e.report_message()
			);
			Pipeline::builtin().context("Failed to compile built-in rules")
		}
	}
}

fn handle_fix(files: &[PathBuf], pipeline: &Pipeline, mode: FixMode) -> Result<ExitCode> {
	// Per-file failures are reported, never escalated to the exit status.
	for report in fix_files(files, pipeline, mode) {
		if !matches!(report.result, Ok(FileOutcome::Unchanged)) {
			println!("{report}");
		}
	}

	Ok(ExitCode::SUCCESS)
}

fn handle_list_rules(pipeline: &Pipeline) -> Result<ExitCode> {
	for (i, rule) in pipeline.rules().iter().enumerate() {
		println!("{}. {}", i + 1, rule.id);
		println!("    pattern: {}", rule.pattern.as_str());
		println!("    replacement: {}", rule.replacement);
		if let Some(ref source) = rule.source {
			println!("    source: {}", source.display());
		}
	}

	Ok(ExitCode::SUCCESS)
}

fn handle_init(force: bool) -> Result<ExitCode> {
	let config_path = PathBuf::from(CONFIG_FILE_NAME);

	if config_path.exists() && !force {
		anyhow::bail!("{CONFIG_FILE_NAME} already exists. Use --force to overwrite.");
	}

	std::fs::write(&config_path, generate_init_template())
		.with_context(|| format!("Failed to write {}", config_path.display()))?;

	println!("Created {CONFIG_FILE_NAME}");
	Ok(ExitCode::SUCCESS)
}

fn handle_config_show() -> Result<ExitCode> {
	let cwd = std::env::current_dir().context("Failed to get current directory")?;
	let configs = discover_configs(&cwd).context("Failed to discover config files")?;

	if configs.is_empty() {
		println!("No configuration files found.");
	} else {
		println!("Configuration files (in cascade order):\n");
	}

	for loaded in &configs {
		println!("# Source: {}", loaded.path.display());
		println!("# root: {}", loaded.config.root);
		if let Some(ref idents) = loaded.config.nullable_identifiers {
			println!("# nullable-identifiers: {}", idents.join(", "));
		}
		if !loaded.config.disabled_rules.is_empty() {
			println!(
				"# disabled-rules: {}",
				loaded.config.disabled_rules.join(", ")
			);
		}
		println!("# rules: {}", loaded.config.rules.len());
		println!();

		for rule in &loaded.config.rules {
			println!("  Rule {}:", rule.id);
			println!("    pattern: {}", rule.pattern);
			println!("    replacement: {}", rule.replacement);
			println!();
		}
	}

	if let Ok(user_path) = user_config_path() {
		println!("User config path: {}", user_path.display());
		if user_path.exists() {
			println!("  (exists)");
		} else {
			println!("  (not found)");
		}
	}

	Ok(ExitCode::SUCCESS)
}

fn handle_config_validate() -> Result<ExitCode> {
	let cwd = std::env::current_dir().context("Failed to get current directory")?;

	let checked = discover_configs(&cwd).and_then(|configs| {
		Pipeline::from_config(&merge_configs(&configs)).map(|pipeline| (configs, pipeline))
	});

	match checked {
		Ok((configs, pipeline)) => {
			if configs.is_empty() {
				println!("No configuration files found.");
			} else {
				println!("All configuration files are valid:");
				for loaded in &configs {
					println!(
						"  {} ({} rules)",
						loaded.path.display(),
						loaded.config.rules.len()
					);
				}
			}
			println!("{} rules active", pipeline.rules().len());
			Ok(ExitCode::SUCCESS)
		}
		Err(e) => {
			eprintln!("Configuration error: {}", e.report_message());
			Ok(ExitCode::FAILURE)
		}
	}
}
