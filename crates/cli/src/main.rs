//! Engine option inspector.
//!
//! Registers the engine's built-in options, applies an optional preset file and
//! `--set` overrides, then prints the UCI option listing (or the current values) to
//! stdout. Logs go to stderr.

use std::fmt::Write;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, bail};
use clap::Parser;
use sugar_options::preset::Preset;
use sugar_options::{EngineHooks, OptionsMap, builtins};
use tracing::{info, warn};

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "sugar-options")]
#[command(about = "List engine options and preview settings")]
struct Args {
	/// TOML preset with an `[options]` table
	#[arg(short, long, value_name = "PATH")]
	preset: Option<PathBuf>,

	/// Assign an option, e.g. `--set "Hash=256"`; may repeat
	#[arg(short, long = "set", value_name = "NAME=VALUE")]
	set: Vec<String>,

	/// Print `name = value` pairs instead of the protocol listing
	#[arg(long)]
	current: bool,

	/// Exit with an error if any assignment is refused
	#[arg(long)]
	strict: bool,

	/// Verbose logging
	#[arg(short, long)]
	verbose: bool,
}

/// Hooks that log what the engine would do.
struct LoggingHooks;

impl EngineHooks for LoggingHooks {
	fn clear_search(&self) {
		info!("search state cleared");
	}

	fn reload_eval(&self) {
		info!("evaluation reloaded");
	}

	fn resize_table(&self, megabytes: usize) {
		info!(megabytes, "transposition table resized");
	}

	fn set_large_pages(&self, enabled: bool) {
		info!(enabled, "large pages toggled");
	}

	fn reconfigure_workers(&self, threads: usize) {
		info!(threads, "worker pool reconfigured");
	}

	fn set_tablebase_path(&self, path: &str) {
		info!(path, "tablebases reloaded");
	}

	fn set_log_target(&self, path: &str) {
		info!(path, "debug log redirected");
	}
}

fn main() -> anyhow::Result<()> {
	let args = Args::parse();
	setup_tracing(args.verbose);

	let mut options = OptionsMap::new();
	builtins::register_defaults(&mut options, Arc::new(LoggingHooks));

	let mut refused = 0usize;

	if let Some(path) = &args.preset {
		let preset = Preset::load(path).with_context(|| format!("loading preset {}", path.display()))?;
		let report = preset.apply(&mut options);
		info!(applied = report.applied.len(), refused = report.errors.len(), "preset applied");
		for err in &report.errors {
			warn!("{err}");
		}
		refused += report.errors.len();
	}

	for assignment in &args.set {
		let (name, value) = split_assignment(assignment)?;
		if let Err(err) = options.set(name, value) {
			warn!("{err}");
			refused += 1;
		}
	}

	if args.current {
		print!("{}", current_values(&options));
	} else {
		println!("{}", options.to_string().trim_start_matches('\n'));
	}

	if args.strict && refused > 0 {
		bail!("{refused} option assignment(s) refused");
	}
	Ok(())
}

/// Splits `NAME=VALUE` at the first `=`. Names may contain spaces; values may be empty.
fn split_assignment(assignment: &str) -> anyhow::Result<(&str, &str)> {
	let Some((name, value)) = assignment.split_once('=') else {
		bail!("expected NAME=VALUE, got '{assignment}'");
	};
	let name = name.trim();
	if name.is_empty() {
		bail!("missing option name in '{assignment}'");
	}
	Ok((name, value.trim()))
}

fn current_values(options: &OptionsMap) -> String {
	let mut out = String::new();
	for (name, option) in options {
		if let Some(value) = option.current_text() {
			let _ = writeln!(out, "{name} = {value}");
		}
	}
	out
}

fn setup_tracing(verbose: bool) {
	use tracing_subscriber::EnvFilter;

	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
		if verbose {
			EnvFilter::new("sugar_options=debug,sugar_cli=debug,info")
		} else {
			EnvFilter::new("warn,sugar_cli=info")
		}
	});

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(verbose)
		.init();
}
