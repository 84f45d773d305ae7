use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use shade_cli::config::parse_rules_file;
use shade_cli::rules::{WildcardMatcher, compile_matchers, rewrite_first};

#[derive(Parser)]
#[command(name = "shade")]
#[command(
	author,
	version,
	about = "Rewrite package and class names with wildcard rename rules"
)]
#[command(arg_required_else_help = true)]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Check a rules file for errors without rewriting anything
	Validate {
		/// Path to the rules TOML file
		rules: PathBuf,
	},

	/// Report which rule first matches each name
	Check {
		/// Path to the rules TOML file
		rules: PathBuf,

		/// Fully qualified names in internal form (e.g. com/example/Foo)
		names: Vec<String>,
	},

	/// Rewrite names through the first matching rule
	Apply {
		/// Path to the rules TOML file
		rules: PathBuf,

		/// Fully qualified names in internal form (e.g. com/example/Foo)
		names: Vec<String>,
	},
}

fn main() -> ExitCode {
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

	match cli.command {
		Commands::Validate { rules } => handle_validate(&rules),
		Commands::Check { rules, names } => handle_check(&rules, &names),
		Commands::Apply { rules, names } => handle_apply(&rules, &names),
	}
}

/// Load a rules file and compile every rule, in declaration order.
fn load_matchers(rules_path: &Path) -> Result<Vec<WildcardMatcher>> {
	let rule_set = parse_rules_file(rules_path)
		.with_context(|| format!("Failed to load rules from {}", rules_path.display()))?;

	compile_matchers(&rule_set.rules)
		.with_context(|| format!("Failed to compile rules from {}", rules_path.display()))
}

fn handle_validate(rules_path: &Path) -> Result<ExitCode> {
	match load_matchers(rules_path) {
		Ok(matchers) => {
			if matchers.is_empty() {
				println!("{}: no rules defined", rules_path.display());
			} else {
				println!("{}: {} rule(s) valid", rules_path.display(), matchers.len());
			}
			Ok(ExitCode::SUCCESS)
		}
		Err(e) => {
			eprintln!("Rules error: {e:#}");
			Ok(ExitCode::FAILURE)
		}
	}
}

fn handle_check(rules_path: &Path, names: &[String]) -> Result<ExitCode> {
	let matchers = load_matchers(rules_path)?;

	for name in names {
		match matchers.iter().position(|m| m.matches(name)) {
			Some(index) => println!("{}: rule {}", name, index + 1),
			None => println!("{name}: no match"),
		}
	}

	Ok(ExitCode::SUCCESS)
}

fn handle_apply(rules_path: &Path, names: &[String]) -> Result<ExitCode> {
	let matchers = load_matchers(rules_path)?;

	for name in names {
		// Names no rule claims pass through unchanged
		match rewrite_first(&matchers, name) {
			Some(rewritten) => println!("{rewritten}"),
			None => println!("{name}"),
		}
	}

	Ok(ExitCode::SUCCESS)
}
