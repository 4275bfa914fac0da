mod tools;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{ErrorLevel, Verbosity};

#[derive(Parser, Debug)]
#[command(
	author,
	version,
	about,
	long_about = None,
	propagate_version = true,
	disable_help_subcommand = true,
)]
struct Cli {
	#[command(subcommand)]
	command: Commands,

	#[command(flatten)]
	verbose: Verbosity<ErrorLevel>,
}

#[derive(Subcommand, Debug)]
enum Commands {
	/// Escape text for use inside a JSON string literal
	Escape(tools::escape::Subcommand),

	/// Build a JSON object from KEY=VALUE pairs
	Object(tools::object::Subcommand),

	#[clap(alias = "gen")]
	/// Stream KEY=VALUE pairs through the incremental JSON generator
	Generate(tools::generate::Subcommand),

	/// Build an XML document from KEY=VALUE pairs
	Xml(tools::xml::Subcommand),
}

fn main() -> Result<()> {
	let cli = Cli::parse();

	env_logger::Builder::new()
		.filter_level(cli.verbose.log_level_filter())
		.format_timestamp(None)
		.init();

	run(cli)
}

fn run(cli: Cli) -> Result<()> {
	match &cli.command {
		Commands::Escape(arguments) => tools::escape::run(arguments),
		Commands::Object(arguments) => tools::object::run(arguments),
		Commands::Generate(arguments) => tools::generate::run(arguments),
		Commands::Xml(arguments) => tools::xml::run(arguments),
	}
}

#[cfg(test)]
mod tests {
	use crate::{Cli, run};
	use anyhow::Result;
	use clap::Parser;

	pub fn run_command(arg_vec: Vec<&str>) -> Result<String> {
		let cli = Cli::try_parse_from(arg_vec)?;
		let msg = format!("{cli:?}");
		run(cli)?;
		Ok(msg)
	}

	#[test]
	fn help() {
		let err = run_command(vec!["melawi"]).unwrap_err().to_string();
		assert!(err.starts_with("Typed JSON values, escaping serialization and incremental JSON and XML generation."));
		assert!(err.contains("\nUsage: melawi [OPTIONS] <COMMAND>"));
	}

	#[test]
	fn version() {
		let err = run_command(vec!["melawi", "-V"]).unwrap_err().to_string();
		assert!(err.starts_with("melawi "));
	}

	#[test]
	fn xml_requires_root() {
		let err = run_command(vec!["melawi", "xml"]).unwrap_err().to_string();
		assert!(err.contains("<ROOT>"));
	}

	#[test]
	fn generate_alias() {
		let msg = run_command(vec!["melawi", "gen", "-q", "a=1"]).unwrap();
		assert!(msg.contains("Generate("));
	}
}
