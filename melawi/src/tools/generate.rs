use super::{Field, infer_value, parse_field};
use anyhow::{Result, bail};
use clap::Args;
use melawi_core::json::{GeneratorConfig, JsonGenerator, JsonValue};

#[derive(Args, Debug)]
#[command(disable_version_flag = true)]
pub struct Subcommand {
	/// Fields written in order, duplicates included
	#[arg(value_name = "KEY=VALUE", value_parser = parse_field)]
	fields: Vec<Field>,

	/// Keep every value as a JSON string instead of guessing its type
	#[arg(long, short)]
	strings: bool,

	/// Write names and strings verbatim and skip structure checks
	#[arg(long)]
	legacy: bool,

	/// Skip structure checks
	#[arg(long)]
	no_validate: bool,

	/// Write names and strings without escaping
	#[arg(long)]
	no_escape: bool,

	/// Keep whitespace around names and strings
	#[arg(long)]
	no_trim: bool,
}

impl Subcommand {
	fn config(&self) -> GeneratorConfig {
		let config = if self.legacy {
			GeneratorConfig::legacy()
		} else {
			GeneratorConfig::default()
		};
		GeneratorConfig {
			escape_strings: config.escape_strings && !self.no_escape,
			validate_structure: config.validate_structure && !self.no_validate,
			trim_whitespace: config.trim_whitespace && !self.no_trim,
		}
	}
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	println!("{}", generate(arguments)?);
	Ok(())
}

fn generate(arguments: &Subcommand) -> Result<String> {
	let config = arguments.config();
	log::debug!("generating with {config:?}");

	let mut generator = JsonGenerator::with_config(config);
	generator.start_object();
	for Field { key, value } in &arguments.fields {
		if arguments.strings {
			generator.write_string(key, value);
			continue;
		}
		match infer_value(value) {
			JsonValue::Null => generator.write_null(key),
			JsonValue::Boolean(flag) => generator.write_boolean(key, flag),
			JsonValue::Number(number) => generator.write_number(key, number),
			JsonValue::String(text) => generator.write_string(key, &text),
			other => bail!("cannot generate a {} field", other.type_as_str()),
		};
	}
	generator.end_object()?;
	generator.finish()
}
