use super::{Field, infer_value, parse_field};
use anyhow::{Context, Result};
use clap::Args;
use melawi_core::json::{JsonObject, JsonValue, ToJson};
use std::io::{self, Write};

#[derive(Args, Debug)]
#[command(disable_version_flag = true)]
pub struct Subcommand {
	/// Fields of the object, later keys replace earlier ones
	#[arg(value_name = "KEY=VALUE", value_parser = parse_field)]
	fields: Vec<Field>,

	/// Keep every value as a JSON string instead of guessing its type
	#[arg(long, short)]
	strings: bool,

	/// Print over several lines
	#[arg(long, short)]
	pretty: bool,

	/// Line width for --pretty
	#[arg(long, default_value_t = 80, requires = "pretty")]
	width: usize,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	let object = build_object(arguments);
	log::debug!("built object with {} keys", object.len());

	let mut stdout = io::stdout().lock();
	if arguments.pretty {
		writeln!(stdout, "{}", object.stringify_pretty_multi_line(arguments.width, 0))
			.context("failed to write to stdout")?;
	} else {
		object.write_json_to(&mut stdout)?;
		writeln!(stdout).context("failed to write to stdout")?;
	}
	Ok(())
}

fn build_object(arguments: &Subcommand) -> JsonObject {
	arguments
		.fields
		.iter()
		.map(|field| {
			let value = if arguments.strings {
				JsonValue::from(&field.value)
			} else {
				infer_value(&field.value)
			};
			(field.key.clone(), value)
		})
		.collect()
}
