use anyhow::{Context, Result};
use clap::Args;
use melawi_core::json::escape_json_string;
use std::io::{self, BufRead, Write};

#[derive(Args, Debug)]
#[command(disable_version_flag = true)]
pub struct Subcommand {
	/// Text to escape, one output line per argument.
	/// Reads lines from stdin when no text is given.
	#[arg(verbatim_doc_comment)]
	texts: Vec<String>,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	let texts = if arguments.texts.is_empty() {
		log::debug!("reading text from stdin");
		io::stdin()
			.lock()
			.lines()
			.collect::<io::Result<Vec<String>>>()
			.context("failed to read stdin")?
	} else {
		arguments.texts.clone()
	};
	write_escaped(&texts, &mut io::stdout().lock())
}

fn write_escaped(texts: &[String], output: &mut impl Write) -> Result<()> {
	for text in texts {
		writeln!(output, "{}", escape_json_string(text)).context("failed to write to stdout")?;
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::tests::run_command;

	#[test]
	fn one_line_per_text() -> Result<()> {
		let mut output = Vec::new();
		write_escaped(&[String::from("a\"b"), String::from("tab\there/")], &mut output)?;
		assert_eq!(String::from_utf8(output)?, "a\\\"b\ntab\\there\\/\n");
		Ok(())
	}

	#[test]
	fn command_line() {
		run_command(vec!["melawi", "escape", "-q", "x"]).unwrap();
	}
}
