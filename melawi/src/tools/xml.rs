use super::{Field, parse_field};
use anyhow::Result;
use clap::Args;
use melawi_core::xml::XmlGenerator;

#[derive(Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// Name of the root element
	#[arg(required = true)]
	root: String,

	/// Child elements in order
	#[arg(value_name = "KEY=VALUE", value_parser = parse_field)]
	fields: Vec<Field>,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	println!("{}", render(arguments));
	Ok(())
}

fn render(arguments: &Subcommand) -> String {
	let mut xml = XmlGenerator::new();
	xml.start_element(&arguments.root);
	for Field { key, value } in &arguments.fields {
		xml.add_field(key, value);
	}
	xml.end_element(&arguments.root);
	xml.into_string()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::tests::run_command;

	#[test]
	fn document() {
		let arguments = Subcommand {
			root: String::from("person"),
			fields: vec![parse_field("name=Bob").unwrap(), parse_field("note=a<b").unwrap()],
		};
		assert_eq!(
			render(&arguments),
			r#"<?xml version="1.0" encoding="UTF-8"?><person><name>Bob</name><note>a&lt;b</note></person>"#
		);
	}

	#[test]
	fn command_line() {
		run_command(vec!["melawi", "xml", "-q", "root", "a=1"]).unwrap();
	}
}
