#![allow(unused)]

use assert_cmd::{Command, cargo};

#[cfg(windows)]
pub const BINARY_NAME: &str = "melawi.exe";
#[cfg(not(windows))]
pub const BINARY_NAME: &str = "melawi";

/// Helper to create a Command for the melawi binary.
pub fn melawi_cmd() -> Command {
	Command::new(cargo::cargo_bin!())
}

/// Run melawi with `args` and return its stdout, asserting success.
pub fn melawi_stdout(args: &[&str]) -> String {
	let output = melawi_cmd().args(args).assert().success().get_output().stdout.clone();
	String::from_utf8(output).unwrap()
}
