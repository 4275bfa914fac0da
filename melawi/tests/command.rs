mod test_utilities;
use predicates::str;
use pretty_assertions::assert_eq;
use rstest::rstest;
use test_utilities::{BINARY_NAME, melawi_cmd, melawi_stdout};

#[test]
fn command() {
	melawi_cmd()
		.assert()
		.failure()
		.code(2)
		.stdout(str::is_empty())
		.stderr(str::contains(format!("Usage: {BINARY_NAME} [OPTIONS] <COMMAND>")));
}

#[rstest]
#[case("xml", "[OPTIONS] <ROOT> [KEY=VALUE]...")]
fn subcommand_usage(#[case] sub_command: &str, #[case] usage: &str) {
	melawi_cmd()
		.args(sub_command.split(' '))
		.assert()
		.failure()
		.code(2)
		.stdout(str::is_empty())
		.stderr(str::contains(format!("Usage: {BINARY_NAME} {sub_command} {usage}")));
}

#[rstest]
#[case(&["escape", "say \"hi\"", "a/b"], "say \\\"hi\\\"\na\\/b\n")]
#[case(&["object", "name=Bob", "age=30"], "{\"name\":\"Bob\",\"age\":30}\n")]
#[case(&["object", "--strings", "age=30"], "{\"age\":\"30\"}\n")]
#[case(&["object"], "{}\n")]
#[case(&["generate", "name=Bob", "age=30"], "{\"name\":\"Bob\",\"age\":30}\n")]
#[case(&["generate", "--legacy", "q=a\"b"], "{\"q\":\"a\"b\"}\n")]
#[case(&["xml", "root", "k= v "], "<?xml version=\"1.0\" encoding=\"UTF-8\"?><root><k>v</k></root>\n")]
fn output(#[case] args: &[&str], #[case] expected: &str) {
	assert_eq!(melawi_stdout(args), expected);
}

#[test]
fn escape_reads_stdin() {
	melawi_cmd()
		.arg("escape")
		.write_stdin("tab\there\nquote\"\n")
		.assert()
		.success()
		.stdout("tab\\there\nquote\\\"\n");
}

#[test]
fn object_pretty() {
	assert_eq!(
		melawi_stdout(&["object", "--pretty", "--width", "10", "name=Bob", "tags=x"]),
		"{\n  \"name\": \"Bob\",\n  \"tags\": \"x\"\n}\n"
	);
}

#[test]
fn invalid_field_is_rejected() {
	melawi_cmd()
		.args(["object", "novalue"])
		.assert()
		.failure()
		.code(2)
		.stderr(str::contains("expected KEY=VALUE"));
}
