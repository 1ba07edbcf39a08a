#![allow(missing_docs)]

mod common;

use std::process::{Command, Output};

use common::{MessageBuilder, write_fixture};
use msgdoc::msg::TypeCode;
use serde_json::Value;

fn fixture() -> std::path::PathBuf {
	let bytes = MessageBuilder::new(0x5F414254)
		.strings("greeting", &["hello"])
		.fixed("accent", TypeCode::RGB_COLOR, vec![vec![255, 0, 128, 255]])
		.flatten();
	write_fixture("cli.msg", &bytes)
}

fn run_msgdoc(args: &[&str]) -> Output {
	Command::new(env!("CARGO_BIN_EXE_msgdoc"))
		.args(args)
		.output()
		.expect("command executes")
}

fn run_json(args: &[&str]) -> Value {
	let output = run_msgdoc(args);
	assert!(
		output.status.success(),
		"msgdoc command failed with status={}: {}",
		output.status,
		String::from_utf8_lossy(&output.stderr)
	);
	serde_json::from_slice(&output.stdout).expect("stdout should be valid json")
}

#[test]
fn info_json_reports_header_fields() {
	let path = fixture();
	let json = run_json(&["info", path.to_str().expect("utf8 path"), "--json"]);

	assert_eq!(json["format"], "haiku");
	assert_eq!(json["what"], "_ABT");
	assert_eq!(json["field_count"], 2);
	assert!(json["flattened_size"].as_u64().is_some_and(|size| size > 68));
}

#[test]
fn list_json_reports_field_table() {
	let path = fixture();
	let json = run_json(&["list", path.to_str().expect("utf8 path"), "--json"]);

	let fields = json["fields"].as_array().expect("fields array");
	assert_eq!(fields.len(), 2);
	assert_eq!(fields[0]["index"], 0);
	assert_eq!(fields[0]["name"], "greeting");
	assert_eq!(fields[0]["type_name"], "B_STRING_TYPE");
	assert_eq!(fields[0]["count"], 1);
	assert_eq!(fields[1]["type_name"], "B_RGB_COLOR_TYPE");
}

#[test]
fn show_json_reports_rendered_values() {
	let path = fixture();
	let json = run_json(&["show", path.to_str().expect("utf8 path"), "1", "--json"]);

	assert_eq!(json["name"], "accent");
	assert_eq!(json["type_name"], "B_RGB_COLOR_TYPE");
	assert_eq!(json["values"], serde_json::json!(["255, 0, 128, 255"]));
}

#[test]
fn missing_file_fails_with_error_line() {
	let output = run_msgdoc(&["list", "/nonexistent/msgdoc-cli.msg"]);
	assert!(!output.status.success());
	assert!(String::from_utf8_lossy(&output.stderr).starts_with("error:"));
}

#[test]
fn out_of_range_index_fails_with_error_line() {
	let path = fixture();
	let output = run_msgdoc(&["show", path.to_str().expect("utf8 path"), "9"]);
	assert!(!output.status.success());
	assert!(String::from_utf8_lossy(&output.stderr).contains("out of range"));
}
