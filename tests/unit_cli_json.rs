#![allow(missing_docs)]

use std::io::Write;
use std::process::{Command, Output, Stdio};

use ctorschema_testkit::{fixture_json, fixture_path};
use serde_json::{Value, json};

#[test]
fn encode_json_output_is_a_schema() {
	let json = run_json(&["encode", &fixture_arg("combined.json")]);

	assert_eq!(json["ctor"], "Object");
	let fields = json["args"][0].as_object().expect("object schema carries a field map");
	assert_eq!(fields["flag"], json!({ "ctor": "Boolean", "args": [true] }));
	assert_eq!(fields["empty"], Value::Null);
	assert_eq!(fields["escapeMe"]["ctor"], "Object");
	assert_eq!(fields["escapeMe"]["args"][0]["ctor"], json!({ "ctor": "String", "args": ["String"] }));
}

#[test]
fn decode_json_output_restores_escaped_literal() {
	let json = run_json(&["decode", &fixture_arg("escaped_schema.json"), "--json"]);

	assert_eq!(json, json!({ "ctor": "String", "args": ["Escaped!"] }));
}

#[test]
fn decode_tree_output_prints_pattern() {
	let output = run(&["decode", &fixture_arg("regexp_schema.json")]);

	assert!(output.status.success(), "command should succeed");
	let stdout = String::from_utf8_lossy(&output.stdout);
	assert!(stdout.contains("kind: pattern"), "unexpected output: {stdout}");
	assert!(stdout.contains("/hello (\\w+)/i"), "unexpected output: {stdout}");
}

#[test]
fn decode_unknown_constructor_exits_with_error() {
	let output = run(&["decode", &fixture_arg("unknown_ctor.json")]);

	assert!(!output.status.success(), "command should fail");
	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(stderr.contains("error: unknown constructor: DoesNotExist"), "unexpected stderr: {stderr}");
}

#[test]
fn check_reports_schema_shape() {
	let json = run_json(&["check", &fixture_arg("regexp_schema.json")]);
	assert_eq!(json, json!({ "is_schema": true, "ctor": "RegExp", "arity": 2 }));

	let json = run_json(&["check", &fixture_arg("combined.json")]);
	assert_eq!(json, json!({ "is_schema": false, "ctor": null, "arity": null }));
}

#[test]
fn roundtrip_reports_equal_value() {
	let json = run_json(&["roundtrip", &fixture_arg("combined.json")]);

	assert_eq!(json["equal"], true);
	assert_eq!(json["value"], fixture_json("combined.json"));
}

#[test]
fn encode_reads_stdin() {
	let mut child = Command::new(env!("CARGO_BIN_EXE_ctorschema"))
		.arg("encode")
		.stdin(Stdio::piped())
		.stdout(Stdio::piped())
		.stderr(Stdio::piped())
		.spawn()
		.expect("command spawns");
	child.stdin.take().expect("stdin is piped").write_all(b"[1, \"two\"]").expect("stdin accepts input");
	let output = child.wait_with_output().expect("command completes");

	assert!(output.status.success(), "command should succeed");
	let json: Value = serde_json::from_slice(&output.stdout).expect("stdout should be valid json");
	assert_eq!(
		json,
		json!({ "ctor": "Array", "args": [{ "ctor": "Number", "args": [1] }, { "ctor": "String", "args": ["two"] }] })
	);
}

fn run(args: &[&str]) -> Output {
	Command::new(env!("CARGO_BIN_EXE_ctorschema")).args(args).output().expect("command executes")
}

fn run_json(args: &[&str]) -> Value {
	let output = run(args);

	assert!(
		output.status.success(),
		"command failed with status={}: {}",
		output.status,
		String::from_utf8_lossy(&output.stderr)
	);
	serde_json::from_slice(&output.stdout).expect("stdout should be valid json")
}

fn fixture_arg(name: &str) -> String {
	fixture_path(name).display().to_string()
}
