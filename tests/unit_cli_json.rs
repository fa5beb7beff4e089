#![allow(missing_docs)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use serde_json::{Value, json};

#[test]
fn info_json_reports_envelope_and_root() {
	let json = run_json(&["info", &fixture("bigtest.nbt"), "--json"]);

	assert_eq!(json["compression"], "gzip");
	assert_eq!(json["decoded_len"], 1544);
	assert_eq!(json["root_name"], "Level");
	assert_eq!(json["member_count"], 11);
	assert_eq!(json["tag_counts"]["TAG_Long"], 8);
	assert_eq!(json["tag_counts"]["TAG_Compound"], 5);
}

#[test]
fn print_json_exports_whole_tree() {
	let json = run_json(&["print", &fixture("bigtest_raw.nbt"), "--json"]);

	assert_eq!(json["nested compound test"]["egg"]["name"], "Eggbert");
	assert_eq!(json["listTest (long)"], json!([11, 12, 13, 14, 15]));
	assert!(json["byteArrayTest (the first 1000 values of (n*n*255+n*7)%100, starting with n=0 (0, 62, 34, 16, 8, ...))"]
		.as_array()
		.is_some_and(|items| items.len() == 1000));
}

#[test]
fn get_json_resolves_list_element() {
	let json = run_json(&["get", &fixture("bigtest.nbt"), "\"listTest (long)\"[3]", "--json"]);
	assert_eq!(json, json!(14));
}

#[test]
fn print_text_uses_tag_layout() {
	let output = run(&["print", &fixture("bigtest.nbt"), "--max-array", "2"]);
	assert!(output.status.success(), "command should succeed");

	let stdout = String::from_utf8_lossy(&output.stdout);
	assert!(stdout.starts_with("TAG_Compound('Level'): 11 entries\n"));
	assert!(stdout.contains("TAG_String('name'): 'Hampus'"));
	assert!(stdout.contains("TAG_Long(None): 12\n"));
	assert!(stdout.contains("... 3 more"));
}

#[test]
fn get_missing_member_fails_with_message() {
	let output = run(&["get", &fixture("bigtest.nbt"), "nested compound test.spam"]);
	assert_eq!(output.status.code(), Some(1));
	assert!(String::from_utf8_lossy(&output.stderr).contains("missing member nested compound test.spam"));
}

fn run(args: &[&str]) -> Output {
	Command::new(env!("CARGO_BIN_EXE_nbtdoc")).args(args).output().expect("command executes")
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

fn fixture(name: &str) -> String {
	fixture_path(name).display().to_string()
}

fn fixture_path(name: &str) -> PathBuf {
	Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures").join(name)
}
