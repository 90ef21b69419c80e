#![allow(missing_docs)]

use std::path::Path;
use std::process::{Command, Output};

use classy_testkit::{fixture_path, read_json, scratch_fixture, scratch_path};

fn run_classy(args: &[&str]) -> Output {
	Command::new(env!("CARGO_BIN_EXE_classy"))
		.args(args)
		.env_remove("RUST_LOG")
		.output()
		.expect("classy command executes")
}

fn run_classy_ok(args: &[&str]) -> String {
	let output = run_classy(args);
	assert!(
		output.status.success(),
		"classy {args:?} failed with status={}: {}",
		output.status,
		String::from_utf8_lossy(&output.stderr)
	);
	String::from_utf8(output.stdout).expect("stdout is utf-8")
}

fn run_classy_json(args: &[&str]) -> serde_json::Value {
	serde_json::from_str(&run_classy_ok(args)).expect("stdout should be valid json")
}

fn run_classy_err(args: &[&str]) -> String {
	let output = run_classy(args);
	assert_eq!(output.status.code(), Some(1), "classy {args:?} should fail");
	String::from_utf8(output.stderr).expect("stderr is utf-8")
}

fn path_str(path: &Path) -> String {
	path.to_string_lossy().into_owned()
}

#[test]
fn mangle_prints_symbol() {
	assert_eq!(run_classy_ok(&["mangle", "void Foo::bar(int)"]), "_ZN3Foo3barEi\n");
	assert_eq!(run_classy_ok(&["mangle", "int baz()"]), "_Z3bazv\n");
}

#[test]
fn mangle_json_with_ctor_variant() {
	let json = run_classy_json(&["mangle", "ns::Foo::Foo(int)", "--ctor", "2", "--json"]);
	assert_eq!(json["signature"], "ns::Foo::Foo(int)");
	assert_eq!(json["symbol"], "_ZN2ns3FooC2Ei");
}

#[test]
fn mangle_reports_errors_on_stderr() {
	let stderr = run_classy_err(&["mangle", "f(int &&)"]);
	assert_eq!(stderr.trim_end(), "error: rvalue references are not supported");

	let stderr = run_classy_err(&["mangle", "Foo::~Foo()"]);
	assert_eq!(stderr.trim_end(), "error: no or invalid dtor type given");
}

#[test]
fn mangle_uses_project_typedefs() {
	let fixture = path_str(&fixture_path("sample_project.json"));
	assert_eq!(run_classy_ok(&["mangle", "f(u32, u32 *)", "--project", &fixture]), "_Z1fjPj\n");
}

#[test]
fn compose_applies_structor_policy() {
	let json = run_classy_json(&[
		"compose",
		"--owner",
		"ns::Foo",
		"--name",
		"Foo",
		"--args",
		"int",
		"--return-type",
		"int",
		"--ctor",
		"1",
		"--json",
	]);
	assert_eq!(json["signature"], "ns::Foo::Foo(int)");
	assert_eq!(json["symbol"], "_ZN2ns3FooC1Ei");
	assert_eq!(json["variant"], "complete");

	let json = run_classy_json(&["compose", "--owner", "ns::Foo", "--name", "~Foo", "--args", "int", "--dtor", "0", "--json"]);
	assert_eq!(json["signature"], "ns::Foo::~Foo()");
	assert_eq!(json["symbol"], "_ZN2ns3FooD0Ev");
	assert_eq!(json["variant"], "deleting");
}

#[test]
fn compose_rejects_names_with_whitespace() {
	let stderr = run_classy_err(&["compose", "--name", "do it"]);
	assert_eq!(stderr.trim_end(), "error: name \"do it\" is invalid");
}

#[test]
fn symbols_from_sample_project() {
	let fixture = path_str(&fixture_path("sample_project.json"));
	let json = run_classy_json(&["symbols", &fixture, "--json"]);

	let symbols = json["symbols"].as_array().expect("symbols array");
	assert_eq!(symbols.len(), 6);
	assert_eq!(symbols[0]["address"], "0x500");
	assert_eq!(symbols[0]["symbol"], "_Z5spawnRN4game6PlayerEj");
	assert_eq!(symbols[5]["symbol"], "_ZN4game6Player4healEjPKNS_6EntityE");
	assert_eq!(symbols[5]["owner"], "game::Player");
	assert_eq!(symbols[5]["kind"], "virtual");
}

#[test]
fn header_for_one_class() {
	let fixture = path_str(&fixture_path("sample_project.json"));
	let text = run_classy_ok(&["header", &fixture, "--class", "game::Player"]);
	assert_eq!(
		text,
		"class game::Player : public game::Entity\n{\npublic:\n    virtual ~Player();\n    void update(float) override;\n\n    virtual void heal(u32 amount, const game::Entity * source);\n};\n"
	);
}

#[test]
fn project_workflow() {
	let project = scratch_path("workflow.json");
	let project = path_str(&project);

	run_classy_ok(&["init", &project]);
	let stderr = run_classy_err(&["init", &project]);
	assert!(stderr.contains("already exists"), "{stderr}");

	run_classy_ok(&["typedef", &project, "set", "u32", "unsigned int"]);
	run_classy_ok(&["class", &project, "add", "game::Entity"]);
	run_classy_ok(&["method", &project, "virtual", "--class", "game::Entity", "--name", "~Entity", "--dtor", "1", "--addr", "0x1000"]);
	run_classy_ok(&["method", &project, "virtual", "--class", "game::Entity", "--name", "update", "--args", "u32", "--pure"]);
	run_classy_ok(&["class", &project, "add", "game::Player", "--base", "game::Entity"]);

	let stderr = run_classy_err(&["method", &project, "virtual", "--class", "game::Entity", "--name", "late", "--pure"]);
	assert!(stderr.contains("has derived classes"), "{stderr}");

	run_classy_ok(&["stub", &project, "pure", "0x700000"]);
	let out = run_classy_ok(&["method", &project, "override", "--class", "game::Player", "--slot", "1", "--addr", "0x2010"]);
	assert_eq!(out, "2\t_ZN4game6Player6updateEj\n");
	let out = run_classy_ok(&["method", &project, "override", "--class", "game::Player", "--slot", "0", "--addr", "0x700000"]);
	assert_eq!(out, "3\t_ZN4game6PlayerD1Ev\n");

	let methods = run_classy_json(&["method", &project, "list", "--class", "game::Player", "--json"]);
	let methods = methods.as_array().expect("method rows");
	assert_eq!(methods.len(), 2);
	assert_eq!(methods[1]["kind"], "pure virtual override");
	assert_eq!(methods[1]["address"], serde_json::Value::Null);

	let json = run_classy_json(&["symbols", &project, "--json"]);
	let pairs: Vec<(String, String)> = json["symbols"]
		.as_array()
		.expect("symbols array")
		.iter()
		.map(|entry| (entry["address"].as_str().unwrap_or_default().to_owned(), entry["symbol"].as_str().unwrap_or_default().to_owned()))
		.collect();
	assert_eq!(
		pairs,
		vec![
			("0x1000".to_owned(), "_ZN4game6EntityD1Ev".to_owned()),
			("0x2010".to_owned(), "_ZN4game6Player6updateEj".to_owned()),
		]
	);

	let saved = read_json(Path::new(&project));
	assert_eq!(saved["version"], 1);
	assert_eq!(saved["typedefs"]["u32"], "unsigned int");
	assert_eq!(saved["pure_virtual_vals"][0], 0x70_0000);
}

#[test]
fn signing_an_override_updates_the_chain() {
	let project = scratch_fixture("sample_project.json", "sign.json");
	let project = path_str(&project);

	// Method 4 overrides game::Entity::update.
	let out = run_classy_ok(&["method", &project, "sign", "4", "--name", "update", "--args", "double"]);
	assert_eq!(out, "4\t_ZN4game6Player6updateEd\n");

	let methods = run_classy_json(&["method", &project, "list", "--class", "game::Entity", "--json"]);
	let update = methods
		.as_array()
		.expect("method rows")
		.iter()
		.find(|row| row["id"] == 1)
		.expect("root method listed");
	assert_eq!(update["signature"], "void game::Entity::update(double)");
}

#[test]
fn class_rename_and_remove() {
	let project = scratch_fixture("sample_project.json", "rename.json");
	let project = path_str(&project);

	let stderr = run_classy_err(&["class", &project, "remove", "game::Entity"]);
	assert!(stderr.contains("derived classes"), "{stderr}");

	run_classy_ok(&["class", &project, "rename", "game::Player", "game::Hero"]);
	let classes = run_classy_json(&["class", &project, "list", "--json"]);
	assert_eq!(classes[1]["name"], "game::Hero");
	assert_eq!(classes[1]["base"], "game::Entity");
	assert_eq!(classes[1]["vtable_len"], 3);

	let text = run_classy_ok(&["symbols", &project]);
	assert!(text.contains("0x2000\t_ZN4game4HeroD1Ev\tgame::Hero::~Hero()"), "{text}");

	run_classy_ok(&["class", &project, "remove", "game::Hero"]);
	let classes = run_classy_json(&["class", &project, "list", "--json"]);
	assert_eq!(classes.as_array().map(Vec::len), Some(1));
}

#[test]
fn cyclic_project_file_fails_cleanly() {
	let project = scratch_path("cyclic.json");
	std::fs::write(&project, br#"{"version":1,"classes":[{"name":"A","base":1},{"name":"B","base":0}]}"#).expect("write");
	let project = path_str(&project);

	let stderr = run_classy_err(&["class", &project, "list"]);
	assert_eq!(stderr.trim_end(), "error: class \"A\" derives from itself");
}
