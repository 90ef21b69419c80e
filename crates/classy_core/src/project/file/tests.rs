use crate::project::{CURRENT_VERSION, Project, ProjectError, VirtualTarget};

#[test]
fn new_project_is_current_version_and_empty() {
	let project = Project::new();
	assert_eq!(project.version, CURRENT_VERSION);
	assert!(project.typedefs().is_empty());
	assert_eq!(project.class_count(), 0);
	assert_eq!(project.method_count(), 0);
}

#[test]
fn sets_valid_typedefs() {
	let mut project = Project::new();
	project.set_typedef("u32", "unsigned int").expect("multi-word builtin value");
	project.set_typedef("Str", " std::string ").expect("qualified value");
	project.set_typedef("Handle", "Entity").expect("plain value");
	project.set_typedef("Handle", "u32").expect("redefinition");

	assert_eq!(project.typedefs().get("Str"), Some("std::string"));
	assert_eq!(project.typedefs().get("Handle"), Some("u32"));
	assert_eq!(
		project.render_typedefs(),
		"typedef u32 Handle;\ntypedef std::string Str;\ntypedef unsigned int u32;\n"
	);
}

#[test]
fn rejects_invalid_aliases() {
	let mut project = Project::new();
	for alias in ["", "1x", "a::b", "int", "unsigned", "signed", "unsigned_int", "const"] {
		let err = project.set_typedef(alias, "int").expect_err("alias should be rejected");
		assert!(matches!(err, ProjectError::InvalidTypedefAlias { .. }), "{alias:?}: {err}");
	}
}

#[test]
fn rejects_invalid_values() {
	let mut project = Project::new();
	for value in ["", "const char *", "Foo Bar", "ns::", "vector<int>", "1abc"] {
		let err = project.set_typedef("alias", value).expect_err("value should be rejected");
		assert!(matches!(err, ProjectError::InvalidTypedefValue { .. }), "{value:?}: {err}");
	}
}

#[test]
fn remove_typedef_reports_missing_alias() {
	let mut project = Project::new();
	project.set_typedef("u8", "unsigned char").expect("typedef set");

	assert_eq!(project.remove_typedef("u8").expect("typedef removed"), "unsigned char");
	let err = project.remove_typedef("u8").expect_err("second remove should fail");
	assert!(matches!(err, ProjectError::TypedefNotFound { .. }));
}

#[test]
fn version_is_checked_before_schema() {
	let err = Project::from_slice(br#"{"version": 2, "classes": "whatever"}"#).expect_err("future version should fail");
	assert!(matches!(err, ProjectError::VersionMismatch { found: 2, expected: 1 }));

	let err = Project::from_slice(br#"{"classes": []}"#).expect_err("missing version should fail");
	assert!(matches!(err, ProjectError::Corrupt));

	let err = Project::from_slice(b"not json").expect_err("garbage should fail");
	assert!(matches!(err, ProjectError::Json(_)));
}

#[test]
fn minimal_file_fills_defaults() {
	let project = Project::from_slice(br#"{"version": 1}"#).expect("minimal project parses");
	assert_eq!(project, Project::new());
}

#[test]
fn classifies_stub_targets() {
	let mut project = Project::new();
	project.pure_virtual_vals.insert(0x1000);
	project.deleted_virtual_vals.insert(0x2000);

	assert_eq!(project.classify_target(0x1000), VirtualTarget::PureVirtual);
	assert_eq!(project.classify_target(0x2000), VirtualTarget::Deleted);
	assert_eq!(project.classify_target(0x3000), VirtualTarget::Address(0x3000));
}

#[test]
fn const_alias_would_break_const_arguments() {
	let mut project = Project::new();
	let err = project.set_typedef("const", "int").expect_err("decorator keyword");
	assert!(matches!(err, ProjectError::InvalidTypedefAlias { ref alias } if alias == "const"));
	assert!(project.typedefs().is_empty());
	assert_eq!(
		crate::mangle::mangle_function("f(const char*)", project.typedefs(), Default::default()).expect("const argument"),
		"_Z1fPKc"
	);
}

#[test]
fn cyclic_bases_are_rejected_on_load() {
	let err = Project::from_slice(br#"{"version":1,"classes":[{"name":"A","base":1},{"name":"B","base":0}]}"#)
		.expect_err("two-class loop");
	assert!(matches!(err, ProjectError::ClassCycle { ref name } if name == "A"), "{err}");

	let err = Project::from_slice(br#"{"version":1,"classes":[{"name":"Self","base":0}]}"#).expect_err("self base");
	assert!(matches!(err, ProjectError::ClassCycle { .. }), "{err}");
}

#[test]
fn dangling_ids_are_rejected_on_load() {
	let err = Project::from_slice(br#"{"version":1,"classes":[{"name":"A","base":4}]}"#).expect_err("missing base");
	assert!(matches!(err, ProjectError::UnknownClassId { id: 4 }), "{err}");

	let err = Project::from_slice(br#"{"version":1,"classes":[{"name":"A","base":null},null],"methods":[{"owner":1,"signature":{"name":"f"},"kind":{"type":"regular"}}]}"#)
		.expect_err("removed owner");
	assert!(matches!(err, ProjectError::UnknownClassId { id: 1 }), "{err}");

	let err = Project::from_slice(br#"{"version":1,"methods":[{"owner":null,"signature":{"name":"f"},"kind":{"type":"virtual","slot":0,"body":"implemented"}}]}"#)
		.expect_err("virtual free function");
	assert!(matches!(err, ProjectError::OwnerlessVirtual { id: 0 }), "{err}");
}

#[test]
fn cyclic_overrides_are_rejected_on_load() {
	let json = br#"{
		"version": 1,
		"classes": [{"name": "A", "base": null}, {"name": "B", "base": 0}],
		"methods": [
			{"owner": 1, "signature": {"name": "f"}, "kind": {"type": "override", "slot": 0, "base": 1, "body": "implemented"}},
			{"owner": 1, "signature": {"name": "g"}, "kind": {"type": "override", "slot": 1, "base": 0, "body": "implemented"}}
		]
	}"#;
	let err = Project::from_slice(json).expect_err("override loop");
	assert!(matches!(err, ProjectError::OverrideCycle { id: 0 }), "{err}");
}
