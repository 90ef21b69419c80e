//! Shared test helpers for workspace crates.

use std::path::{Path, PathBuf};

/// Resolve the workspace root path.
pub fn workspace_root() -> PathBuf {
	let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
	manifest_dir
		.join("..")
		.join("..")
		.canonicalize()
		.unwrap_or_else(|_| manifest_dir.join("..").join(".."))
}

/// Resolve a fixture path under `<workspace>/fixtures`.
pub fn fixture_path(name: &str) -> PathBuf {
	workspace_root().join("fixtures").join(name)
}

/// Resolve the workspace target directory.
pub fn target_dir() -> PathBuf {
	std::env::var_os("CARGO_TARGET_DIR")
		.map(PathBuf::from)
		.unwrap_or_else(|| workspace_root().join("target"))
}

/// Fresh scratch file path under `<target>/classy-scratch`, unique per process and name.
///
/// Any stale file from an earlier run is removed.
pub fn scratch_path(name: &str) -> PathBuf {
	let dir = target_dir().join("classy-scratch").join(std::process::id().to_string());
	std::fs::create_dir_all(&dir).expect("scratch directory is creatable");
	let path = dir.join(name);
	let _ = std::fs::remove_file(&path);
	path
}

/// Copy a fixture into a scratch path so tests can mutate it.
pub fn scratch_fixture(fixture: &str, name: &str) -> PathBuf {
	let path = scratch_path(name);
	std::fs::copy(fixture_path(fixture), &path).expect("fixture copies into scratch");
	path
}

/// Read and parse a JSON file.
pub fn read_json(path: &Path) -> serde_json::Value {
	let bytes = std::fs::read(path).expect("json file is readable");
	serde_json::from_slice(&bytes).expect("file holds valid json")
}
