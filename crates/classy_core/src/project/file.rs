use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::mangle::{Decorator, MULTI_SEGMENT_TYPES, Typedefs, is_builtin, is_identifier, normalize_builtins};
use crate::project::{ClassEntry, MethodEntry, MethodKind, ProjectError, Result, VirtualTarget};

/// Project file format version written and accepted by this build.
pub const CURRENT_VERSION: u32 = 1;

/// Typedefs, classes, and methods of one reverse-engineering project.
///
/// Classes and methods live in arenas addressed by [`crate::project::ClassId`] and
/// [`crate::project::MethodId`]. Removed entries leave a hole so ids stay stable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
	/// File format version.
	pub version: u32,
	#[serde(default)]
	pub(crate) typedefs: Typedefs,
	#[serde(default)]
	pub(crate) classes: Vec<Option<ClassEntry>>,
	#[serde(default)]
	pub(crate) methods: Vec<Option<MethodEntry>>,
	/// Vtable targets that mean "pure virtual" (`__cxa_pure_virtual` stubs).
	#[serde(default)]
	pub pure_virtual_vals: BTreeSet<u64>,
	/// Vtable targets that mean "deleted virtual" (`__cxa_deleted_virtual` stubs).
	#[serde(default)]
	pub deleted_virtual_vals: BTreeSet<u64>,
}

impl Default for Project {
	fn default() -> Self {
		Self::new()
	}
}

impl Project {
	/// Create an empty project at [`CURRENT_VERSION`].
	pub fn new() -> Self {
		Self {
			version: CURRENT_VERSION,
			typedefs: Typedefs::new(),
			classes: Vec::new(),
			methods: Vec::new(),
			pure_virtual_vals: BTreeSet::new(),
			deleted_virtual_vals: BTreeSet::new(),
		}
	}

	/// Load a project file.
	pub fn open(path: &Path) -> Result<Self> {
		let bytes = fs::read(path)?;
		let project = Self::from_slice(&bytes)?;
		debug!(path = %path.display(), classes = project.class_count(), methods = project.method_count(), "opened project");
		Ok(project)
	}

	/// Parse project JSON, checking the version before the schema.
	pub fn from_slice(bytes: &[u8]) -> Result<Self> {
		let raw: serde_json::Value = serde_json::from_slice(bytes)?;
		let version = raw.get("version").and_then(serde_json::Value::as_u64).ok_or(ProjectError::Corrupt)?;
		if version != u64::from(CURRENT_VERSION) {
			return Err(ProjectError::VersionMismatch {
				found: version,
				expected: CURRENT_VERSION,
			});
		}
		let project: Self = serde_json::from_value(raw)?;
		project.check_links()?;
		Ok(project)
	}

	/// Reject dangling ids and cyclic base or override chains in a loaded file.
	fn check_links(&self) -> Result<()> {
		for (id, class) in self.classes() {
			let mut current = class.base;
			let mut steps = 0;
			while let Some(base) = current {
				if base == id || steps > self.classes.len() {
					return Err(ProjectError::ClassCycle { name: class.name.clone() });
				}
				current = self.class(base)?.base;
				steps += 1;
			}
		}

		for (id, method) in self.methods() {
			match method.owner {
				Some(owner) => {
					self.class(owner)?;
				}
				None if method.kind != MethodKind::Regular => {
					return Err(ProjectError::OwnerlessVirtual { id: id.index() });
				}
				None => {}
			}

			let mut current = id;
			let mut steps = 0;
			while let MethodKind::Override { base, .. } = self.method(current)?.kind {
				if base == id || steps > self.methods.len() {
					return Err(ProjectError::OverrideCycle { id: id.index() });
				}
				current = base;
				steps += 1;
			}
		}
		Ok(())
	}

	/// Write the project as pretty-printed JSON.
	pub fn save(&self, path: &Path) -> Result<()> {
		let mut json = serde_json::to_string_pretty(self)?;
		json.push('\n');
		fs::write(path, json)?;
		debug!(path = %path.display(), "saved project");
		Ok(())
	}

	/// Typedef table handed to the mangler.
	pub fn typedefs(&self) -> &Typedefs {
		&self.typedefs
	}

	/// Define or redefine a typedef after validating both sides.
	///
	/// The alias must be an identifier that is not a builtin word. The value must reduce to one
	/// builtin or one `::`-separated type name.
	pub fn set_typedef(&mut self, alias: &str, value: &str) -> Result<()> {
		let alias = alias.trim();
		let reserved = is_builtin(alias) || Decorator::is_decorator(alias) || MULTI_SEGMENT_TYPES.iter().any(|words| words.contains(&alias));
		if !is_identifier(alias) || reserved {
			return Err(ProjectError::InvalidTypedefAlias { alias: alias.to_owned() });
		}

		let mut tokens: Vec<String> = value.split_whitespace().map(str::to_owned).collect();
		normalize_builtins(&mut tokens);
		let valid = match tokens.as_slice() {
			[token] => is_builtin(token) || token.split("::").all(is_identifier),
			_ => false,
		};
		if !valid {
			return Err(ProjectError::InvalidTypedefValue { value: value.to_owned() });
		}

		debug!(alias, value = value.trim(), redefined = self.typedefs.contains(alias), "set typedef");
		self.typedefs.insert(alias, value.trim());
		Ok(())
	}

	/// Remove a typedef.
	pub fn remove_typedef(&mut self, alias: &str) -> Result<String> {
		self.typedefs
			.remove(alias)
			.ok_or_else(|| ProjectError::TypedefNotFound { alias: alias.to_owned() })
	}

	/// Render typedefs as C declarations, one per line.
	pub fn render_typedefs(&self) -> String {
		self.typedefs.iter().map(|(alias, value)| format!("typedef {value} {alias};\n")).collect()
	}

	/// Classify a vtable entry by the stub addresses registered in the project.
	pub fn classify_target(&self, target: u64) -> VirtualTarget {
		if self.pure_virtual_vals.contains(&target) {
			VirtualTarget::PureVirtual
		} else if self.deleted_virtual_vals.contains(&target) {
			VirtualTarget::Deleted
		} else {
			VirtualTarget::Address(target)
		}
	}
}

#[cfg(test)]
mod tests;
