use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::mangle::is_identifier;
use crate::project::{Project, ProjectError, Result};

/// Stable index of a class in a [`Project`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassId(usize);

impl ClassId {
	/// Id for arena slot `index`. Lookups validate it.
	pub fn new(index: usize) -> Self {
		Self(index)
	}

	/// Arena slot.
	pub fn index(self) -> usize {
		self.0
	}
}

impl fmt::Display for ClassId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

/// One C++ class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassEntry {
	/// Fully qualified name (`ns::Foo`).
	pub name: String,
	/// Single public base class.
	#[serde(default)]
	pub base: Option<ClassId>,
}

impl ClassEntry {
	/// Last `::` segment, which constructors and destructors are named after.
	pub fn short_name(&self) -> &str {
		short_name(&self.name)
	}
}

pub(crate) fn short_name(name: &str) -> &str {
	name.rsplit("::").next().unwrap_or(name)
}

fn is_valid_class_name(name: &str) -> bool {
	name.split("::").all(is_identifier)
}

impl Project {
	/// Number of live classes.
	pub fn class_count(&self) -> usize {
		self.classes.iter().flatten().count()
	}

	/// Look up a class by id.
	pub fn class(&self, id: ClassId) -> Result<&ClassEntry> {
		self.classes
			.get(id.0)
			.and_then(Option::as_ref)
			.ok_or(ProjectError::UnknownClassId { id: id.0 })
	}

	/// Find a class id by exact qualified name.
	pub fn class_id(&self, name: &str) -> Result<ClassId> {
		self.classes()
			.find(|(_, class)| class.name == name)
			.map(|(id, _)| id)
			.ok_or_else(|| ProjectError::ClassNotFound { name: name.to_owned() })
	}

	/// Iterate live classes in id order.
	pub fn classes(&self) -> impl Iterator<Item = (ClassId, &ClassEntry)> {
		self.classes
			.iter()
			.enumerate()
			.filter_map(|(idx, class)| class.as_ref().map(|class| (ClassId(idx), class)))
	}

	/// Classes deriving directly from `id`.
	pub fn derived_classes(&self, id: ClassId) -> Vec<ClassId> {
		self.classes().filter(|(_, class)| class.base == Some(id)).map(|(derived, _)| derived).collect()
	}

	/// Add a class, optionally deriving from `base`.
	pub fn add_class(&mut self, name: &str, base: Option<ClassId>) -> Result<ClassId> {
		let name = name.trim();
		if !is_valid_class_name(name) {
			return Err(ProjectError::InvalidClassName { name: name.to_owned() });
		}
		if self.class_id(name).is_ok() {
			return Err(ProjectError::ClassExists { name: name.to_owned() });
		}
		if let Some(base) = base {
			self.class(base)?;
		}

		let id = ClassId(self.classes.len());
		self.classes.push(Some(ClassEntry {
			name: name.to_owned(),
			base,
		}));
		debug!(class = name, id = id.0, "added class");
		Ok(id)
	}

	/// Rename a class together with its constructors and destructors.
	pub fn rename_class(&mut self, id: ClassId, new_name: &str) -> Result<()> {
		let new_name = new_name.trim();
		if !is_valid_class_name(new_name) {
			return Err(ProjectError::InvalidClassName { name: new_name.to_owned() });
		}
		if let Ok(existing) = self.class_id(new_name)
			&& existing != id
		{
			return Err(ProjectError::ClassExists { name: new_name.to_owned() });
		}

		let old_short = self.class(id)?.short_name().to_owned();
		let new_short = short_name(new_name).to_owned();
		let old_dtor = format!("~{old_short}");

		for method in self.methods.iter_mut().flatten().filter(|method| method.owner == Some(id)) {
			if method.signature.name == old_short {
				method.signature.name.clone_from(&new_short);
			} else if method.signature.name == old_dtor {
				method.signature.name = format!("~{new_short}");
			}
		}

		if let Some(class) = self.classes.get_mut(id.0).and_then(Option::as_mut) {
			debug!(from = %class.name, to = new_name, "renamed class");
			class.name = new_name.to_owned();
		}
		Ok(())
	}

	/// Remove a class and every method it owns.
	pub fn remove_class(&mut self, id: ClassId) -> Result<()> {
		let name = self.class(id)?.name.clone();
		if !self.derived_classes(id).is_empty() {
			return Err(ProjectError::HasDerivedClasses { name });
		}

		for method in self.class_methods(id) {
			self.unlink_method(method);
		}

		self.classes[id.0] = None;
		debug!(class = %name, "removed class");
		Ok(())
	}
}
