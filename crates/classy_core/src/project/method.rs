use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::project::{ClassId, MethodSignature, Project, ProjectError, Result};

/// Stable index of a method in a [`Project`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MethodId(usize);

impl MethodId {
	/// Id for arena slot `index`. Lookups validate it.
	pub fn new(index: usize) -> Self {
		Self(index)
	}

	/// Arena slot.
	pub fn index(self) -> usize {
		self.0
	}
}

impl fmt::Display for MethodId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

/// What a vtable slot points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VirtualBody {
	/// Real function body at the method's address.
	Implemented,
	/// Pure virtual stub.
	PureVirtual,
	/// Deleted virtual stub.
	Deleted,
}

/// Vtable entry as read from the binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VirtualTarget {
	/// Function body address.
	Address(u64),
	/// Pure virtual stub.
	PureVirtual,
	/// Deleted virtual stub.
	Deleted,
}

impl VirtualTarget {
	fn into_parts(self) -> (VirtualBody, Option<u64>) {
		match self {
			Self::Address(address) => (VirtualBody::Implemented, Some(address)),
			Self::PureVirtual => (VirtualBody::PureVirtual, None),
			Self::Deleted => (VirtualBody::Deleted, None),
		}
	}
}

/// Method flavour. Overrides point at the method they replace by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MethodKind {
	/// Non-virtual method or free function.
	Regular,
	/// Virtual method introduced by its class at `slot`.
	Virtual {
		/// Vtable slot index.
		slot: usize,
		/// Slot target kind.
		body: VirtualBody,
	},
	/// Replacement of the inherited `base` method at `slot`.
	Override {
		/// Vtable slot index.
		slot: usize,
		/// Overridden method.
		base: MethodId,
		/// Slot target kind.
		body: VirtualBody,
	},
}

impl MethodKind {
	/// Human-readable kind label.
	pub fn type_name(&self) -> &'static str {
		match self {
			Self::Regular => "regular",
			Self::Virtual { body, .. } => match body {
				VirtualBody::Implemented => "virtual",
				VirtualBody::PureVirtual => "pure virtual",
				VirtualBody::Deleted => "deleted virtual",
			},
			Self::Override { body, .. } => match body {
				VirtualBody::Implemented => "override",
				VirtualBody::PureVirtual => "pure virtual override",
				VirtualBody::Deleted => "deleted override",
			},
		}
	}

	/// Vtable slot for virtual kinds.
	pub fn slot(&self) -> Option<usize> {
		match self {
			Self::Regular => None,
			Self::Virtual { slot, .. } | Self::Override { slot, .. } => Some(*slot),
		}
	}

	/// Slot target kind for virtual kinds.
	pub fn body(&self) -> Option<VirtualBody> {
		match self {
			Self::Regular => None,
			Self::Virtual { body, .. } | Self::Override { body, .. } => Some(*body),
		}
	}
}

/// One method or free function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodEntry {
	/// Owning class; `None` for free functions.
	pub owner: Option<ClassId>,
	/// Address of the function body in the binary.
	#[serde(default)]
	pub address: Option<u64>,
	/// Signature without owner.
	pub signature: MethodSignature,
	/// Method flavour.
	pub kind: MethodKind,
}

impl Project {
	/// Number of live methods.
	pub fn method_count(&self) -> usize {
		self.methods.iter().flatten().count()
	}

	/// Look up a method by id.
	pub fn method(&self, id: MethodId) -> Result<&MethodEntry> {
		self.methods
			.get(id.0)
			.and_then(Option::as_ref)
			.ok_or(ProjectError::UnknownMethodId { id: id.0 })
	}

	fn method_mut(&mut self, id: MethodId) -> Result<&mut MethodEntry> {
		self.methods
			.get_mut(id.0)
			.and_then(Option::as_mut)
			.ok_or(ProjectError::UnknownMethodId { id: id.0 })
	}

	/// Iterate live methods in id order.
	pub fn methods(&self) -> impl Iterator<Item = (MethodId, &MethodEntry)> {
		self.methods
			.iter()
			.enumerate()
			.filter_map(|(idx, method)| method.as_ref().map(|method| (MethodId(idx), method)))
	}

	/// Methods owned by `class`, in id order.
	pub fn class_methods(&self, class: ClassId) -> Vec<MethodId> {
		self.methods().filter(|(_, method)| method.owner == Some(class)).map(|(id, _)| id).collect()
	}

	/// Qualified name of the method's owner.
	pub fn owner_name(&self, method: &MethodEntry) -> Result<Option<&str>> {
		method.owner.map(|owner| self.class(owner).map(|class| class.name.as_str())).transpose()
	}

	/// Mangled symbol of a method.
	pub fn mangled_name(&self, id: MethodId) -> Result<String> {
		let method = self.method(id)?;
		method.signature.mangle(self.owner_name(method)?, &self.typedefs)
	}

	/// Add a non-virtual method, or a free function when `owner` is `None`.
	pub fn add_method(&mut self, owner: Option<ClassId>, signature: MethodSignature, address: Option<u64>) -> Result<MethodId> {
		self.check_address(address)?;
		self.validate_signature(owner, &signature)?;
		Ok(self.push_method(MethodEntry {
			owner,
			address,
			signature,
			kind: MethodKind::Regular,
		}))
	}

	/// Append a new virtual method to the end of `class`'s vtable.
	pub fn add_virtual(&mut self, class: ClassId, signature: MethodSignature, target: VirtualTarget) -> Result<MethodId> {
		self.ensure_vtable_unlocked(class)?;
		let (body, address) = target.into_parts();
		self.check_address(address)?;
		self.validate_signature(Some(class), &signature)?;

		let slot = self.vtable(class)?.len();
		Ok(self.push_method(MethodEntry {
			owner: Some(class),
			address,
			signature,
			kind: MethodKind::Virtual { slot, body },
		}))
	}

	/// Override the inherited vtable entry at `slot` in `class`.
	///
	/// The override takes the overridden method's signature; a destructor is renamed after `class`.
	pub fn add_override(&mut self, class: ClassId, slot: usize, target: VirtualTarget) -> Result<MethodId> {
		let entry = self.class(class)?;
		let base_class = entry.base.ok_or_else(|| ProjectError::NoBaseClass { name: entry.name.clone() })?;
		self.ensure_vtable_unlocked(class)?;

		let inherited = self.vtable(base_class)?;
		let base = *inherited.get(slot).ok_or(ProjectError::SlotOutOfRange {
			slot,
			len: inherited.len(),
		})?;
		let already = self
			.methods()
			.any(|(_, method)| method.owner == Some(class) && method.kind.slot() == Some(slot) && matches!(method.kind, MethodKind::Override { .. }));
		if already {
			return Err(ProjectError::SlotAlreadyOverridden {
				name: self.class(class)?.name.clone(),
				slot,
			});
		}

		let (body, address) = target.into_parts();
		self.check_address(address)?;
		let signature = self.inherited_signature(base, class)?;

		Ok(self.push_method(MethodEntry {
			owner: Some(class),
			address,
			signature,
			kind: MethodKind::Override { slot, base, body },
		}))
	}

	/// Replace a method's signature after checking that it mangles.
	///
	/// An override forwards to the method at the root of its chain; every override then
	/// mirrors the new signature.
	pub fn set_signature(&mut self, id: MethodId, signature: MethodSignature) -> Result<()> {
		let method = self.method(id)?;
		if let MethodKind::Override { .. } = method.kind {
			let root = self.root_method(id)?;
			let mut root_signature = signature;
			if let (Some(own), Some(root_owner)) = (method.owner, self.method(root)?.owner) {
				let own_dtor = format!("~{}", self.class(own)?.short_name());
				if root_signature.name == own_dtor {
					root_signature.name = format!("~{}", self.class(root_owner)?.short_name());
				}
			}
			return self.set_signature(root, root_signature);
		}

		self.validate_signature(method.owner, &signature)?;
		debug!(method = id.0, signature = %signature.render(self.owner_name(method)?, true), "set signature");
		self.method_mut(id)?.signature = signature;
		self.propagate_signature(id)
	}

	/// Method at the root of an override chain.
	pub fn root_method(&self, id: MethodId) -> Result<MethodId> {
		let mut current = id;
		while let MethodKind::Override { base, .. } = self.method(current)?.kind {
			current = base;
		}
		Ok(current)
	}

	/// Methods directly overriding `id`.
	pub fn overrides_of(&self, id: MethodId) -> Vec<MethodId> {
		self.methods()
			.filter(|(_, method)| matches!(method.kind, MethodKind::Override { base, .. } if base == id))
			.map(|(override_id, _)| override_id)
			.collect()
	}

	/// Effective vtable of `class`: inherited slots with overrides applied, then new virtuals.
	pub fn vtable(&self, class: ClassId) -> Result<Vec<MethodId>> {
		let mut table = match self.class(class)?.base {
			Some(base) => self.vtable(base)?,
			None => Vec::new(),
		};

		let mut introduced = Vec::new();
		for id in self.class_methods(class) {
			match self.method(id)?.kind {
				MethodKind::Override { slot, .. } => {
					if let Some(entry) = table.get_mut(slot) {
						*entry = id;
					}
				}
				MethodKind::Virtual { slot, .. } => introduced.push((slot, id)),
				MethodKind::Regular => {}
			}
		}
		introduced.sort_unstable();
		table.extend(introduced.into_iter().map(|(_, id)| id));
		Ok(table)
	}

	/// Remove a method.
	///
	/// Overridden methods cannot be removed, and a virtual method only from the end of an
	/// unlocked vtable.
	pub fn remove_method(&mut self, id: MethodId) -> Result<()> {
		let method = self.method(id)?;
		if !self.overrides_of(id).is_empty() {
			return Err(ProjectError::MethodHasOverrides { id: id.0 });
		}
		if let (MethodKind::Virtual { slot, .. }, Some(owner)) = (method.kind, method.owner) {
			self.ensure_vtable_unlocked(owner)?;
			if slot + 1 != self.vtable(owner)?.len() {
				return Err(ProjectError::VirtualNotLast { id: id.0 });
			}
		}

		self.unlink_method(id);
		Ok(())
	}

	pub(crate) fn unlink_method(&mut self, id: MethodId) {
		if let Some(slot) = self.methods.get_mut(id.0) {
			*slot = None;
			debug!(method = id.0, "removed method");
		}
	}

	fn push_method(&mut self, entry: MethodEntry) -> MethodId {
		let id = MethodId(self.methods.len());
		debug!(method = id.0, kind = entry.kind.type_name(), name = %entry.signature.name, "added method");
		self.methods.push(Some(entry));
		id
	}

	fn check_address(&self, address: Option<u64>) -> Result<()> {
		let Some(address) = address else {
			return Ok(());
		};
		match self.methods().find(|(_, method)| method.address == Some(address)) {
			Some((holder, _)) => Err(ProjectError::AddressInUse { address, id: holder.0 }),
			None => Ok(()),
		}
	}

	fn validate_signature(&self, owner: Option<ClassId>, signature: &MethodSignature) -> Result<String> {
		let owner_name = owner.map(|owner| self.class(owner).map(|class| class.name.as_str())).transpose()?;
		signature.mangle(owner_name, &self.typedefs)
	}

	fn ensure_vtable_unlocked(&self, class: ClassId) -> Result<()> {
		if self.derived_classes(class).is_empty() {
			Ok(())
		} else {
			Err(ProjectError::VtableLocked {
				name: self.class(class)?.name.clone(),
			})
		}
	}

	/// Signature of `base` as seen from `class`, renaming a destructor.
	fn inherited_signature(&self, base: MethodId, class: ClassId) -> Result<MethodSignature> {
		let base_method = self.method(base)?;
		let mut signature = base_method.signature.clone();
		if let Some(base_owner) = base_method.owner
			&& signature.name.strip_prefix('~') == Some(self.class(base_owner)?.short_name())
		{
			signature.name = format!("~{}", self.class(class)?.short_name());
		}
		Ok(signature)
	}

	fn propagate_signature(&mut self, id: MethodId) -> Result<()> {
		for override_id in self.overrides_of(id) {
			let Some(owner) = self.method(override_id)?.owner else {
				continue;
			};
			let signature = self.inherited_signature(id, owner)?;
			self.method_mut(override_id)?.signature = signature;
			self.propagate_signature(override_id)?;
		}
		Ok(())
	}
}
