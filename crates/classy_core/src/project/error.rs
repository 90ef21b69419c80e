use thiserror::Error;

use crate::mangle::MangleError;

/// Crate-local result type for project operations.
pub type Result<T> = std::result::Result<T, ProjectError>;

/// Errors produced while loading, editing, or exporting a project.
#[derive(Debug, Error)]
pub enum ProjectError {
	/// Filesystem failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Project file is not valid JSON or does not match the schema.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
	/// Signature failed to mangle.
	#[error(transparent)]
	Mangle(#[from] MangleError),
	/// Project file has no `version` field.
	#[error("project file is corrupt (missing version)")]
	Corrupt,
	/// Base-class links of a loaded file loop back on themselves.
	#[error("class \"{name}\" derives from itself")]
	ClassCycle {
		/// Class on the loop.
		name: String,
	},
	/// Override links of a loaded file loop back on themselves.
	#[error("override chain of method {id} loops")]
	OverrideCycle {
		/// Method on the loop.
		id: usize,
	},
	/// A virtual method or override without an owning class.
	#[error("virtual method {id} has no owning class")]
	OwnerlessVirtual {
		/// Method id.
		id: usize,
	},
	/// Project file was written by an incompatible version.
	#[error("version mismatch: file {found}, expected {expected}")]
	VersionMismatch {
		/// Version stored in the file.
		found: u64,
		/// Version this build reads.
		expected: u32,
	},
	/// Function name is empty or contains whitespace.
	#[error("name \"{name}\" is invalid")]
	InvalidName {
		/// Name as entered.
		name: String,
	},
	/// Class name is not a `::`-separated identifier path.
	#[error("the class name \"{name}\" is invalid")]
	InvalidClassName {
		/// Name as entered.
		name: String,
	},
	/// Another class already uses the name.
	#[error("class name \"{name}\" is already used")]
	ClassExists {
		/// Conflicting name.
		name: String,
	},
	/// No class has the requested name.
	#[error("class \"{name}\" is not in the project")]
	ClassNotFound {
		/// Requested name.
		name: String,
	},
	/// Class id is out of range or removed.
	#[error("unknown class id {id}")]
	UnknownClassId {
		/// Requested id.
		id: usize,
	},
	/// Method id is out of range or removed.
	#[error("unknown method id {id}")]
	UnknownMethodId {
		/// Requested id.
		id: usize,
	},
	/// Class still has derived classes.
	#[error("cannot remove class \"{name}\" with derived classes")]
	HasDerivedClasses {
		/// Class name.
		name: String,
	},
	/// Vtable of a class with derived classes cannot change.
	#[error("vtable of \"{name}\" cannot be modified because the class has derived classes")]
	VtableLocked {
		/// Class name.
		name: String,
	},
	/// Override requested on a root class.
	#[error("class \"{name}\" has no base class to override")]
	NoBaseClass {
		/// Class name.
		name: String,
	},
	/// Override slot is past the inherited vtable.
	#[error("vtable slot {slot} out of range (inherited slots: {len})")]
	SlotOutOfRange {
		/// Requested slot.
		slot: usize,
		/// Number of inherited slots.
		len: usize,
	},
	/// Class already overrides the slot.
	#[error("class \"{name}\" already overrides vtable slot {slot}")]
	SlotAlreadyOverridden {
		/// Class name.
		name: String,
		/// Slot index.
		slot: usize,
	},
	/// Virtual method is still overridden.
	#[error("cannot remove method {id} with overrides")]
	MethodHasOverrides {
		/// Method id.
		id: usize,
	},
	/// Only the last vtable slot can be removed.
	#[error("method {id} is not the last vtable slot of its class")]
	VirtualNotLast {
		/// Method id.
		id: usize,
	},
	/// Typedef alias is not an identifier or shadows a builtin word.
	#[error("typedef name \"{alias}\" is invalid")]
	InvalidTypedefAlias {
		/// Alias as entered.
		alias: String,
	},
	/// Typedef value is not a single builtin or type name.
	#[error("typedef value \"{value}\" is invalid")]
	InvalidTypedefValue {
		/// Value as entered.
		value: String,
	},
	/// Typedef alias is not defined.
	#[error("typedef \"{alias}\" is not defined")]
	TypedefNotFound {
		/// Requested alias.
		alias: String,
	},
	/// Another method already sits at the address.
	#[error("address 0x{address:x} is already assigned to method {id}")]
	AddressInUse {
		/// Address.
		address: u64,
		/// Method holding it.
		id: usize,
	},
	/// Address literal could not be parsed.
	#[error("invalid address literal: {value}")]
	InvalidAddress {
		/// Text as entered.
		value: String,
	},
}
