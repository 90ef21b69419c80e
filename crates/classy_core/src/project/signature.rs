use serde::{Deserialize, Serialize};

use crate::mangle::{CtorVariant, DtorVariant, Structors, Typedefs, mangle_function};
use crate::project::class::short_name;
use crate::project::{ProjectError, Result};

fn default_return_type() -> String {
	"void".to_owned()
}

fn default_variant() -> u8 {
	1
}

/// Signature stored with a method, without its owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodSignature {
	/// Unqualified function name. Constructors and destructors use the class name (`Foo`, `~Foo`).
	pub name: String,
	/// Raw argument list text between the braces.
	#[serde(default)]
	pub args: String,
	/// Return type text. Empty for constructors and destructors.
	#[serde(default = "default_return_type")]
	pub return_type: String,
	/// `const` member function.
	#[serde(default)]
	pub is_const: bool,
	/// Constructor variant selector used when the name is a constructor.
	#[serde(default = "default_variant")]
	pub ctor_type: u8,
	/// Destructor variant selector used when the name is a destructor.
	#[serde(default = "default_variant")]
	pub dtor_type: u8,
}

impl MethodSignature {
	/// Signature `void name()`.
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			args: String::new(),
			return_type: default_return_type(),
			is_const: false,
			ctor_type: default_variant(),
			dtor_type: default_variant(),
		}
	}

	/// Set the argument text.
	pub fn with_args(mut self, args: impl Into<String>) -> Self {
		self.args = args.into();
		self
	}

	/// Set the return type text.
	pub fn with_return_type(mut self, return_type: impl Into<String>) -> Self {
		self.return_type = return_type.into();
		self
	}

	/// Mark as a `const` member function.
	pub fn with_const(mut self, is_const: bool) -> Self {
		self.is_const = is_const;
		self
	}

	/// Render `[<ret> ][<owner>::]<name>(<args>)[ const]`.
	pub fn render(&self, owner: Option<&str>, include_return_type: bool) -> String {
		let mut out = String::new();
		if include_return_type && !self.return_type.is_empty() {
			out.push_str(&self.return_type);
			out.push(' ');
		}
		if let Some(owner) = owner {
			out.push_str(owner);
			out.push_str("::");
		}
		out.push_str(&self.name);
		out.push('(');
		out.push_str(&self.args);
		out.push(')');
		if self.is_const {
			out.push_str(" const");
		}
		out
	}

	/// Variant selectors for the mangler.
	pub fn structors(&self) -> Structors {
		Structors {
			ctor: Some(self.ctor_type),
			dtor: Some(self.dtor_type),
		}
	}

	/// Mangle as a member of `owner`, or as a free function.
	pub fn mangle(&self, owner: Option<&str>, typedefs: &Typedefs) -> Result<String> {
		Ok(mangle_function(&self.render(owner, false), typedefs, self.structors())?)
	}
}

/// Raw fields of the signature-entry form.
///
/// Composition applies the entry policy: constructors lose their return type, destructors
/// lose their return type and arguments. The mangler itself never enforces this.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignatureFields {
	/// Return type; blank means `void`.
	pub return_type: String,
	/// Owning class path, blank for free functions.
	pub owner: String,
	/// Function name.
	pub name: String,
	/// Argument list text.
	pub args: String,
	/// `const` member function.
	pub is_const: bool,
	/// Constructor variant selector.
	pub ctor: Option<u8>,
	/// Destructor variant selector.
	pub dtor: Option<u8>,
}

impl SignatureFields {
	/// Build the stored form, applying the ctor/dtor policy.
	pub fn to_signature(&self) -> MethodSignature {
		let mut return_type = self.return_type.trim().to_owned();
		if return_type.is_empty() {
			return_type = default_return_type();
		}
		let name = self.name.trim().to_owned();
		let mut args = self.args.trim().to_owned();

		let owner = self.owner.trim();
		if let Some(class_name) = owner.rsplit("::").next().filter(|_| !owner.is_empty()) {
			if name == class_name {
				return_type.clear();
			} else if name.strip_prefix('~') == Some(class_name) {
				return_type.clear();
				args.clear();
			}
		}

		MethodSignature {
			name,
			args,
			return_type,
			is_const: self.is_const,
			ctor_type: self.ctor.unwrap_or_else(default_variant),
			dtor_type: self.dtor.unwrap_or_else(default_variant),
		}
	}

	/// Owner path, if any.
	pub fn owner(&self) -> Option<&str> {
		Some(self.owner.trim()).filter(|owner| !owner.is_empty())
	}

	/// Variant label (`complete`, `deleting`, ...) when the fields name a constructor or
	/// destructor of the owner with a valid selector.
	pub fn structor_label(&self) -> Option<&'static str> {
		let class_name = short_name(self.owner()?);
		let name = self.name.trim();
		if name == class_name {
			self.ctor.and_then(CtorVariant::from_code).map(CtorVariant::label)
		} else if name.strip_prefix('~') == Some(class_name) {
			self.dtor.and_then(DtorVariant::from_code).map(DtorVariant::label)
		} else {
			None
		}
	}

	/// Full signature text as shown to the user.
	pub fn compose(&self) -> String {
		self.to_signature().render(self.owner(), true)
	}

	/// Validate and mangle the composed signature.
	pub fn mangle(&self, typedefs: &Typedefs) -> Result<String> {
		let name = self.name.trim();
		if name.is_empty() || name.contains(char::is_whitespace) {
			return Err(ProjectError::InvalidName { name: name.to_owned() });
		}

		let structors = Structors {
			ctor: self.ctor,
			dtor: self.dtor,
		};
		Ok(mangle_function(&self.compose(), typedefs, structors)?)
	}
}
