use tracing::debug;

use crate::mangle::ty::encode_segments;
use crate::mangle::{MangleError, Result, SubstitutionTable, Typedefs, check_identifier, len_encode, mangle_arguments};

/// Fixed prefix of every mangled symbol.
pub const PREFIX: &str = "_Z";

/// Itanium constructor variants (`C1`..`C3`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CtorVariant {
	/// `C1`: complete object constructor.
	Complete = 1,
	/// `C2`: base object constructor.
	Base = 2,
	/// `C3`: complete object allocating constructor.
	CompleteAllocating = 3,
}

impl CtorVariant {
	/// All variants in code order.
	pub const ALL: [Self; 3] = [Self::Complete, Self::Base, Self::CompleteAllocating];

	/// Variant for a numeric selector.
	pub fn from_code(code: u8) -> Option<Self> {
		Self::ALL.into_iter().find(|variant| variant.code() == code)
	}

	/// Numeric selector.
	pub fn code(self) -> u8 {
		self as u8
	}

	/// Stable lowercase label.
	pub fn label(self) -> &'static str {
		match self {
			Self::Complete => "complete",
			Self::Base => "base",
			Self::CompleteAllocating => "complete allocating",
		}
	}
}

/// Itanium destructor variants (`D0`..`D2`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DtorVariant {
	/// `D0`: deleting destructor.
	Deleting = 0,
	/// `D1`: complete object destructor.
	Complete = 1,
	/// `D2`: base object destructor.
	Base = 2,
}

impl DtorVariant {
	/// All variants in code order.
	pub const ALL: [Self; 3] = [Self::Deleting, Self::Complete, Self::Base];

	/// Variant for a numeric selector.
	pub fn from_code(code: u8) -> Option<Self> {
		Self::ALL.into_iter().find(|variant| variant.code() == code)
	}

	/// Numeric selector.
	pub fn code(self) -> u8 {
		self as u8
	}

	/// Stable lowercase label.
	pub fn label(self) -> &'static str {
		match self {
			Self::Deleting => "deleting",
			Self::Complete => "complete",
			Self::Base => "base",
		}
	}
}

/// Raw ctor/dtor variant selectors supplied with a signature.
///
/// Only consulted when the name turns out to be a constructor or destructor; an absent or
/// out-of-range selector then fails with [`MangleError::MissingVariant`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Structors {
	/// Constructor selector, `1..=3`.
	pub ctor: Option<u8>,
	/// Destructor selector, `0..=2`.
	pub dtor: Option<u8>,
}

impl Structors {
	/// Selectors with only a constructor variant.
	pub fn for_ctor(code: u8) -> Self {
		Self { ctor: Some(code), dtor: None }
	}

	/// Selectors with only a destructor variant.
	pub fn for_dtor(code: u8) -> Self {
		Self { ctor: None, dtor: Some(code) }
	}
}

/// Mangle `[<return-type> ]<Owner::>*<name>(<args>)[ const]` into an Itanium symbol.
///
/// The return type is accepted but not encoded. Each call uses a fresh substitution table.
pub fn mangle_function(signature: &str, typedefs: &Typedefs, structors: Structors) -> Result<String> {
	let brace_not_found = || MangleError::BraceNotFound { signature: signature.to_owned() };
	let open = signature.find('(').ok_or_else(brace_not_found)?;
	let close = signature.rfind(')').ok_or_else(brace_not_found)?;
	if open > close {
		return Err(brace_not_found());
	}

	let identifier = signature[..open]
		.split_whitespace()
		.last()
		.ok_or_else(|| MangleError::InvalidIdentifier { name: String::new() })?;
	let arguments = &signature[open + 1..close];
	let is_const = signature[close + 1..].split_whitespace().any(|token| token == "const");

	let segments: Vec<&str> = identifier.split("::").collect();
	let (scope, name) = segments.split_at(segments.len() - 1);
	let name = name[0];

	let structor = match scope.last() {
		Some(owner) if name == *owner => {
			let variant = structors
				.ctor
				.and_then(CtorVariant::from_code)
				.ok_or(MangleError::MissingVariant { kind: "ctor" })?;
			Some(format!("C{}", variant.code()))
		}
		Some(owner) if name.strip_prefix('~') == Some(*owner) => {
			let variant = structors
				.dtor
				.and_then(DtorVariant::from_code)
				.ok_or(MangleError::MissingVariant { kind: "dtor" })?;
			Some(format!("D{}", variant.code()))
		}
		_ => None,
	};

	for segment in scope {
		check_identifier(segment)?;
	}
	let name_code = match structor {
		Some(code) => code,
		None => {
			check_identifier(name)?;
			len_encode(name)
		}
	};

	let mut encoding = encode_segments(scope);
	encoding.push_str(&name_code);
	if is_const {
		if scope.is_empty() {
			return Err(MangleError::InvalidConstFreeFunction);
		}
		encoding.insert(0, 'K');
	}
	if !scope.is_empty() {
		encoding = format!("N{encoding}E");
	}

	let mut subs = SubstitutionTable::new();
	for len in 1..=scope.len() {
		subs.register(encode_segments(&scope[..len]))?;
	}

	let args = mangle_arguments(arguments, typedefs, &mut subs)?;
	let symbol = format!("{PREFIX}{encoding}{args}");
	debug!(signature, symbol = %symbol, substitutions = subs.len(), "mangled function");
	Ok(symbol)
}
