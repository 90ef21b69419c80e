use thiserror::Error;

/// Crate-local result type for mangling.
pub type Result<T> = std::result::Result<T, MangleError>;

/// Errors produced while parsing and mangling a signature.
///
/// Display strings are meant to be shown to the user verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MangleError {
	/// Name token is empty, has a leading digit, or contains characters outside `[A-Za-z0-9_]`.
	#[error("invalid identifier \"{name}\"")]
	InvalidIdentifier {
		/// Offending token.
		name: String,
	},
	/// An opening `(` or `<` was never closed.
	#[error("mismatched braces in \"{text}\"")]
	MismatchedBraces {
		/// Text that was being split.
		text: String,
	},
	/// Function pointer, template, or rvalue reference syntax.
	#[error("{feature} are not supported")]
	NotSupported {
		/// Human-readable feature name.
		feature: &'static str,
	},
	/// An argument was empty after removing labels and qualifiers.
	#[error("no argument type in \"{arg}\"")]
	NoArgumentType {
		/// Raw argument text.
		arg: String,
	},
	/// A builtin scalar type was qualified with a namespace.
	#[error("builtin type may not be namespaced: {name}")]
	InvalidNamespacedBuiltin {
		/// Qualified type name as written.
		name: String,
	},
	/// Signature has no `(...)` argument list.
	#[error("finding argument braces failed in \"{signature}\"")]
	BraceNotFound {
		/// Signature text.
		signature: String,
	},
	/// Constructor or destructor without a usable variant selector.
	#[error("no or invalid {kind} type given")]
	MissingVariant {
		/// `ctor` or `dtor`.
		kind: &'static str,
	},
	/// `const` member qualifier on a free function.
	#[error("function outside struct/class may not be const")]
	InvalidConstFreeFunction,
	/// A fragment was registered twice. Indicates a bug in the substitution search.
	#[error("substitution \"{fragment}\" is already registered")]
	DuplicateSubstitution {
		/// Mangled fragment.
		fragment: String,
	},
	/// Token after the argument type that is not `*`, `&` or `const`.
	#[error("invalid decorator \"{token}\"")]
	InvalidDecorator {
		/// Offending token.
		token: String,
	},
	/// Leading `const` repeated before the first pointer or reference.
	#[error("multiple const in \"{arg}\"")]
	MultipleConst {
		/// Raw argument text.
		arg: String,
	},
}
