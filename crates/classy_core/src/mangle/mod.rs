mod arg;
mod builtin;
mod decorated;
mod error;
mod function;
mod ident;
mod normalize;
mod seqid;
mod split;
mod subs;
mod ty;
mod typedef;

/// Argument-list and single-argument manglers.
pub use arg::{mangle_argument, mangle_arguments};
/// Builtin scalar lookup.
pub use builtin::{builtin_code, is_builtin};
/// Pointer/reference/const decorators and the decorated-type mangler.
pub use decorated::{Decorator, mangle_decorated_type};
/// Error and result aliases.
pub use error::{MangleError, Result};
/// Top-level signature mangler and ctor/dtor variant selectors.
pub use function::{CtorVariant, DtorVariant, PREFIX, Structors, mangle_function};
/// Identifier validation helpers.
pub use ident::{check_identifier, is_identifier, len_encode};
/// Multi-word builtin normalization.
pub use normalize::{MULTI_SEGMENT_TYPES, normalize_builtins};
/// Substitution sequence-id encoding.
pub use seqid::encode_seqid;
/// Brace-aware splitting.
pub use split::brace_split;
/// Per-call substitution table.
pub use subs::SubstitutionTable;
/// Undecorated type mangling.
pub use ty::mangle_type;
/// Typedef table and expansion.
pub use typedef::{Typedefs, expand_typedefs};
