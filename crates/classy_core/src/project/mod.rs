mod class;
mod error;
mod export;
mod file;
mod method;
mod signature;

/// Class records and ids.
pub use class::{ClassEntry, ClassId};
/// Error and result aliases.
pub use error::{ProjectError, Result};
/// Disassembler-facing symbol export.
pub use export::SymbolEntry;
/// Project database and its on-disk version.
pub use file::{CURRENT_VERSION, Project};
/// Method records, kinds, and ids.
pub use method::{MethodEntry, MethodId, MethodKind, VirtualBody, VirtualTarget};
/// Stored method signatures and signature-entry composition.
pub use signature::{MethodSignature, SignatureFields};
