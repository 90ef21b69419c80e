//! Itanium C++ symbol mangling for hand-entered function signatures, and the
//! class/method project database that feeds it.

/// Signature parsing and Itanium ABI name mangling.
pub mod mangle;
/// Typedef, class, and method project database.
pub mod project;
