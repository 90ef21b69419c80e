/// Class management command.
pub mod class;
/// Signature composition command.
pub mod compose;
/// Header rendering command.
pub mod header;
/// Project creation command.
pub mod init;
/// Raw signature mangling command.
pub mod mangle;
/// Method management command.
pub mod method;
/// Virtual stub address command.
pub mod stub;
/// Symbol export command.
pub mod symbols;
/// Typedef management command.
pub mod typedef;

pub(crate) mod util;
