use crate::mangle::{MangleError, Result};

/// Return whether `name` is a bare C++ identifier.
pub fn is_identifier(name: &str) -> bool {
	if name.is_empty() || name.starts_with(|ch: char| ch.is_numeric()) {
		return false;
	}
	name.chars().all(|ch| ch.is_alphanumeric() || ch == '_')
}

/// Fail with [`MangleError::InvalidIdentifier`] unless `name` is a bare identifier.
pub fn check_identifier(name: &str) -> Result<()> {
	if is_identifier(name) {
		Ok(())
	} else {
		Err(MangleError::InvalidIdentifier { name: name.to_owned() })
	}
}

/// Itanium `<source-name>`: decimal byte length followed by the name.
pub fn len_encode(name: &str) -> String {
	format!("{}{name}", name.len())
}
