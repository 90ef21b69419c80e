/// One-letter Itanium code for a builtin scalar, after multi-word normalization.
pub fn builtin_code(name: &str) -> Option<char> {
	let code = match name {
		"void" => 'v',
		"wchar_t" => 'w',
		"bool" => 'b',
		"char" => 'c',
		"signed_char" => 'a',
		"unsigned_char" => 'h',
		"short" | "signed_short" => 's',
		"unsigned_short" => 't',
		"int" | "signed_int" => 'i',
		"unsigned_int" => 'j',
		"long" | "signed_long" => 'l',
		"unsigned_long" => 'm',
		"long_long" | "signed_long_long" => 'x',
		"unsigned_long_long" => 'y',
		"float" => 'f',
		"double" => 'd',
		_ => return None,
	};
	Some(code)
}

/// Return whether `name` is a builtin scalar spelling.
pub fn is_builtin(name: &str) -> bool {
	builtin_code(name).is_some()
}

#[cfg(test)]
mod tests {
	use crate::mangle::{builtin_code, is_builtin};

	#[test]
	fn signed_spellings_share_codes() {
		assert_eq!(builtin_code("int"), builtin_code("signed_int"));
		assert_eq!(builtin_code("long_long"), Some('x'));
		assert_eq!(builtin_code("signed_long_long"), Some('x'));
		assert_eq!(builtin_code("unsigned_long_long"), Some('y'));
	}

	#[test]
	fn unknown_names_are_not_builtin() {
		assert!(!is_builtin("string"));
		assert!(!is_builtin("unsigned"));
		assert!(!is_builtin("unsigned int"));
	}
}
