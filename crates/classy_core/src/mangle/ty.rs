use crate::mangle::{MangleError, Result, builtin_code, len_encode};

/// Concatenated `<source-name>`s of `segments`, without nested-name wrapping.
pub(crate) fn encode_segments(segments: &[&str]) -> String {
	segments.iter().map(|segment| len_encode(segment)).collect()
}

/// Mangle an undecorated type name without substitutions.
///
/// Builtins map to their one-letter code. A `::`-qualified name is wrapped in `N...E`
/// when `nested` is set, otherwise only its segments are emitted.
pub fn mangle_type(name: &str, nested: bool) -> Result<String> {
	let segments: Vec<&str> = name.split("::").collect();

	if let Some(code) = segments.last().and_then(|last| builtin_code(last)) {
		if segments.len() > 1 {
			return Err(MangleError::InvalidNamespacedBuiltin { name: name.to_owned() });
		}
		return Ok(code.to_string());
	}

	let body = encode_segments(&segments);
	if segments.len() == 1 || !nested {
		return Ok(body);
	}
	Ok(format!("N{body}E"))
}
