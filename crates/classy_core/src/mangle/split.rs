use crate::mangle::{MangleError, Result};

fn closer_for(ch: char) -> Option<char> {
	match ch {
		'(' => Some(')'),
		'<' => Some('>'),
		_ => None,
	}
}

/// Split `text` on `sep`, ignoring separators nested inside `(...)` or `<...>`.
///
/// With `remove_empty` set, empty segments are dropped. Otherwise they are kept, and a
/// trailing empty segment is emitted only when at least one separator was consumed.
pub fn brace_split(text: &str, sep: char, remove_empty: bool) -> Result<Vec<String>> {
	let mut stack: Vec<char> = Vec::new();
	let mut segments = Vec::new();
	let mut current = String::new();

	for ch in text.chars() {
		if stack.last() == Some(&ch) {
			stack.pop();
		}
		if let Some(closer) = closer_for(ch) {
			stack.push(closer);
		}

		if stack.is_empty() && ch == sep {
			if !remove_empty || !current.is_empty() {
				segments.push(std::mem::take(&mut current));
			}
		} else {
			current.push(ch);
		}
	}

	if !stack.is_empty() {
		return Err(MangleError::MismatchedBraces { text: text.to_owned() });
	}

	if !current.is_empty() || (!remove_empty && !segments.is_empty()) {
		segments.push(current);
	}

	Ok(segments)
}
