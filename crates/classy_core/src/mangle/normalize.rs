/// Multi-word builtin spellings, longest first.
pub const MULTI_SEGMENT_TYPES: &[&[&str]] = &[
	&["signed", "long", "long"],
	&["unsigned", "long", "long"],
	&["signed", "char"],
	&["unsigned", "char"],
	&["signed", "short"],
	&["unsigned", "short"],
	&["signed", "int"],
	&["unsigned", "int"],
	&["signed", "long"],
	&["unsigned", "long"],
	&["long", "long"],
];

/// Collapse multi-word builtins (`unsigned long long`) into one `_`-joined token.
pub fn normalize_builtins(tokens: &mut Vec<String>) {
	let mut idx = 0;
	while idx < tokens.len() {
		let matched = MULTI_SEGMENT_TYPES.iter().find(|spelling| {
			tokens
				.get(idx..idx + spelling.len())
				.is_some_and(|window| window.iter().zip(spelling.iter()).all(|(token, word)| token.as_str() == *word))
		});

		if let Some(spelling) = matched {
			tokens.splice(idx..idx + spelling.len(), [spelling.join("_")]);
		}
		idx += 1;
	}
}
