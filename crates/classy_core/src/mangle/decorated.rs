use crate::mangle::ty::encode_segments;
use crate::mangle::{MangleError, Result, SubstitutionTable, check_identifier, is_builtin, len_encode, mangle_type};

/// Type decorator token of an argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decorator {
	/// `*`
	Pointer,
	/// `&`
	Reference,
	/// `const`
	Const,
}

impl Decorator {
	/// Parse a decorator token.
	pub fn parse(token: &str) -> Result<Self> {
		match token {
			"*" => Ok(Self::Pointer),
			"&" => Ok(Self::Reference),
			"const" => Ok(Self::Const),
			_ => Err(MangleError::InvalidDecorator { token: token.to_owned() }),
		}
	}

	/// Return whether `token` is a decorator.
	pub fn is_decorator(token: &str) -> bool {
		Self::parse(token).is_ok()
	}

	/// Itanium qualifier code.
	pub fn code(self) -> char {
		match self {
			Self::Pointer => 'P',
			Self::Reference => 'R',
			Self::Const => 'K',
		}
	}
}

/// Mangle `type_name` wrapped in `decorators`, using and extending `subs`.
///
/// `decorators` are in source order, innermost first: `const *` on `char` is
/// `[Const, Pointer]` and yields `PKc`.
pub fn mangle_decorated_type(decorators: &[Decorator], type_name: &str, subs: &mut SubstitutionTable) -> Result<String> {
	// Outermost first.
	let codes: Vec<char> = decorators.iter().rev().map(|decorator| decorator.code()).collect();
	// Builtins and namespaced builtins are settled here.
	let bare = mangle_type(type_name, false)?;
	if is_builtin(type_name) {
		return decorate_known_base(&codes, &bare, &bare, subs);
	}

	let segments: Vec<&str> = type_name.split("::").collect();
	for segment in &segments {
		check_identifier(segment)?;
	}

	if let Some(base) = subs.get(&bare) {
		return decorate_known_base(&codes, &bare, &base, subs);
	}

	decorate_new_name(&codes, &segments, subs)
}

fn prefixed(codes: &[char], key: &str) -> String {
	let mut out: String = codes.iter().collect();
	out.push_str(key);
	out
}

/// Decorate a base whose own encoding is already settled (a builtin or a registered name).
///
/// Finds the longest registered decorated form, then registers each outer decorator
/// on the way back out.
fn decorate_known_base(codes: &[char], base_key: &str, base_mangled: &str, subs: &mut SubstitutionTable) -> Result<String> {
	let split = (0..codes.len())
		.find(|idx| subs.contains(&prefixed(&codes[*idx..], base_key)))
		.unwrap_or(codes.len());

	let mut key = prefixed(&codes[split..], base_key);
	let mut mangled = subs.get(&key).unwrap_or_else(|| base_mangled.to_owned());

	for code in codes[..split].iter().rev() {
		mangled.insert(0, *code);
		key.insert(0, *code);
		subs.register(key.clone())?;
	}

	Ok(mangled)
}

/// Decorate a qualified name that has not been seen as a whole.
///
/// The longest registered leading prefix is reused, every further prefix is registered,
/// then every decorated form from the inside out.
fn decorate_new_name(codes: &[char], segments: &[&str], subs: &mut SubstitutionTable) -> Result<String> {
	let known = (1..=segments.len())
		.rev()
		.find(|len| subs.contains(&encode_segments(&segments[..*len])))
		.unwrap_or(0);

	let mut key = encode_segments(&segments[..known]);
	let mut name = subs.get(&key).unwrap_or_default();

	for segment in &segments[known..] {
		let piece = len_encode(segment);
		name.push_str(&piece);
		key.push_str(&piece);
		subs.register(key.clone())?;
	}

	let mut mangled = if segments.len() == 1 { name } else { format!("N{name}E") };

	for code in codes.iter().rev() {
		mangled.insert(0, *code);
		key.insert(0, *code);
		subs.register(key.clone())?;
	}

	Ok(mangled)
}
