use crate::mangle::{
	Decorator, MangleError, Result, SubstitutionTable, Typedefs, brace_split, expand_typedefs, is_builtin, is_identifier, mangle_decorated_type,
	normalize_builtins,
};

/// Mangle one parameter declaration such as `const Foo* foo`.
///
/// `subs` is shared with the other arguments of the same function.
pub fn mangle_argument(text: &str, typedefs: &Typedefs, subs: &mut SubstitutionTable) -> Result<String> {
	if text.contains('(') {
		return Err(MangleError::NotSupported { feature: "function pointers" });
	}
	if text.contains('<') {
		return Err(MangleError::NotSupported { feature: "templates" });
	}
	if text.contains("&&") {
		return Err(MangleError::NotSupported { feature: "rvalue references" });
	}

	let spaced = text.replace('&', " & ").replace('*', " * ");
	let mut tokens = brace_split(&spaced, ' ', true)?;

	expand_typedefs(&mut tokens, typedefs);
	normalize_builtins(&mut tokens);
	hoist_leading_const(&mut tokens, text)?;

	// Layout is now: type, decorators, optional label.
	if tokens.len() >= 2
		&& let Some(label) = tokens.last()
		&& !Decorator::is_decorator(label)
	{
		if !is_identifier(label) || is_builtin(label) {
			return Err(MangleError::InvalidIdentifier { name: label.clone() });
		}
		tokens.pop();
	}

	let Some((type_name, rest)) = tokens.split_first() else {
		return Err(MangleError::NoArgumentType { arg: text.to_owned() });
	};

	let mut decorators = rest.iter().map(|token| Decorator::parse(token)).collect::<Result<Vec<_>>>()?;
	// Top-level const of the parameter itself does not mangle.
	if decorators.last() == Some(&Decorator::Const) {
		decorators.pop();
	}

	mangle_decorated_type(&decorators, type_name, subs)
}

/// `const T *` is `T const *`: move a leading `const` in front of the first `*`/`&`.
/// Without one the `const` qualifies the parameter itself and is dropped.
fn hoist_leading_const(tokens: &mut Vec<String>, text: &str) -> Result<()> {
	if tokens.first().is_none_or(|token| token != "const") {
		return Ok(());
	}

	let mut target = None;
	for (idx, token) in tokens.iter().enumerate().skip(1) {
		match token.as_str() {
			"const" => return Err(MangleError::MultipleConst { arg: text.to_owned() }),
			"*" | "&" => {
				target = Some(idx);
				break;
			}
			_ => {}
		}
	}

	if let Some(idx) = target {
		tokens.insert(idx, "const".to_owned());
	}
	tokens.remove(0);
	Ok(())
}

/// Mangle the text between a signature's argument braces.
///
/// An empty list, or a lone `void`, is `v`.
pub fn mangle_arguments(text: &str, typedefs: &Typedefs, subs: &mut SubstitutionTable) -> Result<String> {
	let args: Vec<String> = brace_split(text, ',', false)?
		.into_iter()
		.map(|arg| arg.trim().to_owned())
		.collect();

	match args.as_slice() {
		[] => return Ok("v".to_owned()),
		[only] if only.is_empty() || only == "void" => return Ok("v".to_owned()),
		_ => {}
	}

	let mut out = String::new();
	for arg in &args {
		out.push_str(&mangle_argument(arg, typedefs, subs)?);
	}
	Ok(out)
}

#[cfg(test)]
mod tests;
