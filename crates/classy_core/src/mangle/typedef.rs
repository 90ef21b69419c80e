use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::trace;

/// User-defined type aliases, alias name to canonical type text.
///
/// The mangler only borrows this table, so it cannot change during a call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Typedefs {
	entries: BTreeMap<String, String>,
}

impl Typedefs {
	/// Create an empty table.
	pub fn new() -> Self {
		Self::default()
	}

	/// Canonical text for `alias`.
	pub fn get(&self, alias: &str) -> Option<&str> {
		self.entries.get(alias).map(String::as_str)
	}

	/// Return whether `alias` is defined.
	pub fn contains(&self, alias: &str) -> bool {
		self.entries.contains_key(alias)
	}

	/// Define or redefine `alias`, returning the previous value. No validation is done here.
	pub fn insert(&mut self, alias: impl Into<String>, value: impl Into<String>) -> Option<String> {
		self.entries.insert(alias.into(), value.into())
	}

	/// Remove `alias`, returning its value.
	pub fn remove(&mut self, alias: &str) -> Option<String> {
		self.entries.remove(alias)
	}

	/// Iterate aliases in name order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.entries.iter().map(|(alias, value)| (alias.as_str(), value.as_str()))
	}

	/// Number of aliases.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Return whether no alias is defined.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Typedefs {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self {
			entries: iter.into_iter().map(|(alias, value)| (alias.into(), value.into())).collect(),
		}
	}
}

/// Replace alias tokens in place with their whitespace-split values.
///
/// The scan resumes at the first inserted token, so a value that names another alias is
/// expanded again. A token is never expanded through an alias already on its own
/// expansion chain, which keeps cyclic definitions finite.
pub fn expand_typedefs(tokens: &mut Vec<String>, typedefs: &Typedefs) {
	if typedefs.is_empty() {
		return;
	}

	let mut chains: Vec<Vec<String>> = vec![Vec::new(); tokens.len()];
	let mut idx = 0;
	while idx < tokens.len() {
		let alias = &tokens[idx];
		let Some(value) = typedefs.get(alias).filter(|_| !chains[idx].contains(alias)) else {
			idx += 1;
			continue;
		};

		trace!(alias = %alias, value, "expanding typedef");
		let mut chain = chains[idx].clone();
		chain.push(alias.clone());

		let replacement: Vec<String> = value.split_whitespace().map(str::to_owned).collect();
		let count = replacement.len();
		tokens.splice(idx..=idx, replacement);
		chains.splice(idx..=idx, std::iter::repeat_n(chain, count));
	}
}
