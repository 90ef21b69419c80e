use std::collections::HashMap;

use tracing::trace;

use crate::mangle::{MangleError, Result, encode_seqid};

/// Substitution candidates seen so far in one mangling call.
///
/// Keys are the fully expanded fragments. Codes are handed out in registration order,
/// starting at `S_`.
#[derive(Debug, Clone, Default)]
pub struct SubstitutionTable {
	fragments: Vec<String>,
	index: HashMap<String, usize>,
}

impl SubstitutionTable {
	/// Create an empty table.
	pub fn new() -> Self {
		Self::default()
	}

	/// Back-reference code for `fragment`, if registered.
	pub fn get(&self, fragment: &str) -> Option<String> {
		self.index.get(fragment).map(|seq| encode_seqid(*seq))
	}

	/// Return whether `fragment` is registered.
	pub fn contains(&self, fragment: &str) -> bool {
		self.index.contains_key(fragment)
	}

	/// Register `fragment` under the next sequence id.
	pub fn register(&mut self, fragment: String) -> Result<()> {
		if self.index.contains_key(&fragment) {
			return Err(MangleError::DuplicateSubstitution { fragment });
		}

		let seq = self.fragments.len();
		trace!(fragment = %fragment, code = %encode_seqid(seq), "registered substitution");
		self.index.insert(fragment.clone(), seq);
		self.fragments.push(fragment);
		Ok(())
	}

	/// Number of registered fragments.
	pub fn len(&self) -> usize {
		self.fragments.len()
	}

	/// Return whether nothing is registered.
	pub fn is_empty(&self) -> bool {
		self.fragments.is_empty()
	}

	/// Iterate `(fragment, code)` pairs in registration order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, String)> {
		self.fragments.iter().enumerate().map(|(seq, fragment)| (fragment.as_str(), encode_seqid(seq)))
	}
}

#[cfg(test)]
mod tests {
	use crate::mangle::{MangleError, SubstitutionTable};

	#[test]
	fn codes_follow_registration_order() {
		let mut subs = SubstitutionTable::new();
		subs.register("3Foo".to_owned()).expect("first registration");
		subs.register("P3Foo".to_owned()).expect("second registration");
		subs.register("3Bar".to_owned()).expect("third registration");

		assert_eq!(subs.get("3Foo").as_deref(), Some("S_"));
		assert_eq!(subs.get("P3Foo").as_deref(), Some("S0_"));
		assert_eq!(subs.get("3Bar").as_deref(), Some("S1_"));
		assert_eq!(subs.get("3Baz"), None);

		let order: Vec<_> = subs.iter().map(|(fragment, _)| fragment.to_owned()).collect();
		assert_eq!(order, ["3Foo", "P3Foo", "3Bar"]);
	}

	#[test]
	fn duplicate_registration_fails() {
		let mut subs = SubstitutionTable::new();
		subs.register("Pi".to_owned()).expect("first registration");

		let err = subs.register("Pi".to_owned()).expect_err("duplicate should fail");
		assert_eq!(err, MangleError::DuplicateSubstitution { fragment: "Pi".to_owned() });
		assert_eq!(subs.len(), 1);
	}
}
