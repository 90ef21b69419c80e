const BASE36: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Encode the `n`-th substitution as an Itanium `<substitution>` back-reference.
///
/// `0` is `S_`, `1` is `S0_`, `37` is `S10_`.
pub fn encode_seqid(n: usize) -> String {
	let Some(mut value) = n.checked_sub(1) else {
		return "S_".to_owned();
	};

	let mut digits = Vec::new();
	loop {
		digits.push(BASE36[value % 36]);
		value /= 36;
		if value == 0 {
			break;
		}
	}
	digits.reverse();

	let mut out = String::with_capacity(digits.len() + 2);
	out.push('S');
	out.extend(digits.into_iter().map(char::from));
	out.push('_');
	out
}
