use std::path::Path;

use classy::mangle::Typedefs;
use classy::project::{Project, ProjectError, Result, SignatureFields};
use serde::Serialize;

/// Parse decimal or `0x`-prefixed hex address literal.
pub(crate) fn parse_address(value: &str) -> Result<u64> {
	let parsed = if let Some(stripped) = value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
		u64::from_str_radix(stripped, 16)
	} else {
		value.parse::<u64>()
	};

	parsed.map_err(|_| ProjectError::InvalidAddress { value: value.to_owned() })
}

/// Render an address as lowercase hex.
pub(crate) fn addr_hex(value: u64) -> String {
	format!("0x{value:x}")
}

/// Print a pretty JSON payload on stdout.
pub(crate) fn emit_json<T: Serialize>(payload: &T) -> Result<()> {
	println!("{}", serde_json::to_string_pretty(payload)?);
	Ok(())
}

/// Typedefs of an optional project file; empty without one.
pub(crate) fn load_typedefs(project: Option<&Path>) -> Result<Typedefs> {
	match project {
		Some(path) => Ok(Project::open(path)?.typedefs().clone()),
		None => Ok(Typedefs::new()),
	}
}

/// Signature parts shared by commands that take a signature.
#[derive(clap::Args)]
pub struct SignatureArgs {
	#[arg(long)]
	pub name: String,
	#[arg(long, default_value = "")]
	pub args: String,
	#[arg(long = "return-type", default_value = "")]
	pub return_type: String,
	#[arg(long = "const")]
	pub is_const: bool,
	#[arg(long)]
	pub ctor: Option<u8>,
	#[arg(long)]
	pub dtor: Option<u8>,
}

impl SignatureArgs {
	pub(crate) fn fields(&self, owner: Option<&str>) -> SignatureFields {
		SignatureFields {
			return_type: self.return_type.clone(),
			owner: owner.unwrap_or_default().to_owned(),
			name: self.name.clone(),
			args: self.args.clone(),
			is_const: self.is_const,
			ctor: self.ctor,
			dtor: self.dtor,
		}
	}
}
