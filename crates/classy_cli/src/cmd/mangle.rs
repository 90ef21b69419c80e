use std::path::PathBuf;

use classy::mangle::{Structors, mangle_function};

use crate::cmd::util::{emit_json, load_typedefs};

#[derive(clap::Args)]
pub struct Args {
	pub signature: String,
	/// Project file whose typedefs apply.
	#[arg(long)]
	pub project: Option<PathBuf>,
	#[arg(long)]
	pub ctor: Option<u8>,
	#[arg(long)]
	pub dtor: Option<u8>,
	#[arg(long)]
	pub json: bool,
}

/// Mangle a signature typed as a single string.
pub fn run(args: Args) -> classy::project::Result<()> {
	let Args {
		signature,
		project,
		ctor,
		dtor,
		json,
	} = args;

	let typedefs = load_typedefs(project.as_deref())?;
	let symbol = mangle_function(&signature, &typedefs, Structors { ctor, dtor })?;

	if json {
		return emit_json(&MangleJson {
			signature: signature.trim(),
			symbol: &symbol,
		});
	}

	println!("{symbol}");
	Ok(())
}

#[derive(serde::Serialize)]
struct MangleJson<'a> {
	signature: &'a str,
	symbol: &'a str,
}
