use std::path::PathBuf;

use crate::cmd::util::{SignatureArgs, emit_json, load_typedefs};

#[derive(clap::Args)]
pub struct Args {
	#[command(flatten)]
	pub signature: SignatureArgs,
	#[arg(long)]
	pub owner: Option<String>,
	/// Project file whose typedefs apply.
	#[arg(long)]
	pub project: Option<PathBuf>,
	#[arg(long)]
	pub json: bool,
}

/// Compose a signature from separate fields, then mangle it.
pub fn run(args: Args) -> classy::project::Result<()> {
	let typedefs = load_typedefs(args.project.as_deref())?;
	let fields = args.signature.fields(args.owner.as_deref());
	let signature = fields.compose();
	let symbol = fields.mangle(&typedefs)?;

	if args.json {
		return emit_json(&ComposeJson {
			signature: &signature,
			symbol: &symbol,
			variant: fields.structor_label(),
		});
	}

	println!("signature: {signature}");
	println!("symbol: {symbol}");
	Ok(())
}

#[derive(serde::Serialize)]
struct ComposeJson<'a> {
	signature: &'a str,
	symbol: &'a str,
	variant: Option<&'static str>,
}
