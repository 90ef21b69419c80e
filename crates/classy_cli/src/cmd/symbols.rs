use std::path::PathBuf;

use classy::project::Project;

use crate::cmd::util::{addr_hex, emit_json};

#[derive(clap::Args)]
pub struct Args {
	pub project: PathBuf,
	#[arg(long)]
	pub json: bool,
}

/// Print `(address, symbol)` pairs for a disassembler to apply.
pub fn run(args: Args) -> classy::project::Result<()> {
	let project = Project::open(&args.project)?;
	let symbols = project.symbols()?;

	if args.json {
		let payload = SymbolsJson {
			path: args.project.display().to_string(),
			symbols: symbols
				.iter()
				.map(|entry| SymbolJson {
					address: addr_hex(entry.address),
					symbol: entry.symbol.clone(),
					method: entry.method.index(),
					owner: entry.owner.clone(),
					kind: entry.kind,
					signature: entry.signature.clone(),
				})
				.collect(),
		};
		return emit_json(&payload);
	}

	for entry in &symbols {
		println!("{}\t{}\t{}", addr_hex(entry.address), entry.symbol, entry.signature);
	}
	Ok(())
}

#[derive(serde::Serialize)]
struct SymbolJson {
	address: String,
	symbol: String,
	method: usize,
	owner: Option<String>,
	kind: &'static str,
	signature: String,
}

#[derive(serde::Serialize)]
struct SymbolsJson {
	path: String,
	symbols: Vec<SymbolJson>,
}
