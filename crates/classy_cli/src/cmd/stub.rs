use std::path::PathBuf;

use classy::project::Project;

use crate::cmd::util::{addr_hex, emit_json, parse_address};

#[derive(clap::Args)]
pub struct Args {
	pub project: PathBuf,
	#[command(subcommand)]
	pub action: Action,
}

#[derive(clap::Subcommand)]
pub enum Action {
	/// Register a pure virtual stub address.
	Pure { addr: String },
	/// Register a deleted virtual stub address.
	Deleted { addr: String },
	/// Forget a stub address.
	Remove { addr: String },
	/// Print registered stub addresses.
	List {
		#[arg(long)]
		json: bool,
	},
}

/// Edit the vtable values that mark pure and deleted virtuals.
pub fn run(args: Args) -> classy::project::Result<()> {
	let mut project = Project::open(&args.project)?;

	match args.action {
		Action::Pure { addr } => {
			let addr = parse_address(&addr)?;
			project.deleted_virtual_vals.remove(&addr);
			project.pure_virtual_vals.insert(addr);
		}
		Action::Deleted { addr } => {
			let addr = parse_address(&addr)?;
			project.pure_virtual_vals.remove(&addr);
			project.deleted_virtual_vals.insert(addr);
		}
		Action::Remove { addr } => {
			let addr = parse_address(&addr)?;
			project.pure_virtual_vals.remove(&addr);
			project.deleted_virtual_vals.remove(&addr);
		}
		Action::List { json } => {
			let payload = StubsJson {
				pure: project.pure_virtual_vals.iter().copied().map(addr_hex).collect(),
				deleted: project.deleted_virtual_vals.iter().copied().map(addr_hex).collect(),
			};
			if json {
				return emit_json(&payload);
			}
			for addr in &payload.pure {
				println!("pure\t{addr}");
			}
			for addr in &payload.deleted {
				println!("deleted\t{addr}");
			}
			return Ok(());
		}
	}

	project.save(&args.project)
}

#[derive(serde::Serialize)]
struct StubsJson {
	pure: Vec<String>,
	deleted: Vec<String>,
}
