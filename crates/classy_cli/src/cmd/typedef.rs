use std::path::PathBuf;

use classy::project::Project;

use crate::cmd::util::emit_json;

#[derive(clap::Args)]
pub struct Args {
	pub project: PathBuf,
	#[command(subcommand)]
	pub action: Action,
}

#[derive(clap::Subcommand)]
pub enum Action {
	/// Print all typedefs.
	List {
		#[arg(long)]
		json: bool,
	},
	/// Define or redefine an alias.
	Set { alias: String, value: String },
	/// Remove an alias.
	Remove { alias: String },
}

/// Inspect or edit the project's typedef table.
pub fn run(args: Args) -> classy::project::Result<()> {
	let mut project = Project::open(&args.project)?;

	match args.action {
		Action::List { json } => {
			if json {
				return emit_json(project.typedefs());
			}
			print!("{}", project.render_typedefs());
			Ok(())
		}
		Action::Set { alias, value } => {
			project.set_typedef(&alias, &value)?;
			project.save(&args.project)
		}
		Action::Remove { alias } => {
			project.remove_typedef(&alias)?;
			project.save(&args.project)
		}
	}
}
