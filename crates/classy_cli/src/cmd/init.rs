use std::io;
use std::path::PathBuf;

use classy::project::Project;

#[derive(clap::Args)]
pub struct Args {
	pub project: PathBuf,
	/// Overwrite an existing file.
	#[arg(long)]
	pub force: bool,
}

/// Write an empty project file.
pub fn run(args: Args) -> classy::project::Result<()> {
	if args.project.exists() && !args.force {
		return Err(io::Error::new(io::ErrorKind::AlreadyExists, format!("{} already exists", args.project.display())).into());
	}

	Project::new().save(&args.project)?;
	println!("created {}", args.project.display());
	Ok(())
}
