use std::fs;
use std::path::PathBuf;

use classy::project::Project;

#[derive(clap::Args)]
pub struct Args {
	pub project: PathBuf,
	/// Render only this class.
	#[arg(long)]
	pub class: Option<String>,
	/// Write to a file instead of stdout.
	#[arg(long, short)]
	pub output: Option<PathBuf>,
}

/// Render the project as C++ declarations.
pub fn run(args: Args) -> classy::project::Result<()> {
	let project = Project::open(&args.project)?;
	let text = match args.class {
		Some(name) => project.class_definition(project.class_id(&name)?)?,
		None => project.render_header()?,
	};

	match args.output {
		Some(path) => {
			fs::write(&path, text)?;
			tracing::debug!(path = %path.display(), "wrote header");
		}
		None => print!("{text}"),
	}
	Ok(())
}
