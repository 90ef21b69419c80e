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
	/// Add a class.
	Add {
		name: String,
		#[arg(long)]
		base: Option<String>,
	},
	/// Remove a leaf class and its methods.
	Remove { name: String },
	/// Rename a class together with its constructors and destructors.
	Rename { name: String, new_name: String },
	/// Print all classes.
	List {
		#[arg(long)]
		json: bool,
	},
}

/// Inspect or edit project classes.
pub fn run(args: Args) -> classy::project::Result<()> {
	let mut project = Project::open(&args.project)?;

	match args.action {
		Action::Add { name, base } => {
			let base = base.map(|base| project.class_id(&base)).transpose()?;
			let id = project.add_class(&name, base)?;
			project.save(&args.project)?;
			println!("{id}");
			Ok(())
		}
		Action::Remove { name } => {
			let id = project.class_id(&name)?;
			project.remove_class(id)?;
			project.save(&args.project)
		}
		Action::Rename { name, new_name } => {
			let id = project.class_id(&name)?;
			project.rename_class(id, &new_name)?;
			project.save(&args.project)
		}
		Action::List { json } => list(&project, json),
	}
}

fn list(project: &Project, json: bool) -> classy::project::Result<()> {
	let mut rows = Vec::new();
	for (id, class) in project.classes() {
		rows.push(ClassJson {
			id: id.index(),
			name: class.name.clone(),
			base: class.base.map(|base| project.class(base).map(|base| base.name.clone())).transpose()?,
			vtable_len: project.vtable(id)?.len(),
			methods: project.class_methods(id).len(),
		});
	}

	if json {
		return emit_json(&rows);
	}

	println!("id\tname\tbase\tvtable\tmethods");
	for row in &rows {
		println!(
			"{}\t{}\t{}\t{}\t{}",
			row.id,
			row.name,
			row.base.as_deref().unwrap_or("-"),
			row.vtable_len,
			row.methods
		);
	}
	Ok(())
}

#[derive(serde::Serialize)]
struct ClassJson {
	id: usize,
	name: String,
	base: Option<String>,
	vtable_len: usize,
	methods: usize,
}
