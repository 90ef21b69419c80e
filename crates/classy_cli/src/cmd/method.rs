use std::path::PathBuf;

use classy::project::{MethodId, Project, VirtualTarget};

use crate::cmd::util::{SignatureArgs, addr_hex, emit_json, parse_address};

#[derive(clap::Args)]
pub struct Args {
	pub project: PathBuf,
	#[command(subcommand)]
	pub action: Action,
}

/// Where a vtable slot points.
#[derive(clap::Args)]
#[group(required = true, multiple = false)]
pub struct TargetArgs {
	/// Vtable entry value; registered stub addresses become pure/deleted.
	#[arg(long)]
	pub addr: Option<String>,
	#[arg(long)]
	pub pure: bool,
	#[arg(long)]
	pub deleted: bool,
}

impl TargetArgs {
	fn resolve(&self, project: &Project) -> classy::project::Result<VirtualTarget> {
		if let Some(addr) = &self.addr {
			return Ok(project.classify_target(parse_address(addr)?));
		}
		// The argument group guarantees exactly one of the three.
		Ok(if self.pure { VirtualTarget::PureVirtual } else { VirtualTarget::Deleted })
	}
}

#[derive(clap::Subcommand)]
pub enum Action {
	/// Add a regular method, or a free function without `--class`.
	Add {
		#[arg(long)]
		class: Option<String>,
		#[command(flatten)]
		signature: SignatureArgs,
		#[arg(long)]
		addr: Option<String>,
	},
	/// Append a virtual method to a class vtable.
	Virtual {
		#[arg(long)]
		class: String,
		#[command(flatten)]
		signature: SignatureArgs,
		#[command(flatten)]
		target: TargetArgs,
	},
	/// Override an inherited vtable slot.
	Override {
		#[arg(long)]
		class: String,
		#[arg(long)]
		slot: usize,
		#[command(flatten)]
		target: TargetArgs,
	},
	/// Replace a method's signature.
	Sign {
		id: usize,
		#[command(flatten)]
		signature: SignatureArgs,
	},
	/// Remove a method.
	Remove { id: usize },
	/// Print methods with their symbols.
	List {
		#[arg(long)]
		class: Option<String>,
		#[arg(long)]
		json: bool,
	},
}

/// Inspect or edit project methods.
pub fn run(args: Args) -> classy::project::Result<()> {
	let mut project = Project::open(&args.project)?;

	let id = match args.action {
		Action::Add { class, signature, addr } => {
			let owner = class.map(|class| project.class_id(&class)).transpose()?;
			let owner_name = owner.map(|owner| project.class(owner).map(|class| class.name.clone())).transpose()?;
			let fields = signature.fields(owner_name.as_deref());
			fields.mangle(project.typedefs())?;
			let address = addr.as_deref().map(parse_address).transpose()?;
			project.add_method(owner, fields.to_signature(), address)?
		}
		Action::Virtual { class, signature, target } => {
			let owner = project.class_id(&class)?;
			let fields = signature.fields(Some(&class));
			fields.mangle(project.typedefs())?;
			let target = target.resolve(&project)?;
			project.add_virtual(owner, fields.to_signature(), target)?
		}
		Action::Override { class, slot, target } => {
			let owner = project.class_id(&class)?;
			let target = target.resolve(&project)?;
			project.add_override(owner, slot, target)?
		}
		Action::Sign { id, signature } => {
			let id = MethodId::new(id);
			let method = project.method(id)?;
			let owner_name = project.owner_name(method)?.map(str::to_owned);
			let fields = signature.fields(owner_name.as_deref());
			fields.mangle(project.typedefs())?;
			project.set_signature(id, fields.to_signature())?;
			id
		}
		Action::Remove { id } => {
			project.remove_method(MethodId::new(id))?;
			return project.save(&args.project);
		}
		Action::List { class, json } => return list(&project, class.as_deref(), json),
	};

	project.save(&args.project)?;
	println!("{id}\t{}", project.mangled_name(id)?);
	Ok(())
}

fn list(project: &Project, class: Option<&str>, json: bool) -> classy::project::Result<()> {
	let filter = class.map(|class| project.class_id(class)).transpose()?;

	let mut rows = Vec::new();
	for (id, method) in project.methods() {
		if filter.is_some() && method.owner != filter {
			continue;
		}
		let owner = project.owner_name(method)?;
		rows.push(MethodJson {
			id: id.index(),
			owner: owner.map(str::to_owned),
			kind: method.kind.type_name(),
			slot: method.kind.slot(),
			address: method.address.map(addr_hex),
			signature: method.signature.render(owner, true),
			symbol: project.mangled_name(id)?,
		});
	}

	if json {
		return emit_json(&rows);
	}

	println!("id\tkind\tslot\taddress\tsymbol\tsignature");
	for row in &rows {
		println!(
			"{}\t{}\t{}\t{}\t{}\t{}",
			row.id,
			row.kind,
			row.slot.map(|slot| slot.to_string()).unwrap_or_else(|| "-".to_owned()),
			row.address.as_deref().unwrap_or("-"),
			row.symbol,
			row.signature
		);
	}
	Ok(())
}

#[derive(serde::Serialize)]
struct MethodJson {
	id: usize,
	owner: Option<String>,
	kind: &'static str,
	slot: Option<usize>,
	address: Option<String>,
	signature: String,
	symbol: String,
}
