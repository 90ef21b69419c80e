#![allow(missing_docs)]

use clap::{Parser, Subcommand};

mod cmd;

#[derive(Parser)]
#[command(name = "classy", about = "Itanium C++ symbol mangling and class project tools")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Mangle a full signature.
	Mangle(cmd::mangle::Args),
	/// Compose a signature from its parts and mangle it.
	Compose(cmd::compose::Args),
	/// Create an empty project file.
	Init(cmd::init::Args),
	/// Manage project typedefs.
	Typedef(cmd::typedef::Args),
	/// Manage project classes.
	Class(cmd::class::Args),
	/// Manage methods, virtuals, and overrides.
	Method(cmd::method::Args),
	/// Manage pure/deleted virtual stub addresses.
	Stub(cmd::stub::Args),
	/// List mangled symbols of addressed methods.
	Symbols(cmd::symbols::Args),
	/// Render a C++ header for the project.
	Header(cmd::header::Args),
}

fn main() {
	init_tracing();
	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

/// Install a stderr subscriber when `RUST_LOG` is set.
fn init_tracing() {
	use tracing_subscriber::{EnvFilter, fmt, prelude::*};

	if std::env::var_os("RUST_LOG").is_some() {
		tracing_subscriber::registry()
			.with(fmt::layer().with_writer(std::io::stderr).with_target(true).with_level(true))
			.with(EnvFilter::from_default_env())
			.init();
	}
}

fn run() -> classy::project::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Mangle(args) => cmd::mangle::run(args),
		Commands::Compose(args) => cmd::compose::run(args),
		Commands::Init(args) => cmd::init::run(args),
		Commands::Typedef(args) => cmd::typedef::run(args),
		Commands::Class(args) => cmd::class::run(args),
		Commands::Method(args) => cmd::method::run(args),
		Commands::Stub(args) => cmd::stub::run(args),
		Commands::Symbols(args) => cmd::symbols::run(args),
		Commands::Header(args) => cmd::header::run(args),
	}
}
