#![allow(missing_docs)]

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;

#[derive(Parser)]
#[command(name = "ctorschema", about = "Convert JSON values to and from constructor schemas")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Encode plain JSON into a schema.
	Encode {
		/// Input file; stdin when omitted or `-`.
		path: Option<PathBuf>,
		#[command(flatten)]
		output: OutputArgs,
		/// Maximum nesting depth, counting every non-null value.
		#[arg(long)]
		max_depth: Option<u32>,
	},
	/// Decode a schema with the builtin constructors.
	Decode {
		/// Input file; stdin when omitted or `-`.
		path: Option<PathBuf>,
		#[command(flatten)]
		output: OutputArgs,
		/// Emit plain JSON instead of a value tree.
		#[arg(long)]
		json: bool,
		/// Maximum nested-schema depth.
		#[arg(long)]
		max_depth: Option<u32>,
	},
	/// Report whether the input is schema-shaped.
	Check {
		/// Input file; stdin when omitted or `-`.
		path: Option<PathBuf>,
		#[command(flatten)]
		output: OutputArgs,
	},
	/// Encode then decode, reporting whether the value survived.
	Roundtrip {
		/// Input file; stdin when omitted or `-`.
		path: Option<PathBuf>,
		#[command(flatten)]
		output: OutputArgs,
	},
}

#[derive(Args, Clone, Copy)]
struct OutputArgs {
	/// Pretty-print JSON output.
	#[arg(long)]
	pretty: bool,
}

fn main() {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
		.with_writer(std::io::stderr)
		.init();

	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> ctorschema::schema::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Encode { path, output, max_depth } => cmd::encode::run(path, output.pretty, max_depth),
		Commands::Decode {
			path,
			output,
			json,
			max_depth,
		} => cmd::decode::run(path, output.pretty, json, max_depth),
		Commands::Check { path, output } => cmd::check::run(path, output.pretty),
		Commands::Roundtrip { path, output } => cmd::roundtrip::run(path, output.pretty),
	}
}
