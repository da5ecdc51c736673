#![allow(missing_docs)]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod cmd;

#[derive(Parser)]
#[command(name = "jsonkey", about = "Key-path probing for JSON documents")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Resolve a key path and print the value found there.
	Get {
		path: PathBuf,
		key_path: String,
		#[arg(long)]
		json: bool,
	},
	/// List the keys of the mapping at a key path (root when omitted).
	Keys {
		path: PathBuf,
		key_path: Option<String>,
	},
	/// Attempt a typed decode at a key path and report the outcome.
	Probe {
		path: PathBuf,
		key_path: String,
		#[arg(long = "as")]
		shape: String,
	},
}

fn main() {
	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> Result<(), cmd::CmdError> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Get { path, key_path, json } => cmd::get::run(path, &key_path, json),
		Commands::Keys { path, key_path } => cmd::keys::run(path, key_path.as_deref()),
		Commands::Probe { path, key_path, shape } => cmd::probe::run(path, &key_path, &shape),
	}
}
