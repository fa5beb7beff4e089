#![allow(missing_docs)]

use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;

#[derive(Parser)]
#[command(name = "nbtdoc", about = "Named Binary Tag (NBT) inspection tools")]
struct Cli {
	/// Increase log verbosity (-v info, -vv debug, -vvv trace).
	#[arg(short, long, action = ArgAction::Count, global = true)]
	verbose: u8,
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Summarize envelope, root, and tag usage.
	Info(cmd::info::Args),
	/// Dump the decoded tree.
	Print(cmd::print::Args),
	/// Resolve one path expression.
	Get(cmd::get::Args),
}

fn main() {
	let cli = Cli::parse();
	init_tracing(cli.verbose);

	if let Err(err) = run(cli.command) {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn init_tracing(verbose: u8) {
	let filter = match verbose {
		0 => EnvFilter::new("warn"),
		1 => EnvFilter::new("info"),
		2 => EnvFilter::new("debug"),
		_ => EnvFilter::new("trace"),
	};

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_target(false)
		.with_writer(std::io::stderr)
		.init();
}

fn run(command: Commands) -> cmd::Result<()> {
	match command {
		Commands::Info(args) => cmd::info::run(args),
		Commands::Print(args) => cmd::print::run(args),
		Commands::Get(args) => cmd::get::run(args),
	}
}
