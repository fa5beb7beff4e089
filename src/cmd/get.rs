use std::path::PathBuf;

use nbtdoc::nbt::{NbtFile, NbtPath, PathStep};

use crate::cmd::print::{Dump, PrintOptions};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	/// Path expression, e.g. `nested compound test.ham.name` or `"listTest (long)"[3]`.
	pub expr: String,
	#[arg(long)]
	pub json: bool,
}

/// Resolve one path expression and print what it points at.
pub fn run(args: Args) -> crate::cmd::Result<()> {
	let Args { path, expr, json } = args;

	let query = NbtPath::parse(&expr)?;
	let file = NbtFile::open(&path)?;
	let found = query.resolve(&file.root)?;

	if json {
		println!("{}", serde_json::to_string_pretty(&found)?);
		return Ok(());
	}

	let label = match query.steps.last() {
		Some(PathStep::Member(name)) => Some(name.as_str()),
		_ => None,
	};
	print!("{}", Dump::node(found, label, PrintOptions::default()));
	Ok(())
}
