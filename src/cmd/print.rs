use std::fmt;
use std::path::PathBuf;

use nbtdoc::nbt::{Compound, List, NbtFile, Value, ValueRef};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	#[arg(long = "max-array")]
	pub max_array: Option<usize>,
	#[arg(long = "max-depth")]
	pub max_depth: Option<u32>,
	#[arg(long = "max-string")]
	pub max_string: Option<usize>,
	#[arg(long)]
	pub json: bool,
}

/// Output truncation and formatting limits for decoded values.
#[derive(Debug, Clone, Copy)]
pub struct PrintOptions {
	/// Maximum number of members printed for a single compound.
	pub max_members_per_compound: usize,
	/// Maximum number of Unicode scalar values printed for strings.
	pub max_string_len: usize,
	/// Maximum number of elements printed for lists.
	pub max_array_items: usize,
	/// Maximum nesting depth printed below the starting node.
	pub max_print_depth: u32,
}

impl Default for PrintOptions {
	fn default() -> Self {
		Self {
			max_members_per_compound: 80,
			max_string_len: 200,
			max_array_items: 16,
			max_print_depth: 16,
		}
	}
}

/// Decode a file and dump the whole tree.
pub fn run(args: Args) -> crate::cmd::Result<()> {
	let Args {
		path,
		max_array,
		max_depth,
		max_string,
		json,
	} = args;

	let file = NbtFile::open(&path)?;
	if json {
		println!("{}", serde_json::to_string_pretty(&file.root)?);
		return Ok(());
	}

	let mut options = PrintOptions::default();
	if let Some(value) = max_array {
		options.max_array_items = value;
	}
	if let Some(value) = max_depth {
		options.max_print_depth = value;
	}
	if let Some(value) = max_string {
		options.max_string_len = value;
	}

	print!("{}", Dump::root(&file.root, options));
	Ok(())
}

/// Classic indented `TAG_*` dump of a node and its children.
pub struct Dump<'a> {
	target: ValueRef<'a>,
	label: Option<&'a str>,
	options: PrintOptions,
}

impl<'a> Dump<'a> {
	/// Dump a document root under its own name.
	pub fn root(root: &'a Compound, options: PrintOptions) -> Self {
		Self {
			target: ValueRef::Compound(root),
			label: Some(root.name()),
			options,
		}
	}

	/// Dump any resolved node; `label` is `None` for list elements.
	pub fn node(target: ValueRef<'a>, label: Option<&'a str>, options: PrintOptions) -> Self {
		Self { target, label, options }
	}
}

impl fmt::Display for Dump<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write_node(f, self.label, self.target, 0, &self.options)
	}
}

fn write_node(f: &mut fmt::Formatter<'_>, label: Option<&str>, target: ValueRef<'_>, depth: u32, options: &PrintOptions) -> fmt::Result {
	let pad = "  ".repeat(depth as usize);
	let kind = target.kind();
	let label = match label {
		Some(name) => format!("'{name}'"),
		None => "None".to_owned(),
	};

	match target {
		ValueRef::Compound(compound) | ValueRef::Value(Value::Compound(compound)) => {
			writeln!(f, "{pad}{kind}({label}): {} entries", compound.len())?;
			write_compound(f, compound, depth, options)
		}
		ValueRef::Value(Value::List(list)) => {
			writeln!(f, "{pad}{kind}({label}): {} entries of {}", list.len(), list.element_kind())?;
			write_list(f, list, depth, options)
		}
		scalar => writeln!(f, "{pad}{kind}({label}): {}", scalar_text(scalar, options)),
	}
}

fn write_compound(f: &mut fmt::Formatter<'_>, compound: &Compound, depth: u32, options: &PrintOptions) -> fmt::Result {
	if compound.is_empty() {
		return Ok(());
	}
	let pad = "  ".repeat(depth as usize + 1);
	if depth >= options.max_print_depth {
		return writeln!(f, "{pad}...");
	}

	for (name, value) in compound.iter().take(options.max_members_per_compound) {
		write_node(f, Some(name), ValueRef::Value(value), depth + 1, options)?;
	}
	if compound.len() > options.max_members_per_compound {
		writeln!(f, "{pad}... {} more members", compound.len() - options.max_members_per_compound)?;
	}
	Ok(())
}

fn write_list(f: &mut fmt::Formatter<'_>, list: &List, depth: u32, options: &PrintOptions) -> fmt::Result {
	if list.is_empty() {
		return Ok(());
	}
	let pad = "  ".repeat(depth as usize + 1);
	if depth >= options.max_print_depth {
		return writeln!(f, "{pad}...");
	}

	for item in list.iter().take(options.max_array_items) {
		write_node(f, None, item, depth + 1, options)?;
	}
	if list.len() > options.max_array_items {
		writeln!(f, "{pad}... {} more", list.len() - options.max_array_items)?;
	}
	Ok(())
}

fn scalar_text(target: ValueRef<'_>, options: &PrintOptions) -> String {
	match target {
		ValueRef::Value(value) => match value {
			Value::Byte(v) => v.to_string(),
			Value::Short(v) => v.to_string(),
			Value::Int(v) => v.to_string(),
			Value::Long(v) => v.to_string(),
			Value::Float(v) => v.to_string(),
			Value::Double(v) => v.to_string(),
			Value::String(v) => format!("'{}'", truncate(v, options.max_string_len)),
			Value::ByteArray(items) => format!("[{} bytes]", items.len()),
			Value::IntArray(items) => format!("[{} ints]", items.len()),
			Value::List(list) => format!("[{} entries]", list.len()),
			Value::Compound(compound) => format!("{} entries", compound.len()),
		},
		ValueRef::Compound(compound) => format!("{} entries", compound.len()),
		ValueRef::Byte(v) => v.to_string(),
		ValueRef::Short(v) => v.to_string(),
		ValueRef::Int(v) => v.to_string(),
		ValueRef::Long(v) => v.to_string(),
		ValueRef::Float(v) => v.to_string(),
		ValueRef::Double(v) => v.to_string(),
		ValueRef::String(v) => format!("'{}'", truncate(v, options.max_string_len)),
	}
}

fn truncate(input: &str, max_len: usize) -> String {
	if input.chars().count() <= max_len {
		return input.to_owned();
	}
	let out: String = input.chars().take(max_len).collect();
	format!("{out}...")
}
