use std::collections::BTreeMap;
use std::path::PathBuf;

use nbtdoc::nbt::{Compound, ListData, NbtFile, TagKind, Value};
use serde::Serialize;

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	#[arg(long)]
	pub json: bool,
}

#[derive(Debug, Serialize)]
struct InfoReport {
	path: String,
	compression: &'static str,
	raw_len: usize,
	decoded_len: usize,
	root_name: String,
	member_count: usize,
	tag_counts: BTreeMap<&'static str, usize>,
}

/// Print envelope, root, and whole-tree tag statistics.
pub fn run(args: Args) -> crate::cmd::Result<()> {
	let Args { path, json } = args;

	let file = NbtFile::open(&path)?;
	let mut counts = BTreeMap::new();
	count_compound(&file.root, &mut counts);

	let report = InfoReport {
		path: path.display().to_string(),
		compression: file.compression.as_str(),
		raw_len: file.raw_len,
		decoded_len: file.decoded_len,
		root_name: file.root.name().to_owned(),
		member_count: file.root.len(),
		tag_counts: counts.into_iter().map(|(kind, count)| (kind.as_str(), count)).collect(),
	};

	if json {
		println!("{}", serde_json::to_string_pretty(&report)?);
		return Ok(());
	}

	println!("path: {}", report.path);
	println!("compression: {}", report.compression);
	println!("raw_len: {}", report.raw_len);
	println!("decoded_len: {}", report.decoded_len);
	println!("root_name: {}", report.root_name);
	println!("member_count: {}", report.member_count);
	println!("tag_counts:");
	for (kind, count) in &report.tag_counts {
		println!("  {kind}: {count}");
	}

	Ok(())
}

/// Count every tag below `compound`, list elements included.
fn count_compound(compound: &Compound, counts: &mut BTreeMap<TagKind, usize>) {
	for (_, value) in compound.iter() {
		*counts.entry(value.kind()).or_insert(0) += 1;
		match value {
			Value::Compound(child) => count_compound(child, counts),
			Value::List(list) => {
				if !list.is_empty() {
					*counts.entry(list.element_kind()).or_insert(0) += list.len();
				}
				if let ListData::Compound(items) = list.data() {
					for item in items {
						count_compound(item, counts);
					}
				}
			}
			_ => {}
		}
	}
}
