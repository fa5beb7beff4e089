use crate::nbt::bytes::Cursor;
use crate::nbt::list::{Elements, read_elements};
use crate::nbt::{Compound, List, ListData, NbtError, Result, TagKind, Value};

/// Runtime limits and behavior switches for NBT decoding.
#[derive(Debug, Clone)]
pub struct DecodeOptions {
	/// Maximum compound nesting depth, counting the root as depth 0.
	pub max_depth: u32,
	/// Maximum declared element count for arrays and lists.
	pub max_array_len: usize,
	/// Error when bytes remain after the root terminator.
	pub strict_trailing: bool,
}

impl Default for DecodeOptions {
	fn default() -> Self {
		Self {
			max_depth: 512,
			max_array_len: 16 * 1024 * 1024,
			strict_trailing: false,
		}
	}
}

/// Decode one uncompressed NBT document with default options.
pub fn decode(bytes: &[u8]) -> Result<Compound> {
	decode_with_options(bytes, &DecodeOptions::default())
}

/// Decode one uncompressed NBT document.
pub fn decode_with_options(bytes: &[u8], opt: &DecodeOptions) -> Result<Compound> {
	let mut cursor = Cursor::new(bytes);
	let root = decode_root(&mut cursor, opt)?;

	if opt.strict_trailing && cursor.remaining() > 0 {
		return Err(NbtError::TrailingBytes {
			at: cursor.pos(),
			rem: cursor.remaining(),
		});
	}

	Ok(root)
}

/// Read the root tag and name, then decode the root compound body.
pub fn decode_root(cursor: &mut Cursor<'_>, opt: &DecodeOptions) -> Result<Compound> {
	let tag = cursor.read_u8()?;
	if tag != TagKind::Compound.id() {
		return Err(NbtError::NotCompoundRoot { tag });
	}

	let name = cursor.read_string()?;
	decode_compound(cursor, name, opt, 0)
}

/// Open container waiting for the compound currently being filled.
enum Frame {
	/// Enclosing compound; the finished child becomes a named member.
	Member(Compound),
	/// Compound that owns a list of compounds; the finished child becomes the
	/// next element and `remaining` more elements follow it.
	Element {
		parent: Compound,
		name: String,
		items: Vec<Compound>,
		remaining: usize,
	},
}

/// Decode compound members up to and including the matching `TAG_End`.
///
/// Nested compounds, including the elements of compound lists, are tracked
/// on an explicit stack of open frames instead of call recursion. Each
/// `TAG_End` pops back to the enclosing frame and files the finished child
/// there. The terminator of the frame this call started with ends the call.
pub fn decode_compound(cursor: &mut Cursor<'_>, name: String, opt: &DecodeOptions, depth: u32) -> Result<Compound> {
	check_depth(depth, opt)?;

	let mut open: Vec<Frame> = Vec::new();
	let mut current = Compound::new(name);

	loop {
		let at = cursor.pos();
		let tag = cursor.read_u8()?;
		let kind = TagKind::from_u8(tag).ok_or(NbtError::UnknownTag { tag, at })?;
		let level = depth + open.len() as u32;

		let (name, value) = match kind {
			TagKind::End => {
				match open.pop() {
					None => return Ok(current),
					Some(Frame::Member(parent)) => {
						let child = std::mem::replace(&mut current, parent);
						current.insert(child.name().to_owned(), Value::Compound(child));
					}
					Some(Frame::Element {
						parent,
						name,
						mut items,
						remaining,
					}) => {
						items.push(std::mem::take(&mut current));
						if remaining > 0 {
							open.push(Frame::Element {
								parent,
								name,
								items,
								remaining: remaining - 1,
							});
						} else {
							current = parent;
							let list = List::new(name.clone(), TagKind::Compound, ListData::Compound(items));
							current.insert(name, Value::List(list));
						}
					}
				}
				continue;
			}
			TagKind::Compound => {
				let name = cursor.read_string()?;
				check_depth(level + 1, opt)?;
				open.push(Frame::Member(std::mem::replace(&mut current, Compound::new(name))));
				continue;
			}
			TagKind::List => {
				let name = cursor.read_string()?;
				match read_elements(cursor, opt)? {
					(kind, Elements::Data(data)) => (name.clone(), Value::List(List::new(name, kind, data))),
					(kind, Elements::Compounds(0)) => {
						(name.clone(), Value::List(List::new(name, kind, ListData::Compound(Vec::new()))))
					}
					(_, Elements::Compounds(len)) => {
						check_depth(level + 1, opt)?;
						open.push(Frame::Element {
							parent: std::mem::take(&mut current),
							name,
							items: Vec::with_capacity(len.min(cursor.remaining())),
							remaining: len - 1,
						});
						continue;
					}
				}
			}
			TagKind::Byte => (cursor.read_string()?, Value::Byte(cursor.read_i8()?)),
			TagKind::Short => (cursor.read_string()?, Value::Short(cursor.read_i16()?)),
			TagKind::Int => (cursor.read_string()?, Value::Int(cursor.read_i32()?)),
			TagKind::Long => (cursor.read_string()?, Value::Long(cursor.read_i64()?)),
			TagKind::Float => (cursor.read_string()?, Value::Float(cursor.read_f32()?)),
			TagKind::Double => (cursor.read_string()?, Value::Double(cursor.read_f64()?)),
			TagKind::String => (cursor.read_string()?, Value::String(cursor.read_string()?)),
			TagKind::ByteArray => {
				let name = cursor.read_string()?;
				let len = read_checked_len(cursor, opt)?;
				(name, Value::ByteArray(read_sequence(cursor, len, 1, Cursor::read_i8)?))
			}
			TagKind::IntArray => {
				let name = cursor.read_string()?;
				let len = read_checked_len(cursor, opt)?;
				(name, Value::IntArray(read_sequence(cursor, len, 4, Cursor::read_i32)?))
			}
		};

		current.insert(name, value);
	}
}

fn check_depth(depth: u32, opt: &DecodeOptions) -> Result<()> {
	if depth >= opt.max_depth {
		return Err(NbtError::DepthExceeded { max_depth: opt.max_depth });
	}
	Ok(())
}

/// Read a signed `i32` element count and validate it against options.
pub(crate) fn read_checked_len(cursor: &mut Cursor<'_>, opt: &DecodeOptions) -> Result<usize> {
	let len = cursor.read_len()?;
	if len > opt.max_array_len {
		return Err(NbtError::LengthTooLarge {
			len,
			max: opt.max_array_len,
		});
	}
	Ok(len)
}

/// Read `len` elements; capacity is bounded by what the input could still hold.
pub(crate) fn read_sequence<'a, T>(
	cursor: &mut Cursor<'a>,
	len: usize,
	min_size: usize,
	mut read: impl FnMut(&mut Cursor<'a>) -> Result<T>,
) -> Result<Vec<T>> {
	let mut out = Vec::with_capacity(len.min(cursor.remaining() / min_size.max(1)));
	for _ in 0..len {
		out.push(read(cursor)?);
	}
	Ok(out)
}
