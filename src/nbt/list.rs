use crate::nbt::bytes::Cursor;
use crate::nbt::decode::{decode_compound, read_checked_len, read_sequence};
use crate::nbt::{DecodeOptions, List, ListData, NbtError, Result, TagKind};

/// Decoded list elements, or the count of compound elements that follow.
pub(crate) enum Elements {
	Data(ListData),
	Compounds(usize),
}

/// Read the element tag and `i32` length, then every non-compound element.
///
/// Compound elements are left in the stream for the caller, which decodes
/// them as anonymous compounds.
pub(crate) fn read_elements(cursor: &mut Cursor<'_>, opt: &DecodeOptions) -> Result<(TagKind, Elements)> {
	let at = cursor.pos();
	let tag = cursor.read_u8()?;
	let kind = TagKind::from_u8(tag).ok_or(NbtError::UnknownTag { tag, at })?;
	let len = read_checked_len(cursor, opt)?;

	let data = match kind {
		TagKind::Byte => ListData::Byte(read_sequence(cursor, len, 1, Cursor::read_i8)?),
		TagKind::Short => ListData::Short(read_sequence(cursor, len, 2, Cursor::read_i16)?),
		TagKind::Int => ListData::Int(read_sequence(cursor, len, 4, Cursor::read_i32)?),
		TagKind::Long => ListData::Long(read_sequence(cursor, len, 8, Cursor::read_i64)?),
		TagKind::Float => ListData::Float(read_sequence(cursor, len, 4, Cursor::read_f32)?),
		TagKind::Double => ListData::Double(read_sequence(cursor, len, 8, Cursor::read_f64)?),
		TagKind::String => ListData::String(read_sequence(cursor, len, 2, Cursor::read_string)?),
		TagKind::Compound => return Ok((kind, Elements::Compounds(len))),
		TagKind::End | TagKind::ByteArray | TagKind::List | TagKind::IntArray => {
			if len > 0 {
				return Err(NbtError::UnsupportedListElement { kind: kind.as_str() });
			}
			ListData::Empty
		}
	};

	Ok((kind, Elements::Data(data)))
}

/// Decode a list payload (element tag, `i32` length, elements) after its name.
///
/// `depth` is the nesting level of the compound holding the list; compound
/// elements are decoded one level below it as independent subtrees.
pub fn decode_list(cursor: &mut Cursor<'_>, name: String, opt: &DecodeOptions, depth: u32) -> Result<List> {
	let (kind, elements) = read_elements(cursor, opt)?;
	let data = match elements {
		Elements::Data(data) => data,
		Elements::Compounds(len) => ListData::Compound(read_sequence(cursor, len, 1, |cursor| {
			decode_compound(cursor, String::new(), opt, depth + 1)
		})?),
	};

	Ok(List::new(name, kind, data))
}
