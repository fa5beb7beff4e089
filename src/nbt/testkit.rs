//! Byte builder for hand-assembled NBT documents in unit tests.

use crate::nbt::TagKind;

/// Append-only big-endian NBT byte writer.
#[derive(Debug, Default)]
pub(crate) struct NbtWriter {
	bytes: Vec<u8>,
}

impl NbtWriter {
	pub(crate) fn new() -> Self {
		Self::default()
	}

	pub(crate) fn raw(mut self, bytes: &[u8]) -> Self {
		self.bytes.extend_from_slice(bytes);
		self
	}

	/// Unnamed length-prefixed string payload.
	pub(crate) fn string(mut self, value: &str) -> Self {
		self.bytes.extend_from_slice(&(value.len() as u16).to_be_bytes());
		self.bytes.extend_from_slice(value.as_bytes());
		self
	}

	fn named(mut self, kind: TagKind, name: &str) -> Self {
		self.bytes.push(kind.id());
		self.string(name)
	}

	/// Element kind and count of a list payload.
	pub(crate) fn list_header(mut self, kind: TagKind, len: i32) -> Self {
		self.bytes.push(kind.id());
		self.bytes.extend_from_slice(&len.to_be_bytes());
		self
	}

	pub(crate) fn compound(self, name: &str) -> Self {
		self.named(TagKind::Compound, name)
	}

	pub(crate) fn end(mut self) -> Self {
		self.bytes.push(TagKind::End.id());
		self
	}

	pub(crate) fn byte(self, name: &str, value: i8) -> Self {
		self.named(TagKind::Byte, name).raw(&value.to_be_bytes())
	}

	pub(crate) fn short(self, name: &str, value: i16) -> Self {
		self.named(TagKind::Short, name).raw(&value.to_be_bytes())
	}

	pub(crate) fn int(self, name: &str, value: i32) -> Self {
		self.named(TagKind::Int, name).raw(&value.to_be_bytes())
	}

	pub(crate) fn long(self, name: &str, value: i64) -> Self {
		self.named(TagKind::Long, name).raw(&value.to_be_bytes())
	}

	pub(crate) fn float(self, name: &str, value: f32) -> Self {
		self.named(TagKind::Float, name).raw(&value.to_be_bytes())
	}

	pub(crate) fn double(self, name: &str, value: f64) -> Self {
		self.named(TagKind::Double, name).raw(&value.to_be_bytes())
	}

	pub(crate) fn string_tag(self, name: &str, value: &str) -> Self {
		self.named(TagKind::String, name).string(value)
	}

	pub(crate) fn byte_array(self, name: &str, values: &[i8]) -> Self {
		let mut out = self.named(TagKind::ByteArray, name).raw(&(values.len() as i32).to_be_bytes());
		for value in values {
			out = out.raw(&value.to_be_bytes());
		}
		out
	}

	pub(crate) fn int_array(self, name: &str, values: &[i32]) -> Self {
		let mut out = self.named(TagKind::IntArray, name).raw(&(values.len() as i32).to_be_bytes());
		for value in values {
			out = out.raw(&value.to_be_bytes());
		}
		out
	}

	/// Named list tag header; elements follow via [`NbtWriter::raw`] or tag helpers.
	pub(crate) fn list(self, name: &str, kind: TagKind, len: i32) -> Self {
		self.named(TagKind::List, name).list_header(kind, len)
	}

	pub(crate) fn len(&self) -> usize {
		self.bytes.len()
	}

	pub(crate) fn finish(self) -> Vec<u8> {
		self.bytes
	}
}

/// Uncompressed encoding of the classic `bigtest.nbt` document.
pub(crate) fn bigtest() -> Vec<u8> {
	let byte_values: Vec<i8> = (0_i32..1000).map(|n| ((n * n * 255 + n * 7) % 100) as i8).collect();

	let mut writer = NbtWriter::new()
		.compound("Level")
		.compound("nested compound test")
		.compound("egg")
		.string_tag("name", "Eggbert")
		.float("value", 0.5)
		.end()
		.compound("ham")
		.string_tag("name", "Hampus")
		.float("value", 0.75)
		.end()
		.end()
		.int("intTest", 2_147_483_647)
		.byte("byteTest", 127)
		.string_tag("stringTest", "HELLO WORLD THIS IS A TEST STRING ÅÄÖ!")
		.list("listTest (long)", TagKind::Long, 5);
	for value in 11_i64..=15 {
		writer = writer.raw(&value.to_be_bytes());
	}

	writer = writer
		.double("doubleTest", 0.493_128_713_218_231_48)
		.float("floatTest", 0.498_231_47)
		.long("longTest", 9_223_372_036_854_775_807)
		.list("listTest (compound)", TagKind::Compound, 2);
	for idx in 0..2 {
		writer = writer
			.long("created-on", 1_264_099_775_885)
			.string_tag("name", &format!("Compound tag #{idx}"))
			.end();
	}

	writer
		.byte_array(
			"byteArrayTest (the first 1000 values of (n*n*255+n*7)%100, starting with n=0 (0, 62, 34, 16, 8, ...))",
			&byte_values,
		)
		.short("shortTest", 32767)
		.end()
		.finish()
}
