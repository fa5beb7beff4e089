use crate::nbt::{NbtError, Result};

/// Bounded big-endian cursor over an immutable byte slice.
pub struct Cursor<'a> {
	bytes: &'a [u8],
	pos: usize,
}

impl<'a> Cursor<'a> {
	/// Create a cursor at position 0.
	pub fn new(bytes: &'a [u8]) -> Self {
		Self { bytes, pos: 0 }
	}

	/// Return current byte offset.
	pub fn pos(&self) -> usize {
		self.pos
	}

	/// Return remaining unread bytes.
	pub fn remaining(&self) -> usize {
		self.bytes.len().saturating_sub(self.pos)
	}

	/// Read exactly `n` bytes and advance cursor.
	pub fn read_exact(&mut self, n: usize) -> Result<&'a [u8]> {
		if n > self.remaining() {
			return Err(NbtError::UnexpectedEof {
				at: self.pos,
				need: n,
				rem: self.remaining(),
			});
		}

		let start = self.pos;
		self.pos += n;
		Ok(&self.bytes[start..self.pos])
	}

	fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
		let raw = self.read_exact(N)?;
		let mut buf = [0_u8; N];
		buf.copy_from_slice(raw);
		Ok(buf)
	}

	/// Read one unsigned byte (tag ids).
	pub fn read_u8(&mut self) -> Result<u8> {
		Ok(self.read_array::<1>()?[0])
	}

	/// Read a signed byte.
	pub fn read_i8(&mut self) -> Result<i8> {
		Ok(i8::from_be_bytes(self.read_array()?))
	}

	/// Read a big-endian `u16`.
	pub fn read_u16(&mut self) -> Result<u16> {
		Ok(u16::from_be_bytes(self.read_array()?))
	}

	/// Read a big-endian `i16`.
	pub fn read_i16(&mut self) -> Result<i16> {
		Ok(i16::from_be_bytes(self.read_array()?))
	}

	/// Read a big-endian `i32`.
	pub fn read_i32(&mut self) -> Result<i32> {
		Ok(i32::from_be_bytes(self.read_array()?))
	}

	/// Read a big-endian `i64`.
	pub fn read_i64(&mut self) -> Result<i64> {
		Ok(i64::from_be_bytes(self.read_array()?))
	}

	/// Read a big-endian IEEE-754 single.
	pub fn read_f32(&mut self) -> Result<f32> {
		Ok(f32::from_be_bytes(self.read_array()?))
	}

	/// Read a big-endian IEEE-754 double.
	pub fn read_f64(&mut self) -> Result<f64> {
		Ok(f64::from_be_bytes(self.read_array()?))
	}

	/// Read a `u16`-length-prefixed UTF-8 string.
	pub fn read_string(&mut self) -> Result<String> {
		let len = usize::from(self.read_u16()?);
		let at = self.pos;
		let raw = self.read_exact(len)?;
		std::str::from_utf8(raw)
			.map(str::to_owned)
			.map_err(|_| NbtError::InvalidString { at })
	}

	/// Read a signed 32-bit element count, rejecting negatives.
	pub fn read_len(&mut self) -> Result<usize> {
		let at = self.pos;
		let len = self.read_i32()?;
		usize::try_from(len).map_err(|_| NbtError::NegativeLength { len, at })
	}
}

#[cfg(test)]
mod tests {
	use super::Cursor;
	use crate::nbt::NbtError;

	#[test]
	fn reads_big_endian_scalars() {
		let mut bytes = Vec::new();
		bytes.extend_from_slice(&(-2_i16).to_be_bytes());
		bytes.extend_from_slice(&0x0102_0304_i32.to_be_bytes());
		bytes.extend_from_slice(&i64::MAX.to_be_bytes());
		bytes.extend_from_slice(&0.5_f32.to_be_bytes());
		bytes.extend_from_slice(&0.25_f64.to_be_bytes());

		let mut cursor = Cursor::new(&bytes);
		assert_eq!(cursor.read_i16().expect("short"), -2);
		assert_eq!(cursor.read_i32().expect("int"), 0x0102_0304);
		assert_eq!(cursor.read_i64().expect("long"), i64::MAX);
		assert_eq!(cursor.read_f32().expect("float"), 0.5);
		assert_eq!(cursor.read_f64().expect("double"), 0.25);
		assert_eq!(cursor.remaining(), 0);
	}

	#[test]
	fn short_read_reports_offset_and_need() {
		let bytes = [0x00, 0x01];
		let mut cursor = Cursor::new(&bytes);
		let err = cursor.read_i32().expect_err("two bytes cannot hold an int");
		assert!(matches!(err, NbtError::UnexpectedEof { at: 0, need: 4, rem: 2 }));
	}

	#[test]
	fn string_is_length_prefixed_utf8() {
		let mut bytes = vec![0x00, 0x04];
		bytes.extend_from_slice("Åbc".as_bytes());
		let mut cursor = Cursor::new(&bytes);
		assert_eq!(cursor.read_string().expect("string"), "Åbc");
	}

	#[test]
	fn invalid_utf8_string_is_rejected() {
		let bytes = [0x00, 0x02, 0xC3, 0x28];
		let mut cursor = Cursor::new(&bytes);
		let err = cursor.read_string().expect_err("invalid utf-8");
		assert!(matches!(err, NbtError::InvalidString { at: 2 }));
	}

	#[test]
	fn negative_length_is_rejected() {
		let bytes = (-1_i32).to_be_bytes();
		let mut cursor = Cursor::new(&bytes);
		let err = cursor.read_len().expect_err("negative length");
		assert!(matches!(err, NbtError::NegativeLength { len: -1, at: 0 }));
	}
}
