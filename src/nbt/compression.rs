use std::io::Read;

use flate2::read::{MultiGzDecoder, ZlibDecoder};

use crate::nbt::{NbtError, Result};

/// Upper bound on inflated document size.
pub const MAX_DECOMPRESSED_BYTES: usize = 512 * 1024 * 1024;
/// gzip member magic used by level and player files.
pub const GZIP_MAGIC: [u8; 2] = [0x1F, 0x8B];

/// Compression envelope detected around an NBT document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
	/// Raw uncompressed stream.
	None,
	/// gzip-wrapped stream.
	Gzip,
	/// zlib-wrapped stream (region file chunks).
	Zlib,
}

impl Compression {
	/// Render compression mode as a stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::None => "none",
			Self::Gzip => "gzip",
			Self::Zlib => "zlib",
		}
	}

	/// Guess the envelope from the leading bytes.
	pub fn detect(raw: &[u8]) -> Self {
		if raw.starts_with(&GZIP_MAGIC) {
			return Self::Gzip;
		}

		if let [cmf, flg, ..] = *raw {
			let check = (u16::from(cmf) << 8) | u16::from(flg);
			if cmf & 0x0F == 8 && cmf >> 4 <= 7 && check % 31 == 0 {
				return Self::Zlib;
			}
		}

		Self::None
	}
}

/// Detect and strip the compression envelope, returning `(mode, decoded_bytes)`.
pub fn decode_bytes(raw: Vec<u8>) -> Result<(Compression, Vec<u8>)> {
	let mode = Compression::detect(&raw);
	let out = match mode {
		Compression::None => raw,
		Compression::Gzip => inflate(MultiGzDecoder::new(raw.as_slice()))?,
		Compression::Zlib => inflate(ZlibDecoder::new(raw.as_slice()))?,
	};

	tracing::debug!(compression = mode.as_str(), decoded_len = out.len(), "stripped compression envelope");
	Ok((mode, out))
}

fn inflate(mut decoder: impl Read) -> Result<Vec<u8>> {
	let mut out = Vec::new();
	let mut buf = [0_u8; 8192];

	loop {
		let read = decoder.read(&mut buf)?;
		if read == 0 {
			break;
		}

		if out.len() + read > MAX_DECOMPRESSED_BYTES {
			return Err(NbtError::DecompressedTooLarge { limit: MAX_DECOMPRESSED_BYTES });
		}

		out.extend_from_slice(&buf[..read]);
	}

	Ok(out)
}

#[cfg(test)]
mod tests {
	use std::io::Write;

	use flate2::write::{GzEncoder, ZlibEncoder};

	use super::{Compression, decode_bytes};
	use crate::nbt::NbtError;
	use crate::nbt::testkit::bigtest;

	fn gzip(bytes: &[u8]) -> Vec<u8> {
		let mut encoder = GzEncoder::new(Vec::new(), flate2::Compression::default());
		encoder.write_all(bytes).expect("gzip write");
		encoder.finish().expect("gzip finish")
	}

	fn zlib(bytes: &[u8]) -> Vec<u8> {
		let mut encoder = ZlibEncoder::new(Vec::new(), flate2::Compression::default());
		encoder.write_all(bytes).expect("zlib write");
		encoder.finish().expect("zlib finish")
	}

	#[test]
	fn raw_document_passes_through() {
		let raw = bigtest();
		assert_eq!(Compression::detect(&raw), Compression::None);
		let (mode, out) = decode_bytes(raw.clone()).expect("raw passes");
		assert_eq!(mode, Compression::None);
		assert_eq!(out, raw);
	}

	#[test]
	fn gzip_envelope_is_inflated() {
		let raw = bigtest();
		let (mode, out) = decode_bytes(gzip(&raw)).expect("gzip inflates");
		assert_eq!(mode, Compression::Gzip);
		assert_eq!(out, raw);
	}

	#[test]
	fn concatenated_gzip_members_inflate_in_full() {
		let raw = bigtest();
		let (head, tail) = raw.split_at(100);
		let mut packed = gzip(head);
		packed.extend_from_slice(&gzip(tail));

		let (mode, out) = decode_bytes(packed).expect("multi-member gzip inflates");
		assert_eq!(mode, Compression::Gzip);
		assert_eq!(out.len(), raw.len());
		assert_eq!(out, raw);
	}

	#[test]
	fn zlib_envelope_is_inflated() {
		let raw = bigtest();
		let (mode, out) = decode_bytes(zlib(&raw)).expect("zlib inflates");
		assert_eq!(mode, Compression::Zlib);
		assert_eq!(out, raw);
	}

	#[test]
	fn gzip_checksum_mismatch_surfaces_io_error() {
		let mut packed = gzip(&bigtest());
		let crc_at = packed.len() - 8;
		packed[crc_at] ^= 0xFF;
		let err = decode_bytes(packed).expect_err("bad crc");
		assert!(matches!(err, NbtError::Io(_)));
	}

	#[test]
	fn labels_are_stable() {
		assert_eq!(Compression::None.as_str(), "none");
		assert_eq!(Compression::Gzip.as_str(), "gzip");
		assert_eq!(Compression::Zlib.as_str(), "zlib");
	}
}
