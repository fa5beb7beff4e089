use std::fs;
use std::path::Path;

use crate::nbt::compression::decode_bytes;
use crate::nbt::{Compound, Compression, DecodeOptions, Result, decode_with_options};

/// A decoded NBT document together with its envelope metadata.
#[derive(Debug, Clone)]
pub struct NbtFile {
	/// Detected compression envelope.
	pub compression: Compression,
	/// Size of the input before decompression.
	pub raw_len: usize,
	/// Size of the uncompressed document.
	pub decoded_len: usize,
	/// Decoded root compound.
	pub root: Compound,
}

impl NbtFile {
	/// Read, decompress, and decode a file with default options.
	pub fn open(path: impl AsRef<Path>) -> Result<Self> {
		Self::open_with_options(path, &DecodeOptions::default())
	}

	/// Read, decompress, and decode a file.
	pub fn open_with_options(path: impl AsRef<Path>, opt: &DecodeOptions) -> Result<Self> {
		let path = path.as_ref();
		let raw = fs::read(path)?;
		tracing::debug!(path = %path.display(), raw_len = raw.len(), "read nbt file");
		Self::from_bytes(raw, opt)
	}

	/// Decompress and decode an in-memory document.
	pub fn from_bytes(raw: Vec<u8>, opt: &DecodeOptions) -> Result<Self> {
		let raw_len = raw.len();
		let (compression, bytes) = decode_bytes(raw)?;
		let root = decode_with_options(&bytes, opt)?;
		tracing::debug!(root = root.name(), members = root.len(), "decoded root compound");

		Ok(Self {
			compression,
			raw_len,
			decoded_len: bytes.len(),
			root,
		})
	}
}
