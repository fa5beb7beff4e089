use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, NbtError>;

/// Errors produced while reading, decoding, and querying NBT data.
#[derive(Debug, Error)]
pub enum NbtError {
	/// Filesystem, stream, or decompression IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Decompressed output exceeded configured safety limit.
	#[error("decompressed output exceeded limit {limit} bytes")]
	DecompressedTooLarge {
		/// Maximum allowed output bytes.
		limit: usize,
	},
	/// Document root tag is not `TAG_Compound`.
	#[error("invalid NBT document: root tag is {tag}, expected TAG_Compound (10)")]
	NotCompoundRoot {
		/// Tag byte found at offset 0.
		tag: u8,
	},
	/// Not enough bytes remained for a requested read.
	#[error("unexpected eof at offset {at}, need {need} bytes, remaining {rem}")]
	UnexpectedEof {
		/// Byte offset where the read was attempted.
		at: usize,
		/// Requested bytes.
		need: usize,
		/// Bytes still available.
		rem: usize,
	},
	/// Tag byte outside the known `0..=11` range.
	#[error("unknown tag {tag} at offset {at}")]
	UnknownTag {
		/// Offending tag byte.
		tag: u8,
		/// Byte offset of the tag.
		at: usize,
	},
	/// List declared an element kind the decoder does not handle.
	#[error("unsupported list element kind {kind}")]
	UnsupportedListElement {
		/// Declared element kind label.
		kind: &'static str,
	},
	/// Array or list length prefix was negative.
	#[error("negative length {len} at offset {at}")]
	NegativeLength {
		/// Parsed signed length.
		len: i32,
		/// Byte offset of the length prefix.
		at: usize,
	},
	/// Array or list length exceeded configured limit.
	#[error("length {len} exceeds limit {max}")]
	LengthTooLarge {
		/// Declared element count.
		len: usize,
		/// Maximum permitted element count.
		max: usize,
	},
	/// String payload was not valid UTF-8.
	#[error("invalid utf-8 string at offset {at}")]
	InvalidString {
		/// Byte offset of the string payload.
		at: usize,
	},
	/// Compound nesting exceeded configured limit.
	#[error("decode depth exceeded (max={max_depth})")]
	DepthExceeded {
		/// Configured depth ceiling.
		max_depth: u32,
	},
	/// Strict mode found bytes after the root terminator.
	#[error("trailing bytes after root compound at offset {at}: remaining {rem}")]
	TrailingBytes {
		/// Offset just past the root terminator.
		at: usize,
		/// Unconsumed bytes.
		rem: usize,
	},
	/// Requested compound member does not exist.
	#[error("missing member {name}")]
	MissingMember {
		/// Requested member name.
		name: String,
	},
	/// Value kind did not match the requested accessor.
	#[error("type mismatch for {name}: expected {expected}, got {got}")]
	TypeMismatch {
		/// Member name or path being read.
		name: String,
		/// Expected value kind.
		expected: &'static str,
		/// Actual value kind.
		got: &'static str,
	},
	/// List or array index past the end.
	#[error("index {index} out of range (len={len})")]
	IndexOutOfRange {
		/// Requested index.
		index: usize,
		/// Sequence length.
		len: usize,
	},
	/// Path expression syntax is invalid.
	#[error("invalid path: {path}")]
	InvalidPath {
		/// Original user-provided path string.
		path: String,
	},
}
