/// Closed set of NBT tag kinds, numbered as on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum TagKind {
	/// Terminates an open compound; carries no name or payload.
	End = 0,
	/// Signed 8-bit integer.
	Byte = 1,
	/// Signed 16-bit integer.
	Short = 2,
	/// Signed 32-bit integer.
	Int = 3,
	/// Signed 64-bit integer.
	Long = 4,
	/// IEEE-754 single.
	Float = 5,
	/// IEEE-754 double.
	Double = 6,
	/// `i32` count followed by signed bytes.
	ByteArray = 7,
	/// `u16` length followed by UTF-8 bytes.
	String = 8,
	/// Element tag, `i32` count, then untagged unnamed elements.
	List = 9,
	/// Named members closed by [`TagKind::End`].
	Compound = 10,
	/// `i32` count followed by big-endian `i32` values.
	IntArray = 11,
}

impl TagKind {
	/// Every kind in wire order.
	pub const ALL: [TagKind; 12] = [
		Self::End,
		Self::Byte,
		Self::Short,
		Self::Int,
		Self::Long,
		Self::Float,
		Self::Double,
		Self::ByteArray,
		Self::String,
		Self::List,
		Self::Compound,
		Self::IntArray,
	];

	/// Map a wire byte to its kind.
	pub fn from_u8(tag: u8) -> Option<Self> {
		Self::ALL.get(usize::from(tag)).copied()
	}

	/// Wire byte for this kind.
	pub fn id(self) -> u8 {
		self as u8
	}

	/// Payload width for fixed-size kinds, `None` for prefixed or structured ones.
	pub fn fixed_size(self) -> Option<usize> {
		match self {
			Self::End => Some(0),
			Self::Byte => Some(1),
			Self::Short => Some(2),
			Self::Int | Self::Float => Some(4),
			Self::Long | Self::Double => Some(8),
			Self::ByteArray | Self::String | Self::List | Self::Compound | Self::IntArray => None,
		}
	}

	/// Classic `TAG_*` label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::End => "TAG_End",
			Self::Byte => "TAG_Byte",
			Self::Short => "TAG_Short",
			Self::Int => "TAG_Int",
			Self::Long => "TAG_Long",
			Self::Float => "TAG_Float",
			Self::Double => "TAG_Double",
			Self::ByteArray => "TAG_Byte_Array",
			Self::String => "TAG_String",
			Self::List => "TAG_List",
			Self::Compound => "TAG_Compound",
			Self::IntArray => "TAG_Int_Array",
		}
	}
}

impl std::fmt::Display for TagKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}
