use indexmap::IndexMap;

use crate::nbt::{NbtError, Result, TagKind, ValueRef};

/// One decoded tag payload.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
	/// `TAG_Byte`.
	Byte(i8),
	/// `TAG_Short`.
	Short(i16),
	/// `TAG_Int`.
	Int(i32),
	/// `TAG_Long`.
	Long(i64),
	/// `TAG_Float`.
	Float(f32),
	/// `TAG_Double`.
	Double(f64),
	/// `TAG_Byte_Array`.
	ByteArray(Vec<i8>),
	/// `TAG_String`.
	String(String),
	/// `TAG_List`.
	List(List),
	/// `TAG_Compound`.
	Compound(Compound),
	/// `TAG_Int_Array`.
	IntArray(Vec<i32>),
}

impl Value {
	/// Tag kind that produced this value.
	pub fn kind(&self) -> TagKind {
		match self {
			Self::Byte(_) => TagKind::Byte,
			Self::Short(_) => TagKind::Short,
			Self::Int(_) => TagKind::Int,
			Self::Long(_) => TagKind::Long,
			Self::Float(_) => TagKind::Float,
			Self::Double(_) => TagKind::Double,
			Self::ByteArray(_) => TagKind::ByteArray,
			Self::String(_) => TagKind::String,
			Self::List(_) => TagKind::List,
			Self::Compound(_) => TagKind::Compound,
			Self::IntArray(_) => TagKind::IntArray,
		}
	}
}

/// Named compound node with insertion-ordered members.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Compound {
	name: String,
	members: IndexMap<String, Value>,
}

impl Compound {
	/// Create an empty compound.
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			members: IndexMap::new(),
		}
	}

	/// Insert a member; a repeated name replaces the value in its original slot.
	pub fn insert(&mut self, name: impl Into<String>, value: Value) {
		self.members.insert(name.into(), value);
	}

	/// Compound name (empty for list elements).
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Number of members.
	pub fn len(&self) -> usize {
		self.members.len()
	}

	/// Whether the compound has no members.
	pub fn is_empty(&self) -> bool {
		self.members.is_empty()
	}

	/// Whether a member with `name` exists.
	pub fn contains(&self, name: &str) -> bool {
		self.members.contains_key(name)
	}

	/// Borrow a member by name.
	pub fn get(&self, name: &str) -> Option<&Value> {
		self.members.get(name)
	}

	/// Iterate members in decode order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
		self.members.iter().map(|(name, value)| (name.as_str(), value))
	}

	/// Iterate member names in decode order.
	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.members.keys().map(String::as_str)
	}

	fn member(&self, name: &str) -> Result<&Value> {
		self.get(name).ok_or_else(|| NbtError::MissingMember { name: name.to_owned() })
	}

	fn mismatch(name: &str, expected: TagKind, got: &Value) -> NbtError {
		NbtError::TypeMismatch {
			name: name.to_owned(),
			expected: expected.as_str(),
			got: got.kind().as_str(),
		}
	}

	/// Read a `TAG_Byte` member.
	pub fn byte(&self, name: &str) -> Result<i8> {
		match self.member(name)? {
			Value::Byte(v) => Ok(*v),
			other => Err(Self::mismatch(name, TagKind::Byte, other)),
		}
	}

	/// Read a `TAG_Short` member.
	pub fn short(&self, name: &str) -> Result<i16> {
		match self.member(name)? {
			Value::Short(v) => Ok(*v),
			other => Err(Self::mismatch(name, TagKind::Short, other)),
		}
	}

	/// Read a `TAG_Int` member.
	pub fn int(&self, name: &str) -> Result<i32> {
		match self.member(name)? {
			Value::Int(v) => Ok(*v),
			other => Err(Self::mismatch(name, TagKind::Int, other)),
		}
	}

	/// Read a `TAG_Long` member.
	pub fn long(&self, name: &str) -> Result<i64> {
		match self.member(name)? {
			Value::Long(v) => Ok(*v),
			other => Err(Self::mismatch(name, TagKind::Long, other)),
		}
	}

	/// Read a `TAG_Float` member.
	pub fn float(&self, name: &str) -> Result<f32> {
		match self.member(name)? {
			Value::Float(v) => Ok(*v),
			other => Err(Self::mismatch(name, TagKind::Float, other)),
		}
	}

	/// Read a `TAG_Double` member.
	pub fn double(&self, name: &str) -> Result<f64> {
		match self.member(name)? {
			Value::Double(v) => Ok(*v),
			other => Err(Self::mismatch(name, TagKind::Double, other)),
		}
	}

	/// Borrow a `TAG_String` member.
	pub fn string(&self, name: &str) -> Result<&str> {
		match self.member(name)? {
			Value::String(v) => Ok(v),
			other => Err(Self::mismatch(name, TagKind::String, other)),
		}
	}

	/// Borrow a `TAG_Byte_Array` member.
	pub fn byte_array(&self, name: &str) -> Result<&[i8]> {
		match self.member(name)? {
			Value::ByteArray(v) => Ok(v),
			other => Err(Self::mismatch(name, TagKind::ByteArray, other)),
		}
	}

	/// Borrow a `TAG_Int_Array` member.
	pub fn int_array(&self, name: &str) -> Result<&[i32]> {
		match self.member(name)? {
			Value::IntArray(v) => Ok(v),
			other => Err(Self::mismatch(name, TagKind::IntArray, other)),
		}
	}

	/// Borrow a `TAG_List` member.
	pub fn list(&self, name: &str) -> Result<&List> {
		match self.member(name)? {
			Value::List(v) => Ok(v),
			other => Err(Self::mismatch(name, TagKind::List, other)),
		}
	}

	/// Borrow a nested `TAG_Compound` member.
	pub fn compound(&self, name: &str) -> Result<&Compound> {
		match self.member(name)? {
			Value::Compound(v) => Ok(v),
			other => Err(Self::mismatch(name, TagKind::Compound, other)),
		}
	}
}

/// Typed element storage of a list.
#[derive(Debug, Clone, PartialEq)]
pub enum ListData {
	/// Zero-length list whose element kind has no typed storage.
	Empty,
	/// `TAG_Byte` elements.
	Byte(Vec<i8>),
	/// `TAG_Short` elements.
	Short(Vec<i16>),
	/// `TAG_Int` elements.
	Int(Vec<i32>),
	/// `TAG_Long` elements.
	Long(Vec<i64>),
	/// `TAG_Float` elements.
	Float(Vec<f32>),
	/// `TAG_Double` elements.
	Double(Vec<f64>),
	/// `TAG_String` elements.
	String(Vec<String>),
	/// Anonymous `TAG_Compound` elements.
	Compound(Vec<Compound>),
}

impl ListData {
	/// Number of stored elements.
	pub fn len(&self) -> usize {
		match self {
			Self::Empty => 0,
			Self::Byte(v) => v.len(),
			Self::Short(v) => v.len(),
			Self::Int(v) => v.len(),
			Self::Long(v) => v.len(),
			Self::Float(v) => v.len(),
			Self::Double(v) => v.len(),
			Self::String(v) => v.len(),
			Self::Compound(v) => v.len(),
		}
	}

	/// Whether no elements are stored.
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

/// Named homogeneous list.
#[derive(Debug, Clone, PartialEq)]
pub struct List {
	name: String,
	element_kind: TagKind,
	data: ListData,
}

impl List {
	/// Build a list from decoded parts.
	pub fn new(name: impl Into<String>, element_kind: TagKind, data: ListData) -> Self {
		Self {
			name: name.into(),
			element_kind,
			data,
		}
	}

	/// List name.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Declared element kind.
	pub fn element_kind(&self) -> TagKind {
		self.element_kind
	}

	/// Number of elements.
	pub fn len(&self) -> usize {
		self.data.len()
	}

	/// Whether the list has no elements.
	pub fn is_empty(&self) -> bool {
		self.data.is_empty()
	}

	/// Borrow typed element storage.
	pub fn data(&self) -> &ListData {
		&self.data
	}

	/// Borrow one element by index.
	pub fn get(&self, index: usize) -> Option<ValueRef<'_>> {
		Some(match &self.data {
			ListData::Empty => return None,
			ListData::Byte(items) => ValueRef::Byte(*items.get(index)?),
			ListData::Short(items) => ValueRef::Short(*items.get(index)?),
			ListData::Int(items) => ValueRef::Int(*items.get(index)?),
			ListData::Long(items) => ValueRef::Long(*items.get(index)?),
			ListData::Float(items) => ValueRef::Float(*items.get(index)?),
			ListData::Double(items) => ValueRef::Double(*items.get(index)?),
			ListData::String(items) => ValueRef::String(items.get(index)?),
			ListData::Compound(items) => ValueRef::Compound(items.get(index)?),
		})
	}

	/// Iterate elements in wire order.
	pub fn iter(&self) -> impl Iterator<Item = ValueRef<'_>> {
		(0..self.len()).filter_map(|index| self.get(index))
	}

	fn mismatch(&self, expected: TagKind) -> NbtError {
		NbtError::TypeMismatch {
			name: self.name.clone(),
			expected: expected.as_str(),
			got: self.element_kind.as_str(),
		}
	}

	/// Borrow `TAG_Byte` elements.
	pub fn bytes(&self) -> Result<&[i8]> {
		match &self.data {
			ListData::Byte(v) => Ok(v),
			ListData::Empty => Ok(&[]),
			_ => Err(self.mismatch(TagKind::Byte)),
		}
	}

	/// Borrow `TAG_Short` elements.
	pub fn shorts(&self) -> Result<&[i16]> {
		match &self.data {
			ListData::Short(v) => Ok(v),
			ListData::Empty => Ok(&[]),
			_ => Err(self.mismatch(TagKind::Short)),
		}
	}

	/// Borrow `TAG_Int` elements.
	pub fn ints(&self) -> Result<&[i32]> {
		match &self.data {
			ListData::Int(v) => Ok(v),
			ListData::Empty => Ok(&[]),
			_ => Err(self.mismatch(TagKind::Int)),
		}
	}

	/// Borrow `TAG_Long` elements.
	pub fn longs(&self) -> Result<&[i64]> {
		match &self.data {
			ListData::Long(v) => Ok(v),
			ListData::Empty => Ok(&[]),
			_ => Err(self.mismatch(TagKind::Long)),
		}
	}

	/// Borrow `TAG_Float` elements.
	pub fn floats(&self) -> Result<&[f32]> {
		match &self.data {
			ListData::Float(v) => Ok(v),
			ListData::Empty => Ok(&[]),
			_ => Err(self.mismatch(TagKind::Float)),
		}
	}

	/// Borrow `TAG_Double` elements.
	pub fn doubles(&self) -> Result<&[f64]> {
		match &self.data {
			ListData::Double(v) => Ok(v),
			ListData::Empty => Ok(&[]),
			_ => Err(self.mismatch(TagKind::Double)),
		}
	}

	/// Borrow `TAG_String` elements.
	pub fn strings(&self) -> Result<&[String]> {
		match &self.data {
			ListData::String(v) => Ok(v),
			ListData::Empty => Ok(&[]),
			_ => Err(self.mismatch(TagKind::String)),
		}
	}

	/// Borrow anonymous compound elements.
	pub fn compounds(&self) -> Result<&[Compound]> {
		match &self.data {
			ListData::Compound(v) => Ok(v),
			ListData::Empty => Ok(&[]),
			_ => Err(self.mismatch(TagKind::Compound)),
		}
	}
}
