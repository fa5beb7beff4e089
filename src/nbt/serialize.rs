use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::nbt::{Compound, List, ListData, Value, ValueRef};

// Compounds map to maps, lists and arrays to sequences, scalars to numbers.
// Tag kinds are not preserved; this is an export view, not an encoding.

impl Serialize for Compound {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		let mut map = serializer.serialize_map(Some(self.len()))?;
		for (name, value) in self.iter() {
			map.serialize_entry(name, value)?;
		}
		map.end()
	}
}

impl Serialize for List {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		self.data().serialize(serializer)
	}
}

impl Serialize for ListData {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		match self {
			Self::Empty => serializer.serialize_seq(Some(0))?.end(),
			Self::Byte(items) => items.serialize(serializer),
			Self::Short(items) => items.serialize(serializer),
			Self::Int(items) => items.serialize(serializer),
			Self::Long(items) => items.serialize(serializer),
			Self::Float(items) => items.serialize(serializer),
			Self::Double(items) => items.serialize(serializer),
			Self::String(items) => items.serialize(serializer),
			Self::Compound(items) => {
				let mut seq = serializer.serialize_seq(Some(items.len()))?;
				for item in items {
					seq.serialize_element(item)?;
				}
				seq.end()
			}
		}
	}
}

impl Serialize for Value {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		match self {
			Self::Byte(v) => serializer.serialize_i8(*v),
			Self::Short(v) => serializer.serialize_i16(*v),
			Self::Int(v) => serializer.serialize_i32(*v),
			Self::Long(v) => serializer.serialize_i64(*v),
			Self::Float(v) => serializer.serialize_f32(*v),
			Self::Double(v) => serializer.serialize_f64(*v),
			Self::ByteArray(items) => items.serialize(serializer),
			Self::String(v) => serializer.serialize_str(v),
			Self::List(list) => list.serialize(serializer),
			Self::Compound(compound) => compound.serialize(serializer),
			Self::IntArray(items) => items.serialize(serializer),
		}
	}
}

impl Serialize for ValueRef<'_> {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		match *self {
			Self::Value(value) => value.serialize(serializer),
			Self::Compound(compound) => compound.serialize(serializer),
			Self::Byte(v) => serializer.serialize_i8(v),
			Self::Short(v) => serializer.serialize_i16(v),
			Self::Int(v) => serializer.serialize_i32(v),
			Self::Long(v) => serializer.serialize_i64(v),
			Self::Float(v) => serializer.serialize_f32(v),
			Self::Double(v) => serializer.serialize_f64(v),
			Self::String(v) => serializer.serialize_str(v),
		}
	}
}
