//! Public library API for decoding Named Binary Tag (NBT) documents.

/// NBT decoding, value tree, compression envelope, and path lookup.
pub mod nbt;
