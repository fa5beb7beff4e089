/// Big-endian primitive reader.
pub mod bytes;
mod compression;
mod decode;
mod error;
mod file;
mod list;
mod path;
mod serialize;
mod tag;
#[cfg(test)]
pub(crate) mod testkit;
mod value;

/// Compression envelope detection and inflation.
pub use compression::{Compression, MAX_DECOMPRESSED_BYTES, decode_bytes};
/// Document and compound decoding entry points and options.
pub use decode::{DecodeOptions, decode, decode_compound, decode_root, decode_with_options};
/// Error and result aliases.
pub use error::{NbtError, Result};
/// File abstraction with envelope metadata.
pub use file::NbtFile;
/// List payload decoder.
pub use list::decode_list;
/// Path expression parser and resolved views.
pub use path::{NbtPath, PathStep, ValueRef};
/// Tag kind catalog.
pub use tag::TagKind;
/// Decoded value tree types.
pub use value::{Compound, List, ListData, Value};
