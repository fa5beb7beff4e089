use thiserror::Error;

/// Envelope and tag statistics command.
pub mod info;
/// Tree dump command.
pub mod print;
/// Path lookup command.
pub mod get;

/// CLI result type.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
	/// Decoding or lookup failure.
	#[error(transparent)]
	Nbt(#[from] nbtdoc::nbt::NbtError),
	/// JSON rendering failure.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
}
