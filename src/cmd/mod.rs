pub mod get;
pub mod keys;
pub mod probe;

use jsonkey::json::{DecodeError, LoadError};
use thiserror::Error;

/// Failures surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CmdError {
	#[error(transparent)]
	Load(#[from] LoadError),
	#[error(transparent)]
	Decode(#[from] DecodeError),
	#[error("unknown shape: {shape} (expected bool|int|uint|float|string, optionally with -array)")]
	UnknownShape { shape: String },
}
