use thiserror::Error;

/// Crate-local result type for decode operations.
pub type Result<T> = std::result::Result<T, DecodeError>;

/// Errors produced while resolving key paths and decoding typed values.
///
/// The set is closed and every variant carries enough structured data for
/// callers and tests to compare errors by value.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DecodeError {
	/// Key path did not resolve to any node, either because a segment was
	/// missing or because an intermediate node was not a mapping.
	#[error("key not found: {key_path}")]
	KeyNotFound {
		/// Full original dotted path that failed to resolve.
		key_path: String,
	},
	/// Node exists but holds a different kind than requested.
	#[error("type mismatch at {key_path}: expected {expected}, got {found}")]
	TypeMismatch {
		/// Full original dotted path of the offending node.
		key_path: String,
		/// Requested type descriptor.
		expected: String,
		/// Kind of node actually present.
		found: &'static str,
	},
	/// Scalar value matches no case of the requested finite-case type.
	#[error("no case of {type_name} matches raw value {raw:?} at {key_path}")]
	UnknownVariant {
		/// Full original dotted path of the offending node.
		key_path: String,
		/// Target type descriptor.
		type_name: &'static str,
		/// Unmatched raw value rendered as text.
		raw: String,
	},
}

/// Errors produced while loading and parsing input into a value tree.
#[derive(Debug, Error)]
pub enum LoadError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Input bytes are not valid JSON.
	#[error("parse: {0}")]
	Parse(#[from] serde_json::Error),
	/// Parsed document does not have a mapping at the top level.
	#[error("top-level value is not an object (got {found})")]
	TopLevelNotObject {
		/// Kind of the top-level node actually parsed.
		found: &'static str,
	},
}
