use std::fs;
use std::path::Path;

use crate::json::{JsonObject, JsonValue, LoadError, value_kind};

/// Read `path` and parse its contents into a top-level mapping.
pub fn object_from_file(path: impl AsRef<Path>) -> std::result::Result<JsonObject, LoadError> {
	let bytes = fs::read(path)?;
	object_from_slice(&bytes)
}

/// Parse raw bytes into a top-level mapping.
pub fn object_from_slice(bytes: &[u8]) -> std::result::Result<JsonObject, LoadError> {
	let value: JsonValue = serde_json::from_slice(bytes)?;
	into_object(value)
}

/// Parse text into a top-level mapping.
pub fn object_from_str(input: &str) -> std::result::Result<JsonObject, LoadError> {
	let value: JsonValue = serde_json::from_str(input)?;
	into_object(value)
}

fn into_object(value: JsonValue) -> std::result::Result<JsonObject, LoadError> {
	match value {
		JsonValue::Object(object) => Ok(object),
		other => Err(LoadError::TopLevelNotObject { found: value_kind(&other) }),
	}
}
