use crate::json::{JsonObject, Result};

/// Capability for domain types constructed from a mapping node.
///
/// A constructor pulls its fields out of `object` with the decode
/// operations, including fields that are themselves decodable or arrays of
/// decodables, recursing through nested mappings to arbitrary depth. Decoded
/// values own their data; no references into the tree survive the call.
pub trait FromJson: Sized {
	/// Build an instance from the fields of `object`.
	fn from_json(object: &JsonObject) -> Result<Self>;
}
