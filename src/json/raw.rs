use crate::json::{JsonObject, JsonValue};

/// Capability for leaf values extracted directly from a single tree node.
///
/// Extraction requires the node to already hold the matching kind; there is
/// no cross-kind coercion (a string node never becomes an integer). The one
/// widening mirrors the tree's own accessors: integer number nodes satisfy
/// float targets losslessly.
pub trait JsonRaw: Sized {
	/// Type descriptor used in mismatch errors.
	const KIND: &'static str;

	/// Extract an owned value when `value` holds exactly this kind.
	fn from_value(value: &JsonValue) -> Option<Self>;
}

impl JsonRaw for bool {
	const KIND: &'static str = "bool";

	fn from_value(value: &JsonValue) -> Option<Self> {
		value.as_bool()
	}
}

impl JsonRaw for i64 {
	const KIND: &'static str = "integer";

	fn from_value(value: &JsonValue) -> Option<Self> {
		value.as_i64()
	}
}

impl JsonRaw for u64 {
	const KIND: &'static str = "unsigned integer";

	fn from_value(value: &JsonValue) -> Option<Self> {
		value.as_u64()
	}
}

impl JsonRaw for f64 {
	const KIND: &'static str = "float";

	fn from_value(value: &JsonValue) -> Option<Self> {
		value.as_f64()
	}
}

impl JsonRaw for f32 {
	const KIND: &'static str = "float";

	fn from_value(value: &JsonValue) -> Option<Self> {
		value.as_f64().map(|wide| wide as f32)
	}
}

impl JsonRaw for String {
	const KIND: &'static str = "string";

	fn from_value(value: &JsonValue) -> Option<Self> {
		value.as_str().map(str::to_owned)
	}
}

impl JsonRaw for JsonObject {
	const KIND: &'static str = "object";

	fn from_value(value: &JsonValue) -> Option<Self> {
		value.as_object().cloned()
	}
}
