/// Parsed JSON tree node.
pub type JsonValue = serde_json::Value;

/// Mapping node: unique string keys mapped to tree nodes.
pub type JsonObject = serde_json::Map<String, serde_json::Value>;

/// Sequence node: ordered tree nodes.
pub type JsonArray = Vec<serde_json::Value>;

/// Short label for a node's kind, used in diagnostics and mismatch errors.
pub fn value_kind(value: &JsonValue) -> &'static str {
	match value {
		JsonValue::Null => "null",
		JsonValue::Bool(_) => "bool",
		JsonValue::Number(number) => {
			if number.is_f64() {
				"float"
			} else {
				"integer"
			}
		}
		JsonValue::String(_) => "string",
		JsonValue::Array(_) => "array",
		JsonValue::Object(_) => "object",
	}
}
