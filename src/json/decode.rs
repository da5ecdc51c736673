use crate::json::{DecodeError, FromJson, FromRaw, JsonObject, JsonRaw, JsonValue, KeyPath, Result, value_kind};

/// Key-path decode operations over a mapping node.
///
/// Every operation family has a mandatory form returning [`Result`] and an
/// optional form derived from it by one rule: any failure collapses to
/// `None`. The array forms are deliberately lenient at the element level.
/// Elements that fail to decode are dropped from the result, preserving the
/// relative order of the survivors, while a terminal node that is not a
/// sequence at all still fails the whole call. The dropped-element behavior
/// is a documented contract that call sites rely on, not an accident.
pub trait JsonObjectExt {
	/// Decode a raw scalar (or a whole mapping) at `key_path`.
	fn value<T: JsonRaw>(&self, key_path: &str) -> Result<T>;

	/// Decode a sequence of raw scalars at `key_path`, dropping elements of
	/// the wrong kind.
	fn value_array<T: JsonRaw>(&self, key_path: &str) -> Result<Vec<T>>;

	/// Decode a nested decodable at `key_path`. A constructor failure
	/// propagates verbatim so the root cause's key path stays visible.
	fn object<T: FromJson>(&self, key_path: &str) -> Result<T>;

	/// Decode a sequence of nested decodables at `key_path`, dropping
	/// elements that are not mappings or whose constructor fails.
	fn object_array<T: FromJson>(&self, key_path: &str) -> Result<Vec<T>>;

	/// Decode a finite-case value at `key_path`.
	fn variant<T: FromRaw>(&self, key_path: &str) -> Result<T>;

	/// Decode a sequence of finite-case values at `key_path`, dropping
	/// elements that match no case.
	fn variant_array<T: FromRaw>(&self, key_path: &str) -> Result<Vec<T>>;

	/// Optional form of [`value`](Self::value).
	fn value_opt<T: JsonRaw>(&self, key_path: &str) -> Option<T> {
		self.value(key_path).ok()
	}

	/// Optional form of [`value_array`](Self::value_array).
	fn value_array_opt<T: JsonRaw>(&self, key_path: &str) -> Option<Vec<T>> {
		self.value_array(key_path).ok()
	}

	/// Optional form of [`object`](Self::object).
	fn object_opt<T: FromJson>(&self, key_path: &str) -> Option<T> {
		self.object(key_path).ok()
	}

	/// Optional form of [`object_array`](Self::object_array).
	fn object_array_opt<T: FromJson>(&self, key_path: &str) -> Option<Vec<T>> {
		self.object_array(key_path).ok()
	}

	/// Optional form of [`variant`](Self::variant).
	fn variant_opt<T: FromRaw>(&self, key_path: &str) -> Option<T> {
		self.variant(key_path).ok()
	}

	/// Optional form of [`variant_array`](Self::variant_array).
	fn variant_array_opt<T: FromRaw>(&self, key_path: &str) -> Option<Vec<T>> {
		self.variant_array(key_path).ok()
	}
}

impl JsonObjectExt for JsonObject {
	fn value<T: JsonRaw>(&self, key_path: &str) -> Result<T> {
		let node = locate(self, key_path)?;
		raw_at(node, key_path)
	}

	fn value_array<T: JsonRaw>(&self, key_path: &str) -> Result<Vec<T>> {
		let node = locate(self, key_path)?;
		let items = elements(node, key_path, T::KIND)?;
		Ok(items.iter().filter_map(T::from_value).collect())
	}

	fn object<T: FromJson>(&self, key_path: &str) -> Result<T> {
		let node = locate(self, key_path)?;
		match node {
			JsonValue::Object(object) => T::from_json(object),
			other => Err(mismatch(key_path, "object".to_owned(), other)),
		}
	}

	fn object_array<T: FromJson>(&self, key_path: &str) -> Result<Vec<T>> {
		let node = locate(self, key_path)?;
		let items = elements(node, key_path, "object")?;
		Ok(items
			.iter()
			.filter_map(|item| item.as_object().and_then(|object| T::from_json(object).ok()))
			.collect())
	}

	fn variant<T: FromRaw>(&self, key_path: &str) -> Result<T> {
		let node = locate(self, key_path)?;
		variant_at(node, key_path)
	}

	fn variant_array<T: FromRaw>(&self, key_path: &str) -> Result<Vec<T>> {
		let node = locate(self, key_path)?;
		let items = elements(node, key_path, T::NAME)?;
		Ok(items
			.iter()
			.filter_map(|item| T::Raw::from_value(item).and_then(T::from_raw))
			.collect())
	}
}

/// Shared resolution step for every operation: parse the path, walk the
/// tree, and report absence with the full original path.
fn locate<'a>(root: &'a JsonObject, key_path: &str) -> Result<&'a JsonValue> {
	let path = KeyPath::parse(key_path)?;
	path.resolve(root).ok_or_else(|| DecodeError::KeyNotFound { key_path: key_path.to_owned() })
}

fn raw_at<T: JsonRaw>(node: &JsonValue, key_path: &str) -> Result<T> {
	T::from_value(node).ok_or_else(|| mismatch(key_path, T::KIND.to_owned(), node))
}

fn variant_at<T: FromRaw>(node: &JsonValue, key_path: &str) -> Result<T> {
	let raw = raw_at::<T::Raw>(node, key_path)?;
	let rendered = raw.to_string();

	T::from_raw(raw).ok_or_else(|| DecodeError::UnknownVariant {
		key_path: key_path.to_owned(),
		type_name: T::NAME,
		raw: rendered,
	})
}

fn elements<'a>(node: &'a JsonValue, key_path: &str, element_kind: &str) -> Result<&'a [JsonValue]> {
	match node {
		JsonValue::Array(items) => Ok(items),
		other => Err(mismatch(key_path, format!("array of {element_kind}"), other)),
	}
}

fn mismatch(key_path: &str, expected: String, found: &JsonValue) -> DecodeError {
	DecodeError::TypeMismatch {
		key_path: key_path.to_owned(),
		expected,
		found: value_kind(found),
	}
}
