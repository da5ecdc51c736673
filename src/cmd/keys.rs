use std::path::PathBuf;

use jsonkey::json::{DecodeError, JsonObject, KeyPath, object_from_file, value_kind};

use crate::cmd::CmdError;

/// List keys and node kinds of the mapping at `key_path`, or of the root.
pub fn run(path: PathBuf, key_path: Option<&str>) -> Result<(), CmdError> {
	let document = object_from_file(&path)?;
	let scope = match key_path {
		Some(input) => scope_at(&document, input)?,
		None => &document,
	};

	for (key, value) in scope {
		println!("{}: {}", key, value_kind(value));
	}

	Ok(())
}

fn scope_at<'a>(document: &'a JsonObject, key_path: &str) -> Result<&'a JsonObject, CmdError> {
	let parsed = KeyPath::parse(key_path)?;
	let node = parsed
		.resolve(document)
		.ok_or_else(|| DecodeError::KeyNotFound { key_path: key_path.to_owned() })?;

	let object = node.as_object().ok_or_else(|| DecodeError::TypeMismatch {
		key_path: key_path.to_owned(),
		expected: "object".to_owned(),
		found: value_kind(node),
	})?;

	Ok(object)
}
