use std::path::PathBuf;

use jsonkey::json::{DecodeError, JsonValue, KeyPath, LoadError, object_from_file, value_kind};
use serde::Serialize;

use crate::cmd::CmdError;

#[derive(Serialize)]
struct GetReport<'a> {
	key_path: &'a str,
	kind: &'static str,
	value: &'a JsonValue,
}

/// Resolve a key path in `path` and print the terminal value.
pub fn run(path: PathBuf, key_path: &str, json: bool) -> Result<(), CmdError> {
	let document = object_from_file(&path)?;
	let parsed = KeyPath::parse(key_path)?;
	let value = parsed
		.resolve(&document)
		.ok_or_else(|| DecodeError::KeyNotFound { key_path: key_path.to_owned() })?;

	if json {
		let report = GetReport {
			key_path,
			kind: value_kind(value),
			value,
		};
		println!("{}", serde_json::to_string_pretty(&report).map_err(LoadError::Parse)?);
		return Ok(());
	}

	println!("path: {}", path.display());
	println!("key: {parsed}");
	println!("kind: {}", value_kind(value));
	println!("value:");
	println!("{}", serde_json::to_string_pretty(value).map_err(LoadError::Parse)?);

	Ok(())
}
