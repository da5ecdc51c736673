use std::fmt;

use crate::json::{DecodeError, JsonObject, JsonValue, Result};

/// Parsed dotted key path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPath {
	segments: Vec<String>,
}

impl KeyPath {
	/// Parse dotted key syntax into ordered segments.
	///
	/// Empty input and blank segments (`"a..b"`, `".a"`, `"a."`) cannot
	/// address anything, so they fail as not-found carrying the original
	/// input.
	pub fn parse(input: &str) -> Result<Self> {
		if input.is_empty() || input.split('.').any(str::is_empty) {
			return Err(DecodeError::KeyNotFound { key_path: input.to_owned() });
		}

		Ok(Self {
			segments: input.split('.').map(str::to_owned).collect(),
		})
	}

	/// Ordered path segments.
	pub fn segments(&self) -> &[String] {
		&self.segments
	}

	/// Walk `root` one segment at a time and return the terminal node.
	///
	/// `None` covers both a missing key and an intermediate node that is
	/// not a mapping; a path cannot continue through a non-mapping node.
	pub fn resolve<'a>(&self, root: &'a JsonObject) -> Option<&'a JsonValue> {
		let (last, intermediate) = self.segments.split_last()?;

		let mut current = root;
		for segment in intermediate {
			current = current.get(segment)?.as_object()?;
		}

		current.get(last)
	}
}

impl fmt::Display for KeyPath {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.segments.join("."))
	}
}
