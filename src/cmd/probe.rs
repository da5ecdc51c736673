use std::fmt::Debug;
use std::path::PathBuf;

use jsonkey::json::{JsonObjectExt, object_from_file};

use crate::cmd::CmdError;

#[derive(Debug, Clone, Copy)]
enum Shape {
	Bool,
	Int,
	Uint,
	Float,
	Str,
	BoolArray,
	IntArray,
	UintArray,
	FloatArray,
	StrArray,
}

/// Attempt a typed decode at `key_path` and print the decoded value.
pub fn run(path: PathBuf, key_path: &str, shape: &str) -> Result<(), CmdError> {
	let document = object_from_file(path)?;

	match parse_shape(shape)? {
		Shape::Bool => report(document.value::<bool>(key_path)),
		Shape::Int => report(document.value::<i64>(key_path)),
		Shape::Uint => report(document.value::<u64>(key_path)),
		Shape::Float => report(document.value::<f64>(key_path)),
		Shape::Str => report(document.value::<String>(key_path)),
		Shape::BoolArray => report(document.value_array::<bool>(key_path)),
		Shape::IntArray => report(document.value_array::<i64>(key_path)),
		Shape::UintArray => report(document.value_array::<u64>(key_path)),
		Shape::FloatArray => report(document.value_array::<f64>(key_path)),
		Shape::StrArray => report(document.value_array::<String>(key_path)),
	}
}

fn parse_shape(shape: &str) -> Result<Shape, CmdError> {
	let parsed = match shape {
		"bool" => Shape::Bool,
		"int" => Shape::Int,
		"uint" => Shape::Uint,
		"float" => Shape::Float,
		"string" => Shape::Str,
		"bool-array" => Shape::BoolArray,
		"int-array" => Shape::IntArray,
		"uint-array" => Shape::UintArray,
		"float-array" => Shape::FloatArray,
		"string-array" => Shape::StrArray,
		other => return Err(CmdError::UnknownShape { shape: other.to_owned() }),
	};

	Ok(parsed)
}

fn report<T: Debug>(result: jsonkey::json::Result<T>) -> Result<(), CmdError> {
	let value = result?;
	println!("decoded: {value:?}");
	Ok(())
}
