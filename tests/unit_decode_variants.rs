#![allow(missing_docs)]

use jsonkey::json::{DecodeError, FromRaw, JsonObject, JsonObjectExt, JsonValue};
use serde_json::json;

#[derive(Debug, PartialEq)]
enum Flavour {
	One,
	Two,
}

impl FromRaw for Flavour {
	type Raw = String;

	const NAME: &'static str = "Flavour";

	fn from_raw(raw: String) -> Option<Self> {
		match raw.as_str() {
			"one" => Some(Self::One),
			"two" => Some(Self::Two),
			_ => None,
		}
	}
}

#[derive(Debug, PartialEq)]
enum Priority {
	Low,
	High,
}

impl FromRaw for Priority {
	type Raw = i64;

	const NAME: &'static str = "Priority";

	fn from_raw(raw: i64) -> Option<Self> {
		match raw {
			0 => Some(Self::Low),
			1 => Some(Self::High),
			_ => None,
		}
	}
}

#[test]
fn known_cases_decode() {
	let document = object(json!({"flavour": "two", "priority": 1}));

	assert_eq!(document.variant::<Flavour>("flavour").expect("case decodes"), Flavour::Two);
	assert_eq!(document.variant_opt::<Flavour>("flavour"), Some(Flavour::Two));
	assert_eq!(document.variant::<Priority>("priority").expect("case decodes"), Priority::High);
}

// The same target type must fail differently for "key absent" and for
// "key present but value matches no case".
#[test]
fn unknown_value_and_missing_key_are_distinguishable() {
	let document = object(json!({"flavour": "three"}));

	let err = document.variant::<Flavour>("flavour").expect_err("no such case");
	assert_eq!(
		err,
		DecodeError::UnknownVariant {
			key_path: "flavour".to_owned(),
			type_name: "Flavour",
			raw: "three".to_owned(),
		}
	);

	let err = document.variant::<Flavour>("flavourIncorrect").expect_err("missing key");
	assert_eq!(err, DecodeError::KeyNotFound { key_path: "flavourIncorrect".to_owned() });

	assert_eq!(document.variant_opt::<Flavour>("flavour"), None);
	assert_eq!(document.variant_opt::<Flavour>("flavourIncorrect"), None);
}

#[test]
fn wrong_kind_node_is_a_type_mismatch() {
	let document = object(json!({"flavour": 3}));

	let err = document.variant::<Flavour>("flavour").expect_err("underlying kind is string");
	assert_eq!(
		err,
		DecodeError::TypeMismatch {
			key_path: "flavour".to_owned(),
			expected: "string".to_owned(),
			found: "integer",
		}
	);
}

#[test]
fn unmatched_array_elements_are_dropped() {
	let document = object(json!({"flavours": ["one", "!@1", "two"]}));

	let decoded: Vec<Flavour> = document.variant_array("flavours").expect("sequence decodes");
	assert_eq!(decoded, vec![Flavour::One, Flavour::Two]);

	let optional: Option<Vec<Flavour>> = document.variant_array_opt("flavours");
	assert_eq!(optional, Some(vec![Flavour::One, Flavour::Two]));
}

#[test]
fn missing_array_key_is_key_not_found() {
	let document = object(json!({"flavours": ["one"]}));

	let err = document.variant_array::<Flavour>("invalid_key").expect_err("missing key");
	assert_eq!(err, DecodeError::KeyNotFound { key_path: "invalid_key".to_owned() });
	assert_eq!(document.variant_array_opt::<Flavour>("invalid_key"), None);
}

#[test]
fn integer_backed_array_drops_out_of_range_values() {
	let document = object(json!({"priorities": [0, 7, 1]}));

	let decoded: Vec<Priority> = document.variant_array("priorities").expect("sequence decodes");
	assert_eq!(decoded, vec![Priority::Low, Priority::High]);
}

#[test]
fn unknown_variant_rendering_is_deterministic() {
	let document = object(json!({"flavour": "three"}));

	let err = document.variant::<Flavour>("flavour").expect_err("no such case");
	assert_eq!(err.to_string(), "no case of Flavour matches raw value \"three\" at flavour");
}

fn object(value: JsonValue) -> JsonObject {
	value.as_object().expect("fixture is an object").clone()
}
