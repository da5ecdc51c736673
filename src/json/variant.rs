use std::fmt::Display;

use crate::json::JsonRaw;

/// Capability for finite-case types keyed one-to-one by raw scalar values.
pub trait FromRaw: Sized {
	/// Underlying raw scalar kind, string- or integer-backed in practice.
	type Raw: JsonRaw + Display;

	/// Type descriptor used in unknown-variant errors.
	const NAME: &'static str;

	/// Map a raw value onto a known case.
	fn from_raw(raw: Self::Raw) -> Option<Self>;
}
