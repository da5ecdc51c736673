mod decodable;
mod decode;
mod error;
mod load;
mod path;
mod raw;
mod value;
mod variant;

/// From-mapping construction capability.
pub use decodable::FromJson;
/// Key-path decode operations over mapping nodes.
pub use decode::JsonObjectExt;
/// Error and result aliases.
pub use error::{DecodeError, LoadError, Result};
/// File and buffer loading entry points.
pub use load::{object_from_file, object_from_slice, object_from_str};
/// Dotted key path parser and resolver.
pub use path::KeyPath;
/// Raw scalar extraction capability.
pub use raw::JsonRaw;
/// Tree node aliases and kind helper.
pub use value::{JsonArray, JsonObject, JsonValue, value_kind};
/// Finite-case raw value capability.
pub use variant::FromRaw;
