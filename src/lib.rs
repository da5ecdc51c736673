//! Typed key-path decoding for parsed JSON value trees.

/// Key-path resolution, typed decoding, and document loading helpers.
pub mod json;
