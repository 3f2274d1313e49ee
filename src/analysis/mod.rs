//! String property extraction
//!
//! Pure derivation of textual properties from a stored string. Extraction
//! has no failure modes: every input, including the empty string, yields a
//! result.

mod properties;

pub use properties::{content_hash, extract, StringProperties};
