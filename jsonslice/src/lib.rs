//! Escape-aware extraction of fields and objects from raw JSON text.
//!
//! This crate pulls individual string values and nested objects out of a raw
//! JSON document without running a full parser. It exists for callers that
//! receive well-formed API responses and only need one or two values from
//! them: a single left-to-right scan is enough, and the input is returned as
//! borrowed slices rather than an allocated document tree.
//!
//! The primitives are deliberately positional, not key-path aware. See the
//! documented limitations on [`extract_field`] and
//! [`scan::match_balanced_braces`] before using them on untrusted input.

/// Error types returned by extraction operations.
pub mod error;
/// Extraction of a named property's string value.
pub mod field;
/// Un-escaping of extracted values for display.
pub mod normalize;
/// Extraction of the Nth object found at a given nesting depth.
pub mod object;
/// Single-pass scanning primitives with escape and brace tracking.
pub mod scan;

pub use error::ExtractError;
pub use field::extract_field;
pub use normalize::normalize;
pub use object::extract_nth_object;
