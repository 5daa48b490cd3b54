use thiserror::Error;

/// Errors produced by the extraction primitives.
///
/// Extraction failure is an ordinary return value, never a panic: a document
/// that lacks the requested data yields the matching variant and the caller
/// decides how to surface it. Each variant carries the selector that failed
/// so the error is diagnosable without the original call site.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    /// The quoted property name does not occur anywhere in the document.
    #[error("property \"{property}\" not found in document")]
    PropertyNotFound {
        /// The property name that was searched for.
        property: String,
    },

    /// The property name occurs but is not followed by `:"`.
    #[error("property \"{property}\" is not followed by a string value")]
    ValuePatternMismatch {
        /// The property name that was searched for.
        property: String,
    },

    /// The value's opening quote is never closed by an unescaped quote.
    #[error("string value of \"{property}\" is unterminated")]
    UnterminatedValue {
        /// The property name whose value ran off the end of the document.
        property: String,
    },

    /// Object ordinals are 1-based; zero is a caller contract violation.
    #[error("object ordinal must be at least 1")]
    InvalidOrdinal,

    /// A closing brace appeared with nothing open at the requested depth.
    #[error("unbalanced braces while scanning for object {ordinal} at depth {depth}")]
    UnbalancedBraces {
        /// The 1-based position that was requested.
        ordinal: usize,
        /// The nesting depth that was requested.
        depth: usize,
    },

    /// The document holds no object at the requested position.
    #[error("no object at position {ordinal} at depth {depth}")]
    ObjectNotFound {
        /// The 1-based position that was requested.
        ordinal: usize,
        /// The nesting depth that was requested.
        depth: usize,
    },
}
