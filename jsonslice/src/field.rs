//! Extraction of a named property's string value from a raw JSON document.

use crate::error::ExtractError;
use crate::scan::find_unescaped_quote;

/// Extracts the string value of `property` from `document`.
///
/// Locates the first literal occurrence of `"property"` (quoted, plain
/// substring search, case-sensitive), expects the fixed pattern `:"` to
/// follow it, and returns the slice up to the first unescaped closing quote.
/// The returned slice never includes the surrounding quotes and may be
/// empty. Escape sequences inside the value are preserved literally;
/// un-escaping for display is [`crate::normalize()`]'s job.
///
/// The search is positional, not key-path aware: it will match the property
/// name anywhere it appears, including inside unrelated string values, and
/// only the first occurrence is ever considered. Callers that need a later
/// occurrence pre-slice the document first, typically with
/// [`crate::extract_nth_object`].
///
/// # Errors
///
/// Returns [`ExtractError::PropertyNotFound`] when the quoted name does not
/// occur, [`ExtractError::ValuePatternMismatch`] when it is not followed by
/// `:"`, and [`ExtractError::UnterminatedValue`] when the document ends
/// before an unescaped closing quote.
pub fn extract_field<'doc>(
    property: &str,
    document: &'doc str,
) -> Result<&'doc str, ExtractError> {
    let key = format!("\"{property}\"");
    let key_start = document
        .find(&key)
        .ok_or_else(|| ExtractError::PropertyNotFound {
            property: property.to_string(),
        })?;

    let after_key = key_start + key.len();
    if !document[after_key..].starts_with(":\"") {
        return Err(ExtractError::ValuePatternMismatch {
            property: property.to_string(),
        });
    }

    let value_start = after_key + 2;
    let value_end = find_unescaped_quote(document, value_start).ok_or_else(|| {
        ExtractError::UnterminatedValue {
            property: property.to_string(),
        }
    })?;

    Ok(&document[value_start..value_end])
}
