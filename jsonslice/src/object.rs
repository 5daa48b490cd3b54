//! Extraction of the Nth object found at a given nesting depth.

use crate::error::ExtractError;
use crate::scan::match_balanced_braces;

/// Extracts the `ordinal`-th object found at `depth` from `document`.
///
/// `depth` counts outer `{` characters to skip before objects start being
/// counted; `ordinal` selects the Nth such object in document order,
/// starting at 1. The remote API wraps lists of interest in an envelope
/// object (`{"data":[{...},{...}]}`), so `depth = 1` means "ignore the one
/// outer brace, then count objects inside the array". The returned slice
/// spans exactly one balanced `{...}` region and the scan stops as soon as
/// that region closes; the remainder of a large document is never visited.
///
/// Like [`crate::scan::match_balanced_braces`], the scan does not skip
/// braces inside quoted string values.
///
/// # Errors
///
/// Returns [`ExtractError::InvalidOrdinal`] when `ordinal` is zero (a caller
/// contract violation, distinct from any "not found" outcome),
/// [`ExtractError::UnbalancedBraces`] when a `}` appears with nothing open,
/// and [`ExtractError::ObjectNotFound`] when the document holds fewer than
/// `ordinal` objects at `depth`.
pub fn extract_nth_object(
    ordinal: usize,
    depth: usize,
    document: &str,
) -> Result<&str, ExtractError> {
    if ordinal == 0 {
        return Err(ExtractError::InvalidOrdinal);
    }

    let mut ignored_opens = 0usize;
    let mut unclosed = 0usize;
    let mut objects_found = 0usize;

    for (index, ch) in document.char_indices() {
        match ch {
            '{' if ignored_opens < depth => ignored_opens += 1,
            '{' => {
                unclosed += 1;
                // An open at nesting level one starts a new object of interest.
                if unclosed == 1 {
                    objects_found += 1;
                    if objects_found == ordinal {
                        let end = match_balanced_braces(document, index)
                            .ok_or(ExtractError::ObjectNotFound { ordinal, depth })?;
                        return Ok(&document[index..=end]);
                    }
                }
            }
            '}' => {
                if unclosed == 0 {
                    if ignored_opens > 0 {
                        // The envelope closed before the requested object appeared.
                        return Err(ExtractError::ObjectNotFound { ordinal, depth });
                    }
                    return Err(ExtractError::UnbalancedBraces { ordinal, depth });
                }
                unclosed -= 1;
            }
            _ => {}
        }
    }

    Err(ExtractError::ObjectNotFound { ordinal, depth })
}
