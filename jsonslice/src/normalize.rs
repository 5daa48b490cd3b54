//! Un-escaping of extracted values for display.

/// Rewrites the fixed set of JSON escape sequences into their display form.
///
/// Escaped newlines become real newlines and escaped quotes become bare
/// quotes; nothing else is touched. The two patterns cannot overlap, so the
/// replacement order does not matter, and the function is idempotent on
/// already-normalized input. Apply this only to the final human-facing
/// value, never to identifiers that flow back into request URLs.
#[must_use]
pub fn normalize(text: &str) -> String {
    text.replace("\\n", "\n").replace("\\\"", "\"")
}
