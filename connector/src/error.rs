//! Error types returned by connector operations.

use std::time::Duration;
use thiserror::Error;

use crate::http::TransportError;

/// Errors that can occur while driving the remote assistant API.
///
/// Extraction and polling failures are ordinary values all the way up to
/// this boundary; nothing in the connector uses panics or exceptions for
/// control flow. None of these variants is retried by the connector itself —
/// retry policy, if any, belongs to the caller.
#[derive(Debug, Error)]
pub enum ConnectorError {
    /// A required setting is missing or empty. Detected eagerly at
    /// construction, before any network call.
    #[error("required setting {name} is not configured")]
    Config {
        /// Name of the missing environment variable.
        name: String,
    },

    /// A successful response did not contain the expected data. A malformed
    /// response shape is not a transient condition.
    #[error("could not locate expected data in response: {0}")]
    Parse(#[from] jsonslice::ExtractError),

    /// The HTTP call succeeded at the transport layer but returned a
    /// non-2xx status. The raw body is kept for diagnostics.
    #[error("remote request failed with status {status}: {body}")]
    RemoteRequest {
        /// HTTP status code of the failed request.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// The run did not reach `completed` before the polling deadline.
    #[error("assistant run timed out after {waited:?} (deadline {deadline:?}, interval {interval:?})")]
    RunTimeout {
        /// Time actually spent waiting.
        waited: Duration,
        /// Configured overall deadline.
        deadline: Duration,
        /// Configured interval between status queries.
        interval: Duration,
    },

    /// The HTTP collaborator itself failed.
    #[error(transparent)]
    Transport(#[from] TransportError),
}
