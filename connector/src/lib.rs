//! thread-relay connects a chat front end to a remote assistant API.
//!
//! The remote service persists conversations as threads and answers them
//! through asynchronously-executing runs. This crate sequences that
//! protocol — create thread, append message, start run, poll the run to
//! completion, fetch the reply — and leans on the `jsonslice` crate to pull
//! the handful of needed values out of each raw response body without a
//! full JSON parser.

/// Connector configuration loaded from the environment.
pub mod config;
/// The thin orchestrator over threads, messages, and runs.
pub mod connector;
/// Error types returned by connector operations.
pub mod error;
/// HTTP client collaborator seam.
pub mod http;
/// Bounded polling of asynchronous run status.
pub mod poller;
/// Identifier and status types for threads and runs.
pub mod types;

pub use config::RelayConfig;
pub use connector::{Connector, ThreadReply};
pub use error::ConnectorError;
pub use http::{HttpRequest, HttpResponse, HttpSend, Method, ReqwestClient, TransportError};
pub use poller::{PollOutcome, RunPoller};
pub use types::{RunId, RunStatus, ThreadId};
