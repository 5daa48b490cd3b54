//! Connector configuration loaded once from the environment.

use std::time::Duration;

use crate::error::ConnectorError;

/// Environment variable holding the API access key.
pub const API_KEY_ENV_VAR: &str = "OPENAI_API_KEY";
/// Environment variable holding the one-shot response model name.
pub const RESPONSE_MODEL_ENV_VAR: &str = "OPENAI_RESPONSE_MODEL";
/// Environment variable holding the one-shot completion endpoint URL.
pub const RESPONSE_ENDPOINT_ENV_VAR: &str = "OPENAI_RESPONSE_ENDPOINT";
/// Environment variable holding the thread-management endpoint base URL.
pub const THREAD_ENDPOINT_ENV_VAR: &str = "OPENAI_THREAD_ENDPOINT";
/// Environment variable holding the assistant identifier run on threads.
pub const ASSISTANT_ID_ENV_VAR: &str = "OPENAI_ASSISTANT_ID";
/// Optional override for the run polling deadline, in seconds.
pub const RUN_MAX_WAIT_ENV_VAR: &str = "RELAY_RUN_MAX_WAIT_SECS";
/// Optional override for the interval between status queries, in seconds.
pub const RUN_INTERVAL_ENV_VAR: &str = "RELAY_RUN_INTERVAL_SECS";

const DEFAULT_RUN_MAX_WAIT: Duration = Duration::from_secs(15);
const DEFAULT_RUN_INTERVAL: Duration = Duration::from_secs(1);

/// Configuration for the connector.
///
/// Constructed once at process start and passed by reference into the
/// connector; read-only after construction. [`RelayConfig::from_env`]
/// validates every required value eagerly so a missing setting surfaces
/// before any network call is attempted.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// Access key sent as a bearer token on every request.
    pub api_key: String,
    /// Model name used by the one-shot completion endpoint.
    pub response_model: String,
    /// URL of the one-shot completion endpoint.
    pub response_endpoint: String,
    /// Base URL of the thread-management endpoint.
    pub thread_endpoint: String,
    /// Identifier of the assistant run on created threads.
    pub assistant_id: String,
    /// Interval between run status queries.
    pub run_interval: Duration,
    /// Overall deadline for a run to reach `completed`.
    pub run_max_wait: Duration,
}

impl RelayConfig {
    /// Builds a configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConnectorError::Config`] naming the first required variable
    /// that is unset or empty. The polling knobs are optional and fall back
    /// to 15 seconds deadline / 1 second interval.
    pub fn from_env() -> Result<Self, ConnectorError> {
        Ok(Self {
            api_key: required(API_KEY_ENV_VAR)?,
            response_model: required(RESPONSE_MODEL_ENV_VAR)?,
            response_endpoint: required(RESPONSE_ENDPOINT_ENV_VAR)?,
            thread_endpoint: required(THREAD_ENDPOINT_ENV_VAR)?,
            assistant_id: required(ASSISTANT_ID_ENV_VAR)?,
            run_interval: optional_secs(RUN_INTERVAL_ENV_VAR, DEFAULT_RUN_INTERVAL),
            run_max_wait: optional_secs(RUN_MAX_WAIT_ENV_VAR, DEFAULT_RUN_MAX_WAIT),
        })
    }
}

fn required(name: &str) -> Result<String, ConnectorError> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConnectorError::Config {
            name: name.to_string(),
        }),
    }
}

fn optional_secs(name: &str, default: Duration) -> Duration {
    std::env::var(name)
        .ok()
        .and_then(|raw| raw.parse::<u64>().ok())
        .map_or(default, Duration::from_secs)
}
