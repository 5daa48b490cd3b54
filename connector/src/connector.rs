//! Thin orchestrator sequencing thread creation, messaging, runs, and
//! polling against the remote assistant API.

use serde::{Deserialize, Serialize};
use tokio::time::Instant;

use crate::config::RelayConfig;
use crate::error::ConnectorError;
use crate::http::{HttpRequest, HttpResponse, HttpSend, Method, ReqwestClient};
use crate::poller::{PollOutcome, RunPoller};
use crate::types::{RunId, RunStatus, ThreadId};

/// The assistant's reply to one thread message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreadReply {
    /// Normalized reply text.
    pub text: String,
    /// Identifier of the run that produced the reply.
    pub run_id: RunId,
    /// Wall-clock time spent waiting for the run, in milliseconds.
    pub waited_ms: u64,
}

/// Client for the remote assistant API.
///
/// Sequences each multi-step operation synchronously: no step begins before
/// the previous HTTP call returns. The connector holds no mutable state, so
/// one instance may serve any number of concurrent callers.
#[derive(Debug, Clone)]
pub struct Connector<C = ReqwestClient> {
    config: RelayConfig,
    http: C,
}

impl Connector<ReqwestClient> {
    /// Creates a connector from the process environment with the production
    /// HTTP collaborator.
    ///
    /// # Errors
    ///
    /// Returns [`ConnectorError::Config`] when a required setting is absent;
    /// see [`RelayConfig::from_env`].
    pub fn from_env() -> Result<Self, ConnectorError> {
        Ok(Self::with_client(
            RelayConfig::from_env()?,
            ReqwestClient::new(),
        ))
    }
}

impl<C: HttpSend> Connector<C> {
    /// Creates a connector over an explicit configuration and collaborator.
    pub const fn with_client(config: RelayConfig, http: C) -> Self {
        Self { config, http }
    }

    /// Sends a one-shot prompt to the response model and returns the raw
    /// reply content.
    ///
    /// # Errors
    ///
    /// Returns [`ConnectorError::RemoteRequest`] on a non-2xx status,
    /// [`ConnectorError::Parse`] when the response lacks a `content` field,
    /// and [`ConnectorError::Transport`] on a network failure.
    pub async fn prompt(&self, prompt: &str) -> Result<String, ConnectorError> {
        let body = serde_json::json!({
            "model": self.config.response_model,
            "messages": [{"role": "user", "content": prompt}],
        });
        let response = self
            .post(self.config.response_endpoint.clone(), Some(body.to_string()), false)
            .await?;
        Ok(jsonslice::extract_field("content", &response.body)?.to_string())
    }

    /// Creates a new conversation thread on the remote service.
    ///
    /// # Errors
    ///
    /// See [`Connector::prompt`]; parse failure here means the response had
    /// no `id` field.
    pub async fn create_thread(&self) -> Result<ThreadId, ConnectorError> {
        let response = self
            .post(self.config.thread_endpoint.clone(), None, true)
            .await?;
        let id = ThreadId::from(jsonslice::extract_field("id", &response.body)?);
        tracing::debug!(thread = %id, "created thread");
        Ok(id)
    }

    /// Appends a user message to `thread`.
    ///
    /// # Errors
    ///
    /// See [`Connector::prompt`].
    pub async fn post_message(
        &self,
        thread: &ThreadId,
        message: &str,
    ) -> Result<(), ConnectorError> {
        let url = format!("{}/{thread}/messages", self.config.thread_endpoint);
        let body = serde_json::json!({"role": "user", "content": message});
        self.post(url, Some(body.to_string()), true).await?;
        Ok(())
    }

    /// Starts the configured assistant on `thread` and returns the run id.
    ///
    /// # Errors
    ///
    /// See [`Connector::prompt`].
    pub async fn start_run(&self, thread: &ThreadId) -> Result<RunId, ConnectorError> {
        let url = format!("{}/{thread}/runs", self.config.thread_endpoint);
        let body = serde_json::json!({"assistant_id": self.config.assistant_id});
        let response = self.post(url, Some(body.to_string()), true).await?;
        let id = RunId::from(jsonslice::extract_field("id", &response.body)?);
        tracing::debug!(thread = %thread, run = %id, "started assistant run");
        Ok(id)
    }

    /// Queries the current status of `run` on `thread`.
    ///
    /// # Errors
    ///
    /// See [`Connector::prompt`].
    pub async fn run_status(
        &self,
        thread: &ThreadId,
        run: &RunId,
    ) -> Result<RunStatus, ConnectorError> {
        let url = format!("{}/{thread}/runs/{run}", self.config.thread_endpoint);
        let response = self.get(url).await?;
        Ok(RunStatus::from_raw(jsonslice::extract_field(
            "status",
            &response.body,
        )?))
    }

    /// Retrieves the newest message on `thread`, normalized for display.
    ///
    /// The messages endpoint returns every message on the thread, newest
    /// first, so the first object inside the `data` envelope is the reply
    /// when an assistant run has just finished.
    ///
    /// # Errors
    ///
    /// See [`Connector::prompt`]; parse failure here means the envelope held
    /// no message object or the message had no `value` field.
    pub async fn latest_reply(&self, thread: &ThreadId) -> Result<String, ConnectorError> {
        let url = format!("{}/{thread}/messages", self.config.thread_endpoint);
        let response = self.get(url).await?;
        let newest = jsonslice::extract_nth_object(1, 1, &response.body)?;
        let value = jsonslice::extract_field("value", newest)?;
        Ok(jsonslice::normalize(value))
    }

    /// Sends a message to `thread`, runs the assistant on it, waits for the
    /// run to complete, and returns the assistant's reply.
    ///
    /// # Errors
    ///
    /// In addition to the per-step errors, returns
    /// [`ConnectorError::RunTimeout`] when the run does not complete within
    /// the configured deadline.
    pub async fn prompt_thread(
        &self,
        message: &str,
        thread: &ThreadId,
    ) -> Result<ThreadReply, ConnectorError> {
        self.post_message(thread, message).await?;
        let run = self.start_run(thread).await?;

        let poller = RunPoller::new(self.config.run_interval, self.config.run_max_wait);
        let started = Instant::now();
        let outcome = poller.poll(|| self.run_status(thread, &run)).await;

        match outcome {
            PollOutcome::Completed => {
                let text = self.latest_reply(thread).await?;
                Ok(ThreadReply {
                    text,
                    run_id: run,
                    waited_ms: started.elapsed().as_millis() as u64,
                })
            }
            PollOutcome::TimedOut { waited, deadline } => Err(ConnectorError::RunTimeout {
                waited,
                deadline,
                interval: self.config.run_interval,
            }),
            PollOutcome::TransportFailure(error) => Err(error),
        }
    }

    async fn post(
        &self,
        url: String,
        body: Option<String>,
        assistants: bool,
    ) -> Result<HttpResponse, ConnectorError> {
        let mut headers = vec![
            (
                "Authorization".to_string(),
                format!("Bearer {}", self.config.api_key),
            ),
            ("Content-Type".to_string(), "application/json".to_string()),
        ];
        if assistants {
            headers.push(("OpenAI-Beta".to_string(), "assistants=v2".to_string()));
        }
        self.send(HttpRequest {
            method: Method::Post,
            url,
            headers,
            body,
        })
        .await
    }

    async fn get(&self, url: String) -> Result<HttpResponse, ConnectorError> {
        let headers = vec![
            (
                "Authorization".to_string(),
                format!("Bearer {}", self.config.api_key),
            ),
            ("OpenAI-Beta".to_string(), "assistants=v2".to_string()),
        ];
        self.send(HttpRequest {
            method: Method::Get,
            url,
            headers,
            body: None,
        })
        .await
    }

    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ConnectorError> {
        let url = request.url.clone();
        tracing::debug!(%url, method = ?request.method, "sending request to remote API");

        let response = self.http.send(request).await?;
        if response.is_success() {
            Ok(response)
        } else {
            tracing::warn!(%url, status = response.status, "remote API returned a non-success status");
            Err(ConnectorError::RemoteRequest {
                status: response.status,
                body: response.body,
            })
        }
    }
}
