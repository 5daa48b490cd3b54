//! Bounded polling of asynchronous run status.
//!
//! An assistant run completes asynchronously on the remote side; the only
//! way to observe it is to query its status until it reports `completed` or
//! a deadline passes. The poller owns that loop as an explicit state
//! machine so the timing behavior is testable on tokio's paused clock
//! without real time passing.

use std::future::Future;
use std::time::Duration;

use tokio::time::{sleep, Instant};

use crate::http::TransportError;
use crate::types::RunStatus;

/// States of a poll in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PollState {
    /// Still querying; no terminal condition observed yet.
    Waiting,
    /// The run reported `completed`.
    Completed,
    /// The deadline elapsed without observing `completed`.
    Expired,
}

/// Final outcome of a single [`RunPoller::poll`] invocation.
///
/// Produced once per invocation and never mutated after creation. The error
/// payload is generic so callers can thread their own failure type through
/// the status query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollOutcome<E = TransportError> {
    /// The run reached `completed` within the deadline.
    Completed,
    /// The deadline elapsed first.
    TimedOut {
        /// Time actually spent waiting.
        waited: Duration,
        /// The configured deadline.
        deadline: Duration,
    },
    /// A status query failed; a single failure aborts the wait.
    TransportFailure(E),
}

/// Repeatedly queries a run's status with a fixed interval and an overall
/// deadline.
///
/// Every non-`completed` status, including the remote failure terminals
/// (`failed`, `cancelled`, `expired`), keeps the poller waiting until the
/// deadline. The poller never busy-spins: each non-terminal query is
/// followed by an async sleep of `interval`, so the wait occupies the
/// calling task but never a thread.
#[derive(Debug, Clone, Copy)]
pub struct RunPoller {
    interval: Duration,
    max_wait: Duration,
}

impl RunPoller {
    /// Creates a poller that queries every `interval` and gives up once
    /// elapsed time reaches `max_wait`.
    #[must_use]
    pub const fn new(interval: Duration, max_wait: Duration) -> Self {
        Self { interval, max_wait }
    }

    /// Drives `status_query` until the run completes, the deadline passes,
    /// or a query fails.
    ///
    /// Returns in bounded time: at most `max_wait` plus one query
    /// round-trip. The deadline is checked after each query, so a run that
    /// completes exactly on the deadline still counts as completed.
    pub async fn poll<F, Fut, E>(&self, mut status_query: F) -> PollOutcome<E>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<RunStatus, E>>,
    {
        let started = Instant::now();
        let mut attempts = 0u32;
        let mut state = PollState::Waiting;

        while state == PollState::Waiting {
            attempts += 1;
            match status_query().await {
                Err(failure) => return PollOutcome::TransportFailure(failure),
                Ok(status) if status.is_completed() => state = PollState::Completed,
                Ok(status) => {
                    if started.elapsed() >= self.max_wait {
                        state = PollState::Expired;
                    } else {
                        tracing::debug!(?status, attempts, "run not complete; waiting");
                        sleep(self.interval).await;
                    }
                }
            }
        }

        match state {
            PollState::Completed => PollOutcome::Completed,
            _ => PollOutcome::TimedOut {
                waited: started.elapsed(),
                deadline: self.max_wait,
            },
        }
    }
}
