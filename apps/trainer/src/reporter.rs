//! Progress reporter: posts each verdict back to the training page.
//!
//! Reports are fire-and-forget. `report` spawns the request and returns
//! immediately; failures are logged and dropped, never retried.

use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use reqwest::header::COOKIE;
use reqwest::{Client, Url};
use tokio::runtime::Handle;
use tokio::task::JoinSet;
use training_core::{Reporter, Verdict};

use crate::config::Config;
use crate::error::{Result, TrainerError};

pub const CSRF_HEADER: &str = "X-CSRFToken";

/// Sends verdicts to `POST <page-url>` with the anti-forgery token.
pub struct HttpReporter {
    client: Client,
    endpoint: Url,
    csrf_token: String,
    cookie: String,
    runtime: Handle,
    in_flight: Mutex<JoinSet<()>>,
}

impl HttpReporter {
    /// Create a reporter bound to the current Tokio runtime.
    pub fn new(config: &Config) -> Result<Self> {
        let runtime = Handle::try_current().map_err(|_| TrainerError::NoRuntime)?;
        Ok(Self {
            client: Client::new(),
            endpoint: config.page_url.clone(),
            csrf_token: config.csrf_token.clone(),
            cookie: config.cookie_header(),
            runtime,
            in_flight: Mutex::new(JoinSet::new()),
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Reports dispatched but not yet reaped.
    pub fn in_flight(&self) -> usize {
        self.in_flight
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Wait up to `timeout` for reports still on the wire.
    ///
    /// Only used at shutdown so the last verdict isn't cut off by the
    /// runtime exiting. Returns the number of reports that did not finish.
    pub async fn flush(&self, timeout: Duration) -> usize {
        let mut pending = std::mem::take(
            &mut *self
                .in_flight
                .lock()
                .unwrap_or_else(PoisonError::into_inner),
        );

        let drained = tokio::time::timeout(timeout, async {
            while pending.join_next().await.is_some() {}
        })
        .await;

        if drained.is_err() {
            tracing::warn!(
                abandoned = pending.len(),
                "progress reports still pending at shutdown"
            );
        }
        pending.len()
    }
}

impl Reporter for HttpReporter {
    fn report(&self, verdict: &Verdict) {
        tracing::debug!(
            id = %verdict.id,
            direction = %verdict.direction,
            correctness = verdict.correctness,
            "dispatching progress report"
        );

        let request = self
            .client
            .post(self.endpoint.clone())
            .header(CSRF_HEADER, &self.csrf_token)
            .header(COOKIE, &self.cookie)
            .json(verdict);
        let id = verdict.id.clone();

        let mut in_flight = self
            .in_flight
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        while in_flight.try_join_next().is_some() {}
        in_flight.spawn_on(
            async move {
                match request.send().await {
                    Ok(resp) => {
                        let status = resp.status();
                        // Body is JSON by contract but nothing reads it.
                        if let Err(e) = resp.json::<serde_json::Value>().await {
                            tracing::debug!(%id, error = %e, "progress response was not JSON");
                        }
                        tracing::debug!(%id, %status, "progress reported");
                    }
                    Err(e) => {
                        tracing::warn!(%id, error = %e, "progress report lost");
                    }
                }
            },
            &self.runtime,
        );
    }
}
