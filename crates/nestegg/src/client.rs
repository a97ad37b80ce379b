//! Engine client and the single-flight submission pipeline
//!
//! The store owns the gate; this module owns the transport. A submission
//! snapshots the profile while holding the store lock, releases the lock for
//! the duration of the call (edits keep working while a run is outstanding),
//! and closes the gate again on every outcome, so the store can never be
//! left submitting forever.

use std::sync::Mutex;
use std::time::Duration;

use nestegg_core::ProfileStore;
use nestegg_core::model::{SimulationInput, SimulationSummary};
use nestegg_core::wire::{RUN_ENDPOINT, SimulationRequest, SimulationResponse, WireInput};
use reqwest::{Client, StatusCode, Url};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid engine URL: {0}")]
    Url(#[from] url::ParseError),
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("engine returned HTTP {0}")]
    Status(StatusCode),
    #[error("engine rejected the run: {0}")]
    Engine(String),
    #[error("malformed engine response: {0}")]
    Decode(String),
}

#[derive(Debug, Error)]
pub enum SubmitError {
    /// The store's gate was closed; no request was issued.
    #[error("a submission is already in flight")]
    InFlight,
    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// HTTP client for the projection engine.
#[derive(Debug, Clone)]
pub struct EngineClient {
    http: Client,
    base_url: Url,
}

impl EngineClient {
    /// Build a client for the engine at `base_url`.
    ///
    /// The timeout covers the whole call; a hung engine becomes a request
    /// error instead of an indefinitely outstanding submission.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, EngineError> {
        let base_url = Url::parse(base_url)?;
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self { http, base_url })
    }

    /// POST one profile to the engine and decode the summary.
    pub async fn run(&self, input: &SimulationInput) -> Result<SimulationSummary, EngineError> {
        let mut url = self.base_url.clone();
        url.set_path(RUN_ENDPOINT);
        let request = SimulationRequest {
            input: WireInput::from_input(input),
        };
        tracing::debug!(
            iterations = input.simulation_params.iterations,
            holdings = input.holding_count(),
            "submitting projection run"
        );

        let response = self.http.post(url).json(&request).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(EngineError::Status(status));
        }

        let body = response.bytes().await?;
        let parsed: SimulationResponse =
            serde_json::from_slice(&body).map_err(|err| EngineError::Decode(err.to_string()))?;
        if !parsed.success {
            let reason = parsed
                .error
                .unwrap_or_else(|| "engine reported failure without a reason".to_string());
            return Err(EngineError::Engine(reason));
        }
        parsed
            .data
            .ok_or_else(|| EngineError::Decode("success response carries no data".to_string()))
    }
}

/// Run one submission through the store's single-flight gate.
///
/// The outcome is both returned and recorded in the store; a rejected
/// attempt leaves the store untouched and issues no request.
pub async fn submit(
    store: &Mutex<ProfileStore>,
    engine: &EngineClient,
) -> Result<SimulationSummary, SubmitError> {
    let snapshot = {
        let mut guard = store.lock().unwrap();
        match guard.begin_submission() {
            Some(snapshot) => snapshot,
            None => return Err(SubmitError::InFlight),
        }
    };

    let outcome = engine.run(&snapshot).await;

    let mut guard = store.lock().unwrap();
    match outcome {
        Ok(summary) => {
            guard.complete_submission(Ok(summary.clone()));
            Ok(summary)
        }
        Err(err) => {
            guard.complete_submission(Err(err.to_string()));
            Err(err.into())
        }
    }
}
