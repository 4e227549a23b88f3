// src/analyzer/client.rs
// =============================================================================
// Sends a URL to the analysis service and turns whatever comes back into
// either a report or an AnalyzeError.
//
// Flow of one request:
// 1. POST { "url": ... } to the endpoint
// 2. The whole exchange (sending + reading the body) races a deadline
//    (40 seconds by default). If the deadline wins, the request is dropped
//    and we report a timeout.
// 3. 2xx: parse the body as a list of issues
//    anything else: dig an error message out of the body, or fall back to
//    "Server error: <status>"
// 4. Transport failures are classified in priority order:
//    timeout -> offline -> connection refused -> anything else
//
// Rust concepts:
// - Traits: Analyze is the seam the session talks to, so tests can swap in
//   a scripted fake instead of a real server
// - tokio::time::timeout: cancels a future by dropping it
// =============================================================================

use super::connectivity::Connectivity;
use super::error::AnalyzeError;
use super::models::{AnalysisReport, AnalysisRequest, ErrorBody};
use anyhow::{Context, Result};
use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::Client;
use std::time::Duration;
use url::Url;

pub const DEFAULT_ENDPOINT: &str = "https://accessibility-analyzer-backend-tzan.onrender.com/analyze";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(40);

/// Anything that can turn an AnalysisRequest into a report.
#[async_trait]
pub trait Analyze: Send + Sync {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisReport, AnalyzeError>;
}

// How an exchange failed before classification.
// Transport errors still need the connectivity check; response errors
// are already final.
enum Failure {
    Transport(reqwest::Error),
    Response(AnalyzeError),
}

pub struct AnalyzerClient {
    http: Client,
    endpoint: Url,
    timeout: Duration,
    connectivity: Box<dyn Connectivity>,
}

impl AnalyzerClient {
    pub fn with_connectivity(
        endpoint: Url,
        timeout: Duration,
        connectivity: Box<dyn Connectivity>,
    ) -> Result<Self> {
        // No reqwest-level timeout: the deadline is enforced around the
        // whole exchange in analyze()
        let http = Client::builder()
            .user_agent(concat!("a11y-analyzer/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            http,
            endpoint,
            timeout,
            connectivity,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    // One request/response round trip, without the deadline
    async fn exchange(&self, request: &AnalysisRequest) -> Result<AnalysisReport, Failure> {
        let response = self
            .http
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await
            .map_err(Failure::Transport)?;

        let status = response.status();
        let body = response.bytes().await.map_err(Failure::Transport)?;
        debug!("Analysis service answered HTTP {} ({} bytes)", status.as_u16(), body.len());

        if !status.is_success() {
            let message = serde_json::from_slice::<ErrorBody>(&body)
                .ok()
                .and_then(ErrorBody::into_message)
                .unwrap_or_else(|| format!("Server error: {}", status.as_u16()));

            return Err(Failure::Response(AnalyzeError::ServerError {
                status: status.as_u16(),
                message,
            }));
        }

        serde_json::from_slice::<AnalysisReport>(&body).map_err(|e| {
            Failure::Response(AnalyzeError::Other(format!(
                "Invalid response from analysis server: {}",
                e
            )))
        })
    }

    // Sorts a transport error into one of the user-facing categories
    async fn classify(&self, error: reqwest::Error) -> AnalyzeError {
        warn!("Analysis request failed: {}", error);

        if error.is_timeout() {
            AnalyzeError::Timeout
        } else if !self.connectivity.is_online().await {
            AnalyzeError::NetworkUnavailable
        } else if error.is_connect() {
            AnalyzeError::ConnectionRefused
        } else {
            AnalyzeError::Other(error.to_string())
        }
    }
}

#[async_trait]
impl Analyze for AnalyzerClient {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisReport, AnalyzeError> {
        info!("POST {} for {}", self.endpoint, request.url);

        let outcome = match tokio::time::timeout(self.timeout, self.exchange(request)).await {
            Ok(outcome) => outcome,
            Err(_) => {
                warn!("No answer within {:?}, giving up", self.timeout);
                return Err(AnalyzeError::Timeout);
            }
        };

        match outcome {
            Ok(report) => {
                info!("Received {} issue(s)", report.len());
                Ok(report)
            }
            Err(Failure::Response(error)) => Err(error),
            Err(Failure::Transport(error)) => Err(self.classify(error).await),
        }
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why wrap the exchange in tokio::time::timeout instead of using
//    reqwest's own timeout?
//    - timeout() races the future against a timer
//    - If the timer wins, the future is dropped, which cancels the request
//    - Wrapping the whole exchange means a slow body counts too, not just
//      waiting for headers
//
// 2. What is #[async_trait]?
//    - Lets a trait have async methods that can be used as `dyn Analyze`
//    - Behind the scenes each call returns a boxed future
//
// 3. Why Box<dyn Connectivity>?
//    - The client doesn't care HOW we check connectivity
//    - Production code passes a TcpProbe, tests pass a fake that always
//      says "online" or "offline"
// -----------------------------------------------------------------------------
