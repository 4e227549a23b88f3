// src/session.rs
// =============================================================================
// The state of one user session: what we are doing right now, the last
// report or error, and how many times the user has pressed "try again".
//
// State transitions:
//
//   Idle --analyze--> Loading --ok--> Success(report)
//                         \----err--> Failed(error) --retry--> Loading ...
//
// Retry rules:
// - Offered only after a failure, while fewer than 3 retries were used and
//   no report has been received
// - A retry resubmits the last URL the user submitted (stored here, not
//   re-read from the prompt)
// - A fresh (non-retry) submission resets the counter to 0
//
// Only one request can be in flight: analyze() borrows the session mutably
// until the request has finished, timed out or failed.
// =============================================================================

use crate::analyzer::{Analyze, AnalysisReport, AnalysisRequest, AnalyzeError};
use log::{debug, info};

pub const MAX_RETRIES: u8 = 3;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Idle,
    Loading,
    Success(AnalysisReport),
    Failed(AnalyzeError),
}

#[derive(Debug, Default)]
pub struct Session {
    status: Status,
    retries: u8,
    last_url: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn retries(&self) -> u8 {
        self.retries
    }

    /// Submits `url` and waits for the outcome
    pub async fn analyze(&mut self, analyzer: &dyn Analyze, url: &str, is_retry: bool) -> &Status {
        if is_retry {
            info!("Retrying analysis for: {} (attempt {}/{})", url, self.retries, MAX_RETRIES);
        } else {
            info!("Analyzing URL: {}", url);
            self.retries = 0;
            self.last_url = Some(url.to_string());
        }
        self.status = Status::Loading;

        let request = AnalysisRequest {
            url: url.to_string(),
        };

        self.status = match analyzer.analyze(&request).await {
            Ok(report) => {
                self.retries = 0;
                Status::Success(report)
            }
            Err(error) => {
                debug!("Analysis failed: {}", error);
                Status::Failed(error)
            }
        };

        &self.status
    }

    /// Whether "try again" should be offered right now
    pub fn can_retry(&self) -> bool {
        matches!(self.status, Status::Failed(_))
            && self.retries < MAX_RETRIES
            && self.last_url.is_some()
    }

    /// Resubmits the last URL. Returns None when no retry is allowed.
    pub async fn retry(&mut self, analyzer: &dyn Analyze) -> Option<&Status> {
        if !self.can_retry() {
            return None;
        }

        let url = self.last_url.clone()?;
        self.retries += 1;
        Some(self.analyze(analyzer, &url, true).await)
    }
}
