// src/analyzer/mod.rs
// =============================================================================
// This module talks to the remote accessibility-analysis service.
//
// Submodules:
// - models: what we send (AnalysisRequest) and what we get back (Issue, ...)
// - client: the HTTP client with its deadline and failure classification
// - connectivity: "are we online?" probe used when a request fails
// - error: the AnalyzeError taxonomy and its user-facing messages
// =============================================================================

mod client;
mod connectivity;
mod error;
mod models;

pub use client::{Analyze, AnalyzerClient, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT};
pub use connectivity::{TcpProbe, DEFAULT_PROBE_ADDR, DEFAULT_PROBE_TIMEOUT};
pub use error::{AnalyzeError, INVALID_URL_MESSAGE};
pub use models::{AffectedNode, AnalysisReport, AnalysisRequest, Impact, Issue};
