// src/analyzer/models.rs
// =============================================================================
// The data that goes over the wire to and from the analysis service.
//
// Request:  { "url": "https://example.com" }
// Response: [ { "impact": "serious", "help": "...", "description": "...",
//               "nodes": [ { "html": "<img src=...>" } ] }, ... ]
//
// The service runs axe-core and hands back its list of violations, so the
// field names follow axe's camelCase JSON. We only keep what we print.
// =============================================================================

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// What we send: the URL the user wants analyzed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub url: String,
}

/// How bad an issue is, as reported by the service.
///
/// Anything we don't recognize (including a missing or `null` impact)
/// becomes `Unknown` instead of failing the whole report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    Critical,
    Serious,
    Moderate,
    Minor,
    #[default]
    Unknown,
}

impl Impact {
    pub fn as_str(&self) -> &'static str {
        match self {
            Impact::Critical => "critical",
            Impact::Serious => "serious",
            Impact::Moderate => "moderate",
            Impact::Minor => "minor",
            Impact::Unknown => "unknown",
        }
    }

    fn from_label(label: &str) -> Self {
        match label.to_ascii_lowercase().as_str() {
            "critical" => Impact::Critical,
            "serious" => Impact::Serious,
            "moderate" => Impact::Moderate,
            "minor" => Impact::Minor,
            _ => Impact::Unknown,
        }
    }
}

impl fmt::Display for Impact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Impact {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label: Option<String> = Option::deserialize(deserializer)?;
        Ok(label.as_deref().map(Impact::from_label).unwrap_or_default())
    }
}

/// One element on the page that triggered an issue.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AffectedNode {
    /// Markup snippet of the offending element
    #[serde(default)]
    pub html: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_summary: Option<String>,
}

/// A single accessibility finding.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    /// Rule id, e.g. "image-alt"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub impact: Impact,
    #[serde(default)]
    pub help: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help_url: Option<String>,
    #[serde(default)]
    pub nodes: Vec<AffectedNode>,
}

/// Everything the service found for one URL, in the order it sent them.
pub type AnalysisReport = Vec<Issue>;

/// Error body sent with a non-2xx status.
///
/// The documented shape is `{ "message": ... }`, the reference backend
/// answers with `{ "error": ... }`; we take either.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl ErrorBody {
    pub(crate) fn into_message(self) -> Option<String> {
        self.message
            .into_iter()
            .chain(self.error)
            .find(|text| !text.trim().is_empty())
    }
}
