// src/input.rs
// =============================================================================
// The input collector: holds what the user typed and decides whether it is
// a URL we are willing to send.
//
// Two rules borrowed from how web forms behave:
// - Don't nag before the user has interacted with the field ("touched")
// - Never submit something that doesn't parse as a URL; that check happens
//   locally, so no network call is made for bad input
// =============================================================================

use crate::analyzer::{AnalysisRequest, AnalyzeError, INVALID_URL_MESSAGE};
use url::Url;

/// Returns true if `candidate` parses as a URL (WHATWG URL syntax)
///
/// Examples:
///   "https://example.com"  -> true
///   "example.com"          -> false (no scheme)
///   ""                     -> false
pub fn is_valid_url(candidate: &str) -> bool {
    Url::parse(candidate).is_ok()
}

#[derive(Debug, Clone)]
pub struct UrlField {
    value: String,
    valid: bool,
    touched: bool,
}

impl Default for UrlField {
    fn default() -> Self {
        Self {
            value: String::new(),
            valid: true,
            touched: false,
        }
    }
}

impl UrlField {
    pub fn new() -> Self {
        Self::default()
    }

    /// The user typed something: remember it and re-check it
    pub fn input(&mut self, value: &str) {
        self.value = value.to_string();
        self.touched = true;
        self.valid = is_valid_url(value);
    }

    /// The user left the field without typing
    pub fn blur(&mut self) {
        self.touched = true;
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Inline error to show under the field, if any
    pub fn error(&self) -> Option<&'static str> {
        if !self.valid && self.touched {
            Some(INVALID_URL_MESSAGE)
        } else {
            None
        }
    }

    /// Whether the "Analyze" action is enabled
    pub fn can_submit(&self) -> bool {
        self.valid && !self.value.is_empty()
    }

    /// Turns the current value into a request, or rejects it locally
    pub fn submit(&mut self) -> Result<AnalysisRequest, AnalyzeError> {
        if is_valid_url(&self.value) {
            Ok(AnalysisRequest {
                url: self.value.clone(),
            })
        } else {
            self.valid = false;
            Err(AnalyzeError::Validation(self.value.clone()))
        }
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why does submit() take &mut self?
//    - A rejected submit marks the field invalid, so the error shows up as
//      soon as the field is touched
//
// 2. What counts as a URL?
//    - Whatever Url::parse accepts: it follows the same URL standard browsers
//      use, so "https://example.com" is fine but "example.com" (no scheme)
//      is not
// -----------------------------------------------------------------------------
