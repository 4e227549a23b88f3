// src/report.rs
// =============================================================================
// Turns an AnalysisReport into something a person can read.
//
// Text layout (one "card" per issue, in the order the service sent them):
//
//   🔍 Issues Found: 2
//
//   ⚠️  Images must have alternate text
//      Description: Ensures <img> elements have alternate text
//      Impact: critical
//      Affected Elements:
//        - <img src="logo.png">
//
// There is nothing to validate here: whatever list we get, we print.
// =============================================================================

use crate::analyzer::{AnalysisReport, Issue};
use anyhow::Result;
use std::fmt::Write;

pub fn render_report(report: &AnalysisReport) -> String {
    let mut out = format!("🔍 Issues Found: {}\n", report.len());

    for issue in report {
        out.push('\n');
        render_issue(&mut out, issue);
    }

    out
}

fn render_issue(out: &mut String, issue: &Issue) {
    // Writing into a String never fails
    let _ = writeln!(out, "⚠️  {}", issue.help);
    let _ = writeln!(out, "   Description: {}", issue.description);
    let _ = writeln!(out, "   Impact: {}", issue.impact);
    if let Some(help_url) = &issue.help_url {
        let _ = writeln!(out, "   Learn more: {}", help_url);
    }
    let _ = writeln!(out, "   Affected Elements:");
    for node in &issue.nodes {
        let _ = writeln!(out, "     - {}", node.html);
    }
}

/// The report as pretty-printed JSON, for scripts and CI
pub fn render_json(report: &AnalysisReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
