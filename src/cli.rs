// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Two ways to use the tool:
// - `analyze <URL>`: one request, print the report, exit with a status code
// - `interactive`: keep asking for URLs, offer "Try again?" on failures
//
// The options on Cli itself (--endpoint, --timeout, ...) are global, so they
// can go before or after the subcommand.
// =============================================================================

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "a11y-analyzer",
    version,
    about = "Submit a website to an accessibility analysis service and list the issues found",
    long_about = "a11y-analyzer sends a URL to a remote accessibility analysis service \
                  and prints every issue it reports, with its impact and the affected elements."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to a TOML config file (default: .a11y-analyzer.toml, searched upwards)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// URL of the analysis service's /analyze endpoint
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Give up on the analysis after this many seconds (default: 40)
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// host:port used to check whether this machine is online
    #[arg(long, global = true)]
    pub probe_addr: Option<String>,

    /// Print diagnostic logs to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Silence diagnostic logs (overrides --verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze a single website and exit
    ///
    /// Example: a11y-analyzer analyze https://example.com
    Analyze {
        /// Website URL to analyze (e.g., https://example.com)
        url: String,

        /// Output the report in JSON format instead of text
        #[arg(long)]
        json: bool,
    },

    /// Prompt for URLs until an empty line is entered
    Interactive {
        /// Output reports in JSON format instead of text
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_analyze() {
        let cli = Cli::parse_from(["a11y-analyzer", "analyze", "https://example.com", "--json"]);
        match cli.command {
            Commands::Analyze { url, json } => {
                assert_eq!(url, "https://example.com");
                assert!(json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "a11y-analyzer",
            "interactive",
            "--endpoint",
            "http://localhost:5000/analyze",
            "-v",
        ]);
        assert!(matches!(cli.command, Commands::Interactive { json: false }));
        assert_eq!(cli.endpoint.as_deref(), Some("http://localhost:5000/analyze"));
        assert!(cli.verbose);
    }

    #[test]
    fn test_missing_url_is_an_error() {
        assert!(Cli::try_parse_from(["a11y-analyzer", "analyze"]).is_err());
    }
}
