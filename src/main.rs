// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Load settings (defaults <- config file <- flags) and set up logging
// 3. Dispatch to the appropriate subcommand handler
// 4. Exit with proper code (0 = no issues, 1 = issues found, 2 = error)
//
// Rust concepts used:
// - async/await: The analysis request is a network call with a deadline
// - Result<T, E>: For error handling (T = success type, E = error type)
// - match: Pattern matching to handle different subcommands and outcomes
// =============================================================================

// Module declarations - tells Rust about our other source files
mod analyzer;      // src/analyzer/ - talking to the analysis service
mod cli;           // src/cli.rs - command-line parsing
mod config;        // src/config.rs - config file + flag merging
mod input;         // src/input.rs - URL field and validation
mod logging;       // src/logging.rs - env_logger setup
mod report;        // src/report.rs - printing the issues
mod session;       // src/session.rs - status, retries, last URL

use analyzer::{AnalysisReport, AnalyzerClient, TcpProbe};
use clap::Parser;
use cli::{Cli, Commands};
use config::{Config, Settings};
use dialoguer::{Confirm, Input};
use input::UrlField;
use session::{Session, Status, MAX_RETRIES};

use anyhow::Result;
use log::{debug, info};

const LOADING_MESSAGE: &str = "⏳ Analyzing website… This may take a few moments";

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // Startup problems (bad config, bad endpoint, no terminal, ...)
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Returns:
//   Ok(0) = analysis succeeded, no issues (or interactive session ended)
//   Ok(1) = analysis succeeded, issues found
//   Ok(2) = invalid URL or the analysis failed
//   Err = unexpected error
async fn run() -> Result<i32> {
    let cli = Cli::parse();
    logging::init_logger(cli.verbose, cli.quiet);

    let mut config = Config::load(&cli)?;
    config.merge_with_cli(&cli);
    let settings = config.resolve()?;
    debug!("Resolved settings: {:?}", settings);

    let client = build_client(&settings)?;
    info!("Using analysis service at {}", client.endpoint());

    match cli.command {
        Commands::Analyze { url, json } => handle_analyze(&client, &url, json).await,
        Commands::Interactive { json } => handle_interactive(&client, json).await,
    }
}

fn build_client(settings: &Settings) -> Result<AnalyzerClient> {
    let probe = TcpProbe::new(settings.probe_addr.clone(), settings.probe_timeout);
    AnalyzerClient::with_connectivity(settings.endpoint.clone(), settings.timeout, Box::new(probe))
}

// Handles the 'analyze' subcommand: one URL, one request, no retries
async fn handle_analyze(client: &AnalyzerClient, url: &str, json: bool) -> Result<i32> {
    let mut field = UrlField::new();
    field.input(url);

    let request = match field.submit() {
        Ok(request) => request,
        Err(err) => {
            eprintln!("❌ {}", field.error().unwrap_or(err.user_message()));
            return Ok(2);
        }
    };

    if !json {
        println!("{}", LOADING_MESSAGE);
    }

    let mut session = Session::new();
    match session.analyze(client, &request.url, false).await {
        Status::Success(report) => {
            print_report(report, json)?;
            Ok(if report.is_empty() { 0 } else { 1 })
        }
        Status::Failed(err) => {
            eprintln!("❌ {}", err.user_message());
            Ok(2)
        }
        // analyze() always finishes in Success or Failed
        Status::Idle | Status::Loading => Ok(2),
    }
}

// Handles the 'interactive' subcommand
//
// Keeps one Session for the whole run so "Try again?" always resubmits the
// URL that was last submitted, not whatever happens to be typed next.
async fn handle_interactive(client: &AnalyzerClient, json: bool) -> Result<i32> {
    let mut session = Session::new();
    let mut field = UrlField::new();

    loop {
        let raw: String = Input::new()
            .with_prompt("🌐 Website URL (empty line to quit)")
            .allow_empty(true)
            .interact_text()?;

        let raw = raw.trim();
        if raw.is_empty() {
            break;
        }

        field.input(raw);
        if !field.can_submit() {
            if let Some(message) = field.error() {
                eprintln!("❌ {}", message);
            }
            continue;
        }
        let request = field.submit()?;
        debug!("Submitting {}", field.value());

        println!("{}", LOADING_MESSAGE);
        let mut status = session.analyze(client, &request.url, false).await.clone();

        // Show the outcome; on failure offer retries until they run out
        loop {
            let retry_allowed = match &status {
                Status::Success(report) => {
                    print_report(report, json)?;
                    false
                }
                Status::Failed(err) => {
                    eprintln!("❌ {}", err.user_message());
                    session.can_retry()
                }
                Status::Idle | Status::Loading => false,
            };

            if !retry_allowed || !confirm_retry(&session)? {
                break;
            }

            println!("{}", LOADING_MESSAGE);
            status = match session.retry(client).await {
                Some(next) => next.clone(),
                None => break,
            };
        }
    }

    Ok(0)
}

fn confirm_retry(session: &Session) -> Result<bool> {
    let left = MAX_RETRIES - session.retries();
    let again = Confirm::new()
        .with_prompt(format!("Try again? ({} of {} retries left)", left, MAX_RETRIES))
        .default(true)
        .interact()?;
    Ok(again)
}

// Prints the report either as text cards or JSON
fn print_report(report: &AnalysisReport, json: bool) -> Result<()> {
    if json {
        println!("{}", report::render_json(report)?);
    } else {
        print!("{}", report::render_report(report));
    }
    Ok(())
}
