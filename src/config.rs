// src/config.rs
// =============================================================================
// Where the settings come from, lowest to highest priority:
// 1. Built-in defaults (the public analysis service, 40 second deadline)
// 2. A TOML file: --config <PATH>, or .a11y-analyzer.toml in the current
//    directory or up to three parent directories
// 3. Command-line flags
//
// Example .a11y-analyzer.toml:
//
//   endpoint = "http://localhost:5000/analyze"
//   timeout = 60
//   probe_addr = "1.1.1.1:443"
//   probe_timeout_ms = 1500
// =============================================================================

use crate::analyzer::{DEFAULT_ENDPOINT, DEFAULT_PROBE_ADDR, DEFAULT_PROBE_TIMEOUT, DEFAULT_TIMEOUT};
use crate::cli::Cli;
use anyhow::{anyhow, bail, Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use url::Url;

pub const CONFIG_FILE_NAME: &str = ".a11y-analyzer.toml";

/// What can appear in the config file. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// URL of the analysis service's /analyze endpoint
    pub endpoint: Option<String>,
    /// Request deadline in seconds
    pub timeout: Option<u64>,
    /// host:port used to check whether we are online
    pub probe_addr: Option<String>,
    pub probe_timeout_ms: Option<u64>,
}

/// Fully resolved settings, ready to build a client from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub endpoint: Url,
    pub timeout: Duration,
    pub probe_addr: String,
    pub probe_timeout: Duration,
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Could not read config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Looks for .a11y-analyzer.toml in `dir` and up to three parents.
    /// Returns the defaults when none exists.
    pub fn discover(dir: &Path) -> Result<Self> {
        for candidate in dir.ancestors().take(4) {
            let path = candidate.join(CONFIG_FILE_NAME);
            if path.is_file() {
                debug!("Using config file {}", path.display());
                return Self::load_from_file(path);
            }
        }
        Ok(Self::default())
    }

    /// Loads the file named on the command line, or discovers one
    pub fn load(cli: &Cli) -> Result<Self> {
        match &cli.config {
            Some(path) => Self::load_from_file(path),
            None => {
                let cwd = std::env::current_dir().context("Could not read current directory")?;
                Self::discover(&cwd)
            }
        }
    }

    /// Command-line flags take precedence over the file
    pub fn merge_with_cli(&mut self, cli: &Cli) {
        if let Some(endpoint) = &cli.endpoint {
            self.endpoint = Some(endpoint.clone());
        }
        if let Some(timeout) = cli.timeout {
            self.timeout = Some(timeout);
        }
        if let Some(probe_addr) = &cli.probe_addr {
            self.probe_addr = Some(probe_addr.clone());
        }
    }

    pub fn resolve(&self) -> Result<Settings> {
        let endpoint = self.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT);
        let endpoint = Url::parse(endpoint)
            .map_err(|e| anyhow!("Invalid endpoint URL '{}': {}", endpoint, e))?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            bail!("Endpoint must be an http(s) URL: {}", endpoint);
        }

        let timeout = match self.timeout {
            Some(0) => bail!("Timeout must be at least 1 second"),
            Some(secs) => Duration::from_secs(secs),
            None => DEFAULT_TIMEOUT,
        };

        Ok(Settings {
            endpoint,
            timeout,
            probe_addr: self
                .probe_addr
                .clone()
                .unwrap_or_else(|| DEFAULT_PROBE_ADDR.to_string()),
            probe_timeout: self
                .probe_timeout_ms
                .map(Duration::from_millis)
                .unwrap_or(DEFAULT_PROBE_TIMEOUT),
        })
    }
}
