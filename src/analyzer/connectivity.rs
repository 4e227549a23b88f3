// src/analyzer/connectivity.rs
// =============================================================================
// Answers one question: "is this machine online at all?"
//
// When a request fails we want to tell "your internet is down" apart from
// "the analysis server is down". The probe tries to open a TCP connection
// to a well-known address that has nothing to do with the analysis server.
// If that fails too, we blame the network, not the server.
// =============================================================================

use async_trait::async_trait;
use log::debug;
use std::time::Duration;
use tokio::net::TcpStream;

pub const DEFAULT_PROBE_ADDR: &str = "1.1.1.1:443";
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_millis(1500);

#[async_trait]
pub trait Connectivity: Send + Sync {
    async fn is_online(&self) -> bool;
}

/// Checks connectivity by connecting to `addr` (any `host:port`).
#[derive(Debug, Clone)]
pub struct TcpProbe {
    addr: String,
    timeout: Duration,
}

impl TcpProbe {
    pub fn new(addr: impl Into<String>, timeout: Duration) -> Self {
        Self {
            addr: addr.into(),
            timeout,
        }
    }
}

#[async_trait]
impl Connectivity for TcpProbe {
    async fn is_online(&self) -> bool {
        let online = matches!(
            tokio::time::timeout(self.timeout, TcpStream::connect(&self.addr)).await,
            Ok(Ok(_))
        );
        debug!("Connectivity probe {} -> online={}", self.addr, online);
        online
    }
}
