//! Path Monitoring Implementation
//!
//! Provides best-effort network path detection for desktop hosts:
//! - Reachability probing against a well-known endpoint
//! - Change notification by periodic re-probing
//!
//! Note: Platform-specific implementations (Linux netlink, macOS
//! SystemConfiguration, Windows WinAPI) would be more precise but require
//! additional dependencies.

use async_trait::async_trait;
use bridge_traits::{
    error::Result,
    network::{InterfaceKind, NetworkPath, PathMonitor, PathStatus, PathUpdateStream},
};
use std::time::Duration;
use tracing::debug;

const DEFAULT_PROBE_ADDR: &str = "8.8.8.8:53";
const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(5);
const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(5);

/// Desktop path monitor implementation
///
/// Probes a TCP endpoint to decide whether a usable path exists. The probe
/// target and cadence are configurable so tests can point the monitor at a
/// local listener.
#[derive(Debug, Clone)]
pub struct DesktopPathMonitor {
    probe_addr: String,
    probe_timeout: Duration,
    poll_interval: Duration,
}

impl DesktopPathMonitor {
    /// Create a monitor probing a public DNS endpoint every few seconds
    pub fn new() -> Self {
        Self {
            probe_addr: DEFAULT_PROBE_ADDR.to_string(),
            probe_timeout: DEFAULT_PROBE_TIMEOUT,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }

    /// Create a monitor with a custom probe target and polling cadence
    pub fn with_probe(probe_addr: impl Into<String>, poll_interval: Duration) -> Self {
        Self {
            probe_addr: probe_addr.into(),
            probe_timeout: DEFAULT_PROBE_TIMEOUT,
            poll_interval,
        }
    }

    /// Check connectivity by attempting a TCP connection to the probe target
    async fn probe(&self) -> PathStatus {
        match tokio::time::timeout(
            self.probe_timeout,
            tokio::net::TcpStream::connect(self.probe_addr.as_str()),
        )
        .await
        {
            Ok(Ok(_)) => PathStatus::Satisfied,
            Ok(Err(_)) => PathStatus::Unsatisfied,
            Err(_) => PathStatus::Unsatisfied,
        }
    }

    fn path_for(status: PathStatus) -> NetworkPath {
        NetworkPath {
            status,
            // Desktop hosts cannot cheaply distinguish WiFi from wired
            // without platform-specific APIs.
            interfaces: if status == PathStatus::Satisfied {
                vec![InterfaceKind::Other]
            } else {
                vec![]
            },
        }
    }
}

impl Default for DesktopPathMonitor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PathMonitor for DesktopPathMonitor {
    async fn current_path(&self) -> Result<NetworkPath> {
        let status = self.probe().await;
        debug!(status = ?status, "network path probed");

        Ok(Self::path_for(status))
    }

    async fn watch(&self) -> Result<Box<dyn PathUpdateStream>> {
        Ok(Box::new(DesktopPathStream {
            monitor: self.clone(),
            last_status: None,
        }))
    }
}

/// Path update stream that re-probes on an interval and emits on change
struct DesktopPathStream {
    monitor: DesktopPathMonitor,
    last_status: Option<PathStatus>,
}

#[async_trait]
impl PathUpdateStream for DesktopPathStream {
    async fn next(&mut self) -> Option<NetworkPath> {
        loop {
            tokio::time::sleep(self.monitor.poll_interval).await;

            let status = self.monitor.probe().await;
            if self.last_status != Some(status) {
                self.last_status = Some(status);
                return Some(DesktopPathMonitor::path_for(status));
            }
        }
    }
}
