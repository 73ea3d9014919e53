//! Network Path Monitoring Abstraction
//!
//! Provides network reachability status and active interface information.

use serde::{Deserialize, Serialize};

use crate::{
    error::Result,
    platform::{PlatformSend, PlatformSendSync},
};

/// Kind of network interface carrying traffic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InterfaceKind {
    /// WiFi connection
    Wifi,
    /// Cellular/mobile data connection
    Cellular,
    /// Wired Ethernet connection
    WiredEthernet,
    /// Loopback interface
    Loopback,
    /// Other or unrecognized interface kind
    Other,
}

/// Reachability status of the current network path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PathStatus {
    /// The path is usable for traffic
    Satisfied,
    /// No usable path exists
    Unsatisfied,
    /// A path could be established if a connection were attempted
    /// (e.g., VPN on demand, cellular data waiting for use)
    RequiresConnection,
}

/// A network path snapshot as delivered by the host monitor
///
/// `interfaces` is ordered by the host's preference; the first entry is the
/// one actively carrying traffic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkPath {
    pub status: PathStatus,
    pub interfaces: Vec<InterfaceKind>,
}

impl NetworkPath {
    /// Whether the path can currently carry traffic
    pub fn is_satisfied(&self) -> bool {
        matches!(self.status, PathStatus::Satisfied)
    }

    /// The interface actively carrying traffic, if any
    pub fn primary_interface(&self) -> Option<InterfaceKind> {
        self.interfaces.first().copied()
    }
}

/// Network path monitor trait
///
/// Provides reachability information to allow the core to republish
/// connectivity state to the UI without polling.
///
/// # Platform Support
///
/// - **Desktop**: Best-effort probing (NetworkManager, SystemConfiguration,
///   Windows Network List Manager would be more precise)
/// - **iOS/macOS**: Network framework (`NWPathMonitor`)
/// - **Android**: ConnectivityManager callbacks
///
/// # Example
///
/// ```ignore
/// use bridge_traits::network::PathMonitor;
///
/// async fn online(monitor: &dyn PathMonitor) -> bool {
///     monitor.is_reachable().await
/// }
/// ```
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
pub trait PathMonitor: PlatformSendSync {
    /// Get the current network path snapshot
    async fn current_path(&self) -> Result<NetworkPath>;

    /// Check if any usable path currently exists
    async fn is_reachable(&self) -> bool {
        matches!(
            self.current_path().await,
            Ok(NetworkPath {
                status: PathStatus::Satisfied,
                ..
            })
        )
    }

    /// Subscribe to path changes
    ///
    /// Returns a stream of path snapshots. Implementations should emit a
    /// snapshot whenever the path status or active interface changes,
    /// including on recovery; the core performs no polling of its own.
    async fn watch(&self) -> Result<Box<dyn PathUpdateStream>>;
}

/// Stream of network path changes
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
pub trait PathUpdateStream: PlatformSend {
    /// Get the next path snapshot
    ///
    /// Returns `None` when the stream is closed.
    async fn next(&mut self) -> Option<NetworkPath>;
}
