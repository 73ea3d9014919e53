//! # Desktop Bridge Implementations
//!
//! Default implementations of bridge traits for desktop platforms
//! (macOS, Windows, Linux).
//!
//! ## Overview
//!
//! This crate provides best-effort implementations of the bridge traits
//! using desktop-appropriate mechanisms:
//! - `BiometricProvider` as a no-hardware shim (reports unavailable)
//! - `PathMonitor` using periodic TCP reachability probing
//! - `ConfigSource` using the process environment
//!
//! Mobile hosts replace these with platform-native adapters; desktop apps
//! and tests get a working end-to-end stack with no extra wiring.
//!
//! ## Usage
//!
//! ```ignore
//! use bridge_desktop::{DesktopPathMonitor, EnvConfigSource};
//! use bridge_traits::{ConfigSource, PathMonitor};
//!
//! #[tokio::main]
//! async fn main() {
//!     let monitor = DesktopPathMonitor::new();
//!     let config = EnvConfigSource::new();
//!
//!     // Use in core configuration
//! }
//! ```

mod biometric;
mod config;
mod network;

pub use biometric::DesktopBiometricProvider;
pub use config::EnvConfigSource;
pub use network::DesktopPathMonitor;
