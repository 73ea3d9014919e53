//! # Host Bridge Traits
//!
//! Platform abstraction traits that must be implemented by each host platform.
//!
//! ## Overview
//!
//! This crate defines the contract between the core services and
//! platform-specific implementations. Each trait represents a capability that
//! the core requires but that must be implemented differently per platform
//! (desktop, iOS, Android).
//!
//! ## Traits
//!
//! ### Platform Integration
//! - [`BiometricProvider`](biometric::BiometricProvider) - Device-owner biometric policy evaluation
//! - [`PathMonitor`](network::PathMonitor) - Network path status and interface observation
//!
//! ### Configuration
//! - [`ConfigSource`](config::ConfigSource) - Named configuration/secret resolution
//!
//! ## Platform Requirements
//!
//! Each supported platform must ship concrete adapters for every required
//! bridge trait:
//!
//! | Platform | Implementation Crate | Status |
//! |----------|---------------------|--------|
//! | Desktop  | `bridge-desktop`    | ✅ Available |
//! | iOS      | TBD                 | 📋 Planned |
//! | Android  | TBD                 | 📋 Planned |
//!
//! ## Fail-Fast Strategy
//!
//! The core should fail fast with descriptive errors when a required
//! capability is missing:
//!
//! ```ignore
//! use core_runtime::error::Error;
//!
//! pub fn build(self) -> Result<CoreConfig> {
//!     let path_monitor = self.path_monitor.ok_or_else(|| Error::CapabilityMissing {
//!         capability: "PathMonitor".to_string(),
//!         message: "No path monitor implementation provided. \
//!                  Desktop: enable the desktop-shims feature. \
//!                  Mobile: inject platform-native adapter."
//!             .to_string(),
//!     })?;
//!     // ...
//! }
//! ```
//!
//! ## Error Handling
//!
//! All bridge traits use the [`BridgeError`](error::BridgeError) type for
//! consistent error handling. Platform implementations should:
//!
//! - Convert platform-specific errors to `BridgeError`
//! - Provide actionable error messages
//! - Include error context (e.g., configuration key names)
//!
//! ## Thread Safety
//!
//! All bridge traits require `Send + Sync` bounds on native targets to
//! support safe concurrent usage across async tasks. Implementations must
//! ensure thread safety.

pub mod biometric;
pub mod config;
pub mod error;
pub mod network;
pub mod platform;

pub use biometric::{BiometricCapability, BiometricKind, BiometricProvider, EvaluationCompletion};
pub use config::ConfigSource;
pub use error::{BridgeError, Result};
pub use network::{InterfaceKind, NetworkPath, PathMonitor, PathStatus, PathUpdateStream};
