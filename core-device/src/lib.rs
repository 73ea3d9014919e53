//! # Device Services
//!
//! Application-facing wrappers over the device capabilities exposed through
//! `bridge-traits`:
//!
//! - [`BiometricGateway`](biometric::BiometricGateway) - capability query and
//!   asynchronous biometric authentication prompt
//! - [`ReachabilityObserver`](reachability::ReachabilityObserver) -
//!   continuously updated network connectivity state
//!
//! Both services are constructed by the application's composition root (see
//! `core-service`) with injected bridge implementations, and publish
//! UI-facing notifications through the core event bus.

pub mod biometric;
pub mod error;
pub mod reachability;

pub use biometric::BiometricGateway;
pub use error::{AuthError, Result};
pub use reachability::{ConnectivityState, ReachabilityObserver};
