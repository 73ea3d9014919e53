//! # Event Bus System
//!
//! Provides an event-driven architecture for the device services core using
//! `tokio::sync::broadcast`. This module enables decoupled communication
//! between the service crates and the UI layer through typed events.
//!
//! ## Overview
//!
//! The event bus system consists of:
//! - **Event Types**: Strongly-typed enum hierarchies for each service domain
//! - **EventBus**: Central broadcast channel for publishing events
//! - **Subscription Management**: Multiple subscribers can listen independently
//!
//! ## Usage
//!
//! ### Creating an Event Bus
//!
//! ```rust
//! use core_runtime::events::EventBus;
//!
//! let event_bus = EventBus::new(100); // Buffer size of 100 events
//! ```
//!
//! ### Publishing Events
//!
//! ```rust
//! use core_runtime::events::{EventBus, CoreEvent, AuthEvent};
//!
//! # let event_bus = EventBus::new(100);
//! let event = CoreEvent::Auth(AuthEvent::Succeeded);
//!
//! event_bus.emit(event).ok();
//! ```
//!
//! ### Subscribing to Events
//!
//! ```rust
//! use core_runtime::events::{EventBus, CoreEvent};
//! use tokio::sync::broadcast::error::RecvError;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let event_bus = EventBus::new(100);
//! let mut stream = event_bus.subscribe();
//!
//! tokio::spawn(async move {
//!     loop {
//!         match stream.recv().await {
//!             Ok(event) => println!("Received: {:?}", event),
//!             Err(RecvError::Lagged(n)) => {
//!                 eprintln!("Missed {} events", n);
//!             }
//!             Err(RecvError::Closed) => break,
//!         }
//!     }
//! });
//! # }
//! ```
//!
//! ## Error Handling
//!
//! The event bus uses `tokio::sync::broadcast`, which can produce two types
//! of errors:
//!
//! - **`RecvError::Lagged(n)`**: Subscriber was too slow and missed `n`
//!   events. This is non-fatal; the subscriber can continue receiving new
//!   events. Connectivity subscribers in particular lose nothing meaningful,
//!   since the latest state supersedes everything missed.
//! - **`RecvError::Closed`**: All senders have been dropped. This indicates
//!   shutdown.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

// Re-export commonly used types
pub use tokio::sync::broadcast::error::{RecvError, SendError};
pub use tokio::sync::broadcast::Receiver;

/// Default buffer size for the event bus channel.
///
/// This value balances memory usage with the ability to handle bursts of
/// events. Subscribers that can't keep up will receive `RecvError::Lagged`.
pub const DEFAULT_EVENT_BUFFER_SIZE: usize = 100;

// ============================================================================
// Core Event Types
// ============================================================================

/// Top-level event enum encompassing all event categories.
///
/// This is the main event type published and received through the event bus.
/// It wraps domain-specific event types for each service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "payload")]
pub enum CoreEvent {
    /// Biometric authentication events
    Auth(AuthEvent),
    /// Connectivity events
    Connectivity(ConnectivityEvent),
}

impl CoreEvent {
    /// Returns a human-readable description of the event.
    pub fn description(&self) -> &str {
        match self {
            CoreEvent::Auth(e) => e.description(),
            CoreEvent::Connectivity(e) => e.description(),
        }
    }

    /// Returns the severity level of the event.
    pub fn severity(&self) -> EventSeverity {
        match self {
            CoreEvent::Auth(AuthEvent::Failed { .. }) => EventSeverity::Error,
            CoreEvent::Auth(AuthEvent::Unavailable) => EventSeverity::Warning,
            CoreEvent::Auth(AuthEvent::Succeeded) => EventSeverity::Info,
            CoreEvent::Connectivity(ConnectivityEvent::Changed {
                is_connected: false,
                ..
            }) => EventSeverity::Warning,
            _ => EventSeverity::Debug,
        }
    }
}

/// Event severity levels for filtering and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EventSeverity {
    /// Debug-level events (verbose)
    Debug,
    /// Informational events
    Info,
    /// Warning events
    Warning,
    /// Error events
    Error,
}

// ============================================================================
// Biometric Authentication Events
// ============================================================================

/// Events related to biometric authentication prompts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "event")]
pub enum AuthEvent {
    /// A biometric prompt was requested.
    PromptRequested {
        /// The human-readable reason shown to the user.
        reason: String,
    },
    /// The user passed biometric verification.
    Succeeded,
    /// Authentication was requested on a device that cannot evaluate the
    /// biometric policy.
    Unavailable,
    /// The user cancelled, failed matching, or the evaluation errored.
    Failed {
        /// Human-readable failure reason.
        message: String,
    },
}

impl AuthEvent {
    fn description(&self) -> &str {
        match self {
            AuthEvent::PromptRequested { .. } => "Biometric prompt requested",
            AuthEvent::Succeeded => "Biometric authentication succeeded",
            AuthEvent::Unavailable => "Biometric authentication unavailable",
            AuthEvent::Failed { .. } => "Biometric authentication failed",
        }
    }
}

// ============================================================================
// Connectivity Events
// ============================================================================

/// Events related to network reachability changes.
///
/// Payload fields are flattened primitives so this crate stays independent of
/// the service crates that own the richer state types.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "event")]
pub enum ConnectivityEvent {
    /// The observed network path changed.
    Changed {
        /// Whether any usable path exists.
        is_connected: bool,
        /// Label of the active interface, if one was reported.
        interface: Option<String>,
    },
}

impl ConnectivityEvent {
    fn description(&self) -> &str {
        match self {
            ConnectivityEvent::Changed { .. } => "Network path changed",
        }
    }
}

// ============================================================================
// Event Bus
// ============================================================================

/// Central broadcast channel for core events.
///
/// Cloning the bus is cheap and every clone publishes into the same channel.
#[derive(Debug, Clone)]
pub struct EventBus {
    sender: broadcast::Sender<CoreEvent>,
}

impl EventBus {
    /// Creates a new event bus with the given buffer capacity.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publishes an event to all current subscribers.
    ///
    /// Returns the number of subscribers the event reached.
    ///
    /// # Errors
    ///
    /// Returns `SendError` when there are no subscribers. Emitters that do
    /// not care whether anyone is listening should `.ok()` the result.
    pub fn emit(&self, event: CoreEvent) -> Result<usize, SendError<CoreEvent>> {
        self.sender.send(event)
    }

    /// Creates a new independent subscription.
    ///
    /// The receiver only observes events emitted after this call.
    pub fn subscribe(&self) -> Receiver<CoreEvent> {
        self.sender.subscribe()
    }

    /// Number of currently active subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(DEFAULT_EVENT_BUFFER_SIZE)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_event_bus_creation() {
        let bus = EventBus::new(10);
        assert_eq!(bus.subscriber_count(), 0);
    }

    #[tokio::test]
    async fn test_event_emission_no_subscribers() {
        let bus = EventBus::new(10);
        let event = CoreEvent::Auth(AuthEvent::Succeeded);

        // Should error when no subscribers
        assert!(bus.emit(event).is_err());
    }

    #[tokio::test]
    async fn test_event_emission_with_subscribers() {
        let bus = EventBus::new(10);
        let mut sub = bus.subscribe();

        let event = CoreEvent::Auth(AuthEvent::PromptRequested {
            reason: "unlock vault".to_string(),
        });

        let result = bus.emit(event.clone());
        assert_eq!(result.unwrap(), 1);

        let received = sub.recv().await.unwrap();
        assert_eq!(received, event);
    }

    #[tokio::test]
    async fn test_multiple_subscribers_receive_same_event() {
        let bus = EventBus::new(10);
        let mut sub1 = bus.subscribe();
        let mut sub2 = bus.subscribe();

        let event = CoreEvent::Connectivity(ConnectivityEvent::Changed {
            is_connected: true,
            interface: Some("Wi-Fi".to_string()),
        });

        bus.emit(event.clone()).ok();

        assert_eq!(sub1.recv().await.unwrap(), event);
        assert_eq!(sub2.recv().await.unwrap(), event);
    }

    #[tokio::test]
    async fn test_subscriber_only_sees_later_events() {
        let bus = EventBus::new(10);
        let mut early = bus.subscribe();

        bus.emit(CoreEvent::Auth(AuthEvent::Succeeded)).ok();

        let mut late = bus.subscribe();
        bus.emit(CoreEvent::Auth(AuthEvent::Unavailable)).ok();

        assert_eq!(
            early.recv().await.unwrap(),
            CoreEvent::Auth(AuthEvent::Succeeded)
        );
        assert_eq!(
            late.recv().await.unwrap(),
            CoreEvent::Auth(AuthEvent::Unavailable)
        );
    }

    #[test]
    fn test_event_severity_mapping() {
        let failed = CoreEvent::Auth(AuthEvent::Failed {
            message: "lockout".to_string(),
        });
        assert_eq!(failed.severity(), EventSeverity::Error);

        let offline = CoreEvent::Connectivity(ConnectivityEvent::Changed {
            is_connected: false,
            interface: None,
        });
        assert_eq!(offline.severity(), EventSeverity::Warning);

        let online = CoreEvent::Connectivity(ConnectivityEvent::Changed {
            is_connected: true,
            interface: Some("Cellular".to_string()),
        });
        assert_eq!(online.severity(), EventSeverity::Debug);
    }

    #[test]
    fn test_event_serialization_tagging() {
        let event = CoreEvent::Connectivity(ConnectivityEvent::Changed {
            is_connected: true,
            interface: Some("Wi-Fi".to_string()),
        });

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "Connectivity");
        assert_eq!(json["payload"]["event"], "Changed");
        assert_eq!(json["payload"]["is_connected"], true);
    }
}
