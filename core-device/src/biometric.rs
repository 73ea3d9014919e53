//! # Biometric Gateway
//!
//! Application-facing wrapper over the host's biometric policy evaluation.
//!
//! ## Overview
//!
//! The `BiometricGateway` answers two questions for the UI layer: "can this
//! device authenticate the owner biometrically right now?" and "did the user
//! just pass verification?". The actual policy evaluation is delegated to the
//! injected [`BiometricProvider`]; this service only adapts the provider's
//! completion-handler shape into an awaitable call and reports the outcome on
//! the event bus.
//!
//! ## Concurrency
//!
//! `authenticate` suspends the caller on a `oneshot` channel until the
//! provider invokes its completion. The completion closure is `FnOnce` and
//! consumes the channel sender, so each invocation resolves exactly once.
//! Concurrent `authenticate` calls are independent; the gateway neither
//! serializes nor coalesces prompts.
//!
//! ## Usage
//!
//! ```ignore
//! use core_device::BiometricGateway;
//!
//! async fn unlock(gateway: &BiometricGateway) -> bool {
//!     gateway.authenticate("Unlock your notes").await.is_ok()
//! }
//! ```

use crate::error::{AuthError, Result};
use bridge_traits::{
    biometric::{BiometricCapability, BiometricKind, BiometricProvider},
    error::BridgeError,
};
use core_runtime::events::{AuthEvent, CoreEvent, EventBus};
use std::sync::Arc;
use tokio::sync::oneshot;
use tracing::{debug, instrument, warn};

/// Gateway to device-owner biometric authentication.
pub struct BiometricGateway {
    /// Platform biometric policy provider
    provider: Arc<dyn BiometricProvider>,
    /// Event bus for UI-facing auth notifications
    events: EventBus,
}

impl BiometricGateway {
    /// Create a new gateway around the given provider.
    pub fn new(provider: Arc<dyn BiometricProvider>, events: EventBus) -> Self {
        Self { provider, events }
    }

    /// Current biometric capability of the device.
    ///
    /// Never fails and never prompts: a provider query error degrades to
    /// "unavailable".
    pub fn capability(&self) -> BiometricCapability {
        match self.provider.capability() {
            Ok(capability) => capability,
            Err(err) => {
                warn!(error = %err, "biometric capability query failed");
                BiometricCapability::unavailable()
            }
        }
    }

    /// User-facing name of the device's biometric facility.
    pub fn display_name(&self) -> &'static str {
        match self.capability().kind {
            BiometricKind::Face => "Face ID",
            BiometricKind::Fingerprint => "Touch ID",
            BiometricKind::Iris => "Optic ID",
            BiometricKind::None => "Biometric",
        }
    }

    /// Prompt the user for biometric verification.
    ///
    /// Capability is re-checked at call time; when the device cannot evaluate
    /// the policy this fails with [`AuthError::NotAvailable`] without ever
    /// reaching the provider. The call suspends until the user completes or
    /// cancels the prompt, or the host times it out — no other task is
    /// blocked while the prompt is up.
    ///
    /// # Errors
    ///
    /// - [`AuthError::NotAvailable`] - no usable biometric sensor at call time
    /// - [`AuthError::AuthenticationFailed`] - the user cancelled, failed
    ///   matching, or the evaluation errored; carries the underlying reason
    #[instrument(skip(self))]
    pub async fn authenticate(&self, reason: &str) -> Result<()> {
        if !self.capability().available {
            debug!("authentication requested without biometric capability");
            self.events.emit(CoreEvent::Auth(AuthEvent::Unavailable)).ok();
            return Err(AuthError::NotAvailable);
        }

        self.events
            .emit(CoreEvent::Auth(AuthEvent::PromptRequested {
                reason: reason.to_string(),
            }))
            .ok();

        let (tx, rx) = oneshot::channel();
        self.provider.evaluate_policy(
            reason,
            Box::new(move |result| {
                // Consuming `tx` here is what makes double resolution
                // unrepresentable.
                let _ = tx.send(result);
            }),
        );

        let outcome = match rx.await {
            Ok(result) => result,
            // The provider dropped the completion without invoking it.
            Err(_) => Err(BridgeError::OperationFailed(
                "biometric evaluation ended without reporting a result".to_string(),
            )),
        };

        match outcome {
            Ok(()) => {
                debug!("biometric authentication succeeded");
                self.events.emit(CoreEvent::Auth(AuthEvent::Succeeded)).ok();
                Ok(())
            }
            Err(err) => {
                debug!(error = %err, "biometric authentication failed");
                self.events
                    .emit(CoreEvent::Auth(AuthEvent::Failed {
                        message: err.to_string(),
                    }))
                    .ok();
                Err(AuthError::AuthenticationFailed { source: err })
            }
        }
    }
}
