//! Biometric Policy Abstraction
//!
//! Exposes the host's device-owner biometric policy evaluation to the core.

use serde::{Deserialize, Serialize};

use crate::{error::Result, platform::PlatformSendSync};

/// Kind of biometric sensor the device can evaluate with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BiometricKind {
    /// No biometric sensor available or enrolled
    None,
    /// Fingerprint sensor (Touch ID, Android fingerprint)
    Fingerprint,
    /// Face recognition (Face ID, Android face unlock)
    Face,
    /// Iris recognition (Optic ID)
    Iris,
}

/// Snapshot of the device's current biometric capability
///
/// Invariant: `kind` is [`BiometricKind::None`] whenever `available` is
/// `false`. Use the constructors to keep the two fields consistent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BiometricCapability {
    /// Whether the device can currently satisfy the device-owner policy
    pub available: bool,
    /// The sensor kind that would be used for evaluation
    pub kind: BiometricKind,
}

impl BiometricCapability {
    /// Capability snapshot for a device that cannot evaluate the policy
    pub fn unavailable() -> Self {
        Self {
            available: false,
            kind: BiometricKind::None,
        }
    }

    /// Capability snapshot for a device that can evaluate with `kind`
    pub fn available(kind: BiometricKind) -> Self {
        Self {
            available: !matches!(kind, BiometricKind::None),
            kind,
        }
    }
}

/// Completion handler invoked exactly once when policy evaluation finishes.
///
/// `FnOnce` is deliberate: consuming the closure is what guarantees a single
/// resolution per evaluation.
pub type EvaluationCompletion = Box<dyn FnOnce(Result<()>) + Send>;

/// Biometric policy provider trait
///
/// Mirrors the completion-handler shape of host biometric APIs so platform
/// adapters stay thin.
///
/// # Platform Support
///
/// - **Desktop**: No standard biometric API; the shim reports unavailable
/// - **iOS**: LocalAuthentication (`LAContext`)
/// - **Android**: BiometricPrompt
///
/// # Example
///
/// ```ignore
/// use bridge_traits::biometric::{BiometricKind, BiometricProvider};
///
/// fn sensor_enrolled(provider: &dyn BiometricProvider) -> bool {
///     provider
///         .capability()
///         .map(|cap| cap.available)
///         .unwrap_or(false)
/// }
/// ```
pub trait BiometricProvider: PlatformSendSync {
    /// Query whether the device can currently evaluate the device-owner
    /// biometric policy.
    ///
    /// Must not prompt the user.
    fn capability(&self) -> Result<BiometricCapability>;

    /// Evaluate the policy, prompting the user with the supplied
    /// human-readable `reason`.
    ///
    /// The `completion` must be invoked exactly once — on success, user
    /// cancellation, mismatch, lockout, or any other evaluation error — and
    /// may be invoked from any thread. Implementations must not block the
    /// calling thread while the prompt is shown.
    fn evaluate_policy(&self, reason: &str, completion: EvaluationCompletion);
}
