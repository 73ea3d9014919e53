//! Biometric Provider Shim
//!
//! Desktop platforms have no portable biometric policy API, so this shim
//! reports the capability as unavailable and fails any evaluation request.

use bridge_traits::{
    biometric::{BiometricCapability, BiometricProvider, EvaluationCompletion},
    error::{BridgeError, Result},
};
use tracing::debug;

/// Desktop biometric provider
///
/// Always reports `{available: false, kind: None}`. Hosts that do have a
/// biometric facility (e.g., Touch ID on macOS via LocalAuthentication)
/// should inject their own provider instead of this shim.
#[derive(Debug, Default, Clone)]
pub struct DesktopBiometricProvider;

impl DesktopBiometricProvider {
    /// Create a new shim provider
    pub fn new() -> Self {
        Self
    }
}

impl BiometricProvider for DesktopBiometricProvider {
    fn capability(&self) -> Result<BiometricCapability> {
        Ok(BiometricCapability::unavailable())
    }

    fn evaluate_policy(&self, reason: &str, completion: EvaluationCompletion) {
        debug!(reason, "biometric evaluation requested on desktop shim");
        completion(Err(BridgeError::NotAvailable(
            "no biometric hardware available on this platform".to_string(),
        )));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[test]
    fn test_capability_is_unavailable() {
        let provider = DesktopBiometricProvider::new();
        let cap = provider.capability().unwrap();

        assert!(!cap.available);
    }

    #[test]
    fn test_evaluation_completes_once_with_not_available() {
        let provider = DesktopBiometricProvider::new();
        let (tx, rx) = mpsc::channel();

        provider.evaluate_policy(
            "unlock notes",
            Box::new(move |result| {
                tx.send(result).unwrap();
            }),
        );

        let result = rx.recv().unwrap();
        assert!(matches!(result, Err(BridgeError::NotAvailable(_))));
        // Exactly one completion: the channel is now empty and closed.
        assert!(rx.recv().is_err());
    }
}
