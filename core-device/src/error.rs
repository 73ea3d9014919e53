use bridge_traits::BridgeError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Biometric authentication is not available on this device")]
    NotAvailable,

    #[error("Biometric authentication failed: {source}")]
    AuthenticationFailed {
        #[from]
        source: BridgeError,
    },
}

pub type Result<T> = std::result::Result<T, AuthError>;
