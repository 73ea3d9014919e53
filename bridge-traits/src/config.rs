//! Configuration Source Abstraction
//!
//! Resolves named configuration values and secrets from the host.

use crate::{
    error::{BridgeError, Result},
    platform::PlatformSendSync,
};

/// Configuration source trait
///
/// Abstracts where configuration values come from so the core does not care
/// whether the host reads an application property list, a bundled `.env`
/// file, or the process environment.
///
/// # Platform Support
///
/// - **Desktop**: Process environment (`EnvConfigSource`)
/// - **iOS**: `Info.plist` / xcconfig-injected values
/// - **Android**: `BuildConfig` fields or manifest metadata
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
pub trait ConfigSource: PlatformSendSync {
    /// Resolve a configuration value by key
    ///
    /// Returns `Ok(None)` when the key is simply absent; reserve errors for
    /// lookup failures.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Resolve a configuration value that must be present
    async fn require(&self, key: &str) -> Result<String> {
        self.get(key).await?.ok_or_else(|| {
            BridgeError::NotAvailable(format!("configuration value {key} is not set"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct MapSource(HashMap<String, String>);

    #[async_trait::async_trait]
    impl ConfigSource for MapSource {
        async fn get(&self, key: &str) -> Result<Option<String>> {
            Ok(self.0.get(key).cloned())
        }
    }

    #[tokio::test]
    async fn test_require_present_value() {
        let mut values = HashMap::new();
        values.insert("SERVICE_URL".to_string(), "https://example.test".to_string());
        let source = MapSource(values);

        let resolved = source.require("SERVICE_URL").await.unwrap();
        assert_eq!(resolved, "https://example.test");
    }

    #[tokio::test]
    async fn test_require_missing_value() {
        let source = MapSource(HashMap::new());

        let err = source.require("SERVICE_URL").await.unwrap_err();
        assert!(matches!(err, BridgeError::NotAvailable(_)));
    }
}
