//! Backend Client Registry
//!
//! Owns the process-wide backend client handle.

use crate::client::{BackendClient, BackendConfig};
use crate::error::Result;
use bridge_traits::ConfigSource;
use std::sync::Arc;

/// Registry owning the single [`BackendClient`] for the process.
///
/// One registry is constructed by the application's composition root during
/// bootstrap and passed by reference to every consumer — the explicit
/// replacement for a hidden global singleton. Construction is eager: if the
/// configuration is unusable, bootstrap fails before any caller can ask for
/// the client.
#[derive(Debug)]
pub struct BackendClientRegistry {
    client: Arc<BackendClient>,
}

impl BackendClientRegistry {
    /// Resolve configuration and construct the client, exactly once.
    ///
    /// # Errors
    ///
    /// Any [`BackendError`](crate::error::BackendError) here is fatal to
    /// startup; the registry offers no retry or fallback.
    pub async fn from_source(source: &dyn ConfigSource) -> Result<Self> {
        let config = BackendConfig::resolve(source).await?;
        let client = BackendClient::new(config)?;

        Ok(Self {
            client: Arc::new(client),
        })
    }

    /// Construct a registry around an already-built client.
    ///
    /// Intended for tests and hosts that assemble the client themselves.
    pub fn with_client(client: BackendClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    /// The shared backend handle.
    ///
    /// Every call returns the same instance; the handle is read-only after
    /// construction.
    pub fn client(&self) -> Arc<BackendClient> {
        Arc::clone(&self.client)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{CONFIG_KEY_ANON_KEY, CONFIG_KEY_URL};
    use crate::error::BackendError;
    use async_trait::async_trait;
    use bridge_traits::error::Result as BridgeResult;
    use std::collections::HashMap;

    struct MapSource(HashMap<&'static str, String>);

    #[async_trait]
    impl ConfigSource for MapSource {
        async fn get(&self, key: &str) -> BridgeResult<Option<String>> {
            Ok(self.0.get(key).cloned())
        }
    }

    fn complete_source() -> MapSource {
        let mut values = HashMap::new();
        values.insert(CONFIG_KEY_URL, "https://project.supabase.co".to_string());
        values.insert(CONFIG_KEY_ANON_KEY, "anon-key-value".to_string());
        MapSource(values)
    }

    #[tokio::test]
    async fn test_client_identity_is_stable() {
        let registry = BackendClientRegistry::from_source(&complete_source())
            .await
            .unwrap();

        let first = registry.client();
        let second = registry.client();

        assert!(Arc::ptr_eq(&first, &second));
    }

    #[tokio::test]
    async fn test_missing_configuration_is_fatal_before_client() {
        let mut source = complete_source();
        source.0.remove(CONFIG_KEY_ANON_KEY);

        // Construction fails, so no registry — and therefore no client() —
        // ever exists.
        let err = BackendClientRegistry::from_source(&source).await.unwrap_err();
        assert!(matches!(
            err,
            BackendError::MissingConfig {
                key: CONFIG_KEY_ANON_KEY
            }
        ));
    }
}
