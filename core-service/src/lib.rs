//! Core service façade and bootstrap helpers.
//!
//! This crate wires host-provided bridge implementations (biometric policy,
//! path monitoring, configuration) into the three application services and
//! acts as the composition root: one [`CoreService`] per process owns one
//! instance of each service, replacing hidden global singletons with an
//! explicitly constructed bundle the host passes around by reference.
//!
//! Desktop apps typically enable the `desktop-shims` feature (which depends
//! on `bridge-desktop`); mobile hosts build a [`CoreConfig`] with their own
//! platform adapters.

pub mod error;

pub use error::{CoreError, Result};

pub use core_runtime::config::CoreConfig;

use core_backend::{BackendClient, BackendClientRegistry};
use core_device::{BiometricGateway, ReachabilityObserver};
use core_runtime::events::{CoreEvent, EventBus, Receiver};
use std::sync::Arc;
use tracing::info;

/// Primary façade exposed to host applications.
///
/// Cloning is cheap; every clone shares the same underlying services.
#[derive(Clone)]
pub struct CoreService {
    events: EventBus,
    biometrics: Arc<BiometricGateway>,
    reachability: Arc<ReachabilityObserver>,
    backend: Arc<BackendClientRegistry>,
}

impl std::fmt::Debug for CoreService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoreService").finish_non_exhaustive()
    }
}

impl CoreService {
    /// Construct every service and begin observing connectivity.
    ///
    /// Backend configuration is resolved eagerly: when either secret is
    /// missing or malformed this fails before any service is reachable,
    /// matching the startup-precondition contract.
    ///
    /// # Errors
    ///
    /// - [`CoreError::Backend`] - unusable backend configuration
    /// - [`CoreError::Bridge`] - the path monitor refused a subscription
    pub async fn bootstrap(config: CoreConfig) -> Result<Self> {
        let events = EventBus::new(config.event_buffer_size);

        let backend =
            Arc::new(BackendClientRegistry::from_source(config.config_source.as_ref()).await?);

        let biometrics = Arc::new(BiometricGateway::new(
            Arc::clone(&config.biometric_provider),
            events.clone(),
        ));

        let reachability = Arc::new(ReachabilityObserver::new(
            Arc::clone(&config.path_monitor),
            events.clone(),
        ));
        reachability.start().await?;

        info!("core services bootstrapped");

        Ok(Self {
            events,
            biometrics,
            reachability,
            backend,
        })
    }

    /// The core event bus.
    pub fn events(&self) -> &EventBus {
        &self.events
    }

    /// Subscribe to UI-facing core events.
    pub fn subscribe(&self) -> Receiver<CoreEvent> {
        self.events.subscribe()
    }

    /// Biometric authentication gateway.
    pub fn biometrics(&self) -> &BiometricGateway {
        &self.biometrics
    }

    /// Network reachability observer.
    pub fn reachability(&self) -> &ReachabilityObserver {
        &self.reachability
    }

    /// The shared backend handle.
    pub fn backend(&self) -> Arc<BackendClient> {
        self.backend.client()
    }

    /// Tear down background observation.
    ///
    /// Also happens implicitly when the last clone is dropped.
    pub fn shutdown(&self) {
        self.reachability.stop();
        info!("core services shut down");
    }
}

/// Convenience bootstrapper for desktop hosts.
///
/// Builds a [`CoreConfig`] from the desktop shim bridges and boots the
/// services. The backend secrets are read from the process environment.
///
/// ```ignore
/// # async fn example() -> core_service::Result<()> {
/// let core = core_service::bootstrap_desktop().await?;
/// let name = core.biometrics().display_name();
/// # Ok(())
/// # }
/// ```
#[cfg(feature = "desktop-shims")]
pub async fn bootstrap_desktop() -> Result<CoreService> {
    let config = CoreConfig::builder()
        .build()
        .map_err(|err| CoreError::InitializationFailed(err.to_string()))?;
    CoreService::bootstrap(config).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use bridge_traits::{
        biometric::{BiometricCapability, BiometricKind, BiometricProvider, EvaluationCompletion},
        config::ConfigSource,
        error::Result as BridgeResult,
        network::{InterfaceKind, NetworkPath, PathMonitor, PathStatus, PathUpdateStream},
    };
    use core_device::AuthError;
    use std::collections::HashMap;

    struct StaticBiometric(BiometricCapability);

    impl BiometricProvider for StaticBiometric {
        fn capability(&self) -> BridgeResult<BiometricCapability> {
            Ok(self.0)
        }

        fn evaluate_policy(&self, _reason: &str, completion: EvaluationCompletion) {
            completion(Ok(()));
        }
    }

    struct SinglePathMonitor(NetworkPath);

    #[async_trait]
    impl PathMonitor for SinglePathMonitor {
        async fn current_path(&self) -> BridgeResult<NetworkPath> {
            Ok(self.0.clone())
        }

        async fn watch(&self) -> BridgeResult<Box<dyn PathUpdateStream>> {
            Ok(Box::new(OneShotStream(Some(self.0.clone()))))
        }
    }

    struct OneShotStream(Option<NetworkPath>);

    #[async_trait]
    impl PathUpdateStream for OneShotStream {
        async fn next(&mut self) -> Option<NetworkPath> {
            match self.0.take() {
                Some(path) => Some(path),
                None => {
                    std::future::pending::<()>().await;
                    None
                }
            }
        }
    }

    struct MapSource(HashMap<&'static str, String>);

    #[async_trait]
    impl ConfigSource for MapSource {
        async fn get(&self, key: &str) -> BridgeResult<Option<String>> {
            Ok(self.0.get(key).cloned())
        }
    }

    fn test_config(source: MapSource) -> CoreConfig {
        CoreConfig::builder()
            .biometric_provider(Arc::new(StaticBiometric(BiometricCapability::available(
                BiometricKind::Face,
            ))))
            .path_monitor(Arc::new(SinglePathMonitor(NetworkPath {
                status: PathStatus::Satisfied,
                interfaces: vec![InterfaceKind::Wifi],
            })))
            .config_source(Arc::new(source))
            .build()
            .unwrap()
    }

    fn backend_source() -> MapSource {
        let mut values = HashMap::new();
        values.insert(
            core_backend::CONFIG_KEY_URL,
            "https://project.supabase.co".to_string(),
        );
        values.insert(
            core_backend::CONFIG_KEY_ANON_KEY,
            "anon-key-value".to_string(),
        );
        MapSource(values)
    }

    #[tokio::test]
    async fn test_bootstrap_and_authenticate() {
        let core = CoreService::bootstrap(test_config(backend_source()))
            .await
            .unwrap();

        assert_eq!(core.biometrics().display_name(), "Face ID");
        core.biometrics().authenticate("run tests").await.unwrap();

        core.shutdown();
    }

    #[tokio::test]
    async fn test_bootstrap_fails_on_missing_backend_secret() {
        let mut source = backend_source();
        source.0.remove(core_backend::CONFIG_KEY_ANON_KEY);

        let err = CoreService::bootstrap(test_config(source)).await.unwrap_err();
        assert!(matches!(err, CoreError::Backend(_)));
    }

    #[tokio::test]
    async fn test_backend_handle_is_shared() {
        let core = CoreService::bootstrap(test_config(backend_source()))
            .await
            .unwrap();

        assert!(Arc::ptr_eq(&core.backend(), &core.backend()));
        core.shutdown();
    }

    #[tokio::test]
    async fn test_connectivity_state_reaches_observers() {
        let core = CoreService::bootstrap(test_config(backend_source()))
            .await
            .unwrap();

        let mut rx = core.reachability().subscribe();
        tokio::time::timeout(std::time::Duration::from_secs(1), async {
            loop {
                let state = *rx.borrow_and_update();
                if state.interface == Some(InterfaceKind::Wifi) {
                    break;
                }
                if rx.changed().await.is_err() {
                    panic!("state channel closed");
                }
            }
        })
        .await
        .expect("connectivity state never arrived");

        assert_eq!(core.reachability().state().interface_label(), "Wi-Fi");
        core.shutdown();
    }

    #[tokio::test]
    async fn test_unavailable_device_rejects_authentication() {
        let mut config = test_config(backend_source());
        config.biometric_provider = Arc::new(StaticBiometric(BiometricCapability::unavailable()));

        let core = CoreService::bootstrap(config).await.unwrap();
        let err = core.biometrics().authenticate("unlock").await.unwrap_err();

        assert!(matches!(err, AuthError::NotAvailable));
        core.shutdown();
    }
}
