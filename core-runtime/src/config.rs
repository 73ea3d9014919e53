//! # Core Configuration Module
//!
//! Provides configuration management for the device services core.
//!
//! ## Overview
//!
//! The configuration system uses a builder pattern to construct a
//! `CoreConfig` instance that holds all bridge dependencies the service
//! crates need. It enforces fail-fast validation to ensure every required
//! bridge is provided before initialization.
//!
//! ## Required Dependencies
//!
//! - `BiometricProvider` - Device-owner biometric policy evaluation
//! - `PathMonitor` - Network path observation
//! - `ConfigSource` - Named configuration/secret resolution
//!
//! When the `desktop-shims` feature is enabled, desktop-ready defaults are
//! injected automatically for any bridge that is not provided.
//!
//! ## Usage
//!
//! ### Basic Configuration with Desktop Defaults
//!
//! ```ignore
//! use core_runtime::config::CoreConfig;
//!
//! let config = CoreConfig::builder()
//!     .build()
//!     .expect("Failed to build config");
//! ```
//!
//! ### Configuration with Custom Bridges
//!
//! ```ignore
//! use core_runtime::config::CoreConfig;
//! use std::sync::Arc;
//!
//! // Note: Requires implementing BiometricProvider, PathMonitor, ConfigSource
//! let config = CoreConfig::builder()
//!     .biometric_provider(Arc::new(MyBiometricProvider))
//!     .path_monitor(Arc::new(MyPathMonitor))
//!     .config_source(Arc::new(MyConfigSource))
//!     .build()
//!     .expect("Failed to build config");
//! ```
//!
//! ## Error Handling
//!
//! The builder validates all required dependencies and provides actionable
//! error messages when capabilities are missing.

use crate::error::{Error, Result};
use bridge_traits::{BiometricProvider, ConfigSource, PathMonitor};
use std::sync::Arc;

use crate::events::DEFAULT_EVENT_BUFFER_SIZE;

/// Core configuration for the device services core.
///
/// This struct holds all bridge dependencies required to initialize the
/// service crates. Use [`CoreConfigBuilder`] to construct instances.
#[derive(Clone)]
pub struct CoreConfig {
    /// Biometric policy provider (required)
    pub biometric_provider: Arc<dyn BiometricProvider>,

    /// Network path monitor (required)
    pub path_monitor: Arc<dyn PathMonitor>,

    /// Configuration/secret source (required)
    pub config_source: Arc<dyn ConfigSource>,

    /// Buffer size for the core event bus
    pub event_buffer_size: usize,
}

impl std::fmt::Debug for CoreConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoreConfig")
            .field("biometric_provider", &"BiometricProvider { ... }")
            .field("path_monitor", &"PathMonitor { ... }")
            .field("config_source", &"ConfigSource { ... }")
            .field("event_buffer_size", &self.event_buffer_size)
            .finish()
    }
}

impl CoreConfig {
    /// Create a new configuration builder
    pub fn builder() -> CoreConfigBuilder {
        CoreConfigBuilder::default()
    }
}

/// Builder for [`CoreConfig`] with fail-fast capability validation.
#[derive(Default)]
pub struct CoreConfigBuilder {
    biometric_provider: Option<Arc<dyn BiometricProvider>>,
    path_monitor: Option<Arc<dyn PathMonitor>>,
    config_source: Option<Arc<dyn ConfigSource>>,
    event_buffer_size: Option<usize>,
}

impl CoreConfigBuilder {
    /// Set the biometric policy provider
    pub fn biometric_provider(mut self, provider: Arc<dyn BiometricProvider>) -> Self {
        self.biometric_provider = Some(provider);
        self
    }

    /// Set the network path monitor
    pub fn path_monitor(mut self, monitor: Arc<dyn PathMonitor>) -> Self {
        self.path_monitor = Some(monitor);
        self
    }

    /// Set the configuration source
    pub fn config_source(mut self, source: Arc<dyn ConfigSource>) -> Self {
        self.config_source = Some(source);
        self
    }

    /// Set the event bus buffer size
    pub fn event_buffer_size(mut self, size: usize) -> Self {
        self.event_buffer_size = Some(size);
        self
    }

    /// Build the configuration, validating that every required bridge is
    /// present.
    ///
    /// With the `desktop-shims` feature enabled, missing bridges fall back to
    /// the desktop implementations instead of failing.
    pub fn build(self) -> Result<CoreConfig> {
        #[cfg(feature = "desktop-shims")]
        let this = self.with_desktop_defaults();
        #[cfg(not(feature = "desktop-shims"))]
        let this = self;

        let biometric_provider =
            this.biometric_provider
                .ok_or_else(|| Error::CapabilityMissing {
                    capability: "BiometricProvider".to_string(),
                    message: "No biometric provider implementation provided. \
                              Desktop: enable the desktop-shims feature. \
                              Mobile: inject platform-native adapter."
                        .to_string(),
                })?;

        let path_monitor = this.path_monitor.ok_or_else(|| Error::CapabilityMissing {
            capability: "PathMonitor".to_string(),
            message: "No path monitor implementation provided. \
                      Desktop: enable the desktop-shims feature. \
                      Mobile: inject platform-native adapter."
                .to_string(),
        })?;

        let config_source = this.config_source.ok_or_else(|| Error::CapabilityMissing {
            capability: "ConfigSource".to_string(),
            message: "No configuration source implementation provided. \
                      Desktop: enable the desktop-shims feature. \
                      Mobile: inject platform-native adapter."
                .to_string(),
        })?;

        let event_buffer_size = this.event_buffer_size.unwrap_or(DEFAULT_EVENT_BUFFER_SIZE);
        if event_buffer_size == 0 {
            return Err(Error::Config(
                "event_buffer_size must be greater than zero".to_string(),
            ));
        }

        Ok(CoreConfig {
            biometric_provider,
            path_monitor,
            config_source,
            event_buffer_size,
        })
    }

    #[cfg(feature = "desktop-shims")]
    fn with_desktop_defaults(mut self) -> Self {
        use bridge_desktop::{DesktopBiometricProvider, DesktopPathMonitor, EnvConfigSource};

        if self.biometric_provider.is_none() {
            self.biometric_provider = Some(Arc::new(DesktopBiometricProvider::new()));
        }
        if self.path_monitor.is_none() {
            self.path_monitor = Some(Arc::new(DesktopPathMonitor::new()));
        }
        if self.config_source.is_none() {
            self.config_source = Some(Arc::new(EnvConfigSource::new()));
        }
        self
    }
}
