//! Configuration Source Implementation
//!
//! Resolves configuration values from the process environment. Desktop
//! deployments inject secrets through the environment (or a launcher-managed
//! `.env`); mobile hosts resolve the same keys from their property lists.

use async_trait::async_trait;
use bridge_traits::{
    config::ConfigSource,
    error::{BridgeError, Result},
};
use std::env;

/// Environment-backed configuration source
#[derive(Debug, Default, Clone)]
pub struct EnvConfigSource;

impl EnvConfigSource {
    /// Create a new environment configuration source
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ConfigSource for EnvConfigSource {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        match env::var(key) {
            Ok(value) => Ok(Some(value)),
            Err(env::VarError::NotPresent) => Ok(None),
            Err(env::VarError::NotUnicode(_)) => Err(BridgeError::OperationFailed(format!(
                "environment value for {key} is not valid unicode"
            ))),
        }
    }
}
