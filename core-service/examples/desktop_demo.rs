//! Device services demonstration for desktop hosts.
//!
//! Boots the full service stack with the desktop shim bridges and walks
//! through each service once.
//!
//! Run with:
//! ```bash
//! export SUPABASE_URL="https://project.supabase.co"
//! export SUPABASE_ANON_KEY="anon-key"
//! cargo run -p core-service --example desktop_demo
//! ```

use anyhow::Context;
use core_runtime::logging::{init_logging, LogFormat, LogLevel, LoggingConfig};
use core_service::bootstrap_desktop;
use std::time::Duration;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = LoggingConfig::default()
        .with_format(LogFormat::Pretty)
        .with_level(LogLevel::Debug);
    init_logging(config).expect("Failed to initialize logging");

    let core = bootstrap_desktop()
        .await
        .context("bootstrapping device services")?;

    info!("=== Device Services Demo ===");

    // Biometrics: the desktop shim reports unavailable, so this fails fast.
    let capability = core.biometrics().capability();
    info!(
        available = capability.available,
        name = core.biometrics().display_name(),
        "biometric capability"
    );
    match core.biometrics().authenticate("Demonstrate the prompt").await {
        Ok(()) => info!("biometric authentication succeeded"),
        Err(err) => info!(error = %err, "biometric authentication rejected"),
    }

    // Reachability: give the probe a moment, then read the observed state.
    let mut rx = core.reachability().subscribe();
    let _ = tokio::time::timeout(Duration::from_secs(7), rx.changed()).await;
    let state = core.reachability().state();
    info!(
        is_connected = state.is_connected,
        interface = state.interface_label(),
        "observed connectivity"
    );

    // Backend: the handle is shared and pre-configured.
    let backend = core.backend();
    info!(rest = %backend.rest_url(), "backend endpoints ready");

    core.shutdown();
    Ok(())
}
