//! # Reachability Observer
//!
//! Republishes host network path changes as observable connectivity state.
//!
//! ## Overview
//!
//! The `ReachabilityObserver` subscribes to the injected [`PathMonitor`] and
//! forwards every path snapshot into a `tokio::sync::watch` channel. The UI
//! observes the channel: each update fully replaces the previous state, so
//! the last snapshot always wins and slow observers simply skip intermediate
//! values. All writes happen on one forwarding task, regardless of where the
//! host monitor delivers its notifications.
//!
//! Until the first notification arrives the state is optimistic
//! (`is_connected = true`), matching the behavior users expect while the
//! monitor warms up.
//!
//! ## Lifecycle
//!
//! `start` is idempotent — a second call while the forwarding task is alive
//! does not create a second subscription. `stop` aborts the forwarding task
//! and is also invoked on drop, so no monitor callback outlives the observer.

use bridge_traits::{
    error::Result as BridgeResult,
    network::{InterfaceKind, NetworkPath, PathMonitor},
};
use core_runtime::events::{ConnectivityEvent, CoreEvent, EventBus};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info};

/// Snapshot of network connectivity as observed by the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectivityState {
    /// Whether any usable network path exists
    pub is_connected: bool,
    /// The interface carrying traffic; `None` until a path report names one
    pub interface: Option<InterfaceKind>,
}

impl Default for ConnectivityState {
    /// Optimistic initial state, used until the first path report arrives.
    fn default() -> Self {
        Self {
            is_connected: true,
            interface: None,
        }
    }
}

impl ConnectivityState {
    /// Derive a state snapshot from a host path report.
    pub fn from_path(path: &NetworkPath) -> Self {
        Self {
            is_connected: path.is_satisfied(),
            interface: path.primary_interface(),
        }
    }

    /// User-facing label for the active interface.
    ///
    /// Total over every interface kind, including "never observed".
    pub fn interface_label(&self) -> &'static str {
        match self.interface {
            Some(InterfaceKind::Wifi) => "Wi-Fi",
            Some(InterfaceKind::Cellular) => "Cellular",
            Some(InterfaceKind::WiredEthernet) => "Ethernet",
            Some(InterfaceKind::Loopback) => "Loopback",
            Some(InterfaceKind::Other) => "Other",
            None => "Unknown",
        }
    }
}

/// Observer that keeps [`ConnectivityState`] current for the process lifetime.
pub struct ReachabilityObserver {
    /// Platform path monitor
    monitor: Arc<dyn PathMonitor>,
    /// Event bus for UI-facing connectivity notifications
    events: EventBus,
    /// Single writer for the observed state
    state_tx: watch::Sender<ConnectivityState>,
    /// Forwarding task slot; `Some` while a subscription is live
    forwarder: Mutex<Option<JoinHandle<()>>>,
}

impl ReachabilityObserver {
    /// Create a new observer around the given monitor.
    ///
    /// The observer is inert until [`start`](Self::start) is called.
    pub fn new(monitor: Arc<dyn PathMonitor>, events: EventBus) -> Self {
        let (state_tx, _) = watch::channel(ConnectivityState::default());
        Self {
            monitor,
            events,
            state_tx,
            forwarder: Mutex::new(None),
        }
    }

    /// Latest observed connectivity state.
    pub fn state(&self) -> ConnectivityState {
        *self.state_tx.borrow()
    }

    /// Subscribe to state changes.
    ///
    /// The receiver yields the current state immediately and then one value
    /// per observed change; intermediate values may be skipped (last write
    /// wins).
    pub fn subscribe(&self) -> watch::Receiver<ConnectivityState> {
        self.state_tx.subscribe()
    }

    /// Begin observing path changes.
    ///
    /// Idempotent: if a forwarding task is already running this is a no-op
    /// and the existing subscription is kept.
    ///
    /// # Errors
    ///
    /// Propagates the monitor's failure to open an update stream.
    pub async fn start(&self) -> BridgeResult<()> {
        if self.is_running() {
            return Ok(());
        }

        let mut stream = self.monitor.watch().await?;

        let mut guard = match self.forwarder.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if guard.as_ref().is_some_and(|handle| !handle.is_finished()) {
            // Lost the race to a concurrent start; the extra subscription is
            // dropped here and the monitor sees it cancelled.
            return Ok(());
        }

        let state_tx = self.state_tx.clone();
        let events = self.events.clone();
        let handle = tokio::spawn(async move {
            while let Some(path) = stream.next().await {
                let state = ConnectivityState::from_path(&path);
                debug!(
                    is_connected = state.is_connected,
                    interface = state.interface_label(),
                    "network path changed"
                );

                events
                    .emit(CoreEvent::Connectivity(ConnectivityEvent::Changed {
                        is_connected: state.is_connected,
                        interface: state.interface.map(|_| state.interface_label().to_string()),
                    }))
                    .ok();

                state_tx.send_replace(state);
            }
            debug!("path update stream ended");
        });

        *guard = Some(handle);
        info!("reachability observation started");
        Ok(())
    }

    /// Stop observing path changes.
    ///
    /// Aborts the forwarding task so no monitor notification can touch the
    /// state afterwards. Safe to call multiple times.
    pub fn stop(&self) {
        let handle = match self.forwarder.lock() {
            Ok(mut guard) => guard.take(),
            Err(poisoned) => poisoned.into_inner().take(),
        };
        if let Some(handle) = handle {
            handle.abort();
            info!("reachability observation stopped");
        }
    }

    fn is_running(&self) -> bool {
        match self.forwarder.lock() {
            Ok(guard) => guard.as_ref().is_some_and(|handle| !handle.is_finished()),
            Err(poisoned) => poisoned
                .into_inner()
                .as_ref()
                .is_some_and(|handle| !handle.is_finished()),
        }
    }
}

impl Drop for ReachabilityObserver {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use bridge_traits::network::{PathStatus, PathUpdateStream};
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    /// Monitor that hands out one scripted stream per `watch` call and counts
    /// how often it was subscribed to.
    struct ScriptedMonitor {
        paths: Vec<NetworkPath>,
        hold_open: bool,
        watch_calls: AtomicUsize,
    }

    impl ScriptedMonitor {
        fn new(paths: Vec<NetworkPath>) -> Self {
            Self {
                paths,
                hold_open: false,
                watch_calls: AtomicUsize::new(0),
            }
        }

        /// Streams stay pending after the script runs out, keeping the
        /// forwarding task alive.
        fn holding_open(paths: Vec<NetworkPath>) -> Self {
            Self {
                paths,
                hold_open: true,
                watch_calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl PathMonitor for ScriptedMonitor {
        async fn current_path(&self) -> BridgeResult<NetworkPath> {
            Ok(NetworkPath {
                status: PathStatus::Unsatisfied,
                interfaces: vec![],
            })
        }

        async fn watch(&self) -> BridgeResult<Box<dyn PathUpdateStream>> {
            self.watch_calls.fetch_add(1, Ordering::SeqCst);
            Ok(Box::new(ScriptedStream {
                paths: self.paths.clone().into(),
                hold_open: self.hold_open,
            }))
        }
    }

    struct ScriptedStream {
        paths: VecDeque<NetworkPath>,
        /// When set, `next` pends forever after the script runs out instead
        /// of closing the stream.
        hold_open: bool,
    }

    #[async_trait]
    impl PathUpdateStream for ScriptedStream {
        async fn next(&mut self) -> Option<NetworkPath> {
            match self.paths.pop_front() {
                Some(path) => Some(path),
                None if self.hold_open => {
                    std::future::pending::<()>().await;
                    None
                }
                None => None,
            }
        }
    }

    fn wifi_path() -> NetworkPath {
        NetworkPath {
            status: PathStatus::Satisfied,
            interfaces: vec![InterfaceKind::Wifi],
        }
    }

    fn offline_path() -> NetworkPath {
        NetworkPath {
            status: PathStatus::Unsatisfied,
            interfaces: vec![],
        }
    }

    async fn wait_for_state(
        rx: &mut watch::Receiver<ConnectivityState>,
        expected: ConnectivityState,
    ) {
        tokio::time::timeout(Duration::from_secs(1), async {
            loop {
                if *rx.borrow_and_update() == expected {
                    return;
                }
                if rx.changed().await.is_err() {
                    panic!("state channel closed before reaching expected state");
                }
            }
        })
        .await
        .expect("timed out waiting for connectivity state");
    }

    #[test]
    fn test_initial_state_is_optimistic() {
        let state = ConnectivityState::default();
        assert!(state.is_connected);
        assert_eq!(state.interface, None);
        assert_eq!(state.interface_label(), "Unknown");
    }

    #[test]
    fn test_interface_label_is_total() {
        let labels: Vec<&str> = [
            Some(InterfaceKind::Wifi),
            Some(InterfaceKind::Cellular),
            Some(InterfaceKind::WiredEthernet),
            Some(InterfaceKind::Loopback),
            Some(InterfaceKind::Other),
            None,
        ]
        .into_iter()
        .map(|interface| {
            ConnectivityState {
                is_connected: interface.is_some(),
                interface,
            }
            .interface_label()
        })
        .collect();

        assert_eq!(
            labels,
            vec!["Wi-Fi", "Cellular", "Ethernet", "Loopback", "Other", "Unknown"]
        );
        assert!(labels.iter().all(|label| !label.is_empty()));
    }

    #[test]
    fn test_state_from_satisfied_wifi_path() {
        let state = ConnectivityState::from_path(&wifi_path());
        assert_eq!(
            state,
            ConnectivityState {
                is_connected: true,
                interface: Some(InterfaceKind::Wifi),
            }
        );
        assert_eq!(state.interface_label(), "Wi-Fi");
    }

    #[tokio::test]
    async fn test_last_write_wins_over_sequence() {
        let monitor = Arc::new(ScriptedMonitor::new(vec![
            wifi_path(),
            offline_path(),
            NetworkPath {
                status: PathStatus::Satisfied,
                interfaces: vec![InterfaceKind::Cellular, InterfaceKind::Wifi],
            },
        ]));
        let observer = ReachabilityObserver::new(monitor, EventBus::new(16));
        let mut rx = observer.subscribe();

        observer.start().await.unwrap();

        wait_for_state(
            &mut rx,
            ConnectivityState {
                is_connected: true,
                interface: Some(InterfaceKind::Cellular),
            },
        )
        .await;
        assert_eq!(observer.state().interface_label(), "Cellular");
    }

    #[tokio::test]
    async fn test_start_is_idempotent_while_running() {
        let monitor = Arc::new(ScriptedMonitor::holding_open(vec![wifi_path()]));
        let observer = ReachabilityObserver::new(monitor.clone(), EventBus::new(16));

        observer.start().await.unwrap();
        observer.start().await.unwrap();

        assert_eq!(monitor.watch_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_stop_allows_a_fresh_subscription() {
        let monitor = Arc::new(ScriptedMonitor::holding_open(vec![]));
        let observer = ReachabilityObserver::new(monitor.clone(), EventBus::new(16));

        observer.start().await.unwrap();
        observer.stop();
        observer.start().await.unwrap();

        assert_eq!(monitor.watch_calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_offline_transition_emits_event() {
        let monitor = Arc::new(ScriptedMonitor::new(vec![offline_path()]));
        let events = EventBus::new(16);
        let mut sub = events.subscribe();
        let observer = ReachabilityObserver::new(monitor, events);
        let mut rx = observer.subscribe();

        observer.start().await.unwrap();
        wait_for_state(
            &mut rx,
            ConnectivityState {
                is_connected: false,
                interface: None,
            },
        )
        .await;

        let event = sub.recv().await.unwrap();
        assert_eq!(
            event,
            CoreEvent::Connectivity(ConnectivityEvent::Changed {
                is_connected: false,
                interface: None,
            })
        );
    }
}
