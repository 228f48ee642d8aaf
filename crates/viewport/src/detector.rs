//! Breakpoint detection
//!
//! The detector tracks the viewport width and publishes the tier derived
//! from it. Width samples that stay inside one tier are absorbed silently:
//! subscribers hear about tier *transitions* only, which bounds how often
//! layouts are recomputed during a continuous resize.

use crate::config::ViewportConfig;
use crate::source::ViewportSource;
use layout_tokens::{BreakpointFlags, Breakpoints, Result, Tier};
use parking_lot::{Mutex, RwLock};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::{broadcast, mpsc, watch};
use uuid::Uuid;

/// A transition from one tier to another
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierChange {
    /// Tier before the transition
    pub from: Tier,
    /// Tier after the transition
    pub to: Tier,
    /// Width sample that caused it
    pub width: Option<f32>,
}

/// Consistent view of the detector at one instant
///
/// A render pass should take one snapshot and resolve every component
/// against it, so no two components in the pass can see different tiers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportSnapshot {
    /// Last width sample
    pub width: Option<f32>,
    /// Tier of that sample
    pub tier: Tier,
    /// Flags derived from the tier
    pub flags: BreakpointFlags,
}

/// Handle to a registered change callback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(Uuid);

type Listener = Arc<dyn Fn(&TierChange) + Send + Sync>;

#[derive(Debug)]
struct DetectorState {
    width: Option<f32>,
    tier: Tier,
}

/// Tracks the current breakpoint tier
///
/// # Example
///
/// ```
/// use layout_tokens::Tier;
/// use viewport::BreakpointDetector;
///
/// let detector = BreakpointDetector::new();
/// assert_eq!(detector.current_tier(), Tier::Mobile);
///
/// let change = detector.update_width(Some(1440.0)).unwrap();
/// assert_eq!(change.to, Tier::Desktop);
///
/// // Same tier, no transition
/// assert!(detector.update_width(Some(1500.0)).is_none());
/// ```
pub struct BreakpointDetector {
    breakpoints: Breakpoints,
    /// Last sample and its tier, replaced as a whole
    state: RwLock<DetectorState>,
    /// Current tier for async subscribers
    tier_tx: watch::Sender<Tier>,
    /// Transition broadcaster
    events_tx: broadcast::Sender<TierChange>,
    /// Synchronous callbacks
    listeners: Mutex<Vec<(ListenerId, Listener)>>,
    /// Number of tracking tasks running
    active_trackers: Arc<AtomicUsize>,
}

impl std::fmt::Debug for BreakpointDetector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BreakpointDetector")
            .field("breakpoints", &self.breakpoints)
            .field("state", &*self.state.read())
            .field("listeners", &self.listeners.lock().len())
            .finish()
    }
}

impl BreakpointDetector {
    /// Create a detector with the standard thresholds and no measurement
    pub fn new() -> Self {
        Self::build(Breakpoints::STANDARD, None, 16)
    }

    /// Create a detector with custom thresholds
    pub fn with_breakpoints(breakpoints: Breakpoints) -> Self {
        Self::build(breakpoints, None, 16)
    }

    /// Create a detector from configuration
    pub fn from_config(config: &ViewportConfig) -> Result<Self> {
        let breakpoints = config.breakpoints()?;
        Ok(Self::build(
            breakpoints,
            config.initial_width,
            config.event_capacity.max(1),
        ))
    }

    fn build(breakpoints: Breakpoints, width: Option<f32>, capacity: usize) -> Self {
        let tier = breakpoints.tier_for(width);
        let (tier_tx, _) = watch::channel(tier);
        let (events_tx, _) = broadcast::channel(capacity);

        BreakpointDetector {
            breakpoints,
            state: RwLock::new(DetectorState { width, tier }),
            tier_tx,
            events_tx,
            listeners: Mutex::new(Vec::new()),
            active_trackers: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Thresholds in use
    pub fn breakpoints(&self) -> Breakpoints {
        self.breakpoints
    }

    /// The tier containing the last width sample
    pub fn current_tier(&self) -> Tier {
        self.state.read().tier
    }

    /// The last width sample
    pub fn width(&self) -> Option<f32> {
        self.state.read().width
    }

    /// Flags derived from the current tier
    pub fn flags(&self) -> BreakpointFlags {
        self.current_tier().flags()
    }

    /// Width, tier and flags read together
    pub fn snapshot(&self) -> ViewportSnapshot {
        let state = self.state.read();
        ViewportSnapshot {
            width: state.width,
            tier: state.tier,
            flags: state.tier.flags(),
        }
    }

    /// Record a width sample
    ///
    /// Returns the transition if the sample moved the viewport into another
    /// tier. Subscribers are notified only in that case.
    pub fn update_width(&self, width: Option<f32>) -> Option<TierChange> {
        let tier = self.breakpoints.tier_for(width);
        let mut state = self.state.write();
        state.width = width;

        if state.tier == tier {
            return None;
        }

        let change = TierChange {
            from: state.tier,
            to: tier,
            width,
        };
        state.tier = tier;

        // Publish under the write guard so concurrent writers cannot reorder
        // the watch value against the stored tier
        self.tier_tx.send_replace(tier);
        let _ = self.events_tx.send(change);
        drop(state);

        tracing::debug!(from = %change.from, to = %change.to, ?width, "viewport tier changed");

        let listeners: Vec<Listener> = self
            .listeners
            .lock()
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();
        for listener in listeners {
            listener(&change);
        }

        Some(change)
    }

    /// Pull a width sample from the host
    pub fn refresh(&self, source: &dyn ViewportSource) -> Option<TierChange> {
        self.update_width(source.width())
    }

    /// Subscribe to the current tier
    pub fn subscribe(&self) -> watch::Receiver<Tier> {
        self.tier_tx.subscribe()
    }

    /// Subscribe to tier transitions
    pub fn subscribe_events(&self) -> broadcast::Receiver<TierChange> {
        self.events_tx.subscribe()
    }

    /// Register a callback run synchronously on every tier transition
    ///
    /// Callbacks run after the detector state is updated and unlocked, so
    /// they may read the detector freely.
    pub fn on_change<F>(&self, callback: F) -> ListenerId
    where
        F: Fn(&TierChange) + Send + Sync + 'static,
    {
        let id = ListenerId(Uuid::new_v4());
        self.listeners.lock().push((id, Arc::new(callback)));
        id
    }

    /// Unregister a callback; returns false if it was not registered
    pub fn remove_listener(&self, id: ListenerId) -> bool {
        let mut listeners = self.listeners.lock();
        let before = listeners.len();
        listeners.retain(|(candidate, _)| *candidate != id);
        listeners.len() != before
    }

    /// Number of registered callbacks
    pub fn listener_count(&self) -> usize {
        self.listeners.lock().len()
    }

    /// Check if any tracking task is currently running
    pub fn is_tracking(&self) -> bool {
        self.active_trackers.load(Ordering::SeqCst) > 0
    }

    /// Follow a stream of resize samples
    ///
    /// This spawns a background task. Samples queued while the task was busy
    /// are coalesced into the most recent one before the tier is recomputed.
    /// The task stops when the returned handle is dropped or the sender
    /// side of the channel closes.
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime.
    pub fn start_tracking(self: &Arc<Self>, mut resizes: mpsc::Receiver<f32>) -> TrackingHandle {
        let (stop_tx, mut stop_rx) = tokio::sync::oneshot::channel();
        let detector = Arc::clone(self);

        detector.active_trackers.fetch_add(1, Ordering::SeqCst);
        tracing::debug!("viewport tracking started");

        let handle = tokio::spawn(async move {
            loop {
                tokio::select! {
                    sample = resizes.recv() => {
                        let Some(mut width) = sample else {
                            break;
                        };
                        let mut coalesced = 0usize;
                        while let Ok(next) = resizes.try_recv() {
                            width = next;
                            coalesced += 1;
                        }
                        if coalesced > 0 {
                            tracing::trace!(coalesced, width, "coalesced resize samples");
                        }
                        detector.update_width(Some(width));
                    }
                    _ = &mut stop_rx => {
                        break;
                    }
                }
            }

            detector.active_trackers.fetch_sub(1, Ordering::SeqCst);
            tracing::debug!("viewport tracking stopped");
        });

        TrackingHandle {
            stop_tx: Some(stop_tx),
            _handle: handle,
        }
    }
}

impl Default for BreakpointDetector {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle for controlling resize tracking
///
/// When dropped, the tracking task will be stopped.
pub struct TrackingHandle {
    stop_tx: Option<tokio::sync::oneshot::Sender<()>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl TrackingHandle {
    /// Stop tracking manually
    pub fn stop(mut self) {
        if let Some(tx) = self.stop_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for TrackingHandle {
    fn drop(&mut self) {
        if let Some(tx) = self.stop_tx.take() {
            let _ = tx.send(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::MockViewportSource;

    async fn wait_until_idle(detector: &BreakpointDetector) {
        for _ in 0..50 {
            if !detector.is_tracking() {
                return;
            }
            tokio::task::yield_now().await;
        }
    }

    #[test]
    fn test_initial_state_is_smallest_tier() {
        let detector = BreakpointDetector::new();
        assert_eq!(detector.current_tier(), Tier::Mobile);
        assert_eq!(detector.width(), None);
        assert!(detector.flags().is_mobile);
    }

    #[test]
    fn test_update_width_reports_transitions() {
        let detector = BreakpointDetector::new();

        let change = detector.update_width(Some(1024.0)).unwrap();
        assert_eq!(change.from, Tier::Mobile);
        assert_eq!(change.to, Tier::Tablet);
        assert_eq!(change.width, Some(1024.0));

        assert!(detector.update_width(Some(1100.0)).is_none());
        assert_eq!(detector.width(), Some(1100.0));

        let change = detector.update_width(None).unwrap();
        assert_eq!(change.to, Tier::Mobile);
    }

    #[test]
    fn test_snapshot_is_consistent() {
        let detector = BreakpointDetector::new();
        detector.update_width(Some(1440.0));
        let snapshot = detector.snapshot();
        assert_eq!(snapshot.tier, Tier::Desktop);
        assert_eq!(snapshot.flags, Tier::Desktop.flags());
        assert_eq!(snapshot.width, Some(1440.0));
    }

    #[test]
    fn test_refresh_from_source() {
        let mut source = MockViewportSource::new();
        source.expect_width().times(1).return_const(Some(800.0_f32));

        let detector = BreakpointDetector::new();
        let change = detector.refresh(&source).unwrap();
        assert_eq!(change.to, Tier::Tablet);
    }

    #[test]
    fn test_unmeasurable_source_falls_back_to_mobile() {
        let mut source = MockViewportSource::new();
        source.expect_width().times(1).return_const(None::<f32>);

        let detector = BreakpointDetector::with_breakpoints(Breakpoints::STANDARD);
        detector.update_width(Some(1600.0));
        detector.refresh(&source);
        assert_eq!(detector.current_tier(), Tier::Mobile);
    }

    #[test]
    fn test_from_config() {
        let config = ViewportConfig {
            tablet_min: 600.0,
            desktop_min: 1000.0,
            initial_width: Some(700.0),
            event_capacity: 4,
        };
        let detector = BreakpointDetector::from_config(&config).unwrap();
        assert_eq!(detector.current_tier(), Tier::Tablet);

        let bad = ViewportConfig {
            tablet_min: 1000.0,
            desktop_min: 600.0,
            ..ViewportConfig::default()
        };
        assert!(BreakpointDetector::from_config(&bad).is_err());
    }

    #[test]
    fn test_listeners_only_fire_on_transition() {
        let detector = BreakpointDetector::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let id = detector.on_change(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        for width in [320.0, 360.0, 414.0, 700.0] {
            detector.update_width(Some(width));
        }
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        detector.update_width(Some(900.0));
        detector.update_width(Some(1000.0));
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        assert!(detector.remove_listener(id));
        assert!(!detector.remove_listener(id));
        detector.update_width(Some(1300.0));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(detector.listener_count(), 0);
    }

    #[test]
    fn test_listener_can_read_detector() {
        let detector = Arc::new(BreakpointDetector::new());
        let seen = Arc::new(Mutex::new(Vec::new()));

        let reader = Arc::clone(&detector);
        let sink = Arc::clone(&seen);
        detector.on_change(move |change| {
            sink.lock().push((change.to, reader.current_tier()));
        });

        detector.update_width(Some(1300.0));
        assert_eq!(*seen.lock(), vec![(Tier::Desktop, Tier::Desktop)]);
    }

    #[tokio::test]
    async fn test_watch_subscription() {
        let detector = BreakpointDetector::new();
        let mut rx = detector.subscribe();

        assert_eq!(*rx.borrow(), Tier::Mobile);

        detector.update_width(Some(1280.0));
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow(), Tier::Desktop);
    }

    #[tokio::test]
    async fn test_no_duplicate_events() {
        let detector = BreakpointDetector::new();
        let mut rx = detector.subscribe_events();

        detector.update_width(Some(900.0));
        let change = rx.recv().await.unwrap();
        assert_eq!(change.to, Tier::Tablet);

        // Same tier again - should not trigger an event
        detector.update_width(Some(950.0));
        assert!(rx.try_recv().is_err());

        detector.update_width(Some(300.0));
        let change = rx.recv().await.unwrap();
        assert_eq!((change.from, change.to), (Tier::Tablet, Tier::Mobile));
    }

    #[tokio::test]
    async fn test_tracking_coalesces_bursts() {
        let detector = Arc::new(BreakpointDetector::new());
        let mut events = detector.subscribe_events();
        let (tx, rx) = mpsc::channel(32);

        // Queue a burst before the task gets to run
        for width in [500.0, 900.0, 1000.0, 1440.0] {
            tx.try_send(width).unwrap();
        }

        let handle = detector.start_tracking(rx);
        assert!(detector.is_tracking());

        let change = events.recv().await.unwrap();
        assert_eq!(change.from, Tier::Mobile);
        assert_eq!(change.to, Tier::Desktop);
        assert!(events.try_recv().is_err());

        handle.stop();
        wait_until_idle(&detector).await;
        assert!(!detector.is_tracking());
    }

    #[tokio::test]
    async fn test_tracking_stops_when_sender_closes() {
        let detector = Arc::new(BreakpointDetector::new());
        let (tx, rx) = mpsc::channel(4);
        let _handle = detector.start_tracking(rx);

        tx.send(1024.0).await.unwrap();
        drop(tx);

        wait_until_idle(&detector).await;
        assert!(!detector.is_tracking());
        assert_eq!(detector.current_tier(), Tier::Tablet);
    }

    #[test]
    fn test_concurrent_writers_keep_watch_in_sync() {
        use std::sync::Barrier;
        use std::thread;

        for _ in 0..2000 {
            let detector = Arc::new(BreakpointDetector::new());
            let rx = detector.subscribe();
            let barrier = Arc::new(Barrier::new(2));

            let writers: Vec<_> = [1440.0, 900.0]
                .into_iter()
                .map(|width| {
                    let detector = Arc::clone(&detector);
                    let barrier = Arc::clone(&barrier);
                    thread::spawn(move || {
                        barrier.wait();
                        detector.update_width(Some(width));
                    })
                })
                .collect();
            for writer in writers {
                writer.join().unwrap();
            }

            assert_eq!(*rx.borrow(), detector.current_tier());
        }
    }

    #[tokio::test]
    async fn test_is_tracking_counts_every_task() {
        let detector = Arc::new(BreakpointDetector::new());
        let (_first_tx, first_rx) = mpsc::channel(4);
        let (_second_tx, second_rx) = mpsc::channel(4);

        let first = detector.start_tracking(first_rx);
        let second = detector.start_tracking(second_rx);

        first.stop();
        for _ in 0..50 {
            tokio::task::yield_now().await;
        }
        assert!(detector.is_tracking());

        second.stop();
        wait_until_idle(&detector).await;
        assert!(!detector.is_tracking());
    }
}
