//! Client-side sliding-window request governor.
//!
//! Every outbound API call is admitted through a [`RequestGovernor`] before
//! it reaches the network. The governor keeps, per endpoint key, the
//! timestamps of calls admitted within the last window and denies a call
//! once `limit` of them are still in the window.
//!
//! Old entries age out one by one instead of being reset together at a
//! window boundary, so a full burst cannot land on both sides of a boundary.
//! Endpoints with nothing left in the window are dropped at most one window
//! after their last call, so per-resource keys do not accumulate.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

use tracing::{debug, warn};

/// Default look-back window.
pub const DEFAULT_WINDOW: Duration = Duration::from_secs(60);

/// Default maximum number of calls per endpoint within one window.
pub const DEFAULT_LIMIT: u32 = 30;

/// Source of the current time in unix milliseconds.
pub trait Clock: Send + Sync {
    fn now_millis(&self) -> i64;
}

/// Wall clock backed by `time::OffsetDateTime::now_utc`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        let nanos = time::OffsetDateTime::now_utc().unix_timestamp_nanos();
        (nanos / 1_000_000) as i64
    }
}

/// Manually driven clock for tests and replays.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: AtomicI64,
}

impl ManualClock {
    pub fn new(start_millis: i64) -> Self {
        Self {
            now: AtomicI64::new(start_millis),
        }
    }

    pub fn set(&self, millis: i64) {
        self.now.store(millis, Ordering::SeqCst);
    }

    pub fn advance(&self, by: Duration) {
        self.now.fetch_add(by.as_millis() as i64, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_millis(&self) -> i64 {
        self.now.load(Ordering::SeqCst)
    }
}

/// Window size and per-endpoint call limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GovernorConfig {
    pub window: Duration,
    pub limit: u32,
}

impl Default for GovernorConfig {
    fn default() -> Self {
        Self {
            window: DEFAULT_WINDOW,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Per-endpoint sliding-window rate limiter.
///
/// Cloning is cheap and every clone shares the same window state, so one
/// governor constructed at start-up can be handed to every client.
/// Admission and recording happen under a single lock, which keeps the
/// window count within `limit` even when called from several threads.
#[derive(Clone)]
pub struct RequestGovernor {
    inner: Arc<GovernorInner>,
}

struct GovernorInner {
    config: GovernorConfig,
    clock: Arc<dyn Clock>,
    windows: Mutex<Windows>,
}

#[derive(Default)]
struct Windows {
    entries: HashMap<String, VecDeque<i64>>,
    /// Time of the last full sweep over `entries`.
    swept_at: i64,
}

impl Windows {
    /// Prune every endpoint and drop the empty ones, once per window.
    fn sweep(&mut self, now: i64, window: i64) {
        if now.saturating_sub(self.swept_at) < window {
            return;
        }
        let before = self.entries.len();
        self.entries.retain(|_, entries| {
            prune(entries, now, window);
            !entries.is_empty()
        });
        self.swept_at = now;
        let dropped = before - self.entries.len();
        if dropped > 0 {
            debug!(dropped, remaining = self.entries.len(), "dropped idle governor endpoints");
        }
    }
}

impl std::fmt::Debug for RequestGovernor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestGovernor")
            .field("config", &self.inner.config)
            .finish_non_exhaustive()
    }
}

impl Default for RequestGovernor {
    fn default() -> Self {
        Self::new(GovernorConfig::default())
    }
}

impl RequestGovernor {
    /// Create a governor driven by the system clock.
    pub fn new(config: GovernorConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Create a governor driven by the given clock.
    pub fn with_clock(config: GovernorConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            inner: Arc::new(GovernorInner {
                config,
                clock,
                windows: Mutex::new(Windows::default()),
            }),
        }
    }

    pub fn config(&self) -> GovernorConfig {
        self.inner.config
    }

    /// The clock this governor reads when no explicit time is given.
    pub fn clock(&self) -> Arc<dyn Clock> {
        Arc::clone(&self.inner.clock)
    }

    /// Admit a call to `key` at the current clock time.
    pub fn admit(&self, key: &str) -> bool {
        self.admit_at(key, self.inner.clock.now_millis())
    }

    /// Admit a call to `key` at `now` (unix millis).
    ///
    /// Returns `false` without recording `now` when `limit` calls are
    /// already inside `(now - window, now]`.
    pub fn admit_at(&self, key: &str, now: i64) -> bool {
        let window = self.window_millis();
        let limit = self.inner.config.limit as usize;

        let mut windows = self.lock();
        windows.sweep(now, window);

        let in_window = match windows.entries.get_mut(key) {
            Some(entries) => {
                prune(entries, now, window);
                entries.len()
            }
            None => 0,
        };

        if in_window >= limit {
            if in_window == 0 {
                windows.entries.remove(key);
            }
            debug!(endpoint = %key, in_window, "request denied by governor");
            return false;
        }

        windows
            .entries
            .entry(key.to_owned())
            .or_default()
            .push_back(now);
        true
    }

    /// Forget all recorded calls for `key` after the server throttled it.
    pub fn report_throttled(&self, key: &str) {
        let removed = self
            .lock()
            .entries
            .remove(key)
            .map_or(0, |entries| entries.len());
        warn!(endpoint = %key, cleared = removed, "server throttled endpoint, local window cleared");
    }

    /// Number of recorded calls for `key` still inside the window at `now`.
    pub fn in_window(&self, key: &str, now: i64) -> usize {
        let window = self.window_millis();
        self.lock()
            .entries
            .get(key)
            .map_or(0, |entries| entries.iter().filter(|&&t| now - t < window).count())
    }

    /// Number of endpoint keys currently holding call history.
    pub fn tracked_endpoints(&self) -> usize {
        self.lock().entries.len()
    }

    fn window_millis(&self) -> i64 {
        self.inner.config.window.as_millis() as i64
    }

    fn lock(&self) -> MutexGuard<'_, Windows> {
        // The map holds plain timestamps, so a panic elsewhere cannot leave it
        // half-updated.
        self.inner
            .windows
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

/// Drop entries that are `window` or more milliseconds older than `now`.
///
/// Entries are pushed in call order, so stale ones sit at the front. A
/// timestamp from a clock that went backwards is kept until it ages out.
fn prune(entries: &mut VecDeque<i64>, now: i64, window: i64) {
    while let Some(&oldest) = entries.front() {
        if now - oldest >= window {
            entries.pop_front();
        } else {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn governor() -> RequestGovernor {
        RequestGovernor::with_clock(GovernorConfig::default(), Arc::new(ManualClock::new(0)))
    }

    #[test]
    fn test_sliding_window_admission() {
        let governor = governor();
        for i in 0..30 {
            assert!(governor.admit_at("/payments/methods", i * 1000), "call {i}");
        }
        assert!(!governor.admit_at("/payments/methods", 29_500));
        // first call at t=0 has aged out, 29 remain
        assert!(governor.admit_at("/payments/methods", 61_000));
    }

    #[test]
    fn test_denied_call_is_not_recorded() {
        let governor = governor();
        for _ in 0..30 {
            assert!(governor.admit_at("k", 0));
        }
        for t in [1, 2, 3] {
            assert!(!governor.admit_at("k", t));
        }
        assert_eq!(governor.in_window("k", 3), 30);
        assert!(governor.admit_at("k", 60_000));
    }

    #[test]
    fn test_no_boundary_double_burst() {
        let governor = governor();
        for _ in 0..30 {
            assert!(governor.admit_at("k", 59_000));
        }
        // a fixed counter reset at 60s would let another 30 through here
        assert!(!governor.admit_at("k", 60_500));
        assert!(governor.admit_at("k", 119_000));
    }

    #[test]
    fn test_report_throttled_clears_history() {
        let governor = governor();
        for _ in 0..30 {
            governor.admit_at("k", 10);
        }
        assert!(!governor.admit_at("k", 20));
        governor.report_throttled("k");
        assert!(governor.admit_at("k", 20));
        assert_eq!(governor.in_window("k", 20), 1);
    }

    #[test]
    fn test_report_throttled_on_unknown_key() {
        let governor = governor();
        governor.report_throttled("never-called");
        assert!(governor.admit_at("never-called", 0));
    }

    #[test]
    fn test_endpoints_are_independent() {
        let governor = governor();
        for _ in 0..30 {
            governor.admit_at("a", 0);
        }
        assert!(!governor.admit_at("a", 1));
        assert!(governor.admit_at("b", 1));
        governor.report_throttled("b");
        assert!(!governor.admit_at("a", 2));
    }

    #[test]
    fn test_admit_uses_injected_clock() {
        let clock = Arc::new(ManualClock::new(1_000));
        let governor = RequestGovernor::with_clock(
            GovernorConfig {
                window: Duration::from_secs(10),
                limit: 2,
            },
            clock.clone(),
        );
        assert!(governor.admit("k"));
        assert!(governor.admit("k"));
        assert!(!governor.admit("k"));
        clock.advance(Duration::from_secs(10));
        assert!(governor.admit("k"));
    }

    #[test]
    fn test_idle_endpoints_are_dropped() {
        let governor = governor();
        for i in 0..1000 {
            assert!(governor.admit_at(&format!("/teams/{i}/join-requests"), 0));
        }
        assert_eq!(governor.tracked_endpoints(), 1000);

        assert!(governor.admit_at("/wallet/balance", 60_000));
        assert_eq!(governor.tracked_endpoints(), 1);
        assert_eq!(governor.in_window("/teams/7/join-requests", 60_000), 0);
    }

    #[test]
    fn test_sweep_keeps_live_endpoints() {
        let governor = governor();
        for _ in 0..30 {
            governor.admit_at("busy", 30_000);
        }
        governor.admit_at("idle", 0);
        // sweep at 60s drops "idle" but "busy" is still full
        assert!(!governor.admit_at("busy", 60_000));
        assert_eq!(governor.tracked_endpoints(), 1);
        assert_eq!(governor.in_window("busy", 60_000), 30);
    }

    #[test]
    fn test_zero_limit_tracks_nothing() {
        let governor = RequestGovernor::with_clock(
            GovernorConfig {
                window: Duration::from_secs(60),
                limit: 0,
            },
            Arc::new(ManualClock::new(0)),
        );
        assert!(!governor.admit_at("k", 0));
        assert_eq!(governor.tracked_endpoints(), 0);
    }

    #[test]
    fn test_clones_share_state() {
        let governor = governor();
        let other = governor.clone();
        for _ in 0..30 {
            governor.admit_at("k", 0);
        }
        assert!(!other.admit_at("k", 0));
    }

    #[test]
    fn test_concurrent_admission_respects_limit() {
        let governor = governor();
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let governor = governor.clone();
                std::thread::spawn(move || (0..10).filter(|_| governor.admit_at("k", 5)).count())
            })
            .collect();
        let admitted: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();
        assert_eq!(admitted, 30);
    }
}
