//! Session lifecycle and idle timeout.
//!
//! A `Session` exists only while the journal is unlocked. It holds the
//! raw PIN in memory (re-sealing on every save needs it) wrapped so it
//! is zeroized on drop, plus the activity monitor that drives auto-lock.
//! There is no warning before the idle lock fires; unsaved presentation
//! state is lost by design, since the entry store only changes on
//! explicit saves.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use secrecy::{ExposeSecret, SecretString};

use crate::journal::Journal;
use crate::storage::SlotStore;

/// Idle time after which an unlocked session is forcibly locked.
pub const IDLE_LIMIT: Duration = Duration::from_secs(15 * 60);

/// How often the idle check runs.
pub const IDLE_POLL_INTERVAL: Duration = Duration::from_secs(60);

/// Granularity of the watcher's stop checks.
const SLEEP_SLICE: Duration = Duration::from_millis(50);

/// One unlocked period.
pub struct Session {
    pin: SecretString,
    digest: String,
    monitor: SessionMonitor,
}

impl Session {
    pub(crate) fn new(pin: &str, digest: String) -> Self {
        Self {
            pin: SecretString::from(pin.to_string()),
            digest,
            monitor: SessionMonitor::new(),
        }
    }

    pub(crate) fn pin(&self) -> &str {
        self.pin.expose_secret()
    }

    pub(crate) fn digest(&self) -> &str {
        &self.digest
    }

    /// Swap in a rotated PIN without resetting the activity clock.
    pub(crate) fn rekey(&mut self, pin: &str, digest: String) {
        self.pin = SecretString::from(pin.to_string());
        self.digest = digest;
    }

    pub(crate) fn monitor(&self) -> &SessionMonitor {
        &self.monitor
    }

    pub(crate) fn monitor_mut(&mut self) -> &mut SessionMonitor {
        &mut self.monitor
    }
}

/// Tracks the last observed user interaction for one session.
#[derive(Debug, Clone)]
pub struct SessionMonitor {
    last_activity: Instant,
}

impl SessionMonitor {
    pub fn new() -> Self {
        Self {
            last_activity: Instant::now(),
        }
    }

    /// Record a user-observable interaction.
    pub fn record_activity(&mut self) {
        self.record_activity_at(Instant::now());
    }

    /// Record activity against an explicit clock.
    pub fn record_activity_at(&mut self, now: Instant) {
        self.last_activity = now;
    }

    /// Whether the idle limit has elapsed with no recorded activity.
    pub fn is_expired_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.last_activity) > IDLE_LIMIT
    }
}

impl Default for SessionMonitor {
    fn default() -> Self {
        Self::new()
    }
}

/// Background idle poller.
///
/// Runs the journal's idle check on a fixed interval, taking the same
/// lock as user-triggered operations, so a forced lock can never land in
/// the middle of an in-progress save. Stop it on explicit logout or
/// process teardown; dropping it stops it too.
pub struct IdleWatcher {
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl IdleWatcher {
    /// Spawn a poller over a shared journal.
    pub fn spawn<S>(journal: Arc<Mutex<Journal<S>>>, poll: Duration) -> Self
    where
        S: SlotStore + 'static,
    {
        let stop = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&stop);
        let handle = std::thread::spawn(move || {
            let mut waited = Duration::ZERO;
            while !flag.load(Ordering::Relaxed) {
                std::thread::sleep(SLEEP_SLICE);
                waited += SLEEP_SLICE;
                if waited < poll {
                    continue;
                }
                waited = Duration::ZERO;
                if let Ok(mut journal) = journal.lock() {
                    journal.tick();
                }
            }
        });
        Self {
            stop,
            handle: Some(handle),
        }
    }

    /// Signal the poller to stop and wait for it to exit.
    pub fn stop(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for IdleWatcher {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monitor_fresh_not_expired() {
        let monitor = SessionMonitor::new();
        assert!(!monitor.is_expired_at(Instant::now()));
    }

    #[test]
    fn test_monitor_expires_past_limit() {
        let monitor = SessionMonitor::new();
        let later = Instant::now() + IDLE_LIMIT + Duration::from_secs(1);
        assert!(monitor.is_expired_at(later));
    }

    #[test]
    fn test_monitor_exactly_at_limit_not_expired() {
        let t0 = Instant::now();
        let mut monitor = SessionMonitor::new();
        monitor.record_activity_at(t0);
        assert!(!monitor.is_expired_at(t0 + IDLE_LIMIT));
    }

    #[test]
    fn test_activity_resets_clock() {
        let t0 = Instant::now();
        let mut monitor = SessionMonitor::new();
        monitor.record_activity_at(t0);

        let near_limit = t0 + IDLE_LIMIT - Duration::from_secs(1);
        monitor.record_activity_at(near_limit);
        assert!(!monitor.is_expired_at(t0 + IDLE_LIMIT + Duration::from_secs(1)));
    }

    #[test]
    fn test_earlier_clock_does_not_underflow() {
        let t0 = Instant::now();
        let mut monitor = SessionMonitor::new();
        monitor.record_activity_at(t0 + Duration::from_secs(5));
        assert!(!monitor.is_expired_at(t0));
    }

    #[test]
    fn test_watcher_stops_cleanly() {
        use crate::storage::MemorySlotStore;

        let journal = Arc::new(Mutex::new(Journal::new(MemorySlotStore::new())));
        let watcher = IdleWatcher::spawn(Arc::clone(&journal), Duration::from_millis(100));
        std::thread::sleep(Duration::from_millis(150));
        watcher.stop();
        // Journal is still usable after the watcher is gone.
        assert!(!journal.lock().unwrap().is_unlocked());
    }
}
