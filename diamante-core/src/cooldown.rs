use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Window during which a user's messages accrue no further XP.
pub const XP_COOLDOWN: Duration = Duration::from_secs(30);

/// In-memory, per-process exclusion window keyed by user id.
///
/// Entries carry their expiry instant and are pruned on each access, so no
/// timers are spawned and the map never outgrows the set of users active
/// within one window. A restart clears all cooldowns.
#[derive(Debug)]
pub struct CooldownTracker {
    window: Duration,
    entries: Mutex<HashMap<u64, Instant>>,
}

impl CooldownTracker {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Whether `user_id` is still inside its exclusion window.
    pub fn is_on_cooldown(&self, user_id: u64) -> bool {
        self.is_on_cooldown_at(user_id, Instant::now())
    }

    /// Start (or restart) the exclusion window for `user_id`.
    pub fn start_cooldown(&self, user_id: u64) {
        self.start_cooldown_at(user_id, Instant::now());
    }

    fn is_on_cooldown_at(&self, user_id: u64, now: Instant) -> bool {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.retain(|_, expires_at| *expires_at > now);
        entries.contains_key(&user_id)
    }

    fn start_cooldown_at(&self, user_id: u64, now: Instant) {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.insert(user_id, now + self.window);
    }
}

#[cfg(test)]
mod tests {
    use super::CooldownTracker;
    use std::time::{Duration, Instant};

    #[test]
    fn user_is_excluded_within_window() {
        let tracker = CooldownTracker::new(Duration::from_secs(30));
        let start = Instant::now();

        assert!(!tracker.is_on_cooldown_at(7, start));
        tracker.start_cooldown_at(7, start);
        assert!(tracker.is_on_cooldown_at(7, start + Duration::from_secs(1)));
        assert!(tracker.is_on_cooldown_at(7, start + Duration::from_secs(29)));
    }

    #[test]
    fn entry_expires_after_window() {
        let tracker = CooldownTracker::new(Duration::from_secs(30));
        let start = Instant::now();

        tracker.start_cooldown_at(7, start);
        assert!(!tracker.is_on_cooldown_at(7, start + Duration::from_secs(30)));

        // A fresh window opens after expiry.
        tracker.start_cooldown_at(7, start + Duration::from_secs(31));
        assert!(tracker.is_on_cooldown_at(7, start + Duration::from_secs(32)));
    }

    #[test]
    fn expired_entries_are_pruned_on_access() {
        let tracker = CooldownTracker::new(Duration::from_secs(30));
        let start = Instant::now();

        tracker.start_cooldown_at(1, start);
        tracker.start_cooldown_at(2, start);
        tracker.is_on_cooldown_at(3, start + Duration::from_secs(31));

        let entries = tracker.entries.lock().unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn cooldowns_are_independent_per_user() {
        let tracker = CooldownTracker::new(Duration::from_secs(30));
        let start = Instant::now();

        tracker.start_cooldown_at(1, start);
        assert!(tracker.is_on_cooldown_at(1, start + Duration::from_secs(5)));
        assert!(!tracker.is_on_cooldown_at(2, start + Duration::from_secs(5)));
    }
}
