/// Daily unique visitor counter.
///
/// Users are counted when they send `/start`. The set is cleared on a fixed
/// interval measured from process start, not at calendar midnight.
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;
use teloxide::types::UserId;
use tokio::sync::Mutex;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::info;

/// Set of users seen since the last reset.
#[derive(Debug, Default)]
pub struct VisitorTracker {
    seen: Mutex<HashSet<UserId>>,
}

impl VisitorTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a visit. Returns `true` if the user was not seen since the last reset.
    pub async fn record_visit(&self, user_id: UserId) -> bool {
        let mut seen = self.seen.lock().await;
        if !seen.insert(user_id) {
            return false;
        }

        info!(
            user_id = user_id.0,
            unique_today = seen.len(),
            "New unique visitor"
        );
        true
    }

    /// Number of distinct users seen since the last reset.
    pub async fn unique_count(&self) -> usize {
        self.seen.lock().await.len()
    }

    /// Replaces the visitor set with an empty one, returning how many users it held.
    pub async fn reset(&self) -> usize {
        let previous = std::mem::take(&mut *self.seen.lock().await);
        info!(
            previous_unique = previous.len(),
            "Daily unique visitor statistics reset"
        );
        previous.len()
    }

    /// Clears the visitor set every `period`, forever. The first reset
    /// happens one full period after the call.
    pub async fn run_reset_loop(self: Arc<Self>, period: Duration) {
        let mut ticker = interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            self.reset().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_first_visit_is_new_once() {
        let tracker = VisitorTracker::new();

        assert!(tracker.record_visit(UserId(42)).await);
        assert!(!tracker.record_visit(UserId(42)).await);
        assert!(!tracker.record_visit(UserId(42)).await);
        assert_eq!(tracker.unique_count().await, 1);
    }

    #[tokio::test]
    async fn test_distinct_users_are_counted_separately() {
        let tracker = VisitorTracker::new();

        assert!(tracker.record_visit(UserId(1)).await);
        assert!(tracker.record_visit(UserId(2)).await);
        assert!(!tracker.record_visit(UserId(1)).await);
        assert_eq!(tracker.unique_count().await, 2);
    }

    #[tokio::test]
    async fn test_reset_makes_users_new_again() {
        let tracker = VisitorTracker::new();
        tracker.record_visit(UserId(7)).await;
        tracker.record_visit(UserId(8)).await;

        assert_eq!(tracker.reset().await, 2);
        assert_eq!(tracker.unique_count().await, 0);
        assert!(tracker.record_visit(UserId(7)).await);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_visits_lose_no_updates() {
        let tracker = Arc::new(VisitorTracker::new());

        let handles: Vec<_> = (0..200u64)
            .map(|i| {
                let tracker = Arc::clone(&tracker);
                // Every id is submitted twice; only the first may count as new.
                tokio::spawn(async move { tracker.record_visit(UserId(i % 100)).await })
            })
            .collect();

        let mut new_visits = 0;
        for handle in handles {
            if handle.await.unwrap() {
                new_visits += 1;
            }
        }

        assert_eq!(new_visits, 100);
        assert_eq!(tracker.unique_count().await, 100);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_loop_clears_after_each_period() {
        let period = Duration::from_secs(24 * 60 * 60);
        let tracker = Arc::new(VisitorTracker::new());
        tokio::spawn(Arc::clone(&tracker).run_reset_loop(period));

        tracker.record_visit(UserId(5)).await;

        tokio::time::sleep(period / 2).await;
        assert!(!tracker.record_visit(UserId(5)).await);

        tokio::time::sleep(period / 2 + Duration::from_secs(1)).await;
        assert_eq!(tracker.unique_count().await, 0);
        assert!(tracker.record_visit(UserId(5)).await);

        tokio::time::sleep(period).await;
        assert_eq!(tracker.unique_count().await, 0);
    }
}
