/*!
 * Queue Lifecycle Operations
 * Construction, stats snapshots and teardown
 */

use super::blocking::{BlockingQueue, QueueState};
use super::config::QueueConfig;
use super::types::{QueueStats, TeardownReport};
use crate::core::errors::QueueResult;
use parking_lot::Mutex;
use tracing::{debug, info};

impl<T> BlockingQueue<T> {
    /// Create an empty queue with default configuration
    pub fn new() -> Self {
        Self::from_valid_config(QueueConfig::default())
    }

    /// Create an empty queue after validating `config`
    pub fn with_config(config: QueueConfig) -> QueueResult<Self> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: QueueConfig) -> Self {
        debug!(
            queue = %config.name,
            initial_capacity = config.initial_capacity,
            "blocking queue initialized"
        );
        Self {
            name: config.name,
            state: Mutex::new(QueueState::with_capacity(config.initial_capacity)),
        }
    }

    /// Snapshot every counter in one critical section
    pub fn stats(&self) -> QueueStats {
        let state = self.state.lock();
        QueueStats {
            name: self.name.clone(),
            size: state.size(),
            waiting: state.waiters.len(),
            visited: state.visited,
            enqueued: state.enqueued,
        }
    }

    /// Destroy the queue, discarding resident items without returning them
    ///
    /// Taking `self` by value means no thread can still be blocked in
    /// `dequeue`. Callers sharing through `Arc` recover ownership first with
    /// `Arc::try_unwrap`.
    pub fn teardown(self) -> TeardownReport {
        let Self { name, state } = self;
        let mut state = state.into_inner();

        let discarded_items = state.size();
        state.items.clear();
        state.handoffs.clear();
        // Always zero: a blocked dequeue borrows the queue, so none can outlive `self`
        let discarded_tickets = state.waiters.clear();

        info!(
            queue = %name,
            discarded_items,
            visited = state.visited,
            enqueued = state.enqueued,
            "blocking queue torn down"
        );

        TeardownReport {
            name,
            discarded_items,
            discarded_tickets,
            visited: state.visited,
            enqueued: state.enqueued,
        }
    }
}

impl<T> Default for BlockingQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::QueueError;

    #[test]
    fn test_new_queue_is_empty() {
        let queue: BlockingQueue<u32> = BlockingQueue::new();
        assert_eq!(queue.size(), 0);
        assert_eq!(queue.waiting(), 0);
        assert_eq!(queue.visited(), 0);
        assert!(queue.is_empty());
        assert_eq!(queue.name(), "default");
    }

    #[test]
    fn test_with_config_validates() {
        let queue = BlockingQueue::<u32>::with_config(QueueConfig::named("jobs")).unwrap();
        assert_eq!(queue.name(), "jobs");

        let err = BlockingQueue::<u32>::with_config(QueueConfig::named("")).unwrap_err();
        assert!(matches!(err, QueueError::InvalidConfig(_)));
    }

    #[test]
    fn test_stats_snapshot() {
        let queue = BlockingQueue::with_config(QueueConfig::named("stats")).unwrap();
        queue.enqueue(1);
        queue.enqueue(2);
        queue.try_dequeue();

        let stats = queue.stats();
        assert_eq!(stats.name, "stats");
        assert_eq!(stats.size, 1);
        assert_eq!(stats.visited, 1);
        assert_eq!(stats.enqueued, 2);
        assert_eq!(stats.waiting, 0);
        assert!(stats.is_balanced());
    }

    #[test]
    fn test_teardown_discards_items() {
        let queue = BlockingQueue::new();
        queue.enqueue(String::from("left"));
        queue.enqueue(String::from("behind"));
        assert_eq!(queue.try_dequeue().as_deref(), Some("left"));

        let report = queue.teardown();
        assert_eq!(report.discarded_items, 1);
        assert_eq!(report.discarded_tickets, 0);
        assert_eq!(report.visited, 1);
        assert_eq!(report.enqueued, 2);
    }

    #[test]
    fn test_teardown_drops_items() {
        use std::sync::Arc;

        let tracker = Arc::new(());
        let queue = BlockingQueue::new();
        queue.enqueue(tracker.clone());
        queue.enqueue(tracker.clone());
        assert_eq!(Arc::strong_count(&tracker), 3);

        queue.teardown();
        assert_eq!(Arc::strong_count(&tracker), 1);
    }
}
