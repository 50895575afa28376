/*!
 * Queue Types
 * Snapshots and reports returned by the blocking queue
 */

use crate::core::types::Size;
use serde::{Deserialize, Serialize};

/// Point-in-time counters, taken under one lock acquisition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueStats {
    pub name: String,
    /// Resident items, including ones promised to a woken waiter
    pub size: Size,
    /// Blocked consumers still in the wait list
    pub waiting: Size,
    /// Items ever removed
    pub visited: Size,
    /// Items ever inserted
    pub enqueued: Size,
}

impl QueueStats {
    /// `enqueued == size + visited`; only meaningful at a quiescent point
    pub fn is_balanced(&self) -> bool {
        self.enqueued == self.size + self.visited
    }
}

/// Summary of what `teardown` released
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeardownReport {
    pub name: String,
    /// Items dropped without being returned to a consumer
    pub discarded_items: Size,
    /// Tickets still registered when the queue was destroyed
    pub discarded_tickets: Size,
    pub visited: Size,
    pub enqueued: Size,
}
