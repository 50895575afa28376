/*!
 * Blocking Queue
 *
 * Unbounded FIFO with fair, explicitly bound handoff to blocked consumers.
 *
 * # Design: Producer-Side Binding
 *
 * All state sits behind one `parking_lot::Mutex`. Resident items live in one
 * of two places:
 * - `items`: unpromised, available to any `dequeue`/`try_dequeue`
 * - `handoffs`: promised to a specific ticket, only its owner may take it
 *
 * A producer that finds a waiter moves the item it just appended into
 * `handoffs` under that waiter's ticket id, pops the ticket and signals it,
 * all in one critical section. While the wait list is non-empty `items` is
 * therefore always empty, so a late consumer cannot overtake an earlier one.
 */

use crate::core::limits::HANDOFF_TABLE_CAPACITY;
use crate::core::sync::WaitList;
use crate::core::types::{Size, TicketId};
use ahash::RandomState;
use parking_lot::Mutex;
use std::collections::{HashMap, VecDeque};
use std::fmt;

/// Everything guarded by the control lock
pub(super) struct QueueState<T> {
    pub items: VecDeque<T>,
    pub handoffs: HashMap<TicketId, T, RandomState>,
    pub waiters: WaitList,
    pub next_ticket: TicketId,
    pub visited: Size,
    pub enqueued: Size,
}

impl<T> QueueState<T> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
            handoffs: HashMap::with_capacity_and_hasher(HANDOFF_TABLE_CAPACITY, RandomState::new()),
            waiters: WaitList::new(),
            next_ticket: 1,
            visited: 0,
            enqueued: 0,
        }
    }

    /// Resident items, promised or not
    #[inline]
    pub fn size(&self) -> Size {
        self.items.len() + self.handoffs.len()
    }

    #[inline]
    pub fn allocate_ticket(&mut self) -> TicketId {
        let id = self.next_ticket;
        self.next_ticket += 1;
        id
    }

    /// Take the oldest unpromised item
    #[inline]
    pub fn take_front(&mut self) -> Option<T> {
        let item = self.items.pop_front()?;
        self.visited += 1;
        Some(item)
    }
}

/// Fair multi-producer, multi-consumer blocking FIFO
///
/// Share it by reference (scoped threads) or wrap it in `Arc`.
///
/// # Examples
///
/// ```
/// use handoff_queue::BlockingQueue;
///
/// let queue = BlockingQueue::new();
/// queue.enqueue("a");
/// queue.enqueue("b");
///
/// assert_eq!(queue.try_dequeue(), Some("a"));
/// assert_eq!(queue.dequeue().unwrap(), "b");
/// assert_eq!(queue.try_dequeue(), None);
/// assert_eq!(queue.visited(), 2);
/// ```
pub struct BlockingQueue<T> {
    pub(super) name: String,
    pub(super) state: Mutex<QueueState<T>>,
}

impl<T> BlockingQueue<T> {
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Items currently resident
    pub fn size(&self) -> Size {
        self.state.lock().size()
    }

    /// Consumers currently blocked in `dequeue`
    pub fn waiting(&self) -> Size {
        self.state.lock().waiters.len()
    }

    /// Items ever removed
    pub fn visited(&self) -> Size {
        self.state.lock().visited
    }

    /// Items ever inserted
    pub fn enqueued(&self) -> Size {
        self.state.lock().enqueued
    }

    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }
}

impl<T> fmt::Debug for BlockingQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.lock();
        f.debug_struct("BlockingQueue")
            .field("name", &self.name)
            .field("size", &state.size())
            .field("waiting", &state.waiters.len())
            .field("visited", &state.visited)
            .field("enqueued", &state.enqueued)
            .finish()
    }
}
