/*!
 * Queue Operations
 * Enqueue, blocking dequeue and non-blocking dequeue
 */

use super::blocking::{BlockingQueue, QueueState};
use crate::core::errors::{QueueError, QueueResult};
use crate::core::sync::WaitTicket;
use std::sync::Arc;
use tracing::{error, trace};

impl<T> BlockingQueue<T> {
    /// Append `item`, handing it straight to the earliest blocked consumer if any
    ///
    /// Never blocks beyond brief lock contention. There is no capacity bound.
    pub fn enqueue(&self, item: T) {
        let mut state = self.state.lock();
        state.items.push_back(item);
        state.enqueued += 1;

        let QueueState {
            items,
            handoffs,
            waiters,
            ..
        } = &mut *state;

        // Waiters only exist while nothing unpromised is resident
        debug_assert!(waiters.is_empty() || items.len() == 1);

        let woken = waiters.wake_front(|ticket| {
            if let Some(item) = items.pop_front() {
                handoffs.insert(ticket, item);
            }
        });

        trace!(
            queue = %self.name,
            ticket = ?woken.ticket(),
            size = state.size(),
            waiting = state.waiters.len(),
            "enqueue"
        );
    }

    /// Remove the oldest item, blocking until one is handed to this caller
    ///
    /// A caller that finds no unpromised item registers a ticket behind every
    /// earlier waiter and sleeps until a producer binds an item to it.
    /// There is no timeout or cancellation.
    ///
    /// # Errors
    ///
    /// `QueueError::HandoffLost` if the ticket was signalled with nothing
    /// bound to it. This is a broken internal invariant, not a retryable
    /// condition.
    pub fn dequeue(&self) -> QueueResult<T> {
        let mut state = self.state.lock();

        if let Some(item) = state.take_front() {
            trace!(queue = %self.name, size = state.size(), "dequeue immediate");
            return Ok(item);
        }

        let ticket = Arc::new(WaitTicket::new(state.allocate_ticket()));
        state.waiters.register(Arc::clone(&ticket));
        trace!(
            queue = %self.name,
            ticket = ticket.id(),
            waiting = state.waiters.len(),
            "dequeue waiting"
        );

        ticket.wait(&mut state);
        debug_assert!(ticket.is_owned_by_current());

        match state.handoffs.remove(&ticket.id()) {
            Some(item) => {
                state.visited += 1;
                trace!(
                    queue = %self.name,
                    ticket = ticket.id(),
                    size = state.size(),
                    "dequeue woken"
                );
                Ok(item)
            }
            None => {
                error!(
                    queue = %self.name,
                    ticket = ticket.id(),
                    "woken ticket has no bound item"
                );
                Err(QueueError::HandoffLost { ticket: ticket.id() })
            }
        }
    }

    /// Remove the oldest unpromised item without blocking
    ///
    /// Never registers a ticket. Items already bound to a woken waiter are
    /// never taken. `None` is a normal outcome.
    pub fn try_dequeue(&self) -> Option<T> {
        let mut state = self.state.lock();
        let item = state.take_front();
        trace!(
            queue = %self.name,
            found = item.is_some(),
            size = state.size(),
            "try_dequeue"
        );
        item
    }
}
