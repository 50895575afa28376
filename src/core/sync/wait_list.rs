/*!
 * Wait List
 *
 * Arrival-ordered list of blocked consumers. The caller holds the queue's
 * control lock for every method here; the list itself does no locking.
 */

use super::ticket::WaitTicket;
use crate::core::types::TicketId;
use std::collections::VecDeque;
use std::sync::Arc;
use std::thread::ThreadId;

/// Result of a wake operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WakeResult {
    /// The named ticket was removed from the list and signalled
    Woken(TicketId),
    /// No waiters were waiting
    NoWaiters,
}

impl WakeResult {
    /// Check if a waiter was woken
    #[inline(always)]
    pub fn is_woken(&self) -> bool {
        matches!(self, WakeResult::Woken(_))
    }

    /// Ticket that was woken, if any
    #[inline(always)]
    pub fn ticket(&self) -> Option<TicketId> {
        match self {
            WakeResult::Woken(id) => Some(*id),
            WakeResult::NoWaiters => None,
        }
    }
}

/// FIFO of sleeping consumer tickets
#[derive(Debug, Default)]
pub struct WaitList {
    tickets: VecDeque<Arc<WaitTicket>>,
}

impl WaitList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a ticket behind every earlier waiter
    pub fn register(&mut self, ticket: Arc<WaitTicket>) {
        debug_assert!(
            !self.contains_owner(ticket.owner()),
            "thread registered twice in wait list"
        );
        self.tickets.push_back(ticket);
    }

    /// Remove the earliest ticket, hand its id to `bind`, then signal it
    ///
    /// `bind` runs before the signal so the woken owner always finds its
    /// item. Removal happens before the control lock is released, so no
    /// second producer can pick the same ticket.
    pub fn wake_front<F>(&mut self, bind: F) -> WakeResult
    where
        F: FnOnce(TicketId),
    {
        match self.tickets.pop_front() {
            Some(ticket) => {
                bind(ticket.id());
                ticket.notify();
                WakeResult::Woken(ticket.id())
            }
            None => WakeResult::NoWaiters,
        }
    }

    /// Whether `owner` currently has a ticket registered
    pub fn contains_owner(&self, owner: ThreadId) -> bool {
        self.tickets.iter().any(|t| t.owner() == owner)
    }

    /// Drop every outstanding ticket, returning how many there were
    pub fn clear(&mut self) -> usize {
        let count = self.tickets.len();
        self.tickets.clear();
        count
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    fn foreign_ticket(id: TicketId) -> Arc<WaitTicket> {
        thread::spawn(move || Arc::new(WaitTicket::new(id)))
            .join()
            .unwrap()
    }

    #[test]
    fn test_wake_in_arrival_order() {
        let mut list = WaitList::new();
        list.register(foreign_ticket(10));
        list.register(foreign_ticket(11));
        list.register(foreign_ticket(12));
        assert_eq!(list.len(), 3);

        let mut bound = Vec::new();
        assert_eq!(list.wake_front(|id| bound.push(id)), WakeResult::Woken(10));
        assert_eq!(list.wake_front(|id| bound.push(id)), WakeResult::Woken(11));
        assert_eq!(bound, vec![10, 11]);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_wake_empty() {
        let mut list = WaitList::new();
        let mut called = false;
        let result = list.wake_front(|_| called = true);
        assert_eq!(result, WakeResult::NoWaiters);
        assert!(!result.is_woken());
        assert_eq!(result.ticket(), None);
        assert!(!called);
    }

    #[test]
    fn test_woken_ticket_is_notified() {
        let mut list = WaitList::new();
        let ticket = foreign_ticket(1);
        list.register(ticket.clone());

        assert!(list.wake_front(|_| {}).is_woken());
        assert!(ticket.is_notified());
        assert!(list.is_empty());
    }

    #[test]
    fn test_contains_owner_and_clear() {
        let mut list = WaitList::new();
        let ticket = Arc::new(WaitTicket::new(1));
        let owner = ticket.owner();
        list.register(ticket);
        list.register(foreign_ticket(2));

        assert!(list.contains_owner(owner));
        assert_eq!(list.clear(), 2);
        assert!(!list.contains_owner(owner));
        assert!(list.is_empty());
    }
}
