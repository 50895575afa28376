/*!
 * Synchronization Primitives
 *
 * Building blocks for the blocking queue's handoff protocol:
 * - `WaitTicket`: one blocked consumer with a private condvar
 * - `WaitList`: arrival-ordered list of tickets, woken strictly front first
 *
 * # Architecture
 *
 * Neither type locks on its own. Both are driven with the queue's single
 * control mutex held, so choosing a waiter, removing its ticket and signalling
 * it happen in one critical section.
 */

mod ticket;
mod wait_list;

pub use ticket::WaitTicket;
pub use wait_list::{WaitList, WakeResult};
