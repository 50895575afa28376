/*!
 * Core Types
 * Common types used across the queue
 */

/// Identifier of a wait ticket, unique within one queue
pub type TicketId = u64;

/// Count type for queue counters
pub type Size = usize;
