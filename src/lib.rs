/*!
 * Handoff Queue Library
 * Fair blocking FIFO queue for handing items from producer to consumer threads
 */

pub mod core;
pub mod monitoring;
pub mod queue;

// Re-exports
pub use crate::core::errors::{QueueError, QueueResult};
pub use crate::core::sync::{WaitList, WaitTicket, WakeResult};
pub use monitoring::{init_tracing, RunSpan};
pub use queue::{BlockingQueue, QueueConfig, QueueStats, TeardownReport};
