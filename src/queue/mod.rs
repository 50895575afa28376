/*!
 * Queue Module
 * Fair blocking FIFO with producer-side handoff to waiting consumers
 */

mod blocking;
pub mod config;
mod lifecycle;
mod operations;
pub mod types;

// Re-export public API
pub use blocking::BlockingQueue;
pub use config::QueueConfig;
pub use types::{QueueStats, TeardownReport};
