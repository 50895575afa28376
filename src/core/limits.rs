/*!
 * Limits and Constants
 *
 * Centralized location for queue defaults, bounds and environment variable names.
 */

// =============================================================================
// QUEUE SIZING
// =============================================================================

/// Default pre-allocated slots in the item sequence
/// [PERF] Avoids the first few reallocations under bursty producers
pub const DEFAULT_INITIAL_CAPACITY: usize = 64;

/// Upper bound for the capacity hint (1M slots)
/// The queue itself is unbounded; this only caps the up-front allocation
pub const MAX_INITIAL_CAPACITY: usize = 1024 * 1024;

/// Name used when no queue name is configured
pub const DEFAULT_QUEUE_NAME: &str = "default";

/// Initial slots in the handoff table
pub const HANDOFF_TABLE_CAPACITY: usize = 8;

// =============================================================================
// ENVIRONMENT
// =============================================================================

/// Queue name override
pub const ENV_QUEUE_NAME: &str = "HANDOFF_QUEUE_NAME";

/// Capacity hint override
pub const ENV_QUEUE_CAPACITY: &str = "HANDOFF_QUEUE_CAPACITY";

/// Switch tracing output to JSON ("1" or "true")
pub const ENV_TRACE_JSON: &str = "HANDOFF_TRACE_JSON";

/// Demo binary: number of consumer threads
pub const ENV_DEMO_CONSUMERS: &str = "HANDOFF_DEMO_CONSUMERS";

/// Demo binary: number of producer threads
pub const ENV_DEMO_PRODUCERS: &str = "HANDOFF_DEMO_PRODUCERS";

/// Demo binary: items enqueued by each producer
pub const ENV_DEMO_ITEMS: &str = "HANDOFF_DEMO_ITEMS";

/// Demo defaults
pub const DEMO_DEFAULT_CONSUMERS: usize = 4;
pub const DEMO_DEFAULT_PRODUCERS: usize = 4;
pub const DEMO_DEFAULT_ITEMS: usize = 1000;
