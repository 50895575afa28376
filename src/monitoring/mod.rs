/*!
 * Monitoring
 * Structured tracing setup and run spans
 */

mod tracer;

pub use tracer::{generate_trace_id, init_tracing, RunSpan};
