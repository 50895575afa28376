/*!
 * Structured Tracing
 * Subscriber setup and run spans using the tracing crate
 *
 * Features:
 * - Trace ID generation for correlating one producer/consumer run
 * - JSON-formatted logs for structured parsing
 * - Thread ids and names on every event (consumers are identified by thread)
 */

use crate::core::limits::ENV_TRACE_JSON;
use std::time::Instant;
use tracing::{debug, info, span, warn, Level};
use tracing_subscriber::{
    fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};
use uuid::Uuid;

/// Initialize structured tracing
///
/// Environment variables:
/// - RUST_LOG: Set log level (default: info)
/// - HANDOFF_TRACE_JSON: Enable JSON output (default: false)
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let use_json = std::env::var(ENV_TRACE_JSON)
        .map(|v| v == "1" || v == "true")
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(env_filter);

    if use_json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_thread_names(true)
                    .with_current_span(true)
                    .with_span_list(true)
                    .with_span_events(FmtSpan::CLOSE),
            )
            .init();
        info!("Structured tracing initialized with JSON output");
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_thread_names(true)
                    .with_span_events(FmtSpan::CLOSE)
                    .compact(),
            )
            .init();
        info!("Structured tracing initialized");
    }
}

/// Generate a unique trace ID for run correlation
pub fn generate_trace_id() -> String {
    Uuid::new_v4().to_string()
}

/// Span covering one producer/consumer run against a queue
pub struct RunSpan {
    span: tracing::Span,
    start: Instant,
    trace_id: String,
}

impl RunSpan {
    pub fn new(queue: &str, producers: usize, consumers: usize) -> Self {
        let trace_id = generate_trace_id();

        let span = span!(
            Level::INFO,
            "queue_run",
            trace_id = %trace_id,
            queue = queue,
            producers = producers,
            consumers = consumers,
            duration_ms = tracing::field::Empty,
            items_processed = tracing::field::Empty,
            result = tracing::field::Empty,
            error = tracing::field::Empty,
        );

        {
            let _entered = span.enter();
            debug!(trace_id = %trace_id, "run started");
        }

        Self {
            span,
            start: Instant::now(),
            trace_id,
        }
    }

    pub fn trace_id(&self) -> &str {
        &self.trace_id
    }

    /// Enter the span on the current thread
    pub fn enter(&self) -> tracing::span::Entered<'_> {
        self.span.enter()
    }

    /// Clone of the inner span, for entering from worker threads
    pub fn span(&self) -> tracing::Span {
        self.span.clone()
    }

    pub fn record_items_processed(&self, count: usize) {
        self.span.record("items_processed", count);
    }

    pub fn record_result(&self, success: bool) {
        self.span
            .record("result", if success { "success" } else { "error" });
    }

    pub fn record_error(&self, error: &str) {
        self.span.record("error", error);
        self.span.record("result", "error");
    }
}

impl Drop for RunSpan {
    fn drop(&mut self) {
        let duration = self.start.elapsed();
        let _entered = self.span.enter();
        self.span.record("duration_ms", duration.as_millis() as u64);

        if duration.as_secs() >= 10 {
            warn!(
                trace_id = %self.trace_id,
                duration_ms = duration.as_millis() as u64,
                slow = true,
                "slow run detected"
            );
        } else {
            debug!(
                trace_id = %self.trace_id,
                duration_ms = duration.as_millis() as u64,
                "run completed"
            );
        }
    }
}
