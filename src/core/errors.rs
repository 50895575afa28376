/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use super::types::TicketId;
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Queue operation result
///
/// # Must Use
/// A failed blocking dequeue means the handoff invariant is broken and must not be ignored
pub type QueueResult<T> = Result<T, QueueError>;

/// Queue errors with serialization support
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum QueueError {
    /// A woken consumer found nothing bound to its ticket
    #[error("Handoff lost: ticket {ticket} was notified but no item is bound to it")]
    #[diagnostic(
        code(queue::handoff_lost),
        help("The producer-to-waiter binding is broken. This is an internal bug; please report it.")
    )]
    HandoffLost { ticket: TicketId },

    #[error("Invalid queue configuration: {0}")]
    #[diagnostic(
        code(queue::invalid_config),
        help("Check HANDOFF_QUEUE_NAME and HANDOFF_QUEUE_CAPACITY, or the QueueConfig passed in.")
    )]
    InvalidConfig(String),
}

impl QueueError {
    /// Whether the error signals a broken internal invariant rather than bad input
    pub fn is_fatal(&self) -> bool {
        matches!(self, QueueError::HandoffLost { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = QueueError::HandoffLost { ticket: 7 };
        assert_eq!(
            err.to_string(),
            "Handoff lost: ticket 7 was notified but no item is bound to it"
        );
        assert!(err.is_fatal());

        let err = QueueError::InvalidConfig("empty name".into());
        assert!(!err.is_fatal());
        assert!(err.to_string().contains("empty name"));
    }

    #[test]
    fn test_error_serialization() {
        let err = QueueError::HandoffLost { ticket: 3 };
        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("handoff_lost"));

        let back: QueueError = serde_json::from_str(&json).unwrap();
        assert_eq!(back, err);
    }
}
