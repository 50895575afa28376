/*!
 * Queue Configuration
 *
 * Runtime configuration for a blocking queue, loadable from the environment
 */

use crate::core::errors::{QueueError, QueueResult};
use crate::core::limits::{
    DEFAULT_INITIAL_CAPACITY, DEFAULT_QUEUE_NAME, ENV_QUEUE_CAPACITY, ENV_QUEUE_NAME,
    MAX_INITIAL_CAPACITY,
};
use serde::{Deserialize, Serialize};

/// Blocking queue configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueueConfig {
    /// Label used in tracing output
    pub name: String,
    /// Slots pre-allocated in the item sequence (not a bound)
    pub initial_capacity: usize,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_QUEUE_NAME.to_string(),
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
        }
    }
}

impl QueueConfig {
    /// Default configuration with a custom name
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    /// Load from environment variables, falling back to defaults
    ///
    /// Environment variables:
    /// - HANDOFF_QUEUE_NAME: queue label (default: "default")
    /// - HANDOFF_QUEUE_CAPACITY: capacity hint (default: 64)
    pub fn from_env() -> QueueResult<Self> {
        let mut config = Self::default();

        if let Ok(name) = std::env::var(ENV_QUEUE_NAME) {
            config.name = name;
        }

        if let Ok(raw) = std::env::var(ENV_QUEUE_CAPACITY) {
            config.initial_capacity = raw.trim().parse().map_err(|e| {
                QueueError::InvalidConfig(format!("{}={:?}: {}", ENV_QUEUE_CAPACITY, raw, e))
            })?;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> QueueResult<()> {
        if self.name.trim().is_empty() {
            return Err(QueueError::InvalidConfig("queue name must not be empty".into()));
        }

        if self.initial_capacity > MAX_INITIAL_CAPACITY {
            return Err(QueueError::InvalidConfig(format!(
                "initial capacity {} exceeds limit {}",
                self.initial_capacity, MAX_INITIAL_CAPACITY
            )));
        }

        Ok(())
    }
}
