/*!
 * Queue Configuration Tests
 * Environment loading and validation
 */

use handoff_queue::core::limits::{ENV_QUEUE_CAPACITY, ENV_QUEUE_NAME, MAX_INITIAL_CAPACITY};
use handoff_queue::{BlockingQueue, QueueConfig, QueueError};
use pretty_assertions::assert_eq;
use serial_test::serial;

fn clear_env() {
    std::env::remove_var(ENV_QUEUE_NAME);
    std::env::remove_var(ENV_QUEUE_CAPACITY);
}

#[test]
#[serial]
fn test_from_env_defaults() {
    clear_env();
    let config = QueueConfig::from_env().unwrap();
    assert_eq!(config, QueueConfig::default());
}

#[test]
#[serial]
fn test_from_env_overrides() {
    clear_env();
    std::env::set_var(ENV_QUEUE_NAME, "ingest");
    std::env::set_var(ENV_QUEUE_CAPACITY, " 256 ");

    let config = QueueConfig::from_env().unwrap();
    assert_eq!(config.name, "ingest");
    assert_eq!(config.initial_capacity, 256);

    let queue = BlockingQueue::<u8>::with_config(config).unwrap();
    assert_eq!(queue.name(), "ingest");
    clear_env();
}

#[test]
#[serial]
fn test_from_env_rejects_garbage_capacity() {
    clear_env();
    std::env::set_var(ENV_QUEUE_CAPACITY, "lots");

    let err = QueueConfig::from_env().unwrap_err();
    assert!(matches!(err, QueueError::InvalidConfig(ref msg) if msg.contains(ENV_QUEUE_CAPACITY)));
    clear_env();
}

#[test]
#[serial]
fn test_from_env_rejects_oversized_capacity() {
    clear_env();
    std::env::set_var(ENV_QUEUE_CAPACITY, (MAX_INITIAL_CAPACITY + 1).to_string());

    assert!(matches!(
        QueueConfig::from_env(),
        Err(QueueError::InvalidConfig(_))
    ));
    clear_env();
}

#[test]
#[serial]
fn test_from_env_rejects_blank_name() {
    clear_env();
    std::env::set_var(ENV_QUEUE_NAME, "");

    assert!(QueueConfig::from_env().is_err());
    clear_env();
}

#[test]
fn test_config_json_round_trip() {
    let config = QueueConfig::named("jobs").with_capacity(8);
    let json = serde_json::to_string(&config).unwrap();
    let back: QueueConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);
}
