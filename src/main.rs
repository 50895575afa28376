/*!
 * Handoff Queue - Demo Entry Point
 *
 * Runs producers and consumers against one shared queue and checks that:
 * - every item is delivered exactly once
 * - each consumer sees any one producer's items in production order
 * - the counters balance once the run is quiescent
 */

use anyhow::{anyhow, ensure, Context};
use handoff_queue::core::limits::{
    DEMO_DEFAULT_CONSUMERS, DEMO_DEFAULT_ITEMS, DEMO_DEFAULT_PRODUCERS, ENV_DEMO_CONSUMERS,
    ENV_DEMO_ITEMS, ENV_DEMO_PRODUCERS,
};
use handoff_queue::{init_tracing, BlockingQueue, QueueConfig, QueueResult, RunSpan};
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;
use tracing::{debug, error, info};

/// Unit of work flowing through the demo queue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Job {
    Work { producer: usize, seq: usize },
    Stop,
}

fn env_usize(key: &str, default: usize) -> anyhow::Result<usize> {
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{} must be a non-negative integer, got {:?}", key, raw)),
        Err(_) => Ok(default),
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let consumers = env_usize(ENV_DEMO_CONSUMERS, DEMO_DEFAULT_CONSUMERS)?;
    let producers = env_usize(ENV_DEMO_PRODUCERS, DEMO_DEFAULT_PRODUCERS)?;
    let items = env_usize(ENV_DEMO_ITEMS, DEMO_DEFAULT_ITEMS)?;
    ensure!(consumers > 0, "{} must be at least 1", ENV_DEMO_CONSUMERS);

    let config = QueueConfig::from_env()?;
    info!(
        queue = %config.name,
        consumers,
        producers,
        items_per_producer = items,
        "Handoff queue demo starting"
    );

    let run = RunSpan::new(&config.name, producers, consumers);
    let _entered = run.enter();
    let queue = Arc::new(BlockingQueue::with_config(config)?);

    let consumer_handles: Vec<_> = (0..consumers)
        .map(|id| {
            let queue = Arc::clone(&queue);
            let span = run.span();
            thread::Builder::new()
                .name(format!("consumer-{}", id))
                .spawn(move || -> QueueResult<Vec<(usize, usize)>> {
                    let _entered = span.enter();
                    let mut received = Vec::new();
                    loop {
                        match queue.dequeue()? {
                            Job::Work { producer, seq } => received.push((producer, seq)),
                            Job::Stop => break,
                        }
                    }
                    debug!(consumer = id, received = received.len(), "consumer finished");
                    Ok(received)
                })
                .context("failed to spawn consumer thread")
        })
        .collect::<anyhow::Result<_>>()?;

    let producer_handles: Vec<_> = (0..producers)
        .map(|producer| {
            let queue = Arc::clone(&queue);
            thread::Builder::new()
                .name(format!("producer-{}", producer))
                .spawn(move || {
                    for seq in 0..items {
                        queue.enqueue(Job::Work { producer, seq });
                    }
                })
                .context("failed to spawn producer thread")
        })
        .collect::<anyhow::Result<_>>()?;

    for handle in producer_handles {
        handle
            .join()
            .map_err(|_| anyhow!("producer thread panicked"))?;
    }

    // Every Work item precedes every Stop in queue order
    for _ in 0..consumers {
        queue.enqueue(Job::Stop);
    }

    let mut delivered = HashSet::new();
    for handle in consumer_handles {
        let received = match handle
            .join()
            .map_err(|_| anyhow!("consumer thread panicked"))?
        {
            Ok(received) => received,
            Err(err) => {
                if err.is_fatal() {
                    error!(error = %err, "consumer hit a broken handoff");
                }
                run.record_error(&err.to_string());
                return Err(err.into());
            }
        };

        let mut last_seen = vec![None; producers];
        for (producer, seq) in received {
            ensure!(
                last_seen[producer].map_or(true, |last| seq > last),
                "producer {} item {} arrived out of order",
                producer,
                seq
            );
            last_seen[producer] = Some(seq);
            ensure!(
                delivered.insert((producer, seq)),
                "producer {} item {} delivered twice",
                producer,
                seq
            );
        }
    }

    let expected = producers * items;
    if delivered.len() != expected {
        run.record_error("missing items");
    }
    ensure!(
        delivered.len() == expected,
        "delivered {} of {} items",
        delivered.len(),
        expected
    );
    run.record_items_processed(delivered.len());

    let stats = queue.stats();
    ensure!(stats.is_balanced(), "counters out of balance: {:?}", stats);
    run.record_result(true);
    println!("{}", serde_json::to_string_pretty(&stats)?);

    let queue = Arc::try_unwrap(queue).map_err(|_| anyhow!("queue still shared after run"))?;
    let report = queue.teardown();
    info!(
        visited = report.visited,
        discarded = report.discarded_items,
        "Handoff queue demo finished"
    );

    Ok(())
}
