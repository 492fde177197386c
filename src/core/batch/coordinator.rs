//! Fan-out/fan-in batch coordinator
//!
//! One producer task per item sends exactly one outcome into a shared
//! channel. A single collector task owns the accumulating list and counts
//! arrivals. The coordinator waits for the count to reach the number of
//! items, closes its side of the channel, and takes the collector's list
//! from its join handle.

use crate::config::BatchConfig;
use crate::core::repositories::CreateReposResult;
use crate::utils::error::ApiError;
use futures::future::join_all;
use std::future::Future;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::{Semaphore, mpsc, watch};
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Message stored for an item whose producer task panicked
pub const TASK_FAILED: &str = "repository creation task failed";

/// Value a producer emits, with a substitute for producers that never finish.
pub trait BatchOutcome: Send + 'static {
    /// Outcome recorded for item `index` when its task panicked
    fn task_failed(index: usize, message: &str) -> Self;
}

impl BatchOutcome for CreateReposResult {
    fn task_failed(_index: usize, message: &str) -> Self {
        CreateReposResult::failure(ApiError::internal_server_error(message))
    }
}

/// Counts collected items; the coordinator waits on it.
#[derive(Debug)]
struct CompletionCounter {
    tx: watch::Sender<usize>,
}

impl CompletionCounter {
    fn new() -> (Self, watch::Receiver<usize>) {
        let (tx, rx) = watch::channel(0);
        (Self { tx }, rx)
    }

    fn arrive(&self) {
        self.tx.send_modify(|done| *done += 1);
    }
}

/// Runs one operation per item concurrently and gathers every outcome.
#[derive(Debug, Clone, Default)]
pub struct BatchCoordinator {
    config: BatchConfig,
}

impl BatchCoordinator {
    pub fn new(config: BatchConfig) -> Self {
        Self { config }
    }

    /// Coordinator with no limit on in-flight operations
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn config(&self) -> &BatchConfig {
        &self.config
    }

    /// Run `operation` once per item and return all outcomes in completion order.
    ///
    /// Exactly `items.len()` outcomes are returned. A failing operation only
    /// affects its own outcome; a panicking one is recorded through
    /// [`BatchOutcome::task_failed`].
    ///
    /// Producers are spawned on the caller's runtime. Inside an actix worker
    /// that is a current-thread runtime, so the operations interleave on one
    /// thread at their await points instead of running in parallel.
    pub async fn run<T, R, F, Fut>(&self, items: Vec<T>, operation: F) -> Vec<R>
    where
        T: Send + 'static,
        R: BatchOutcome,
        F: Fn(T) -> Fut + Send + Sync + Clone + 'static,
        Fut: Future<Output = R> + Send + 'static,
    {
        let batch_id = Uuid::new_v4();
        let expected = items.len();
        let started = Instant::now();
        info!(
            %batch_id,
            items = expected,
            max_concurrency = ?self.config.max_concurrency,
            "Starting batch"
        );

        // Capacity covers every item, so no producer ever waits on the collector.
        let (tx, rx) = mpsc::channel::<R>(expected.max(1));
        let (counter, mut progress) = CompletionCounter::new();
        let collector = tokio::spawn(collect(rx, counter, expected));

        let limiter = self
            .config
            .max_concurrency
            .map(|permits| Arc::new(Semaphore::new(permits.min(Semaphore::MAX_PERMITS))));

        let mut producers = Vec::with_capacity(expected);
        for (index, item) in items.into_iter().enumerate() {
            let tx = tx.clone();
            let operation = operation.clone();
            let limiter = limiter.clone();

            producers.push(tokio::spawn(async move {
                let _permit = match limiter {
                    Some(semaphore) => semaphore.acquire_owned().await.ok(),
                    None => None,
                };
                let outcome = operation(item).await;
                if tx.send(outcome).await.is_err() {
                    warn!(index, "Collector gone before result was delivered");
                }
            }));
        }

        let joined = join_all(producers).await;
        for (index, outcome) in joined.into_iter().enumerate() {
            if let Err(e) = outcome {
                warn!(%batch_id, index, error = %e, "Producer task failed");
                if tx.send(R::task_failed(index, TASK_FAILED)).await.is_err() {
                    warn!(index, "Collector gone before failure was delivered");
                }
            }
        }

        if progress.wait_for(|done| *done >= expected).await.is_err() {
            warn!(%batch_id, "Collector stopped before every item was counted");
        }
        drop(tx);

        let results = match collector.await {
            Ok(results) => results,
            Err(e) => std::panic::resume_unwind(e.into_panic()),
        };

        info!(
            %batch_id,
            collected = results.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Batch finished"
        );
        results
    }
}

/// Drain the channel until every sender is gone.
async fn collect<R>(
    mut rx: mpsc::Receiver<R>,
    counter: CompletionCounter,
    expected: usize,
) -> Vec<R> {
    let mut results = Vec::with_capacity(expected);
    while let Some(outcome) = rx.recv().await {
        results.push(outcome);
        counter.arrive();
    }
    debug!(collected = results.len(), "Result channel closed");
    results
}
