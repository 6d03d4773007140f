//! Fan-out of independent tasks with failure isolation
//!
//! Both pipeline stages run some unit of work once per discovered item (one
//! scraped link, one corpus file...). Tasks share no mutable state, may finish
//! in any order, and a failing task never cancels its siblings. Dispatchers
//! always wait for every task before returning, so the caller can treat their
//! return as a barrier before aggregating results.

use crate::{progress::ProgressTracker, Result};
use anyhow::Context;
use rayon::prelude::*;
use std::{future::Future, num::NonZeroUsize, sync::Arc};
use tokio::{sync::Semaphore, task::JoinSet};

/// Results and failures of a batch of independent tasks
#[derive(Debug)]
pub struct BatchOutcome<T> {
    /// Output of each task that succeeded, in completion order
    successes: Vec<T>,

    /// Error of each task that failed, in completion order
    failures: Vec<anyhow::Error>,
}
//
impl<T> BatchOutcome<T> {
    /// Record the result of one task
    pub fn record(&mut self, result: Result<T>) {
        match result {
            Ok(output) => self.successes.push(output),
            Err(e) => self.failures.push(e),
        }
    }

    /// Errors of the tasks that failed
    pub fn failures(&self) -> &[anyhow::Error] {
        &self.failures[..]
    }

    /// Report every failure in the logs, then keep only successful outputs
    pub fn log_failures_and_keep_successes(self, what: &str) -> Vec<T> {
        for failure in &self.failures {
            log::error!("Failed {what}: {failure:#}");
        }
        self.successes
    }
}
//
impl<T> Default for BatchOutcome<T> {
    fn default() -> Self {
        Self {
            successes: Vec::new(),
            failures: Vec::new(),
        }
    }
}
//
impl<T> FromIterator<Result<T>> for BatchOutcome<T> {
    fn from_iter<I: IntoIterator<Item = Result<T>>>(iter: I) -> Self {
        let mut outcome = Self::default();
        for result in iter {
            outcome.record(result);
        }
        outcome
    }
}

/// Run an asynchronous task once per item, with at most `jobs` tasks in flight
///
/// Meant for I/O bound work like network requests. Panicking tasks are
/// recorded as failures like any other.
pub async fn run_async<Item, Task, Fut, T>(
    items: impl IntoIterator<Item = Item>,
    jobs: NonZeroUsize,
    progress: &ProgressTracker,
    task: Task,
) -> BatchOutcome<T>
where
    Task: Fn(Item) -> Fut,
    Fut: Future<Output = Result<T>> + Send + 'static,
    T: Send + 'static,
{
    // Start all tasks, they will wait for a permit before doing any work
    let permits = Arc::new(Semaphore::new(jobs.get().min(Semaphore::MAX_PERMITS)));
    let mut tasks = JoinSet::new();
    for item in items {
        let permits = permits.clone();
        let work = task(item);
        tasks.spawn(async move {
            let _permit = permits
                .acquire_owned()
                .await
                .context("waiting for a free task slot")?;
            work.await
        });
    }

    // Collect results as tasks finish
    let mut outcome = BatchOutcome::default();
    while let Some(result) = tasks.join_next().await {
        outcome.record(result.context("joining an independent task").and_then(|r| r));
        progress.make_progress(1);
    }
    outcome
}

/// Run a blocking task once per item on a dedicated pool of `jobs` threads
///
/// Meant for CPU or local disk bound work. Fails only if the thread pool cannot
/// be set up, individual task failures are recorded in the outcome.
pub fn run_parallel<Item, Task, T>(
    items: Vec<Item>,
    jobs: NonZeroUsize,
    progress: &ProgressTracker,
    task: Task,
) -> Result<BatchOutcome<T>>
where
    Item: Send,
    Task: Fn(Item) -> Result<T> + Sync,
    T: Send,
{
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(jobs.get())
        .build()
        .context("setting up the worker thread pool")?;
    let results = pool.install(|| {
        items
            .into_par_iter()
            .map(|item| {
                let result = task(item);
                progress.make_progress(1);
                result
            })
            .collect::<Vec<_>>()
    });
    Ok(results.into_iter().collect())
}
