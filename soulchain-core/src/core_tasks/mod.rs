/*
    core_tasks - Deferred backend calls with in-order completion

    Simulated latencies and real backend calls share one interface: a
    future that resolves to a store mutation. Tasks run concurrently,
    but their mutations are applied strictly in submission order -- a
    fast task submitted after a slow one waits for it.

    The driver owns the store reference; completion handlers never
    touch the store directly.
*/

use crate::config::TaskConfig;
use crate::core_store::store::{SoulStore, StoreResult};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::warn;

/// A store mutation produced by a completed task
pub type Apply = Box<dyn FnOnce(&SoulStore) -> StoreResult<()> + Send + 'static>;

/// Errors from the deferred-task queue
#[derive(Debug, Error)]
pub enum TaskError {
    /// The runner has been shut down
    #[error("Task queue closed")]
    Closed,
}

/// Runs deferred tasks and applies their mutations in submission order
pub struct DeferredRunner {
    tx: mpsc::UnboundedSender<oneshot::Receiver<Apply>>,
    driver: JoinHandle<()>,
    simulated_latency: Duration,
}

impl DeferredRunner {
    /// Start the driver loop against the given store
    pub fn spawn(store: Arc<SoulStore>) -> Self {
        Self::spawn_with_config(store, &TaskConfig::default())
    }

    /// Start the driver loop with configured task settings
    pub fn spawn_with_config(store: Arc<SoulStore>, config: &TaskConfig) -> Self {
        let (tx, mut rx) = mpsc::unbounded_channel::<oneshot::Receiver<Apply>>();

        let driver = tokio::spawn(async move {
            // Receivers arrive in submission order; awaiting them one at
            // a time serializes the mutations regardless of task latency.
            while let Some(done) = rx.recv().await {
                match done.await {
                    Ok(apply) => {
                        if let Err(err) = apply(&store) {
                            warn!(error = %err, "deferred mutation failed");
                        }
                    }
                    Err(_) => warn!("deferred task dropped before completing"),
                }
            }
        });

        DeferredRunner {
            tx,
            driver,
            simulated_latency: config.simulated_latency,
        }
    }

    /// Submit a task. The future runs immediately on the runtime; its
    /// resulting mutation is applied after all earlier submissions.
    pub fn submit<F>(&self, task: F) -> Result<(), TaskError>
    where
        F: Future<Output = Apply> + Send + 'static,
    {
        let (done_tx, done_rx) = oneshot::channel();
        self.tx.send(done_rx).map_err(|_| TaskError::Closed)?;

        tokio::spawn(async move {
            let _ = done_tx.send(task.await);
        });
        Ok(())
    }

    /// Submit a simulated backend call: sleep for the given latency,
    /// then apply the mutation.
    pub fn simulate<F>(&self, latency: Duration, apply: F) -> Result<(), TaskError>
    where
        F: FnOnce(&SoulStore) -> StoreResult<()> + Send + 'static,
    {
        self.submit(async move {
            tokio::time::sleep(latency).await;
            Box::new(apply) as Apply
        })
    }

    /// Submit a simulated backend call using the configured latency
    pub fn simulate_configured<F>(&self, apply: F) -> Result<(), TaskError>
    where
        F: FnOnce(&SoulStore) -> StoreResult<()> + Send + 'static,
    {
        self.simulate(self.simulated_latency, apply)
    }

    /// Stop accepting tasks and wait for queued mutations to drain
    pub async fn shutdown(self) {
        drop(self.tx);
        let _ = self.driver.await;
    }
}
