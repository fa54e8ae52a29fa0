/// Job executor implementations
pub mod executor;

use crate::jobs::executor::{JobExecutor, SimulatedWork};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{debug, error};

/// A unit of background work
#[derive(Debug, Clone)]
pub struct Job {
    /// Process-local sequence number, only used for logging
    pub sequence: u64,

    /// Label describing what the job does
    pub name: String,
}

/// Launches jobs on their own tokio task and forgets about them
///
/// Nothing is handed back to the caller: no join handle, no status, no
/// error. Jobs still running when the runtime shuts down are dropped.
pub struct BackgroundJobRunner {
    executor: Arc<dyn JobExecutor>,
    sequence: AtomicU64,
}

impl BackgroundJobRunner {
    /// Create a runner whose jobs sleep for `delay_secs` seconds
    pub fn new(delay_secs: u64) -> Self {
        Self::with_executor(Arc::new(SimulatedWork::new(delay_secs)))
    }

    /// Create a runner with a custom executor
    pub fn with_executor(executor: Arc<dyn JobExecutor>) -> Self {
        Self {
            executor,
            sequence: AtomicU64::new(1),
        }
    }

    /// Start a job without waiting for it
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(&self, name: impl Into<String>) {
        let job = Job {
            sequence: self.sequence.fetch_add(1, Ordering::Relaxed),
            name: name.into(),
        };
        let executor = Arc::clone(&self.executor);

        debug!("Job {} ({}) accepted", job.sequence, job.name);
        tokio::spawn(async move {
            if let Err(e) = executor.execute(&job).await {
                error!("Job {} ({}) failed: {}", job.sequence, job.name, e);
            }
        });
    }
}

impl Default for BackgroundJobRunner {
    fn default() -> Self {
        Self::with_executor(Arc::new(SimulatedWork::default()))
    }
}
