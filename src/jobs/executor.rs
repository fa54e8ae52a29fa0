//! Executor

use crate::jobs::Job;
use async_trait::async_trait;
use std::time::Duration;
use tracing::info;

/// Trait for running the body of a background job
#[async_trait]
pub trait JobExecutor: Send + Sync {
    /// Run the job to completion
    async fn execute(&self, job: &Job) -> crate::Result<()>;
}

/// Stand-in for real work: waits a fixed delay, then reports completion
pub struct SimulatedWork {
    delay: Duration,
}

impl SimulatedWork {
    /// Create an executor whose jobs take `delay_secs` seconds
    pub fn new(delay_secs: u64) -> Self {
        Self::with_delay(Duration::from_secs(delay_secs))
    }

    /// Create an executor with an arbitrary delay
    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }

    /// Duration every job takes
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for SimulatedWork {
    fn default() -> Self {
        Self::new(5)
    }
}

#[async_trait]
impl JobExecutor for SimulatedWork {
    async fn execute(&self, job: &Job) -> crate::Result<()> {
        info!(
            "Processing job {} ({})... This will take {:?}.",
            job.sequence, job.name, self.delay
        );
        tokio::time::sleep(self.delay).await;
        info!("Job {} ({}) completed", job.sequence, job.name);
        Ok(())
    }
}
