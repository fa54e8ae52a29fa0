//! HTTP surface of the service.
//!
//! The routes are thin: each handler parses its input, makes exactly one
//! repository or job-runner call, and maps the outcome to a status code.

/// Error responses
pub mod error;
/// Route handlers
pub mod handlers;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::jobs::BackgroundJobRunner;
use crate::repository::TaskRepository;

pub use error::{ApiError, ApiErrorResponse};
pub use handlers::{create_task, delete_task, get_task, list_tasks, process_tasks, update_task};

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    /// Task records
    pub repository: Arc<TaskRepository>,
    /// Fire-and-forget job launcher
    pub jobs: Arc<BackgroundJobRunner>,
}

impl AppState {
    /// Bundle an existing repository and job runner.
    pub fn new(repository: TaskRepository, jobs: BackgroundJobRunner) -> Self {
        Self {
            repository: Arc::new(repository),
            jobs: Arc::new(jobs),
        }
    }

    /// Build the state described by the configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            TaskRepository::from_config(config),
            BackgroundJobRunner::new(config.job_delay_secs),
        )
    }
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/tasks", get(list_tasks).post(create_task))
        .route("/tasks/process", get(process_tasks))
        .route(
            "/tasks/{id}",
            get(get_task).put(update_task).delete(delete_task),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
