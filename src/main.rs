//! Task List RS binary entry point

use task_list_rs::api::{self, AppState};
use task_list_rs::{config::Config, TaskListError};
use tokio::net::TcpListener;
use tokio::signal;
use tokio::sync::oneshot;
use tokio::time::{timeout, Duration};
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting Task List RS");

    let config = Config::load()?;
    config.validate()?;

    info!(
        "Persistence: {:?} (snapshot: {}), job delay: {}s",
        config.persistence, config.snapshot_path, config.job_delay_secs
    );

    let state = AppState::from_config(&config);
    let app = api::router(state);

    let address = config.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .map_err(|e| TaskListError::ServerError(format!("Failed to bind {address}: {e}")))?;
    info!("Server running on {}", address);

    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
    let server = axum::serve(listener, app).with_graceful_shutdown(async move {
        let _ = shutdown_rx.await;
    });
    let mut handle = tokio::spawn(async move { server.await });

    tokio::select! {
        result = &mut handle => {
            result?.map_err(|e| TaskListError::ServerError(e.to_string()))?;
        }
        () = shutdown_signal() => {
            info!("Initiating graceful shutdown...");
            let _ = shutdown_tx.send(());

            let grace = Duration::from_secs(config.shutdown_timeout_secs);
            match timeout(grace, &mut handle).await {
                Ok(result) => {
                    result?.map_err(|e| TaskListError::ServerError(e.to_string()))?;
                    info!("Server shutdown complete");
                }
                Err(_) => {
                    warn!("Shutdown timeout exceeded, dropping open connections");
                    handle.abort();
                }
            }
        }
    }

    Ok(())
}

/// Completes on Ctrl+C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
