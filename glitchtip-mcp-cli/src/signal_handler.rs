use tokio::signal;
use tracing::{info, warn};

async fn ctrl_c() {
    if let Err(e) = signal::ctrl_c().await {
        warn!("Failed to install Ctrl+C handler: {}", e);
        std::future::pending::<()>().await;
    }
}

#[cfg(unix)]
async fn terminate() {
    match signal::unix::signal(signal::unix::SignalKind::terminate()) {
        Ok(mut stream) => {
            stream.recv().await;
        }
        Err(e) => {
            warn!("Failed to install SIGTERM handler: {}", e);
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(not(unix))]
async fn terminate() {
    std::future::pending::<()>().await;
}

/// Resolves once Ctrl+C or SIGTERM is received
pub async fn wait_for_shutdown_signal() {
    tokio::select! {
        _ = ctrl_c() => {
            info!("Received Ctrl+C signal, shutting down gracefully...");
        },
        _ = terminate() => {
            info!("Received terminate signal, shutting down gracefully...");
        },
    }
}
