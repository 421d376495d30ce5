//! Graceful Shutdown
//!
//! One controller is shared by the HTTP server and the background tasks
//! (department polling, session GC). Triggering it stops all of them.

use std::sync::Arc;
use tokio::sync::watch;

/// Shutdown coordinator.
#[derive(Clone)]
pub struct ShutdownController {
    tx: Arc<watch::Sender<bool>>,
}

impl ShutdownController {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(false);
        Self { tx: Arc::new(tx) }
    }

    /// Trigger shutdown. Later calls are no-ops.
    pub fn shutdown(&self) {
        let changed = self.tx.send_if_modified(|stopped| {
            if *stopped {
                false
            } else {
                *stopped = true;
                true
            }
        });
        if changed {
            tracing::info!("initiating graceful shutdown");
        }
    }

    pub fn is_shutdown(&self) -> bool {
        *self.tx.borrow()
    }

    /// Completes once shutdown has been triggered.
    pub async fn cancelled(&self) {
        let mut rx = self.tx.subscribe();
        // The sender lives as long as self, so wait_for only fails if it is dropped
        let _ = rx.wait_for(|stopped| *stopped).await;
    }
}

impl Default for ShutdownController {
    fn default() -> Self {
        Self::new()
    }
}

/// Wait for Ctrl+C or SIGTERM, then trigger `controller`.
///
/// Also returns early if the controller is triggered some other way.
#[cfg_attr(coverage_nightly, coverage(off))]
pub async fn shutdown_signal(controller: ShutdownController) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("received Ctrl+C, shutting down");
        }
        _ = terminate => {
            tracing::info!("received SIGTERM, shutting down");
        }
        _ = controller.cancelled() => {}
    }

    controller.shutdown();
}
