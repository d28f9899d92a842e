//! # Coursedesk API Server
//!
//! HTTP server for the back-office UI.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          API Server                                     │
//! │                                                                         │
//! │  Browser ───► HTTP (3000) ───► Handlers ───► ./data/*.json              │
//! │                                    │                                    │
//! │                                    ▼                                    │
//! │                              SMTP (optional)                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use coursedesk_api::config::ApiConfig;
use coursedesk_api::services::mail::{LogMailer, Mailer, SmtpMailer};
use coursedesk_api::{build_router, AppState};
use coursedesk_store::{Store, StoreConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,coursedesk=debug")),
        )
        .with_target(true)
        .init();

    info!("Starting Coursedesk API server...");

    let config = ApiConfig::load()?;
    info!(
        port = config.port,
        data_dir = %config.data_dir.display(),
        smtp = config.smtp.is_some(),
        "Configuration loaded"
    );

    let store = Store::open(StoreConfig::new(&config.data_dir))
        .await
        .with_context(|| format!("opening data directory {}", config.data_dir.display()))?;

    let mailer: Arc<dyn Mailer> = match &config.smtp {
        Some(smtp) => {
            info!(host = %smtp.host, port = smtp.port, "Using SMTP mailer");
            Arc::new(SmtpMailer::new(smtp)?)
        }
        None => {
            warn!("SMTP not configured, emails will only be logged");
            Arc::new(LogMailer::new())
        }
    };

    let app = build_router(AppState::new(store, mailer, config.company_name.as_str()));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {}", addr))?;
    info!(%addr, "Server is running");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown...");
}
