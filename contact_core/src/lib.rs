//! Core library for the contact form service: validation, operator
//! notification and the HTTP routes in front of them.

pub mod config;
pub mod email;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod validation;

pub use crate::config::{AppConfig, EmailConfig, ServerConfig};
pub use email::{build_notifier, Delivery, DisabledNotifier, NotificationError, Notifier, ResendNotifier};
pub use error::{AppError, Result};
pub use handlers::routes::create_routes;
pub use models::{ContactResponse, ContactSubmission};

use axum::Router;
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tower_http::timeout::TimeoutLayer;
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub app_name: String,
    pub version: String,
    pub notifier: Arc<dyn Notifier>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(DisabledNotifier))
    }
}

impl AppState {
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self {
            app_name: "Contact Service".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            notifier,
        }
    }

    /// Picks the Resend notifier when a key is configured, the disabled one otherwise.
    pub fn from_config(config: &EmailConfig) -> Result<Self> {
        Ok(Self::new(build_notifier(config)?))
    }

    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }
}

pub fn create_app(state: AppState) -> Router {
    create_app_with_config(state, &AppConfig::default())
}

pub fn create_app_with_config(state: AppState, config: &AppConfig) -> Router {
    let router = Router::new()
        .merge(create_routes())
        .layer(TimeoutLayer::new(config.request_timeout()))
        .layer(middleware::cors::allow_any_origin_layer());

    middleware::logging::with_request_logging(router).with_state(state)
}

pub async fn run_server(app: Router, addr: SocketAddr) -> Result<()> {
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown");
        },
        _ = terminate => {
            info!("Received SIGTERM, starting graceful shutdown");
        },
    }
}
