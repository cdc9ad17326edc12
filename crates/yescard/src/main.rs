mod app;
mod config;
mod error;
mod extractors;
mod handlers;
mod state;
mod templates;

use anyhow::Result;
use clap::Parser;
use listenfd::ListenFd;
use tokio::{net::TcpListener, signal};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use url::Url;
use yescard_core::DecodePolicy;

use crate::{app::create_app, config::Config, state::AppState};

/// yescard - Mock OIDC provider that accepts any login
#[derive(Parser, Debug)]
#[command(name = "yescard")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Host address to bind the server to
    #[arg(long, short = 'H', default_value = "0.0.0.0", env = "HOST")]
    host: String,

    /// Port to listen on
    #[arg(long, short, default_value = "5000", env = "PORT")]
    port: u16,

    /// Issuer base URL advertised in the discovery document
    #[arg(long, default_value = config::DEFAULT_ISSUER, env = "YESCARD_ISSUER")]
    issuer: Url,

    /// Identity used when none is submitted or a code/token is unreadable
    #[arg(long, default_value = config::DEFAULT_IDENTITY, env = "YESCARD_DEFAULT_IDENTITY")]
    default_identity: String,

    /// Substring every accepted redirect_uri must contain
    #[arg(long, default_value = config::DEFAULT_REDIRECT_ALLOW, env = "YESCARD_REDIRECT_ALLOW")]
    redirect_allow: String,

    /// Reject unreadable codes and tokens instead of using the default identity
    #[arg(long, env = "YESCARD_STRICT")]
    strict: bool,
}

impl Cli {
    fn config(&self) -> Config {
        let policy = if self.strict {
            DecodePolicy::Strict
        } else {
            DecodePolicy::Lenient
        };

        Config::new(
            &self.issuer,
            &self.default_identity,
            &self.redirect_allow,
            policy,
        )
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "yescard=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = cli.config();
    tracing::info!(
        issuer = %config.issuer,
        default_identity = %config.default_identity,
        redirect_allow = %config.redirect_allow,
        policy = ?config.policy,
        "Starting yescard"
    );

    let state = AppState::new(config)?;
    let app = create_app(state);

    // Auto-reload support via listenfd
    let mut listenfd = ListenFd::from_env();
    let listener = match listenfd.take_tcp_listener(0)? {
        // If we are given a tcp listener on listen fd 0, use that one
        Some(listener) => {
            listener.set_nonblocking(true)?;
            TcpListener::from_std(listener)?
        }
        // Otherwise fall back to CLI-specified host:port
        None => {
            let addr = format!("{}:{}", cli.host, cli.port);
            TcpListener::bind(&addr).await?
        }
    };

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Wait for shutdown signals (Ctrl+C or SIGTERM).
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
            tracing::info!("Received Ctrl+C, shutting down...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, shutting down...");
        }
    }
}
