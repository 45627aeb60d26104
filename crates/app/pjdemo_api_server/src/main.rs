//! pjdemo API server binary.
//!
//! Loads `.env`, resolves the OpenAI credential and the fixtures up front,
//! then serves the router until Ctrl-C.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use pjdemo_api::config::DEFAULT_BIND_ADDR;
use pjdemo_core::completion::{Backend, OpenAiCompatibleClient, ProviderConfig};
use pjdemo_core::fixtures::Fixtures;
use tracing::info;

/// CLI arguments for the API server.
#[derive(Parser, Debug)]
#[command(name = "pjdemo_api_server", about = "pjdemo API server")]
struct Args {
    /// Address to listen on.
    #[arg(long, env = "BIND_ADDR", default_value = DEFAULT_BIND_ADDR)]
    bind: String,

    /// JSON fixture file replacing the built-in mock users.
    #[arg(long, env = "PJDEMO_FIXTURES")]
    fixtures: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,pjdemo_api=debug,pjdemo_core=debug,tower_http=info".into()),
        )
        .init();

    let args = Args::parse();

    info!(bind = %args.bind, "starting pjdemo_api_server");

    // Fail before binding if the credential is missing.
    let provider = ProviderConfig::from_env(Backend::OpenAi)?;
    info!(
        backend = %provider.backend,
        base_url = %provider.base_url,
        timeout_secs = provider.timeout.as_secs(),
        "completion backend configured"
    );
    let generator = OpenAiCompatibleClient::new(provider)?;

    let fixtures = match &args.fixtures {
        Some(path) => {
            info!(path = %path.display(), "loading fixtures");
            Fixtures::from_file(path)?
        }
        None => Fixtures::builtin()?,
    };
    info!(users = fixtures.user_count(), "fixtures loaded");

    let state = pjdemo_api::AppState {
        fixtures: Arc::new(fixtures),
        generator: Arc::new(generator),
    };

    let listener = tokio::net::TcpListener::bind(&args.bind).await?;
    let local_addr = listener.local_addr()?;
    let app = pjdemo_api::router(state);

    info!(addr = %local_addr, "REST API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("shutdown signal received");
        })
        .await?;

    Ok(())
}
