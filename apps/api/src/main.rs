use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use promptforge_api::build_app;
use promptforge_api::config::Config;
use promptforge_api::state::AppState;
use promptforge_api::templates::{FsTemplateStore, TemplateCatalog};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_CRATE_NAME"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting PromptForge API v{}", env!("CARGO_PKG_VERSION"));

    let store = FsTemplateStore::new(&config.templates_dir);
    info!("Serving templates from {}", config.templates_dir.display());
    info!("CORS allowed origins: {:?}", config.cors_allowed_origins);

    let state = AppState {
        catalog: TemplateCatalog::new(Arc::new(store)),
        config: config.clone(),
    };

    let app = build_app(state)?;

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
