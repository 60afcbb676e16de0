use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use event_registry::shared::infrastructure::mirror::text_file::TextFileMirror;
use event_registry::shell::config::AppConfig;
use event_registry::shell::http::app;
use event_registry::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;

    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mirror = Arc::new(TextFileMirror::new(&config.mirror_path));
    let state = AppState::new(mirror)?;

    let addr = config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(
        mirror = %config.mirror_path.display(),
        "Events API listening on http://{}",
        addr
    );
    axum::serve(listener, app(state)).await?;
    Ok(())
}
