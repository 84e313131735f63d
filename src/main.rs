use dnd_characters::characters::handlers::router;
use dnd_characters::characters::memory::CharacterStorage;
use dnd_characters::config::{Config, USAGE};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (config, ignored) = Config::from_args(std::env::args().skip(1))?;

    if config.show_help {
        println!("{}", USAGE);
        println!("Example: dnd_characters --bind 127.0.0.1:8000 --log-level debug");
        return Ok(());
    }

    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    for flag in ignored {
        tracing::warn!("Ignoring unknown argument: {}", flag);
    }

    // 1. Storage layer (process memory only, gone on shutdown):
    let storage = Arc::new(CharacterStorage::new());

    // 2. HTTP Router:
    let app = router(storage.clone());

    // 3. Start HTTP server:
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!("HTTP server listening on {}", listener.local_addr()?);
    tracing::info!("Press Ctrl+C to shutdown");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shut down, dropping {} characters", storage.len());
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
}
