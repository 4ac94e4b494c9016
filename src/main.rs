//! Focus Board - A state-managed HTTP server for a productivity dashboard
//!
//! This is the main entry point for the focus-board application.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use focus_board::{
    api::create_router,
    config::Config,
    state::{AppState, QuoteBook, TaskStore},
    tasks::{countdown_ticker_task, notes_autosave_task},
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("focus_board={},tower_http=info", config.log_level()))
        .init();

    info!("Starting focus-board server v1.0.0");
    info!("Configuration: host={}, port={}, tick={}ms, save_delay={}ms",
          config.host, config.port, config.tick_ms, config.save_delay_ms);

    let tasks = if config.sample_tasks {
        TaskStore::with_sample_tasks()
    } else {
        TaskStore::new()
    };

    // Create application state
    let state = Arc::new(AppState::with_widgets(
        config.port,
        config.host.clone(),
        config.tick_interval(),
        config.save_delay(),
        tasks,
        QuoteBook::new(),
    ));

    // Start the background tasks owned by the timer and notes widgets
    let ticker = tokio::spawn(countdown_ticker_task(Arc::clone(&state)));
    let autosave = tokio::spawn(notes_autosave_task(Arc::clone(&state)));

    // Create HTTP router with all endpoints
    let app = create_router(state);

    // Bind to the specified address
    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  GET    /dashboard        - Snapshot of every widget");
    info!("  GET    /tasks            - List tasks");
    info!("  POST   /tasks            - Add a task");
    info!("  POST   /tasks/:id/toggle - Toggle a task");
    info!("  DELETE /tasks/:id        - Delete a task");
    info!("  GET    /timer            - Countdown state");
    info!("  POST   /timer/{{start,pause,toggle,reset,mode}}");
    info!("  GET    /notes, PUT /notes");
    info!("  GET    /quote, POST /quote/next");
    info!("  GET    /theme, POST /theme/toggle");
    info!("  GET    /status, /health");

    // Setup graceful shutdown
    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
        }
    }

    ticker.abort();
    autosave.abort();

    info!("Server shutdown complete");
    Ok(())
}
