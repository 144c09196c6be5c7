// Framework bootstrap for the card server runtime.

use crate::frameworks::card_file::FileCardSource;
use crate::frameworks::config::ServerConfig;
use crate::interface_adapters::routes;
use crate::interface_adapters::state::AppState;

use std::io::Result;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

// Filter used when RUST_LOG is absent; debug mode also surfaces per-request trace spans.
fn default_log_level(debug: bool) -> &'static str {
    if debug { "debug" } else { "info" }
}

fn init_tracing(debug: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_log_level(debug)));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

pub async fn run(listener: tokio::net::TcpListener, config: ServerConfig) -> Result<()> {
    let address = listener.local_addr()?;
    let state = build_state(&config);

    // Request spans are emitted at debug level, so they only show in debug mode or with RUST_LOG.
    let app = routes::app(state).layer(TraceLayer::new_for_http());

    tracing::info!(
        %address,
        source_path = %config.source_path.display(),
        debug = config.debug,
        "listening"
    );

    // Serve app and report errors rather than panicking
    axum::serve(listener, app).await.inspect_err(|e| {
        tracing::error!(error = %e, "server error");
    })
}

pub async fn run_with_config() -> Result<()> {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();

    // Tracing needs the debug flag, so a config failure is reported right after init.
    let config = ServerConfig::load();
    init_tracing(config.as_ref().is_ok_and(|config| config.debug));
    let config = config.inspect_err(|e| {
        tracing::error!(error = %e, "failed to load configuration");
    })?;

    let address = config.socket_addr();

    // Bind TCP listener with error handling
    let listener = tokio::net::TcpListener::bind(address)
        .await
        .inspect_err(|e| {
            tracing::error!(%address, error = %e, "failed to bind");
        })?;

    run(listener, config).await
}

fn build_state(config: &ServerConfig) -> Arc<AppState> {
    if !config.source_path.exists() {
        // Not fatal: the file may appear later and is read fresh per request.
        tracing::warn!(
            source_path = %config.source_path.display(),
            "card source file does not exist yet"
        );
    }

    Arc::new(AppState {
        cards: Arc::new(FileCardSource::new(config.source_path.clone())),
    })
}
