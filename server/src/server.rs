//! Router and listener.

use std::net::SocketAddr;
use std::time::Duration;

use axum::{routing::get, Router};
use axum_server::{tls_rustls::RustlsConfig, Handle};
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use crate::config::{ServerConfig, TlsConfig};
use crate::error::{Result, ServerError};
use crate::handlers::{assets, health, password};
use crate::state::AppState;

/// Time given to in-flight requests after Ctrl-C.
const SHUTDOWN_GRACE: Duration = Duration::from_secs(10);

/// Build the application router.
///
/// Page and API responses are compressed by middleware; static assets
/// carry their own pre-compressed bodies.
#[must_use]
pub fn router(state: AppState) -> Router {
    let dynamic = Router::new()
        .route("/", get(password::index_query).post(password::index_form))
        .route(
            "/gen",
            get(password::generate_query).post(password::generate_form),
        )
        .layer(CompressionLayer::new());

    Router::new()
        .merge(dynamic)
        .route("/static/styles.css", get(assets::styles))
        .route("/favicon.ico", get(assets::favicon))
        .route("/robots.txt", get(assets::robots))
        .route("/healthcheck", get(health::healthcheck))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Load everything `config` names and serve until Ctrl-C.
///
/// # Errors
///
/// Returns an error if the word lists, the address or the TLS files are
/// invalid, or if the listener fails.
pub async fn serve(config: &ServerConfig) -> Result<()> {
    let addr = config.bind_address()?;
    let state = AppState::from_config(config)?;
    let app = router(state);

    let handle = Handle::new();
    tokio::spawn(shutdown_signal(handle.clone()));

    match config.tls() {
        Some(tls) => run_tls(addr, app, handle, &tls).await,
        None => run(addr, app, handle).await,
    }
}

async fn run_tls(addr: SocketAddr, app: Router, handle: Handle, tls: &TlsConfig) -> Result<()> {
    let rustls = RustlsConfig::from_pem_file(&tls.cert, &tls.key)
        .await
        .map_err(|err| ServerError::Tls(format!("{}: {err}", tls.cert.display())))?;

    tracing::info!(%addr, tls = true, "listening");
    axum_server::bind_rustls(addr, rustls)
        .handle(handle)
        .serve(app.into_make_service())
        .await?;
    Ok(())
}

async fn run(addr: SocketAddr, app: Router, handle: Handle) -> Result<()> {
    tracing::info!(%addr, tls = false, "listening");
    axum_server::bind(addr)
        .handle(handle)
        .serve(app.into_make_service())
        .await?;
    Ok(())
}

async fn shutdown_signal(handle: Handle) {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        return;
    }
    tracing::info!("shutting down");
    handle.graceful_shutdown(Some(SHUTDOWN_GRACE));
}
