use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{RawQuery, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use axum_server::tls_rustls::RustlsConfig;
use tokio::net::{lookup_host, TcpListener};

use crate::errors::{FinderError, FinderResult};
use crate::services::Discovery;
use crate::telemetry::log_report;

pub fn router(discovery: Arc<Discovery>) -> Router {
    Router::new()
        .route("/", get(discover_handler))
        .with_state(discovery)
}

pub async fn serve(discovery: Arc<Discovery>, addr: &str) -> FinderResult<()> {
    let listener = TcpListener::bind(addr).await?;

    tracing::info!("Server running on http://{}", addr);

    axum::serve(listener, router(discovery)).await?;

    Ok(())
}

/// Serve the endpoint over HTTPS with a PEM certificate chain and private key
pub async fn serve_tls(
    discovery: Arc<Discovery>,
    addr: &str,
    cert: &Path,
    key: &Path,
) -> FinderResult<()> {
    // reqwest already pulls in ring; make it the process-wide provider
    let _ = rustls::crypto::ring::default_provider().install_default();

    let tls = RustlsConfig::from_pem_file(cert, key).await?;
    let socket = resolve(addr).await?;

    tracing::info!("Server running on https://{}", addr);

    axum_server::bind_rustls(socket, tls)
        .serve(router(discovery).into_make_service())
        .await?;

    Ok(())
}

async fn resolve(addr: &str) -> FinderResult<SocketAddr> {
    lookup_host(addr)
        .await?
        .next()
        .ok_or_else(|| FinderError::Config(format!("{} does not resolve to an address", addr)))
}

/// The single `url` query parameter, if it is present exactly once and non-empty
fn url_param(query: Option<&str>) -> Option<String> {
    let pairs: Vec<(String, String)> = serde_urlencoded::from_str(query?).ok()?;
    let mut values = pairs
        .into_iter()
        .filter(|(key, _)| key == "url")
        .map(|(_, value)| value);

    let url = values.next()?;
    if url.is_empty() || values.next().is_some() {
        return None;
    }

    Some(url)
}

async fn discover_handler(
    State(discovery): State<Arc<Discovery>>,
    RawQuery(query): RawQuery,
) -> Response {
    let Some(url) = url_param(query.as_deref()) else {
        tracing::warn!(query = ?query, "request without a usable url parameter");
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    };

    let started = Instant::now();

    match discovery.discover(&url).await {
        Ok(report) => {
            log_report(&url, &report, started.elapsed());
            (StatusCode::OK, Json(report)).into_response()
        }
        Err(e) => {
            tracing::error!(url = %url, error = %e, "discovery failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
