//! Static file handlers.

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};

use crate::assets::{Asset, CACHE_CONTROL, FAVICON, ROBOTS, STYLESHEET};
use crate::state::AppState;

/// `GET /static/styles.css`
pub async fn styles(State(state): State<AppState>, headers: HeaderMap) -> Response {
    serve(&state, &headers, &STYLESHEET)
}

/// `GET /favicon.ico`
pub async fn favicon(State(state): State<AppState>, headers: HeaderMap) -> Response {
    serve(&state, &headers, &FAVICON)
}

/// `GET /robots.txt`
pub async fn robots(State(state): State<AppState>, headers: HeaderMap) -> Response {
    serve(&state, &headers, &ROBOTS)
}

fn serve(state: &AppState, headers: &HeaderMap, asset: &Asset) -> Response {
    if asset.compress && accepts_gzip(headers) {
        match state.assets.gzip(asset) {
            Ok(bytes) => {
                return (
                    [
                        (header::CONTENT_TYPE, asset.content_type),
                        (header::CACHE_CONTROL, CACHE_CONTROL),
                        (header::CONTENT_ENCODING, "gzip"),
                        (header::VARY, "accept-encoding"),
                    ],
                    bytes,
                )
                    .into_response();
            }
            Err(err) => {
                tracing::error!(asset = asset.name, error = %err, "gzip failed");
                return StatusCode::INTERNAL_SERVER_ERROR.into_response();
            }
        }
    }

    (
        [
            (header::CONTENT_TYPE, asset.content_type),
            (header::CACHE_CONTROL, CACHE_CONTROL),
        ],
        Bytes::from_static(asset.body.as_bytes()),
    )
        .into_response()
}

/// Whether the `Accept-Encoding` header lists gzip.
fn accepts_gzip(headers: &HeaderMap) -> bool {
    headers
        .get_all(header::ACCEPT_ENCODING)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(','))
        .filter_map(|coding| coding.split(';').next())
        .any(|coding| coding.trim().eq_ignore_ascii_case("gzip"))
}
