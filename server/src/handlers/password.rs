//! Passphrase handlers: the index page and the JSON endpoint.
//!
//! Generation runs on the blocking pool under the configured timeout, and
//! every response is padded to the response-time floor.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{rejection::FormRejection, Form, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Json, Response},
};

use diceware_core::{generate_password_with, GenerationLimits, PasswordRequest, SecureRandom};

use crate::params::{password_request, Fields, GeneratePasswordResult};
use crate::render::IndexPage;
use crate::state::AppState;
use crate::timing::pad_response;
use crate::BUILD;

// ---------------------------------------------------------------------------
// Routes
// ---------------------------------------------------------------------------

/// `GET /`
pub async fn index_query(State(state): State<AppState>, Query(fields): Query<Fields>) -> Response {
    index(state, fields).await
}

/// `POST /`
pub async fn index_form(
    State(state): State<AppState>,
    form: Result<Form<Fields>, FormRejection>,
) -> Response {
    index(state, form_fields(form)).await
}

/// `GET /gen`
pub async fn generate_query(
    State(state): State<AppState>,
    Query(fields): Query<Fields>,
) -> Response {
    generate(state, fields).await
}

/// `POST /gen`
pub async fn generate_form(
    State(state): State<AppState>,
    form: Result<Form<Fields>, FormRejection>,
) -> Response {
    generate(state, form_fields(form)).await
}

// ---------------------------------------------------------------------------
// Shared
// ---------------------------------------------------------------------------

/// A body that is not a readable form counts as an empty one, so every
/// field takes its default.
fn form_fields(form: Result<Form<Fields>, FormRejection>) -> Fields {
    match form {
        Ok(Form(fields)) => fields,
        Err(rejection) => {
            tracing::debug!(reason = %rejection.body_text(), "unreadable form, using defaults");
            Fields::new()
        }
    }
}

async fn index(state: AppState, fields: Fields) -> Response {
    let started = Instant::now();
    let request = password_request(&fields, state.extended_enabled);

    let response = match run_generation(&state, &request).await {
        Ok(password) => {
            let page = IndexPage {
                password: &password,
                request: &request,
                simple_word_count: state.simple_word_count(),
                extended_word_count: state.extended_word_count(),
                extended_enabled: state.extended_enabled,
                build: BUILD,
            };
            Html(page.render()).into_response()
        }
        Err(status) => status.into_response(),
    };

    pad_response(started, state.min_response).await;
    response
}

async fn generate(state: AppState, fields: Fields) -> Response {
    let started = Instant::now();
    let request = password_request(&fields, state.extended_enabled);

    let response = match run_generation(&state, &request).await {
        Ok(p) => Json(GeneratePasswordResult { p }).into_response(),
        Err(status) => status.into_response(),
    };

    pad_response(started, state.min_response).await;
    response
}

/// Generate on the blocking pool, bounded by the configured timeout.
///
/// An exhausted search or a timeout yields the empty string. Engine errors
/// are fatal for the request.
async fn run_generation(state: &AppState, request: &PasswordRequest) -> Result<String, StatusCode> {
    let words = Arc::clone(&state.words);
    let job = request.clone();
    let task = tokio::task::spawn_blocking(move || {
        generate_password_with(
            &words,
            &job,
            GenerationLimits::default(),
            &mut SecureRandom::os(),
        )
    });

    match tokio::time::timeout(state.generation_timeout, task).await {
        Ok(Ok(Ok(password))) => {
            if password.is_empty() {
                tracing::info!(
                    word_count = request.word_count,
                    min_len = request.min_len,
                    max_len = request.max_len,
                    extended = request.use_extended,
                    "could not generate a passphrase within bounds"
                );
            }
            Ok(password)
        }
        Ok(Ok(Err(err))) => {
            tracing::error!(error = %err, "passphrase generation failed");
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
        Ok(Err(err)) => {
            tracing::error!(error = %err, "generation task failed");
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
        Err(_) => {
            tracing::warn!(
                timeout = ?state.generation_timeout,
                "passphrase generation timed out"
            );
            Ok(String::new())
        }
    }
}
