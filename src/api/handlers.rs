use axum::{extract::State, http::StatusCode, Extension, Json};
use serde::{Deserialize, Serialize};

use crate::{
    error::{AppError, AppResult},
    middleware::request_id::RequestId,
    models::{ChatTurn, SUPPORTED_APPS},
};

use super::AppState;

// Request/Response types

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub reply: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster_url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AppsResponse {
    pub enabled: Vec<String>,
    pub supported: Vec<&'static str>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateAppsRequest {
    pub apps: Vec<String>,
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// Full transcript, oldest turn first
pub async fn get_messages(State(state): State<AppState>) -> Json<Vec<ChatTurn>> {
    let session = state.session.lock().await;
    Json(session.transcript.clone())
}

/// Runs one chat turn
///
/// The session lock is held for the whole turn, so a concurrent query waits
/// until this one's answer is in the transcript. Pipeline failures come back
/// as a normal assistant message, never as an HTTP error.
pub async fn post_chat(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Json(request): Json<ChatRequest>,
) -> AppResult<Json<ChatResponse>> {
    if request.message.trim().is_empty() {
        return Err(AppError::InvalidInput("Message cannot be empty".to_string()));
    }

    let mut session = state.session.lock().await;

    tracing::info!(
        request_id = %request_id,
        query = %request.message,
        "Processing chat turn"
    );

    session.transcript.push(ChatTurn::user(request.message.as_str()));

    let answer = state
        .pipeline
        .run_turn(&request.message, &session.enabled_apps)
        .await;

    session.transcript.push(ChatTurn::assistant(answer.text.as_str()));

    Ok(Json(ChatResponse {
        reply: answer.text,
        poster_url: answer.poster_url,
    }))
}

/// Currently enabled apps plus the supported list for the multi-select
pub async fn get_apps(State(state): State<AppState>) -> Json<AppsResponse> {
    let session = state.session.lock().await;
    Json(AppsResponse {
        enabled: session.enabled_apps.clone(),
        supported: SUPPORTED_APPS.to_vec(),
    })
}

/// Replaces the enabled app set
pub async fn update_apps(
    State(state): State<AppState>,
    Json(request): Json<UpdateAppsRequest>,
) -> Json<AppsResponse> {
    let mut session = state.session.lock().await;
    session.enabled_apps = request.apps;

    tracing::info!(enabled = ?session.enabled_apps, "Enabled apps updated");

    Json(AppsResponse {
        enabled: session.enabled_apps.clone(),
        supported: SUPPORTED_APPS.to_vec(),
    })
}
