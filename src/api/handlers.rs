//! HTTP request handlers

use super::types::{
    CandidateListResponse, CreateSessionResponse, ErrorResponse, InputRequest, InputResponse,
    SessionResponse, SuccessResponse,
};
use super::AppState;
use crate::archive::ArchiveError;
use crate::runtime::SessionError;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Session lifecycle
        .route("/api/sessions", post(create_session))
        .route("/api/sessions/:id", get(get_session))
        .route("/api/sessions/:id/input", post(submit_input))
        // Anonymised archive
        .route("/api/candidates", get(list_candidates))
        .route("/api/candidates/delete", post(delete_candidates))
        // Version
        .route("/version", get(get_version))
        .with_state(state)
}

// ============================================================
// Sessions
// ============================================================

async fn create_session(
    State(state): State<AppState>,
) -> Result<Json<CreateSessionResponse>, AppError> {
    let (session_id, outcome) = state.sessions.create().await?;
    Ok(Json(CreateSessionResponse {
        session_id,
        replies: outcome.replies,
    }))
}

async fn submit_input(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<InputRequest>,
) -> Result<Json<InputResponse>, AppError> {
    let outcome = state.sessions.submit(&id, &req.text).await?;

    Ok(Json(InputResponse {
        replies: outcome.replies,
        phase: outcome.phase.name(),
        question_number: outcome.question_number,
        active: outcome.active,
        error: outcome.generation_error,
    }))
}

async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SessionResponse>, AppError> {
    let snapshot = state.sessions.snapshot(&id).await?;
    Ok(Json(SessionResponse {
        session_id: id,
        state: snapshot,
    }))
}

// ============================================================
// Candidate archive
// ============================================================

async fn list_candidates(
    State(state): State<AppState>,
) -> Result<Json<CandidateListResponse>, AppError> {
    let candidates = state.archive.load_all().await?;
    Ok(Json(CandidateListResponse { candidates }))
}

async fn delete_candidates(
    State(state): State<AppState>,
) -> Result<Json<SuccessResponse>, AppError> {
    state.archive.delete_all().await?;
    Ok(Json(SuccessResponse { success: true }))
}

async fn get_version() -> &'static str {
    concat!("talent-scout ", env!("CARGO_PKG_VERSION"))
}

// ============================================================
// Error Handling
// ============================================================

#[derive(Debug)]
enum AppError {
    BadRequest(String),
    NotFound(String),
    Internal(String),
}

impl From<SessionError> for AppError {
    fn from(e: SessionError) -> Self {
        match e {
            SessionError::NotFound(_) => AppError::NotFound(e.to_string()),
            SessionError::Transition(_) => AppError::BadRequest(e.to_string()),
        }
    }
}

impl From<ArchiveError> for AppError {
    fn from(e: ArchiveError) -> Self {
        tracing::error!(error = %e, "Archive access failed");
        AppError::Internal(e.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(ErrorResponse::new(message));
        (status, body).into_response()
    }
}
