use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use super::{bearer_password, ApiError, AppState};
use crate::flow::{self, FlowContext, FlowError};
use crate::gate::AccessError;
use crate::models::*;
use crate::store::SessionSnapshot;

// ============================================================
// Interaction plumbing
// ============================================================

/// Run one gated interaction against a stored session.
///
/// Every call re-checks the password carried on the request; nothing about a
/// previous successful login is remembered.
fn interact<T>(
    state: &AppState,
    id: Uuid,
    headers: &HeaderMap,
    step: impl FnOnce(&FlowContext<'_>, &mut SessionFlags, &str) -> Result<T, FlowError>,
) -> Result<(T, SessionSnapshot), ApiError> {
    let password = bearer_password(headers);
    let ctx = FlowContext {
        credential: &state.credential,
        currency_symbol: &state.currency_symbol,
    };

    let (result, snapshot) = state
        .sessions
        .with_session(id, |flags| step(&ctx, flags, password.as_str()))
        .ok_or(ApiError::SessionNotFound)?;

    match result {
        Ok(value) => Ok((value, snapshot)),
        Err(err) => {
            log_halt(id, &err);
            Err(err.into())
        }
    }
}

fn log_halt(id: Uuid, err: &FlowError) {
    match err {
        FlowError::Access(AccessError::EmptyCredential) => {
            tracing::debug!("Session {} has not entered a password", id)
        }
        FlowError::Access(AccessError::InvalidCredential) => {
            tracing::warn!("Incorrect password for session {}", id)
        }
        FlowError::Access(AccessError::DisclaimerNotAccepted) => {
            tracing::info!("Session {} tried to estimate before accepting the disclaimer", id)
        }
        FlowError::Estimate(e) => {
            tracing::warn!("Rejected estimate input for session {}: {}", id, e)
        }
    }
}

// ============================================================
// Health
// ============================================================

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ============================================================
// Sessions
// ============================================================

pub async fn create_session(State(state): State<AppState>) -> (StatusCode, Json<SessionView>) {
    let session = state.sessions.create();
    tracing::info!("Created session {}", session.id);
    (
        StatusCode::CREATED,
        Json(session.view(Stage::AwaitingPassword)),
    )
}

pub async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
) -> Result<Json<SessionView>, ApiError> {
    let (stage, snapshot) = interact(&state, id, &headers, |ctx, flags, password| {
        flow::view(ctx, flags, password)
    })?;
    Ok(Json(snapshot.view(stage)))
}

pub async fn end_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if state.sessions.remove(id) {
        tracing::info!("Ended session {}", id);
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::SessionNotFound)
    }
}

pub async fn accept_disclaimer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
) -> Result<Json<SessionView>, ApiError> {
    let (stage, snapshot) = interact(&state, id, &headers, flow::accept_disclaimer)?;
    tracing::info!("Session {} accepted the disclaimer", id);
    Ok(Json(snapshot.view(stage)))
}

// ============================================================
// Estimates
// ============================================================

pub async fn estimate_flowers_per_cane(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
    body: Result<Json<FlowersPerCaneInput>, JsonRejection>,
) -> Result<Json<Estimate>, ApiError> {
    let Json(input) = read_body(&state, id, &headers, body)?;
    run_estimate(&state, id, &headers, EstimateRequest::FlowersPerCane(input))
}

pub async fn estimate_revenue(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
    body: Result<Json<RevenueInput>, JsonRejection>,
) -> Result<Json<Estimate>, ApiError> {
    let Json(input) = read_body(&state, id, &headers, body)?;
    run_estimate(&state, id, &headers, EstimateRequest::Revenue(input))
}

/// Unwrap an estimate body, but only report a bad body once both gates pass.
fn read_body<T>(
    state: &AppState,
    id: Uuid,
    headers: &HeaderMap,
    body: Result<Json<T>, JsonRejection>,
) -> Result<Json<T>, ApiError> {
    match body {
        Ok(json) => Ok(json),
        Err(rejection) => {
            interact(state, id, headers, |ctx, flags, password| {
                flow::require_ready(ctx, flags, password)
            })?;
            tracing::warn!("Malformed estimate body for session {}: {}", id, rejection);
            Err(ApiError::MalformedBody(rejection.body_text()))
        }
    }
}

fn run_estimate(
    state: &AppState,
    id: Uuid,
    headers: &HeaderMap,
    request: EstimateRequest,
) -> Result<Json<Estimate>, ApiError> {
    let (estimate, _) = interact(state, id, headers, |ctx, flags, password| {
        flow::estimate(ctx, flags, password, &request)
    })?;
    tracing::debug!("Session {} estimate: {:?}", id, estimate.messages());
    Ok(Json(estimate))
}
