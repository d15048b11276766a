use axum::{
    extract::{Extension, Json, Path, State},
    http::StatusCode,
    response::Json as ResponseJson,
};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::{AppState, Result};
use crate::auth::Claims;
use crate::forms::ChoiceForm;
use crate::models::poll::{CreateChoiceRequest, CreatePollRequest, UpdatePollRequest};
use crate::models::PollResponse;

pub async fn create_poll(
    State(app_state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(request): Json<CreatePollRequest>,
) -> Result<(StatusCode, ResponseJson<Value>)> {
    let poll = app_state.poll_service.create_poll(claims.user_id, request).await?;

    Ok((StatusCode::CREATED, ResponseJson(json!({
        "poll": poll,
        "message": "Sondage créé",
        "author": {
            "id": claims.user_id,
            "username": claims.username
        }
    }))))
}

pub async fn get_polls(
    State(app_state): State<AppState>,
) -> Result<ResponseJson<Value>> {
    let polls = app_state.poll_service.list_polls().await?;

    Ok(ResponseJson(json!({
        "total": polls.len(),
        "polls": polls
    })))
}

pub async fn get_poll(
    State(app_state): State<AppState>,
    Path(poll_id): Path<Uuid>,
) -> Result<ResponseJson<PollResponse>> {
    let poll = app_state.poll_service.get_poll(poll_id).await?;
    Ok(ResponseJson(poll))
}

pub async fn update_poll(
    State(app_state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(poll_id): Path<Uuid>,
    Json(request): Json<UpdatePollRequest>,
) -> Result<ResponseJson<PollResponse>> {
    let poll = app_state.poll_service.update_poll(poll_id, claims.user_id, request).await?;
    Ok(ResponseJson(poll))
}

pub async fn add_choice(
    State(app_state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(poll_id): Path<Uuid>,
    Json(request): Json<CreateChoiceRequest>,
) -> Result<(StatusCode, ResponseJson<Value>)> {
    let choice = app_state
        .poll_service
        .add_choice(poll_id, claims.user_id, ChoiceForm::new(request.choice))
        .await?;

    Ok((StatusCode::CREATED, ResponseJson(json!({
        "choice": choice
    }))))
}
