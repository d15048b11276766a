use axum::{
    extract::{Extension, Path, State},
    response::Json,
};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::{AppState, Result};
use crate::auth::Claims;
use crate::forms::VoteForm;
use crate::models::{CastVoteRequest, PollResults};

/// Describe the ballot the caller should fill for a poll
pub async fn get_vote_form(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(poll_id): Path<Uuid>,
) -> Result<Json<VoteForm>> {
    let form = state.vote_service.vote_form_for(poll_id, claims.user_id).await?;
    Ok(Json(form))
}

/// Cast or replace the caller's vote
pub async fn cast_vote(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(poll_id): Path<Uuid>,
    Json(request): Json<CastVoteRequest>,
) -> Result<Json<Value>> {
    let vote = state.vote_service.cast_vote(poll_id, claims.user_id, request).await?;
    Ok(Json(json!({
        "vote": vote,
        "message": "Vote enregistré"
    })))
}

pub async fn get_results(
    State(state): State<AppState>,
    Path(poll_id): Path<Uuid>,
) -> Result<Json<PollResults>> {
    let results = state.vote_service.get_results(poll_id).await?;
    Ok(Json(results))
}
