use axum::{middleware, routing::{get, post}, Json, Router};
use serde_json::{json, Value};
use crate::AppState;
use crate::routes::{exports, polls, votes};
use crate::auth::middleware::auth_middleware;

pub fn routes(state: &AppState) -> Router<AppState> {
    let public_routes = Router::new()
        .route("/health", get(api_health))
        .route("/polls", get(polls::get_polls))
        .route("/polls/:poll_id", get(polls::get_poll))
        .route("/polls/:poll_id/results", get(votes::get_results))
        .route("/export/articles/:pk", get(exports::export_article))
        .route("/export/tutorials/:pk", get(exports::export_tutorial))
        .route("/export/parts/:pk", get(exports::export_part))
        .route("/export/chapters/:pk", get(exports::export_chapter));

    let protected_routes = Router::new()
        .route("/polls", post(polls::create_poll))
        .route("/polls/:poll_id", axum::routing::put(polls::update_poll))
        .route("/polls/:poll_id/choices", post(polls::add_choice))
        .route("/polls/:poll_id/vote", get(votes::get_vote_form).post(votes::cast_vote))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth_middleware));

    public_routes.merge(protected_routes)
}

async fn api_health() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "community_platform",
        "version": env!("CARGO_PKG_VERSION"),
        "features": {
            "polls": "enabled",
            "votes": "enabled",
            "content_export": "enabled"
        }
    }))
}
