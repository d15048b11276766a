pub mod api;
pub mod exports;
pub mod polls;
pub mod votes;

use axum::Router;
use crate::AppState;

pub fn create_routes(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", api::routes(&state))
        .with_state(state)
}
