// Authentication middleware for protecting routes
use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use crate::{AppError, AppState};

/// Verify the bearer token and expose its [`super::Claims`] as a request extension
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .ok_or_else(|| AppError::AuthError("Missing authorization header".to_string()))?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| AppError::AuthError("Invalid authorization header format".to_string()))?;

    let token = auth_str
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::AuthError("Authorization header must start with 'Bearer '".to_string()))?;

    let claims = state.auth_service.verify_token(token)?;
    tracing::debug!("Authenticated request from {}", claims.username);

    request.extensions_mut().insert(claims);
    Ok(next.run(request).await)
}
