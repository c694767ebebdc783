//! Bearer-token middleware for protected routes.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use clipvault_core::AppError;

use crate::error::HttpError;
use crate::state::AppState;

use super::models::AuthenticatedUser;

/// Pull the token out of the Authorization header. The web client sends the
/// raw token value; a `Bearer ` prefix is tolerated.
fn extract_token(request: &Request) -> Option<&str> {
    request
        .headers()
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.strip_prefix("Bearer ").unwrap_or(value))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Verify the presented token and stash the caller identity in request
/// extensions. A missing, malformed, or expired token yields the same 401.
pub async fn require_auth(
    State(state): State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> Result<Response, HttpError> {
    let token = extract_token(&request).ok_or(AppError::Unauthorized)?;
    let claims = state.tokens.verify(token)?;

    request.extensions_mut().insert(AuthenticatedUser {
        user_id: claims.id,
        email: claims.email,
    });

    Ok(next.run(request).await)
}
