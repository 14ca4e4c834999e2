//! API middleware

use axum::{
    body::Body,
    extract::State,
    http::{header::AUTHORIZATION, Request},
    middleware::Next,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use tracing::{info, warn};

use domain_booking::{Session, SessionUser};

use crate::error::ApiError;
use crate::AppState;

/// Session middleware
///
/// Puts a [`Session`] in the request extensions. Requests without an
/// `Authorization` header get an anonymous session; a bearer token that
/// does not validate is refused.
pub async fn session_middleware(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let session = match auth_header {
        None => Session::anonymous(),
        Some(header) => {
            let Some(token) = header.strip_prefix("Bearer ") else {
                warn!("Malformed Authorization header");
                return ApiError::Unauthorized("expected a bearer token".into()).into_response();
            };
            match crate::auth::validate_token(token, &state.config.jwt_secret) {
                Ok(claims) => Session::signed_in(SessionUser::from(claims)),
                Err(e) => {
                    warn!(error = %e, "Token validation failed");
                    return ApiError::from(e).into_response();
                }
            }
        }
    };

    request.extensions_mut().insert(session);
    next.run(request).await
}

/// Audit logging middleware
///
/// Logs every API request with its user and duration
pub async fn audit_middleware(request: Request<Body>, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let user_id = request
        .extensions()
        .get::<Session>()
        .and_then(|s| s.user_id().map(String::from))
        .unwrap_or_else(|| "anonymous".to_string());

    let start = Utc::now();

    let response = next.run(request).await;

    let duration = Utc::now() - start;
    let status = response.status();

    info!(
        method = %method,
        uri = %uri,
        user = %user_id,
        status = %status.as_u16(),
        duration_ms = duration.num_milliseconds(),
        "API request"
    );

    response
}
