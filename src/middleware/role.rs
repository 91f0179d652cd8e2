//! Role-based authorization middleware.
//!
//! The upstream auth proxy authenticates every request and forwards the
//! caller's role in the `x-user-role` header. These guards compare that
//! role against the names configured in [`crate::config::roles`]: a
//! missing header is a 401, a mismatched role a 403.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

use goldenhorse_core::AppError;

use crate::state::AppState;

/// Header the upstream proxy uses to forward the caller's role.
pub const ROLE_HEADER: &str = "x-user-role";

fn role_from_request(req: &Request) -> Result<String, AppError> {
    req.headers()
        .get(ROLE_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(|role| role.trim().to_string())
        .filter(|role| !role.is_empty())
        .ok_or_else(|| AppError::unauthorized("Missing authenticated role".to_string()))
}

/// Checks that the forwarded role is one of `allowed_roles`.
pub async fn require_roles(
    req: Request,
    next: Next,
    allowed_roles: Vec<String>,
) -> Result<Response, AppError> {
    let role = role_from_request(&req)?;

    if !allowed_roles.iter().any(|allowed| allowed == &role) {
        return Err(AppError::forbidden(format!(
            "Access denied for role '{}'",
            role
        )));
    }

    Ok(next.run(req).await)
}

/// Guard for administrative routes (settings writes, backups, deletes).
pub async fn require_admin(State(state): State<AppState>, req: Request, next: Next) -> Response {
    match require_roles(req, next, vec![state.roles.admin.clone()]).await {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}

/// Guard for regular write routes (admin or staff).
pub async fn require_staff(State(state): State<AppState>, req: Request, next: Next) -> Response {
    match require_roles(
        req,
        next,
        vec![state.roles.admin.clone(), state.roles.staff.clone()],
    )
    .await
    {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}
