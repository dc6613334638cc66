//! Permission-checking middleware, composed onto individual method routes
//! when the router is built.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::{self, Next},
    response::Response,
    routing::MethodRouter,
};
use tracing::debug;

use coffeeshop_core::AppError;

use crate::middleware::auth::{AuthUser, check_permission};
use crate::state::AppState;

/// Authenticates the request and requires `permission` before running the
/// rest of the stack. The [`AuthUser`] is handed on as a request extension.
pub async fn require_permission(
    State(state): State<AppState>,
    req: Request,
    next: Next,
    permission: &'static str,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let auth_user = AuthUser::from_request_parts(&mut parts, &state).await?;
    check_permission(&auth_user.0, permission)?;

    debug!(subject = auth_user.subject(), permission, "Permission granted");

    parts.extensions.insert(auth_user);
    Ok(next.run(Request::from_parts(parts, body)).await)
}

/// Wraps `route` so every request to it must carry `permission`.
///
/// # Example
///
/// ```rust,ignore
/// use axum::routing::post;
/// use coffeeshop_core::permissions;
///
/// let route = guarded(&state, permissions::POST_DRINKS, post(create_drink));
/// ```
pub fn guarded(
    state: &AppState,
    permission: &'static str,
    route: MethodRouter<AppState>,
) -> MethodRouter<AppState> {
    route.route_layer(middleware::from_fn_with_state(
        state.clone(),
        move |state: State<AppState>, req: Request, next: Next| {
            require_permission(state, req, next, permission)
        },
    ))
}
