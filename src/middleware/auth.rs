use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};

use coffeeshop_auth::{Claims, bearer_token};
use coffeeshop_core::{AppError, AuthError};

use crate::state::AppState;

/// Extractor that validates the bearer token and provides its claims.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    /// Subject of the token, for logging. Tokens are not required to carry one.
    pub fn subject(&self) -> &str {
        self.0.sub.as_deref().unwrap_or("anonymous")
    }
}

/// Succeeds only when the claims carry a permission list containing
/// `permission` exactly.
pub fn check_permission(claims: &Claims, permission: &str) -> Result<(), AuthError> {
    if claims.permissions.is_none() {
        return Err(AuthError::forbidden("Permissions not included in token."));
    }

    if !claims.has_permission(permission) {
        return Err(AuthError::forbidden("Permission not found."));
    }

    Ok(())
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = match parts.headers.get(header::AUTHORIZATION) {
            Some(value) => Some(value.to_str().map_err(|_| {
                AuthError::malformed_header("Authorization header must be bearer token.")
            })?),
            None => None,
        };

        let token = bearer_token(auth_header)?;
        let claims = state.verifier.verify(token).map_err(AuthError::from)?;

        Ok(AuthUser(claims))
    }
}
