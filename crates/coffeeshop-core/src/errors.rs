use anyhow::Error;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// The three ways a protected request can fail authorization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthErrorKind {
    /// Header missing, not `Bearer <token>`, or token text absent.
    MalformedHeader,
    /// The verifier rejected the token (signature, expiry, audience, issuer, key).
    InvalidToken,
    /// The token is valid but does not grant the required permission.
    Forbidden,
}

impl AuthErrorKind {
    pub fn status(self) -> StatusCode {
        match self {
            AuthErrorKind::MalformedHeader | AuthErrorKind::InvalidToken => {
                StatusCode::UNAUTHORIZED
            }
            AuthErrorKind::Forbidden => StatusCode::FORBIDDEN,
        }
    }

    /// Machine-readable code echoed in the error body.
    pub fn code(self) -> &'static str {
        match self {
            AuthErrorKind::MalformedHeader => "invalid_header",
            AuthErrorKind::InvalidToken => "invalid_token",
            AuthErrorKind::Forbidden => "forbidden",
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
#[error("{description}")]
pub struct AuthError {
    pub kind: AuthErrorKind,
    pub description: String,
}

impl AuthError {
    pub fn new(kind: AuthErrorKind, description: impl Into<String>) -> Self {
        Self {
            kind,
            description: description.into(),
        }
    }

    pub fn malformed_header(description: impl Into<String>) -> Self {
        Self::new(AuthErrorKind::MalformedHeader, description)
    }

    pub fn invalid_token(description: impl Into<String>) -> Self {
        Self::new(AuthErrorKind::InvalidToken, description)
    }

    pub fn forbidden(description: impl Into<String>) -> Self {
        Self::new(AuthErrorKind::Forbidden, description)
    }

    pub fn status(&self) -> StatusCode {
        self.kind.status()
    }
}

/// Every failure a request can end with. Rendering happens in one place,
/// the [`IntoResponse`] impl below.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error("bad request: {0}")]
    BadRequest(Error),
    #[error("not found: {0}")]
    NotFound(Error),
    #[error("method not allowed")]
    MethodNotAllowed,
    #[error("unprocessable: {0}")]
    Unprocessable(Error),
    #[error("internal error: {0}")]
    Internal(Error),
}

impl AppError {
    pub fn bad_request<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::BadRequest(err.into())
    }

    pub fn not_found<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::NotFound(err.into())
    }

    pub fn unprocessable<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::Unprocessable(err.into())
    }

    pub fn internal<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::Internal(err.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Auth(auth) => auth.status(),
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Client-visible message for a status code. Causes never leak to clients.
pub fn message_for(status: StatusCode) -> &'static str {
    match status {
        StatusCode::BAD_REQUEST => "Bad Request",
        StatusCode::UNAUTHORIZED => "Unauthorized",
        StatusCode::FORBIDDEN => "Forbidden",
        StatusCode::NOT_FOUND => "resource not found",
        StatusCode::METHOD_NOT_ALLOWED => "Method Not Allowed",
        StatusCode::UNPROCESSABLE_ENTITY => "Not Processable",
        _ => "Server Error",
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %self, "request failed");
        } else {
            tracing::debug!(status = status.as_u16(), error = %self, "request rejected");
        }

        let mut body = json!({
            "success": false,
            "error": status.as_u16(),
            "message": message_for(status),
        });

        if let AppError::Auth(auth) = &self {
            body["description"] = json!(auth.description);
            body["code"] = json!(auth.kind.code());
        }

        (status, Json(body)).into_response()
    }
}
