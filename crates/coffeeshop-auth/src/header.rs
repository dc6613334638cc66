//! `Authorization` header parsing.

use coffeeshop_core::AuthError;

/// Extracts the token from an `Authorization: Bearer <token>` header value.
///
/// The value must be exactly two space-separated parts and the scheme must be
/// literally `Bearer`. Every failure is a malformed-header error.
pub fn bearer_token(header: Option<&str>) -> Result<&str, AuthError> {
    let header =
        header.ok_or_else(|| AuthError::malformed_header("Authorization header is expected."))?;

    let parts: Vec<&str> = header.split(' ').collect();

    if parts[0] != "Bearer" {
        return Err(AuthError::malformed_header(
            "Authorization header must start with \"Bearer\".",
        ));
    }

    match parts.as_slice() {
        [_, token] if !token.is_empty() => Ok(*token),
        [_] | [_, _] => Err(AuthError::malformed_header("Token not found.")),
        _ => Err(AuthError::malformed_header(
            "Authorization header must be bearer token.",
        )),
    }
}
