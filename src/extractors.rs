//! Request extractors that reject with the JSON error envelope instead of
//! axum's plain-text rejections.

use anyhow::anyhow;
use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Request, rejection::JsonRejection},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use serde::de::DeserializeOwned;

use coffeeshop_core::AppError;

/// JSON body. Unparseable JSON or a missing content type is a 400; well-formed
/// JSON that does not fit `T` is a 422. Field-level validation is left to the
/// service.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| match rejection {
                JsonRejection::MissingJsonContentType(_) => {
                    AppError::bad_request(anyhow!("Missing 'Content-Type: application/json' header"))
                }
                JsonRejection::JsonSyntaxError(_) => {
                    AppError::bad_request(anyhow!("Malformed JSON body"))
                }
                JsonRejection::JsonDataError(err) => {
                    AppError::unprocessable(anyhow!("{}", err.body_text()))
                }
                other => AppError::bad_request(anyhow!("Invalid request body: {}", other.body_text())),
            })?;

        Ok(JsonBody(value))
    }
}

/// Integer drink id from the path. Anything else matches no drink.
#[derive(Debug, Clone, Copy)]
pub struct DrinkId(pub i32);

impl<S> FromRequestParts<S> for DrinkId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i32>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::not_found(anyhow!("{}", rejection.body_text())))?;

        Ok(DrinkId(id))
    }
}

/// Route layer that answers 404 for a non-integer id before any other layer
/// on the route runs.
pub async fn require_drink_id(_: DrinkId, req: Request, next: Next) -> Response {
    next.run(req).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::StatusCode, middleware, routing::post};
    use serde::Deserialize;
    use tower::ServiceExt;

    #[derive(Deserialize)]
    struct Payload {
        #[allow(dead_code)]
        title: String,
    }

    async fn echo(JsonBody(_): JsonBody<Payload>) -> StatusCode {
        StatusCode::OK
    }

    async fn id(DrinkId(id): DrinkId) -> String {
        id.to_string()
    }

    async fn teapot() -> StatusCode {
        StatusCode::IM_A_TEAPOT
    }

    fn app() -> Router {
        Router::new()
            .route("/echo", post(echo))
            .route("/drinks/{id}", post(id))
            .route(
                "/guarded/{id}",
                post(teapot).route_layer(middleware::from_fn(require_drink_id)),
            )
    }

    async fn send(request: axum::http::Request<Body>) -> StatusCode {
        app().oneshot(request).await.unwrap().status()
    }

    fn json_request(uri: &str, body: &str) -> axum::http::Request<Body> {
        axum::http::Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_json_body_accepts_valid_payload() {
        assert_eq!(send(json_request("/echo", r#"{"title":"x"}"#)).await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_json_body_rejects_malformed_json() {
        assert_eq!(
            send(json_request("/echo", "{not json")).await,
            StatusCode::BAD_REQUEST
        );
    }

    #[tokio::test]
    async fn test_json_body_wrong_shape_is_unprocessable() {
        assert_eq!(
            send(json_request("/echo", r#"{"title":5}"#)).await,
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            send(json_request("/echo", "[1,2]")).await,
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[tokio::test]
    async fn test_json_body_rejects_missing_content_type() {
        let request = axum::http::Request::builder()
            .method("POST")
            .uri("/echo")
            .body(Body::from(r#"{"title":"x"}"#))
            .unwrap();

        assert_eq!(send(request).await, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_drink_id_rejects_non_integer_as_not_found() {
        assert_eq!(
            send(json_request("/drinks/abc", "{}")).await,
            StatusCode::NOT_FOUND
        );
        assert_eq!(send(json_request("/drinks/7", "{}")).await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_require_drink_id_layer() {
        assert_eq!(
            send(json_request("/guarded/abc", "{}")).await,
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            send(json_request("/guarded/7", "{}")).await,
            StatusCode::IM_A_TEAPOT
        );
    }
}
