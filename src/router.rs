use anyhow::anyhow;
use axum::http::{HeaderValue, Method, header};
use axum::{Json, Router, middleware, routing::get};
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as _};

use coffeeshop_config::CorsConfig;
use coffeeshop_core::AppError;

use crate::docs::ApiDoc;
use crate::logging::logging_middleware;
use crate::modules::drinks::router::init_drinks_router;
use crate::state::AppState;

pub fn init_router(state: AppState) -> Router {
    Router::new()
        .merge(Scalar::with_url("/scalar", ApiDoc::openapi()))
        .route(
            "/api-docs/openapi.json",
            get(|| async { Json(ApiDoc::openapi()) }),
        )
        .merge(init_drinks_router(&state))
        .fallback(|| async { AppError::not_found(anyhow!("No route matches")) })
        .method_not_allowed_fallback(|| async { AppError::MethodNotAllowed })
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(logging_middleware))
                .layer(cors_layer(&state.cors_config)),
        )
        .with_state(state)
}

fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let origin = if config.allows_any() {
        AllowOrigin::from(Any)
    } else {
        let allowed_origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();
        AllowOrigin::list(allowed_origins)
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cors_layer_builds_for_both_modes() {
        let _ = cors_layer(&CorsConfig::default());
        let _ = cors_layer(&CorsConfig {
            allowed_origins: vec![
                "http://localhost:8100".to_string(),
                "not a header\n".to_string(),
            ],
        });
    }
}
