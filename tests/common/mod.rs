use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use coffeeshop::modules::drinks::memory::InMemoryDrinkRepository;
use coffeeshop::modules::drinks::repository::DrinkRepository;
use coffeeshop::router::init_router;
use coffeeshop::state::AppState;
use coffeeshop_auth::SecretVerifier;
use coffeeshop_config::CorsConfig;
use coffeeshop_models::{Drink, NewDrink};
use http_body_util::BodyExt;
use jsonwebtoken::{EncodingKey, Header, encode};
use serde_json::{Value, json};
use tower::ServiceExt;

pub const TEST_SECRET: &str = "test_secret_key_for_testing_purposes";
pub const TEST_AUDIENCE: &str = "drinks";

pub fn setup_test_app() -> (Router, Arc<InMemoryDrinkRepository>) {
    let repo = Arc::new(InMemoryDrinkRepository::new());
    let state = AppState::new(
        repo.clone(),
        Arc::new(SecretVerifier::new(TEST_SECRET, Some(TEST_AUDIENCE), 0)),
        CorsConfig::default(),
    );

    (init_router(state), repo)
}

/// Signs `claims` with `secret`.
pub fn sign(claims: Value, secret: &str) -> String {
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap()
}

fn expires_in(seconds: i64) -> i64 {
    (chrono::Utc::now() + chrono::Duration::seconds(seconds)).timestamp()
}

/// A valid token granting `permissions`.
pub fn token(permissions: &[&str]) -> String {
    sign(
        json!({
            "sub": "auth0|barista",
            "aud": TEST_AUDIENCE,
            "exp": expires_in(3600),
            "permissions": permissions,
        }),
        TEST_SECRET,
    )
}

/// A valid token with no `permissions` claim at all.
#[allow(dead_code)]
pub fn token_without_permissions() -> String {
    sign(
        json!({
            "sub": "auth0|customer",
            "aud": TEST_AUDIENCE,
            "exp": expires_in(3600),
        }),
        TEST_SECRET,
    )
}

#[allow(dead_code)]
pub fn expired_token(permissions: &[&str]) -> String {
    sign(
        json!({
            "sub": "auth0|barista",
            "aud": TEST_AUDIENCE,
            "exp": expires_in(-3600),
            "permissions": permissions,
        }),
        TEST_SECRET,
    )
}

/// Sends a request and returns the status with the parsed JSON body.
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    authorization: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(authorization) = authorization {
        builder = builder.header("authorization", authorization);
    }

    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, body)
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

#[allow(dead_code)]
pub async fn seed_drink(repo: &InMemoryDrinkRepository, title: &str, recipe: Value) -> Drink {
    seed_raw(repo, title, &recipe.to_string()).await
}

/// Inserts a row with `recipe` stored verbatim, valid JSON or not.
#[allow(dead_code)]
pub async fn seed_raw(repo: &InMemoryDrinkRepository, title: &str, recipe: &str) -> Drink {
    repo.insert(NewDrink {
        title: Some(title.to_string()),
        recipe: recipe.to_string(),
    })
    .await
    .unwrap()
}

/// Asserts the error envelope shape.
pub fn assert_error(body: &Value, status: StatusCode, message: &str) {
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], status.as_u16());
    assert_eq!(body["message"], message);
}
