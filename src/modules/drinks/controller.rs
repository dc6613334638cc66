use axum::{Extension, Json, extract::State};
use serde_json::Value;
use tracing::{info, instrument};

use coffeeshop_core::AppError;
use coffeeshop_models::{
    CreateDrinkDto, DeleteDrinkResponse, DrinkLong, DrinkShort, DrinksResponse, UpdateDrinkDto,
};

use crate::extractors::{DrinkId, JsonBody};
use crate::middleware::auth::AuthUser;
use crate::modules::drinks::service::DrinkService;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/drinks",
    responses(
        (status = 200, description = "Menu with ingredient colors and parts", body = DrinksResponse<DrinkShort>),
        (status = 404, description = "No drinks in the catalog"),
        (status = 500, description = "Stored recipe could not be read")
    ),
    tag = "Drinks"
)]
#[instrument(skip(state))]
pub async fn get_drinks(
    State(state): State<AppState>,
) -> Result<Json<DrinksResponse<DrinkShort>>, AppError> {
    let drinks = DrinkService::list_short(state.drinks.as_ref()).await?;

    Ok(Json(DrinksResponse::new(drinks)))
}

#[utoipa::path(
    get,
    path = "/drinks-detail",
    responses(
        (status = 200, description = "Menu with full recipes", body = DrinksResponse<DrinkLong>),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Forbidden - requires get:drinks-detail permission"),
        (status = 404, description = "No drinks in the catalog")
    ),
    tag = "Drinks",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth_user))]
pub async fn get_drinks_detail(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
) -> Result<Json<DrinksResponse<DrinkLong>>, AppError> {
    let drinks = DrinkService::list_long(state.drinks.as_ref()).await?;

    info!(subject = auth_user.subject(), count = drinks.len(), "Listed drink details");

    Ok(Json(DrinksResponse::new(drinks)))
}

#[utoipa::path(
    post,
    path = "/drinks",
    request_body = CreateDrinkDto,
    responses(
        (status = 200, description = "Drink created", body = DrinksResponse<DrinkLong>),
        (status = 400, description = "Body is not valid JSON"),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Forbidden - requires post:drinks permission"),
        (status = 422, description = "Drink rejected (wrong body shape, missing fields, bad recipe, duplicate title)")
    ),
    tag = "Drinks",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth_user))]
pub async fn create_drink(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    JsonBody(dto): JsonBody<CreateDrinkDto>,
) -> Result<Json<DrinksResponse<DrinkLong>>, AppError> {
    let drink = DrinkService::create_drink(state.drinks.as_ref(), dto).await?;

    info!(subject = auth_user.subject(), drink_id = drink.id, "Created drink");

    Ok(Json(DrinksResponse::new(vec![drink])))
}

#[utoipa::path(
    patch,
    path = "/drinks/{id}",
    params(
        ("id" = i32, Path, description = "Drink ID")
    ),
    request_body = UpdateDrinkDto,
    responses(
        (status = 200, description = "Drink updated", body = DrinksResponse<DrinkLong>),
        (status = 400, description = "Body is not valid JSON"),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Forbidden - requires patch:drinks permission"),
        (status = 404, description = "Drink not found"),
        (status = 422, description = "Update rejected")
    ),
    tag = "Drinks",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth_user))]
pub async fn update_drink(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    DrinkId(id): DrinkId,
    JsonBody(body): JsonBody<Value>,
) -> Result<Json<DrinksResponse<DrinkLong>>, AppError> {
    let drink = DrinkService::update_drink(state.drinks.as_ref(), id, body).await?;

    info!(subject = auth_user.subject(), drink_id = id, "Updated drink");

    Ok(Json(DrinksResponse::new(vec![drink])))
}

#[utoipa::path(
    delete,
    path = "/drinks/{id}",
    params(
        ("id" = i32, Path, description = "Drink ID")
    ),
    responses(
        (status = 200, description = "Drink deleted", body = DeleteDrinkResponse),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Forbidden - requires delete:drinks permission"),
        (status = 404, description = "Drink not found"),
        (status = 422, description = "Delete rejected")
    ),
    tag = "Drinks",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth_user))]
pub async fn delete_drink(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    DrinkId(id): DrinkId,
) -> Result<Json<DeleteDrinkResponse>, AppError> {
    let deleted = DrinkService::delete_drink(state.drinks.as_ref(), id).await?;

    info!(subject = auth_user.subject(), drink_id = deleted, "Deleted drink");

    Ok(Json(DeleteDrinkResponse::new(deleted)))
}
