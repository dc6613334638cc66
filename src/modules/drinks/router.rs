use axum::{
    Router,
    middleware,
    routing::{delete, get, patch, post},
};

use coffeeshop_core::permissions;

use crate::extractors::require_drink_id;
use crate::middleware::permission::guarded;
use crate::state::AppState;

use super::controller::{create_drink, delete_drink, get_drinks, get_drinks_detail, update_drink};

pub fn init_drinks_router(state: &AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/drinks",
            get(get_drinks).merge(guarded(state, permissions::POST_DRINKS, post(create_drink))),
        )
        .route(
            "/drinks-detail",
            guarded(state, permissions::GET_DRINKS_DETAIL, get(get_drinks_detail)),
        )
        .route(
            "/drinks/{id}",
            guarded(state, permissions::PATCH_DRINKS, patch(update_drink))
                .merge(guarded(state, permissions::DELETE_DRINKS, delete(delete_drink)))
                .route_layer(middleware::from_fn(require_drink_id)),
        )
}
