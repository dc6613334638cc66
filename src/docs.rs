use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use coffeeshop_models::{
    CreateDrinkDto, DeleteDrinkResponse, DrinkLong, DrinkShort, Ingredient, IngredientShort,
    Recipe, UpdateDrinkDto,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::drinks::controller::get_drinks,
        crate::modules::drinks::controller::get_drinks_detail,
        crate::modules::drinks::controller::create_drink,
        crate::modules::drinks::controller::update_drink,
        crate::modules::drinks::controller::delete_drink,
    ),
    components(
        schemas(
            Ingredient,
            IngredientShort,
            Recipe,
            DrinkShort,
            DrinkLong,
            CreateDrinkDto,
            UpdateDrinkDto,
            DeleteDrinkResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Drinks", description = "Drink menu and recipe management")
    ),
    info(
        title = "Coffee Shop API",
        version = "0.1.0",
        description = "Drink menu API with permission-scoped recipe management, built with Rust, Axum, and PostgreSQL.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
