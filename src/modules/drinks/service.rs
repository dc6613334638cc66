use anyhow::anyhow;
use serde_json::Value;
use tracing::{info, instrument};
use validator::Validate;

use coffeeshop_core::AppError;
use coffeeshop_models::{
    CreateDrinkDto, Drink, DrinkLong, DrinkShort, NewDrink, Recipe, UpdateDrinkDto,
};

use super::repository::DrinkRepository;

pub struct DrinkService;

impl DrinkService {
    /// Public menu. An empty catalog is reported as not found.
    #[instrument(skip(repo))]
    pub async fn list_short(repo: &dyn DrinkRepository) -> Result<Vec<DrinkShort>, AppError> {
        let drinks = Self::list_all(repo).await?;

        drinks
            .iter()
            .map(|drink| drink.short().map_err(AppError::internal))
            .collect()
    }

    /// Detailed menu. An empty catalog is reported as not found.
    #[instrument(skip(repo))]
    pub async fn list_long(repo: &dyn DrinkRepository) -> Result<Vec<DrinkLong>, AppError> {
        let drinks = Self::list_all(repo).await?;

        drinks
            .iter()
            .map(|drink| drink.long().map_err(AppError::internal))
            .collect()
    }

    async fn list_all(repo: &dyn DrinkRepository) -> Result<Vec<Drink>, AppError> {
        let drinks = repo
            .list_ordered_by_id()
            .await
            .map_err(AppError::internal)?;

        if drinks.is_empty() {
            return Err(AppError::not_found(anyhow!("No drinks in the catalog")));
        }

        Ok(drinks)
    }

    #[instrument(skip(repo))]
    pub async fn create_drink(
        repo: &dyn DrinkRepository,
        dto: CreateDrinkDto,
    ) -> Result<DrinkLong, AppError> {
        dto.validate().map_err(AppError::unprocessable)?;

        let recipe = dto
            .recipe
            .ok_or_else(|| AppError::unprocessable(anyhow!("recipe is required")))
            .and_then(|value| Recipe::from_value(value).map_err(AppError::unprocessable))?;

        let new_drink = NewDrink {
            title: dto.title,
            recipe: recipe.encode().map_err(AppError::unprocessable)?,
        };

        let drink = repo
            .insert(new_drink)
            .await
            .map_err(AppError::unprocessable)?;

        info!(drink_id = drink.id, "Drink created");

        drink.long().map_err(AppError::unprocessable)
    }

    /// Applies only the keys present in `body`. The drink is looked up before
    /// the body is bound and validated so an unknown id is always a 404.
    #[instrument(skip(repo))]
    pub async fn update_drink(
        repo: &dyn DrinkRepository,
        id: i32,
        body: Value,
    ) -> Result<DrinkLong, AppError> {
        let mut drink = Self::find_drink(repo, id).await?;

        let dto: UpdateDrinkDto = serde_json::from_value(body).map_err(AppError::unprocessable)?;
        dto.validate().map_err(AppError::unprocessable)?;

        if let Some(title) = dto.title {
            drink.title =
                title.ok_or_else(|| AppError::unprocessable(anyhow!("title may not be null")))?;
        }

        if let Some(value) = dto.recipe {
            let recipe = Recipe::from_value(value).map_err(AppError::unprocessable)?;
            drink.recipe = recipe.encode().map_err(AppError::unprocessable)?;
        }

        repo.update(&drink)
            .await
            .map_err(AppError::unprocessable)?;

        info!(drink_id = drink.id, "Drink updated");

        drink.long().map_err(AppError::unprocessable)
    }

    #[instrument(skip(repo))]
    pub async fn delete_drink(repo: &dyn DrinkRepository, id: i32) -> Result<i32, AppError> {
        let drink = Self::find_drink(repo, id).await?;

        repo.delete(&drink)
            .await
            .map_err(AppError::unprocessable)?;

        info!(drink_id = drink.id, "Drink deleted");

        Ok(drink.id)
    }

    async fn find_drink(repo: &dyn DrinkRepository, id: i32) -> Result<Drink, AppError> {
        repo.get(id)
            .await
            .map_err(AppError::unprocessable)?
            .ok_or_else(|| AppError::not_found(anyhow!("Drink {} not found", id)))
    }
}
