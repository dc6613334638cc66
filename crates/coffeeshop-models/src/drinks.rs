use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use coffeeshop_core::serde::deserialize_present;

/// Longest title the `drinks` table accepts, in characters.
pub const TITLE_MAX_LEN: u64 = 80;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Ingredient {
    pub name: String,
    pub color: String,
    /// Relative quantity of this ingredient in the drink
    pub parts: u32,
}

/// An ingredient without its name, as shown on the public menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct IngredientShort {
    pub color: String,
    pub parts: u32,
}

impl From<&Ingredient> for IngredientShort {
    fn from(ingredient: &Ingredient) -> Self {
        Self {
            color: ingredient.color.clone(),
            parts: ingredient.parts,
        }
    }
}

/// A drink's ingredients. Clients may submit a single ingredient object or a
/// list; both are kept as submitted in storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum Recipe {
    Many(Vec<Ingredient>),
    Single(Ingredient),
}

#[derive(Debug, thiserror::Error)]
pub enum RecipeError {
    #[error("recipe is required")]
    Missing,
    #[error("recipe is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl Recipe {
    pub fn from_value(value: Value) -> Result<Self, RecipeError> {
        if value.is_null() {
            return Err(RecipeError::Missing);
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Parses the text stored in the `recipe` column.
    pub fn decode(raw: &str) -> Result<Self, RecipeError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Serializes to the text stored in the `recipe` column.
    pub fn encode(&self) -> Result<String, RecipeError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn ingredients(&self) -> &[Ingredient] {
        match self {
            Recipe::Many(ingredients) => ingredients,
            Recipe::Single(ingredient) => std::slice::from_ref(ingredient),
        }
    }
}

/// A row of the `drinks` table. The recipe stays serialized until a
/// projection is requested.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Drink {
    pub id: i32,
    pub title: String,
    pub recipe: String,
}

impl Drink {
    pub fn parsed_recipe(&self) -> Result<Recipe, RecipeError> {
        Recipe::decode(&self.recipe)
    }

    pub fn short(&self) -> Result<DrinkShort, RecipeError> {
        let recipe = self.parsed_recipe()?;
        Ok(DrinkShort {
            id: self.id,
            title: self.title.clone(),
            recipe: recipe.ingredients().iter().map(IngredientShort::from).collect(),
        })
    }

    pub fn long(&self) -> Result<DrinkLong, RecipeError> {
        let recipe = self.parsed_recipe()?;
        Ok(DrinkLong {
            id: self.id,
            title: self.title.clone(),
            recipe: recipe.ingredients().to_vec(),
        })
    }
}

/// A drink about to be inserted. A missing title stays `None` so the store's
/// NOT NULL constraint is what rejects it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDrink {
    pub title: Option<String>,
    pub recipe: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DrinkShort {
    pub id: i32,
    pub title: String,
    pub recipe: Vec<IngredientShort>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DrinkLong {
    pub id: i32,
    pub title: String,
    pub recipe: Vec<Ingredient>,
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct CreateDrinkDto {
    #[validate(length(max = TITLE_MAX_LEN))]
    pub title: Option<String>,
    #[schema(value_type = Option<Recipe>)]
    pub recipe: Option<Value>,
}

/// Partial update. `None` means the key was absent from the body; a present
/// key, even `null`, is `Some`.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateDrinkDto {
    #[serde(default, deserialize_with = "deserialize_present")]
    #[validate(length(max = TITLE_MAX_LEN))]
    #[schema(value_type = Option<String>)]
    pub title: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_present")]
    #[schema(value_type = Option<Recipe>)]
    pub recipe: Option<Value>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DrinksResponse<T> {
    pub success: bool,
    pub drinks: Vec<T>,
}

impl<T> DrinksResponse<T> {
    pub fn new(drinks: Vec<T>) -> Self {
        Self {
            success: true,
            drinks,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteDrinkResponse {
    pub success: bool,
    /// Id of the deleted drink
    pub delete: i32,
}

impl DeleteDrinkResponse {
    pub fn new(id: i32) -> Self {
        Self {
            success: true,
            delete: id,
        }
    }
}
