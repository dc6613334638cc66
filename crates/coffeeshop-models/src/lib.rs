//! # Coffee Shop Models
//!
//! The drink catalog's data model: the stored [`Drink`] row, its parsed
//! [`Recipe`], the public (short) and detailed (long) projections, request
//! DTOs and response bodies.

pub mod drinks;

pub use drinks::{
    CreateDrinkDto, DeleteDrinkResponse, Drink, DrinkLong, DrinkShort, DrinksResponse, Ingredient,
    IngredientShort, NewDrink, Recipe, RecipeError, TITLE_MAX_LEN, UpdateDrinkDto,
};
