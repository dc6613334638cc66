//! Drink catalog seeding.

mod drinks;

pub use drinks::{DrinkSeed, default_drinks, reset, seed_drinks};
