use std::time::Instant;

use coffeeshop_models::{Ingredient, Recipe};
use sqlx::PgPool;

/// Seed data for creating a drink.
pub struct DrinkSeed {
    pub title: String,
    pub recipe: Recipe,
}

/// The starter menu: a single "water" drink with one blue ingredient.
pub fn default_drinks() -> Vec<DrinkSeed> {
    vec![DrinkSeed {
        title: "water".to_string(),
        recipe: Recipe::Single(Ingredient {
            name: "water".to_string(),
            color: "blue".to_string(),
            parts: 1,
        }),
    }]
}

/// Inserts `drinks` in one transaction, skipping titles that already exist.
/// Returns how many rows were inserted.
pub async fn seed_drinks(
    db: &PgPool,
    drinks: &[DrinkSeed],
) -> Result<u64, Box<dyn std::error::Error>> {
    let start_time = Instant::now();
    println!("☕ Seeding {} drinks...", drinks.len());

    let mut tx = db.begin().await?;
    let mut inserted = 0;

    for drink in drinks {
        let recipe = drink.recipe.encode()?;
        let result = sqlx::query(
            "INSERT INTO drinks (title, recipe) VALUES ($1, $2) ON CONFLICT (title) DO NOTHING",
        )
        .bind(&drink.title)
        .bind(recipe)
        .execute(&mut *tx)
        .await?;

        inserted += result.rows_affected();
    }

    tx.commit().await?;

    println!(
        "   ✓ Inserted {} drinks in {:?}",
        inserted,
        start_time.elapsed()
    );

    Ok(inserted)
}

/// Removes every drink and restarts id assignment at 1.
pub async fn reset(db: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query("TRUNCATE drinks RESTART IDENTITY")
        .execute(db)
        .await?;

    println!("🧹 Cleared drinks table");
    Ok(())
}
