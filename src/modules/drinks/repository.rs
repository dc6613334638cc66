//! Persistence contract for drinks and its PostgreSQL implementation.
//!
//! Each method is a single statement, so each write commits or rolls back on
//! its own. Concurrent writers to the same row are left to the database's
//! isolation.

use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::error::ErrorKind;
use tracing::instrument;

use coffeeshop_models::{Drink, NewDrink};

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// The store refused the write (NOT NULL, UNIQUE, length, ...).
    #[error("constraint violated: {0}")]
    Constraint(String),
    /// The row disappeared between lookup and write.
    #[error("drink {0} no longer exists")]
    Missing(i32),
    #[error("database error: {0}")]
    Database(#[source] sqlx::Error),
}

impl From<sqlx::Error> for RepositoryError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            // 22001: string_data_right_truncation
            let truncated = db_err.code().as_deref() == Some("22001");
            if truncated || !matches!(db_err.kind(), ErrorKind::Other) {
                return RepositoryError::Constraint(db_err.message().to_string());
            }
        }
        RepositoryError::Database(err)
    }
}

#[async_trait]
pub trait DrinkRepository: Send + Sync {
    async fn list_ordered_by_id(&self) -> Result<Vec<Drink>, RepositoryError>;

    async fn get(&self, id: i32) -> Result<Option<Drink>, RepositoryError>;

    /// Inserts the drink and returns it with its assigned id.
    async fn insert(&self, drink: NewDrink) -> Result<Drink, RepositoryError>;

    /// Writes title and recipe of an existing drink.
    async fn update(&self, drink: &Drink) -> Result<(), RepositoryError>;

    async fn delete(&self, drink: &Drink) -> Result<(), RepositoryError>;
}

pub struct PgDrinkRepository {
    pool: PgPool,
}

impl PgDrinkRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DrinkRepository for PgDrinkRepository {
    #[instrument(skip(self))]
    async fn list_ordered_by_id(&self) -> Result<Vec<Drink>, RepositoryError> {
        let drinks =
            sqlx::query_as::<_, Drink>("SELECT id, title, recipe FROM drinks ORDER BY id")
                .fetch_all(&self.pool)
                .await?;

        Ok(drinks)
    }

    #[instrument(skip(self))]
    async fn get(&self, id: i32) -> Result<Option<Drink>, RepositoryError> {
        let drink =
            sqlx::query_as::<_, Drink>("SELECT id, title, recipe FROM drinks WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(drink)
    }

    #[instrument(skip(self))]
    async fn insert(&self, drink: NewDrink) -> Result<Drink, RepositoryError> {
        let drink = sqlx::query_as::<_, Drink>(
            r#"INSERT INTO drinks (title, recipe)
               VALUES ($1, $2)
               RETURNING id, title, recipe"#,
        )
        .bind(&drink.title)
        .bind(&drink.recipe)
        .fetch_one(&self.pool)
        .await?;

        Ok(drink)
    }

    #[instrument(skip(self))]
    async fn update(&self, drink: &Drink) -> Result<(), RepositoryError> {
        let result = sqlx::query("UPDATE drinks SET title = $1, recipe = $2 WHERE id = $3")
            .bind(&drink.title)
            .bind(&drink.recipe)
            .bind(drink.id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::Missing(drink.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, drink: &Drink) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM drinks WHERE id = $1")
            .bind(drink.id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::Missing(drink.id));
        }

        Ok(())
    }
}
