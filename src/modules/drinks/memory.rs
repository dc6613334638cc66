//! In-memory [`DrinkRepository`] for tests.
//!
//! Enforces the same constraints as the `drinks` table: title NOT NULL,
//! UNIQUE and at most 80 characters, ids assigned from a sequence.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use coffeeshop_models::{Drink, NewDrink, TITLE_MAX_LEN};

use super::repository::{DrinkRepository, RepositoryError};

#[derive(Default)]
struct Table {
    rows: BTreeMap<i32, Drink>,
    last_id: i32,
}

#[derive(Default)]
pub struct InMemoryDrinkRepository {
    table: Mutex<Table>,
}

impl InMemoryDrinkRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn table(&self) -> MutexGuard<'_, Table> {
        self.table.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Raw row access, bypassing the projections.
    pub fn row(&self, id: i32) -> Option<Drink> {
        self.table().rows.get(&id).cloned()
    }

    pub fn len(&self) -> usize {
        self.table().rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn check_title(table: &Table, id: Option<i32>, title: &str) -> Result<(), RepositoryError> {
    if title.chars().count() as u64 > TITLE_MAX_LEN {
        return Err(RepositoryError::Constraint(
            "value too long for type character varying(80)".to_string(),
        ));
    }

    let duplicate = table
        .rows
        .values()
        .any(|row| row.title == title && Some(row.id) != id);
    if duplicate {
        return Err(RepositoryError::Constraint(
            "duplicate key value violates unique constraint \"drinks_title_key\"".to_string(),
        ));
    }

    Ok(())
}

#[async_trait]
impl DrinkRepository for InMemoryDrinkRepository {
    async fn list_ordered_by_id(&self) -> Result<Vec<Drink>, RepositoryError> {
        Ok(self.table().rows.values().cloned().collect())
    }

    async fn get(&self, id: i32) -> Result<Option<Drink>, RepositoryError> {
        Ok(self.row(id))
    }

    async fn insert(&self, drink: NewDrink) -> Result<Drink, RepositoryError> {
        let mut table = self.table();

        let title = drink.title.ok_or_else(|| {
            RepositoryError::Constraint(
                "null value in column \"title\" violates not-null constraint".to_string(),
            )
        })?;
        check_title(&table, None, &title)?;

        table.last_id += 1;
        let drink = Drink {
            id: table.last_id,
            title,
            recipe: drink.recipe,
        };
        table.rows.insert(drink.id, drink.clone());

        Ok(drink)
    }

    async fn update(&self, drink: &Drink) -> Result<(), RepositoryError> {
        let mut table = self.table();

        if !table.rows.contains_key(&drink.id) {
            return Err(RepositoryError::Missing(drink.id));
        }
        check_title(&table, Some(drink.id), &drink.title)?;

        table.rows.insert(drink.id, drink.clone());
        Ok(())
    }

    async fn delete(&self, drink: &Drink) -> Result<(), RepositoryError> {
        self.table()
            .rows
            .remove(&drink.id)
            .map(|_| ())
            .ok_or(RepositoryError::Missing(drink.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_drink(title: &str) -> NewDrink {
        NewDrink {
            title: Some(title.to_string()),
            recipe: r#"{"name":"water","color":"blue","parts":1}"#.to_string(),
        }
    }

    #[tokio::test]
    async fn test_ids_are_assigned_in_order() {
        let repo = InMemoryDrinkRepository::new();
        let first = repo.insert(new_drink("water")).await.unwrap();
        let second = repo.insert(new_drink("tea")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);

        let titles: Vec<_> = repo
            .list_ordered_by_id()
            .await
            .unwrap()
            .into_iter()
            .map(|d| d.title)
            .collect();
        assert_eq!(titles, vec!["water", "tea"]);
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let repo = InMemoryDrinkRepository::new();
        let first = repo.insert(new_drink("water")).await.unwrap();
        repo.delete(&first).await.unwrap();

        let second = repo.insert(new_drink("water")).await.unwrap();
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn test_constraints() {
        let repo = InMemoryDrinkRepository::new();
        repo.insert(new_drink("water")).await.unwrap();

        assert!(matches!(
            repo.insert(new_drink("water")).await,
            Err(RepositoryError::Constraint(_))
        ));
        assert!(matches!(
            repo.insert(NewDrink {
                title: None,
                recipe: "[]".to_string()
            })
            .await,
            Err(RepositoryError::Constraint(_))
        ));
        assert!(matches!(
            repo.insert(new_drink(&"x".repeat(81))).await,
            Err(RepositoryError::Constraint(_))
        ));
    }

    #[tokio::test]
    async fn test_update_keeps_own_title() {
        let repo = InMemoryDrinkRepository::new();
        let mut drink = repo.insert(new_drink("water")).await.unwrap();
        drink.recipe = "[]".to_string();

        repo.update(&drink).await.unwrap();
        assert_eq!(repo.row(drink.id).unwrap().recipe, "[]");
    }

    #[tokio::test]
    async fn test_missing_rows() {
        let repo = InMemoryDrinkRepository::new();
        let ghost = Drink {
            id: 9,
            title: "ghost".to_string(),
            recipe: "[]".to_string(),
        };

        assert!(matches!(
            repo.update(&ghost).await,
            Err(RepositoryError::Missing(9))
        ));
        assert!(matches!(
            repo.delete(&ghost).await,
            Err(RepositoryError::Missing(9))
        ));
    }
}
