//! PostgreSQL recipe store

use async_trait::async_trait;
use sqlx::{PgConnection, PgPool};
use std::collections::HashMap;

use super::{DbError, DbResult, RecipeStore, SearchCriteria};
use crate::models::{IngredientRecord, NewIngredientRecord, NewRecipeRecord, RecipeRecord};

const RECIPE_COLUMNS: &str = "id, name, type, creation_date, serving_capacity, instruction";

/// Recipe store backed by the `recipe` and `ingredient` tables
#[derive(Debug, Clone)]
pub struct PgRecipeStore {
    pool: PgPool,
}

impl PgRecipeStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Fill `ingredients` on each record with one query for the whole batch
    async fn attach_ingredients(&self, mut records: Vec<RecipeRecord>) -> DbResult<Vec<RecipeRecord>> {
        if records.is_empty() {
            return Ok(records);
        }

        let ids: Vec<i32> = records.iter().map(|r| r.id).collect();
        let rows = sqlx::query_as::<_, IngredientRecord>(
            r#"
            SELECT id, name, quantity, recipe_id
            FROM ingredient
            WHERE recipe_id = ANY($1)
            ORDER BY id
            "#,
        )
        .bind(&ids)
        .fetch_all(&self.pool)
        .await?;

        let mut by_recipe: HashMap<i32, Vec<IngredientRecord>> = HashMap::new();
        for row in rows {
            by_recipe.entry(row.recipe_id).or_default().push(row);
        }

        for record in &mut records {
            record.ingredients = by_recipe.remove(&record.id).unwrap_or_default();
        }

        Ok(records)
    }
}

/// Insert `ingredients` for `recipe_id`, returning the stored rows in order
async fn insert_ingredients(
    conn: &mut PgConnection,
    recipe_id: i32,
    ingredients: &[NewIngredientRecord],
) -> DbResult<Vec<IngredientRecord>> {
    let mut stored = Vec::with_capacity(ingredients.len());

    for ingredient in ingredients {
        let row = sqlx::query_as::<_, IngredientRecord>(
            r#"
            INSERT INTO ingredient (name, quantity, recipe_id)
            VALUES ($1, $2, $3)
            RETURNING id, name, quantity, recipe_id
            "#,
        )
        .bind(&ingredient.name)
        .bind(&ingredient.quantity)
        .bind(recipe_id)
        .fetch_one(&mut *conn)
        .await?;

        stored.push(row);
    }

    Ok(stored)
}

#[async_trait]
impl RecipeStore for PgRecipeStore {
    #[tracing::instrument(skip(self, recipe), fields(name = %recipe.name))]
    async fn save(&self, recipe: NewRecipeRecord) -> DbResult<RecipeRecord> {
        let mut tx = self.pool.begin().await?;

        let mut record = sqlx::query_as::<_, RecipeRecord>(&format!(
            r#"
            INSERT INTO recipe (name, type, serving_capacity, instruction)
            VALUES ($1, $2, $3, $4)
            RETURNING {RECIPE_COLUMNS}
            "#
        ))
        .bind(&recipe.name)
        .bind(&recipe.dish_type)
        .bind(recipe.serving_capacity)
        .bind(&recipe.instruction)
        .fetch_one(&mut *tx)
        .await?;

        record.ingredients = insert_ingredients(&mut tx, record.id, &recipe.ingredients).await?;

        tx.commit().await?;

        tracing::debug!(recipe_id = record.id, "Recipe row inserted");
        Ok(record)
    }

    #[tracing::instrument(skip(self, recipe), fields(recipe_id = id))]
    async fn replace(&self, id: i32, recipe: NewRecipeRecord) -> DbResult<RecipeRecord> {
        let mut tx = self.pool.begin().await?;

        let updated = sqlx::query_as::<_, RecipeRecord>(&format!(
            r#"
            UPDATE recipe
            SET name = $2, type = $3, serving_capacity = $4, instruction = $5
            WHERE id = $1
            RETURNING {RECIPE_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&recipe.name)
        .bind(&recipe.dish_type)
        .bind(recipe.serving_capacity)
        .bind(&recipe.instruction)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(mut record) = updated else {
            tx.rollback().await?;
            return Err(DbError::not_found("Recipe", &id.to_string()));
        };

        sqlx::query("DELETE FROM ingredient WHERE recipe_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        record.ingredients = insert_ingredients(&mut tx, id, &recipe.ingredients).await?;

        tx.commit().await?;

        Ok(record)
    }

    async fn find_by_id(&self, id: i32) -> DbResult<Option<RecipeRecord>> {
        let record = sqlx::query_as::<_, RecipeRecord>(&format!(
            "SELECT {RECIPE_COLUMNS} FROM recipe WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        match record {
            Some(record) => Ok(self.attach_ingredients(vec![record]).await?.pop()),
            None => Ok(None),
        }
    }

    async fn find_all(&self) -> DbResult<Vec<RecipeRecord>> {
        let records = sqlx::query_as::<_, RecipeRecord>(&format!(
            "SELECT {RECIPE_COLUMNS} FROM recipe ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await?;

        self.attach_ingredients(records).await
    }

    #[tracing::instrument(skip(self), fields(recipe_id = id))]
    async fn delete_by_id(&self, id: i32) -> DbResult<()> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("DELETE FROM recipe WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            tx.rollback().await?;
            return Err(DbError::not_found("Recipe", &id.to_string()));
        }

        tx.commit().await?;
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn find_by_search_criteria(
        &self,
        criteria: &SearchCriteria,
    ) -> DbResult<Vec<RecipeRecord>> {
        // strpos keeps the fragment literal; LIKE would treat % and _ as wildcards
        let records = sqlx::query_as::<_, RecipeRecord>(&format!(
            r#"
            SELECT {RECIPE_COLUMNS}
            FROM recipe
            WHERE ($1::text IS NULL OR type = $1)
              AND ($2::int4 IS NULL OR serving_capacity = $2)
              AND ($3::text IS NULL OR strpos(instruction, $3) > 0)
            ORDER BY id
            "#
        ))
        .bind(criteria.dish_type.as_deref())
        .bind(criteria.serving_capacity)
        .bind(criteria.instruction_fragment.as_deref())
        .fetch_all(&self.pool)
        .await?;

        self.attach_ingredients(records).await
    }

    async fn health_check(&self) -> DbResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map(|_| ())
            .map_err(DbError::from)
    }
}
