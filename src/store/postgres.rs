use anyhow::{Context, Result};
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::model::{Airplane, Category, Id, NewAirplane, NewProduct, Product};
use crate::store::traits::{AirplaneStore, ProductStore, Store, StoreError, StoreResult};

/// PostgreSQL-backed store. One table per resource, keyed by a
/// database-generated UUID surfaced externally in its hyphenated string
/// form. Concurrency safety is delegated to the connection pool.
#[derive(Debug, Clone)]
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    /// Create a new PostgreSQL store with the given database URL
    pub async fn new(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(20)
            .connect(database_url)
            .await
            .context("Failed to create PostgreSQL connection pool")?;

        Ok(Self { pool })
    }

    /// Create the resource tables if they do not exist yet.
    pub async fn migrate(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS products (
                id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
                name TEXT NOT NULL,
                description TEXT NOT NULL,
                price DOUBLE PRECISION NOT NULL,
                category JSONB NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .context("Failed to create products table")?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS airplanes (
                id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
                name TEXT NOT NULL,
                model TEXT NOT NULL,
                passenger_capacity INTEGER NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .context("Failed to create airplanes table")?;

        Ok(())
    }

    /// Get a reference to the connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Convert an external string id into the native identifier type.
    fn parse_id(id: &Id) -> StoreResult<Uuid> {
        Uuid::parse_str(id).map_err(|_| StoreError::InvalidId(id.clone()))
    }
}

fn product_from_row(row: &PgRow) -> Result<Product> {
    let category: Category = serde_json::from_value(row.get("category"))
        .context("Failed to deserialize product category")?;

    Ok(Product {
        id: row.get::<Uuid, _>("id").to_string(),
        name: row.get("name"),
        description: row.get("description"),
        price: row.get("price"),
        category,
    })
}

fn airplane_from_row(row: &PgRow) -> Airplane {
    Airplane {
        id: row.get::<Uuid, _>("id").to_string(),
        name: row.get("name"),
        model: row.get("model"),
        passenger_capacity: row.get::<i32, _>("passenger_capacity") as u32,
    }
}

#[async_trait::async_trait]
impl ProductStore for PostgresStore {
    async fn create_product(&self, new: NewProduct) -> StoreResult<Id> {
        let category =
            serde_json::to_value(&new.category).context("Failed to serialize product category")?;

        let row = sqlx::query(
            r#"
            INSERT INTO products (name, description, price, category)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(&new.name)
        .bind(&new.description)
        .bind(new.price)
        .bind(category)
        .fetch_one(&self.pool)
        .await
        .context("Failed to insert product")?;

        Ok(row.get::<Uuid, _>("id").to_string())
    }

    async fn get_product(&self, id: &Id) -> StoreResult<Product> {
        let native_id = Self::parse_id(id)?;

        let row = sqlx::query(
            "SELECT id, name, description, price, category FROM products WHERE id = $1",
        )
        .bind(native_id)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to fetch product")?;

        let Some(row) = row else {
            return Err(StoreError::NotFound("product"));
        };

        Ok(product_from_row(&row)?)
    }

    async fn update_product(&self, id: &Id, new: NewProduct) -> StoreResult<Product> {
        let native_id = Self::parse_id(id)?;
        let category =
            serde_json::to_value(&new.category).context("Failed to serialize product category")?;

        let row = sqlx::query(
            r#"
            UPDATE products
            SET name = $2, description = $3, price = $4, category = $5
            WHERE id = $1
            RETURNING id, name, description, price, category
            "#,
        )
        .bind(native_id)
        .bind(&new.name)
        .bind(&new.description)
        .bind(new.price)
        .bind(category)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to update product")?;

        let Some(row) = row else {
            return Err(StoreError::NotFound("product"));
        };

        Ok(product_from_row(&row)?)
    }

    async fn delete_product(&self, id: &Id) -> StoreResult<()> {
        let native_id = Self::parse_id(id)?;

        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(native_id)
            .execute(&self.pool)
            .await
            .context("Failed to delete product")?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound("product"));
        }

        Ok(())
    }

    async fn list_products(&self, name_hint: Option<&str>) -> StoreResult<Vec<Product>> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, description, price, category
            FROM products
            WHERE $1::text IS NULL OR name ILIKE '%' || $1 || '%'
            "#,
        )
        .bind(name_hint)
        .fetch_all(&self.pool)
        .await
        .context("Failed to list products")?;

        let products = rows
            .iter()
            .map(product_from_row)
            .collect::<Result<Vec<Product>>>()?;

        Ok(products)
    }
}

#[async_trait::async_trait]
impl AirplaneStore for PostgresStore {
    async fn create_airplane(&self, new: NewAirplane) -> StoreResult<Id> {
        let row = sqlx::query(
            r#"
            INSERT INTO airplanes (name, model, passenger_capacity)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(&new.name)
        .bind(&new.model)
        .bind(new.passenger_capacity as i32)
        .fetch_one(&self.pool)
        .await
        .context("Failed to insert airplane")?;

        Ok(row.get::<Uuid, _>("id").to_string())
    }

    async fn get_airplane(&self, id: &Id) -> StoreResult<Airplane> {
        let native_id = Self::parse_id(id)?;

        let row =
            sqlx::query("SELECT id, name, model, passenger_capacity FROM airplanes WHERE id = $1")
                .bind(native_id)
                .fetch_optional(&self.pool)
                .await
                .context("Failed to fetch airplane")?;

        let Some(row) = row else {
            return Err(StoreError::NotFound("airplane"));
        };

        Ok(airplane_from_row(&row))
    }

    async fn update_airplane(&self, id: &Id, new: NewAirplane) -> StoreResult<Airplane> {
        let native_id = Self::parse_id(id)?;

        let row = sqlx::query(
            r#"
            UPDATE airplanes
            SET name = $2, model = $3, passenger_capacity = $4
            WHERE id = $1
            RETURNING id, name, model, passenger_capacity
            "#,
        )
        .bind(native_id)
        .bind(&new.name)
        .bind(&new.model)
        .bind(new.passenger_capacity as i32)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to update airplane")?;

        let Some(row) = row else {
            return Err(StoreError::NotFound("airplane"));
        };

        Ok(airplane_from_row(&row))
    }

    async fn delete_airplane(&self, id: &Id) -> StoreResult<()> {
        let native_id = Self::parse_id(id)?;

        let result = sqlx::query("DELETE FROM airplanes WHERE id = $1")
            .bind(native_id)
            .execute(&self.pool)
            .await
            .context("Failed to delete airplane")?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound("airplane"));
        }

        Ok(())
    }

    async fn list_airplanes(&self, name_hint: Option<&str>) -> StoreResult<Vec<Airplane>> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, model, passenger_capacity
            FROM airplanes
            WHERE $1::text IS NULL OR name ILIKE '%' || $1 || '%'
            "#,
        )
        .bind(name_hint)
        .fetch_all(&self.pool)
        .await
        .context("Failed to list airplanes")?;

        Ok(rows.iter().map(airplane_from_row).collect())
    }
}

impl Store for PostgresStore {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_id_is_rejected_before_any_query() {
        let err = PostgresStore::parse_id(&"not-a-uuid".to_string()).unwrap_err();
        assert!(matches!(err, StoreError::InvalidId(_)));
    }

    #[test]
    fn well_formed_uuid_parses() {
        let id = Uuid::new_v4().to_string();
        assert!(PostgresStore::parse_id(&id).is_ok());
    }
}
