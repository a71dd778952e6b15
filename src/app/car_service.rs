//! Car record operations.
//!
//! Plain CRUD plus the filtered lookups the inventory endpoints expose. The
//! only piece of cross-entity behavior lives in [`CarService::adjust_stock_in_tx`],
//! which the sale protocols call on their own transaction handle.

use sqlx::{PgPool, Postgres, Transaction};

use crate::app::error::ServiceError;
use crate::domain::car::{Car, CarUpdate, NewCar};

#[derive(Clone)]
pub struct CarService {
    pool: PgPool,
}

impl CarService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Lists cars ordered by id, capped at 100 rows.
    pub async fn find_all(&self) -> Result<Vec<Car>, ServiceError> {
        let cars = sqlx::query_as::<_, Car>("SELECT * FROM cars ORDER BY id LIMIT 100")
            .fetch_all(&self.pool)
            .await?;
        Ok(cars)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Car>, ServiceError> {
        let car = sqlx::query_as::<_, Car>("SELECT * FROM cars WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(car)
    }

    pub async fn create(&self, new_car: NewCar) -> Result<Car, ServiceError> {
        let car = sqlx::query_as::<_, Car>(
            "INSERT INTO cars (make, model, year, price, stock) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(&new_car.make)
        .bind(&new_car.model)
        .bind(new_car.year)
        .bind(new_car.price)
        .bind(new_car.stock)
        .fetch_one(&self.pool)
        .await?;
        Ok(car)
    }

    /// Partial update: supplied fields are merged over the current row.
    /// Returns `None` when no car matches the id.
    pub async fn update(&self, id: i32, changes: CarUpdate) -> Result<Option<Car>, ServiceError> {
        let Some(current) = self.find_by_id(id).await? else {
            return Ok(None);
        };
        let merged = changes.apply(current);

        let car = sqlx::query_as::<_, Car>(
            "UPDATE cars \
             SET make = $1, model = $2, year = $3, price = $4, stock = $5, updated_at = now() \
             WHERE id = $6 \
             RETURNING *",
        )
        .bind(&merged.make)
        .bind(&merged.model)
        .bind(merged.year)
        .bind(merged.price)
        .bind(merged.stock)
        .bind(id)
        .fetch_one(&self.pool)
        .await?;
        Ok(Some(car))
    }

    /// Deletes a car. Returns `false` when no row matched.
    pub async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        let result = sqlx::query("DELETE FROM cars WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Case-insensitive substring match on make, capped at 100 rows.
    pub async fn find_by_make(&self, make: &str) -> Result<Vec<Car>, ServiceError> {
        let cars = sqlx::query_as::<_, Car>("SELECT * FROM cars WHERE make ILIKE $1 LIMIT 100")
            .bind(format!("%{}%", make))
            .fetch_all(&self.pool)
            .await?;
        Ok(cars)
    }

    /// Cars with at least one unsold unit, capped at 100 rows.
    pub async fn find_in_stock(&self) -> Result<Vec<Car>, ServiceError> {
        let cars = sqlx::query_as::<_, Car>("SELECT * FROM cars WHERE stock > 0 LIMIT 100")
            .fetch_all(&self.pool)
            .await?;
        Ok(cars)
    }

    /// Applies an additive stock delta on the caller's transaction, so a
    /// sale insert and its stock adjustment commit or roll back together.
    ///
    /// With `only_if_in_stock` the update is guarded by `stock > 0`; a
    /// return of 0 means the guard matched no row and the caller decides
    /// what to do with the transaction.
    pub async fn adjust_stock_in_tx(
        tx: &mut Transaction<'_, Postgres>,
        car_id: i32,
        delta: i32,
        only_if_in_stock: bool,
    ) -> Result<u64, sqlx::Error> {
        let sql = if only_if_in_stock {
            "UPDATE cars SET stock = stock + $1, updated_at = now() \
             WHERE id = $2 AND stock > 0"
        } else {
            "UPDATE cars SET stock = stock + $1, updated_at = now() WHERE id = $2"
        };
        let result = sqlx::query(sql)
            .bind(delta)
            .bind(car_id)
            .execute(&mut **tx)
            .await?;
        Ok(result.rows_affected())
    }
}
