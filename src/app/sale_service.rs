//! Sale record operations and the sale/inventory consistency protocols.
//!
//! Creating a sale decrements the referenced car's stock; deleting one
//! restores it. Both run on a scoped `sqlx::Transaction` acquired from the
//! pool: dropping the handle without committing rolls everything back, so
//! every early-return failure path leaves the database untouched.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::app::car_service::CarService;
use crate::app::error::ServiceError;
use crate::domain::sale::{NewSale, Sale, SaleUpdate, SaleWithCar};

const SELECT_JOINED: &str = "SELECT s.*, c.make, c.model \
                             FROM sales s \
                             JOIN cars c ON s.car_id = c.id";

#[derive(Clone)]
pub struct SaleService {
    pool: PgPool,
}

impl SaleService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Lists all sales joined with car make/model, ordered by sale id.
    pub async fn find_all(&self) -> Result<Vec<SaleWithCar>, ServiceError> {
        let sales = sqlx::query_as::<_, SaleWithCar>(&format!("{} ORDER BY s.id", SELECT_JOINED))
            .fetch_all(&self.pool)
            .await?;
        Ok(sales)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<SaleWithCar>, ServiceError> {
        let sale = sqlx::query_as::<_, SaleWithCar>(&format!("{} WHERE s.id = $1", SELECT_JOINED))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(sale)
    }

    /// Create-sale protocol: insert the sale and decrement the car's stock
    /// in one transaction. The decrement is guarded by `stock > 0`; when the
    /// guard matches no row the transaction is dropped (rolled back) and the
    /// call fails with [`ServiceError::OutOfStock`].
    pub async fn create(&self, new_sale: NewSale) -> Result<SaleWithCar, ServiceError> {
        let mut tx = self.pool.begin().await?;

        let sale_date = new_sale.sale_date.unwrap_or_else(Utc::now);
        let sale = sqlx::query_as::<_, Sale>(
            "INSERT INTO sales (car_id, customer_name, sale_price, sale_date) \
             VALUES ($1, $2, $3, $4) \
             RETURNING *",
        )
        .bind(new_sale.car_id)
        .bind(&new_sale.customer_name)
        .bind(new_sale.sale_price)
        .bind(sale_date)
        .fetch_one(&mut *tx)
        .await?;

        let adjusted = CarService::adjust_stock_in_tx(&mut tx, new_sale.car_id, -1, true).await?;
        if adjusted == 0 {
            return Err(ServiceError::OutOfStock {
                car_id: new_sale.car_id,
            });
        }

        let joined = sqlx::query_as::<_, SaleWithCar>(&format!("{} WHERE s.id = $1", SELECT_JOINED))
            .bind(sale.id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(joined)
    }

    /// Partial update; the stock side effect belongs to create/delete only.
    /// Returns `None` when no sale matches the id.
    pub async fn update(
        &self,
        id: i32,
        changes: SaleUpdate,
    ) -> Result<Option<SaleWithCar>, ServiceError> {
        let Some(current) = self.find_by_id(id).await? else {
            return Ok(None);
        };
        let merged = changes.apply(&current);

        sqlx::query(
            "UPDATE sales \
             SET car_id = $1, customer_name = $2, sale_price = $3, sale_date = $4, \
                 updated_at = now() \
             WHERE id = $5",
        )
        .bind(merged.car_id)
        .bind(&merged.customer_name)
        .bind(merged.sale_price)
        .bind(merged.sale_date)
        .bind(id)
        .execute(&self.pool)
        .await?;

        self.find_by_id(id).await
    }

    /// Delete-sale protocol: restore the car's stock and remove the sale in
    /// one transaction. Returns `false` when no sale matched.
    pub async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        let mut tx = self.pool.begin().await?;

        let car_id: Option<i32> = sqlx::query_scalar("SELECT car_id FROM sales WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
        let Some(car_id) = car_id else {
            return Ok(false);
        };

        CarService::adjust_stock_in_tx(&mut tx, car_id, 1, false).await?;

        let result = sqlx::query("DELETE FROM sales WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn find_by_car(&self, car_id: i32) -> Result<Vec<SaleWithCar>, ServiceError> {
        let sales =
            sqlx::query_as::<_, SaleWithCar>(&format!("{} WHERE s.car_id = $1", SELECT_JOINED))
                .bind(car_id)
                .fetch_all(&self.pool)
                .await?;
        Ok(sales)
    }

    /// Case-insensitive substring match on customer name.
    pub async fn find_by_customer(&self, name: &str) -> Result<Vec<SaleWithCar>, ServiceError> {
        let sales = sqlx::query_as::<_, SaleWithCar>(&format!(
            "{} WHERE s.customer_name ILIKE $1",
            SELECT_JOINED
        ))
        .bind(format!("%{}%", name))
        .fetch_all(&self.pool)
        .await?;
        Ok(sales)
    }

    /// Sales whose `sale_date` falls inside the range, both endpoints
    /// inclusive, ordered by sale date.
    pub async fn find_by_date_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<SaleWithCar>, ServiceError> {
        let sales = sqlx::query_as::<_, SaleWithCar>(&format!(
            "{} WHERE s.sale_date BETWEEN $1 AND $2 ORDER BY s.sale_date",
            SELECT_JOINED
        ))
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await?;
        Ok(sales)
    }

    /// Sum of all sale prices, zero when there are no rows.
    pub async fn total_sales(&self) -> Result<Decimal, ServiceError> {
        let total: Decimal =
            sqlx::query_scalar("SELECT COALESCE(SUM(sale_price), 0) FROM sales")
                .fetch_one(&self.pool)
                .await?;
        Ok(total)
    }
}
