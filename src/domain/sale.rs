use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A sale row as stored in the `sales` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Sale {
    pub id: i32,
    pub car_id: i32,
    pub sale_date: DateTime<Utc>,
    pub customer_name: String,
    #[schema(value_type = f64)]
    pub sale_price: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A sale joined with its car's make and model, the shape every read path
/// returns (`SELECT s.*, c.make, c.model FROM sales s JOIN cars c ...`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct SaleWithCar {
    pub id: i32,
    pub car_id: i32,
    pub sale_date: DateTime<Utc>,
    pub customer_name: String,
    #[schema(value_type = f64)]
    pub sale_price: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub make: String,
    pub model: String,
}

/// Payload for creating a sale. `sale_date` defaults to the current time
/// when omitted.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct NewSale {
    pub car_id: i32,
    pub customer_name: String,
    #[schema(value_type = f64)]
    pub sale_price: Decimal,
    #[serde(default)]
    pub sale_date: Option<DateTime<Utc>>,
}

/// Partial update over a stored sale.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct SaleUpdate {
    pub car_id: Option<i32>,
    pub customer_name: Option<String>,
    #[schema(value_type = Option<f64>)]
    pub sale_price: Option<Decimal>,
    pub sale_date: Option<DateTime<Utc>>,
}

impl SaleUpdate {
    /// Merges this update over the current row, returning the field values
    /// to be written back.
    pub fn apply(self, current: &SaleWithCar) -> Sale {
        Sale {
            id: current.id,
            car_id: self.car_id.unwrap_or(current.car_id),
            sale_date: self.sale_date.unwrap_or(current.sale_date),
            customer_name: self
                .customer_name
                .unwrap_or_else(|| current.customer_name.clone()),
            sale_price: self.sale_price.unwrap_or(current.sale_price),
            created_at: current.created_at,
            updated_at: current.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sale() -> SaleWithCar {
        let now = Utc::now();
        SaleWithCar {
            id: 7,
            car_id: 1,
            sale_date: now,
            customer_name: "John Doe".to_string(),
            sale_price: Decimal::new(24_500_00, 2),
            created_at: now,
            updated_at: now,
            make: "Toyota".to_string(),
            model: "Corolla".to_string(),
        }
    }

    #[test]
    fn apply_keeps_unset_fields() {
        let current = sale();
        let merged = SaleUpdate {
            sale_price: Some(Decimal::new(25_000_00, 2)),
            ..SaleUpdate::default()
        }
        .apply(&current);
        assert_eq!(merged.sale_price, Decimal::new(25_000_00, 2));
        assert_eq!(merged.customer_name, "John Doe");
        assert_eq!(merged.car_id, 1);
        assert_eq!(merged.sale_date, current.sale_date);
    }

    #[test]
    fn apply_can_move_sale_to_another_car() {
        let merged = SaleUpdate {
            car_id: Some(3),
            ..SaleUpdate::default()
        }
        .apply(&sale());
        assert_eq!(merged.car_id, 3);
    }
}
