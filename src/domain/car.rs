use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A car in the dealership inventory, mapped 1:1 onto the `cars` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Car {
    pub id: i32,
    pub make: String,
    pub model: String,
    pub year: i32,
    #[schema(value_type = f64)]
    pub price: Decimal,
    pub stock: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating a car. All fields are required; the id and
/// timestamps are assigned by the database.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct NewCar {
    pub make: String,
    pub model: String,
    pub year: i32,
    #[schema(value_type = f64)]
    pub price: Decimal,
    pub stock: i32,
}

/// Partial update: supplied fields overwrite the stored row, omitted fields
/// keep their current values.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CarUpdate {
    pub make: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    #[schema(value_type = Option<f64>)]
    pub price: Option<Decimal>,
    pub stock: Option<i32>,
}

impl CarUpdate {
    /// Merges this update over `current`, returning the row to be written.
    pub fn apply(self, mut current: Car) -> Car {
        if let Some(make) = self.make {
            current.make = make;
        }
        if let Some(model) = self.model {
            current.model = model;
        }
        if let Some(year) = self.year {
            current.year = year;
        }
        if let Some(price) = self.price {
            current.price = price;
        }
        if let Some(stock) = self.stock {
            current.stock = stock;
        }
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn car() -> Car {
        Car {
            id: 1,
            make: "Toyota".to_string(),
            model: "Corolla".to_string(),
            year: 2022,
            price: Decimal::new(25_000_00, 2),
            stock: 5,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn apply_merges_supplied_fields_only() {
        let update = CarUpdate {
            price: Some(Decimal::new(26_000_00, 2)),
            ..CarUpdate::default()
        };
        let merged = update.apply(car());
        assert_eq!(merged.price, Decimal::new(26_000_00, 2));
        assert_eq!(merged.make, "Toyota");
        assert_eq!(merged.stock, 5);
    }

    #[test]
    fn apply_with_empty_update_is_identity() {
        let original = car();
        let merged = CarUpdate::default().apply(original.clone());
        assert_eq!(merged, original);
    }

    #[test]
    fn apply_can_replace_every_field() {
        let update = CarUpdate {
            make: Some("Honda".to_string()),
            model: Some("Civic".to_string()),
            year: Some(2023),
            price: Some(Decimal::new(27_000_00, 2)),
            stock: Some(8),
        };
        let merged = update.apply(car());
        assert_eq!(merged.make, "Honda");
        assert_eq!(merged.model, "Civic");
        assert_eq!(merged.year, 2023);
        assert_eq!(merged.stock, 8);
    }
}
