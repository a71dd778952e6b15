use thiserror::Error;

/// Failures surfaced by the record operation services.
///
/// Out-of-stock is the one expected conflict the route layer maps to 409;
/// "not found" outcomes travel as `Ok(None)` / `Ok(false)` and everything
/// else is an infrastructure failure answered with a generic 500.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("car {car_id} is out of stock")]
    OutOfStock { car_id: i32 },

    #[error(transparent)]
    Database(#[from] sqlx::Error),

    #[error(transparent)]
    Report(#[from] anyhow::Error),
}
