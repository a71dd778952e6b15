use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use utoipa::{IntoParams, ToSchema};

use crate::app::{CarService, ReportService, SaleService};

/// Shared state injected into every handler. Services are constructed once
/// at startup around the same pool; nothing here is lazily initialized.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub cars: CarService,
    pub sales: SaleService,
    pub reports: ReportService,
}

/// Fixed-message body used for 404s, deletions and generic failures.
#[derive(Serialize, Debug, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct TotalSalesResponse {
    #[serde(rename = "totalSales")]
    #[schema(value_type = f64)]
    pub total_sales: Decimal,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct ReportResponse {
    pub message: String,
    pub location: String,
    pub key: String,
}

/// Query parameters of `GET /api/sales/date-range`. Both are required; the
/// handler answers 400 with a fixed message when either is missing.
#[derive(Deserialize, Debug, IntoParams)]
pub struct DateRangeParams {
    #[serde(rename = "startDate")]
    pub start_date: Option<String>,
    #[serde(rename = "endDate")]
    pub end_date: Option<String>,
}
