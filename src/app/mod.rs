//! Services over the database pool: one per entity plus the report pipeline.

pub mod car_service;
pub mod error;
pub mod report_service;
pub mod sale_service;

pub use car_service::CarService;
pub use error::ServiceError;
pub use report_service::ReportService;
pub use sale_service::SaleService;
