pub mod app;
pub mod domain;
pub mod infra;
pub mod storage;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::car_service::CarService;
pub use app::error::ServiceError;
pub use app::report_service::ReportService;
pub use app::sale_service::SaleService;
pub use domain::car::{Car, CarUpdate, NewCar};
pub use domain::sale::{NewSale, Sale, SaleUpdate, SaleWithCar};
pub use storage::database::Database;
