pub mod router;
pub mod types;
pub mod handlers {
    pub mod cars;
    pub mod common;
    pub mod health;
    pub mod report;
    pub mod sales;
}

pub use router::{create_router, ApiDoc};
pub use types::AppState;
