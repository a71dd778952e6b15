// src/bin/api_server.rs

use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use dealership_api::infra::{config, object_store::ObjectStoreClient, secrets};
use dealership_api::transport;
use dealership_api::{CarService, Database, ReportService, SaleService};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    // --- Database Initialization ---
    println!("> Resolving database credentials...");
    let database_url = secrets::resolve_database_url().await?;

    println!("> Connecting to Postgres and ensuring schema...");
    let db = Database::connect(&database_url).await?;
    let pool = db.pool().clone();
    println!("> Database ready.");

    // --- Service Initialization (explicitly constructed, pool injected) ---
    let cars = CarService::new(pool.clone());
    let sales = SaleService::new(pool.clone());
    let reports = ReportService::new(sales.clone(), ObjectStoreClient::from_env());

    let app_state = transport::http::AppState {
        pool,
        cars,
        sales,
        reports,
    };

    // --- API Server Initialization ---
    println!("> Starting API server...");
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any);
    let app = transport::http::create_router(app_state)
        .merge(SwaggerUi::new("/swagger-ui").url(
            "/api-docs/openapi.json",
            transport::http::ApiDoc::openapi(),
        ))
        .layer(cors);

    let bind_addr = config::bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    println!("> API server listening on http://{}", bind_addr);
    println!("> Swagger UI available at http://{}/swagger-ui", bind_addr);
    println!("> Press Ctrl+C to shut down");

    tokio::select! {
        result = axum::serve(listener, app) => {
            result?;
        }
        _ = tokio::signal::ctrl_c() => {
            println!("\n> Shutdown signal received (Ctrl+C), exiting.");
        }
    }

    Ok(())
}
