use crate::domain::car::{Car, CarUpdate, NewCar};
use crate::domain::sale::{NewSale, Sale, SaleUpdate, SaleWithCar};
use crate::transport::http::handlers::{cars, health, report, sales};
use crate::transport::http::types::{
    AppState, HealthResponse, MessageResponse, ReportResponse, TotalSalesResponse,
};
use axum::routing::{get, post};
use axum::Router;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthcheck_handler,
        cars::list_cars_handler,
        cars::get_car_handler,
        cars::create_car_handler,
        cars::update_car_handler,
        cars::delete_car_handler,
        cars::cars_by_make_handler,
        cars::in_stock_cars_handler,
        sales::list_sales_handler,
        sales::get_sale_handler,
        sales::create_sale_handler,
        sales::update_sale_handler,
        sales::delete_sale_handler,
        sales::sales_by_car_handler,
        sales::sales_by_customer_handler,
        sales::sales_by_date_range_handler,
        sales::total_sales_handler,
        report::generate_report_handler
    ),
    components(schemas(
        Car,
        NewCar,
        CarUpdate,
        Sale,
        SaleWithCar,
        NewSale,
        SaleUpdate,
        MessageResponse,
        HealthResponse,
        TotalSalesResponse,
        ReportResponse
    ))
)]
#[allow(dead_code)]
pub struct ApiDoc;

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::healthcheck_handler))
        .route("/api/cars/all", get(cars::list_cars_handler))
        .route(
            "/api/cars/id/:id",
            get(cars::get_car_handler)
                .put(cars::update_car_handler)
                .delete(cars::delete_car_handler),
        )
        .route("/api/cars", post(cars::create_car_handler))
        .route("/api/cars/make/:make", get(cars::cars_by_make_handler))
        .route("/api/cars/inventory/in-stock", get(cars::in_stock_cars_handler))
        .route("/api/sales/all", get(sales::list_sales_handler))
        .route(
            "/api/sales/id/:id",
            get(sales::get_sale_handler)
                .put(sales::update_sale_handler)
                .delete(sales::delete_sale_handler),
        )
        .route("/api/sales", post(sales::create_sale_handler))
        .route("/api/sales/car/:carId", get(sales::sales_by_car_handler))
        .route(
            "/api/sales/customer/:name",
            get(sales::sales_by_customer_handler),
        )
        .route(
            "/api/sales/date-range",
            get(sales::sales_by_date_range_handler),
        )
        .route("/api/sales/total-sales", get(sales::total_sales_handler))
        .route("/api/report", get(report::generate_report_handler))
        .with_state(app_state)
}
