use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::domain::sale::{NewSale, SaleUpdate, SaleWithCar};
use crate::transport::http::handlers::common;
use crate::transport::http::types::{
    AppState, DateRangeParams, MessageResponse, TotalSalesResponse,
};

#[utoipa::path(
    get,
    path = "/api/sales/all",
    responses(
        (status = 200, description = "All sales joined with car info", body = [SaleWithCar]),
        (status = 500, description = "Internal server error", body = MessageResponse)
    )
)]
pub async fn list_sales_handler(State(state): State<AppState>) -> impl IntoResponse {
    match state.sales.find_all().await {
        Ok(sales) => (StatusCode::OK, Json(sales)).into_response(),
        Err(e) => common::service_failure(e).into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/api/sales/id/{id}",
    params(("id" = i32, Path, description = "Sale id")),
    responses(
        (status = 200, description = "The sale", body = SaleWithCar),
        (status = 404, description = "Sale not found", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    )
)]
pub async fn get_sale_handler(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> impl IntoResponse {
    match state.sales.find_by_id(id).await {
        Ok(Some(sale)) => (StatusCode::OK, Json(sale)).into_response(),
        Ok(None) => common::not_found("Sale not found").into_response(),
        Err(e) => common::service_failure(e).into_response(),
    }
}

#[utoipa::path(
    post,
    path = "/api/sales",
    request_body = NewSale,
    responses(
        (status = 201, description = "Sale created, car stock decremented", body = SaleWithCar),
        (status = 409, description = "Car is out of stock", body = MessageResponse),
        (status = 422, description = "Invalid JSON body", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    )
)]
pub async fn create_sale_handler(
    State(state): State<AppState>,
    request: Result<Json<NewSale>, JsonRejection>,
) -> impl IntoResponse {
    let Json(new_sale) = match request {
        Ok(v) => v,
        Err(e) => {
            return common::json_422(e, "{\"car_id\", \"customer_name\", \"sale_price\"}")
                .into_response()
        }
    };
    match state.sales.create(new_sale).await {
        Ok(sale) => (StatusCode::CREATED, Json(sale)).into_response(),
        Err(e) => common::service_failure(e).into_response(),
    }
}

#[utoipa::path(
    put,
    path = "/api/sales/id/{id}",
    params(("id" = i32, Path, description = "Sale id")),
    request_body = SaleUpdate,
    responses(
        (status = 200, description = "Sale updated", body = SaleWithCar),
        (status = 404, description = "Sale not found", body = MessageResponse),
        (status = 422, description = "Invalid JSON body", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    )
)]
pub async fn update_sale_handler(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    request: Result<Json<SaleUpdate>, JsonRejection>,
) -> impl IntoResponse {
    let Json(changes) = match request {
        Ok(v) => v,
        Err(e) => return common::json_422(e, "partial sale fields").into_response(),
    };
    match state.sales.update(id, changes).await {
        Ok(Some(sale)) => (StatusCode::OK, Json(sale)).into_response(),
        Ok(None) => common::not_found("Sale not found").into_response(),
        Err(e) => common::service_failure(e).into_response(),
    }
}

#[utoipa::path(
    delete,
    path = "/api/sales/id/{id}",
    params(("id" = i32, Path, description = "Sale id")),
    responses(
        (status = 200, description = "Sale deleted, car stock restored", body = MessageResponse),
        (status = 404, description = "Sale not found", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    )
)]
pub async fn delete_sale_handler(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> impl IntoResponse {
    match state.sales.delete(id).await {
        Ok(true) => (
            StatusCode::OK,
            Json(MessageResponse {
                message: "Sale deleted successfully".to_string(),
            }),
        )
            .into_response(),
        Ok(false) => common::not_found("Sale not found").into_response(),
        Err(e) => common::service_failure(e).into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/api/sales/car/{carId}",
    params(("carId" = i32, Path, description = "Car id")),
    responses(
        (status = 200, description = "Sales of the given car", body = [SaleWithCar]),
        (status = 500, description = "Internal server error", body = MessageResponse)
    )
)]
pub async fn sales_by_car_handler(
    State(state): State<AppState>,
    Path(car_id): Path<i32>,
) -> impl IntoResponse {
    match state.sales.find_by_car(car_id).await {
        Ok(sales) => (StatusCode::OK, Json(sales)).into_response(),
        Err(e) => common::service_failure(e).into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/api/sales/customer/{name}",
    params(("name" = String, Path, description = "Customer name substring, case-insensitive")),
    responses(
        (status = 200, description = "Sales matching the customer name", body = [SaleWithCar]),
        (status = 500, description = "Internal server error", body = MessageResponse)
    )
)]
pub async fn sales_by_customer_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> impl IntoResponse {
    match state.sales.find_by_customer(&name).await {
        Ok(sales) => (StatusCode::OK, Json(sales)).into_response(),
        Err(e) => common::service_failure(e).into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/api/sales/date-range",
    params(DateRangeParams),
    responses(
        (status = 200, description = "Sales inside the inclusive date range", body = [SaleWithCar]),
        (status = 400, description = "Missing or invalid date parameters", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    )
)]
pub async fn sales_by_date_range_handler(
    State(state): State<AppState>,
    Query(params): Query<DateRangeParams>,
) -> impl IntoResponse {
    let (Some(start_raw), Some(end_raw)) = (params.start_date, params.end_date) else {
        return common::bad_request("Start date and end date are required").into_response();
    };

    let start = match common::parse_date_param(&start_raw) {
        Ok(v) => v,
        Err(e) => return common::bad_request(&e).into_response(),
    };
    let end = match common::parse_date_param(&end_raw) {
        Ok(v) => v,
        Err(e) => return common::bad_request(&e).into_response(),
    };

    match state.sales.find_by_date_range(start, end).await {
        Ok(sales) => (StatusCode::OK, Json(sales)).into_response(),
        Err(e) => common::service_failure(e).into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/api/sales/total-sales",
    responses(
        (status = 200, description = "Sum of all sale prices (0 when there are none)", body = TotalSalesResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    )
)]
pub async fn total_sales_handler(State(state): State<AppState>) -> impl IntoResponse {
    match state.sales.total_sales().await {
        Ok(total) => (
            StatusCode::OK,
            Json(TotalSalesResponse { total_sales: total }),
        )
            .into_response(),
        Err(e) => common::service_failure(e).into_response(),
    }
}
