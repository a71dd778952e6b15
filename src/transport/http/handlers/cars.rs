use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::domain::car::{Car, CarUpdate, NewCar};
use crate::transport::http::handlers::common;
use crate::transport::http::types::{AppState, MessageResponse};

#[utoipa::path(
    get,
    path = "/api/cars/all",
    responses(
        (status = 200, description = "All cars (capped at 100)", body = [Car]),
        (status = 500, description = "Internal server error", body = MessageResponse)
    )
)]
pub async fn list_cars_handler(State(state): State<AppState>) -> impl IntoResponse {
    match state.cars.find_all().await {
        Ok(cars) => (StatusCode::OK, Json(cars)).into_response(),
        Err(e) => common::service_failure(e).into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/api/cars/id/{id}",
    params(("id" = i32, Path, description = "Car id")),
    responses(
        (status = 200, description = "The car", body = Car),
        (status = 404, description = "Car not found", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    )
)]
pub async fn get_car_handler(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> impl IntoResponse {
    match state.cars.find_by_id(id).await {
        Ok(Some(car)) => (StatusCode::OK, Json(car)).into_response(),
        Ok(None) => common::not_found("Car not found").into_response(),
        Err(e) => common::service_failure(e).into_response(),
    }
}

#[utoipa::path(
    post,
    path = "/api/cars",
    request_body = NewCar,
    responses(
        (status = 201, description = "Car created", body = Car),
        (status = 422, description = "Invalid JSON body", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    )
)]
pub async fn create_car_handler(
    State(state): State<AppState>,
    request: Result<Json<NewCar>, JsonRejection>,
) -> impl IntoResponse {
    let Json(new_car) = match request {
        Ok(v) => v,
        Err(e) => {
            return common::json_422(e, "{\"make\", \"model\", \"year\", \"price\", \"stock\"}")
                .into_response()
        }
    };
    match state.cars.create(new_car).await {
        Ok(car) => (StatusCode::CREATED, Json(car)).into_response(),
        Err(e) => common::service_failure(e).into_response(),
    }
}

#[utoipa::path(
    put,
    path = "/api/cars/id/{id}",
    params(("id" = i32, Path, description = "Car id")),
    request_body = CarUpdate,
    responses(
        (status = 200, description = "Car updated", body = Car),
        (status = 404, description = "Car not found", body = MessageResponse),
        (status = 422, description = "Invalid JSON body", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    )
)]
pub async fn update_car_handler(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    request: Result<Json<CarUpdate>, JsonRejection>,
) -> impl IntoResponse {
    let Json(changes) = match request {
        Ok(v) => v,
        Err(e) => return common::json_422(e, "partial car fields").into_response(),
    };
    match state.cars.update(id, changes).await {
        Ok(Some(car)) => (StatusCode::OK, Json(car)).into_response(),
        Ok(None) => common::not_found("Car not found").into_response(),
        Err(e) => common::service_failure(e).into_response(),
    }
}

#[utoipa::path(
    delete,
    path = "/api/cars/id/{id}",
    params(("id" = i32, Path, description = "Car id")),
    responses(
        (status = 200, description = "Car deleted", body = MessageResponse),
        (status = 404, description = "Car not found", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    )
)]
pub async fn delete_car_handler(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> impl IntoResponse {
    match state.cars.delete(id).await {
        Ok(true) => (
            StatusCode::OK,
            Json(MessageResponse {
                message: "Car deleted successfully".to_string(),
            }),
        )
            .into_response(),
        Ok(false) => common::not_found("Car not found").into_response(),
        Err(e) => common::service_failure(e).into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/api/cars/make/{make}",
    params(("make" = String, Path, description = "Make substring, case-insensitive")),
    responses(
        (status = 200, description = "Matching cars (capped at 100)", body = [Car]),
        (status = 500, description = "Internal server error", body = MessageResponse)
    )
)]
pub async fn cars_by_make_handler(
    State(state): State<AppState>,
    Path(make): Path<String>,
) -> impl IntoResponse {
    match state.cars.find_by_make(&make).await {
        Ok(cars) => (StatusCode::OK, Json(cars)).into_response(),
        Err(e) => common::service_failure(e).into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/api/cars/inventory/in-stock",
    responses(
        (status = 200, description = "Cars with stock > 0 (capped at 100)", body = [Car]),
        (status = 500, description = "Internal server error", body = MessageResponse)
    )
)]
pub async fn in_stock_cars_handler(State(state): State<AppState>) -> impl IntoResponse {
    match state.cars.find_in_stock().await {
        Ok(cars) => (StatusCode::OK, Json(cars)).into_response(),
        Err(e) => common::service_failure(e).into_response(),
    }
}
