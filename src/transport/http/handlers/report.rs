use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::transport::http::types::{AppState, MessageResponse, ReportResponse};

#[utoipa::path(
    get,
    path = "/api/report",
    responses(
        (status = 200, description = "Report rendered and uploaded", body = ReportResponse),
        (status = 500, description = "Report generation or upload failed", body = MessageResponse)
    )
)]
pub async fn generate_report_handler(State(state): State<AppState>) -> impl IntoResponse {
    match state.reports.generate().await {
        Ok(report) => (
            StatusCode::OK,
            Json(ReportResponse {
                message: "Report generated and uploaded successfully".to_string(),
                location: report.location,
                key: report.key,
            }),
        )
            .into_response(),
        Err(e) => {
            eprintln!("report generation failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(MessageResponse {
                    message: "Error generating report".to_string(),
                }),
            )
                .into_response()
        }
    }
}
