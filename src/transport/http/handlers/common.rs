use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::Json;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

use crate::app::error::ServiceError;
use crate::transport::http::types::MessageResponse;

pub fn not_found(message: &str) -> (StatusCode, Json<MessageResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(MessageResponse {
            message: message.to_string(),
        }),
    )
}

pub fn bad_request(message: &str) -> (StatusCode, Json<MessageResponse>) {
    (
        StatusCode::BAD_REQUEST,
        Json(MessageResponse {
            message: message.to_string(),
        }),
    )
}

/// Maps a service failure to its response. Out-of-stock is the one expected
/// conflict; everything else is logged and answered with the fixed 500 body.
pub fn service_failure(err: ServiceError) -> (StatusCode, Json<MessageResponse>) {
    match err {
        ServiceError::OutOfStock { .. } => (
            StatusCode::CONFLICT,
            Json(MessageResponse {
                message: "Car is out of stock".to_string(),
            }),
        ),
        other => {
            eprintln!("request failed: {}", other);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(MessageResponse {
                    message: "Internal server error".to_string(),
                }),
            )
        }
    }
}

pub fn json_422(err: JsonRejection, expected: &str) -> (StatusCode, Json<MessageResponse>) {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(MessageResponse {
            message: format!("Invalid JSON body: {} (expected: {})", err, expected),
        }),
    )
}

/// Parses a date-range query parameter. Accepts RFC3339, `YYYY-MM-DD` (taken
/// as midnight UTC, which keeps `BETWEEN` inclusive of the start date) and
/// `YYYY-MM-DD HH:MM:SS`.
pub fn parse_date_param(s: &str) -> Result<DateTime<Utc>, String> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(ndt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return Ok(Utc.from_utc_datetime(&ndt));
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(Utc.from_utc_datetime(&d.and_time(NaiveTime::MIN)));
    }
    Err(format!("invalid date '{}'", s))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn parses_plain_dates_as_midnight_utc() {
        let dt = parse_date_param("2025-05-01").unwrap();
        assert_eq!(dt.to_rfc3339(), "2025-05-01T00:00:00+00:00");
        assert_eq!(dt.hour(), 0);
    }

    #[test]
    fn parses_rfc3339_with_offset() {
        let dt = parse_date_param("2025-05-01T12:30:00+02:00").unwrap();
        assert_eq!(dt.to_rfc3339(), "2025-05-01T10:30:00+00:00");
    }

    #[test]
    fn parses_space_separated_datetimes() {
        let dt = parse_date_param("2025-05-01 08:15:00").unwrap();
        assert_eq!(dt.hour(), 8);
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_date_param("not-a-date").is_err());
        assert!(parse_date_param("2025-13-40").is_err());
    }
}
