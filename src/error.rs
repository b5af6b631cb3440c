//! Error types and their HTTP representations.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

const DATE_FORMAT_NOTE: &str = "Place a date in the format: yyyy-mm-dd or yyyymmdd";
const RANGE_FORMAT_NOTE: &str = "Alter the dates to the format: yyyy-mm-dd or yyyymmdd";

/// Errors a request handler can produce.
///
/// Caller input errors map to 404 with a structured JSON body; anything the
/// data source reports is a deployment problem and maps to a bare 500.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("The specified date '{value}' is not in the correct format.")]
    MalformedDate { value: String },

    #[error("One of the specified dates '{start}' or '{end}' is not in the correct format.")]
    MalformedRange { start: String, end: String },

    #[error(
        "The end date '{end}' can not be less than the start date '{start}'. Please adjust your date values."
    )]
    EndBeforeStart { start: String, end: String },

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    note: Option<&'static str>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let note = match &self {
            ApiError::MalformedDate { .. } => Some(DATE_FORMAT_NOTE),
            ApiError::MalformedRange { .. } => Some(RANGE_FORMAT_NOTE),
            ApiError::EndBeforeStart { .. } => None,
            ApiError::Database(source) => {
                tracing::error!(%source, "data source failure");
                let body = ErrorBody {
                    error: "internal server error".to_string(),
                    note: None,
                };
                return (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response();
            }
        };

        let body = ErrorBody {
            error: self.to_string(),
            note,
        };
        (StatusCode::NOT_FOUND, Json(body)).into_response()
    }
}
