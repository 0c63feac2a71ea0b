use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Error payload returned for lookup failures and bad requests.
#[derive(Serialize)]
pub struct ErrorBody {
    pub status: &'static str,
    pub message: String,
}

pub struct ApiError {
    pub code: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn not_found(err: metroboard::display::Error) -> Self {
        Self {
            code: StatusCode::NOT_FOUND,
            message: err.to_string(),
        }
    }

    pub fn missing_param(name: &str) -> Self {
        Self {
            code: StatusCode::BAD_REQUEST,
            message: format!("missing query parameter: {name}"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            status: "error",
            message: self.message,
        };
        (self.code, Json(body)).into_response()
    }
}
