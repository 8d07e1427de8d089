// Encoder endpoints.

use salvo::{Router, http::StatusCode, writing::Json};

use quickcode_service::encode::phone::{PhoneFormatter, formatter_for};

use crate::app::api::ENCODE_ROUTE_COMPONENT;
use crate::config::Settings;
use crate::error::AppError;

pub mod field;
pub mod matrix;
pub mod share;
pub mod types;

#[cfg(test)]
mod matrix_tests;

use types::ErrorResponse;

#[must_use]
pub fn routes() -> Router {
    Router::with_path(ENCODE_ROUTE_COMPONENT)
        .post(field::encode)
        .push(Router::with_path("share").post(share::encode_share))
        .push(Router::with_path("matrix").post(matrix::encode_matrix))
}

/// Phone formatter for the configured style.
fn phone_formatter(settings: &Settings) -> Box<dyn PhoneFormatter> {
    formatter_for(settings.phone.style)
}

/// ## Summary
/// Writes `error` as a JSON error body with its mapped status code.
fn render_error(res: &mut salvo::Response, error: &AppError) {
    let status = error.status_code();
    if status == StatusCode::INTERNAL_SERVER_ERROR {
        tracing::error!(error = %error, "Encode request failed");
    } else {
        tracing::debug!(error = %error, status = %status, "Encode request produced no result");
    }
    res.status_code(status);
    res.render(Json(ErrorResponse {
        error: error.to_string(),
    }));
}

/// ## Summary
/// Rejects a body that could not be parsed.
fn render_bad_body(res: &mut salvo::Response, error: &salvo::http::ParseError) {
    tracing::error!(error = ?error, "Failed to parse encode request");
    res.status_code(StatusCode::BAD_REQUEST);
    res.render(Json(ErrorResponse {
        error: "Invalid request body".to_string(),
    }));
}
