pub mod contact_handlers;
pub mod payment_handlers;

use axum::http::StatusCode;

use crate::errors::AppError;

/// CORS preflight. The fixed response headers are attached by router layers,
/// so an empty 200 is all that is needed here.
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

/// Catch-all for any method other than POST/OPTIONS on the intake endpoints.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
