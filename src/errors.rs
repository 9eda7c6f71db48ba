// src/errors.rs
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    /// The request was fine but the payment has not succeeded yet. A normal
    /// outcome while the card flow is still in progress, not a fault.
    #[error("Payment not completed (status: {status})")]
    PaymentNotCompleted { status: String },

    #[error("Customer setup failed: {0}")]
    CustomerSetup(String),

    #[error("Payment processing error: {0}")]
    PaymentProcessing(String),

    #[error("Payment confirmation failed: {0}")]
    PaymentConfirmation(String),

    #[error("Contact form processing failed: {0}")]
    ContactProcessing(String),

    #[error("Method not allowed")]
    MethodNotAllowed,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::Validation(message) => {
                (StatusCode::BAD_REQUEST, json!({ "error": message }))
            }
            AppError::PaymentNotCompleted { status } => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": "Payment not completed",
                    "status": status,
                }),
            ),
            // The underlying processor message is logged at the call site;
            // clients get the fixed body the frontend expects.
            AppError::CustomerSetup(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": "Failed to create customer" }),
            ),
            AppError::PaymentProcessing(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({
                    "error": "Payment processing error",
                    "message": message,
                }),
            ),
            AppError::PaymentConfirmation(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({
                    "error": "Payment confirmation failed",
                    "message": message,
                }),
            ),
            AppError::ContactProcessing(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({
                    "error": "Internal server error",
                    "message": "Failed to process contact form",
                }),
            ),
            AppError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                json!({ "error": "Method not allowed" }),
            ),
        };

        (status, Json(body)).into_response()
    }
}

impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(error: AppError) -> (StatusCode, serde_json::Value) {
        let response = error.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        (status, serde_json::from_slice(&bytes).expect("json"))
    }

    #[tokio::test]
    async fn validation_maps_to_400_with_message_as_error() {
        let (status, body) = body_json(AppError::validation("Missing required fields")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, serde_json::json!({ "error": "Missing required fields" }));
    }

    #[tokio::test]
    async fn payment_not_completed_echoes_processor_status() {
        let (status, body) = body_json(AppError::PaymentNotCompleted {
            status: "requires_payment_method".to_string(),
        })
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Payment not completed");
        assert_eq!(body["status"], "requires_payment_method");
    }

    #[tokio::test]
    async fn customer_setup_hides_upstream_detail() {
        let (status, body) =
            body_json(AppError::CustomerSetup("card network unreachable".to_string())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, serde_json::json!({ "error": "Failed to create customer" }));
    }

    #[tokio::test]
    async fn confirmation_failure_passes_upstream_message_through() {
        let (status, body) = body_json(AppError::PaymentConfirmation(
            "No such payment_intent: 'pi_404'".to_string(),
        ))
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Payment confirmation failed");
        assert_eq!(body["message"], "No such payment_intent: 'pi_404'");
    }

    #[tokio::test]
    async fn contact_processing_is_generic_to_the_caller() {
        let (status, body) =
            body_json(AppError::ContactProcessing("store offline".to_string())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Internal server error");
        assert_eq!(body["message"], "Failed to process contact form");
    }

    #[tokio::test]
    async fn method_not_allowed_is_405() {
        let (status, body) = body_json(AppError::MethodNotAllowed).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body, serde_json::json!({ "error": "Method not allowed" }));
    }
}
