use axum::{routing::post, Json, Router};
use chrono::Utc;
use serde_json::json;

use crate::handlers::{method_not_allowed, payment_handlers, preflight};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/create-payment-intent",
            post(payment_handlers::create_payment_intent)
                .options(preflight)
                .fallback(method_not_allowed),
        )
        .route(
            "/confirm-payment",
            post(payment_handlers::confirm_payment)
                .options(preflight)
                .fallback(method_not_allowed),
        )
        .route("/payments/health", axum::routing::get(payments_health))
}

async fn payments_health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "service": "payments",
        "timestamp": Utc::now().to_rfc3339(),
        "features": ["create-payment-intent", "confirm-payment"]
    }))
}
