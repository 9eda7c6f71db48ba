// handlers/contact_handlers.rs
use axum::extract::{Json, State};
use tracing::info;

use crate::errors::{AppError, Result};
use crate::models::case;
use crate::models::clip;
use crate::models::contact::{email_looks_valid, ContactFormRequest, ContactFormResponse};
use crate::state::AppState;

const LOG_DISPUTE_CHARS: usize = 100;

/// Accepts a free-form inquiry and issues a lightweight case id. Nothing is
/// persisted beyond the log line; the intake team works from those.
pub async fn submit_contact_form(
    State(state): State<AppState>,
    Json(request): Json<ContactFormRequest>,
) -> Result<Json<ContactFormResponse>> {
    let (name, email, dispute) = match (
        request.name.as_deref(),
        request.email.as_deref(),
        request.dispute.as_deref(),
    ) {
        (Some(name), Some(email), Some(dispute))
            if !name.is_empty() && !email.is_empty() && !dispute.is_empty() =>
        {
            (name, email, dispute)
        }
        _ => return Err(AppError::validation("Missing required fields")),
    };

    if !email_looks_valid(email) {
        return Err(AppError::validation("Invalid email format"));
    }

    let case_id = case::contact_case_id();

    // Phone is logged as supplied; no validation is applied to it.
    info!(
        "Contact form submission {}: {} <{}> phone={:?} dispute=\"{}\"",
        case_id,
        name,
        email,
        request.phone,
        clip(dispute, LOG_DISPUTE_CHARS),
    );

    tokio::time::sleep(std::time::Duration::from_millis(state.config.contact_delay_ms)).await;

    Ok(Json(ContactFormResponse {
        success: true,
        message: "Contact form submitted successfully".to_string(),
        case_id,
        estimated_response: "24 hours".to_string(),
    }))
}
