// handlers/payment_handlers.rs
use axum::extract::{Json, State};
use chrono::Utc;
use tracing::{error, info};

use crate::errors::{AppError, Result};
use crate::models::case::{self, CaseRecord, CASE_STATUS_ACTIVE, NO_DISPUTE_PLACEHOLDER};
use crate::models::payment::{
    ConfirmPaymentRequest, ConfirmPaymentResponse, CreateIntentRequest, CreateIntentResponse,
};
use crate::services::stripe_service::{
    CustomerProfile, NewPaymentIntent, DISPUTE_METADATA_KEY, PAYMENT_SUCCEEDED,
};
use crate::state::AppState;

const NEXT_STEPS: [&str; 4] = [
    "Confirmation email sent",
    "Case assessment within 2 hours",
    "Strategy video within 24 hours",
    "Direct contact from specialist",
];

/// Looks up or creates the billing customer, then opens a payment intent for
/// the flat service fee.
pub async fn create_payment_intent(
    State(state): State<AppState>,
    Json(request): Json<CreateIntentRequest>,
) -> Result<Json<CreateIntentResponse>> {
    let amount = request.amount.unwrap_or(state.config.service_fee_amount);
    let currency = request
        .currency
        .clone()
        .unwrap_or_else(|| state.config.service_fee_currency.clone());

    let Some(customer_info) = request.customer_info.as_ref() else {
        return Err(AppError::validation("Customer information required"));
    };
    let (email, name) = match (customer_info.email.as_deref(), customer_info.name.as_deref()) {
        (Some(email), Some(name)) if !email.is_empty() && !name.is_empty() => {
            (email.to_string(), name.to_string())
        }
        _ => return Err(AppError::validation("Customer information required")),
    };

    info!("Creating payment intent: {} {} for {}", amount, currency, email);

    let customer = match state.stripe.find_customer_by_email(&email).await {
        Ok(Some(existing)) => {
            info!("Reusing existing customer {}", existing.id);
            existing
        }
        Ok(None) => state
            .stripe
            .create_customer(&CustomerProfile {
                email: email.clone(),
                name: name.clone(),
                phone: customer_info.phone.clone(),
                dispute: customer_info.dispute.clone(),
            })
            .await
            .map_err(|e| {
                error!("Customer creation failed: {}", e);
                AppError::CustomerSetup(e.to_string())
            })?,
        Err(e) => {
            error!("Customer lookup failed: {}", e);
            return Err(AppError::CustomerSetup(e.to_string()));
        }
    };

    let intent = state
        .stripe
        .create_payment_intent(&NewPaymentIntent {
            amount,
            currency: currency.clone(),
            customer_id: customer.id.clone(),
            customer_name: name,
            customer_email: email,
        })
        .await
        .map_err(|e| {
            error!("Payment intent creation failed: {}", e);
            AppError::PaymentProcessing(e.to_string())
        })?;

    let client_secret = intent.client_secret.ok_or_else(|| {
        AppError::PaymentProcessing("payment intent has no client secret".to_string())
    })?;

    Ok(Json(CreateIntentResponse {
        client_secret,
        payment_intent_id: intent.id,
        customer_id: customer.id,
        amount,
        currency,
    }))
}

/// Verifies the intent succeeded, synthesizes the case record, hands it to
/// the case store, and returns the receipt the frontend renders.
pub async fn confirm_payment(
    State(state): State<AppState>,
    Json(request): Json<ConfirmPaymentRequest>,
) -> Result<Json<ConfirmPaymentResponse>> {
    let payment_intent_id = match request.payment_intent_id.as_deref() {
        Some(id) if !id.is_empty() => id.to_string(),
        _ => return Err(AppError::validation("Payment intent ID required")),
    };

    let intent = state
        .stripe
        .retrieve_payment_intent(&payment_intent_id)
        .await
        .map_err(|e| {
            error!("Payment intent retrieval failed: {}", e);
            AppError::PaymentConfirmation(e.to_string())
        })?;

    if intent.status != PAYMENT_SUCCEEDED {
        info!(
            "Payment {} not completed yet (status: {})",
            payment_intent_id, intent.status
        );
        return Err(AppError::PaymentNotCompleted {
            status: intent.status,
        });
    }

    let case_id = case::confirmation_case_id();

    let customer_id = intent.customer.clone().ok_or_else(|| {
        AppError::PaymentConfirmation("payment intent has no customer attached".to_string())
    })?;
    let customer = state.stripe.retrieve_customer(&customer_id).await.map_err(|e| {
        error!("Customer retrieval failed: {}", e);
        AppError::PaymentConfirmation(e.to_string())
    })?;

    let (created_at, estimated_resolution) = CaseRecord::open_window(Utc::now());
    let record = CaseRecord {
        case_id: case_id.clone(),
        payment_intent_id,
        customer_id: customer.id.clone(),
        customer_name: customer.name.clone(),
        customer_email: customer.email.clone(),
        customer_phone: customer.phone.clone(),
        amount_paid: intent.amount,
        currency: intent.currency.clone(),
        status: CASE_STATUS_ACTIVE.to_string(),
        created_at,
        estimated_resolution,
        dispute: customer
            .metadata
            .get(DISPUTE_METADATA_KEY)
            .cloned()
            .unwrap_or_else(|| NO_DISPUTE_PLACEHOLDER.to_string()),
    };

    state.cases.save(&record).await.map_err(|e| {
        error!("Case store rejected {}: {}", case_id, e);
        AppError::PaymentConfirmation(e.to_string())
    })?;

    // Emulates the casework kickoff the original flow performed inline.
    tokio::time::sleep(std::time::Duration::from_millis(state.config.confirm_delay_ms)).await;

    Ok(Json(ConfirmPaymentResponse {
        success: true,
        message: "Payment confirmed and case created".to_string(),
        case_id,
        payment_status: PAYMENT_SUCCEEDED.to_string(),
        amount_paid: intent.amount as f64 / 100.0,
        currency: intent.currency.to_uppercase(),
        estimated_resolution: "7 days".to_string(),
        next_steps: NEXT_STEPS,
    }))
}
