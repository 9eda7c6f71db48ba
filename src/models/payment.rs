// models/payment.rs
use serde::{Deserialize, Serialize};

/// Body of `POST /api/create-payment-intent`. Everything is optional at the
/// wire level so the handler owns validation (and its 400 bodies) instead of
/// the JSON extractor.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateIntentRequest {
    /// Minor currency units; defaults to the configured flat fee.
    pub amount: Option<i64>,
    pub currency: Option<String>,
    pub customer_info: Option<CustomerInfo>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CustomerInfo {
    pub email: Option<String>,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub dispute: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateIntentResponse {
    pub client_secret: String,
    pub payment_intent_id: String,
    pub customer_id: String,
    pub amount: i64,
    pub currency: String,
}

/// Body of `POST /api/confirm-payment`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmPaymentRequest {
    pub payment_intent_id: Option<String>,
    /// Sent by older frontend builds; accepted and ignored. The customer of
    /// record comes from the payment intent, not the caller.
    #[serde(default)]
    pub customer_info: Option<serde_json::Value>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmPaymentResponse {
    pub success: bool,
    pub message: String,
    pub case_id: String,
    pub payment_status: String,
    /// Major currency units (dollars), as shown to the client.
    pub amount_paid: f64,
    pub currency: String,
    pub estimated_resolution: String,
    pub next_steps: [&'static str; 4],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_intent_request_accepts_camel_case_wire_names() {
        let request: CreateIntentRequest = serde_json::from_value(serde_json::json!({
            "amount": 49700,
            "currency": "usd",
            "customerInfo": {
                "email": "jo@example.com",
                "name": "Jo Client",
                "dispute": "billing issue"
            }
        }))
        .expect("deserialize");
        assert_eq!(request.amount, Some(49700));
        let info = request.customer_info.expect("customer info");
        assert_eq!(info.email.as_deref(), Some("jo@example.com"));
        assert_eq!(info.phone, None);
    }

    #[test]
    fn confirm_request_tolerates_missing_and_extra_fields() {
        let empty: ConfirmPaymentRequest =
            serde_json::from_value(serde_json::json!({})).expect("deserialize");
        assert!(empty.payment_intent_id.is_none());

        let full: ConfirmPaymentRequest = serde_json::from_value(serde_json::json!({
            "paymentIntentId": "pi_123",
            "customerInfo": { "email": "jo@example.com" }
        }))
        .expect("deserialize");
        assert_eq!(full.payment_intent_id.as_deref(), Some("pi_123"));
        assert!(full.customer_info.is_some());
    }

    #[test]
    fn confirm_response_uses_frontend_field_names() {
        let response = ConfirmPaymentResponse {
            success: true,
            message: "Payment confirmed and case created".to_string(),
            case_id: "CASE-1-AAAAA".to_string(),
            payment_status: "succeeded".to_string(),
            amount_paid: 497.0,
            currency: "USD".to_string(),
            estimated_resolution: "7 days".to_string(),
            next_steps: ["a", "b", "c", "d"],
        };
        let json = serde_json::to_value(&response).expect("serialize");
        assert_eq!(json["caseId"], "CASE-1-AAAAA");
        assert_eq!(json["paymentStatus"], "succeeded");
        assert_eq!(json["amountPaid"], 497.0);
        assert_eq!(json["nextSteps"].as_array().map(|s| s.len()), Some(4));
    }
}
