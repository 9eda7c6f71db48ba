// services/stripe_service.rs
use std::collections::HashMap;
use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;
use tracing::{error, info};

use crate::config::AppConfig;
use crate::models::case::NO_DISPUTE_PLACEHOLDER;
use crate::models::clip;

/// Terminal payment-intent state that permits case creation.
pub const PAYMENT_SUCCEEDED: &str = "succeeded";

/// Customer metadata key holding the client's dispute description.
pub const DISPUTE_METADATA_KEY: &str = "dispute_description";

/// Stripe caps metadata values at 500 characters.
pub const DISPUTE_METADATA_LIMIT: usize = 500;

const SERVICE_TAG: &str = "dispute_resolution";
const CASE_TYPE_TAG: &str = "consumer_dispute";
const INTENT_DESCRIPTION: &str = "Dispute Resolution Service - $497 Flat Fee";

#[derive(Debug, Error)]
pub enum StripeError {
    /// Message from Stripe's error envelope, passed through verbatim.
    #[error("{0}")]
    Api(String),

    #[error("Stripe request failed: {0}")]
    Http(#[from] reqwest::Error),
}

#[derive(Debug, Clone, Deserialize)]
pub struct PaymentIntent {
    pub id: String,
    pub status: String,
    pub amount: i64,
    pub currency: String,
    #[serde(default)]
    pub customer: Option<String>,
    #[serde(default)]
    pub client_secret: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Customer {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub metadata: HashMap<String, String>,
}

#[derive(Debug, Deserialize)]
struct CustomerList {
    data: Vec<Customer>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Details for a new billing customer; email and name are validated upstream.
#[derive(Debug)]
pub struct CustomerProfile {
    pub email: String,
    pub name: String,
    pub phone: Option<String>,
    pub dispute: Option<String>,
}

#[derive(Debug)]
pub struct NewPaymentIntent {
    pub amount: i64,
    pub currency: String,
    pub customer_id: String,
    pub customer_name: String,
    pub customer_email: String,
}

/// Thin client over the Stripe REST API. All calls share one pooled reqwest
/// client with a bounded timeout; no retries, every failure surfaces to the
/// handler.
#[derive(Debug, Clone)]
pub struct StripeService {
    client: Client,
    api_base: String,
    secret_key: String,
}

impl StripeService {
    pub fn new(config: &AppConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.stripe_timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        StripeService {
            client,
            api_base: config.stripe_api_base.trim_end_matches('/').to_string(),
            secret_key: config.stripe_secret_key.clone(),
        }
    }

    pub async fn retrieve_payment_intent(&self, id: &str) -> Result<PaymentIntent, StripeError> {
        let url = format!("{}/v1/payment_intents/{}", self.api_base, id);
        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.secret_key)
            .send()
            .await?;
        self.decode(response).await
    }

    pub async fn retrieve_customer(&self, id: &str) -> Result<Customer, StripeError> {
        let url = format!("{}/v1/customers/{}", self.api_base, id);
        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.secret_key)
            .send()
            .await?;
        self.decode(response).await
    }

    /// Exact-match lookup, first hit only.
    pub async fn find_customer_by_email(
        &self,
        email: &str,
    ) -> Result<Option<Customer>, StripeError> {
        let url = format!("{}/v1/customers", self.api_base);
        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.secret_key)
            .query(&[("email", email), ("limit", "1")])
            .send()
            .await?;
        let list: CustomerList = self.decode(response).await?;
        Ok(list.data.into_iter().next())
    }

    pub async fn create_customer(&self, profile: &CustomerProfile) -> Result<Customer, StripeError> {
        info!("Creating Stripe customer for {}", profile.email);

        let dispute = clip(
            profile.dispute.as_deref().unwrap_or(NO_DISPUTE_PLACEHOLDER),
            DISPUTE_METADATA_LIMIT,
        );
        let mut form: Vec<(String, String)> = vec![
            ("email".to_string(), profile.email.clone()),
            ("name".to_string(), profile.name.clone()),
            (format!("metadata[{}]", DISPUTE_METADATA_KEY), dispute),
        ];
        if let Some(phone) = &profile.phone {
            form.push(("phone".to_string(), phone.clone()));
        }

        let url = format!("{}/v1/customers", self.api_base);
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.secret_key)
            .form(&form)
            .send()
            .await?;
        self.decode(response).await
    }

    pub async fn create_payment_intent(
        &self,
        intent: &NewPaymentIntent,
    ) -> Result<PaymentIntent, StripeError> {
        info!(
            "Creating payment intent: {} {} for {}",
            intent.amount, intent.currency, intent.customer_id
        );

        let form: Vec<(&str, String)> = vec![
            ("amount", intent.amount.to_string()),
            ("currency", intent.currency.clone()),
            ("customer", intent.customer_id.clone()),
            ("automatic_payment_methods[enabled]", "true".to_string()),
            ("description", INTENT_DESCRIPTION.to_string()),
            ("metadata[service]", SERVICE_TAG.to_string()),
            ("metadata[customer_name]", intent.customer_name.clone()),
            ("metadata[customer_email]", intent.customer_email.clone()),
            ("metadata[case_type]", CASE_TYPE_TAG.to_string()),
        ];

        let url = format!("{}/v1/payment_intents", self.api_base);
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.secret_key)
            .form(&form)
            .send()
            .await?;
        self.decode(response).await
    }

    async fn decode<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, StripeError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json::<T>().await?);
        }

        let body = response.text().await.unwrap_or_default();
        error!("Stripe call failed: {} - {}", status, body);
        let message = serde_json::from_str::<ErrorEnvelope>(&body)
            .ok()
            .and_then(|envelope| envelope.error.message)
            .unwrap_or_else(|| format!("Stripe returned {}", status));
        Err(StripeError::Api(message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_envelope_exposes_the_message() {
        let envelope: ErrorEnvelope = serde_json::from_str(
            r#"{"error":{"message":"No such payment_intent: 'pi_404'","type":"invalid_request_error"}}"#,
        )
        .expect("envelope");
        assert_eq!(
            envelope.error.message.as_deref(),
            Some("No such payment_intent: 'pi_404'")
        );
    }

    #[test]
    fn customer_metadata_defaults_to_empty() {
        let customer: Customer =
            serde_json::from_str(r#"{"id":"cus_1","email":"jo@example.com"}"#).expect("customer");
        assert!(customer.metadata.is_empty());
        assert_eq!(customer.name, None);
    }

    #[test]
    fn payment_intent_tolerates_absent_customer() {
        let intent: PaymentIntent = serde_json::from_str(
            r#"{"id":"pi_1","status":"requires_payment_method","amount":49700,"currency":"usd"}"#,
        )
        .expect("intent");
        assert_eq!(intent.customer, None);
        assert_eq!(intent.client_secret, None);
    }
}
