// config.rs
use dotenvy::dotenv;
use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub stripe_secret_key: String,
    pub stripe_api_base: String,
    pub stripe_timeout_secs: u64,
    /// Flat service fee in minor currency units ($497.00).
    pub service_fee_amount: i64,
    pub service_fee_currency: String,
    /// Simulated casework delay after a confirmed payment, in milliseconds.
    pub confirm_delay_ms: u64,
    /// Simulated processing delay after a contact submission, in milliseconds.
    pub contact_delay_ms: u64,
    pub port: u16,
    pub host: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        dotenv().ok();

        AppConfig {
            stripe_secret_key: env::var("STRIPE_SECRET_KEY")
                .expect("STRIPE_SECRET_KEY must be set"),
            stripe_api_base: env::var("STRIPE_API_BASE")
                .unwrap_or_else(|_| "https://api.stripe.com".to_string()),
            stripe_timeout_secs: env::var("STRIPE_TIMEOUT_SECS")
                .unwrap_or_else(|_| "15".to_string())
                .parse()
                .expect("STRIPE_TIMEOUT_SECS must be a number"),
            service_fee_amount: env::var("SERVICE_FEE_AMOUNT")
                .unwrap_or_else(|_| "49700".to_string())
                .parse()
                .expect("SERVICE_FEE_AMOUNT must be a number"),
            service_fee_currency: env::var("SERVICE_FEE_CURRENCY")
                .unwrap_or_else(|_| "usd".to_string()),
            confirm_delay_ms: env::var("CONFIRM_DELAY_MS")
                .unwrap_or_else(|_| "1500".to_string())
                .parse()
                .expect("CONFIRM_DELAY_MS must be a number"),
            contact_delay_ms: env::var("CONTACT_DELAY_MS")
                .unwrap_or_else(|_| "1000".to_string())
                .parse()
                .expect("CONTACT_DELAY_MS must be a number"),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .expect("PORT must be a number"),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
        }
    }

    pub fn is_live(&self) -> bool {
        self.stripe_secret_key.starts_with("sk_live_")
    }

    pub fn get_config_info(&self) -> serde_json::Value {
        serde_json::json!({
            "stripe_key_set": !self.stripe_secret_key.is_empty(),
            "stripe_mode": if self.is_live() { "live" } else { "test" },
            "stripe_api_base": self.stripe_api_base,
            "stripe_timeout_secs": self.stripe_timeout_secs,
            "service_fee_amount": self.service_fee_amount,
            "service_fee_currency": self.service_fee_currency,
            "port": self.port,
            "host": self.host,
        })
    }
}
