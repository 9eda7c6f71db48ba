// models/contact.rs
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Body of `POST /api/contact-form`. Optional at the wire level; the handler
/// enforces which fields are required.
#[derive(Debug, Deserialize)]
pub struct ContactFormRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub dispute: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactFormResponse {
    pub success: bool,
    pub message: String,
    pub case_id: String,
    pub estimated_response: String,
}

static EMAIL_PATTERN: OnceLock<Regex> = OnceLock::new();

/// The same permissive check the signup form applies client-side: something
/// before the `@`, something after it, and a dot in the domain. Deliberately
/// not RFC 5322.
pub fn email_looks_valid(email: &str) -> bool {
    let pattern = EMAIL_PATTERN
        .get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern"));
    pattern.is_match(email)
}
