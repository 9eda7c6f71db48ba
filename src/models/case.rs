// models/case.rs
use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use serde::Serialize;

/// Cases open in this state and never transition anywhere else in this
/// service; downstream systems own the rest of the lifecycle.
pub const CASE_STATUS_ACTIVE: &str = "active";

/// Stored against the Stripe customer and echoed into the case when the
/// client never described their dispute.
pub const NO_DISPUTE_PLACEHOLDER: &str = "No description provided";

/// Promised resolution window communicated to the client.
pub const RESOLUTION_DAYS: i64 = 7;

const SUFFIX_LEN: usize = 5;
const BASE36: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// A dispute-resolution engagement synthesized after a confirmed payment.
/// Handed to the [`CaseStore`](crate::services::case_store::CaseStore) and
/// then discarded; nothing in this service reads a case back.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseRecord {
    pub case_id: String,
    pub payment_intent_id: String,
    pub customer_id: String,
    pub customer_name: Option<String>,
    pub customer_email: Option<String>,
    pub customer_phone: Option<String>,
    /// Minor currency units, as charged.
    pub amount_paid: i64,
    pub currency: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub estimated_resolution: DateTime<Utc>,
    pub dispute: String,
}

impl CaseRecord {
    /// Creation time and estimated-resolution horizon for a case opened now.
    pub fn open_window(now: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
        (now, now + Duration::days(RESOLUTION_DAYS))
    }
}

/// Case id issued on payment confirmation:
/// `CASE-<base36 millis>-<5 random chars>`, uppercase throughout. Uniqueness
/// rests on wall-clock granularity plus the suffix; good enough for intake
/// volume, not a hard guarantee.
pub fn confirmation_case_id() -> String {
    format!(
        "CASE-{}-{}",
        to_base36(Utc::now().timestamp_millis()),
        random_suffix(SUFFIX_LEN)
    )
}

/// Lighter-weight id for contact-form submissions: timestamp only, no
/// suffix. Weaker than the confirmation form by design of the original flow.
pub fn contact_case_id() -> String {
    format!("CASE-{}", to_base36(Utc::now().timestamp_millis()))
}

fn to_base36(mut value: i64) -> String {
    debug_assert!(value >= 0);
    if value == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while value > 0 {
        digits.push(BASE36[(value % 36) as usize]);
        value /= 36;
    }
    digits.reverse();
    String::from_utf8(digits).expect("base36 digits are ascii")
}

fn random_suffix(len: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    #[test]
    fn base36_encodes_known_values() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "Z");
        assert_eq!(to_base36(36), "10");
        assert_eq!(to_base36(36 * 36 - 1), "ZZ");
    }

    #[test]
    fn confirmation_id_has_timestamp_and_suffix() {
        let pattern = Regex::new(r"^CASE-[0-9A-Z]+-[0-9A-Z]{5}$").expect("pattern");
        let id = confirmation_case_id();
        assert!(pattern.is_match(&id), "unexpected id: {id}");
    }

    #[test]
    fn contact_id_is_timestamp_only() {
        let pattern = Regex::new(r"^CASE-[0-9A-Z]+$").expect("pattern");
        let id = contact_case_id();
        assert!(pattern.is_match(&id), "unexpected id: {id}");
        assert_eq!(id.matches('-').count(), 1);
    }

    #[test]
    fn consecutive_confirmation_ids_differ() {
        // Same millisecond is likely here; the suffix must still separate them.
        let a = confirmation_case_id();
        let b = confirmation_case_id();
        assert_ne!(a, b);
    }

    #[test]
    fn open_window_spans_seven_days() {
        let now = Utc::now();
        let (created, resolution) = CaseRecord::open_window(now);
        assert_eq!(created, now);
        assert_eq!(resolution - created, Duration::days(7));
    }

    #[test]
    fn case_record_serializes_camel_case() {
        let (created_at, estimated_resolution) = CaseRecord::open_window(Utc::now());
        let record = CaseRecord {
            case_id: "CASE-ABC123-XYZ01".to_string(),
            payment_intent_id: "pi_1".to_string(),
            customer_id: "cus_1".to_string(),
            customer_name: Some("Jo Client".to_string()),
            customer_email: Some("jo@example.com".to_string()),
            customer_phone: None,
            amount_paid: 49700,
            currency: "usd".to_string(),
            status: CASE_STATUS_ACTIVE.to_string(),
            created_at,
            estimated_resolution,
            dispute: NO_DISPUTE_PLACEHOLDER.to_string(),
        };
        let json = serde_json::to_value(&record).expect("serialize");
        assert_eq!(json["caseId"], "CASE-ABC123-XYZ01");
        assert_eq!(json["paymentIntentId"], "pi_1");
        assert_eq!(json["amountPaid"], 49700);
        assert_eq!(json["status"], "active");
        assert!(json["createdAt"].is_string());
        assert!(json["estimatedResolution"].is_string());
    }
}
