pub mod case;
pub mod contact;
pub mod payment;

/// Character-safe prefix truncation for free-text fields.
pub fn clip(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
