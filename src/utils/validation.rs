use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use crate::utils::error::{ReminderError, Result};

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\w.-]+@[\w.-]+\.\w{2,}$").unwrap());

static PHONE_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{10}$").unwrap());

/// Check that an email address is formatted local-part@domain.tld.
pub fn is_valid_email(candidate: &str) -> bool {
    EMAIL_PATTERN.is_match(candidate)
}

/// Check that a phone number is formatted 5555555555: exactly ten digits,
/// no separators, no country code.
pub fn is_valid_phone(candidate: &str) -> bool {
    PHONE_PATTERN.is_match(candidate)
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(ReminderError::InvalidConfigValue {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(ReminderError::InvalidConfigValue {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(ReminderError::InvalidConfigValue {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}
