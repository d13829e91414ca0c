use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::env;

use crate::domain::ports::SmsTransport;
use crate::utils::error::{Result, SendError};
use crate::utils::validation::validate_url;

const DEFAULT_GATEWAY_URL: &str = "https://textbelt.com/text";

/// SMS transport over the Textbelt-style HTTP gateway: one POST per
/// recipient with a form body of {phone, message, key}.
///
/// The gateway bills per send, so the client defaults to the free test
/// mode and derives the test key by suffixing the production key with
/// `_test`. Billed sends have to be requested explicitly (`--live`).
pub struct TextbeltClient {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
    live: bool,
}

/// Response shape per the gateway's published contract. Logged in full
/// at debug level; only `success` drives the outcome.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GatewayResponse {
    success: bool,
    #[serde(default)]
    text_id: Option<u64>,
    #[serde(default)]
    quota_remaining: Option<i64>,
    #[serde(default)]
    error: Option<String>,
}

impl TextbeltClient {
    pub fn new(endpoint: impl Into<String>, api_key: Option<String>, live: bool) -> Result<Self> {
        let endpoint = endpoint.into();
        validate_url("sms_endpoint", &endpoint)?;

        Ok(Self {
            client: Client::new(),
            endpoint,
            api_key: api_key.filter(|k| !k.is_empty()),
            live,
        })
    }

    /// Key from `TB_API_KEY`, endpoint from `TB_URL` when set.
    pub fn from_env(live: bool) -> Result<Self> {
        let endpoint = env::var("TB_URL").unwrap_or_else(|_| DEFAULT_GATEWAY_URL.to_string());
        Self::new(endpoint, env::var("TB_API_KEY").ok(), live)
    }

    fn effective_key(&self) -> Option<String> {
        let key = self.api_key.as_ref()?;
        if self.live {
            Some(key.clone())
        } else {
            Some(format!("{key}_test"))
        }
    }
}

#[async_trait]
impl SmsTransport for TextbeltClient {
    async fn send(&self, phone: &str, message: &str) -> Result<(), SendError> {
        let key = self
            .effective_key()
            .ok_or_else(|| SendError::Auth("no gateway API key configured".to_string()))?;

        let params = [("phone", phone), ("message", message), ("key", key.as_str())];

        let response = self
            .client
            .post(self.endpoint.as_str())
            .form(&params)
            .send()
            .await
            .map_err(|e| SendError::Network(e.to_string()))?;

        let body: GatewayResponse = response
            .json()
            .await
            .map_err(|e| SendError::Network(format!("unreadable gateway response: {e}")))?;

        // 完整回應進日誌，結果只看 success
        tracing::debug!(
            success = body.success,
            text_id = ?body.text_id,
            quota_remaining = ?body.quota_remaining,
            error = ?body.error,
            "gateway response"
        );

        if body.success {
            Ok(())
        } else {
            Err(SendError::Rejected(
                body.error
                    .unwrap_or_else(|| "gateway reported failure".to_string()),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_test_mode_suffixes_the_key() {
        let client =
            TextbeltClient::new(DEFAULT_GATEWAY_URL, Some("abc123".to_string()), false).unwrap();
        assert_eq!(client.effective_key().unwrap(), "abc123_test");
    }

    #[test]
    fn test_live_mode_uses_the_bare_key() {
        let client =
            TextbeltClient::new(DEFAULT_GATEWAY_URL, Some("abc123".to_string()), true).unwrap();
        assert_eq!(client.effective_key().unwrap(), "abc123");
    }

    #[test]
    fn test_missing_or_empty_key_has_no_effective_key() {
        let client = TextbeltClient::new(DEFAULT_GATEWAY_URL, None, false).unwrap();
        assert!(client.effective_key().is_none());

        let client =
            TextbeltClient::new(DEFAULT_GATEWAY_URL, Some(String::new()), false).unwrap();
        assert!(client.effective_key().is_none());
    }

    #[test]
    fn test_malformed_endpoint_is_a_config_error() {
        assert!(TextbeltClient::new("not-a-url", None, false).is_err());
        assert!(TextbeltClient::new("ftp://example.com", None, false).is_err());
    }
}
