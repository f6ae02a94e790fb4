use std::time::Duration;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use reqwest::Client;

use crate::error::{PaymentError, Result};
use crate::models::{AccessTokenResponse, B2cRequest, B2cResponse, DarajaErrorResponse};

/// Everything needed to talk to one Daraja shortcode.
#[derive(Debug, Clone)]
pub struct DarajaSettings {
    /// e.g. `https://sandbox.safaricom.co.ke`
    pub base_url: String,
    pub consumer_key: String,
    pub consumer_secret: String,
    pub shortcode: String,
    pub initiator_name: String,
    pub security_credential: String,
    pub result_url: String,
    pub timeout_url: String,
}

/// Client for Safaricom's Daraja API: OAuth token exchange followed by B2C
/// payment submission.
pub struct DarajaClient {
    client: Client,
    settings: DarajaSettings,
}

impl DarajaClient {
    pub fn new(settings: DarajaSettings) -> Result<Self> {
        let client = Client::builder().timeout(Duration::from_secs(30)).build()?;

        Ok(Self { client, settings })
    }

    pub fn shortcode(&self) -> &str {
        &self.settings.shortcode
    }

    /// Exchange the consumer key/secret for a bearer token.
    pub async fn access_token(&self) -> Result<String> {
        let credential = BASE64.encode(format!(
            "{}:{}",
            self.settings.consumer_key, self.settings.consumer_secret
        ));

        let response = self
            .client
            .get(format!(
                "{}/oauth/v1/generate?grant_type=client_credentials",
                self.settings.base_url
            ))
            .header("Authorization", format!("Basic {credential}"))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(%status, "Daraja token exchange refused");
            return Err(PaymentError::Auth(format!(
                "token exchange failed ({status}): {body}"
            )));
        }

        let token: AccessTokenResponse = response
            .json()
            .await
            .map_err(|e| PaymentError::Malformed(format!("token response: {e}")))?;

        Ok(token.access_token)
    }

    /// Submit one B2C `BusinessPayment` to a subscriber. Returns the
    /// provider's synchronous acknowledgement; the asynchronous result lands
    /// on the configured result URL.
    pub async fn b2c_payment(
        &self,
        token: &str,
        phone: &str,
        amount: i64,
        remarks: &str,
    ) -> Result<B2cResponse> {
        let request = B2cRequest {
            initiator_name: self.settings.initiator_name.clone(),
            security_credential: self.settings.security_credential.clone(),
            command_id: "BusinessPayment".to_string(),
            amount,
            party_a: self.settings.shortcode.clone(),
            party_b: phone.to_string(),
            remarks: remarks.to_string(),
            queue_timeout_url: self.settings.timeout_url.clone(),
            result_url: self.settings.result_url.clone(),
            occasion: None,
        };

        tracing::info!(phone, amount, "submitting B2C payment");

        let response = self
            .client
            .post(format!(
                "{}/mpesa/b2c/v1/paymentrequest",
                self.settings.base_url
            ))
            .bearer_auth(token)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            let detail: DarajaErrorResponse =
                serde_json::from_str(&body).unwrap_or(DarajaErrorResponse {
                    request_id: String::new(),
                    error_code: status.to_string(),
                    error_message: body,
                });
            return Err(PaymentError::Provider {
                code: detail.error_code,
                description: detail.error_message,
            });
        }

        let ack: B2cResponse = response
            .json()
            .await
            .map_err(|e| PaymentError::Malformed(format!("B2C response: {e}")))?;

        if !ack.is_accepted() {
            return Err(PaymentError::Provider {
                code: ack.response_code.clone(),
                description: ack.response_description.clone(),
            });
        }

        Ok(ack)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sandbox_settings() -> DarajaSettings {
        DarajaSettings {
            base_url: "https://sandbox.safaricom.co.ke".into(),
            consumer_key: std::env::var("MPESA_CONSUMER_KEY").unwrap_or_default(),
            consumer_secret: std::env::var("MPESA_CONSUMER_SECRET").unwrap_or_default(),
            shortcode: "600999".into(),
            initiator_name: "testapi".into(),
            security_credential: "credential".into(),
            result_url: "https://example.com/result".into(),
            timeout_url: "https://example.com/timeout".into(),
        }
    }

    #[tokio::test]
    #[ignore] // Only run against the Daraja sandbox with real credentials
    async fn test_token_exchange() {
        let client = DarajaClient::new(sandbox_settings()).unwrap();
        let token = client.access_token().await.unwrap();
        assert!(!token.is_empty());
    }
}
