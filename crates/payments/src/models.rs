use serde::{Deserialize, Serialize};

/// Response to the OAuth client-credentials exchange.
#[derive(Debug, Clone, Deserialize)]
pub struct AccessTokenResponse {
    pub access_token: String,
    pub expires_in: String,
}

/// B2C payment request, field names as the Daraja API expects them.
#[derive(Debug, Clone, Serialize)]
pub struct B2cRequest {
    #[serde(rename = "InitiatorName")]
    pub initiator_name: String,
    #[serde(rename = "SecurityCredential")]
    pub security_credential: String,
    #[serde(rename = "CommandID")]
    pub command_id: String,
    #[serde(rename = "Amount")]
    pub amount: i64,
    #[serde(rename = "PartyA")]
    pub party_a: String,
    #[serde(rename = "PartyB")]
    pub party_b: String,
    #[serde(rename = "Remarks")]
    pub remarks: String,
    #[serde(rename = "QueueTimeOutURL")]
    pub queue_timeout_url: String,
    #[serde(rename = "ResultURL")]
    pub result_url: String,
    #[serde(rename = "Occasion", skip_serializing_if = "Option::is_none")]
    pub occasion: Option<String>,
}

/// Synchronous acknowledgement of a B2C submission. `ResponseCode` "0" means
/// the request was accepted for processing; the final outcome arrives on the
/// result URL.
#[derive(Debug, Clone, Deserialize)]
pub struct B2cResponse {
    #[serde(rename = "ConversationID")]
    pub conversation_id: String,
    #[serde(rename = "OriginatorConversationID")]
    pub originator_conversation_id: String,
    #[serde(rename = "ResponseCode")]
    pub response_code: String,
    #[serde(rename = "ResponseDescription")]
    pub response_description: String,
}

impl B2cResponse {
    pub fn is_accepted(&self) -> bool {
        self.response_code == "0"
    }
}

/// Error body Daraja returns on a rejected request.
#[derive(Debug, Clone, Deserialize)]
pub struct DarajaErrorResponse {
    #[serde(rename = "requestId", default)]
    pub request_id: String,
    #[serde(rename = "errorCode", default)]
    pub error_code: String,
    #[serde(rename = "errorMessage", default)]
    pub error_message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn b2c_request_serializes_with_provider_field_names() {
        let req = B2cRequest {
            initiator_name: "arena-api".into(),
            security_credential: "encrypted".into(),
            command_id: "BusinessPayment".into(),
            amount: 600,
            party_a: "600123".into(),
            party_b: "254712345678".into(),
            remarks: "PES Arena prize".into(),
            queue_timeout_url: "https://example.com/timeout".into(),
            result_url: "https://example.com/result".into(),
            occasion: None,
        };

        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["CommandID"], "BusinessPayment");
        assert_eq!(json["Amount"], 600);
        assert_eq!(json["PartyB"], "254712345678");
        assert!(json.get("Occasion").is_none());
    }

    #[test]
    fn b2c_response_acceptance_follows_response_code() {
        let accepted: B2cResponse = serde_json::from_value(serde_json::json!({
            "ConversationID": "AG_1",
            "OriginatorConversationID": "29115-1-1",
            "ResponseCode": "0",
            "ResponseDescription": "Accept the service request successfully."
        }))
        .unwrap();
        assert!(accepted.is_accepted());

        let rejected: B2cResponse = serde_json::from_value(serde_json::json!({
            "ConversationID": "AG_2",
            "OriginatorConversationID": "29115-1-2",
            "ResponseCode": "1",
            "ResponseDescription": "Insufficient funds"
        }))
        .unwrap();
        assert!(!rejected.is_accepted());
    }
}
