use thiserror::Error;

#[derive(Debug, Error)]
pub enum PaymentError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Provider rejected the request ({code}): {description}")]
    Provider { code: String, description: String },

    #[error("Unexpected provider response: {0}")]
    Malformed(String),
}

pub type Result<T> = std::result::Result<T, PaymentError>;
