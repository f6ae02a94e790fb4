use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub api_keys: String,
    pub payout_delay_ms: u64,
    pub mpesa: MpesaConfig,
}

#[derive(Debug, Clone)]
pub struct MpesaConfig {
    pub base_url: String,
    pub consumer_key: String,
    pub consumer_secret: String,
    pub shortcode: String,
    pub initiator_name: String,
    pub security_credential: String,
    pub result_url: String,
    pub timeout_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: std::env::var("HOST").context("Cannot load HOST env variable")?,
            port: std::env::var("PORT")
                .context("Cannot load PORT env variable")?
                .parse()
                .context("PORT must be a number")?,
            database_url: std::env::var("DATABASE_URL")
                .context("Cannot load DATABASE_URL env variable")?,
            api_keys: std::env::var("API_KEYS").unwrap_or_default(),
            payout_delay_ms: std::env::var("PAYOUT_DELAY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1000),
            mpesa: MpesaConfig::from_env()?,
        })
    }
}

impl MpesaConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            base_url: std::env::var("MPESA_BASE_URL")
                .unwrap_or_else(|_| "https://sandbox.safaricom.co.ke".to_string()),
            consumer_key: std::env::var("MPESA_CONSUMER_KEY")
                .context("Cannot load MPESA_CONSUMER_KEY env variable")?,
            consumer_secret: std::env::var("MPESA_CONSUMER_SECRET")
                .context("Cannot load MPESA_CONSUMER_SECRET env variable")?,
            shortcode: std::env::var("MPESA_SHORTCODE")
                .context("Cannot load MPESA_SHORTCODE env variable")?,
            initiator_name: std::env::var("MPESA_INITIATOR_NAME")
                .context("Cannot load MPESA_INITIATOR_NAME env variable")?,
            security_credential: std::env::var("MPESA_SECURITY_CREDENTIAL")
                .context("Cannot load MPESA_SECURITY_CREDENTIAL env variable")?,
            result_url: std::env::var("MPESA_RESULT_URL")
                .context("Cannot load MPESA_RESULT_URL env variable")?,
            timeout_url: std::env::var("MPESA_TIMEOUT_URL")
                .context("Cannot load MPESA_TIMEOUT_URL env variable")?,
        })
    }
}
