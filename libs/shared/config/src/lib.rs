use std::env;
use tracing::warn;

pub const DEFAULT_TOKEN_TTL_HOURS: i64 = 24;
/// One year.
pub const MAX_TOKEN_TTL_HOURS: i64 = 24 * 366;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub store_url: String,
    pub store_api_key: String,
    pub access_token_secret: String,
    pub access_token_ttl_hours: i64,
    pub email_sender_api: String,
    pub email_sender_domain: String,
    pub email_sender_base_url: String,
    pub email_from: String,
    pub stripe_secret_key: String,
    pub stripe_base_url: String,
    pub payment_currency: String,
    pub port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            store_url: String::new(),
            store_api_key: String::new(),
            access_token_secret: String::new(),
            access_token_ttl_hours: DEFAULT_TOKEN_TTL_HOURS,
            email_sender_api: String::new(),
            email_sender_domain: String::new(),
            email_sender_base_url: "https://api.mailgun.net".to_string(),
            email_from: "Doctor's portal <doctorportal@dental.com>".to_string(),
            stripe_secret_key: String::new(),
            stripe_base_url: "https://api.stripe.com".to_string(),
            payment_currency: "usd".to_string(),
            port: 5000,
        }
    }
}

fn required(key: &str) -> String {
    env::var(key).unwrap_or_else(|_| {
        warn!("{} not set, using empty value", key);
        String::new()
    })
}

fn with_default(key: &str, default: String) -> String {
    env::var(key).unwrap_or_else(|_| {
        warn!("{} not set, using default", key);
        default
    })
}

/// Token lifetime in hours, limited to `1..=MAX_TOKEN_TTL_HOURS`.
fn parse_ttl_hours(raw: &str) -> i64 {
    match raw.trim().parse::<i64>() {
        Ok(hours) if (1..=MAX_TOKEN_TTL_HOURS).contains(&hours) => hours,
        _ => {
            warn!(
                "ACCESS_TOKEN_TTL_HOURS must be between 1 and {} (got {}), using {}",
                MAX_TOKEN_TTL_HOURS, raw, DEFAULT_TOKEN_TTL_HOURS
            );
            DEFAULT_TOKEN_TTL_HOURS
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let access_token_ttl_hours = env::var("ACCESS_TOKEN_TTL_HOURS")
            .map(|raw| parse_ttl_hours(&raw))
            .unwrap_or(DEFAULT_TOKEN_TTL_HOURS);

        let port = env::var("PORT")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(defaults.port);

        let config = Self {
            store_url: required("DOCUMENT_STORE_URL"),
            store_api_key: required("DOCUMENT_STORE_API_KEY"),
            access_token_secret: required("ACCESS_TOKEN"),
            access_token_ttl_hours,
            email_sender_api: required("EMAIL_SENDER_API"),
            email_sender_domain: required("EMAIL_SENDER_DOMAIN"),
            email_sender_base_url: with_default("EMAIL_SENDER_BASE_URL", defaults.email_sender_base_url),
            email_from: with_default("EMAIL_FROM", defaults.email_from),
            stripe_secret_key: required("STRIPE_SECRET_KEY"),
            stripe_base_url: with_default("STRIPE_BASE_URL", defaults.stripe_base_url),
            payment_currency: with_default("PAYMENT_CURRENCY", defaults.payment_currency),
            port,
        };

        if !config.is_configured() {
            warn!("Application not fully configured - missing environment variables");
        }

        config
    }

    pub fn is_configured(&self) -> bool {
        !self.store_url.is_empty()
            && !self.store_api_key.is_empty()
            && !self.access_token_secret.is_empty()
    }

    pub fn is_email_configured(&self) -> bool {
        !self.email_sender_api.is_empty()
            && !self.email_sender_domain.is_empty()
            && !self.email_sender_base_url.is_empty()
    }

    pub fn is_payment_configured(&self) -> bool {
        !self.stripe_secret_key.is_empty() && !self.stripe_base_url.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_not_configured() {
        let config = AppConfig::default();
        assert!(!config.is_configured());
        assert!(!config.is_email_configured());
        assert!(!config.is_payment_configured());
        assert_eq!(config.access_token_ttl_hours, 24);
        assert_eq!(config.payment_currency, "usd");
    }

    #[test]
    fn test_configured_flags() {
        let config = AppConfig {
            store_url: "http://localhost:3001".to_string(),
            store_api_key: "key".to_string(),
            access_token_secret: "secret".to_string(),
            email_sender_api: "mail-key".to_string(),
            email_sender_domain: "mg.example.com".to_string(),
            stripe_secret_key: "sk_test_123".to_string(),
            ..AppConfig::default()
        };

        assert!(config.is_configured());
        assert!(config.is_email_configured());
        assert!(config.is_payment_configured());
    }

    #[test]
    fn test_ttl_hours_out_of_range_falls_back() {
        assert_eq!(parse_ttl_hours("48"), 48);
        assert_eq!(parse_ttl_hours(" 12 "), 12);
        assert_eq!(parse_ttl_hours("0"), DEFAULT_TOKEN_TTL_HOURS);
        assert_eq!(parse_ttl_hours("-5"), DEFAULT_TOKEN_TTL_HOURS);
        assert_eq!(parse_ttl_hours("9223372036854775807"), DEFAULT_TOKEN_TTL_HOURS);
        assert_eq!(parse_ttl_hours("soon"), DEFAULT_TOKEN_TTL_HOURS);
    }
}
