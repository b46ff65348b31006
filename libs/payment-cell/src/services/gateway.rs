use reqwest::Client;
use tracing::{debug, error, info};

use shared_config::AppConfig;

use crate::error::PaymentError;
use crate::models::PaymentIntentApiResponse;

/// Client for the Stripe-compatible payment intents API.
pub struct PaymentGateway {
    client: Client,
    base_url: String,
    secret_key: String,
    currency: String,
    configured: bool,
}

impl PaymentGateway {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.stripe_base_url.trim_end_matches('/').to_string(),
            secret_key: config.stripe_secret_key.clone(),
            currency: config.payment_currency.clone(),
            configured: config.is_payment_configured(),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.configured
    }

    /// Creates a card payment intent for `amount` minor units and returns its client secret.
    pub async fn create_payment_intent(&self, amount: i64) -> Result<String, PaymentError> {
        if !self.is_configured() {
            return Err(PaymentError::NotConfigured);
        }

        let url = format!("{}/v1/payment_intents", self.base_url);
        debug!("Creating payment intent of {} {} via {}", amount, self.currency, url);

        let form_body: Vec<(&str, String)> = vec![
            ("amount", amount.to_string()),
            ("currency", self.currency.clone()),
            ("payment_method_types[]", "card".to_string()),
        ];

        let response = self
            .client
            .post(&url)
            .basic_auth(&self.secret_key, None::<&str>)
            .form(&form_body)
            .send()
            .await?;

        let status = response.status();
        let body_text = response.text().await?;

        if !status.is_success() {
            error!("Payment gateway error ({}): {}", status, body_text);
            return Err(PaymentError::Api {
                status_code: status.as_u16(),
                message: body_text,
            });
        }

        let intent: PaymentIntentApiResponse = serde_json::from_str(&body_text)?;
        let client_secret = intent.client_secret.ok_or(PaymentError::MissingClientSecret)?;

        info!("Payment intent created for {} {}", amount, self.currency);
        Ok(client_secret)
    }
}
