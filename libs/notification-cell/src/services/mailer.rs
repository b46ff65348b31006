use reqwest::Client;
use tracing::debug;

use shared_config::AppConfig;

use crate::error::MailerError;
use crate::models::EmailMessage;

/// Client for the Mailgun-style messages API.
pub struct Mailer {
    client: Client,
    base_url: String,
    domain: String,
    api_key: String,
    from: String,
    configured: bool,
}

impl Mailer {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.email_sender_base_url.trim_end_matches('/').to_string(),
            domain: config.email_sender_domain.clone(),
            api_key: config.email_sender_api.clone(),
            from: config.email_from.clone(),
            configured: config.is_email_configured(),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.configured
    }

    pub async fn send(&self, message: &EmailMessage) -> Result<(), MailerError> {
        if !self.is_configured() {
            return Err(MailerError::NotConfigured);
        }

        let url = format!("{}/v3/{}/messages", self.base_url, self.domain);
        debug!("Sending email {} to {} via {}", message.id, message.to, url);

        let form = [
            ("from", self.from.as_str()),
            ("to", message.to.as_str()),
            ("subject", message.subject.as_str()),
            ("text", message.text.as_str()),
            ("html", message.html.as_str()),
        ];

        let response = self
            .client
            .post(&url)
            .basic_auth("api", Some(&self.api_key))
            .form(&form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MailerError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        Ok(())
    }
}
