use std::sync::Arc;
use chrono::{Duration, Utc};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use base64::{Engine as _, engine::general_purpose};
use serde_json::json;

use shared_config::AppConfig;
use shared_models::auth::AuthUser;

pub struct TestConfig {
    pub jwt_secret: String,
    pub store_url: String,
    pub store_api_key: String,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            jwt_secret: "test-secret-key-for-jwt-validation-must-be-long-enough".to_string(),
            store_url: "http://localhost:54321".to_string(),
            store_api_key: "test-store-key".to_string(),
        }
    }
}

impl TestConfig {
    /// Config pointing every outbound service at `uri` (usually a wiremock server).
    pub fn with_mock_server(uri: &str) -> Self {
        Self {
            store_url: uri.to_string(),
            ..Self::default()
        }
    }

    pub fn to_app_config(&self) -> AppConfig {
        AppConfig {
            store_url: self.store_url.clone(),
            store_api_key: self.store_api_key.clone(),
            access_token_secret: self.jwt_secret.clone(),
            email_sender_api: "test-mail-key".to_string(),
            email_sender_domain: "mg.example.com".to_string(),
            email_sender_base_url: self.store_url.clone(),
            stripe_secret_key: "sk_test_123".to_string(),
            stripe_base_url: self.store_url.clone(),
            ..AppConfig::default()
        }
    }

    pub fn to_arc(&self) -> Arc<AppConfig> {
        Arc::new(self.to_app_config())
    }
}

pub struct TestUser {
    pub email: String,
    pub role: Option<String>,
}

impl Default for TestUser {
    fn default() -> Self {
        Self {
            email: "test@example.com".to_string(),
            role: None,
        }
    }
}

impl TestUser {
    pub fn patient(email: &str) -> Self {
        Self {
            email: email.to_string(),
            role: None,
        }
    }

    pub fn admin(email: &str) -> Self {
        Self {
            email: email.to_string(),
            role: Some("admin".to_string()),
        }
    }

    pub fn to_auth_user(&self) -> AuthUser {
        AuthUser {
            email: self.email.clone(),
        }
    }

    pub fn to_record(&self) -> serde_json::Value {
        match &self.role {
            Some(role) => json!({ "email": self.email, "role": role }),
            None => json!({ "email": self.email }),
        }
    }
}

pub struct JwtTestUtils;

impl JwtTestUtils {
    pub fn create_test_token(user: &TestUser, secret: &str, exp_hours: Option<i64>) -> String {
        let now = Utc::now();
        let exp = now + Duration::hours(exp_hours.unwrap_or(24));

        let header = json!({
            "alg": "HS256",
            "typ": "JWT"
        });

        let payload = json!({
            "email": user.email,
            "iat": now.timestamp(),
            "exp": exp.timestamp()
        });

        let header_encoded = general_purpose::URL_SAFE_NO_PAD.encode(header.to_string());
        let payload_encoded = general_purpose::URL_SAFE_NO_PAD.encode(payload.to_string());

        let signing_input = format!("{}.{}", header_encoded, payload_encoded);

        let mut mac = Hmac::<Sha256>::new_from_slice(secret.as_bytes())
            .expect("HMAC can take key of any size");
        mac.update(signing_input.as_bytes());
        let signature = mac.finalize().into_bytes();
        let signature_encoded = general_purpose::URL_SAFE_NO_PAD.encode(signature);

        format!("{}.{}", signing_input, signature_encoded)
    }

    pub fn create_expired_token(user: &TestUser, secret: &str) -> String {
        Self::create_test_token(user, secret, Some(-1))
    }

    pub fn create_invalid_signature_token(user: &TestUser) -> String {
        Self::create_test_token(user, "wrong-secret", Some(24))
    }

    pub fn create_malformed_token() -> String {
        "invalid.token.format".to_string()
    }

    pub fn bearer(token: &str) -> String {
        format!("Bearer {}", token)
    }
}

pub struct MockStoreResponses;

impl MockStoreResponses {
    pub fn service_response(id: i64, name: &str, slots: &[&str]) -> serde_json::Value {
        json!({
            "id": id,
            "name": name,
            "slots": slots,
            "price": 200.0
        })
    }

    pub fn booking_response(id: i64, email: &str, service: &str, date: &str, slot: &str) -> serde_json::Value {
        json!({
            "id": id,
            "email": email,
            "service": service,
            "bookingDate": date,
            "timeSlot": slot,
            "patientName": "Test Patient"
        })
    }

    pub fn user_response(email: &str, role: Option<&str>) -> serde_json::Value {
        match role {
            Some(role) => json!({ "email": email, "role": role, "name": "Test User" }),
            None => json!({ "email": email, "name": "Test User" }),
        }
    }

    pub fn error_response(message: &str, code: &str) -> serde_json::Value {
        json!({
            "message": message,
            "code": code
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_creation() {
        let config = TestConfig::default();
        let app_config = config.to_app_config();

        assert_eq!(app_config.store_url, "http://localhost:54321");
        assert_eq!(app_config.store_api_key, "test-store-key");
        assert!(app_config.is_configured());
        assert!(app_config.is_payment_configured());
    }

    #[test]
    fn test_user_creation() {
        let user = TestUser::admin("admin@example.com");
        assert_eq!(user.to_record()["role"], "admin");
        assert_eq!(user.to_auth_user().email, "admin@example.com");

        let patient = TestUser::patient("p@example.com");
        assert!(patient.to_record().get("role").is_none());
    }

    #[test]
    fn test_jwt_token_creation() {
        let user = TestUser::default();
        let token = JwtTestUtils::create_test_token(&user, "test-secret", Some(1));

        assert_eq!(token.split('.').count(), 3);
    }
}
