use std::sync::Arc;

use axum::{extract::State, Extension, Json};

use shared_config::AppConfig;
use shared_models::auth::AuthUser;
use shared_models::error::AppError;
use shared_utils::json::AppJson;

use crate::models::{PaymentIntentRequest, PaymentIntentResponse};
use crate::services::PaymentGateway;

#[axum::debug_handler]
pub async fn create_payment_intent(
    State(config): State<Arc<AppConfig>>,
    Extension(user): Extension<AuthUser>,
    AppJson(request): AppJson<PaymentIntentRequest>,
) -> Result<Json<PaymentIntentResponse>, AppError> {
    let amount = request.amount()?;
    tracing::info!("{} requests a payment intent of {}", user.email, amount);

    let gateway = PaymentGateway::new(&config);
    let client_secret = gateway.create_payment_intent(amount).await?;

    Ok(Json(PaymentIntentResponse { client_secret }))
}
