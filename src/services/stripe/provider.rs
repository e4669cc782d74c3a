use futures::future::{BoxFuture, FutureExt};
use stripe::{ErrorCode, StripeError};

use crate::models::billing::{
    CardSetupRequest, ConfirmationResult, ConfirmedSetup, ProcessorError,
};
use crate::services::payment::interface::CardSetupOperations;

use super::models::setup_intent::{ConfirmSetupIntentForm, SetupIntentResponse};

pub struct StripeProvider {
    pub client: stripe::Client,
}

impl StripeProvider {
    /// Builds a client against `base_url`, the live API or stripe-mock.
    pub fn with_base_url(base_url: &str, api_key: impl Into<String>) -> Self {
        Self {
            client: stripe::Client::from_url(base_url, api_key.into()),
        }
    }

    async fn confirm(&self, client_secret: &str, request: &CardSetupRequest) -> ConfirmationResult {
        let Some(setup_intent_id) = setup_intent_id(client_secret) else {
            log::warn!("Client secret does not reference a setup intent");
            return ConfirmationResult::Failed(Some(ProcessorError {
                message: Some("Invalid setup intent client secret".to_string()),
                ..Default::default()
            }));
        };

        let form = ConfirmSetupIntentForm::new(client_secret, request);
        let path = format!("/setup_intents/{}/confirm", setup_intent_id);
        log::debug!("Confirming card setup for {}", setup_intent_id);

        match self
            .client
            .post_form::<SetupIntentResponse, _>(&path, &form)
            .await
        {
            Ok(setup_intent) => {
                log::info!(
                    "Setup intent {} confirmed with status {:?}",
                    setup_intent.id,
                    setup_intent.status
                );
                ConfirmationResult::Succeeded(ConfirmedSetup {
                    id: setup_intent.id,
                    status: setup_intent.status,
                })
            }
            Err(StripeError::Stripe(err)) => {
                log::warn!(
                    "Stripe rejected setup intent {}: {:?} ({:?})",
                    setup_intent_id,
                    err.message,
                    err.decline_code
                );
                ConfirmationResult::Failed(Some(ProcessorError {
                    message: err.message,
                    code: err.code.as_ref().and_then(error_code_name),
                    decline_code: err.decline_code,
                }))
            }
            Err(err) => {
                log::error!("Stripe request for setup intent {} failed: {}", setup_intent_id, err);
                ConfirmationResult::Failed(Some(ProcessorError {
                    message: Some(err.to_string()),
                    ..Default::default()
                }))
            }
        }
    }
}

impl CardSetupOperations for StripeProvider {
    fn confirm_card_setup<'a>(
        &'a self,
        client_secret: &'a str,
        request: &'a CardSetupRequest,
    ) -> BoxFuture<'a, Option<ConfirmationResult>> {
        async move { Some(self.confirm(client_secret, request).await) }.boxed()
    }
}

/// Stripe error codes serialize to their snake_case wire names.
fn error_code_name(code: &ErrorCode) -> Option<String> {
    match serde_json::to_value(code).ok()? {
        serde_json::Value::String(name) => Some(name),
        _ => None,
    }
}

/// Client secrets have the form `seti_<id>_secret_<secret>`.
fn setup_intent_id(client_secret: &str) -> Option<&str> {
    client_secret
        .split_once("_secret_")
        .map(|(id, _)| id)
        .filter(|id| !id.is_empty())
}
