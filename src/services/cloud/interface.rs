use futures::future::BoxFuture;

use crate::models::{billing::StripeSetupIntent, limits::Limits};

#[derive(Debug, Clone, PartialEq)]
pub enum CloudError {
    /// The request never produced a response.
    Request(String),
    /// The server answered with a non-success status.
    Api { status: u16, message: String },
    Decode(String),
}

impl std::fmt::Display for CloudError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CloudError::Request(err) => write!(f, "Request error: {}", err),
            CloudError::Api { status, message } => write!(f, "API error ({}): {}", status, message),
            CloudError::Decode(err) => write!(f, "Decode error: {}", err),
        }
    }
}

impl std::error::Error for CloudError {}

impl From<reqwest::Error> for CloudError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            return CloudError::Decode(err.to_string());
        }
        CloudError::Request(err.to_string())
    }
}

/// Cloud billing endpoints of the product server.
pub trait CloudOperations: Send + Sync {
    fn create_payment_method(&self) -> BoxFuture<'_, Result<StripeSetupIntent, CloudError>>;

    fn confirm_payment_method<'a>(
        &'a self,
        setup_intent_id: &'a str,
    ) -> BoxFuture<'a, Result<(), CloudError>>;

    fn subscribe_cloud_product<'a>(
        &'a self,
        product_id: &'a str,
    ) -> BoxFuture<'a, Result<(), CloudError>>;

    /// `Ok(None)` when the server returned no limits.
    fn get_cloud_limits(&self) -> BoxFuture<'_, Result<Option<Limits>, CloudError>>;
}
