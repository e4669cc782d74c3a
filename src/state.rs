use std::sync::Arc;

use crate::config::Settings;
use crate::services::cloud::client::CloudClient;
use crate::services::cloud::interface::{CloudError, CloudOperations};
use crate::services::payment::interface::CardSetupOperations;
use crate::services::stripe::{mock::MockCardSetup, provider::StripeProvider};
use crate::store::CloudStore;

#[derive(Clone)]
pub struct AppState {
    pub cloud: Arc<dyn CloudOperations>,
    pub stripe: Arc<dyn CardSetupOperations>,
    pub store: Arc<CloudStore>,
    pub mock_mode: bool,
}

impl AppState {
    pub fn new(
        cloud: Arc<dyn CloudOperations>,
        stripe: Arc<dyn CardSetupOperations>,
        mock_mode: bool,
    ) -> Self {
        Self {
            cloud,
            stripe,
            store: Arc::new(CloudStore::new()),
            mock_mode,
        }
    }

    pub fn from_settings(settings: &Settings) -> Result<Self, CloudError> {
        let cloud = CloudClient::new(
            settings.cloud_api_url.clone(),
            settings.cloud_api_token.clone(),
            settings.http_timeout,
        )?;

        let stripe: Arc<dyn CardSetupOperations> = match &settings.stripe_publishable_key {
            Some(key) => Arc::new(StripeProvider::with_base_url(
                settings.stripe_api_base.as_str(),
                key.clone(),
            )),
            None => Arc::new(MockCardSetup),
        };

        Ok(Self::new(Arc::new(cloud), stripe, settings.mock_mode))
    }
}
