#![allow(dead_code)]

use actix_web::{web, App};
use futures::future::{BoxFuture, FutureExt};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use url::Url;

use cloud_billing::config::Settings;
use cloud_billing::models::billing::{
    BillingDetails, CardSetupRequest, ConfirmationResult, ConfirmedSetup, SetupIntentStatus,
    StripeSetupIntent,
};
use cloud_billing::models::limits::Limits;
use cloud_billing::routes;
use cloud_billing::services::cloud::interface::{CloudError, CloudOperations};
use cloud_billing::services::payment::interface::CardSetupOperations;
use cloud_billing::state::AppState;

pub struct FakeCloud {
    pub intent: Result<StripeSetupIntent, CloudError>,
    pub confirm: Result<(), CloudError>,
    pub subscribe: Result<(), CloudError>,
    pub limits: Result<Option<Limits>, CloudError>,
    pub confirmed: Mutex<Vec<String>>,
    pub subscribed: Mutex<Vec<String>>,
}

impl Default for FakeCloud {
    fn default() -> Self {
        Self {
            intent: Ok(StripeSetupIntent {
                id: "seti_1".to_string(),
                client_secret: "seti_1_secret_1".to_string(),
            }),
            confirm: Ok(()),
            subscribe: Ok(()),
            limits: Ok(None),
            confirmed: Mutex::new(Vec::new()),
            subscribed: Mutex::new(Vec::new()),
        }
    }
}

impl CloudOperations for FakeCloud {
    fn create_payment_method(&self) -> BoxFuture<'_, Result<StripeSetupIntent, CloudError>> {
        let intent = self.intent.clone();
        async move { intent }.boxed()
    }

    fn confirm_payment_method<'a>(
        &'a self,
        setup_intent_id: &'a str,
    ) -> BoxFuture<'a, Result<(), CloudError>> {
        self.confirmed.lock().unwrap().push(setup_intent_id.to_string());
        let result = self.confirm.clone();
        async move { result }.boxed()
    }

    fn subscribe_cloud_product<'a>(
        &'a self,
        product_id: &'a str,
    ) -> BoxFuture<'a, Result<(), CloudError>> {
        self.subscribed.lock().unwrap().push(product_id.to_string());
        let result = self.subscribe.clone();
        async move { result }.boxed()
    }

    fn get_cloud_limits(&self) -> BoxFuture<'_, Result<Option<Limits>, CloudError>> {
        let result = self.limits.clone();
        async move { result }.boxed()
    }
}

pub struct FakeStripe {
    pub result: Option<ConfirmationResult>,
    pub calls: Mutex<usize>,
}

impl FakeStripe {
    pub fn returning(result: Option<ConfirmationResult>) -> Self {
        Self {
            result,
            calls: Mutex::new(0),
        }
    }

    pub fn succeeded(id: &str) -> Self {
        Self::returning(Some(ConfirmationResult::Succeeded(ConfirmedSetup {
            id: id.to_string(),
            status: SetupIntentStatus::Succeeded,
        })))
    }

    pub fn calls(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

impl CardSetupOperations for FakeStripe {
    fn confirm_card_setup<'a>(
        &'a self,
        _client_secret: &'a str,
        _request: &'a CardSetupRequest,
    ) -> BoxFuture<'a, Option<ConfirmationResult>> {
        *self.calls.lock().unwrap() += 1;
        let result = self.result.clone();
        async move { result }.boxed()
    }
}

pub struct TestApp {
    pub cloud: Arc<FakeCloud>,
    pub stripe: Arc<FakeStripe>,
    pub state: AppState,
    pub settings: Settings,
}

impl TestApp {
    pub fn new(cloud: FakeCloud, stripe: FakeStripe, mock_mode: bool) -> Self {
        let cloud = Arc::new(cloud);
        let stripe = Arc::new(stripe);
        let state = AppState::new(cloud.clone(), stripe.clone(), mock_mode);

        Self {
            cloud,
            stripe,
            state,
            settings: test_settings(mock_mode),
        }
    }

    pub fn create_app(
        &self,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(self.settings.clone()))
            .app_data(web::Data::new(self.state.clone()))
            .configure(routes::configure)
    }
}

pub fn test_settings(mock_mode: bool) -> Settings {
    Settings {
        host: "127.0.0.1".to_string(),
        port: 0,
        cloud_api_url: Url::parse("https://chat.example.com").unwrap(),
        cloud_api_token: Some("token".to_string()),
        stripe_publishable_key: if mock_mode {
            None
        } else {
            Some("pk_test_1234567890".to_string())
        },
        stripe_api_base: Url::parse("https://api.stripe.com/").unwrap(),
        mock_mode,
        http_timeout: Duration::from_secs(5),
    }
}

pub fn billing_details() -> BillingDetails {
    BillingDetails {
        name: "Jane Doe".to_string(),
        address: "1 Main St".to_string(),
        address2: String::new(),
        city: "Springfield".to_string(),
        state: "IL".to_string(),
        country: "United States of America".to_string(),
        postal_code: "62701".to_string(),
        card: "tok_visa".to_string(),
    }
}
