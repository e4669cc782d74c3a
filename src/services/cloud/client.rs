use std::time::Duration;

use futures::future::{BoxFuture, FutureExt};
use reqwest::{RequestBuilder, Response};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::models::{billing::StripeSetupIntent, limits::Limits};

use super::interface::{CloudError, CloudOperations};

const CLOUD_ROUTE: &str = "api/v4/cloud";

/// Error body returned by the product server.
#[derive(Deserialize, Debug)]
struct ApiErrorBody {
    #[serde(default)]
    message: String,
}

#[derive(Serialize)]
struct ConfirmPaymentMethodBody<'a> {
    stripe_setup_intent_id: &'a str,
}

#[derive(Serialize)]
struct SubscribeProductBody<'a> {
    product_id: &'a str,
}

pub struct CloudClient {
    client: reqwest::Client,
    base_url: Url,
    token: Option<String>,
}

impl CloudClient {
    pub fn new(
        mut base_url: Url,
        token: Option<String>,
        timeout: Duration,
    ) -> Result<Self, CloudError> {
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CloudError::Request(e.to_string()))?;

        Ok(Self {
            client,
            base_url,
            token,
        })
    }

    fn url(&self, path: &str) -> Result<Url, CloudError> {
        self.base_url
            .join(&format!("{}/{}", CLOUD_ROUTE, path))
            .map_err(|e| CloudError::Request(e.to_string()))
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, CloudError> {
        let mut request = request.header("X-Requested-With", "XMLHttpRequest");
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let res = request.send().await?;
        let status = res.status();
        if status.is_success() {
            return Ok(res);
        }

        let body = res.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ApiErrorBody>(&body)
            .ok()
            .map(|err| err.message)
            .filter(|message| !message.is_empty())
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("unexpected response")
                    .to_string()
            });

        log::warn!("Cloud API returned {}: {}", status, message);
        Err(CloudError::Api {
            status: status.as_u16(),
            message,
        })
    }

    async fn create_payment_method_inner(&self) -> Result<StripeSetupIntent, CloudError> {
        let url = self.url("payment")?;
        log::debug!("POST {}", url);
        let res = self.send(self.client.post(url)).await?;
        Ok(res.json::<StripeSetupIntent>().await?)
    }

    async fn confirm_payment_method_inner(&self, setup_intent_id: &str) -> Result<(), CloudError> {
        let url = self.url("payment/confirm")?;
        log::debug!("POST {} for setup intent {}", url, setup_intent_id);
        self.send(self.client.post(url).json(&ConfirmPaymentMethodBody {
            stripe_setup_intent_id: setup_intent_id,
        }))
        .await?;
        Ok(())
    }

    async fn subscribe_cloud_product_inner(&self, product_id: &str) -> Result<(), CloudError> {
        let url = self.url("subscription")?;
        log::debug!("PUT {} for product {}", url, product_id);
        self.send(
            self.client
                .put(url)
                .json(&SubscribeProductBody { product_id }),
        )
        .await?;
        Ok(())
    }

    async fn get_cloud_limits_inner(&self) -> Result<Option<Limits>, CloudError> {
        let url = self.url("limits")?;
        log::debug!("GET {}", url);
        let res = self.send(self.client.get(url)).await?;
        let body = res.text().await?;
        let body = body.trim();
        if body.is_empty() {
            return Ok(None);
        }

        serde_json::from_str::<Option<Limits>>(body).map_err(|e| CloudError::Decode(e.to_string()))
    }
}

impl CloudOperations for CloudClient {
    fn create_payment_method(&self) -> BoxFuture<'_, Result<StripeSetupIntent, CloudError>> {
        self.create_payment_method_inner().boxed()
    }

    fn confirm_payment_method<'a>(
        &'a self,
        setup_intent_id: &'a str,
    ) -> BoxFuture<'a, Result<(), CloudError>> {
        self.confirm_payment_method_inner(setup_intent_id).boxed()
    }

    fn subscribe_cloud_product<'a>(
        &'a self,
        product_id: &'a str,
    ) -> BoxFuture<'a, Result<(), CloudError>> {
        self.subscribe_cloud_product_inner(product_id).boxed()
    }

    fn get_cloud_limits(&self) -> BoxFuture<'_, Result<Option<Limits>, CloudError>> {
        self.get_cloud_limits_inner().boxed()
    }
}
