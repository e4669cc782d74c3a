use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

use crate::{
    models::billing::BillingDetails,
    services::cloud::{
        actions::{complete_stripe_add_payment_method, get_cloud_limits, subscribe_cloud_subscription},
        interface::CloudError,
    },
    state::AppState,
};

#[derive(Serialize, Deserialize)]
pub struct SubscribeRequest {
    pub product_id: String,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct ActionResponse {
    pub success: bool,
}

fn bad_gateway(err: CloudError) -> HttpResponse {
    log::error!("Cloud request failed: {}", err);
    HttpResponse::BadGateway().json(serde_json::json!({ "error": err.to_string() }))
}

pub async fn add_payment_method(
    state: web::Data<AppState>,
    input: web::Json<BillingDetails>,
) -> impl Responder {
    let billing_details = input.into_inner();

    match complete_stripe_add_payment_method(
        state.cloud.as_ref(),
        state.stripe.as_ref(),
        &billing_details,
        state.mock_mode,
    )
    .await
    {
        Ok(success) => HttpResponse::Ok().json(ActionResponse { success }),
        Err(err) => bad_gateway(err),
    }
}

pub async fn subscribe(
    state: web::Data<AppState>,
    input: web::Json<SubscribeRequest>,
) -> impl Responder {
    match subscribe_cloud_subscription(state.cloud.as_ref(), &input.product_id).await {
        Ok(()) => HttpResponse::Ok().json(ActionResponse { success: true }),
        Err(err) => bad_gateway(err),
    }
}

pub async fn refresh_limits(state: web::Data<AppState>) -> impl Responder {
    match get_cloud_limits(state.cloud.as_ref(), state.store.as_ref()).await {
        Ok(()) => HttpResponse::Ok().json(state.store.state()),
        Err(err) => bad_gateway(err),
    }
}

pub async fn get_limits(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.store.state())
}
