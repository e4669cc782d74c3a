use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;
use std::collections::HashMap;
use std::env;

use crate::config::Settings;

#[derive(Serialize)]
struct HealthStatus {
    status: String,
    services: HashMap<String, ServiceStatus>,
    environment: String,
    version: String,
    mock_mode: bool,
}

#[derive(Serialize, Clone)]
struct ServiceStatus {
    status: String,
    details: Option<String>,
}

pub async fn health_check(settings: web::Data<Settings>) -> impl Responder {
    let mut health = HealthStatus {
        status: "ok".to_string(),
        services: HashMap::new(),
        environment: env::var("RUST_ENV").unwrap_or("development".to_string()),
        version: env!("CARGO_PKG_VERSION").to_string(),
        mock_mode: settings.mock_mode,
    };

    let cloud_result = check_cloud_api(&settings);
    health
        .services
        .insert("cloud_api".to_string(), cloud_result.clone());

    let stripe_result = check_stripe(&settings);
    health
        .services
        .insert("stripe".to_string(), stripe_result.clone());

    if cloud_result.status != "ok" || stripe_result.status != "ok" {
        health.status = "degraded".to_string();
    }

    HttpResponse::Ok().json(health)
}

fn check_cloud_api(settings: &Settings) -> ServiceStatus {
    let host = settings.cloud_api_url.host_str().unwrap_or("unknown host");
    let details = if settings.cloud_api_token.is_some() {
        format!("Cloud API at {} (token configured)", host)
    } else {
        format!("Cloud API at {} (no token)", host)
    };

    ServiceStatus {
        status: "ok".to_string(),
        details: Some(details),
    }
}

fn check_stripe(settings: &Settings) -> ServiceStatus {
    match &settings.stripe_publishable_key {
        Some(key) => ServiceStatus {
            status: "ok".to_string(),
            details: Some(format!("Stripe key configured ({})", mask_key(key))),
        },
        None if settings.mock_mode => ServiceStatus {
            status: "ok".to_string(),
            details: Some("Mock mode, Stripe is not contacted".to_string()),
        },
        None => ServiceStatus {
            status: "error".to_string(),
            details: Some("STRIPE_PUBLISHABLE_KEY not configured".to_string()),
        },
    }
}

fn mask_key(key: &str) -> String {
    if key.len() > 8 && key.is_char_boundary(4) && key.is_char_boundary(key.len() - 4) {
        format!("{}***{}", &key[0..4], &key[key.len() - 4..])
    } else {
        "***".to_string()
    }
}
