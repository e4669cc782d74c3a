use actix_web::web;

pub mod cloud;
pub mod health;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/api/cloud")
                .route("/payment-method", web::post().to(cloud::add_payment_method))
                .route("/subscription", web::put().to(cloud::subscribe))
                .route("/limits", web::get().to(cloud::get_limits))
                .route("/limits/refresh", web::post().to(cloud::refresh_limits)),
        );
}
