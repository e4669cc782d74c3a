use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;

use cloud_billing::{config::Settings, routes, state::AppState};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let settings = Settings::from_env()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()))?;
    let state = AppState::from_settings(&settings)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;

    if settings.mock_mode {
        log::warn!("CWS_MOCK_MODE is on, card setups will not reach Stripe");
    }

    let bind = (settings.host.clone(), settings.port);
    log::info!("Starting HTTP server on {}:{}", bind.0, bind.1);

    let settings = web::Data::new(settings);
    let state = web::Data::new(state);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .app_data(settings.clone())
            .app_data(state.clone())
            .configure(routes::configure)
    })
    .bind(bind)?
    .run()
    .await
}
