use actix_cors::Cors;
use actix_web::web;

pub mod config;
pub mod error;
pub mod handlers;
pub mod helpers;
pub mod models;

/// Register the JSON extractor config and all routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(handlers::validation::json_config())
        .service(handlers::health::root)
        .service(handlers::analyze::analyze_company);
}

/// Browser origin allow-list with credentials, any method, any header
pub fn cors(cors_config: &config::CorsConfig) -> Cors {
    cors_config
        .allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allow_any_method()
        .allow_any_header()
        .supports_credentials()
}
