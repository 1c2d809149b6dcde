//! HTTP inbound adapter exposing REST endpoints.

pub mod categories;
pub mod clients;
pub mod dto;
pub mod error;
pub mod health;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;

use actix_web::web;

pub use error::ApiResult;

/// Register the `/api` routes and their extractor error handlers.
///
/// Mount inside a scope:
///
/// ```
/// use actix_web::{App, web};
/// use directory_backend::inbound::http::configure_api;
///
/// let app = App::new().service(web::scope("/api").configure(configure_api));
/// ```
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(error::json_error_handler))
        .app_data(web::PathConfig::default().error_handler(error::path_error_handler))
        .service(categories::list_categories)
        .service(categories::create_category)
        .service(clients::list_clients)
        .service(clients::get_client)
        .service(clients::create_client)
        .service(clients::update_client)
        .service(clients::delete_client);
}
