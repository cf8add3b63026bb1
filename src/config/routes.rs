use actix_web::{error::InternalError, web, HttpResponse};

use crate::routes::stats_routes::configure_stats_routes;
use crate::routes::test_routes::configure_test_routes;
use crate::routes::user_routes::configure_user_routes;
use crate::structs::api_response::{error_response, success_response};

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .route("/health", web::get().to(health))
        .configure(configure_user_routes)
        .configure(configure_test_routes)
        .configure(configure_stats_routes);
}

/// Malformed JSON bodies answer with the same `{success, message}` shape as
/// every other failure.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let response =
            HttpResponse::BadRequest().json(error_response(&format!("Invalid request body: {}", err)));
        InternalError::from_response(err, response).into()
    })
}

async fn health() -> HttpResponse {
    HttpResponse::Ok().json(success_response("Service is running"))
}
