pub mod health;
pub mod portfolio;
pub mod properties;

use actix_web::error::InternalError;
use actix_web::{HttpResponse, web};

/// Turn an extractor failure into the same `{"error": ...}` body the handlers use.
fn bad_request<E>(err: E) -> actix_web::Error
where
    E: std::fmt::Display + std::fmt::Debug + 'static,
{
    let body = serde_json::json!({ "error": err.to_string() });
    InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| bad_request(err)));
    cfg.app_data(web::QueryConfig::default().error_handler(|err, _req| bad_request(err)));

    cfg.route("/health", web::get().to(health::health));

    // ── Portfolio routes (no delete) ──
    cfg.service(
        web::resource("/portfolios")
            .route(web::get().to(portfolio::get_portfolios))
            .route(web::post().to(portfolio::create_portfolio)),
    );
    cfg.service(
        web::resource("/portfolios/cards").route(web::get().to(portfolio::get_portfolio_cards)),
    );
    cfg.service(
        web::resource("/portfolios/{id}")
            .route(web::get().to(portfolio::get_portfolio))
            .route(web::put().to(portfolio::update_portfolio)),
    );
    cfg.service(
        web::resource("/portfolios/{id}/page").route(web::get().to(portfolio::get_portfolio_page)),
    );

    // ── Property routes ──
    cfg.service(
        web::scope("/properties")
            .route("", web::get().to(properties::get_properties))
            .route("", web::post().to(properties::create_property))
            .route("/{id}", web::get().to(properties::get_property))
            .route("/{id}", web::put().to(properties::update_property))
            .route("/{id}", web::delete().to(properties::delete_property)),
    );
}
