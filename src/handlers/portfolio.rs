use actix_web::{HttpResponse, web};
use sea_orm::DatabaseConnection;

use crate::db::portfolio as portfolio_db;
use crate::errors::{ApiError, parse_id};
use crate::intake::validate_document;
use crate::listing::{PortfolioFilter, ProfileCard};
use crate::models::portfolio::{CreatePortfolio, UpdatePortfolio};
use crate::render::{self, Layout};

const ENTITY: &str = "Portfolio";

/// GET /api/portfolios — list portfolios, optionally filtered by `?role=` and `?skill=`.
pub async fn get_portfolios(
    db: web::Data<DatabaseConnection>,
    filter: web::Query<PortfolioFilter>,
) -> Result<HttpResponse, ApiError> {
    let items = portfolio_db::get_all_portfolios(db.get_ref()).await?;
    Ok(HttpResponse::Ok().json(filter.apply(items)))
}

/// GET /api/portfolios/cards — the same list as profile-card summaries.
pub async fn get_portfolio_cards(
    db: web::Data<DatabaseConnection>,
    filter: web::Query<PortfolioFilter>,
) -> Result<HttpResponse, ApiError> {
    let items = portfolio_db::get_all_portfolios(db.get_ref()).await?;
    let cards: Vec<ProfileCard> = filter.apply(items).iter().map(ProfileCard::from).collect();
    Ok(HttpResponse::Ok().json(cards))
}

/// GET /api/portfolios/{id} — get a single portfolio.
pub async fn get_portfolio(
    db: web::Data<DatabaseConnection>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_id(&path, ENTITY)?;
    let item = portfolio_db::get_portfolio_by_id(db.get_ref(), id)
        .await?
        .ok_or_else(|| ApiError::not_found(ENTITY, id))?;
    Ok(HttpResponse::Ok().json(item))
}

/// GET /api/portfolios/{id}/page — the public page, rendered with the stored template.
pub async fn get_portfolio_page(
    db: web::Data<DatabaseConnection>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_id(&path, ENTITY)?;
    let item = portfolio_db::get_portfolio_by_id(db.get_ref(), id)
        .await?
        .ok_or_else(|| ApiError::not_found(ENTITY, id))?;

    let layout = Layout::for_document(&item);
    tracing::debug!("Rendering portfolio {id} with {}", layout.name());
    let html = render::render(layout, &item)?;

    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html))
}

/// POST /api/portfolios — create a portfolio.
///
/// Required fields are enforced here as well, independently of the intake wizard.
pub async fn create_portfolio(
    db: web::Data<DatabaseConnection>,
    body: web::Json<CreatePortfolio>,
) -> Result<HttpResponse, ApiError> {
    let input = body.into_inner();

    let errors = validate_document(&input);
    if !errors.is_empty() {
        let summary: Vec<&str> = errors.values().copied().collect();
        return Err(ApiError::Validation(format!(
            "Portfolio validation failed: {}",
            summary.join(", ")
        )));
    }

    let item = portfolio_db::insert_portfolio(db.get_ref(), input).await?;
    tracing::info!("Created portfolio {} (template {})", item.id, item.template_id);
    Ok(HttpResponse::Created().json(item))
}

/// PUT /api/portfolios/{id} — replace the given sections of a portfolio.
pub async fn update_portfolio(
    db: web::Data<DatabaseConnection>,
    path: web::Path<String>,
    body: web::Json<UpdatePortfolio>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_id(&path, ENTITY)?;
    let updated = portfolio_db::update_portfolio(db.get_ref(), id, body.into_inner())
        .await?
        .ok_or_else(|| ApiError::not_found(ENTITY, id))?;
    tracing::info!("Updated portfolio {id}");
    Ok(HttpResponse::Ok().json(updated))
}
