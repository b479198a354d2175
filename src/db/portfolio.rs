use sea_orm::*;
use uuid::Uuid;

use crate::models::portfolio::{self, CreatePortfolio, UpdatePortfolio};

/// Insert a new portfolio.
pub async fn insert_portfolio(
    db: &DatabaseConnection,
    input: CreatePortfolio,
) -> Result<portfolio::Model, DbErr> {
    let now = chrono::Utc::now();
    let new_portfolio = portfolio::ActiveModel {
        id: Set(Uuid::new_v4()),
        template_id: Set(input.template_id),
        hero: Set(input.hero),
        about: Set(input.about),
        skills: Set(input.skills),
        services: Set(input.services),
        projects: Set(input.projects),
        testimonials: Set(input.testimonials),
        blog: Set(input.blog),
        contact: Set(input.contact),
        created_at: Set(now),
        updated_at: Set(now),
    };

    new_portfolio.insert(db).await
}

/// Fetch all portfolios in creation order.
pub async fn get_all_portfolios(db: &DatabaseConnection) -> Result<Vec<portfolio::Model>, DbErr> {
    portfolio::Entity::find()
        .order_by_asc(portfolio::Column::CreatedAt)
        .all(db)
        .await
}

/// Fetch a single portfolio by ID.
pub async fn get_portfolio_by_id(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<portfolio::Model>, DbErr> {
    portfolio::Entity::find_by_id(id).one(db).await
}

/// Update an existing portfolio. Returns `None` when no row has this ID.
pub async fn update_portfolio(
    db: &DatabaseConnection,
    id: Uuid,
    input: UpdatePortfolio,
) -> Result<Option<portfolio::Model>, DbErr> {
    let Some(item) = portfolio::Entity::find_by_id(id).one(db).await? else {
        return Ok(None);
    };

    let mut active: portfolio::ActiveModel = item.into();

    if let Some(template_id) = input.template_id {
        active.template_id = Set(template_id);
    }
    if let Some(hero) = input.hero {
        active.hero = Set(hero);
    }
    if let Some(about) = input.about {
        active.about = Set(about);
    }
    if let Some(skills) = input.skills {
        active.skills = Set(skills);
    }
    if let Some(services) = input.services {
        active.services = Set(services);
    }
    if let Some(projects) = input.projects {
        active.projects = Set(projects);
    }
    if let Some(testimonials) = input.testimonials {
        active.testimonials = Set(testimonials);
    }
    if let Some(blog) = input.blog {
        active.blog = Set(blog);
    }
    if let Some(contact) = input.contact {
        active.contact = Set(contact);
    }
    active.updated_at = Set(chrono::Utc::now());

    active.update(db).await.map(Some)
}
