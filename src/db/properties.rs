use sea_orm::*;
use uuid::Uuid;

use crate::models::properties::{self, Coordinates, PropertyType, UpdateProperty};

/// A validated listing ready to be stored.
#[derive(Debug, Clone)]
pub struct NewProperty {
    pub name: String,
    pub property_type: PropertyType,
    pub price: f64,
    pub location: String,
    pub description: String,
    pub image: String,
    pub coordinates: Coordinates,
}

/// Insert a new property listing.
pub async fn insert_property(
    db: &DatabaseConnection,
    input: NewProperty,
) -> Result<properties::Model, DbErr> {
    let now = chrono::Utc::now();
    let new_property = properties::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(input.name),
        property_type: Set(input.property_type),
        price: Set(input.price),
        location: Set(input.location),
        description: Set(input.description),
        image: Set(input.image),
        coordinates: Set(input.coordinates),
        created_at: Set(now),
        updated_at: Set(now),
    };

    new_property.insert(db).await
}

/// Fetch all listings, newest first.
pub async fn get_all_properties(db: &DatabaseConnection) -> Result<Vec<properties::Model>, DbErr> {
    properties::Entity::find()
        .order_by_desc(properties::Column::CreatedAt)
        .all(db)
        .await
}

/// Fetch a single listing by ID.
pub async fn get_property_by_id(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<properties::Model>, DbErr> {
    properties::Entity::find_by_id(id).one(db).await
}

/// Update an existing listing. Returns `None` when no row has this ID.
///
/// Text fields are trimmed the same way they are on insert.
pub async fn update_property(
    db: &DatabaseConnection,
    id: Uuid,
    input: UpdateProperty,
) -> Result<Option<properties::Model>, DbErr> {
    let Some(item) = properties::Entity::find_by_id(id).one(db).await? else {
        return Ok(None);
    };

    let mut active: properties::ActiveModel = item.into();

    if let Some(name) = input.name {
        active.name = Set(name.trim().to_string());
    }
    if let Some(property_type) = input.property_type {
        active.property_type = Set(property_type);
    }
    if let Some(price) = input.price {
        active.price = Set(price);
    }
    if let Some(location) = input.location {
        active.location = Set(location.trim().to_string());
    }
    if let Some(description) = input.description {
        active.description = Set(description.trim().to_string());
    }
    if let Some(image) = input.image {
        active.image = Set(image);
    }
    if let Some(coordinates) = input.coordinates {
        active.coordinates = Set(coordinates);
    }
    active.updated_at = Set(chrono::Utc::now());

    active.update(db).await.map(Some)
}

/// Delete a listing by ID.
pub async fn delete_property(db: &DatabaseConnection, id: Uuid) -> Result<DeleteResult, DbErr> {
    properties::Entity::delete_by_id(id).exec(db).await
}
