use actix_web::{HttpResponse, web};
use sea_orm::DatabaseConnection;

use crate::db::properties::{self as property_db, NewProperty};
use crate::errors::{ApiError, parse_id};
use crate::geocoding::Geocoder;
use crate::listing::PropertyFilter;
use crate::models::properties::{
    Coordinates, CreateProperty, DEFAULT_PROPERTY_IMAGE, PropertyType, UpdateProperty,
};

const ENTITY: &str = "Property";

fn check_price(price: f64) -> Result<f64, ApiError> {
    if price.is_finite() && price >= 0.0 {
        Ok(price)
    } else {
        Err(ApiError::Validation("Price must be a number of at least 0".to_string()))
    }
}

fn required(value: &str, message: &str) -> Result<String, ApiError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ApiError::Validation(message.to_string()))
    } else {
        Ok(trimmed.to_string())
    }
}

/// A create body that passed validation; coordinates may still need resolving.
struct CheckedProperty {
    name: String,
    property_type: PropertyType,
    price: f64,
    location: String,
    description: String,
    image: String,
    coordinates: Option<Coordinates>,
}

impl CheckedProperty {
    fn with_coordinates(self, coordinates: Coordinates) -> NewProperty {
        NewProperty {
            name: self.name,
            property_type: self.property_type,
            price: self.price,
            location: self.location,
            description: self.description,
            image: self.image,
            coordinates,
        }
    }
}

fn validate_create(input: CreateProperty) -> Result<CheckedProperty, ApiError> {
    let name = required(&input.name, "Property name is required")?;
    let property_type = input
        .property_type
        .ok_or_else(|| ApiError::Validation("Property type is required".to_string()))?;
    let price = input
        .price
        .ok_or_else(|| ApiError::Validation("Price is required".to_string()))
        .and_then(check_price)?;
    let location = required(&input.location, "Location is required")?;
    let description = required(&input.description, "Description is required")?;
    let image = input
        .image
        .filter(|img| !img.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_PROPERTY_IMAGE.to_string());

    Ok(CheckedProperty {
        name,
        property_type,
        price,
        location,
        description,
        image,
        coordinates: input.coordinates,
    })
}

fn validate_update(input: &UpdateProperty) -> Result<(), ApiError> {
    if let Some(name) = &input.name {
        required(name, "Property name is required")?;
    }
    if let Some(price) = input.price {
        check_price(price)?;
    }
    if let Some(location) = &input.location {
        required(location, "Location is required")?;
    }
    if let Some(description) = &input.description {
        required(description, "Description is required")?;
    }
    Ok(())
}

/// GET /api/properties — list listings, newest first, optionally filtered by `?search=` and `?type=`.
pub async fn get_properties(
    db: web::Data<DatabaseConnection>,
    filter: web::Query<PropertyFilter>,
) -> Result<HttpResponse, ApiError> {
    let items = property_db::get_all_properties(db.get_ref()).await?;
    Ok(HttpResponse::Ok().json(filter.apply(items)))
}

/// GET /api/properties/{id} — get a single listing.
pub async fn get_property(
    db: web::Data<DatabaseConnection>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_id(&path, ENTITY)?;
    let item = property_db::get_property_by_id(db.get_ref(), id)
        .await?
        .ok_or_else(|| ApiError::not_found(ENTITY, id))?;
    Ok(HttpResponse::Ok().json(item))
}

/// POST /api/properties — create a listing.
///
/// Coordinates sent by the caller are stored as-is; otherwise the location
/// is geocoded, falling back to the default coordinate when it cannot be resolved.
pub async fn create_property(
    db: web::Data<DatabaseConnection>,
    geocoder: web::Data<Geocoder>,
    body: web::Json<CreateProperty>,
) -> Result<HttpResponse, ApiError> {
    let checked = validate_create(body.into_inner())?;

    let coordinates = match checked.coordinates {
        Some(coordinates) => coordinates,
        None => geocoder.geocode(&checked.location).await.coordinates,
    };

    let new_property = checked.with_coordinates(coordinates);
    let item = property_db::insert_property(db.get_ref(), new_property).await?;
    tracing::info!(
        "Created property {} at ({}, {})",
        item.id,
        item.coordinates.lat,
        item.coordinates.lng
    );
    Ok(HttpResponse::Created().json(item))
}

/// PUT /api/properties/{id} — update a listing.
pub async fn update_property(
    db: web::Data<DatabaseConnection>,
    path: web::Path<String>,
    body: web::Json<UpdateProperty>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_id(&path, ENTITY)?;
    let input = body.into_inner();
    validate_update(&input)?;

    let updated = property_db::update_property(db.get_ref(), id, input)
        .await?
        .ok_or_else(|| ApiError::not_found(ENTITY, id))?;
    tracing::info!("Updated property {id}");
    Ok(HttpResponse::Ok().json(updated))
}

/// DELETE /api/properties/{id} — delete a listing.
pub async fn delete_property(
    db: web::Data<DatabaseConnection>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_id(&path, ENTITY)?;
    let result = property_db::delete_property(db.get_ref(), id).await?;
    if result.rows_affected == 0 {
        return Err(ApiError::not_found(ENTITY, id));
    }

    tracing::info!("Deleted property {id}");
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": format!("Property {id} deleted"),
    })))
}
