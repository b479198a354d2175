use sea_orm::FromJsonQueryResult;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Image used for listings created without one.
pub const DEFAULT_PROPERTY_IMAGE: &str =
    "https://images.unsplash.com/photo-1560518883-ce09059eeffa?w=800";

/// The `PropertyType` enum maps to a Postgres TEXT column holding the display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum PropertyType {
    #[sea_orm(string_value = "Apartment")]
    Apartment,
    #[sea_orm(string_value = "House")]
    House,
    #[sea_orm(string_value = "Villa")]
    Villa,
    #[sea_orm(string_value = "Commercial")]
    Commercial,
    #[sea_orm(string_value = "Land")]
    Land,
}

impl PropertyType {
    /// Parse a display name; `None` for anything outside the closed set.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Apartment" => Some(Self::Apartment),
            "House" => Some(Self::House),
            "Villa" => Some(Self::Villa),
            "Commercial" => Some(Self::Commercial),
            "Land" => Some(Self::Land),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Apartment => "Apartment",
            Self::House => "House",
            Self::Villa => "Villa",
            Self::Commercial => "Commercial",
            Self::Land => "Land",
        }
    }
}

/// Map position of a listing.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// SeaORM entity for the `properties` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "properties")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    #[sea_orm(column_name = "type")]
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    #[sea_orm(column_type = "Double")]
    pub price: f64,
    pub location: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub image: String,
    #[sea_orm(column_type = "JsonBinary")]
    pub coordinates: Coordinates,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

/// Body of `POST /api/properties`.
///
/// Text fields default to empty so a missing field surfaces as a validation
/// error with a readable message instead of a deserializer error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateProperty {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub property_type: Option<PropertyType>,
    pub price: Option<f64>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub description: String,
    pub image: Option<String>,
    /// When absent the server geocodes `location`.
    pub coordinates: Option<Coordinates>,
}

/// Body of `PUT /api/properties/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProperty {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub property_type: Option<PropertyType>,
    pub price: Option<f64>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub coordinates: Option<Coordinates>,
}
