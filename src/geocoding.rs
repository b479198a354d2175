use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::properties::Coordinates;

/// Coordinate used when a location cannot be resolved (centre of India).
pub const FALLBACK_COORDINATES: Coordinates = Coordinates {
    lat: 20.5937,
    lng: 78.9629,
};

#[derive(Debug, Error)]
pub enum GeocodeError {
    #[error("geocoding request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("geocoding service answered HTTP {0}")]
    Status(reqwest::StatusCode),

    #[error("unparseable coordinate {0:?}")]
    BadCoordinate(String),
}

/// Outcome of a lookup. `resolved` is false when the fallback was used.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeocodeResult {
    pub coordinates: Coordinates,
    pub display_name: String,
    pub resolved: bool,
}

/// One hit in a Nominatim `search?format=json` answer. Coordinates come back as strings.
#[derive(Debug, Deserialize)]
struct Place {
    lat: String,
    lon: String,
    #[serde(default)]
    display_name: Option<String>,
}

/// Free-text location → coordinate lookup against a Nominatim-compatible service.
#[derive(Clone)]
pub struct Geocoder {
    client: reqwest::Client,
    base_url: String,
    user_agent: String,
}

impl Geocoder {
    pub fn new(base_url: &str, user_agent: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            user_agent: user_agent.to_string(),
        }
    }

    /// Resolve `location`, never failing: transport errors, bad statuses and
    /// empty answers all yield [`FALLBACK_COORDINATES`].
    pub async fn geocode(&self, location: &str) -> GeocodeResult {
        match self.lookup(location).await {
            Ok(Some(found)) => found,
            Ok(None) => {
                debug!("No geocoding match for {location:?}, using fallback");
                Self::fallback(location)
            }
            Err(e) => {
                warn!("Geocoding failed for {location:?}: {e}");
                Self::fallback(location)
            }
        }
    }

    async fn lookup(&self, location: &str) -> Result<Option<GeocodeResult>, GeocodeError> {
        let url = format!("{}/search", self.base_url);
        debug!("Geocoding {location:?} via {url}");

        let response = self
            .client
            .get(&url)
            .query(&[("format", "json"), ("q", location), ("limit", "1")])
            .header(reqwest::header::USER_AGENT, &self.user_agent)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GeocodeError::Status(status));
        }

        let places: Vec<Place> = response.json().await?;
        let Some(place) = places.into_iter().next() else {
            return Ok(None);
        };

        let lat = parse_coordinate(&place.lat)?;
        let lng = parse_coordinate(&place.lon)?;

        Ok(Some(GeocodeResult {
            coordinates: Coordinates { lat, lng },
            display_name: place.display_name.unwrap_or_else(|| location.to_string()),
            resolved: true,
        }))
    }

    fn fallback(location: &str) -> GeocodeResult {
        GeocodeResult {
            coordinates: FALLBACK_COORDINATES,
            display_name: location.to_string(),
            resolved: false,
        }
    }
}

fn parse_coordinate(raw: &str) -> Result<f64, GeocodeError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| GeocodeError::BadCoordinate(raw.to_string()))
}
