//! Forward and reverse geocoding against a Nominatim-compatible service

use crate::{core::geo::LatLng, services::HTTP_CLIENT, Error, Result};
use async_trait::async_trait;
use serde::Deserialize;

const DEFAULT_BASE_URL: &str = "https://nominatim.openstreetmap.org";

/// Display name returned when the reverse endpoint resolves no address
pub const ADDRESS_NOT_FOUND: &str = "Address not found";

/// A geocoding result: a coordinate plus its human-readable name
#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    pub position: LatLng,
    pub display_name: String,
}

/// Trait representing a geocoding service
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Resolve a free-form query to places, best match first, at most
    /// `limit` results
    async fn forward_search(&self, term: &str, limit: usize) -> Result<Vec<Place>>;

    /// Resolve a coordinate to a display name. Falls back to
    /// [`ADDRESS_NOT_FOUND`] when the service has no name for the spot.
    async fn reverse_lookup(&self, position: LatLng) -> Result<String>;
}

/// Geocoder backed by the Nominatim HTTP API
pub struct NominatimClient {
    base_url: String,
}

impl NominatimClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl Default for NominatimClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[async_trait]
impl Geocoder for NominatimClient {
    async fn forward_search(&self, term: &str, limit: usize) -> Result<Vec<Place>> {
        let url = format!("{}/search", self.base_url);
        log::debug!("forward geocoding {:?} (limit {})", term, limit);

        let response = HTTP_CLIENT
            .get(&url)
            .query(&[("format", "json"), ("q", term)])
            .query(&[("limit", &limit.to_string())])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Error::Service(format!(
                "geocoding search returned HTTP {}",
                response.status()
            )));
        }

        let body = response.text().await?;
        decode_search_body(&body)
    }

    async fn reverse_lookup(&self, position: LatLng) -> Result<String> {
        let url = format!("{}/reverse", self.base_url);
        log::debug!(
            "reverse geocoding {:.6},{:.6}",
            position.lat,
            position.lng
        );

        let response = HTTP_CLIENT
            .get(&url)
            .query(&[("lat", position.lat), ("lon", position.lng)])
            .query(&[("format", "json")])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Error::Service(format!(
                "reverse geocoding returned HTTP {}",
                response.status()
            )));
        }

        let body = response.text().await?;
        decode_reverse_body(&body)
    }
}

/// Nominatim serializes coordinates as JSON strings
#[derive(Debug, Deserialize)]
struct SearchHit {
    lat: String,
    lon: String,
    display_name: String,
}

#[derive(Debug, Deserialize)]
struct ReverseResponse {
    display_name: Option<String>,
}

fn decode_search_body(body: &str) -> Result<Vec<Place>> {
    let hits: Vec<SearchHit> = serde_json::from_str(body)
        .map_err(|e| Error::Service(format!("malformed geocoding response: {}", e)))?;

    hits.into_iter()
        .map(|hit| {
            let lat = hit.lat.parse::<f64>();
            let lon = hit.lon.parse::<f64>();
            match (lat, lon) {
                (Ok(lat), Ok(lon)) => Ok(Place {
                    position: LatLng::new(lat, lon),
                    display_name: hit.display_name,
                }),
                _ => Err(Error::Service(format!(
                    "unparsable coordinates in geocoding response: {},{}",
                    hit.lat, hit.lon
                ))),
            }
        })
        .collect()
}

fn decode_reverse_body(body: &str) -> Result<String> {
    let response: ReverseResponse = serde_json::from_str(body)
        .map_err(|e| Error::Service(format!("malformed reverse geocoding response: {}", e)))?;

    Ok(response
        .display_name
        .unwrap_or_else(|| ADDRESS_NOT_FOUND.to_string()))
}
