//! Driving-route computation against an OSRM-compatible service

use crate::{
    core::geo::{LatLng, LatLngBounds},
    services::HTTP_CLIENT,
    Error, Result,
};
use async_trait::async_trait;
use serde::Deserialize;

const DEFAULT_BASE_URL: &str = "https://router.project-osrm.org";

/// A computed route between two points
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    /// Ordered path coordinates, origin first
    pub geometry: Vec<LatLng>,
    pub distance_m: f64,
    pub duration_s: f64,
}

impl Route {
    pub fn distance_km(&self) -> f64 {
        self.distance_m / 1000.0
    }

    /// Duration rounded to whole minutes
    pub fn duration_min(&self) -> i64 {
        (self.duration_s / 60.0).round() as i64
    }

    /// Display summary, e.g. "5.4 km, 10 min"
    pub fn summary(&self) -> String {
        format!("{:.1} km, {} min", self.distance_km(), self.duration_min())
    }

    /// The tightest bounds containing the geometry
    pub fn bounds(&self) -> Option<LatLngBounds> {
        LatLngBounds::from_points(&self.geometry)
    }
}

/// Trait representing a routing service
#[async_trait]
pub trait Router: Send + Sync {
    /// Compute a driving route. `Ok(None)` means the service found no route
    /// between the points, which is a normal outcome rather than an error.
    async fn route(&self, origin: LatLng, destination: LatLng) -> Result<Option<Route>>;
}

/// Router backed by the OSRM HTTP API
pub struct OsrmClient {
    base_url: String,
    profile: String,
}

impl OsrmClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            profile: "driving".to_string(),
        }
    }

    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = profile.into();
        self
    }
}

impl Default for OsrmClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[async_trait]
impl Router for OsrmClient {
    async fn route(&self, origin: LatLng, destination: LatLng) -> Result<Option<Route>> {
        // OSRM takes lon,lat pairs in the path
        let url = format!(
            "{}/route/v1/{}/{},{};{},{}",
            self.base_url, self.profile, origin.lng, origin.lat, destination.lng, destination.lat
        );
        log::debug!(
            "routing {:.6},{:.6} -> {:.6},{:.6}",
            origin.lat,
            origin.lng,
            destination.lat,
            destination.lng
        );

        let response = HTTP_CLIENT
            .get(&url)
            .query(&[("overview", "full"), ("geometries", "geojson")])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Error::Service(format!(
                "routing returned HTTP {}",
                response.status()
            )));
        }

        let body = response.text().await?;
        decode_route_body(&body)
    }
}

#[derive(Debug, Deserialize)]
struct RouteResponse {
    routes: Vec<OsrmRoute>,
}

#[derive(Debug, Deserialize)]
struct OsrmRoute {
    geometry: LineGeometry,
    distance: f64,
    duration: f64,
}

/// GeoJSON LineString coordinates, `[lon, lat]` order
#[derive(Debug, Deserialize)]
struct LineGeometry {
    coordinates: Vec<[f64; 2]>,
}

fn decode_route_body(body: &str) -> Result<Option<Route>> {
    let response: RouteResponse = serde_json::from_str(body)
        .map_err(|e| Error::Service(format!("malformed routing response: {}", e)))?;

    let Some(first) = response.routes.into_iter().next() else {
        return Ok(None);
    };

    let geometry = first
        .geometry
        .coordinates
        .into_iter()
        .map(|[lng, lat]| LatLng::new(lat, lng))
        .collect();

    Ok(Some(Route {
        geometry,
        distance_m: first.distance,
        duration_s: first.duration,
    }))
}
