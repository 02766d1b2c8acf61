//! Configuration types for the map view and controller

use crate::core::geo::{LatLng, Point};
use crate::location::GeolocationOptions;

/// Options for the map view surface
#[derive(Debug, Clone, PartialEq)]
pub struct MapViewOptions {
    /// Viewport size in pixels, used when fitting bounds
    pub size: Point,
    pub min_zoom: f64,
    pub max_zoom: f64,
}

impl Default for MapViewOptions {
    fn default() -> Self {
        Self {
            size: Point::new(1024.0, 768.0),
            min_zoom: 0.0,
            max_zoom: 18.0,
        }
    }
}

/// Options governing the controller's behavior
#[derive(Debug, Clone, PartialEq)]
pub struct MapControllerOptions {
    /// View shown before any interaction
    pub initial_center: LatLng,
    pub initial_zoom: f64,
    /// Zoom applied when panning to a search result
    pub search_zoom: f64,
    /// Zoom applied when panning to the located user
    pub locate_zoom: f64,
    /// Number of results requested from forward geocoding
    pub search_limit: usize,
    /// Pixel padding used when fitting the view to a route
    pub route_fit_padding: f64,
    pub geolocation: GeolocationOptions,
    pub view: MapViewOptions,
}

impl Default for MapControllerOptions {
    fn default() -> Self {
        Self {
            initial_center: LatLng::new(14.09, 120.68),
            initial_zoom: 13.0,
            search_zoom: 15.0,
            locate_zoom: 15.0,
            search_limit: 1,
            route_fit_padding: 40.0,
            geolocation: GeolocationOptions::default(),
            view: MapViewOptions::default(),
        }
    }
}
