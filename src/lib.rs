//! # Wayfarer
//!
//! An interactive map controller inspired by Leaflet-style web maps.
//!
//! This library wires user intents (click, search, locate, marker placement,
//! route requests) to a geocoding service, a routing service, and the
//! platform's geolocation capability, and keeps the rendered map state
//! (markers, route polyline, popups) consistent while the asynchronous
//! results arrive. Rendering itself, the notification banner, and the
//! confirmation dialog are injected collaborators, so the controller runs
//! headless in tests.

pub mod controller;
pub mod core;
pub mod location;
pub mod services;
pub mod ui;

pub mod prelude;

// Re-export public API
pub use crate::core::{
    builder::MapControllerBuilder,
    config::{MapControllerOptions, MapViewOptions},
    geo::{LatLng, LatLngBounds, Point},
    map::MapView,
    overlay::{
        Color, LineStyle, Marker, Overlay, OverlayId, OverlayKind, Polyline, Popup, PopupAction,
    },
};

pub use crate::controller::{MapController, MarkerHandle};

pub use crate::services::{
    geocoding::{Geocoder, NominatimClient, Place},
    routing::{OsrmClient, Route, Router},
};

pub use crate::location::{GeolocationError, GeolocationOptions, LocationFix, LocationProvider};

pub use crate::ui::{
    notifier::{LogNotifier, NoticeLevel, Notifier},
    prompt::{AutoConfirm, ConfirmationPrompt},
};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, MapError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("service error: {0}")]
    Service(String),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("geolocation error: {0}")]
    Geolocation(#[from] location::GeolocationError),
}

/// Error type alias for convenience
pub type Error = MapError;
