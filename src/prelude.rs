//! Prelude module for common wayfarer types and traits
//!
//! This module re-exports the most commonly used types, traits, and functions
//! for easy importing with `use wayfarer::prelude::*;`

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

pub use crate::{Error as MapError, Result};

pub use std::{sync::Arc, time::Duration};

pub use fxhash::FxHashMap as HashMap;
