//! Fluent construction of [`MapController`] instances
//!
//! Collaborators not supplied explicitly fall back to the public Nominatim
//! and OSRM endpoints, a log-backed notifier, and an auto-accepting
//! confirmation prompt. Geolocation has no portable default and stays absent
//! unless a provider is injected.

use crate::{
    controller::MapController,
    core::config::{MapControllerOptions, MapViewOptions},
    core::geo::LatLng,
    location::{GeolocationOptions, LocationProvider},
    services::{
        geocoding::{Geocoder, NominatimClient},
        routing::{OsrmClient, Router},
    },
    ui::{
        notifier::{LogNotifier, Notifier},
        prompt::{AutoConfirm, ConfirmationPrompt},
    },
};
use std::sync::Arc;

/// Builder for creating and configuring [`MapController`] instances
pub struct MapControllerBuilder {
    options: MapControllerOptions,
    geocoder: Option<Arc<dyn Geocoder>>,
    router: Option<Arc<dyn Router>>,
    location: Option<Arc<dyn LocationProvider>>,
    notifier: Option<Arc<dyn Notifier>>,
    prompt: Option<Arc<dyn ConfirmationPrompt>>,
}

impl MapControllerBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self {
            options: MapControllerOptions::default(),
            geocoder: None,
            router: None,
            location: None,
            notifier: None,
            prompt: None,
        }
    }

    /// Replace the full option set
    pub fn with_options(mut self, options: MapControllerOptions) -> Self {
        self.options = options;
        self
    }

    /// Set the initial center and zoom level
    pub fn with_initial_view(mut self, center: LatLng, zoom: f64) -> Self {
        self.options.initial_center = center;
        self.options.initial_zoom = zoom;
        self
    }

    /// Set the view surface options (viewport size, zoom limits)
    pub fn with_view_options(mut self, view: MapViewOptions) -> Self {
        self.options.view = view;
        self
    }

    /// Set the geolocation request options
    pub fn with_geolocation_options(mut self, geolocation: GeolocationOptions) -> Self {
        self.options.geolocation = geolocation;
        self
    }

    /// Set the geocoding service
    pub fn with_geocoder(mut self, geocoder: Arc<dyn Geocoder>) -> Self {
        self.geocoder = Some(geocoder);
        self
    }

    /// Set the routing service
    pub fn with_router(mut self, router: Arc<dyn Router>) -> Self {
        self.router = Some(router);
        self
    }

    /// Set the platform geolocation capability
    pub fn with_location_provider(mut self, provider: Arc<dyn LocationProvider>) -> Self {
        self.location = Some(provider);
        self
    }

    /// Set the notification sink
    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    /// Set the confirmation prompt
    pub fn with_prompt(mut self, prompt: Arc<dyn ConfirmationPrompt>) -> Self {
        self.prompt = Some(prompt);
        self
    }

    /// Build the controller with the configured collaborators
    pub fn build(self) -> MapController {
        let geocoder = self
            .geocoder
            .unwrap_or_else(|| Arc::new(NominatimClient::default()));
        let router = self
            .router
            .unwrap_or_else(|| Arc::new(OsrmClient::default()));
        let notifier = self.notifier.unwrap_or_else(|| Arc::new(LogNotifier));
        let prompt = self.prompt.unwrap_or_else(|| Arc::new(AutoConfirm));

        MapController::from_parts(
            self.options,
            geocoder,
            router,
            self.location,
            notifier,
            prompt,
        )
    }
}

impl Default for MapControllerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
