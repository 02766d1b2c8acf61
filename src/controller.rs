//! The map controller
//!
//! Owns the application state (current user location, active markers, active
//! route) and wires user intents to the geocoding/routing services, the
//! platform geolocation capability, and the map view. Every handler catches
//! its own failures and converts them into a single user notification;
//! nothing propagates to the caller.
//!
//! Handlers take `&mut self`, so state mutation is serialized by the borrow
//! checker: a second request of any kind cannot start before the previous
//! one has run to completion on the same controller.

use crate::{
    core::{
        config::MapControllerOptions,
        geo::{LatLng, LatLngBounds},
        map::MapView,
        overlay::{LineStyle, Marker, OverlayId, Polyline, Popup, PopupAction},
    },
    location::{GeolocationError, LocationFix, LocationProvider},
    services::{
        geocoding::Geocoder,
        routing::{Route, Router},
    },
    ui::{
        notifier::{NoticeLevel, Notifier},
        prompt::ConfirmationPrompt,
    },
    Error, Result,
};
use std::sync::Arc;

const MSG_EMPTY_SEARCH: &str = "Please enter a location to search for";
const MSG_SEARCH_NOT_FOUND: &str = "Location not found. Please try a different search term";
const MSG_SEARCH_FAILED: &str = "Error searching for location. Please try again";
const MSG_GEOLOCATION_UNSUPPORTED: &str = "Geolocation is not supported on this device";
const MSG_NO_MARKERS: &str = "No markers to clear";
const MSG_NO_LOCATION: &str = "Current location unknown. Locate yourself before requesting a route";
const MSG_NO_ROUTE: &str = "No route found between these points";
const MSG_ROUTE_FAILED: &str = "Error computing route. Please try again";
const MSG_LOADING_ADDRESS: &str = "Loading address...";
const MSG_ADDRESS_UNAVAILABLE: &str = "Unable to fetch address";

/// A marker owned by the controller, paired with its rendered overlay
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerHandle {
    pub id: OverlayId,
    pub position: LatLng,
    pub label: String,
}

struct ActiveRoute {
    line: OverlayId,
    summary_popup: OverlayId,
    route: Route,
}

pub struct MapController {
    view: MapView,
    geocoder: Arc<dyn Geocoder>,
    router: Arc<dyn Router>,
    location: Option<Arc<dyn LocationProvider>>,
    notifier: Arc<dyn Notifier>,
    prompt: Arc<dyn ConfirmationPrompt>,
    options: MapControllerOptions,
    user_location: Option<LocationFix>,
    /// Rendered marker for the user's position; replaced, never stacked
    user_location_marker: Option<OverlayId>,
    markers: Vec<MarkerHandle>,
    active_route: Option<ActiveRoute>,
}

impl MapController {
    /// Start configuring a controller
    pub fn builder() -> crate::core::builder::MapControllerBuilder {
        crate::core::builder::MapControllerBuilder::new()
    }

    pub(crate) fn from_parts(
        options: MapControllerOptions,
        geocoder: Arc<dyn Geocoder>,
        router: Arc<dyn Router>,
        location: Option<Arc<dyn LocationProvider>>,
        notifier: Arc<dyn Notifier>,
        prompt: Arc<dyn ConfirmationPrompt>,
    ) -> Self {
        let view = MapView::with_options(
            options.initial_center,
            options.initial_zoom,
            options.view.clone(),
        );

        Self {
            view,
            geocoder,
            router,
            location,
            notifier,
            prompt,
            options,
            user_location: None,
            user_location_marker: None,
            markers: Vec::new(),
            active_route: None,
        }
    }

    pub fn view(&self) -> &MapView {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut MapView {
        &mut self.view
    }

    pub fn options(&self) -> &MapControllerOptions {
        &self.options
    }

    /// The last successful geolocation fix, if any
    pub fn user_location(&self) -> Option<LocationFix> {
        self.user_location
    }

    /// Markers in placement order
    pub fn markers(&self) -> &[MarkerHandle] {
        &self.markers
    }

    /// The active route, if any
    pub fn active_route(&self) -> Option<&Route> {
        self.active_route.as_ref().map(|active| &active.route)
    }

    /// Handles a click on the map surface: opens an info popup at the
    /// clicked point and fills in the address once the reverse lookup
    /// resolves. When the user's location is known, the popup offers a
    /// route request to the clicked point.
    pub async fn handle_map_click(&mut self, position: LatLng) {
        let coords = format!(
            "Latitude: {:.6}\nLongitude: {:.6}",
            position.lat, position.lng
        );

        let mut popup = Popup::new(position, format!("{}\n{}", MSG_LOADING_ADDRESS, coords));
        if self.user_location.is_some() {
            popup = popup.with_action(PopupAction::RequestRoute(position));
        }
        let popup_id = self.view.open_popup(popup);

        let address = match self.geocoder.reverse_lookup(position).await {
            Ok(name) => name,
            Err(err) => {
                log::warn!("reverse lookup failed: {}", err);
                MSG_ADDRESS_UNAVAILABLE.to_string()
            }
        };

        // The popup may have been replaced while the lookup was in flight;
        // a stale handle makes this a no-op.
        self.view
            .set_popup_content(popup_id, format!("Address: {}\n{}", address, coords));
    }

    /// Searches for a place by name and pans to the top result
    pub async fn search(&mut self, term: &str) {
        match self.try_search(term).await {
            Ok(()) => {}
            Err(Error::Validation(message)) => self.notifier.show(&message, NoticeLevel::Error),
            Err(err) => {
                log::warn!("search failed: {}", err);
                self.notifier.show(MSG_SEARCH_FAILED, NoticeLevel::Error);
            }
        }
    }

    async fn try_search(&mut self, term: &str) -> Result<()> {
        let term = term.trim();
        if term.is_empty() {
            return Err(Error::Validation(MSG_EMPTY_SEARCH.to_string()));
        }

        let places = self
            .geocoder
            .forward_search(term, self.options.search_limit)
            .await?;

        // Only the top result is consulted
        let Some(place) = places.into_iter().next() else {
            self.notifier.show(MSG_SEARCH_NOT_FOUND, NoticeLevel::Info);
            return Ok(());
        };

        self.view.set_view(place.position, self.options.search_zoom);

        let id = self
            .view
            .add_marker(Marker::new(place.position, place.display_name.clone()));
        self.view
            .open_popup(Popup::new(place.position, place.display_name.clone()));
        self.markers.push(MarkerHandle {
            id,
            position: place.position,
            label: place.display_name.clone(),
        });

        self.notifier.show(
            &format!("Location found: {}", place.display_name),
            NoticeLevel::Success,
        );
        Ok(())
    }

    /// Resolves the user's position through the injected geolocation
    /// capability, pans there, and replaces the user-location marker
    pub async fn locate_user(&mut self) {
        match self.try_locate_user().await {
            Ok(()) => {}
            Err(Error::Validation(message)) => self.notifier.show(&message, NoticeLevel::Error),
            Err(Error::Geolocation(cause)) => self.notifier.show(
                &format!("Unable to get your location: {}", cause),
                NoticeLevel::Error,
            ),
            Err(err) => {
                log::warn!("geolocation failed: {}", err);
                self.notifier.show(
                    &format!("Unable to get your location: {}", GeolocationError::Unknown),
                    NoticeLevel::Error,
                );
            }
        }
    }

    async fn try_locate_user(&mut self) -> Result<()> {
        let Some(provider) = self.location.clone() else {
            return Err(Error::Validation(MSG_GEOLOCATION_UNSUPPORTED.to_string()));
        };

        let options = self.options.geolocation.clone();

        // The budget holds even for providers that ignore their options
        let fix =
            match tokio::time::timeout(options.timeout, provider.current_position(&options)).await
            {
                Ok(result) => result?,
                Err(_) => return Err(GeolocationError::Timeout.into()),
            };

        self.user_location = Some(fix);
        self.view.set_view(fix.position, self.options.locate_zoom);

        if let Some(previous) = self.user_location_marker.take() {
            self.view.remove_overlay(previous);
        }
        let label = format!("Your location (±{:.0} m)", fix.accuracy_m);
        let id = self.view.add_marker(Marker::new(fix.position, label));
        self.user_location_marker = Some(id);

        self.notifier.show(
            &format!("Current location found (±{:.0} m)", fix.accuracy_m),
            NoticeLevel::Success,
        );
        Ok(())
    }

    /// Places a manual marker at the current view center
    pub fn add_marker_at_center(&mut self) {
        let center = self.view.center();
        let label = format!("Custom marker at {:.6}, {:.6}", center.lat, center.lng);

        let id = self.view.add_marker(Marker::new(center, label.clone()));
        self.markers.push(MarkerHandle {
            id,
            position: center,
            label,
        });

        self.notifier.show(
            &format!("Marker added at {:.6}, {:.6}", center.lat, center.lng),
            NoticeLevel::Success,
        );
    }

    /// Handles a click on a rendered marker: asks for confirmation, then
    /// removes the marker from the view and the collection. Clicks on
    /// overlays the controller does not own (e.g. the user-location marker)
    /// are ignored.
    pub fn handle_marker_click(&mut self, id: OverlayId) {
        let Some(index) = self.markers.iter().position(|marker| marker.id == id) else {
            return;
        };

        if !self.prompt.confirm("Remove this marker?") {
            return;
        }

        self.view.remove_overlay(id);
        self.markers.remove(index);
        self.notifier.show("Marker removed", NoticeLevel::Success);
    }

    /// Removes every marker after confirmation
    pub fn clear_all_markers(&mut self) {
        if self.markers.is_empty() {
            self.notifier.show(MSG_NO_MARKERS, NoticeLevel::Info);
            return;
        }

        let count = self.markers.len();
        if !self
            .prompt
            .confirm(&format!("Remove all {} markers?", count))
        {
            return;
        }

        for marker in self.markers.drain(..) {
            self.view.remove_overlay(marker.id);
        }
        self.notifier.show("All markers cleared", NoticeLevel::Success);
    }

    /// Computes a driving route from the user's location to `destination`,
    /// renders it, and opens a summary popup at the destination
    pub async fn request_route(&mut self, destination: LatLng) {
        match self.try_request_route(destination).await {
            Ok(()) => {}
            Err(Error::Validation(message)) => self.notifier.show(&message, NoticeLevel::Error),
            Err(err) => {
                log::warn!("routing failed: {}", err);
                self.notifier.show(MSG_ROUTE_FAILED, NoticeLevel::Error);
            }
        }
    }

    async fn try_request_route(&mut self, destination: LatLng) -> Result<()> {
        let Some(fix) = self.user_location else {
            return Err(Error::Validation(MSG_NO_LOCATION.to_string()));
        };
        let origin = fix.position;

        let Some(route) = self.router.route(origin, destination).await? else {
            self.notifier.show(MSG_NO_ROUTE, NoticeLevel::Info);
            return Ok(());
        };

        // Release the previous route before rendering the new one
        self.release_route_overlays();

        let line = self
            .view
            .add_polyline(Polyline::new(route.geometry.clone()).with_style(LineStyle::route()));

        let mut bounds = route
            .bounds()
            .unwrap_or_else(|| LatLngBounds::new(origin, origin));
        bounds.extend(&origin);
        bounds.extend(&destination);
        self.view
            .fit_bounds(&bounds, Some(self.options.route_fit_padding));

        let summary = route.summary();
        let summary_popup = self.view.open_popup(
            Popup::new(destination, format!("Route: {}", summary))
                .with_action(PopupAction::ClearRoute),
        );

        self.active_route = Some(ActiveRoute {
            line,
            summary_popup,
            route,
        });
        self.notifier
            .show(&format!("Route found: {}", summary), NoticeLevel::Success);
        Ok(())
    }

    /// Removes the active route and its summary popup. A no-op when no
    /// route is active.
    pub fn clear_route(&mut self) {
        if self.active_route.is_none() {
            return;
        }
        self.release_route_overlays();
        self.notifier.show("Route cleared", NoticeLevel::Success);
    }

    fn release_route_overlays(&mut self) {
        if let Some(active) = self.active_route.take() {
            self.view.remove_overlay(active.line);
            // Tolerates the summary popup having been replaced already
            self.view.remove_overlay(active.summary_popup);
        }
    }

    /// Dispatches a popup affordance activated by the user
    pub async fn activate_popup_action(&mut self, action: PopupAction) {
        match action {
            PopupAction::RequestRoute(destination) => self.request_route(destination).await,
            PopupAction::ClearRoute => self.clear_route(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::overlay::OverlayKind;

    // The synchronous handlers never touch the network, so the default
    // service clients are safe here.
    fn controller() -> MapController {
        MapController::builder().build()
    }

    #[test]
    fn test_add_marker_at_center_tracks_overlay() {
        let mut controller = controller();
        controller.add_marker_at_center();

        assert_eq!(controller.markers().len(), 1);
        let handle = &controller.markers()[0];
        assert_eq!(handle.position, controller.view().center());
        assert!(controller.view().contains(handle.id));
    }

    #[test]
    fn test_marker_click_removes_only_that_marker() {
        let mut controller = controller();
        controller.add_marker_at_center();
        controller.view_mut().set_view(LatLng::new(14.6, 121.0), 15.0);
        controller.add_marker_at_center();

        let first = controller.markers()[0].clone();
        let second = controller.markers()[1].clone();

        controller.handle_marker_click(first.id);

        assert_eq!(controller.markers(), &[second.clone()]);
        assert!(!controller.view().contains(first.id));
        assert!(controller.view().contains(second.id));
    }

    #[test]
    fn test_marker_click_ignores_unknown_overlay() {
        let mut controller = controller();
        controller.add_marker_at_center();
        let popup_id = controller
            .view_mut()
            .open_popup(Popup::new(LatLng::new(14.5, 120.9), "info"));

        controller.handle_marker_click(popup_id);

        assert_eq!(controller.markers().len(), 1);
        assert_eq!(controller.view().count_of(OverlayKind::Popup), 1);
    }

    #[test]
    fn test_clear_route_without_route_is_noop() {
        let mut controller = controller();
        controller.clear_route();
        assert!(controller.active_route().is_none());
    }
}
