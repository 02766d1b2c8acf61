use crate::{
    core::{
        config::MapViewOptions,
        geo::{LatLng, LatLngBounds},
        overlay::{Marker, Overlay, OverlayId, OverlayKind, Polyline, Popup},
    },
    prelude::HashMap,
};

/// Adapter over the map rendering surface.
///
/// Owns the visible center/zoom and the registry of rendered overlays
/// (markers, lines, popups). The actual pixel rendering is the embedding
/// application's concern; `MapView` is the single source of truth for what
/// is on the map, which keeps overlay lifetimes testable.
pub struct MapView {
    center: LatLng,
    zoom: f64,
    options: MapViewOptions,
    /// All overlays indexed by ID
    overlays: HashMap<OverlayId, Overlay>,
    /// Insertion-ordered list of overlay IDs for rendering
    order: Vec<OverlayId>,
    /// At most one popup is open at a time; opening a new one closes this
    active_popup: Option<OverlayId>,
    next_id: u64,
}

impl MapView {
    pub fn new(center: LatLng, zoom: f64) -> Self {
        Self::with_options(center, zoom, MapViewOptions::default())
    }

    pub fn with_options(center: LatLng, zoom: f64, options: MapViewOptions) -> Self {
        let mut view = Self {
            center: LatLng::default(),
            zoom: 0.0,
            options,
            overlays: HashMap::default(),
            order: Vec::new(),
            active_popup: None,
            next_id: 0,
        };
        view.set_view(center, zoom);
        view
    }

    pub fn center(&self) -> LatLng {
        self.center
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn options(&self) -> &MapViewOptions {
        &self.options
    }

    /// Pans and zooms to the given view. Coordinates are normalized and the
    /// zoom is clamped to the configured limits.
    pub fn set_view(&mut self, center: LatLng, zoom: f64) {
        self.center = center.normalized();
        self.zoom = zoom.clamp(self.options.min_zoom, self.options.max_zoom);
    }

    /// Fits the view to contain the given bounds with the given pixel
    /// padding (20px when unspecified).
    pub fn fit_bounds(&mut self, bounds: &LatLngBounds, padding: Option<f64>) {
        let padding = padding.unwrap_or(20.0);

        let usable_width = (self.options.size.x - 2.0 * padding).max(1.0);
        let usable_height = (self.options.size.y - 2.0 * padding).max(1.0);

        // Walk the integer zoom levels and keep the last one at which the
        // projected bounds still fit the padded viewport.
        let mut best_zoom = self.options.min_zoom;
        for test_zoom in (self.options.min_zoom as i32)..=(self.options.max_zoom as i32) {
            let zoom = test_zoom as f64;

            let nw = LatLng::new(bounds.north_east.lat, bounds.south_west.lng).project(zoom);
            let se = LatLng::new(bounds.south_west.lat, bounds.north_east.lng).project(zoom);

            let bounds_width = (se.x - nw.x).abs();
            let bounds_height = (se.y - nw.y).abs();

            if bounds_width <= usable_width && bounds_height <= usable_height {
                best_zoom = zoom;
            } else {
                break;
            }
        }

        self.set_view(bounds.center(), best_zoom);
    }

    fn insert(&mut self, overlay: Overlay) -> OverlayId {
        let id = OverlayId(self.next_id);
        self.next_id += 1;
        self.overlays.insert(id, overlay);
        self.order.push(id);
        id
    }

    /// Renders a marker, returning its overlay handle
    pub fn add_marker(&mut self, marker: Marker) -> OverlayId {
        self.insert(Overlay::Marker(marker))
    }

    /// Renders a styled line, returning its overlay handle
    pub fn add_polyline(&mut self, line: Polyline) -> OverlayId {
        self.insert(Overlay::Line(line))
    }

    /// Opens a popup, closing any popup that is already open
    pub fn open_popup(&mut self, popup: Popup) -> OverlayId {
        self.close_popup();
        let id = self.insert(Overlay::Popup(popup));
        self.active_popup = Some(id);
        id
    }

    /// Closes the open popup, if any
    pub fn close_popup(&mut self) {
        if let Some(id) = self.active_popup.take() {
            self.remove_overlay(id);
        }
    }

    /// Replaces the content of the popup with the given handle. Returns
    /// `false` when the popup has already been closed or replaced, so late
    /// async results can be dropped harmlessly.
    pub fn set_popup_content(&mut self, id: OverlayId, content: impl Into<String>) -> bool {
        match self.overlays.get_mut(&id) {
            Some(Overlay::Popup(popup)) => {
                popup.set_content(content);
                true
            }
            _ => false,
        }
    }

    /// Removes an overlay from the surface, returning it if it was rendered
    pub fn remove_overlay(&mut self, id: OverlayId) -> Option<Overlay> {
        let removed = self.overlays.remove(&id)?;
        self.order.retain(|other| *other != id);
        if self.active_popup == Some(id) {
            self.active_popup = None;
        }
        Some(removed)
    }

    pub fn overlay(&self, id: OverlayId) -> Option<&Overlay> {
        self.overlays.get(&id)
    }

    pub fn contains(&self, id: OverlayId) -> bool {
        self.overlays.contains_key(&id)
    }

    /// The open popup, if any
    pub fn active_popup(&self) -> Option<(OverlayId, &Popup)> {
        let id = self.active_popup?;
        match self.overlays.get(&id) {
            Some(Overlay::Popup(popup)) => Some((id, popup)),
            _ => None,
        }
    }

    /// All overlays in insertion order
    pub fn overlays(&self) -> impl Iterator<Item = (OverlayId, &Overlay)> + '_ {
        self.order
            .iter()
            .filter_map(|id| self.overlays.get(id).map(|overlay| (*id, overlay)))
    }

    /// Number of rendered overlays of the given kind
    pub fn count_of(&self, kind: OverlayKind) -> usize {
        self.overlays
            .values()
            .filter(|overlay| overlay.kind() == kind)
            .count()
    }

    /// Total number of rendered overlays
    pub fn len(&self) -> usize {
        self.overlays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.overlays.is_empty()
    }
}
