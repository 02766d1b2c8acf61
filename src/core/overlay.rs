use crate::core::geo::{LatLng, LatLngBounds};
use serde::{Deserialize, Serialize};

/// Opaque handle to a rendered overlay. Unique per `MapView` instance and
/// never reused, so a stale handle simply stops resolving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OverlayId(pub(crate) u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverlayKind {
    Marker,
    Line,
    Popup,
}

impl std::fmt::Display for OverlayKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OverlayKind::Marker => write!(f, "marker"),
            OverlayKind::Line => write!(f, "line"),
            OverlayKind::Popup => write!(f, "popup"),
        }
    }
}

/// Plain RGBA color for overlay styling
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

/// Style for line overlays
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    /// Line color
    pub color: Color,
    /// Line width
    pub width: f32,
    /// Opacity (0.0 to 1.0)
    pub opacity: f32,
    /// Line dash pattern (empty for solid line)
    pub dash_pattern: Vec<f32>,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            color: Color::rgb(0, 0, 255),
            width: 2.0,
            opacity: 1.0,
            dash_pattern: Vec::new(),
        }
    }
}

impl LineStyle {
    /// Style used for rendered driving routes
    pub fn route() -> Self {
        Self {
            color: Color::rgb(51, 136, 255),
            width: 4.0,
            opacity: 0.8,
            dash_pattern: Vec::new(),
        }
    }
}

/// A point overlay with a human-readable label
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    position: LatLng,
    label: String,
}

impl Marker {
    pub fn new(position: LatLng, label: impl Into<String>) -> Self {
        Self {
            position,
            label: label.into(),
        }
    }

    pub fn position(&self) -> LatLng {
        self.position
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

/// An ordered sequence of coordinates rendered as a styled line
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    points: Vec<LatLng>,
    style: LineStyle,
}

impl Polyline {
    pub fn new(points: Vec<LatLng>) -> Self {
        Self {
            points,
            style: LineStyle::default(),
        }
    }

    pub fn with_style(mut self, style: LineStyle) -> Self {
        self.style = style;
        self
    }

    pub fn points(&self) -> &[LatLng] {
        &self.points
    }

    pub fn style(&self) -> &LineStyle {
        &self.style
    }

    /// The tightest bounds containing the line, `None` when it has no points
    pub fn bounds(&self) -> Option<LatLngBounds> {
        LatLngBounds::from_points(&self.points)
    }
}

/// An interaction a popup offers the user. Embedding UIs render these as
/// buttons and translate activation into the matching controller call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PopupAction {
    /// Request a driving route from the current location to the coordinate
    RequestRoute(LatLng),
    /// Clear the active route
    ClearRoute,
}

/// A popup anchored at a coordinate
#[derive(Debug, Clone, PartialEq)]
pub struct Popup {
    position: LatLng,
    content: String,
    action: Option<PopupAction>,
}

impl Popup {
    pub fn new(position: LatLng, content: impl Into<String>) -> Self {
        Self {
            position,
            content: content.into(),
            action: None,
        }
    }

    pub fn with_action(mut self, action: PopupAction) -> Self {
        self.action = Some(action);
        self
    }

    pub fn position(&self) -> LatLng {
        self.position
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    pub fn action(&self) -> Option<PopupAction> {
        self.action
    }
}

/// A rendered visual element on the map surface
#[derive(Debug, Clone, PartialEq)]
pub enum Overlay {
    Marker(Marker),
    Line(Polyline),
    Popup(Popup),
}

impl Overlay {
    pub fn kind(&self) -> OverlayKind {
        match self {
            Overlay::Marker(_) => OverlayKind::Marker,
            Overlay::Line(_) => OverlayKind::Line,
            Overlay::Popup(_) => OverlayKind::Popup,
        }
    }

    /// The anchor position (first vertex for lines)
    pub fn position(&self) -> Option<LatLng> {
        match self {
            Overlay::Marker(marker) => Some(marker.position()),
            Overlay::Line(line) => line.points().first().copied(),
            Overlay::Popup(popup) => Some(popup.position()),
        }
    }

    pub fn as_marker(&self) -> Option<&Marker> {
        match self {
            Overlay::Marker(marker) => Some(marker),
            _ => None,
        }
    }

    pub fn as_line(&self) -> Option<&Polyline> {
        match self {
            Overlay::Line(line) => Some(line),
            _ => None,
        }
    }

    pub fn as_popup(&self) -> Option<&Popup> {
        match self {
            Overlay::Popup(popup) => Some(popup),
            _ => None,
        }
    }
}
