pub mod builder;
pub mod config;
pub mod geo;
pub mod map;
pub mod overlay;

pub use builder::MapControllerBuilder;

pub use config::{MapControllerOptions, MapViewOptions};

pub use geo::{LatLng, LatLngBounds, Point};

pub use map::MapView;

pub use overlay::{
    Color, LineStyle, Marker, Overlay, OverlayId, OverlayKind, Polyline, Popup, PopupAction,
};
