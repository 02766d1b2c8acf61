//! Platform geolocation capability
//!
//! The controller never talks to a platform API directly; the host
//! application injects whatever it has (browser geolocation behind a WASM
//! bridge, a GPS daemon, a fixed test position) through [`LocationProvider`].

use crate::core::geo::LatLng;
use async_trait::async_trait;
use std::time::Duration;

/// A successfully resolved device position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocationFix {
    pub position: LatLng,
    /// Radius of the 95% confidence circle, in meters
    pub accuracy_m: f64,
}

impl LocationFix {
    pub fn new(position: LatLng, accuracy_m: f64) -> Self {
        Self {
            position,
            accuracy_m,
        }
    }
}

/// Options passed along with a position request
#[derive(Debug, Clone, PartialEq)]
pub struct GeolocationOptions {
    /// Ask the platform for its best (possibly slower) position source
    pub high_accuracy: bool,
    /// Budget for the whole request; expiry maps to [`GeolocationError::Timeout`]
    pub timeout: Duration,
    /// Oldest cached position the provider may return
    pub max_age: Duration,
}

impl Default for GeolocationOptions {
    fn default() -> Self {
        Self {
            high_accuracy: true,
            timeout: Duration::from_secs(10),
            max_age: Duration::from_secs(60),
        }
    }
}

/// Why a position request failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GeolocationError {
    #[error("location access denied by user")]
    PermissionDenied,

    #[error("location information unavailable")]
    PositionUnavailable,

    #[error("location request timed out")]
    Timeout,

    #[error("an unknown error occurred")]
    Unknown,
}

/// Trait representing anything that can resolve the device's position
#[async_trait]
pub trait LocationProvider: Send + Sync {
    /// Resolve the current position, honoring `options` on a best-effort
    /// basis. The caller enforces the timeout budget regardless.
    async fn current_position(
        &self,
        options: &GeolocationOptions,
    ) -> Result<LocationFix, GeolocationError>;
}
