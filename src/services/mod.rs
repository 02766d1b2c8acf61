pub mod geocoding;
pub mod routing;

pub use geocoding::{Geocoder, NominatimClient, Place};

pub use routing::{OsrmClient, Route, Router};

use once_cell::sync::Lazy;
use reqwest::Client;

/// Shared HTTP client with a custom User-Agent so that public geocoding and
/// routing services (e.g. Nominatim) don't reject the request. Building the
/// client once avoids the cost of TLS and connection pool setup for every
/// call.
pub(crate) static HTTP_CLIENT: Lazy<Client> = Lazy::new(|| {
    Client::builder()
        .user_agent("wayfarer/0.1 (+https://github.com/PoHsuanLai/wayfarer)")
        .build()
        .expect("failed to build reqwest client")
});
