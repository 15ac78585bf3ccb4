//! `TravelAI` hotels - AI travel planner front end
//!
//! This library relays free-text travel requests to an upstream hotel-search
//! API and renders the returned travel options as an HTML page.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod telemetry;
pub mod ui;
pub mod upstream;
pub mod web;

#[cfg(test)]
pub(crate) mod testing;

// Re-export core types for public API
pub use crate::config::TravelAiConfig;
pub use error::{ErrorCode, TravelAiError};
pub use models::{Distance, Hotel, Route};
pub use upstream::{HotelSearch, UpstreamClient};
pub use web::AppState;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, TravelAiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
