//! Data models for the hotel search results
//!
//! These shapes are owned by the upstream hotel-search API. The relay forwards
//! them untouched; only the UI decodes them for rendering.

pub mod route;

// Re-export all public types for convenient access
pub use route::{Distance, Hotel, Route, decode_routes};
