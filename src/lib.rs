//! Transit network models for the U-Engine ecosystem.
//!
//! Provides domain types for bus and rail routes and integrity checks over
//! them. This crate defines the transit domain language only — fetching
//! feeds, persistence and trip planning live in other layers.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Route`, `RouteNumber`, `Stop`, `StopRef`,
//!   `RoutePattern`, `LatLon`
//! - **`validation`**: Integrity checks (empty route numbers, route/stop link
//!   consistency, duplicate patterns and route numbers)
//!
//! # Example
//!
//! ```
//! use u_transit::models::{LatLon, Route, Stop};
//!
//! let alma = Stop::new(50001, "W Broadway @ Alma", LatLon::new(49.26, -123.18)).into_ref();
//! let mut route = Route::new("99").with_name("UBC/Commercial-Broadway");
//! route.add_stop(&alma);
//!
//! assert!(route.has_stop(&alma));
//! assert!(alma.on_route(route.number()));
//! assert_eq!(route.to_string(), "Route 99");
//! ```

pub mod models;
pub mod validation;
