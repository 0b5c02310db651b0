//! Transit domain models.
//!
//! Provides the core data types for describing a transit network: routes,
//! the stops they serve, and the directional patterns that run along them.
//!
//! # Ownership
//!
//! | Type | Owned by | Shared via |
//! |------|----------|------------|
//! | `Route` | caller / registry | — |
//! | `Stop` | caller / registry | `StopRef` (`Rc<Stop>`) |
//! | `RoutePattern` | its `Route` | — |

mod location;
mod pattern;
mod route;
mod stop;

pub use location::LatLon;
pub use pattern::RoutePattern;
pub use route::{Route, RouteNumber};
pub use stop::{Stop, StopRef};
