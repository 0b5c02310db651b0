//! Route pattern model.
//!
//! A pattern is one named variant of a route (e.g. "EB1", "WB2-short"),
//! carrying the direction and headsign destination of that variant and the
//! path it travels. Patterns are owned by exactly one route.

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

use super::{LatLon, RouteNumber};

/// A named directional variant of a route.
///
/// Equality and hashing use the owning route and the pattern name only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutePattern {
    name: String,
    destination: String,
    direction: String,
    /// Owning route.
    route: RouteNumber,
    /// Coordinates along the pattern, in travel order.
    path: Vec<LatLon>,
}

impl RoutePattern {
    /// Creates a pattern of `route` with an empty path.
    pub fn new(
        name: impl Into<String>,
        destination: impl Into<String>,
        direction: impl Into<String>,
        route: &RouteNumber,
    ) -> Self {
        Self {
            name: name.into(),
            destination: destination.into(),
            direction: direction.into(),
            route: route.clone(),
            path: Vec::new(),
        }
    }

    /// Sets the path.
    pub fn with_path(mut self, path: Vec<LatLon>) -> Self {
        self.path = path;
        self
    }

    /// Pattern name, unique within its route.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Headsign destination (e.g. "UBC").
    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// Direction label (e.g. "WEST").
    pub fn direction(&self) -> &str {
        &self.direction
    }

    /// Number of the route owning this pattern.
    pub fn route(&self) -> &RouteNumber {
        &self.route
    }

    /// Coordinates along the pattern, in travel order.
    pub fn path(&self) -> &[LatLon] {
        &self.path
    }

    /// Replaces the destination.
    pub fn set_destination(&mut self, destination: impl Into<String>) {
        self.destination = destination.into();
    }

    /// Replaces the direction.
    pub fn set_direction(&mut self, direction: impl Into<String>) {
        self.direction = direction.into();
    }

    /// Replaces the path.
    pub fn set_path(&mut self, path: Vec<LatLon>) {
        self.path = path;
    }
}

impl PartialEq for RoutePattern {
    fn eq(&self, other: &Self) -> bool {
        self.route == other.route && self.name == other.name
    }
}

impl Eq for RoutePattern {}

impl Hash for RoutePattern {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.route.hash(state);
        self.name.hash(state);
    }
}
