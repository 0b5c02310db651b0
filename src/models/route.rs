//! Route model.
//!
//! A route is identified by its route number and consists of an ordered,
//! duplicate-free sequence of stops plus the named patterns (directional
//! variants) that run along it.
//!
//! # Route ↔ Stop association
//!
//! The route holds shared [`StopRef`] handles; each stop holds the
//! [`RouteNumber`] of every route serving it. [`Route::add_stop`] and
//! [`Route::remove_stop`] update both sides together, so the two never
//! diverge as long as stops are attached through the route.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::hash::{Hash, Hasher};
use tracing::{debug, trace, warn};

use super::{RoutePattern, Stop, StopRef};

/// Route number, the identity key of a [`Route`] (e.g. "99", "N10").
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteNumber(String);

impl RouteNumber {
    /// Creates a route number.
    pub fn new(number: impl Into<String>) -> Self {
        Self(number.into())
    }

    /// Route number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RouteNumber {
    fn from(number: &str) -> Self {
        Self::new(number)
    }
}

impl From<String> for RouteNumber {
    fn from(number: String) -> Self {
        Self(number)
    }
}

impl fmt::Display for RouteNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A transit route.
///
/// # Invariants
/// - `stops` holds no two equal stops.
/// - `stops` is in insertion order; reads never reorder it.
/// - `patterns` are unique by name and all owned by this route.
///
/// Equality and hashing use the route number only (see [`Route::key`]).
///
/// `Route` is not `Clone`: a copy would share the original's stops under the
/// same number, and removing a stop from one copy would deregister it for
/// both.
///
/// ```compile_fail
/// fn needs_clone<T: Clone>() {}
/// needs_clone::<u_transit::models::Route>();
/// ```
///
/// # Deserialization
///
/// A deserialized route is rebuilt through [`Route::add_stop`] and
/// [`Route::add_pattern`], so duplicate stops, duplicate pattern names and
/// patterns of other routes in the input are dropped. Each stop's route set
/// is reset to this route alone: stops shared between routes come back as
/// separate copies, one per route.
#[derive(Debug, Serialize, Deserialize)]
#[serde(from = "RouteData")]
pub struct Route {
    number: RouteNumber,
    name: String,
    stops: Vec<StopRef>,
    patterns: Vec<RoutePattern>,
}

impl Route {
    /// Creates a route with an empty name, no stops and no patterns.
    ///
    /// The number is not validated; see
    /// [`validate_route`](crate::validation::validate_route).
    pub fn new(number: impl Into<RouteNumber>) -> Self {
        Self {
            number: number.into(),
            name: String::new(),
            stops: Vec::new(),
            patterns: Vec::new(),
        }
    }

    /// Sets the route name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Identity key used by `PartialEq` and `Hash`.
    #[inline]
    pub fn key(&self) -> &RouteNumber {
        &self.number
    }

    /// Route number.
    pub fn number(&self) -> &RouteNumber {
        &self.number
    }

    /// Display name ("" until set).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replaces the display name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    // ---- stops ----

    /// Appends `stop` and registers this route on it.
    ///
    /// Returns `false` (and changes nothing) if an equal stop is already
    /// on the route.
    pub fn add_stop(&mut self, stop: &StopRef) -> bool {
        if self.has_stop(stop) {
            trace!(route = %self.number, stop = stop.number(), "stop already on route");
            return false;
        }
        self.stops.push(StopRef::clone(stop));
        stop.add_route(&self.number);
        debug!(route = %self.number, stop = stop.number(), "stop added");
        true
    }

    /// Removes the stop equal to `stop` and deregisters this route from it.
    ///
    /// The deregistration is applied to the handle the route was holding.
    /// Returns `false` (and changes nothing) if no equal stop is on the route.
    pub fn remove_stop(&mut self, stop: &Stop) -> bool {
        let Some(idx) = self.stops.iter().position(|s| **s == *stop) else {
            trace!(route = %self.number, stop = stop.number(), "stop not on route");
            return false;
        };
        let removed = self.stops.remove(idx);
        removed.remove_route(&self.number);
        debug!(route = %self.number, stop = stop.number(), "stop removed");
        true
    }

    /// Whether a stop equal to `stop` is on this route. O(n).
    pub fn has_stop(&self, stop: &Stop) -> bool {
        self.stops.iter().any(|s| **s == *stop)
    }

    /// Whether the stop with the given number is on this route.
    pub fn contains_stop_number(&self, number: u32) -> bool {
        self.stops.iter().any(|s| s.number() == number)
    }

    /// Stops in the order they were added.
    pub fn stops(&self) -> &[StopRef] {
        &self.stops
    }

    /// Iterates over the stops in the order they were added.
    pub fn iter(&self) -> std::slice::Iter<'_, StopRef> {
        self.stops.iter()
    }

    /// Number of stops on the route.
    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    // ---- patterns ----

    /// Returns the pattern named `name`, creating it if absent.
    ///
    /// When the pattern exists, each `Some` argument overwrites the stored
    /// field and each `None` leaves it as is. When it does not, a new pattern
    /// owned by this route is appended with `None` fields set to `""`.
    ///
    /// Passing both values always updates; passing neither is a plain
    /// get-or-create.
    pub fn get_pattern(
        &mut self,
        name: &str,
        destination: Option<&str>,
        direction: Option<&str>,
    ) -> &mut RoutePattern {
        let idx = match self.patterns.iter().position(|p| p.name() == name) {
            Some(idx) => {
                let pattern = &mut self.patterns[idx];
                if let Some(destination) = destination {
                    pattern.set_destination(destination);
                }
                if let Some(direction) = direction {
                    pattern.set_direction(direction);
                }
                idx
            }
            None => {
                self.patterns.push(RoutePattern::new(
                    name,
                    destination.unwrap_or_default(),
                    direction.unwrap_or_default(),
                    &self.number,
                ));
                debug!(route = %self.number, pattern = name, "pattern created");
                self.patterns.len() - 1
            }
        };
        &mut self.patterns[idx]
    }

    /// Looks up a pattern by name without creating one.
    pub fn find_pattern(&self, name: &str) -> Option<&RoutePattern> {
        self.patterns.iter().find(|p| p.name() == name)
    }

    /// Adds `pattern` unless a pattern with the same name is already present.
    ///
    /// Patterns owned by another route are refused. Returns whether the
    /// pattern was added.
    pub fn add_pattern(&mut self, pattern: RoutePattern) -> bool {
        if pattern.route() != &self.number {
            trace!(
                route = %self.number,
                pattern = pattern.name(),
                owner = %pattern.route(),
                "pattern belongs to another route"
            );
            return false;
        }
        if self.find_pattern(pattern.name()).is_some() {
            trace!(route = %self.number, pattern = pattern.name(), "pattern already present");
            return false;
        }
        debug!(route = %self.number, pattern = pattern.name(), "pattern added");
        self.patterns.push(pattern);
        true
    }

    /// Patterns in the order they were added.
    pub fn patterns(&self) -> &[RoutePattern] {
        &self.patterns
    }
}

/// Wire form of a [`Route`], before its invariants are re-established.
#[derive(Deserialize)]
struct RouteData {
    number: RouteNumber,
    #[serde(default)]
    name: String,
    #[serde(default)]
    stops: Vec<StopRef>,
    #[serde(default)]
    patterns: Vec<RoutePattern>,
}

impl From<RouteData> for Route {
    fn from(data: RouteData) -> Self {
        let mut route = Route::new(data.number).with_name(data.name);
        for stop in data.stops {
            stop.clear_routes();
            if !route.add_stop(&stop) {
                warn!(route = %route.number, stop = stop.number(), "duplicate stop dropped");
            }
        }
        for pattern in data.patterns {
            let name = pattern.name().to_string();
            if !route.add_pattern(pattern) {
                warn!(route = %route.number, pattern = %name, "pattern dropped");
            }
        }
        route
    }
}

impl PartialEq for Route {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other) || self.key() == other.key()
    }
}

impl Eq for Route {}

impl Hash for Route {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl Borrow<RouteNumber> for Route {
    fn borrow(&self) -> &RouteNumber {
        self.key()
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Route {}", self.number)
    }
}

impl<'a> IntoIterator for &'a Route {
    type Item = &'a StopRef;
    type IntoIter = std::slice::Iter<'a, StopRef>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
