//! Stop model.
//!
//! A stop is a physical boarding point identified by a stop number. Stops are
//! shared between routes through [`StopRef`] handles and record the numbers
//! of the routes that serve them. The route side of this association is the
//! only writer: see [`Route::add_stop`](super::Route::add_stop) and
//! [`Route::remove_stop`](super::Route::remove_stop).

use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::BTreeSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use super::{LatLon, RouteNumber};

/// Shared handle to a stop.
///
/// A stop lives as long as any route (or registry) holds a handle to it.
pub type StopRef = Rc<Stop>;

/// A transit stop.
///
/// Two stops are equal iff their numbers are equal. Name, location and the
/// set of serving routes take no part in equality or hashing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stop {
    number: u32,
    name: String,
    location: LatLon,
    /// Numbers of the routes serving this stop.
    routes: RefCell<BTreeSet<RouteNumber>>,
}

impl Stop {
    /// Creates a stop that is not yet served by any route.
    pub fn new(number: u32, name: impl Into<String>, location: LatLon) -> Self {
        Self {
            number,
            name: name.into(),
            location,
            routes: RefCell::new(BTreeSet::new()),
        }
    }

    /// Wraps this stop in a shared handle.
    pub fn into_ref(self) -> StopRef {
        Rc::new(self)
    }

    /// Stop number (identity key).
    pub fn number(&self) -> u32 {
        self.number
    }

    /// Stop name (e.g. "Westbound W Broadway @ Alma").
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Stop location.
    pub fn location(&self) -> LatLon {
        self.location
    }

    /// Records that `route` serves this stop.
    ///
    /// Idempotent. Callers other than `Route` should not need this; adding
    /// a route here without adding the stop to the route leaves the two
    /// sides out of step (reported by `validate_route`).
    pub fn add_route(&self, route: &RouteNumber) {
        self.routes.borrow_mut().insert(route.clone());
    }

    /// Records that `route` no longer serves this stop. Idempotent.
    pub fn remove_route(&self, route: &RouteNumber) {
        self.routes.borrow_mut().remove(route);
    }

    /// Forgets every serving route. Used when a route is rebuilt from its
    /// serialized form.
    pub(crate) fn clear_routes(&self) {
        self.routes.borrow_mut().clear();
    }

    /// Whether `route` is registered as serving this stop.
    pub fn on_route(&self, route: &RouteNumber) -> bool {
        self.routes.borrow().contains(route)
    }

    /// Snapshot of the serving route numbers, in ascending order.
    pub fn routes(&self) -> Vec<RouteNumber> {
        self.routes.borrow().iter().cloned().collect()
    }

    /// Number of routes serving this stop.
    pub fn route_count(&self) -> usize {
        self.routes.borrow().len()
    }
}

impl PartialEq for Stop {
    fn eq(&self, other: &Self) -> bool {
        self.number == other.number
    }
}

impl Eq for Stop {}

impl Hash for Stop {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.number.hash(state);
    }
}

impl fmt::Display for Stop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Stop {}: {}", self.number, self.name)
    }
}
