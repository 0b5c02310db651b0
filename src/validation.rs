//! Integrity checks for transit routes.
//!
//! `Route` keeps its stops and patterns consistent on its own, but it accepts
//! any route number and cannot stop a caller from editing a stop's route set
//! directly. These checks detect:
//! - Empty route numbers
//! - Stops on a route that do not list the route as serving them
//! - Duplicate route numbers across routes

use crate::models::Route;
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Route number is empty or whitespace.
    EmptyRouteNumber,
    /// Two routes share the same number.
    DuplicateRouteNumber,
    /// A stop on the route does not record the route as serving it.
    BrokenStopLink,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a single route.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_route(route: &Route) -> ValidationResult {
    let mut errors = Vec::new();
    check_route(route, &mut errors);
    finish(errors)
}

/// Validates a set of routes, including number uniqueness across them.
pub fn validate_routes(routes: &[Route]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut numbers = HashSet::new();
    for route in routes {
        if !numbers.insert(route.number()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateRouteNumber,
                format!("Duplicate route number: {}", route.number()),
            ));
        }
        check_route(route, &mut errors);
    }

    finish(errors)
}

fn check_route(route: &Route, errors: &mut Vec<ValidationError>) {
    if route.number().as_str().trim().is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyRouteNumber,
            format!("Route number '{}' is empty", route.number()),
        ));
    }

    for stop in route {
        if !stop.on_route(route.number()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::BrokenStopLink,
                format!(
                    "Stop {} is on {} but does not list it as serving",
                    stop.number(),
                    route
                ),
            ));
        }
    }
}

fn finish(errors: Vec<ValidationError>) -> ValidationResult {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
