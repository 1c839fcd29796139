//! Geographic circle value object

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Coordinates;

/// A circular area described by its centre and radius in kilometres
///
/// `Display` renders the `clip-to-circle` parameter encoding
/// `lat,lng,radius_km`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    center: Coordinates,
    radius_km: f64,
}

/// Error type for a negative or non-finite radius
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidRadius;

impl fmt::Display for InvalidRadius {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid radius: must be a finite, non-negative kilometre value")
    }
}

impl std::error::Error for InvalidRadius {}

impl Circle {
    /// Create a new circle with validation
    ///
    /// # Errors
    ///
    /// Returns `InvalidRadius` if the radius is negative, NaN, or infinite.
    pub fn new(center: Coordinates, radius_km: f64) -> Result<Self, InvalidRadius> {
        if !radius_km.is_finite() || radius_km < 0.0 {
            return Err(InvalidRadius);
        }
        Ok(Self { center, radius_km })
    }

    /// Get the centre
    #[must_use]
    pub const fn center(&self) -> Coordinates {
        self.center
    }

    /// Get the radius in kilometres
    #[must_use]
    pub const fn radius_km(&self) -> f64 {
        self.radius_km
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.center, self.radius_km)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_circle() {
        let center = Coordinates::new(51.520833, -0.195543).expect("valid");
        let circle = Circle::new(center, 10.0).expect("valid circle");
        assert_eq!(circle.center(), center);
        assert!((circle.radius_km() - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_zero_radius_allowed() {
        let center = Coordinates::new_unchecked(0.0, 0.0);
        assert!(Circle::new(center, 0.0).is_ok());
    }

    #[test]
    fn test_negative_radius_rejected() {
        let center = Coordinates::new_unchecked(0.0, 0.0);
        assert!(Circle::new(center, -1.0).is_err());
    }

    #[test]
    fn test_non_finite_radius_rejected() {
        let center = Coordinates::new_unchecked(0.0, 0.0);
        assert!(Circle::new(center, f64::NAN).is_err());
        assert!(Circle::new(center, f64::INFINITY).is_err());
    }

    #[test]
    fn test_display_matches_query_encoding() {
        let center = Coordinates::new_unchecked(51.520833, -0.195543);
        let circle = Circle::new(center, 10.0).expect("valid circle");
        assert_eq!(circle.to_string(), "51.520833,-0.195543,10");
    }
}
