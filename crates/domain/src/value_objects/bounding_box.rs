//! Geographic bounding box value object

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Coordinates;

/// A rectangular area described by its south-west and north-east corners
///
/// Field names follow the what3words wire format (the `square` object of a
/// conversion response). `Display` renders the `grid-section` and
/// `clip-to-bounding-box` parameter encoding `sw_lat,sw_lng,ne_lat,ne_lng`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    southwest: Coordinates,
    northeast: Coordinates,
}

/// Error type for a box whose north-east corner lies south of its south-west
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidBoundingBox;

impl fmt::Display for InvalidBoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid bounding box: north-east corner must not lie south of the south-west corner"
        )
    }
}

impl std::error::Error for InvalidBoundingBox {}

impl BoundingBox {
    /// Create a new bounding box with validation
    ///
    /// Longitudes are not ordered: a box may legitimately cross the
    /// antimeridian.
    ///
    /// # Errors
    ///
    /// Returns `InvalidBoundingBox` if the north-east latitude is below the
    /// south-west latitude.
    pub fn new(southwest: Coordinates, northeast: Coordinates) -> Result<Self, InvalidBoundingBox> {
        if northeast.lat() < southwest.lat() {
            return Err(InvalidBoundingBox);
        }
        Ok(Self {
            southwest,
            northeast,
        })
    }

    /// Get the south-west corner
    #[must_use]
    pub const fn southwest(&self) -> Coordinates {
        self.southwest
    }

    /// Get the north-east corner
    #[must_use]
    pub const fn northeast(&self) -> Coordinates {
        self.northeast
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.southwest, self.northeast)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_bounding_box() {
        let sw = Coordinates::new(52.207988, 0.116126).expect("valid");
        let ne = Coordinates::new(52.208867, 0.117540).expect("valid");
        let bb = BoundingBox::new(sw, ne).expect("valid box");
        assert_eq!(bb.southwest(), sw);
        assert_eq!(bb.northeast(), ne);
    }

    #[test]
    fn test_inverted_latitudes_rejected() {
        let sw = Coordinates::new(52.208867, 0.116126).expect("valid");
        let ne = Coordinates::new(52.207988, 0.117540).expect("valid");
        assert!(BoundingBox::new(sw, ne).is_err());
    }

    #[test]
    fn test_antimeridian_crossing_allowed() {
        let sw = Coordinates::new(-10.0, 179.5).expect("valid");
        let ne = Coordinates::new(10.0, -179.5).expect("valid");
        assert!(BoundingBox::new(sw, ne).is_ok());
    }

    #[test]
    fn test_display_matches_query_encoding() {
        let sw = Coordinates::new_unchecked(52.207988, 0.116126);
        let ne = Coordinates::new_unchecked(52.208867, 0.11754);
        let bb = BoundingBox::new(sw, ne).expect("valid box");
        assert_eq!(bb.to_string(), "52.207988,0.116126,52.208867,0.11754");
    }

    #[test]
    fn test_deserializes_from_square_payload() {
        let json = r#"{
            "southwest": { "lat": 51.52161, "lng": -0.203586 },
            "northeast": { "lat": 51.521688, "lng": -0.203543 }
        }"#;
        let bb: BoundingBox = serde_json::from_str(json).expect("deserialize");
        assert!((bb.southwest().lat() - 51.52161).abs() < f64::EPSILON);
        assert!((bb.northeast().lng() - -0.203543).abs() < f64::EPSILON);
    }
}
