//! Value Objects - Immutable, identity-less domain primitives

mod bounding_box;
mod circle;
mod coordinates;

pub use bounding_box::{BoundingBox, InvalidBoundingBox};
pub use circle::{Circle, InvalidRadius};
pub use coordinates::{Coordinates, InvalidCoordinates};
