//! Domain layer for the what3words client
//!
//! Contains the geometry value objects used by the API surface and the
//! lexical grammar of three-word addresses. This layer performs no I/O:
//! everything here is a pure computation over its inputs.

pub mod validation;
pub mod value_objects;

pub use validation::{did_you_mean_3wa, find_possible_3wa, is_possible_3wa};
pub use value_objects::{
    BoundingBox, Circle, Coordinates, InvalidBoundingBox, InvalidCoordinates, InvalidRadius,
};
