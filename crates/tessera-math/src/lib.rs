//! Ellipsoid surface model and geometric primitives for polygon tessellation.

mod ellipsoid;
mod rect;
mod tolerance;

pub use ellipsoid::Ellipsoid;
pub use rect::Rect2;
pub use tolerance::{
    EPSILON6, EPSILON7, EPSILON10, EPSILON14, dvec2_equals_epsilon, dvec3_equals_epsilon,
    equals_epsilon,
};
