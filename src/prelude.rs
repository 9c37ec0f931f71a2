//! Prelude for points
//!
//! Re-exports the plottable traits, capability markers and the concrete point.

pub use crate::numerics::types::point::{Point, PointF32, PointF64};
pub use crate::numerics::types::traits::Axis;
pub use crate::plottable::capability::{
    Addable, Divisible, Multipliable, Negateable, RepresentableByZero, Strideable, Subtractable,
};
pub use crate::plottable::{three_dimensions, two_dimensions};
pub use crate::plottable::{PlottableInThreeDimensions, PlottableInTwoDimensions};
