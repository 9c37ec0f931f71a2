//! Plottable capabilities.
//!
//! A type becomes plottable by implementing [`PlottableInTwoDimensions`]
//! (and optionally [`PlottableInThreeDimensions`]). Arithmetic, zero,
//! stride and serde support are then derived from the accessors, gated on
//! the markers in [`capability`]. [`plottable_ops!`](crate::plottable_ops)
//! wires the derived arithmetic to the standard operators.

pub mod capability;
mod macros;
mod record;
pub mod three_dimensions;
pub mod two_dimensions;

pub use capability::{
    Addable, Divisible, Multipliable, Negateable, RepresentableByZero, Strideable, Subtractable,
};
pub use three_dimensions::PlottableInThreeDimensions;
pub use two_dimensions::PlottableInTwoDimensions;
