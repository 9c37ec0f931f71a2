//! # points
//!
//! Generic two- and three-dimensional plottable values over a floating-point
//! axis type.
//!
//! A type becomes plottable by exposing its coordinates through
//! [`PlottableInTwoDimensions`] or [`PlottableInThreeDimensions`]. Arithmetic,
//! zero, distance, stride and serde support are derived from those accessors
//! for every capability marker the type claims. [`Point`] is the ready-made
//! three-dimensional instantiation.
//!
//! ```
//! use points::prelude::*;
//!
//! let a = Point::new(0.0, 0.0, 1.0);
//! let b = Point::new(0.0, 0.0, 0.0);
//!
//! assert!(a.is_farthest(&b));
//! assert_eq!(a + b, a);
//! assert_eq!(format!("{:?}", a - b), "x: 0.0, y: 0.0, z: 1.0");
//! ```

pub mod codec;
pub mod error;
pub mod numerics;
pub mod plottable;
pub mod prelude;

pub use error::{Error, Result};
pub use numerics::types::point::{Point, PointF32, PointF64};
pub use numerics::types::traits::Axis;
pub use plottable::{PlottableInThreeDimensions, PlottableInTwoDimensions};
