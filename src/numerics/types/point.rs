// src/numerics/types/point.rs
// Point is the concrete plottable value, generic over its axis with f64 as default.

use core::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::traits::Axis;
use crate::plottable::capability::{
    Addable, Divisible, Multipliable, Negateable, RepresentableByZero, Strideable, Subtractable,
};
use crate::plottable::three_dimensions::{self, PlottableInThreeDimensions};
use crate::plottable::two_dimensions::PlottableInTwoDimensions;

/// A point in three dimensions.
///
/// Immutable once built: every operation returns a new point.
#[derive(Copy, Clone)]
pub struct Point<A: Axis = f64> {
    x: A,
    y: A,
    z: A,
}

impl<A: Axis> Point<A> {
    /// Construct a new Point
    pub fn new(x: A, y: A, z: A) -> Self {
        Self { x, y, z }
    }

    /// Point with every axis at zero.
    pub fn zero() -> Self {
        three_dimensions::zero()
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: &Self) -> A {
        three_dimensions::distance(self, other)
    }

    /// Returns this point with every axis moved by `n`.
    pub fn advanced(&self, n: A) -> Self {
        three_dimensions::advanced(self, n)
    }
}

impl<A: Axis> PlottableInTwoDimensions for Point<A> {
    type Axis = A;

    fn from_xy(x: A, y: A) -> Self {
        three_dimensions::from_xy(x, y)
    }

    fn x(&self) -> A {
        self.x
    }

    fn y(&self) -> A {
        self.y
    }
}

impl<A: Axis> PlottableInThreeDimensions for Point<A> {
    fn from_xyz(x: A, y: A, z: A) -> Self {
        Self::new(x, y, z)
    }

    fn z(&self) -> A {
        self.z
    }
}

impl<A: Axis> Addable for Point<A> {}
impl<A: Axis> Subtractable for Point<A> {}
impl<A: Axis> Multipliable for Point<A> {}
impl<A: Axis> Divisible for Point<A> {}
impl<A: Axis> Negateable for Point<A> {}
impl<A: Axis> RepresentableByZero for Point<A> {}
impl<A: Axis> Strideable for Point<A> {}

crate::plottable_ops!(three_dimensions; [A: Axis] Point<A>; PartialEq, Add, Sub, Mul, Div, Rem, Neg);

impl<A: Axis> Default for Point<A> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<A: Axis> fmt::Debug for Point<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x: {:?}, y: {:?}, z: {:?}", self.x, self.y, self.z)
    }
}

impl<A: Axis> fmt::Display for Point<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl<A> Serialize for Point<A>
where
    A: Axis + Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        three_dimensions::serialize(self, serializer)
    }
}

impl<'de, A> Deserialize<'de> for Point<A>
where
    A: Axis + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        three_dimensions::deserialize(deserializer)
    }
}

// Conversions between Point<A> and tuples / arrays

impl<A: Axis> From<(A, A, A)> for Point<A> {
    fn from(tuple: (A, A, A)) -> Self {
        Self::new(tuple.0, tuple.1, tuple.2)
    }
}

impl<A: Axis> From<[A; 3]> for Point<A> {
    fn from(array: [A; 3]) -> Self {
        Self::new(array[0], array[1], array[2])
    }
}

impl<A: Axis> From<Point<A>> for (A, A, A) {
    fn from(p: Point<A>) -> Self {
        (p.x, p.y, p.z)
    }
}

impl<A: Axis> From<Point<A>> for [A; 3] {
    fn from(p: Point<A>) -> Self {
        [p.x, p.y, p.z]
    }
}

pub type PointF32 = Point<f32>;
pub type PointF64 = Point<f64>;
