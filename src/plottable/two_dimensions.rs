//! Values that can be plotted in two dimensions.
//!
//! [`PlottableInTwoDimensions`] is the minimal shape: a constructor and two
//! accessors. Everything else in this module is derived from that shape, and
//! the arithmetic is only available when the type also claims the matching
//! [capability marker](crate::plottable::capability).

use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::numerics::types::traits::Axis;
use crate::plottable::capability::{
    Addable, Divisible, Multipliable, Negateable, RepresentableByZero, Strideable, Subtractable,
};
use crate::plottable::record;

/// Representing values that can be plotted in two dimensions.
pub trait PlottableInTwoDimensions: Sized {
    /// The numeric type of every coordinate.
    type Axis: Axis;

    /// Creates a new instance with the specified axes.
    fn from_xy(x: Self::Axis, y: Self::Axis) -> Self;

    /// The value for the X-axis.
    fn x(&self) -> Self::Axis;

    /// The value for the Y-axis.
    fn y(&self) -> Self::Axis;

    /// Whether this value lies further left than `rhs`.
    fn is_leftest(&self, rhs: &Self) -> bool {
        self.x() < rhs.x()
    }

    /// Whether this value lies further right than `rhs`.
    fn is_rightest(&self, rhs: &Self) -> bool {
        self.x() > rhs.x()
    }

    /// Whether this value lies higher than `rhs`.
    fn is_highest(&self, rhs: &Self) -> bool {
        self.y() > rhs.y()
    }

    /// Whether this value lies lower than `rhs`.
    fn is_lowest(&self, rhs: &Self) -> bool {
        self.y() < rhs.y()
    }
}

/// Componentwise equality over `x` and `y`.
pub fn equals<P: PlottableInTwoDimensions>(lhs: &P, rhs: &P) -> bool {
    lhs.x() == rhs.x() && lhs.y() == rhs.y()
}

pub fn add<P>(lhs: &P, rhs: &P) -> P
where
    P: PlottableInTwoDimensions + Addable,
{
    P::from_xy(lhs.x() + rhs.x(), lhs.y() + rhs.y())
}

pub fn subtract<P>(lhs: &P, rhs: &P) -> P
where
    P: PlottableInTwoDimensions + Subtractable,
{
    P::from_xy(lhs.x() - rhs.x(), lhs.y() - rhs.y())
}

pub fn multiply<P>(lhs: &P, rhs: &P) -> P
where
    P: PlottableInTwoDimensions + Multipliable,
{
    P::from_xy(lhs.x() * rhs.x(), lhs.y() * rhs.y())
}

/// Componentwise quotient. A zero component in `rhs` yields inf or NaN.
pub fn divide<P>(lhs: &P, rhs: &P) -> P
where
    P: PlottableInTwoDimensions + Divisible,
{
    P::from_xy(lhs.x() / rhs.x(), lhs.y() / rhs.y())
}

/// Componentwise remainder, with the sign of `lhs` as in `f64::rem`.
pub fn remainder<P>(lhs: &P, rhs: &P) -> P
where
    P: PlottableInTwoDimensions + Divisible,
{
    P::from_xy(lhs.x() % rhs.x(), lhs.y() % rhs.y())
}

pub fn negate<P>(operand: &P) -> P
where
    P: PlottableInTwoDimensions + Negateable,
{
    P::from_xy(-operand.x(), -operand.y())
}

pub fn zero<P>() -> P
where
    P: PlottableInTwoDimensions + RepresentableByZero,
{
    P::from_xy(P::Axis::zero(), P::Axis::zero())
}

/// Returns a value with both components moved by the scalar `n`.
pub fn advanced<P>(value: &P, n: P::Axis) -> P
where
    P: PlottableInTwoDimensions + Strideable,
{
    P::from_xy(value.x() + n, value.y() + n)
}

/// Euclidean distance from `value` to `other`.
pub fn distance<P>(value: &P, other: &P) -> P::Axis
where
    P: PlottableInTwoDimensions + Strideable,
{
    let x = other.x() - value.x();
    let y = other.y() - value.y();

    (x.squared() + y.squared()).sqrt()
}

/// Writes `value` as a record with the fields `x` and `y`.
///
/// Meant to back a `Serialize` impl or a `#[serde(serialize_with)]` field.
pub fn serialize<P, S>(value: &P, serializer: S) -> Result<S::Ok, S::Error>
where
    P: PlottableInTwoDimensions,
    P::Axis: Serialize,
    S: Serializer,
{
    let mut state = serializer.serialize_struct("PlottableInTwoDimensions", record::FIELDS_2D.len())?;
    state.serialize_field("x", &value.x())?;
    state.serialize_field("y", &value.y())?;
    state.end()
}

/// Reads a record with the fields `x` and `y`.
///
/// Fails with a missing-field error when either is absent and with an
/// invalid-type error when either is not a number.
pub fn deserialize<'de, P, D>(deserializer: D) -> Result<P, D::Error>
where
    P: PlottableInTwoDimensions,
    P::Axis: Deserialize<'de>,
    D: Deserializer<'de>,
{
    let axes = record::read_axes(deserializer, "PlottableInTwoDimensions", false)?;
    Ok(P::from_xy(axes.x, axes.y))
}
