//! Values that can be plotted in three dimensions.
//!
//! Extends [`PlottableInTwoDimensions`] with a Z-axis. Every derived
//! operation here is the 2D one lifted componentwise across `x`, `y`, `z`.

use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::numerics::types::traits::Axis;
use crate::plottable::capability::{
    Addable, Divisible, Multipliable, Negateable, RepresentableByZero, Strideable, Subtractable,
};
use crate::plottable::record;
use crate::plottable::two_dimensions::PlottableInTwoDimensions;

/// Representing values that can be plotted in three dimensions.
pub trait PlottableInThreeDimensions: PlottableInTwoDimensions {
    /// Creates a new instance with the specified axes.
    fn from_xyz(x: Self::Axis, y: Self::Axis, z: Self::Axis) -> Self;

    /// The value for the Z-axis.
    fn z(&self) -> Self::Axis;

    /// Whether this value lies farther away than `rhs`.
    fn is_farthest(&self, rhs: &Self) -> bool {
        self.z() > rhs.z()
    }

    /// Whether this value lies nearer than `rhs`.
    fn is_nearest(&self, rhs: &Self) -> bool {
        self.z() < rhs.z()
    }
}

/// The two-argument constructor of a 3D type, with `z` at zero.
///
/// Implementors of [`PlottableInThreeDimensions`] delegate their
/// [`PlottableInTwoDimensions::from_xy`] here.
pub fn from_xy<P: PlottableInThreeDimensions>(x: P::Axis, y: P::Axis) -> P {
    P::from_xyz(x, y, P::Axis::zero())
}

/// Componentwise equality over `x`, `y` and `z`.
pub fn equals<P: PlottableInThreeDimensions>(lhs: &P, rhs: &P) -> bool {
    lhs.x() == rhs.x() && lhs.y() == rhs.y() && lhs.z() == rhs.z()
}

pub fn add<P>(lhs: &P, rhs: &P) -> P
where
    P: PlottableInThreeDimensions + Addable,
{
    P::from_xyz(lhs.x() + rhs.x(), lhs.y() + rhs.y(), lhs.z() + rhs.z())
}

pub fn subtract<P>(lhs: &P, rhs: &P) -> P
where
    P: PlottableInThreeDimensions + Subtractable,
{
    P::from_xyz(lhs.x() - rhs.x(), lhs.y() - rhs.y(), lhs.z() - rhs.z())
}

pub fn multiply<P>(lhs: &P, rhs: &P) -> P
where
    P: PlottableInThreeDimensions + Multipliable,
{
    P::from_xyz(lhs.x() * rhs.x(), lhs.y() * rhs.y(), lhs.z() * rhs.z())
}

pub fn divide<P>(lhs: &P, rhs: &P) -> P
where
    P: PlottableInThreeDimensions + Divisible,
{
    P::from_xyz(lhs.x() / rhs.x(), lhs.y() / rhs.y(), lhs.z() / rhs.z())
}

pub fn remainder<P>(lhs: &P, rhs: &P) -> P
where
    P: PlottableInThreeDimensions + Divisible,
{
    P::from_xyz(lhs.x() % rhs.x(), lhs.y() % rhs.y(), lhs.z() % rhs.z())
}

pub fn negate<P>(operand: &P) -> P
where
    P: PlottableInThreeDimensions + Negateable,
{
    P::from_xyz(-operand.x(), -operand.y(), -operand.z())
}

pub fn zero<P>() -> P
where
    P: PlottableInThreeDimensions + RepresentableByZero,
{
    P::from_xyz(P::Axis::zero(), P::Axis::zero(), P::Axis::zero())
}

pub fn advanced<P>(value: &P, n: P::Axis) -> P
where
    P: PlottableInThreeDimensions + Strideable,
{
    P::from_xyz(value.x() + n, value.y() + n, value.z() + n)
}

pub fn distance<P>(value: &P, other: &P) -> P::Axis
where
    P: PlottableInThreeDimensions + Strideable,
{
    let x = other.x() - value.x();
    let y = other.y() - value.y();
    let z = other.z() - value.z();

    (x.squared() + y.squared() + z.squared()).sqrt()
}

/// Writes `value` as a record with the fields `x`, `y` and `z`.
pub fn serialize<P, S>(value: &P, serializer: S) -> Result<S::Ok, S::Error>
where
    P: PlottableInThreeDimensions,
    P::Axis: Serialize,
    S: Serializer,
{
    let mut state = serializer.serialize_struct("PlottableInThreeDimensions", record::FIELDS_3D.len())?;
    state.serialize_field("x", &value.x())?;
    state.serialize_field("y", &value.y())?;
    state.serialize_field("z", &value.z())?;
    state.end()
}

/// Reads a record with the fields `x`, `y` and optionally `z`.
///
/// A record without `z` goes through the 2D constructor, so `z` ends up at
/// zero. `x` and `y` are required.
pub fn deserialize<'de, P, D>(deserializer: D) -> Result<P, D::Error>
where
    P: PlottableInThreeDimensions,
    P::Axis: Deserialize<'de>,
    D: Deserializer<'de>,
{
    let axes = record::read_axes(deserializer, "PlottableInThreeDimensions", true)?;
    Ok(match axes.z {
        Some(z) => P::from_xyz(axes.x, axes.y, z),
        None => P::from_xy(axes.x, axes.y),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, Debug)]
    struct Voxel([f64; 3]);

    impl PlottableInTwoDimensions for Voxel {
        type Axis = f64;

        fn from_xy(x: f64, y: f64) -> Self {
            from_xy(x, y)
        }

        fn x(&self) -> f64 {
            self.0[0]
        }

        fn y(&self) -> f64 {
            self.0[1]
        }
    }

    impl PlottableInThreeDimensions for Voxel {
        fn from_xyz(x: f64, y: f64, z: f64) -> Self {
            Self([x, y, z])
        }

        fn z(&self) -> f64 {
            self.0[2]
        }
    }

    impl Addable for Voxel {}
    impl Multipliable for Voxel {}
    impl Negateable for Voxel {}
    impl RepresentableByZero for Voxel {}
    impl Strideable for Voxel {}

    fn vx(x: f64, y: f64, z: f64) -> Voxel {
        Voxel::from_xyz(x, y, z)
    }

    #[test]
    fn test_two_argument_constructor_defaults_z() {
        let v = Voxel::from_xy(1.0, 2.0);
        assert_eq!(v.0, [1.0, 2.0, 0.0]);
    }

    #[test]
    fn test_depth_predicates() {
        let near = vx(0.0, 0.0, 0.0);
        let far = vx(0.0, 0.0, 1.0);

        assert!(far.is_farthest(&near));
        assert!(!near.is_farthest(&far));
        assert!(near.is_nearest(&far));
        assert!(!far.is_nearest(&near));
    }

    #[test]
    fn test_planar_predicates_ignore_z() {
        let a = vx(0.0, 0.0, 9.0);
        let b = vx(1.0, 1.0, -9.0);
        assert!(a.is_leftest(&b));
        assert!(a.is_lowest(&b));
    }

    #[test]
    fn test_equality_includes_z() {
        assert!(equals(&vx(1.0, 2.0, 3.0), &vx(1.0, 2.0, 3.0)));
        assert!(!equals(&vx(1.0, 2.0, 3.0), &vx(1.0, 2.0, 4.0)));
        // The 2D view of the same pair compares equal.
        assert!(crate::plottable::two_dimensions::equals(&vx(1.0, 2.0, 3.0), &vx(1.0, 2.0, 4.0)));
    }

    #[test]
    fn test_componentwise_arithmetic() {
        let a = vx(1.0, 2.0, 3.0);
        let b = vx(4.0, 5.0, 6.0);

        assert_eq!(add(&a, &b).0, [5.0, 7.0, 9.0]);
        assert_eq!(multiply(&a, &b).0, [4.0, 10.0, 18.0]);
        assert_eq!(negate(&a).0, [-1.0, -2.0, -3.0]);
    }

    #[test]
    fn test_zero_advanced_and_distance() {
        let z: Voxel = zero();
        assert_eq!(z.0, [0.0, 0.0, 0.0]);
        assert_eq!(advanced(&z, 1.0).0, [1.0, 1.0, 1.0]);
        assert_eq!(distance(&z, &vx(2.0, 3.0, 6.0)), 7.0);
        assert_eq!(distance(&vx(2.0, 3.0, 6.0), &z), 7.0);
    }

    #[test]
    fn test_record_without_z_uses_two_argument_constructor() {
        let mut de = serde_json::Deserializer::from_str(r#"{"x":1,"y":2}"#);
        let v: Voxel = deserialize(&mut de).unwrap();
        assert_eq!(v.0, [1.0, 2.0, 0.0]);
    }

    #[test]
    fn test_record_ignores_unknown_fields() {
        let mut de = serde_json::Deserializer::from_str(r#"{"z":3,"w":4,"x":1,"y":2}"#);
        let v: Voxel = deserialize(&mut de).unwrap();
        assert_eq!(v.0, [1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_record_missing_y_fails() {
        let mut de = serde_json::Deserializer::from_str(r#"{"x":1}"#);
        let err = deserialize::<Voxel, _>(&mut de).unwrap_err();
        assert!(err.to_string().contains("missing field `y`"));
    }

    #[test]
    fn test_record_from_sequence() {
        let mut de = serde_json::Deserializer::from_str("[1, 2]");
        let v: Voxel = deserialize(&mut de).unwrap();
        assert_eq!(v.0, [1.0, 2.0, 0.0]);

        let mut de = serde_json::Deserializer::from_str("[1, 2, 3]");
        let v: Voxel = deserialize(&mut de).unwrap();
        assert_eq!(v.0, [1.0, 2.0, 3.0]);
    }
}
