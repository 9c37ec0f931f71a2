// src/numerics/types/traits.rs
// The numeric bound every coordinate of a plottable value satisfies.

use core::fmt::Debug;
use core::ops::{Add, Div, Mul, Neg, Rem, Sub};

/// Axis is the floating point type used for each coordinate.
///
/// We require Copy, PartialOrd and the full set of arithmetic ops on Self,
/// plus a square root so that distances can be computed without leaving the
/// axis type. Division and remainder keep their native IEEE-754 behavior:
/// a zero divisor yields infinity or NaN, never a panic.
pub trait Axis:
Copy + PartialOrd + Debug
+ Add<Output = Self>
+ Sub<Output = Self>
+ Mul<Output = Self>
+ Div<Output = Self>
+ Rem<Output = Self>
+ Neg<Output = Self>
{
    /// The additive identity.
    fn zero() -> Self;

    fn sqrt(self) -> Self;

    fn squared(self) -> Self {
        self * self
    }
}

impl Axis for f32 {
    fn zero() -> Self { 0.0 }
    fn sqrt(self) -> Self { f32::sqrt(self) }
}

impl Axis for f64 {
    fn zero() -> Self { 0.0 }
    fn sqrt(self) -> Self { f64::sqrt(self) }
}
