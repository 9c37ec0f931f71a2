//! Capability markers.
//!
//! A plottable type opts into a derived operation by implementing the
//! matching marker. The derived operations in [`two_dimensions`] and
//! [`three_dimensions`] are bounded on these, so using an operation the type
//! never claimed is rejected at compile time.
//!
//! [`two_dimensions`]: crate::plottable::two_dimensions
//! [`three_dimensions`]: crate::plottable::three_dimensions

/// Unlocks componentwise `+`.
pub trait Addable {}

/// Unlocks componentwise binary `-`.
pub trait Subtractable {}

/// Unlocks componentwise `*`.
pub trait Multipliable {}

/// Unlocks componentwise `/` and `%`.
pub trait Divisible {}

/// Unlocks componentwise unary `-`.
pub trait Negateable {}

/// Unlocks `zero()`, the value with every component at the additive identity.
pub trait RepresentableByZero {}

/// Unlocks `distance(to)` and `advanced(by)`.
pub trait Strideable {}
