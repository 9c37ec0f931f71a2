/// Implements the `core::ops` operators and `PartialEq` for a plottable type.
///
/// The first argument names the dimension whose derived operations back the
/// operators (`two_dimensions` or `three_dimensions`). The generics of the
/// type go between brackets, then the type, then the operators to generate.
///
/// Each generated impl carries a `where Self: <Marker>` bound, so listing an
/// operator whose capability marker the type does not claim fails to compile.
///
/// ```
/// use points::prelude::*;
///
/// #[derive(Clone, Copy, Debug)]
/// struct Pixel { x: f32, y: f32 }
///
/// impl PlottableInTwoDimensions for Pixel {
///     type Axis = f32;
///     fn from_xy(x: f32, y: f32) -> Self { Self { x, y } }
///     fn x(&self) -> f32 { self.x }
///     fn y(&self) -> f32 { self.y }
/// }
///
/// impl Addable for Pixel {}
///
/// points::plottable_ops!(two_dimensions; [] Pixel; PartialEq, Add);
///
/// assert_eq!(Pixel::from_xy(1.0, 2.0) + Pixel::from_xy(3.0, 4.0), Pixel::from_xy(4.0, 6.0));
/// ```
#[macro_export]
macro_rules! plottable_ops {
    (@op PartialEq, $dims:ident, [$($gen:tt)*] $ty:ty) => {
        impl<$($gen)*> ::core::cmp::PartialEq for $ty {
            fn eq(&self, rhs: &Self) -> bool {
                $crate::plottable::$dims::equals(self, rhs)
            }
        }
    };
    (@op Add, $dims:ident, [$($gen:tt)*] $ty:ty) => {
        impl<$($gen)*> ::core::ops::Add for $ty
        where
            $ty: $crate::plottable::capability::Addable,
        {
            type Output = Self;

            fn add(self, rhs: Self) -> Self {
                $crate::plottable::$dims::add(&self, &rhs)
            }
        }
    };
    (@op Sub, $dims:ident, [$($gen:tt)*] $ty:ty) => {
        impl<$($gen)*> ::core::ops::Sub for $ty
        where
            $ty: $crate::plottable::capability::Subtractable,
        {
            type Output = Self;

            fn sub(self, rhs: Self) -> Self {
                $crate::plottable::$dims::subtract(&self, &rhs)
            }
        }
    };
    (@op Mul, $dims:ident, [$($gen:tt)*] $ty:ty) => {
        impl<$($gen)*> ::core::ops::Mul for $ty
        where
            $ty: $crate::plottable::capability::Multipliable,
        {
            type Output = Self;

            fn mul(self, rhs: Self) -> Self {
                $crate::plottable::$dims::multiply(&self, &rhs)
            }
        }
    };
    (@op Div, $dims:ident, [$($gen:tt)*] $ty:ty) => {
        impl<$($gen)*> ::core::ops::Div for $ty
        where
            $ty: $crate::plottable::capability::Divisible,
        {
            type Output = Self;

            fn div(self, rhs: Self) -> Self {
                $crate::plottable::$dims::divide(&self, &rhs)
            }
        }
    };
    (@op Rem, $dims:ident, [$($gen:tt)*] $ty:ty) => {
        impl<$($gen)*> ::core::ops::Rem for $ty
        where
            $ty: $crate::plottable::capability::Divisible,
        {
            type Output = Self;

            fn rem(self, rhs: Self) -> Self {
                $crate::plottable::$dims::remainder(&self, &rhs)
            }
        }
    };
    (@op Neg, $dims:ident, [$($gen:tt)*] $ty:ty) => {
        impl<$($gen)*> ::core::ops::Neg for $ty
        where
            $ty: $crate::plottable::capability::Negateable,
        {
            type Output = Self;

            fn neg(self) -> Self {
                $crate::plottable::$dims::negate(&self)
            }
        }
    };
    ($dims:ident; [$($gen:tt)*] $ty:ty;) => {};
    ($dims:ident; [$($gen:tt)*] $ty:ty; $op:ident $(, $rest:ident)*) => {
        $crate::plottable_ops!(@op $op, $dims, [$($gen)*] $ty);
        $crate::plottable_ops!($dims; [$($gen)*] $ty; $($rest),*);
    };
}
