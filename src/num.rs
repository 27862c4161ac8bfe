//! Numbers and numerics.

use nalgebra as na;
use num_traits as nt;

/// Gathers traits required of a scalar that is used as a vector component,
/// covering both the integer and the floating point vector families.
pub trait Component:
    Copy + PartialOrd + na::Scalar + nt::Num + nt::NumCast + nt::Bounded
{
    const ZERO: Self;
    const ONE: Self;

    /// Converts an element count into this type with the semantics of an
    /// `as` cast.
    fn from_count(count: usize) -> Self;

    /// Multiplies, saturating at the bounds of the type instead of
    /// overflowing. Floats multiply normally.
    fn saturating_mul(self, other: Self) -> Self;
}

/// Gathers traits useful for working with generic floating point types.
pub trait Float: Component + nt::FloatConst + nt::FromPrimitive + na::RealField {
    const NEG_ONE: Self;
    const INFINITY: Self;

    /// Widens the value to double precision.
    fn to_wide(self) -> f64;

    /// Narrows a double precision value to this type.
    fn from_wide(value: f64) -> Self;

    /// Rounds to the nearest integer, with ties going to the even integer.
    fn round_half_even(self) -> Self;
}

macro_rules! impl_component {
    ($t:ty, $zero:expr, $one:expr, $saturating_mul:path) => {
        impl Component for $t {
            const ZERO: Self = $zero;
            const ONE: Self = $one;

            #[allow(clippy::cast_lossless, clippy::cast_precision_loss)]
            fn from_count(count: usize) -> Self {
                count as $t
            }

            fn saturating_mul(self, other: Self) -> Self {
                $saturating_mul(self, other)
            }
        }
    };
}

macro_rules! impl_float {
    ($f:ty) => {
        impl_component!($f, 0.0, 1.0, std::ops::Mul::mul);

        impl Float for $f {
            const NEG_ONE: Self = -1.0;
            const INFINITY: Self = <$f>::INFINITY;

            #[allow(clippy::cast_lossless)]
            fn to_wide(self) -> f64 {
                self as f64
            }

            #[allow(clippy::cast_possible_truncation)]
            fn from_wide(value: f64) -> Self {
                value as $f
            }

            fn round_half_even(self) -> Self {
                <$f>::round_ties_even(self)
            }
        }
    };
}

impl_component!(i32, 0, 1, i32::saturating_mul);
impl_component!(i64, 0, 1, i64::saturating_mul);
impl_float!(f32);
impl_float!(f64);

/// Restricts `value` to the optional bounds. The lower bound is applied
/// before the upper one, so an inverted pair of bounds yields `max`.
pub(crate) fn clamp_optional<T: Component>(value: T, min: Option<T>, max: Option<T>) -> T {
    let value = match min {
        Some(min) if value < min => min,
        _ => value,
    };
    match max {
        Some(max) if value > max => max,
        _ => value,
    }
}
