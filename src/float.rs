//! Operations on vectors with floating point components.

use crate::{
    num::{Component, Float},
    search::{CloserOutcome, Closeness},
    vector::{saturating_integral_cast, try_integral_cast},
};
use anyhow::Result;
use nalgebra::{Quaternion, SVector, UnitQuaternion, Vector3};

/// Operations available on vectors whose components are [`Float`]s.
pub trait FloatVectorExt<F: Float, const D: usize>: Sized {
    /// Computes the Euclidean length, accumulating the squared components in
    /// double precision before taking the square root.
    fn accurate_magnitude(&self) -> F;

    /// Computes the squared Euclidean length, accumulating in double
    /// precision. Prefer this when only the ordering of lengths matters.
    fn sqr_magnitude(&self) -> F;

    fn distance_from(&self, target: &Self) -> F;

    fn sqr_distance_from(&self, target: &Self) -> F;

    /// Computes the sum of the absolute differences along each axis.
    fn manhattan_distance_from(&self, target: &Self) -> F;

    /// Returns the unit vector pointing from this vector towards
    /// `destination`. Coincident vectors give NaN components.
    fn direction_to(&self, destination: &Self) -> Self;

    /// Returns the vector scaled to the given length. A zero vector gives NaN
    /// components.
    fn with_magnitude(&self, magnitude: F) -> Self;

    /// Returns the vector shortened to `max_length` if it is longer than
    /// that, and unchanged otherwise.
    fn clamp_magnitude(&self, max_length: F) -> Self;

    /// Returns the vector with the y-component replaced by `level`.
    fn flat(&self, level: F) -> Self;

    /// Rounds every component to the nearest integer, with ties going to the
    /// even integer.
    fn round_components(&self) -> Self;

    /// Rounds every component to the nearest multiple of `multiple`.
    fn round_to_multiple(&self, multiple: F) -> Self;

    /// Rounds every component to the nearest multiple of the corresponding
    /// component of `multiples`.
    fn round_to_multiples(&self, multiples: &Self) -> Self;

    /// Rounds every component towards negative infinity.
    fn floor_components(&self) -> Self;

    /// Rounds every component down to a multiple of `multiple`.
    fn floor_to_multiple(&self, multiple: F) -> Self;

    /// Rounds every component down to a multiple of the corresponding
    /// component of `multiples`.
    fn floor_to_multiples(&self, multiples: &Self) -> Self;

    /// Rounds every component towards positive infinity.
    fn ceil_components(&self) -> Self;

    /// Rounds every component up to a multiple of `multiple`.
    fn ceil_to_multiple(&self, multiple: F) -> Self;

    /// Rounds every component up to a multiple of the corresponding component
    /// of `multiples`.
    fn ceil_to_multiples(&self, multiples: &Self) -> Self;

    /// Floors every component and converts it to the integer type `I`,
    /// saturating at the bounds of `I`.
    fn floor_to_int<I: Component>(&self) -> SVector<I, D>;

    /// Floors every component down to a multiple of the integer `multiple`
    /// and converts it to the integer type `I`, saturating at the bounds of
    /// `I`.
    fn floor_to_int_multiple<I: Component>(&self, multiple: I) -> SVector<I, D>;

    /// Floors every component down to a multiple of the corresponding
    /// component of the integer vector `multiples` and converts it to the
    /// integer type `I`, saturating at the bounds of `I`.
    fn floor_to_int_multiples<I: Component>(&self, multiples: &SVector<I, D>) -> SVector<I, D>;

    /// Floors every component and converts it to the integer type `I`.
    ///
    /// # Errors
    /// Returns an error if a component is NaN or its floor is not
    /// representable by `I`.
    fn try_floor_to_int<I: Component>(&self) -> Result<SVector<I, D>>;

    /// Rounds every component to the nearest integer (ties to even) and
    /// converts it to the integer type `I`, saturating at the bounds of `I`.
    fn round_to_int<I: Component>(&self) -> SVector<I, D>;

    /// Rounds every component to the nearest integer (ties to even) and
    /// converts it to the integer type `I`.
    ///
    /// # Errors
    /// Returns an error if a component is NaN or its rounded value is not
    /// representable by `I`.
    fn try_round_to_int<I: Component>(&self) -> Result<SVector<I, D>>;

    /// Whether the vector lies strictly inside the sphere (or circle) with
    /// the given origin and radius.
    fn is_within_radius(&self, origin: &Self, radius: F) -> bool;

    /// Whether the vector lies strictly outside the sphere (or circle) with
    /// the given origin and radius.
    fn is_beyond_radius(&self, origin: &Self, radius: F) -> bool;

    /// Whether every component lies strictly between the corresponding
    /// components of the lower and upper box corners.
    fn is_within_box(&self, lower_corner: &Self, upper_corner: &Self) -> bool;

    /// Whether any component lies strictly outside the range given by the
    /// corresponding components of the lower and upper box corners.
    ///
    /// A point on the boundary of the box is neither within nor beyond it.
    fn is_beyond_box(&self, lower_corner: &Self, upper_corner: &Self) -> bool;

    /// Whether this position is strictly closer to `origin` than
    /// `compared_position` is.
    fn is_closer_than(&self, compared_position: &Self, origin: &Self) -> bool;

    /// Like [`is_closer_than`](Self::is_closer_than), but also reports the
    /// closeness of whichever of the two positions won.
    fn compare_closeness(&self, compared_position: &Self, origin: &Self) -> CloserOutcome<F>;

    /// Whether this position is strictly closer to `origin` than the given
    /// running closeness, reporting the updated closeness.
    fn is_closer_to(&self, origin: &Self, closeness: Closeness<F>) -> CloserOutcome<F>;
}

impl<F: Float, const D: usize> FloatVectorExt<F, D> for SVector<F, D> {
    fn accurate_magnitude(&self) -> F {
        F::from_wide(wide_sqr_magnitude(self).sqrt())
    }

    fn sqr_magnitude(&self) -> F {
        F::from_wide(wide_sqr_magnitude(self))
    }

    fn distance_from(&self, target: &Self) -> F {
        (self - target).accurate_magnitude()
    }

    fn sqr_distance_from(&self, target: &Self) -> F {
        (self - target).sqr_magnitude()
    }

    fn manhattan_distance_from(&self, target: &Self) -> F {
        self.iter()
            .zip(target.iter())
            .fold(F::ZERO, |sum, (&component, &target_component)| {
                sum + (target_component - component).abs()
            })
    }

    fn direction_to(&self, destination: &Self) -> Self {
        (destination - self).normalize()
    }

    fn with_magnitude(&self, magnitude: F) -> Self {
        self.normalize() * magnitude
    }

    fn clamp_magnitude(&self, max_length: F) -> Self {
        if self.sqr_magnitude() > max_length * max_length {
            self.with_magnitude(max_length)
        } else {
            *self
        }
    }

    fn flat(&self, level: F) -> Self {
        let mut flattened = *self;
        flattened[1] = level;
        flattened
    }

    fn round_components(&self) -> Self {
        self.map(F::round_half_even)
    }

    fn round_to_multiple(&self, multiple: F) -> Self {
        (self / multiple).round_components() * multiple
    }

    fn round_to_multiples(&self, multiples: &Self) -> Self {
        self.zip_map(multiples, |component, multiple| {
            (component / multiple).round_half_even() * multiple
        })
    }

    fn floor_components(&self) -> Self {
        self.map(F::floor)
    }

    fn floor_to_multiple(&self, multiple: F) -> Self {
        (self / multiple).floor_components() * multiple
    }

    fn floor_to_multiples(&self, multiples: &Self) -> Self {
        self.zip_map(multiples, |component, multiple| {
            (component / multiple).floor() * multiple
        })
    }

    fn ceil_components(&self) -> Self {
        self.map(F::ceil)
    }

    fn ceil_to_multiple(&self, multiple: F) -> Self {
        (self / multiple).ceil_components() * multiple
    }

    fn ceil_to_multiples(&self, multiples: &Self) -> Self {
        self.zip_map(multiples, |component, multiple| {
            (component / multiple).ceil() * multiple
        })
    }

    fn floor_to_int<I: Component>(&self) -> SVector<I, D> {
        saturating_integral_cast(&self.floor_components())
    }

    fn floor_to_int_multiple<I: Component>(&self, multiple: I) -> SVector<I, D> {
        let divisor: F = num_traits::cast(multiple).unwrap_or(F::INFINITY);
        (self / divisor)
            .floor_to_int::<I>()
            .map(|component| component.saturating_mul(multiple))
    }

    fn floor_to_int_multiples<I: Component>(&self, multiples: &SVector<I, D>) -> SVector<I, D> {
        let divisors: Self =
            multiples.map(|multiple| num_traits::cast(multiple).unwrap_or(F::INFINITY));
        self.component_div(&divisors)
            .floor_to_int::<I>()
            .zip_map(multiples, |component, multiple| component.saturating_mul(multiple))
    }

    fn try_floor_to_int<I: Component>(&self) -> Result<SVector<I, D>> {
        try_integral_cast(&self.floor_components())
    }

    fn round_to_int<I: Component>(&self) -> SVector<I, D> {
        saturating_integral_cast(&self.round_components())
    }

    fn try_round_to_int<I: Component>(&self) -> Result<SVector<I, D>> {
        try_integral_cast(&self.round_components())
    }

    fn is_within_radius(&self, origin: &Self, radius: F) -> bool {
        self.sqr_distance_from(origin) < radius * radius
    }

    fn is_beyond_radius(&self, origin: &Self, radius: F) -> bool {
        self.sqr_distance_from(origin) > radius * radius
    }

    fn is_within_box(&self, lower_corner: &Self, upper_corner: &Self) -> bool {
        (0..D).all(|axis| self[axis] > lower_corner[axis] && self[axis] < upper_corner[axis])
    }

    fn is_beyond_box(&self, lower_corner: &Self, upper_corner: &Self) -> bool {
        (0..D).any(|axis| self[axis] < lower_corner[axis] || self[axis] > upper_corner[axis])
    }

    fn is_closer_than(&self, compared_position: &Self, origin: &Self) -> bool {
        self.compare_closeness(compared_position, origin).is_closer
    }

    fn compare_closeness(&self, compared_position: &Self, origin: &Self) -> CloserOutcome<F> {
        let compared_closeness = Closeness::new(compared_position.sqr_distance_from(origin));
        self.is_closer_to(origin, compared_closeness)
    }

    fn is_closer_to(&self, origin: &Self, closeness: Closeness<F>) -> CloserOutcome<F> {
        closeness.challenge(self, origin)
    }
}

/// Rotation of 3D positions about a pivot.
pub trait RotateAboutExt<F: Float>: Sized {
    /// Rotates this world space position about `center_of_rotation` by the
    /// given quaternion. The quaternion is not normalized, so a non-unit
    /// quaternion scales and skews the result.
    fn rotate_about(&self, center_of_rotation: &Self, rotation: &Quaternion<F>) -> Self;

    /// Rotates this world space position about `center_of_rotation` by the
    /// given roll, pitch and yaw angles (the x-, y- and z-components of
    /// `euler_angles`), following [`UnitQuaternion::from_euler_angles`].
    fn rotate_about_euler(&self, center_of_rotation: &Self, euler_angles: &Self) -> Self;
}

impl<F: Float> RotateAboutExt<F> for Vector3<F> {
    fn rotate_about(&self, center_of_rotation: &Self, rotation: &Quaternion<F>) -> Self {
        let local_position = self - center_of_rotation;
        crate::quaternion::rotate_vector(rotation, &local_position) + center_of_rotation
    }

    fn rotate_about_euler(&self, center_of_rotation: &Self, euler_angles: &Self) -> Self {
        let rotation =
            UnitQuaternion::from_euler_angles(euler_angles.x, euler_angles.y, euler_angles.z);
        self.rotate_about(center_of_rotation, rotation.quaternion())
    }
}

fn wide_sqr_magnitude<F: Float, const D: usize>(vector: &SVector<F, D>) -> f64 {
    vector.iter().fold(0.0, |sum, &component| {
        let component = component.to_wide();
        sum + component * component
    })
}
