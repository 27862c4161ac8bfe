//! Componentwise operations on quaternions and rotation of vectors by them.

use crate::{axes::Axes, num::Float};
use nalgebra::{Quaternion, Vector3};

/// Operations on quaternions, with the components taken in `(x, y, z, w)`
/// order.
pub trait QuaternionExt<F: Float> {
    /// Returns a copy with every component that has an operand replaced by
    /// that operand.
    fn with_axes(&self, values: &Axes<F, 4>) -> Self;

    fn add_axes(&self, terms: &Axes<F, 4>) -> Self;

    fn sub_axes(&self, terms: &Axes<F, 4>) -> Self;

    fn mul_axes(&self, factors: &Axes<F, 4>) -> Self;

    fn div_axes(&self, divisors: &Axes<F, 4>) -> Self;

    fn rem_axes(&self, divisors: &Axes<F, 4>) -> Self;

    /// Applies the rotation represented by this quaternion to the given
    /// vector. The quaternion is used as is, so it must be normalized for
    /// the result to be a pure rotation.
    fn rotate_vector(&self, vector: &Vector3<F>) -> Vector3<F>;

    /// Rotates the given world space point about `center_of_rotation`.
    fn rotate_point_about(
        &self,
        point: &Vector3<F>,
        center_of_rotation: &Vector3<F>,
    ) -> Vector3<F>;
}

impl<F: Float> QuaternionExt<F> for Quaternion<F> {
    fn with_axes(&self, values: &Axes<F, 4>) -> Self {
        Self::from_vector(values.apply(&self.coords, |_, value| value))
    }

    fn add_axes(&self, terms: &Axes<F, 4>) -> Self {
        Self::from_vector(terms.apply(&self.coords, |component, term| component + term))
    }

    fn sub_axes(&self, terms: &Axes<F, 4>) -> Self {
        Self::from_vector(terms.apply(&self.coords, |component, term| component - term))
    }

    fn mul_axes(&self, factors: &Axes<F, 4>) -> Self {
        Self::from_vector(factors.apply(&self.coords, |component, factor| component * factor))
    }

    fn div_axes(&self, divisors: &Axes<F, 4>) -> Self {
        Self::from_vector(divisors.apply(&self.coords, |component, divisor| component / divisor))
    }

    fn rem_axes(&self, divisors: &Axes<F, 4>) -> Self {
        Self::from_vector(divisors.apply(&self.coords, |component, divisor| component % divisor))
    }

    fn rotate_vector(&self, vector: &Vector3<F>) -> Vector3<F> {
        rotate_vector(self, vector)
    }

    fn rotate_point_about(
        &self,
        point: &Vector3<F>,
        center_of_rotation: &Vector3<F>,
    ) -> Vector3<F> {
        rotate_vector(self, &(point - center_of_rotation)) + center_of_rotation
    }
}

/// Computes `q v q*` with the expanded form `v + w t + q_v × t`, where
/// `t = 2 q_v × v` and `q_v` is the vector part of `q`.
pub(crate) fn rotate_vector<F: Float>(rotation: &Quaternion<F>, vector: &Vector3<F>) -> Vector3<F> {
    let two = F::ONE + F::ONE;
    let imag = rotation.imag();
    let t = imag.cross(vector) * two;
    vector + t * rotation.w + imag.cross(&t)
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::{abs_diff_eq, assert_abs_diff_eq};
    use nalgebra::{UnitQuaternion, vector};
    use proptest::prelude::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn axis_operations_use_xyzw_order() {
        let quaternion = Quaternion::new(4.0, 1.0, 2.0, 3.0);
        let replaced = quaternion.with_axes(&Axes::<_, 4>::none().x(10.0).w(40.0));
        assert_eq!(replaced, Quaternion::new(40.0, 10.0, 2.0, 3.0));
    }

    #[test]
    fn absent_axes_are_left_unchanged() {
        let quaternion = Quaternion::new(4.0, 1.0, 2.0, 3.0);
        assert_eq!(
            quaternion.add_axes(&Axes::none().y(1.0)),
            Quaternion::new(4.0, 1.0, 3.0, 3.0)
        );
        assert_eq!(
            quaternion.sub_axes(&Axes::<_, 4>::none().z(1.0)),
            Quaternion::new(4.0, 1.0, 2.0, 2.0)
        );
        assert_eq!(
            quaternion.mul_axes(&Axes::<_, 4>::none().w(0.5)),
            Quaternion::new(2.0, 1.0, 2.0, 3.0)
        );
        assert_eq!(
            quaternion.div_axes(&Axes::none().x(2.0)),
            Quaternion::new(4.0, 0.5, 2.0, 3.0)
        );
        assert_eq!(
            quaternion.rem_axes(&Axes::<_, 4>::none().z(2.0)),
            Quaternion::new(4.0, 1.0, 2.0, 1.0)
        );
        assert_eq!(quaternion.rem_axes(&Axes::none()), quaternion);
    }

    #[test]
    fn identity_quaternion_leaves_vector_unchanged() {
        let vector = vector![1.0, -2.0, 3.5];
        assert_eq!(Quaternion::identity().rotate_vector(&vector), vector);
    }

    #[test]
    fn quarter_turn_about_x_axis_works() {
        let rotation = UnitQuaternion::from_axis_angle(&Vector3::x_axis(), FRAC_PI_2);
        assert_abs_diff_eq!(
            rotation.quaternion().rotate_vector(&vector![0.0, 1.0, 0.0]),
            vector![0.0, 0.0, 1.0],
            epsilon = 1e-12
        );
    }

    #[test]
    fn rotating_point_about_center_keeps_center_fixed() {
        let rotation = UnitQuaternion::from_euler_angles(0.4, -1.0, 2.0);
        let center = vector![3.0, 2.0, 1.0];
        assert_abs_diff_eq!(
            rotation.quaternion().rotate_point_about(&center, &center),
            center,
            epsilon = 1e-12
        );
    }

    proptest! {
        #[test]
        fn rotation_of_unit_quaternion_matches_host_rotation(
            roll in -3.0..3.0,
            pitch in -1.5..1.5,
            yaw in -3.0..3.0,
            x in -1e2..1e2,
            y in -1e2..1e2,
            z in -1e2..1e2,
        ) {
            let rotation = UnitQuaternion::from_euler_angles(roll, pitch, yaw);
            let vector = vector![x, y, z];
            prop_assert!(abs_diff_eq!(
                rotation.quaternion().rotate_vector(&vector),
                rotation * vector,
                epsilon = 1e-9
            ));
        }
    }
}
