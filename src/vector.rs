//! Componentwise operations shared by the integer and floating point vector
//! families.

use crate::{
    axes::Axes,
    num::{Component, Float, clamp_optional},
};
use anyhow::{Result, anyhow};
use nalgebra::{DMatrix, SVector};

/// Operations available on every vector whose components are [`Component`]s.
pub trait VectorExt<T: Component, const D: usize>: Sized {
    /// Returns a copy with every component that has an operand replaced by
    /// that operand.
    fn with_axes(&self, values: &Axes<T, D>) -> Self;

    /// Adds the operand of each present axis to the corresponding component.
    fn add_axes(&self, terms: &Axes<T, D>) -> Self;

    /// Subtracts the operand of each present axis from the corresponding
    /// component.
    fn sub_axes(&self, terms: &Axes<T, D>) -> Self;

    /// Multiplies the corresponding component by the operand of each present
    /// axis.
    fn mul_axes(&self, factors: &Axes<T, D>) -> Self;

    /// Divides the corresponding component by the operand of each present
    /// axis.
    ///
    /// # Panics
    /// For integer components, if a present operand is zero.
    fn div_axes(&self, divisors: &Axes<T, D>) -> Self;

    /// Replaces the corresponding component with its remainder after
    /// division by the operand of each present axis.
    ///
    /// # Panics
    /// For integer components, if a present operand is zero.
    fn rem_axes(&self, divisors: &Axes<T, D>) -> Self;

    /// Restricts each component to the optional lower and upper bound given
    /// for its axis.
    fn clamp_axes(&self, min: &Axes<T, D>, max: &Axes<T, D>) -> Self;

    /// Restricts each component to the corresponding component of the
    /// optional lower and upper bound vectors.
    fn clamp_between(&self, min: Option<&Self>, max: Option<&Self>) -> Self;

    /// Returns the vector offset by the given origin.
    fn with_origin(&self, origin: &Self) -> Self;

    /// Exports the vector as a dynamically sized `D`×1 column matrix.
    fn to_column_matrix(&self) -> DMatrix<T>;

    /// Converts the components to the given floating point type.
    fn to_float<F: Float>(&self) -> SVector<F, D>;
}

impl<T: Component, const D: usize> VectorExt<T, D> for SVector<T, D> {
    fn with_axes(&self, values: &Axes<T, D>) -> Self {
        values.apply(self, |_, value| value)
    }

    fn add_axes(&self, terms: &Axes<T, D>) -> Self {
        terms.apply(self, |component, term| component + term)
    }

    fn sub_axes(&self, terms: &Axes<T, D>) -> Self {
        terms.apply(self, |component, term| component - term)
    }

    fn mul_axes(&self, factors: &Axes<T, D>) -> Self {
        factors.apply(self, |component, factor| component * factor)
    }

    fn div_axes(&self, divisors: &Axes<T, D>) -> Self {
        divisors.apply(self, |component, divisor| component / divisor)
    }

    fn rem_axes(&self, divisors: &Axes<T, D>) -> Self {
        divisors.apply(self, |component, divisor| component % divisor)
    }

    fn clamp_axes(&self, min: &Axes<T, D>, max: &Axes<T, D>) -> Self {
        Self::from_fn(|axis, _| clamp_optional(self[axis], min.operand(axis), max.operand(axis)))
    }

    fn clamp_between(&self, min: Option<&Self>, max: Option<&Self>) -> Self {
        let min = min.map_or_else(Axes::none, |min| Axes::from(*min));
        let max = max.map_or_else(Axes::none, |max| Axes::from(*max));
        self.clamp_axes(&min, &max)
    }

    fn with_origin(&self, origin: &Self) -> Self {
        self.zip_map(origin, |component, offset| component + offset)
    }

    fn to_column_matrix(&self) -> DMatrix<T> {
        DMatrix::from_column_slice(D, 1, self.as_slice())
    }

    fn to_float<F: Float>(&self) -> SVector<F, D> {
        // Every primitive integer and float converts to a float, at worst to
        // infinity.
        self.map(|component| num_traits::cast(component).unwrap_or(F::INFINITY))
    }
}

/// Adds `translation` to every point, preserving the order of the points.
pub fn translate_all<T: Component, const D: usize>(
    points: impl IntoIterator<Item = SVector<T, D>>,
    translation: &SVector<T, D>,
) -> Vec<SVector<T, D>> {
    points
        .into_iter()
        .map(|point| point.with_origin(translation))
        .collect()
}

/// Computes the componentwise mean of the given vectors.
///
/// The sum is divided by the number of vectors without checking for an empty
/// input, so no vectors give NaN components for floats.
///
/// # Panics
/// For integer components, if there are no vectors.
pub fn average<T: Component, const D: usize>(
    vectors: impl IntoIterator<Item = SVector<T, D>>,
) -> SVector<T, D> {
    let (total, count) = vectors.into_iter().fold(
        (SVector::<T, D>::from_element(T::ZERO), 0_usize),
        |(total, count), vector| (total.with_origin(&vector), count + 1),
    );
    let count = T::from_count(count);
    total.map(|component| component / count)
}

/// Converts each component of a vector with integral float values to the
/// integer type `I`, failing if any of them is NaN or out of range.
pub(crate) fn try_integral_cast<F: Float, I: Component, const D: usize>(
    vector: &SVector<F, D>,
) -> Result<SVector<I, D>> {
    let mut components = [I::ZERO; D];
    for (axis, component) in vector.iter().enumerate() {
        components[axis] = num_traits::cast(*component).ok_or_else(|| {
            anyhow!(
                "Component {} of vector is not representable as an integer: {:?}",
                axis,
                component
            )
        })?;
    }
    Ok(SVector::from(components))
}

/// Converts each component of a vector with integral float values to the
/// integer type `I`, saturating at the bounds of `I` and sending NaN to zero
/// the way an `as` cast does.
pub(crate) fn saturating_integral_cast<F: Float, I: Component, const D: usize>(
    vector: &SVector<F, D>,
) -> SVector<I, D> {
    vector.map(|component| {
        num_traits::cast(component).unwrap_or_else(|| {
            if component > F::ZERO {
                I::max_value()
            } else if component < F::ZERO {
                I::min_value()
            } else {
                I::ZERO
            }
        })
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_abs_diff_eq;
    use nalgebra::{Vector2, Vector3, vector};

    #[test]
    fn with_axes_replaces_only_present_components() {
        let vector = vector![1.0, 2.0, 3.0];
        assert_eq!(vector.with_axes(&Axes::none().y(-5.0)), vector![1.0, -5.0, 3.0]);
        assert_eq!(vector.with_axes(&Axes::none()), vector);
    }

    #[test]
    fn add_and_sub_axes_leave_absent_axes_unchanged() {
        let vector = vector![4, 5, 6];
        assert_eq!(vector.add_axes(&Axes::<_, 3>::none().x(1).z(2)), vector![5, 5, 8]);
        assert_eq!(vector.sub_axes(&Axes::none().y(10)), vector![4, -5, 6]);
    }

    #[test]
    fn adding_whole_vector_matches_vector_addition() {
        let vector = vector![1.5, -0.5];
        let other = vector![2.0, 3.0];
        assert_eq!(vector.add_axes(&Axes::from(other)), vector + other);
        assert_eq!(vector.sub_axes(&Axes::from(other)), vector - other);
    }

    #[test]
    fn mul_and_div_axes_leave_absent_axes_unchanged() {
        let vector = vector![3.0, 8.0];
        assert_eq!(vector.mul_axes(&Axes::none().x(2.0)), vector![6.0, 8.0]);
        assert_eq!(vector.div_axes(&Axes::none().y(4.0)), vector![3.0, 2.0]);
    }

    #[test]
    fn rem_axes_with_absent_operand_leaves_axis_unchanged() {
        let vector = vector![7, 9, 11];
        assert_eq!(vector.rem_axes(&Axes::none().y(4)), vector![7, 1, 11]);
        assert_eq!(vector.rem_axes(&Axes::none()), vector);
    }

    #[test]
    fn float_division_by_zero_follows_float_semantics() {
        let vector = vector![1.0_f32, 0.0];
        let divided = vector.div_axes(&Axes::all(0.0));
        assert!(divided.x.is_infinite());
        assert!(divided.y.is_nan());
        assert!(vector.rem_axes(&Axes::all(0.0)).x.is_nan());
    }

    #[test]
    #[should_panic]
    fn integer_division_by_zero_panics() {
        vector![1, 2].div_axes(&Axes::none().x(0));
    }

    #[test]
    fn clamp_axes_applies_only_present_bounds() {
        let vector = vector![-4, 5, 20];
        let clamped = vector.clamp_axes(&Axes::none().x(0), &Axes::<_, 3>::none().z(10));
        assert_eq!(clamped, vector![0, 5, 10]);
    }

    #[test]
    fn clamp_between_vectors_works() {
        let vector = vector![-1.0, 0.5];
        let min = vector![0.0, 0.0];
        let max = vector![0.25, 0.25];
        assert_eq!(vector.clamp_between(Some(&min), Some(&max)), vector![0.0, 0.25]);
        assert_eq!(vector.clamp_between(None, Some(&max)), vector![-1.0, 0.25]);
        assert_eq!(vector.clamp_between(None, None), vector);
    }

    #[test]
    fn with_origin_offsets_vector() {
        assert_eq!(vector![1, 2].with_origin(&vector![10, 20]), vector![11, 22]);
    }

    #[test]
    fn column_matrix_keeps_component_order() {
        let matrix = vector![1, 2, 3].to_column_matrix();
        assert_eq!(matrix.shape(), (3, 1));
        assert_eq!(matrix[(0, 0)], 1);
        assert_eq!(matrix[(1, 0)], 2);
        assert_eq!(matrix[(2, 0)], 3);
    }

    #[test]
    fn integer_vector_converts_to_float() {
        let converted: Vector3<f32> = vector![1, -2, 3].to_float();
        assert_eq!(converted, vector![1.0, -2.0, 3.0]);
    }

    #[test]
    fn translating_preserves_order() {
        let translated = translate_all([vector![0, 0], vector![1, 2]], &vector![5, -5]);
        assert_eq!(translated, vec![vector![5, -5], vector![6, -3]]);
        assert!(translate_all(Vec::<Vector2<i32>>::new(), &vector![1, 1]).is_empty());
    }

    #[test]
    fn average_of_two_is_midpoint() {
        let a = vector![1.0, 2.0, 3.0];
        let b = vector![3.0, -2.0, 0.0];
        assert_abs_diff_eq!(average([a, b]), (a + b) / 2.0);
    }

    #[test]
    fn integer_average_truncates() {
        assert_eq!(average([vector![1, 2], vector![2, 5]]), vector![1, 3]);
    }

    #[test]
    fn average_of_no_float_vectors_is_nan() {
        let mean = average(Vec::<Vector2<f64>>::new());
        assert!(mean.x.is_nan() && mean.y.is_nan());
    }

    #[test]
    #[should_panic]
    fn average_of_no_integer_vectors_panics() {
        average(Vec::<Vector2<i32>>::new());
    }

    #[test]
    fn integral_casts_handle_out_of_range_components() {
        let vector = vector![3.0, f64::NAN, 1e12, -1e12];
        assert!(try_integral_cast::<f64, i32, 4>(&vector).is_err());
        assert_eq!(
            saturating_integral_cast::<f64, i32, 4>(&vector),
            vector![3, 0, i32::MAX, i32::MIN]
        );
        assert_eq!(
            try_integral_cast::<f64, i32, 2>(&vector![-2.0, 7.0]).unwrap(),
            vector![-2, 7]
        );
    }
}
