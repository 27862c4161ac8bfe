//! Conversions between 2D and 3D vectors and permutations of their axes.

use crate::num::Component;
use nalgebra::{Vector2, Vector3};
use std::ops::Neg;

/// Axis operations on 2D vectors.
pub trait Vector2Ext<T: Component> {
    /// Inserts `z` as the z-component after the x- and y-components.
    fn extend_xy(&self, z: T) -> Vector3<T>;

    /// Places the components on the x- and z-axis, inserting `y` as the
    /// y-component.
    fn extend_xz(&self, y: T) -> Vector3<T>;

    /// Places the components on the y- and z-axis, inserting `x` as the
    /// x-component.
    fn extend_yz(&self, x: T) -> Vector3<T>;

    /// Exchanges the x- and y-components.
    fn swapped(&self) -> Vector2<T>;

    /// Returns `(y, -x)`, the vector rotated a quarter turn clockwise.
    fn perpendicular(&self) -> Vector2<T>
    where
        T: Neg<Output = T>;

    /// Computes the z-component of the cross product of the two vectors
    /// embedded in the xy-plane.
    fn cross_2d(&self, other: &Vector2<T>) -> T;
}

/// Axis operations on 3D vectors.
pub trait Vector3Ext<T: Component> {
    /// Drops the z-component.
    fn project_xy(&self) -> Vector2<T>;

    /// Drops the y-component.
    fn project_xz(&self) -> Vector2<T>;

    /// Drops the x-component.
    fn project_yz(&self) -> Vector2<T>;

    /// Moves every component one axis forwards, so `(x, y, z)` becomes
    /// `(z, x, y)`.
    fn swap_forwards(&self) -> Vector3<T>;

    /// Moves every component one axis backwards, so `(x, y, z)` becomes
    /// `(y, z, x)`.
    fn swap_backwards(&self) -> Vector3<T>;

    /// Returns `(y, -x, 0)`.
    fn perpendicular_xy(&self) -> Vector3<T>
    where
        T: Neg<Output = T>;

    /// Returns `(y, 0, -x)`.
    fn perpendicular_xz(&self) -> Vector3<T>
    where
        T: Neg<Output = T>;

    /// Returns `(0, y, -x)`.
    fn perpendicular_yz(&self) -> Vector3<T>
    where
        T: Neg<Output = T>;
}

impl<T: Component> Vector2Ext<T> for Vector2<T> {
    fn extend_xy(&self, z: T) -> Vector3<T> {
        Vector3::new(self.x, self.y, z)
    }

    fn extend_xz(&self, y: T) -> Vector3<T> {
        Vector3::new(self.x, y, self.y)
    }

    fn extend_yz(&self, x: T) -> Vector3<T> {
        Vector3::new(x, self.x, self.y)
    }

    fn swapped(&self) -> Vector2<T> {
        Vector2::new(self.y, self.x)
    }

    fn perpendicular(&self) -> Vector2<T>
    where
        T: Neg<Output = T>,
    {
        Vector2::new(self.y, -self.x)
    }

    fn cross_2d(&self, other: &Vector2<T>) -> T {
        self.x * other.y - self.y * other.x
    }
}

impl<T: Component> Vector3Ext<T> for Vector3<T> {
    fn project_xy(&self) -> Vector2<T> {
        Vector2::new(self.x, self.y)
    }

    fn project_xz(&self) -> Vector2<T> {
        Vector2::new(self.x, self.z)
    }

    fn project_yz(&self) -> Vector2<T> {
        Vector2::new(self.y, self.z)
    }

    fn swap_forwards(&self) -> Vector3<T> {
        Vector3::new(self.z, self.x, self.y)
    }

    fn swap_backwards(&self) -> Vector3<T> {
        Vector3::new(self.y, self.z, self.x)
    }

    fn perpendicular_xy(&self) -> Vector3<T>
    where
        T: Neg<Output = T>,
    {
        Vector3::new(self.y, -self.x, T::ZERO)
    }

    fn perpendicular_xz(&self) -> Vector3<T>
    where
        T: Neg<Output = T>,
    {
        Vector3::new(self.y, T::ZERO, -self.x)
    }

    fn perpendicular_yz(&self) -> Vector3<T>
    where
        T: Neg<Output = T>,
    {
        Vector3::new(T::ZERO, self.y, -self.x)
    }
}
