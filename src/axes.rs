//! Per-axis optional operands for componentwise vector operations.

use crate::num::Component;
use nalgebra::SVector;

/// One optional operand for each of the `D` axes of a vector or quaternion.
///
/// An absent operand leaves the corresponding component untouched, which is
/// the identity element of every componentwise operation built on
/// [`Axes::apply`]: adding zero, multiplying by one and so on.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Axes<T, const D: usize> {
    operands: [Option<T>; D],
}

impl<T: Component, const D: usize> Axes<T, D> {
    /// Creates an operand set with no axis present.
    pub fn none() -> Self {
        Self {
            operands: [None; D],
        }
    }

    /// Creates an operand set with the same value present on every axis.
    pub fn all(value: T) -> Self {
        Self {
            operands: [Some(value); D],
        }
    }

    /// Creates an operand set from one optional operand per axis.
    pub fn from_operands(operands: [Option<T>; D]) -> Self {
        Self { operands }
    }

    /// Returns the optional operands in axis order.
    pub fn operands(&self) -> &[Option<T>; D] {
        &self.operands
    }

    /// Returns the operand for the axis with the given index.
    ///
    /// # Panics
    /// If `axis` is not smaller than `D`.
    pub fn operand(&self, axis: usize) -> Option<T> {
        self.operands[axis]
    }

    /// Whether no axis has an operand.
    pub fn is_empty(&self) -> bool {
        self.operands.iter().all(Option::is_none)
    }

    /// Sets the operand for the axis with the given index.
    ///
    /// # Panics
    /// If `axis` is not smaller than `D`.
    #[must_use]
    pub fn with_operand(mut self, axis: usize, value: T) -> Self {
        self.operands[axis] = Some(value);
        self
    }

    /// Sets the x-operand.
    #[must_use]
    pub fn x(self, value: T) -> Self {
        self.with_operand(0, value)
    }

    /// Sets the y-operand.
    #[must_use]
    pub fn y(self, value: T) -> Self {
        self.with_operand(1, value)
    }

    /// Combines each component of `vector` that has an operand with that
    /// operand using `op`. Components without an operand are copied as they
    /// are.
    pub fn apply(&self, vector: &SVector<T, D>, op: impl Fn(T, T) -> T) -> SVector<T, D> {
        SVector::from_fn(|axis, _| match self.operands[axis] {
            Some(operand) => op(vector[axis], operand),
            None => vector[axis],
        })
    }
}

impl<T: Component> Axes<T, 2> {
    pub fn xy(x: Option<T>, y: Option<T>) -> Self {
        Self::from_operands([x, y])
    }
}

impl<T: Component> Axes<T, 3> {
    pub fn xyz(x: Option<T>, y: Option<T>, z: Option<T>) -> Self {
        Self::from_operands([x, y, z])
    }

    /// Sets the z-operand.
    #[must_use]
    pub fn z(self, value: T) -> Self {
        self.with_operand(2, value)
    }
}

impl<T: Component> Axes<T, 4> {
    pub fn xyzw(x: Option<T>, y: Option<T>, z: Option<T>, w: Option<T>) -> Self {
        Self::from_operands([x, y, z, w])
    }

    /// Sets the z-operand.
    #[must_use]
    pub fn z(self, value: T) -> Self {
        self.with_operand(2, value)
    }

    /// Sets the w-operand.
    #[must_use]
    pub fn w(self, value: T) -> Self {
        self.with_operand(3, value)
    }
}

impl<T: Component, const D: usize> Default for Axes<T, D> {
    fn default() -> Self {
        Self::none()
    }
}

impl<T: Component, const D: usize> From<SVector<T, D>> for Axes<T, D> {
    fn from(vector: SVector<T, D>) -> Self {
        Self::from_operands(std::array::from_fn(|axis| Some(vector[axis])))
    }
}
