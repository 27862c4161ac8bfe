//! Derived vector and quaternion operations on top of [`nalgebra`].
//!
//! The operations are provided as extension traits on the host types:
//! [`VectorExt`] for 2D and 3D vectors of both integer and float components,
//! [`FloatVectorExt`] and [`RotateAboutExt`] for float vectors,
//! [`Vector2Ext`] and [`Vector3Ext`] for conversions between the two
//! arities and [`QuaternionExt`] for quaternions. The [`search`] module
//! finds the closest and farthest vectors in a collection.

mod axes;
mod float;
mod num;
mod quaternion;
pub mod search;
mod swizzle;
mod vector;

pub use axes::Axes;
pub use float::{FloatVectorExt, RotateAboutExt};
pub use num::{Component, Float};
pub use quaternion::QuaternionExt;
pub use search::{
    CloserOutcome, Closeness, EmptyCandidates, Nearest, SearchConfig, VectorIteratorExt, closest,
    farthest, find_closest, find_farthest, nearest,
};
pub use swizzle::{Vector2Ext, Vector3Ext};
pub use vector::{VectorExt, average, translate_all};
