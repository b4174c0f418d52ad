//! 3D Orientation Mathematics Library
//!
//! This crate provides the vector and quaternion algebra used to rotate the
//! quatcube model.
//!
//! ## Core Types
//!
//! - [`Vec3`] - 3D vector with x, y, z components
//! - [`Quaternion`] - scalar + vector quaternion; a rotation when unit-norm
//!
//! ## Rotation Operators
//!
//! - [`rotate_vector`] - apply a unit quaternion to a vector
//! - [`compose_rotation`] - accumulate an axis-angle increment
//! - [`slerp`] / [`slerp_shortest`] - interpolate between orientations

mod vec3;
mod quaternion;
pub mod rotation;

pub use vec3::Vec3;
pub use quaternion::Quaternion;
pub use rotation::{
    rotate_vector, compose_rotation, slerp, slerp_shortest, angle_between,
    SLERP_LINEAR_THRESHOLD,
};
