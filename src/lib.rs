//! # jerk_motion
//!
//! The numerical foundation of a jerk-limited trajectory generator in Rust.
//!
//! This library provides the following modules:
//! - `integrator` for the exact closed-form kinematic state within a
//!   constant-jerk segment.
//! - `dof_vector` for per-axis storage that is either stack-resident with a
//!   compile-time axis count or heap-resident with a runtime axis count.
//! - `nalgebra_vector` (feature `nalgebra`) for the same storage duality on
//!   top of nalgebra's fixed and dynamic vector types.
//! - `format` for rendering axis values as a diagnostic string.
//!
//! All operations are pure and stateless; profile synthesis, limit checking
//! and multi-axis synchronization are the caller's concern.

pub mod dof_vector;
pub mod format;
pub mod integrator;
#[cfg(feature = "nalgebra")]
pub mod nalgebra_vector;

// Re-export main items for convenience:
pub use dof_vector::*;
pub use format::*;
pub use integrator::*;
