// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons.
//!
//! Offsets, velocities and opacities are `f32` values produced by spring and
//! easing curves; compare them with the `approx` assertion macros instead of
//! `assert_eq!`.

pub use approx::assert_abs_diff_eq;

/// Tolerance for offsets that should land exactly on a page boundary.
pub const OFFSET_EPSILON: f32 = 1e-3;
