//! Bicubic Bézier patches.
//!
//! A patch is defined by a 4×4 grid of control points. The surface point at `(u, v)` is the
//! tensor product of two cubic Bernstein bases:
//!
//! ```text
//! S(u, v) = Σᵢ Σⱼ Bᵢ(u) · Bⱼ(v) · P[i][j]     i, j ∈ [0, 3]
//! ```
//!
//! The same formula runs in the surface vertex shader; the host version here is used for
//! diagnostics and anything that needs positions on the CPU.

use cgmath::Vector3;
use std::fmt;

use crate::error::ViewerError;

/// Number of control points along each parametric direction.
pub const PATCH_ORDER: usize = 4;

/// Total number of control points in a patch.
pub const CONTROL_POINT_COUNT: usize = PATCH_ORDER * PATCH_ORDER;

/// Binomial coefficients of the cubic Bernstein basis.
const BINOMIALS: [f32; PATCH_ORDER] = [1., 3., 3., 1.];

/// Cubic Bernstein basis polynomial `B_k(t)`.
///
/// `k` must lie in `[0, 3]`. `t` is not clamped: values outside `[0, 1]` extrapolate the
/// polynomial.
pub fn bernstein(k: usize, t: f32) -> f32 {
  let s = 1. - t;
  BINOMIALS[k] * t.powi(k as i32) * s.powi((3 - k) as i32)
}

/// All four cubic Bernstein weights at `t`.
pub fn bernstein_weights(t: f32) -> [f32; PATCH_ORDER] {
  [
    bernstein(0, t),
    bernstein(1, t),
    bernstein(2, t),
    bernstein(3, t),
  ]
}

/// A 4×4 grid of control points, stored row-major.
///
/// `(i, j)` lives at `i * 4 + j`; `i` runs along `u` and `j` along `v`.
#[derive(Clone, Copy, PartialEq)]
pub struct ControlPointGrid {
  points: [Vector3<f32>; CONTROL_POINT_COUNT],
}

impl ControlPointGrid {
  /// Build a grid from row-major points.
  pub fn new(points: [Vector3<f32>; CONTROL_POINT_COUNT]) -> Self {
    Self { points }
  }

  /// Build a grid from any row-major slice; it must hold exactly 16 points.
  pub fn from_points(points: &[Vector3<f32>]) -> Result<Self, ViewerError> {
    if points.len() != CONTROL_POINT_COUNT {
      return Err(ViewerError::InvalidControlPointCount(points.len()));
    }

    let mut grid = [Vector3::new(0., 0., 0.); CONTROL_POINT_COUNT];
    grid.copy_from_slice(points);

    Ok(Self::new(grid))
  }

  /// Control point `P[i][j]`.
  ///
  /// # Panics
  ///
  /// Panics if `i` or `j` is not in `[0, 3]`.
  pub fn get(&self, i: usize, j: usize) -> Vector3<f32> {
    assert!(
      i < PATCH_ORDER && j < PATCH_ORDER,
      "control point ({}, {}) out of the 4×4 grid",
      i,
      j
    );
    self.points[i * PATCH_ORDER + j]
  }

  /// All control points, row-major.
  pub fn points(&self) -> &[Vector3<f32>; CONTROL_POINT_COUNT] {
    &self.points
  }

  /// Evaluate the surface at `(u, v)`.
  pub fn evaluate(&self, u: f32, v: f32) -> Vector3<f32> {
    let bu = bernstein_weights(u);
    let bv = bernstein_weights(v);
    let mut acc = Vector3::new(0., 0., 0.);

    for i in 0..PATCH_ORDER {
      for j in 0..PATCH_ORDER {
        acc += self.points[i * PATCH_ORDER + j] * (bu[i] * bv[j]);
      }
    }

    acc
  }
}

impl Default for ControlPointGrid {
  /// A dome: a flat 1.5×1.5 square centered on the origin in the XZ plane, with its four interior
  /// control points raised to `y = 1.5`.
  fn default() -> Self {
    let mut points = [Vector3::new(0., 0., 0.); CONTROL_POINT_COUNT];

    for i in 0..PATCH_ORDER {
      for j in 0..PATCH_ORDER {
        let x = (i as f32 - 1.5) * 0.5;
        let z = (j as f32 - 1.5) * 0.5;
        let interior = (i == 1 || i == 2) && (j == 1 || j == 2);
        let y = if interior { 1.5 } else { 0. };

        points[i * PATCH_ORDER + j] = Vector3::new(x, y, z);
      }
    }

    Self::new(points)
  }
}

impl fmt::Debug for ControlPointGrid {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    let rows: Vec<_> = self
      .points
      .chunks(PATCH_ORDER)
      .map(|row| row.iter().map(|p| [p.x, p.y, p.z]).collect::<Vec<_>>())
      .collect();
    f.debug_struct("ControlPointGrid").field("rows", &rows).finish()
  }
}

/// Evaluate a bicubic Bézier surface at `(u, v)`.
pub fn evaluate(grid: &ControlPointGrid, u: f32, v: f32) -> Vector3<f32> {
  grid.evaluate(u, v)
}
