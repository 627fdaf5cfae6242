//! Parametric tessellation of the unit square.
//!
//! The mesh only carries `(u, v)` samples; positions are derived from the control points at draw
//! time, so the mesh never has to be rebuilt when the control points change.

use crate::error::ViewerError;

/// Default number of quad cells along each parametric axis.
pub const DEFAULT_RESOLUTION: u32 = 20;

/// Largest accepted resolution.
///
/// Keeps the host-side buffers in the tens of megabytes and every vertex addressable by a
/// [`MeshIndex`].
pub const MAX_RESOLUTION: u32 = 2048;

/// Type of the indices used to address mesh vertices.
pub type MeshIndex = u32;

/// A uniform triangulation of `[0, 1]²`.
///
/// With a resolution `R`, the mesh holds `(R + 1)²` samples and `2R²` triangles.
#[derive(Clone, Debug, PartialEq)]
pub struct ParametricMesh {
  resolution: u32,
  uvs: Vec<[f32; 2]>,
  indices: Vec<MeshIndex>,
}

impl ParametricMesh {
  /// Tessellate the unit square with `resolution` cells per axis.
  ///
  /// Samples are ordered row-major by `i` then `j`, with `u = i / R` and `v = j / R`. Each cell
  /// `(i, j)` emits the triangles `(idx, idx + 1, idx + R + 1)` and
  /// `(idx + 1, idx + R + 2, idx + R + 1)`, where `idx = i · (R + 1) + j`.
  ///
  /// Fails with [`ViewerError::InvalidResolution`] unless `1 <= resolution <= MAX_RESOLUTION`.
  pub fn new(resolution: u32) -> Result<Self, ViewerError> {
    if resolution == 0 || resolution > MAX_RESOLUTION {
      return Err(ViewerError::InvalidResolution(resolution));
    }

    let r = resolution;
    let row = r + 1;
    let cells = r as usize * r as usize;
    let mut uvs = Vec::with_capacity(row as usize * row as usize);
    let mut indices = Vec::with_capacity(6 * cells);

    for i in 0..=r {
      for j in 0..=r {
        uvs.push([i as f32 / r as f32, j as f32 / r as f32]);

        if i < r && j < r {
          let idx = i * row + j;

          indices.extend_from_slice(&[idx, idx + 1, idx + row]);
          indices.extend_from_slice(&[idx + 1, idx + row + 1, idx + row]);
        }
      }
    }

    Ok(Self {
      resolution,
      uvs,
      indices,
    })
  }

  pub fn resolution(&self) -> u32 {
    self.resolution
  }

  /// Parametric coordinates of every vertex.
  pub fn uvs(&self) -> &[[f32; 2]] {
    &self.uvs
  }

  /// Triangle list, three indices per triangle.
  pub fn indices(&self) -> &[MeshIndex] {
    &self.indices
  }

  pub fn vertex_count(&self) -> usize {
    self.uvs.len()
  }

  pub fn triangle_count(&self) -> usize {
    self.indices.len() / 3
  }

  /// Line list outlining every triangle edge, two indices per segment.
  ///
  /// Edges shared by two triangles appear twice, as with a line polygon mode.
  pub fn wireframe_indices(&self) -> Vec<MeshIndex> {
    self
      .indices
      .chunks(3)
      .flat_map(|tri| [tri[0], tri[1], tri[1], tri[2], tri[2], tri[0]])
      .collect()
  }
}
