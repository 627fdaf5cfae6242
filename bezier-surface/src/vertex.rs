//! Vertex semantics and vertex types fed to the shaders.

use luminance::{Semantics, Vertex};

use crate::{bezier::ControlPointGrid, tessellation::ParametricMesh};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Semantics)]
pub enum Semantics {
  // parametric coordinates of the surface patch, uv in the surface vertex shader
  #[sem(name = "uv", repr = "[f32; 2]", wrapper = "VertexUv")]
  Uv,
  // world-space position of a control point marker
  #[sem(name = "position", repr = "[f32; 3]", wrapper = "VertexPosition")]
  Position,
}

/// Vertex of the surface patch. It only carries parametric coordinates; its position is evaluated
/// in the vertex shader.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Vertex)]
#[vertex(sem = "Semantics")]
pub struct PatchVertex {
  pub uv: VertexUv,
}

/// Vertex of a control-point marker.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Vertex)]
#[vertex(sem = "Semantics")]
pub struct ControlPointVertex {
  pub position: VertexPosition,
}

pub fn patch_vertices(mesh: &ParametricMesh) -> Vec<PatchVertex> {
  mesh
    .uvs()
    .iter()
    .map(|&uv| PatchVertex::new(VertexUv::new(uv)))
    .collect()
}

pub fn control_point_vertices(grid: &ControlPointGrid) -> Vec<ControlPointVertex> {
  grid
    .points()
    .iter()
    .map(|p| ControlPointVertex::new(VertexPosition::new([p.x, p.y, p.z])))
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::bezier::CONTROL_POINT_COUNT;

  #[test]
  fn patch_vertices_follow_mesh() {
    let mesh = ParametricMesh::new(2).unwrap();
    let vertices = patch_vertices(&mesh);

    assert_eq!(vertices.len(), 9);
    assert_eq!(vertices[0], PatchVertex::new(VertexUv::new([0., 0.])));
    assert_eq!(vertices[5], PatchVertex::new(VertexUv::new([0.5, 1.])));
  }

  #[test]
  fn control_point_vertices_are_row_major() {
    let grid = ControlPointGrid::default();
    let vertices = control_point_vertices(&grid);

    assert_eq!(vertices.len(), CONTROL_POINT_COUNT);
    assert_eq!(
      vertices[0],
      ControlPointVertex::new(VertexPosition::new([-0.75, 0., -0.75]))
    );
    assert_eq!(
      vertices[5],
      ControlPointVertex::new(VertexPosition::new([-0.25, 1.5, -0.25]))
    );
  }
}
