//! GPU-side geometry.
//!
//! Two bundles live on the GPU:
//!
//! - The surface patch: the parametric vertices plus two index sets over them, one for filled
//!   triangles and one for the wireframe outline. Uploaded once.
//! - The control-point markers: one vertex per control point, drawn as points. This buffer is
//!   rewritten in place whenever the control points change.
//!
//! Every handle is released when [`GpuResources`] is dropped, whatever the exit path.

use luminance_front::{
  context::GraphicsContext,
  tess::{Mode, Tess},
  Backend,
};

use crate::{
  bezier::ControlPointGrid,
  error::ViewerError,
  tessellation::{MeshIndex, ParametricMesh},
  vertex::{control_point_vertices, patch_vertices, ControlPointVertex, PatchVertex},
};

pub type PatchTess = Tess<PatchVertex, MeshIndex>;
pub type ControlPointTess = Tess<ControlPointVertex>;

pub struct GpuResources {
  patch_fill: PatchTess,
  patch_wire: PatchTess,
  control_points: ControlPointTess,
}

impl GpuResources {
  /// Allocate and upload both bundles.
  pub fn allocate(
    context: &mut impl GraphicsContext<Backend = Backend>,
    mesh: &ParametricMesh,
    grid: &ControlPointGrid,
  ) -> Result<Self, ViewerError> {
    let (patch_fill, patch_wire) = upload_patch(context, mesh)?;

    let control_points = context
      .new_tess()
      .set_vertices(control_point_vertices(grid))
      .set_mode(Mode::Point)
      .build()
      .map_err(|e| ViewerError::CannotCreateTess("control points", Box::new(e)))?;

    log::info!(
      "uploaded patch at resolution {}: {} vertices, {} triangles; {} control points",
      mesh.resolution(),
      mesh.vertex_count(),
      mesh.triangle_count(),
      grid.points().len()
    );

    Ok(GpuResources {
      patch_fill,
      patch_wire,
      control_points,
    })
  }

  /// Overwrite the control-point markers in place.
  pub fn upload_control_points(&mut self, grid: &ControlPointGrid) -> Result<(), ViewerError> {
    let mut vertices = self
      .control_points
      .vertices_mut()
      .map_err(|e| ViewerError::CannotMapControlPoints(Box::new(e)))?;

    vertices.copy_from_slice(&control_point_vertices(grid));

    log::debug!("re-uploaded control points");
    Ok(())
  }

  /// Patch geometry to draw, outlined or filled.
  pub fn patch(&self, wireframe: bool) -> &PatchTess {
    if wireframe {
      &self.patch_wire
    } else {
      &self.patch_fill
    }
  }

  /// Control-point markers to draw.
  pub fn control_points(&self) -> &ControlPointTess {
    &self.control_points
  }

  /// Release every GPU handle now.
  pub fn release(self) {
    log::debug!("releasing GPU resources");
  }
}

// Upload the parametric vertices once per index set: filled triangles and their outline.
fn upload_patch(
  context: &mut impl GraphicsContext<Backend = Backend>,
  mesh: &ParametricMesh,
) -> Result<(PatchTess, PatchTess), ViewerError> {
  let vertices = patch_vertices(mesh);

  let fill = context
    .new_tess()
    .set_vertices(&vertices[..])
    .set_indices(mesh.indices())
    .set_mode(Mode::Triangle)
    .build()
    .map_err(|e| ViewerError::CannotCreateTess("surface patch", Box::new(e)))?;

  let wire = context
    .new_tess()
    .set_vertices(vertices)
    .set_indices(mesh.wireframe_indices())
    .set_mode(Mode::Line)
    .build()
    .map_err(|e| ViewerError::CannotCreateTess("wireframe patch", Box::new(e)))?;

  Ok((fill, wire))
}
