//! Frame rendering.
//!
//! A frame is a single pipeline with up to two shading passes sharing the same `mvp`:
//!
//! 1. The surface patch. Its vertex shader evaluates the Bézier patch from the `controlPoints`
//!    uniform array, so the patch buffers never change.
//! 2. The control-point markers, if visible: plain points in a solid color.

use cgmath::Matrix4;
use luminance::{shader::types::Arr, UniformInterface};
use luminance_front::{
  context::GraphicsContext,
  framebuffer::Framebuffer,
  pipeline::PipelineState,
  render_state::RenderState,
  shader::{
    types::{Mat44, Vec3},
    Program, Uniform,
  },
  texture::Dim2,
  Backend,
};

use crate::{
  bezier::{ControlPointGrid, CONTROL_POINT_COUNT},
  error::ViewerError,
  resources::GpuResources,
  state::ViewerState,
  vertex::Semantics,
};

const SURFACE_VS: &str = include_str!("shaders/surface-vs.glsl");
const SURFACE_FS: &str = include_str!("shaders/surface-fs.glsl");
const CONTROL_POINT_VS: &str = include_str!("shaders/control-point-vs.glsl");
const CONTROL_POINT_FS: &str = include_str!("shaders/control-point-fs.glsl");

#[derive(Debug, UniformInterface)]
struct SurfaceShaderInterface {
  mvp: Uniform<Mat44<f32>>,
  // uploaded as a whole in a single call
  #[uniform(name = "controlPoints")]
  control_points: Uniform<Arr<Vec3<f32>, CONTROL_POINT_COUNT>>,
}

#[derive(Debug, UniformInterface)]
struct ControlPointShaderInterface {
  mvp: Uniform<Mat44<f32>>,
}

/// Everything a frame needs besides GPU resources.
#[derive(Clone, Copy, Debug)]
pub struct Frame<'a> {
  pub mvp: Matrix4<f32>,
  pub grid: &'a ControlPointGrid,
  pub state: &'a ViewerState,
}

pub struct Renderer {
  surface_program: Program<Semantics, (), SurfaceShaderInterface>,
  control_point_program: Program<Semantics, (), ControlPointShaderInterface>,
  pipeline_state: PipelineState,
}

impl Renderer {
  /// Compile both shader programs.
  pub fn new(
    context: &mut impl GraphicsContext<Backend = Backend>,
    clear_color: [f32; 4],
  ) -> Result<Self, ViewerError> {
    let surface_program = context
      .new_shader_program::<Semantics, (), SurfaceShaderInterface>()
      .from_strings(SURFACE_VS, None, None, SURFACE_FS)
      .map_err(|e| ViewerError::CannotCreateProgram("surface", Box::new(e)))?
      .ignore_warnings();

    let control_point_program = context
      .new_shader_program::<Semantics, (), ControlPointShaderInterface>()
      .from_strings(CONTROL_POINT_VS, None, None, CONTROL_POINT_FS)
      .map_err(|e| ViewerError::CannotCreateProgram("control point", Box::new(e)))?
      .ignore_warnings();

    let pipeline_state = PipelineState::default().set_clear_color(clear_color);

    Ok(Renderer {
      surface_program,
      control_point_program,
      pipeline_state,
    })
  }

  /// Clear the back buffer and draw a frame into it.
  pub fn render_frame(
    &mut self,
    context: &mut impl GraphicsContext<Backend = Backend>,
    back_buffer: &Framebuffer<Dim2, (), ()>,
    resources: &GpuResources,
    frame: Frame<'_>,
  ) -> Result<(), ViewerError> {
    let surface_program = &mut self.surface_program;
    let control_point_program = &mut self.control_point_program;
    let patch = resources.patch(frame.state.wireframe);
    let control_points = resources.control_points();
    let show_control_points = frame.state.show_control_points;
    let mvp = frame.mvp;
    let control_point_uniforms = uniform_control_points(frame.grid);
    let rdr_st = RenderState::default();

    context
      .new_pipeline_gate()
      .pipeline(back_buffer, &self.pipeline_state, |_, mut shd_gate| {
        shd_gate.shade(surface_program, |mut iface, uni, mut rdr_gate| {
          iface.set(&uni.mvp, Mat44::new(mvp));
          iface.set(&uni.control_points, &control_point_uniforms);

          rdr_gate.render(&rdr_st, |mut tess_gate| tess_gate.render(patch))
        })?;

        if show_control_points {
          shd_gate.shade(control_point_program, |mut iface, uni, mut rdr_gate| {
            iface.set(&uni.mvp, Mat44::new(mvp));

            rdr_gate.render(&rdr_st, |mut tess_gate| tess_gate.render(control_points))
          })
        } else {
          Ok(())
        }
      })
      .assume()
      .into_result()
      .map_err(|e| ViewerError::CannotRenderFrame(Box::new(e)))
  }
}

// Control points as the shader expects them, row-major.
fn uniform_control_points(grid: &ControlPointGrid) -> [Vec3<f32>; CONTROL_POINT_COUNT] {
  let points = *grid.points();
  points.map(|p| Vec3::new(p.x, p.y, p.z))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::bezier::PATCH_ORDER;
  use cgmath::Vector3;

  #[test]
  fn control_point_uniforms_are_row_major() {
    let points: Vec<_> = (0..CONTROL_POINT_COUNT)
      .map(|k| Vector3::new(k as f32, -(k as f32), 0.5 * k as f32))
      .collect();
    let grid = ControlPointGrid::from_points(&points).unwrap();
    let uniforms = uniform_control_points(&grid);

    // the surface shader reads controlPoints[i * 4 + j]
    assert_eq!(uniforms[6], Vec3::new(6., -6., 3.));

    let p = grid.get(1, 2);
    assert_eq!(uniforms[6], Vec3::new(p.x, p.y, p.z));

    for i in 0..PATCH_ORDER {
      for j in 0..PATCH_ORDER {
        let p = grid.get(i, j);
        assert_eq!(uniforms[i * PATCH_ORDER + j], Vec3::new(p.x, p.y, p.z));
      }
    }
  }
}
