use luminance_front::{context::GraphicsContext, framebuffer::Framebuffer, texture::Dim2, Backend};

use crate::{
  bezier::ControlPointGrid,
  camera::Camera,
  config::ViewerConfig,
  error::ViewerError,
  interaction::{self, HeldKeys},
  render::{Frame, Renderer},
  resources::GpuResources,
  state::ViewerState,
  tessellation::ParametricMesh,
  InputAction, LoopFeedback, PlatformServices,
};

/// The viewer: owns the control points, the view state and every GPU resource.
pub struct SurfaceViewer {
  grid: ControlPointGrid,
  state: ViewerState,
  camera: Camera,
  resources: GpuResources,
  renderer: Renderer,
}

impl SurfaceViewer {
  /// Tessellate the patch, upload it along with the control points and compile the shaders.
  pub fn bootstrap(
    config: &ViewerConfig,
    grid: ControlPointGrid,
    platform: &mut impl PlatformServices,
    context: &mut impl GraphicsContext<Backend = Backend>,
  ) -> Result<Self, ViewerError> {
    let mesh = ParametricMesh::new(config.resolution)?;

    let apex = grid.evaluate(0.5, 0.5);
    log::debug!("patch apex: ({}, {}, {})", apex.x, apex.y, apex.z);

    platform.enable_program_point_size();

    let resources = GpuResources::allocate(context, &mesh, &grid)?;
    let renderer = Renderer::new(context, config.clear_color)?;

    Ok(SurfaceViewer {
      grid,
      state: config.initial_state(),
      camera: Camera::new(config.width, config.height),
      resources,
      renderer,
    })
  }

  /// Handle a tick worth of input and render a frame.
  ///
  /// Discrete actions are applied first, then held keys advance the rotation by one tick. A frame
  /// that fails to render releases the GPU resources and is reported as an error.
  pub fn render_frame(
    mut self,
    back_buffer: Framebuffer<Dim2, (), ()>,
    held: HeldKeys,
    actions: impl Iterator<Item = InputAction>,
    context: &mut impl GraphicsContext<Backend = Backend>,
  ) -> Result<LoopFeedback<Self>, ViewerError> {
    for action in actions {
      match action {
        InputAction::Quit => {
          self.release();
          return Ok(LoopFeedback::Exit);
        }

        InputAction::Resized { width, height } => {
          self.camera.resize(width, height);
        }

        toggle => {
          interaction::handle_action(&mut self.state, &toggle);
        }
      }
    }

    interaction::tick(&mut self.state, held);

    let frame = Frame {
      mvp: self.camera.mvp(&self.state),
      grid: &self.grid,
      state: &self.state,
    };

    let rendered = self
      .renderer
      .render_frame(context, &back_buffer, &self.resources, frame);

    match rendered {
      Ok(()) => Ok(LoopFeedback::Continue(self)),

      Err(e) => {
        log::error!("dropped a frame: {}", e);
        self.release();
        Err(e)
      }
    }
  }

  /// Replace the control points.
  ///
  /// The patch buffers are left untouched; only the marker buffer is rewritten.
  pub fn set_control_points(&mut self, grid: ControlPointGrid) -> Result<(), ViewerError> {
    self.resources.upload_control_points(&grid)?;
    self.grid = grid;
    Ok(())
  }

  pub fn control_points(&self) -> &ControlPointGrid {
    &self.grid
  }

  /// Release the GPU resources.
  pub fn release(self) {
    self.resources.release();
  }
}
