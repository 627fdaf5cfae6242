//! Per-frame view state shared by the interaction controller and the renderer.

/// Rotation and display toggles of the viewer.
///
/// Angles are in degrees and never wrapped: trigonometry takes care of periodicity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewerState {
  /// Rotation around the world Y axis, driven by left / right.
  pub yaw: f32,
  /// Rotation around the world X axis, driven by up / down.
  pub pitch: f32,
  /// Draw the patch as lines instead of filled triangles.
  pub wireframe: bool,
  /// Draw the control points as markers on top of the patch.
  pub show_control_points: bool,
}

impl Default for ViewerState {
  fn default() -> Self {
    ViewerState {
      yaw: 0.,
      pitch: 0.,
      wireframe: false,
      show_control_points: true,
    }
  }
}

impl ViewerState {
  pub fn toggle_wireframe(&mut self) {
    self.wireframe = !self.wireframe;
  }

  pub fn toggle_control_points(&mut self) {
    self.show_control_points = !self.show_control_points;
  }
}
