//! Viewer configuration.

use crate::{state::ViewerState, tessellation::DEFAULT_RESOLUTION};

/// Startup parameters of the viewer.
///
/// The defaults open an 800×600 window titled “Bezier Surface” showing a filled patch tessellated
/// at resolution 20 with its control points visible.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewerConfig {
  pub title: String,
  pub width: u32,
  pub height: u32,
  /// Number of quad cells along each parametric axis.
  pub resolution: u32,
  pub clear_color: [f32; 4],
  pub wireframe: bool,
  pub show_control_points: bool,
}

impl Default for ViewerConfig {
  fn default() -> Self {
    ViewerConfig {
      title: "Bezier Surface".to_owned(),
      width: 800,
      height: 600,
      resolution: DEFAULT_RESOLUTION,
      clear_color: [0.1, 0.1, 0.1, 1.],
      wireframe: false,
      show_control_points: true,
    }
  }
}

impl ViewerConfig {
  /// View state the viewer starts with.
  pub fn initial_state(&self) -> ViewerState {
    ViewerState {
      wireframe: self.wireframe,
      show_control_points: self.show_control_points,
      ..ViewerState::default()
    }
  }
}
