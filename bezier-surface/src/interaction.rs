//! Mapping from user input to [`ViewerState`] changes.
//!
//! Two kinds of input drive the viewer:
//!
//! - Held keys, sampled once per tick. Each tick a direction is held nudges the rotation by a
//!   fixed [`ROTATION_STEP_DEG`], independently of the frame duration.
//! - Discrete actions, delivered once per key press. Holding a key does not repeat them.

use crate::{state::ViewerState, InputAction};

/// Rotation applied per tick while a direction is held, in degrees.
pub const ROTATION_STEP_DEG: f32 = 0.1;

/// Directions held down during a tick.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct HeldKeys {
  pub left: bool,
  pub right: bool,
  pub up: bool,
  pub down: bool,
}

/// Advance the rotation by one tick.
///
/// Left / right drive the yaw (left increases it), up / down drive the pitch (up increases it).
/// Opposite directions held together cancel out.
pub fn tick(state: &mut ViewerState, held: HeldKeys) {
  if held.left {
    state.yaw += ROTATION_STEP_DEG;
  }

  if held.right {
    state.yaw -= ROTATION_STEP_DEG;
  }

  if held.up {
    state.pitch += ROTATION_STEP_DEG;
  }

  if held.down {
    state.pitch -= ROTATION_STEP_DEG;
  }
}

/// Apply a discrete action to the state.
///
/// Returns `true` if the action was a toggle; anything else is left to the caller.
pub fn handle_action(state: &mut ViewerState, action: &InputAction) -> bool {
  match *action {
    InputAction::ToggleWireframe => {
      state.toggle_wireframe();
      log::info!("wireframe {}", on_off(state.wireframe));
      true
    }

    InputAction::ToggleControlPoints => {
      state.toggle_control_points();
      log::info!("control points {}", on_off(state.show_control_points));
      true
    }

    _ => false,
  }
}

fn on_off(flag: bool) -> &'static str {
  if flag {
    "on"
  } else {
    "off"
  }
}
