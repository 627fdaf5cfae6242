//! Interactive bicubic Bézier surface viewer.
//!
//! This crate renders a single bicubic Bézier patch, defined by a 4×4 grid of control points, and
//! lets the user rotate it, switch between filled and wireframe rendering and show or hide the
//! control points. It does not depend on any platform-specific concept (windows, system events):
//! a platform crate creates the graphics context, turns its events into [`InputAction`]s and
//! [`HeldKeys`], and drives a [`SurfaceViewer`] once per frame.
//!
//! # Architecture
//!
//! - [`bezier`]: the patch itself and its host-side evaluation.
//! - [`tessellation`]: the parametric mesh covering `[0, 1]²`, built once.
//! - [`resources`]: GPU buffers for the patch and the control-point markers.
//! - [`render`]: the shader programs and the per-frame draw calls.
//! - [`interaction`] and [`state`]: input handling and the view state it mutates.
//! - [`camera`]: model, view and projection transforms.
//!
//! Positions on the patch are evaluated in the vertex shader from a uniform array of control
//! points. The mesh only carries parametric coordinates, so changing the control points never
//! requires rebuilding the patch buffers.
//!
//! # Error handling
//!
//! Every error in this crate is fatal to the viewer: there is no degraded rendering mode. Errors
//! are reported as [`ViewerError`] and it is up to the platform crate to report them and quit.

pub mod bezier;
pub mod camera;
pub mod config;
pub mod error;
pub mod interaction;
pub mod render;
pub mod resources;
pub mod state;
pub mod tessellation;
pub mod vertex;
mod viewer;

pub use crate::{
  bezier::ControlPointGrid, config::ViewerConfig, error::ViewerError, interaction::HeldKeys,
  state::ViewerState, tessellation::ParametricMesh, viewer::SurfaceViewer,
};

/// Platform-specific services the viewer relies on.
pub trait PlatformServices {
  /// Let vertex shaders set the size of the points they emit.
  ///
  /// Without it, control-point markers are rasterized with the default point size.
  fn enable_program_point_size(&mut self);
}

/// A type used to pass discrete “inputs” to the viewer.
///
/// Continuous inputs (keys held down) are passed separately as [`HeldKeys`].
#[derive(Clone, Debug, PartialEq)]
pub enum InputAction {
  /// Quit the application.
  Quit,

  /// Switch between filled and wireframe rendering of the patch.
  ToggleWireframe,

  /// Show or hide the control-point markers.
  ToggleControlPoints,

  /// Framebuffer size changed.
  Resized { width: u32, height: u32 },
}

/// What the platform should do after a frame.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum LoopFeedback<T> {
  Continue(T),
  Exit,
}
