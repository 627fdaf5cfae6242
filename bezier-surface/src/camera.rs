//! Camera transforms.
//!
//! The camera is fixed at [`EYE`], looking at the origin; the patch itself rotates under it. All
//! matrices follow cgmath’s column-vector convention, so the full transform is
//! `projection * view * model`: model first, then view, then projection.

use cgmath::{perspective, Deg, Matrix4, Point3, Vector3};

use crate::state::ViewerState;

/// Vertical field of view, in degrees.
pub const FOVY_DEG: f32 = 45.;

// Clipping planes. The patch fits in a ~2 unit wide box around the origin and the eye is ~12 units
// away, so these leave a lot of room.
pub const Z_NEAR: f32 = 0.1;
pub const Z_FAR: f32 = 100.;

/// Position of the eye, in world space.
pub fn eye() -> Point3<f32> {
  Point3::new(7., 7., 7.)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
  aspect_ratio: f32,
  projection: Matrix4<f32>,
  view: Matrix4<f32>,
}

impl Camera {
  /// Camera for a framebuffer of `width × height` pixels.
  pub fn new(width: u32, height: u32) -> Self {
    let aspect_ratio = aspect_ratio(width, height).unwrap_or(1.);
    let view = Matrix4::look_at_rh(eye(), Point3::new(0., 0., 0.), Vector3::unit_y());

    Camera {
      aspect_ratio,
      projection: projection(aspect_ratio),
      view,
    }
  }

  /// Track a new framebuffer size.
  ///
  /// A degenerate size (minimized window) keeps the previous aspect ratio. Returns whether the
  /// projection changed.
  pub fn resize(&mut self, width: u32, height: u32) -> bool {
    match aspect_ratio(width, height) {
      Some(aspect_ratio) => {
        log::debug!("resized: {}×{}", width, height);
        self.aspect_ratio = aspect_ratio;
        self.projection = projection(aspect_ratio);
        true
      }

      None => {
        log::debug!("ignoring degenerate size {}×{}", width, height);
        false
      }
    }
  }

  pub fn aspect_ratio(&self) -> f32 {
    self.aspect_ratio
  }

  pub fn projection(&self) -> Matrix4<f32> {
    self.projection
  }

  pub fn view(&self) -> Matrix4<f32> {
    self.view
  }

  /// Model transform: pitch around X, then yaw around Y.
  pub fn model(state: &ViewerState) -> Matrix4<f32> {
    Matrix4::from_angle_y(Deg(state.yaw)) * Matrix4::from_angle_x(Deg(state.pitch))
  }

  /// Full object-to-clip transform for the given state.
  pub fn mvp(&self, state: &ViewerState) -> Matrix4<f32> {
    self.projection * self.view * Self::model(state)
  }
}

fn aspect_ratio(width: u32, height: u32) -> Option<f32> {
  if width == 0 || height == 0 {
    None
  } else {
    Some(width as f32 / height as f32)
  }
}

fn projection(aspect_ratio: f32) -> Matrix4<f32> {
  perspective(Deg(FOVY_DEG), aspect_ratio, Z_NEAR, Z_FAR)
}

#[cfg(test)]
mod tests {
  use super::*;
  use approx::assert_abs_diff_eq;
  use cgmath::{EuclideanSpace as _, Vector4};

  fn state(yaw: f32, pitch: f32) -> ViewerState {
    ViewerState {
      yaw,
      pitch,
      ..ViewerState::default()
    }
  }

  #[test]
  fn aspect_tracks_size() {
    let mut cam = Camera::new(800, 600);
    assert_abs_diff_eq!(cam.aspect_ratio(), 800. / 600.);

    assert!(cam.resize(1920, 1080));
    assert_abs_diff_eq!(cam.aspect_ratio(), 1920. / 1080.);

    let f = 1. / (FOVY_DEG.to_radians() * 0.5).tan();
    assert_abs_diff_eq!(cam.projection().y.y, f, epsilon = 1e-5);
    assert_abs_diff_eq!(cam.projection().x.x, f * 1080. / 1920., epsilon = 1e-5);
  }

  #[test]
  fn degenerate_resize_keeps_aspect() {
    let mut cam = Camera::new(800, 600);
    let before = cam;

    assert!(!cam.resize(800, 0));
    assert!(!cam.resize(0, 600));
    assert_eq!(cam, before);

    assert_eq!(Camera::new(0, 0).aspect_ratio(), 1.);
  }

  #[test]
  fn view_looks_at_origin() {
    let cam = Camera::new(800, 600);
    let origin = cam.view() * Vector4::new(0., 0., 0., 1.);
    let dist = eye().to_vec().x * 3f32.sqrt();

    assert_abs_diff_eq!(origin.x, 0., epsilon = 1e-5);
    assert_abs_diff_eq!(origin.y, 0., epsilon = 1e-5);
    assert_abs_diff_eq!(origin.z, -dist, epsilon = 1e-4);
  }

  #[test]
  fn model_applies_pitch_then_yaw() {
    let m = Camera::model(&state(90., 90.));
    let v = m * Vector4::new(0., 1., 0., 0.);

    // pitch sends +Y to +Z, yaw then sends +Z to +X
    assert_abs_diff_eq!(v, Vector4::new(1., 0., 0., 0.), epsilon = 1e-6);

    let yaw_only = Camera::model(&state(90., 0.)) * Vector4::new(1., 0., 0., 0.);
    assert_abs_diff_eq!(yaw_only, Vector4::new(0., 0., -1., 0.), epsilon = 1e-6);
  }

  #[test]
  fn model_is_periodic() {
    let a = Camera::model(&state(30., -15.));
    let b = Camera::model(&state(30. + 360., -15. - 720.));

    assert_abs_diff_eq!(a, b, epsilon = 1e-4);
  }

  #[test]
  fn mvp_composes_model_view_projection() {
    let cam = Camera::new(1024, 768);
    let st = state(12.5, -33.);
    let p = Vector4::new(-0.75, 0., -0.75, 1.);

    let expected = cam.projection() * (cam.view() * (Camera::model(&st) * p));
    assert_abs_diff_eq!(cam.mvp(&st) * p, expected, epsilon = 1e-5);
  }

  #[test]
  fn identity_model_at_rest() {
    assert_abs_diff_eq!(
      Camera::model(&ViewerState::default()),
      Matrix4::from_scale(1.),
      epsilon = 1e-6
    );
  }
}
