//! Viewer errors.
//!
//! Everything here is fatal: the viewer has no degraded mode to fall back on. Backend errors are
//! boxed since callers only ever report them.

use crate::tessellation::MAX_RESOLUTION;
use std::{error::Error, fmt};

#[derive(Debug)]
pub enum ViewerError {
  /// The tessellation resolution must lie in `1..=MAX_RESOLUTION`.
  InvalidResolution(u32),

  /// A Bézier patch needs exactly 16 control points.
  InvalidControlPointCount(usize),

  /// A shader program failed to compile or link.
  CannotCreateProgram(&'static str, Box<dyn Error>),

  /// A GPU tessellation (vertex / index buffers) could not be allocated.
  CannotCreateTess(&'static str, Box<dyn Error>),

  /// The control-point buffer could not be mapped for writing.
  CannotMapControlPoints(Box<dyn Error>),

  /// The frame pipeline failed on the GPU side.
  CannotRenderFrame(Box<dyn Error>),
}

impl fmt::Display for ViewerError {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match *self {
      ViewerError::InvalidResolution(r) => {
        write!(
          f,
          "invalid tessellation resolution: {} (must be within 1..={})",
          r, MAX_RESOLUTION
        )
      }

      ViewerError::InvalidControlPointCount(n) => {
        write!(f, "a bicubic patch needs 16 control points, got {}", n)
      }

      ViewerError::CannotCreateProgram(name, ref e) => {
        write!(f, "cannot create the {} shader program: {}", name, e)
      }

      ViewerError::CannotCreateTess(name, ref e) => {
        write!(f, "cannot create the {} tessellation: {}", name, e)
      }

      ViewerError::CannotMapControlPoints(ref e) => {
        write!(f, "cannot map the control-point buffer: {}", e)
      }

      ViewerError::CannotRenderFrame(ref e) => write!(f, "cannot render a frame: {}", e),
    }
  }
}

impl Error for ViewerError {}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn display() {
    assert_eq!(
      ViewerError::InvalidResolution(0).to_string(),
      "invalid tessellation resolution: 0 (must be within 1..=2048)"
    );
    assert_eq!(
      ViewerError::InvalidControlPointCount(9).to_string(),
      "a bicubic patch needs 16 control points, got 9"
    );

    let e = ViewerError::CannotCreateTess("surface", "out of memory".into());
    assert_eq!(
      e.to_string(),
      "cannot create the surface tessellation: out of memory"
    );

    let e = ViewerError::CannotRenderFrame("framebuffer incomplete".into());
    assert_eq!(e.to_string(), "cannot render a frame: framebuffer incomplete");
  }
}
