//! Platform services implementation.

use bezier_surface::PlatformServices;

/// Desktop implementation of the [`PlatformServices`] API.
///
/// Must only be used once the OpenGL function pointers are loaded, which the GLFW surface does
/// when it is created.
#[derive(Debug, Default)]
pub struct DesktopPlatformServices {
  program_point_size: bool,
}

impl PlatformServices for DesktopPlatformServices {
  fn enable_program_point_size(&mut self) {
    if self.program_point_size {
      return;
    }

    // luminance does not expose this capability; the GL 3.3 core default ignores gl_PointSize
    unsafe { gl::Enable(gl::PROGRAM_POINT_SIZE) };

    self.program_point_size = true;
    log::debug!("program point size enabled");
  }
}
