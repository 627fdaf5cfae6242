//! Desktop runner of the Bézier surface viewer.
//!
//! Controls:
//!
//! - Hold the arrow keys to rotate the patch.
//! - Press <W> to switch between filled and wireframe rendering.
//! - Press <P> to show or hide the control points.
//! - Press <escape> to quit or close the window.

mod platform;

use bezier_surface::{
  ControlPointGrid, HeldKeys, InputAction, LoopFeedback, SurfaceViewer, ViewerConfig, ViewerError,
};
use glfw::{Action, Context as _, Key, Window, WindowEvent};
use luminance_glfw::GlfwSurface;
use luminance_windowing::{WindowDim, WindowOpt};
use platform::DesktopPlatformServices;
use std::{error::Error, fmt, iter, process};
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "bezier-surface-desktop")]
pub struct CLIOpts {
  #[structopt(long)]
  /// Width of the window, in pixels.
  width: Option<u32>,

  #[structopt(long)]
  /// Height of the window, in pixels.
  height: Option<u32>,

  #[structopt(short, long)]
  /// Number of cells along each parametric axis of the patch.
  resolution: Option<u32>,

  #[structopt(long)]
  /// Start in wireframe mode.
  wireframe: bool,

  #[structopt(long)]
  /// Start with the control points hidden.
  hide_control_points: bool,
}

impl CLIOpts {
  fn into_config(self) -> ViewerConfig {
    let default = ViewerConfig::default();

    ViewerConfig {
      width: self.width.unwrap_or(default.width),
      height: self.height.unwrap_or(default.height),
      resolution: self.resolution.unwrap_or(default.resolution),
      wireframe: self.wireframe,
      show_control_points: !self.hide_control_points,
      ..default
    }
  }
}

// Everything that can stop the application. All of them are fatal.
#[derive(Debug)]
enum AppError {
  CannotCreateSurface(Box<dyn Error>),
  CannotGrabBackBuffer(Box<dyn Error>),
  Viewer(ViewerError),
}

impl fmt::Display for AppError {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match *self {
      AppError::CannotCreateSurface(ref e) => write!(f, "cannot create rendering surface: {}", e),
      AppError::CannotGrabBackBuffer(ref e) => write!(f, "cannot grab the back buffer: {}", e),
      AppError::Viewer(ref e) => write!(f, "{}", e),
    }
  }
}

impl Error for AppError {}

impl From<ViewerError> for AppError {
  fn from(e: ViewerError) -> Self {
    AppError::Viewer(e)
  }
}

fn run(config: ViewerConfig) -> Result<(), AppError> {
  log::info!(
    "opening {}×{} window, patch resolution {}",
    config.width,
    config.height,
    config.resolution
  );

  let dim = WindowDim::Windowed {
    width: config.width,
    height: config.height,
  };
  let surface = GlfwSurface::new_gl33(&config.title, WindowOpt::default().set_dim(dim))
    .map_err(|e| AppError::CannotCreateSurface(Box::new(e)))?;
  let mut context = surface.context;
  let events = surface.events_rx;
  let mut platform = DesktopPlatformServices::default();

  let viewer = SurfaceViewer::bootstrap(
    &config,
    ControlPointGrid::default(),
    &mut platform,
    &mut context,
  )?;

  // render a first frame with the actual framebuffer size, which may differ from the requested
  // window size (high DPI displays)
  let (fb_w, fb_h) = context.window.get_framebuffer_size();
  let back_buffer = context
    .back_buffer()
    .map_err(|e| AppError::CannotGrabBackBuffer(Box::new(e)))?;
  let feedback = viewer.render_frame(
    back_buffer,
    HeldKeys::default(),
    iter::once(InputAction::Resized {
      width: fb_w as _,
      height: fb_h as _,
    }),
    &mut context,
  )?;
  let mut viewer = match feedback {
    LoopFeedback::Exit => return Ok(()),
    LoopFeedback::Continue(viewer) => viewer,
  };
  context.window.swap_buffers();

  'app: loop {
    // handle events
    context.window.glfw.poll_events();
    let actions = glfw::flush_messages(&events).flat_map(|(_, event)| adapt_events(event));
    let held = held_keys(&context.window);

    let back_buffer = context
      .back_buffer()
      .map_err(|e| AppError::CannotGrabBackBuffer(Box::new(e)))?;

    match viewer.render_frame(back_buffer, held, actions, &mut context)? {
      LoopFeedback::Continue(stepped) => {
        viewer = stepped;
        context.window.swap_buffers();
      }

      LoopFeedback::Exit => break 'app,
    }
  }

  Ok(())
}

// Only presses toggle; repeats are ignored so that holding a key toggles once.
fn adapt_events(event: WindowEvent) -> Option<InputAction> {
  match event {
    WindowEvent::Close | WindowEvent::Key(Key::Escape, _, Action::Release, _) => {
      Some(InputAction::Quit)
    }

    WindowEvent::Key(Key::W, _, Action::Press, _) => Some(InputAction::ToggleWireframe),

    WindowEvent::Key(Key::P, _, Action::Press, _) => Some(InputAction::ToggleControlPoints),

    WindowEvent::FramebufferSize(width, height) => Some(InputAction::Resized {
      width: width.max(0) as _,
      height: height.max(0) as _,
    }),

    _ => None,
  }
}

fn held_keys(window: &Window) -> HeldKeys {
  let held = |key| window.get_key(key) == Action::Press;

  HeldKeys {
    left: held(Key::Left),
    right: held(Key::Right),
    up: held(Key::Up),
    down: held(Key::Down),
  }
}

fn main() {
  env_logger::builder()
    .filter_level(log::LevelFilter::Info)
    .parse_default_env()
    .init();
  let cli_opts = CLIOpts::from_args();

  if let Err(e) = run(cli_opts.into_config()) {
    log::error!("{}", e);
    process::exit(1);
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use glfw::Modifiers;

  fn key(key: Key, action: Action) -> WindowEvent {
    WindowEvent::Key(key, 0, action, Modifiers::empty())
  }

  #[test]
  fn toggles_on_press_only() {
    assert_eq!(
      adapt_events(key(Key::W, Action::Press)),
      Some(InputAction::ToggleWireframe)
    );
    assert_eq!(
      adapt_events(key(Key::P, Action::Press)),
      Some(InputAction::ToggleControlPoints)
    );

    assert_eq!(adapt_events(key(Key::W, Action::Repeat)), None);
    assert_eq!(adapt_events(key(Key::P, Action::Release)), None);
  }

  #[test]
  fn quit_and_resize() {
    assert_eq!(adapt_events(WindowEvent::Close), Some(InputAction::Quit));
    assert_eq!(
      adapt_events(key(Key::Escape, Action::Release)),
      Some(InputAction::Quit)
    );
    assert_eq!(
      adapt_events(WindowEvent::FramebufferSize(1280, 720)),
      Some(InputAction::Resized {
        width: 1280,
        height: 720
      })
    );
  }

  #[test]
  fn unknown_keys_are_ignored() {
    assert_eq!(adapt_events(key(Key::Q, Action::Press)), None);
    assert_eq!(adapt_events(key(Key::Left, Action::Press)), None);
  }

  #[test]
  fn failed_frames_are_fatal() {
    let e = AppError::from(ViewerError::CannotRenderFrame("incomplete framebuffer".into()));

    assert!(matches!(e, AppError::Viewer(ViewerError::CannotRenderFrame(_))));
    assert_eq!(e.to_string(), "cannot render a frame: incomplete framebuffer");
  }

  #[test]
  fn cli_defaults() {
    let config = CLIOpts::from_iter(&["bezier-surface-desktop"]).into_config();
    assert_eq!(config, ViewerConfig::default());
  }

  #[test]
  fn cli_overrides() {
    let config = CLIOpts::from_iter(&[
      "bezier-surface-desktop",
      "--width",
      "1024",
      "-r",
      "8",
      "--wireframe",
      "--hide-control-points",
    ])
    .into_config();

    assert_eq!([config.width, config.height], [1024, 600]);
    assert_eq!(config.resolution, 8);
    assert!(config.wireframe);
    assert!(!config.show_control_points);
  }
}
