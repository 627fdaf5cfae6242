use approx::assert_abs_diff_eq;
use bezier_surface::{
  bezier, camera::Camera, interaction, tessellation::DEFAULT_RESOLUTION, ControlPointGrid,
  HeldKeys, InputAction, ParametricMesh, ViewerConfig,
};
use cgmath::Vector3;

#[test]
fn default_patch_end_to_end() {
  let grid = ControlPointGrid::default();
  let mesh = ParametricMesh::new(DEFAULT_RESOLUTION).unwrap();

  assert_eq!(mesh.vertex_count(), 441);
  assert_eq!(mesh.indices().len(), 2400);

  // the first mesh vertex sits at (0, 0), which maps onto P[0][0]
  let [u, v] = mesh.uvs()[0];
  assert_eq!(bezier::evaluate(&grid, u, v), Vector3::new(-0.75, 0., -0.75));

  // the last one sits at (1, 1), which maps onto P[3][3]
  let [u, v] = mesh.uvs()[mesh.vertex_count() - 1];
  assert_eq!(bezier::evaluate(&grid, u, v), Vector3::new(0.75, 0., 0.75));
}

#[test]
fn every_sample_stays_within_control_hull_bounds() {
  // convex hull property: the patch never leaves the bounding box of its control points
  let grid = ControlPointGrid::default();
  let mesh = ParametricMesh::new(DEFAULT_RESOLUTION).unwrap();

  for &[u, v] in mesh.uvs() {
    let p = grid.evaluate(u, v);

    assert!(p.x >= -0.75 - 1e-6 && p.x <= 0.75 + 1e-6);
    assert!(p.y >= -1e-6 && p.y <= 1.5 + 1e-6);
    assert!(p.z >= -0.75 - 1e-6 && p.z <= 0.75 + 1e-6);
  }
}

#[test]
fn apex_regression() {
  let apex = ControlPointGrid::default().evaluate(0.5, 0.5);
  assert_abs_diff_eq!(apex, Vector3::new(0., 0.84375, 0.), epsilon = 1e-6);
}

#[test]
fn interaction_drives_the_transform() {
  let config = ViewerConfig::default();
  let camera = Camera::new(config.width, config.height);
  let mut state = config.initial_state();
  let rest = camera.mvp(&state);

  let held = HeldKeys {
    left: true,
    ..HeldKeys::default()
  };

  for _ in 0..900 {
    interaction::tick(&mut state, held);
  }

  // 900 ticks of 0.1° is a quarter turn
  assert_abs_diff_eq!(state.yaw, 90., epsilon = 1e-2);
  assert!(camera.mvp(&state) != rest);

  interaction::handle_action(&mut state, &InputAction::ToggleWireframe);
  interaction::handle_action(&mut state, &InputAction::ToggleWireframe);
  assert!(!state.wireframe);
}
