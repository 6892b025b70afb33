//! Camera and model transforms for the spinning cube.

use std::time::Duration;

use glam::{Mat4, Vec3};

/// Vertical field of view, in degrees.
pub const FOV_Y_DEGREES: f32 = 90.0;
pub const Z_NEAR: f32 = 0.1;
pub const Z_FAR: f32 = 100.0;

/// Camera sits 3 units back from the origin, looking down -Z.
pub const CAMERA_DISTANCE: f32 = 3.0;

/// Spin speed in degrees per millisecond (100°/s).
pub const SPIN_DEGREES_PER_MS: f32 = 0.1;

/// Projection × view for the fixed camera.
///
/// Right-handed, depth in `[0, 1]` as wgpu expects.
pub fn view_projection(aspect: f32) -> Mat4 {
    let view = Mat4::from_translation(Vec3::new(0.0, 0.0, -CAMERA_DISTANCE));
    let projection = Mat4::perspective_rh(FOV_Y_DEGREES.to_radians(), aspect, Z_NEAR, Z_FAR);
    projection * view
}

/// Model rotation about +Y after `elapsed` time.
pub fn spin(elapsed: Duration) -> Mat4 {
    let degrees = elapsed.as_secs_f32() * 1000.0 * SPIN_DEGREES_PER_MS;
    Mat4::from_rotation_y(degrees.to_radians())
}
