//! Camera poses and view-matrix derivation
//!
//! Two pose variants share one capability: produce a view matrix from the
//! current position and orientation. Orientation is either a stored front
//! vector (free-look) or a pitch/yaw angle pair (Euler). Both feed the same
//! look-at construction with `target = position + front`.

use crate::config::CameraConfig;
use crate::foundation::math::{utils, Mat4, Mat4Ext, Vec3};

/// Camera orientation state
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraPose {
    /// Orientation stored directly as a front direction vector
    ///
    /// The vector is a viewing direction, not a look-at target point; the
    /// target passed to the look-at construction is `position + front`.
    FreeLook {
        /// Normalized viewing direction
        front: Vec3,
    },

    /// Orientation stored as Euler angles, in degrees
    ///
    /// Angles are unclamped: pitch may pass ±90° and yaw grows without
    /// wraparound. The front vector is recomputed from the angles on demand.
    Euler {
        /// Rotation about the camera's right axis, degrees
        pitch_deg: f32,
        /// Rotation about the world up axis, degrees; −90 points along −Z
        yaw_deg: f32,
    },
}

impl CameraPose {
    /// Current front direction, normalized
    ///
    /// For Euler poses this is the spherical-to-Cartesian conversion
    /// `(cos(pitch)·cos(yaw), sin(pitch), cos(pitch)·sin(yaw))`.
    pub fn front(&self) -> Vec3 {
        match *self {
            Self::FreeLook { front } => front.normalize(),
            Self::Euler { pitch_deg, yaw_deg } => {
                let pitch = utils::deg_to_rad(pitch_deg);
                let yaw = utils::deg_to_rad(yaw_deg);
                Vec3::new(
                    pitch.cos() * yaw.cos(),
                    pitch.sin(),
                    pitch.cos() * yaw.sin(),
                )
                .normalize()
            }
        }
    }
}

/// A camera in world space
///
/// Mutated by discrete move/turn commands once per input poll; the view
/// matrix is recomputed on demand, not cached.
#[derive(Debug, Clone)]
pub struct Camera {
    position: Vec3,
    world_up: Vec3,
    pose: CameraPose,
    config: CameraConfig,
}

impl Camera {
    /// Create a camera at `position` with the given orientation
    pub fn new(position: Vec3, world_up: Vec3, pose: CameraPose) -> Self {
        Self {
            position,
            world_up,
            pose,
            config: CameraConfig::default(),
        }
    }

    /// Create an Euler camera with the conventional starting orientation
    ///
    /// Pitch 0, yaw -90 degrees, so the default front points along -Z.
    pub fn euler(position: Vec3, world_up: Vec3) -> Self {
        Self::new(
            position,
            world_up,
            CameraPose::Euler {
                pitch_deg: 0.0,
                yaw_deg: -90.0,
            },
        )
    }

    /// Replace the stepping configuration
    pub fn with_config(mut self, config: CameraConfig) -> Self {
        self.config = config;
        self
    }

    /// Current eye position, used for lighting uniforms
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Current front direction
    pub fn front(&self) -> Vec3 {
        self.pose.front()
    }

    /// Derive the view matrix from the current pose
    ///
    /// Eye is the position, target is `position + front`, up is the world
    /// up. Both pose variants share this look-at construction.
    pub fn view_matrix(&self) -> Mat4 {
        let front = self.pose.front();
        Mat4::look_at(self.position, self.position + front, self.world_up)
    }

    fn right(&self) -> Vec3 {
        self.pose.front().cross(&self.world_up).normalize()
    }

    /// Move one step along the front direction
    pub fn move_front(&mut self) {
        self.position += self.pose.front() * self.config.move_step;
    }

    /// Move one step against the front direction
    pub fn move_back(&mut self) {
        self.position -= self.pose.front() * self.config.move_step;
    }

    /// Strafe one step along the right vector (front × up, normalized)
    pub fn strafe_right(&mut self) {
        self.position += self.right() * self.config.move_step;
    }

    /// Strafe one step against the right vector
    pub fn strafe_left(&mut self) {
        self.position -= self.right() * self.config.move_step;
    }

    /// Tilt up by one turn step (Euler poses only; no-op for free-look)
    pub fn pitch_up(&mut self) {
        if let CameraPose::Euler { pitch_deg, .. } = &mut self.pose {
            *pitch_deg += self.config.turn_step_deg;
        }
    }

    /// Tilt down by one turn step (Euler poses only)
    pub fn pitch_down(&mut self) {
        if let CameraPose::Euler { pitch_deg, .. } = &mut self.pose {
            *pitch_deg -= self.config.turn_step_deg;
        }
    }

    /// Turn left by one turn step (Euler poses only)
    pub fn yaw_left(&mut self) {
        if let CameraPose::Euler { yaw_deg, .. } = &mut self.pose {
            *yaw_deg -= self.config.turn_step_deg;
        }
    }

    /// Turn right by one turn step (Euler poses only)
    pub fn yaw_right(&mut self) {
        if let CameraPose::Euler { yaw_deg, .. } = &mut self.pose {
            *yaw_deg += self.config.turn_step_deg;
        }
    }

    /// Current pose
    pub fn pose(&self) -> CameraPose {
        self.pose
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn world_up() -> Vec3 {
        Vec3::new(0.0, 1.0, 0.0)
    }

    #[test]
    fn default_euler_front_points_along_negative_z() {
        let cam = Camera::euler(Vec3::new(0.0, 0.0, 3.0), world_up());
        let front = cam.front();
        assert_relative_eq!(front.x, 0.0, epsilon = 1e-5);
        assert_relative_eq!(front.y, 0.0, epsilon = 1e-5);
        assert_relative_eq!(front.z, -1.0, epsilon = 1e-5);
    }

    #[test]
    fn yaw_is_unbounded() {
        let mut cam = Camera::euler(Vec3::zeros(), world_up());
        for _ in 0..4000 {
            cam.yaw_right();
        }
        match cam.pose() {
            CameraPose::Euler { yaw_deg, .. } => {
                // -90 + 4000 * 0.1 = 310: past a full turn, no wraparound.
                assert_relative_eq!(yaw_deg, 310.0, epsilon = 1e-2);
            }
            CameraPose::FreeLook { .. } => panic!("pose variant changed"),
        }
    }

    #[test]
    fn pitch_steps_accumulate() {
        let mut cam = Camera::euler(Vec3::zeros(), world_up());
        for _ in 0..10 {
            cam.pitch_up();
        }
        match cam.pose() {
            CameraPose::Euler { pitch_deg, .. } => {
                assert_relative_eq!(pitch_deg, 1.0, epsilon = 1e-5);
            }
            CameraPose::FreeLook { .. } => panic!("pose variant changed"),
        }
    }

    #[test]
    fn free_look_move_front_then_back_restores_position() {
        let start = Vec3::new(0.0, 0.0, 3.0);
        let mut cam = Camera::new(
            start,
            world_up(),
            CameraPose::FreeLook {
                front: Vec3::new(0.0, 0.0, -1.0),
            },
        );
        cam.move_front();
        cam.move_back();
        assert_eq!(cam.position(), start);
    }

    #[test]
    fn free_look_strafe_right_then_left_restores_position() {
        let start = Vec3::new(1.0, 2.0, 3.0);
        let mut cam = Camera::new(
            start,
            world_up(),
            CameraPose::FreeLook {
                front: Vec3::new(0.0, 0.0, -1.0),
            },
        );
        cam.strafe_right();
        cam.strafe_left();
        assert_eq!(cam.position(), start);
    }

    #[test]
    fn rotation_commands_do_not_touch_free_look_poses() {
        let front = Vec3::new(0.0, 0.0, -1.0);
        let mut cam = Camera::new(Vec3::zeros(), world_up(), CameraPose::FreeLook { front });
        cam.pitch_up();
        cam.yaw_right();
        assert_eq!(cam.pose(), CameraPose::FreeLook { front });
    }

    #[test]
    fn move_step_is_half_a_unit() {
        let mut cam = Camera::new(
            Vec3::zeros(),
            world_up(),
            CameraPose::FreeLook {
                front: Vec3::new(0.0, 0.0, -1.0),
            },
        );
        cam.move_front();
        assert_relative_eq!(cam.position().z, -0.5, epsilon = 1e-6);
    }

    #[test]
    fn view_matrix_places_eye_at_view_origin() {
        use crate::foundation::math::Point3;

        let cam = Camera::euler(Vec3::new(0.0, 0.0, 3.0), world_up());
        let view = cam.view_matrix();
        let eye_view = view.transform_point(&Point3::new(0.0, 0.0, 3.0));
        assert_relative_eq!(eye_view.coords.norm(), 0.0, epsilon = 1e-5);
    }

    #[test]
    fn euler_front_tracks_pitch() {
        let mut cam = Camera::euler(Vec3::zeros(), world_up());
        // 900 ticks of 0.1 degree = 90 degrees: looking straight up.
        for _ in 0..900 {
            cam.pitch_up();
        }
        let front = cam.front();
        assert_relative_eq!(front.y, 1.0, epsilon = 1e-4);
    }
}
