//! Math utilities and types
//!
//! Provides fundamental math types for 3D graphics built on nalgebra, plus
//! the view and projection matrix constructions the renderer depends on.

pub use nalgebra::{Matrix3, Matrix4, Vector2, Vector3, Vector4};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4D vector type
pub type Vec4 = Vector4<f32>;

/// 3x3 matrix type
pub type Mat3 = Matrix3<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// 3D point type
pub type Point3 = nalgebra::Point3<f32>;

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// Degrees to radians conversion factor
    pub const DEG_TO_RAD: f32 = PI / 180.0;

    /// Radians to degrees conversion factor
    pub const RAD_TO_DEG: f32 = 180.0 / PI;
}

/// Math utility functions
pub mod utils {
    use super::constants;

    /// Convert degrees to radians
    pub fn deg_to_rad(degrees: f32) -> f32 {
        degrees * constants::DEG_TO_RAD
    }

    /// Convert radians to degrees
    pub fn rad_to_deg(radians: f32) -> f32 {
        radians * constants::RAD_TO_DEG
    }
}

/// Extension trait for Mat4 with graphics convenience constructors
pub trait Mat4Ext {
    /// Create a rotation matrix around the X axis
    fn rotation_x(angle: f32) -> Mat4;

    /// Create a rotation matrix around the Y axis
    fn rotation_y(angle: f32) -> Mat4;

    /// Create a rotation matrix around the Z axis
    fn rotation_z(angle: f32) -> Mat4;

    /// Create a perspective projection matrix (OpenGL clip conventions,
    /// depth mapped to [-1, 1], Y up)
    fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Mat4;

    /// Create a right-handed look-at view matrix
    ///
    /// `eye` is the camera position, `target` the point looked at (not a
    /// direction), `up` the world up vector. Both camera variants derive
    /// their view matrix through this single construction.
    fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Mat4;
}

impl Mat4Ext for Mat4 {
    fn rotation_x(angle: f32) -> Mat4 {
        Mat4::from_axis_angle(&Vec3::x_axis(), angle)
    }

    fn rotation_y(angle: f32) -> Mat4 {
        Mat4::from_axis_angle(&Vec3::y_axis(), angle)
    }

    fn rotation_z(angle: f32) -> Mat4 {
        Mat4::from_axis_angle(&Vec3::z_axis(), angle)
    }

    fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
        nalgebra::Perspective3::new(aspect, fov_y, near, far).to_homogeneous()
    }

    fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Mat4 {
        Mat4::look_at_rh(&Point3::from(eye), &Point3::from(target), &up)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn look_at_moves_eye_to_origin() {
        let eye = Vec3::new(1.0, 2.0, 3.0);
        let view = Mat4::look_at(eye, Vec3::zeros(), Vec3::new(0.0, 1.0, 0.0));
        let eye_view = view.transform_point(&Point3::from(eye));
        assert_relative_eq!(eye_view.x, 0.0, epsilon = 1e-5);
        assert_relative_eq!(eye_view.y, 0.0, epsilon = 1e-5);
        assert_relative_eq!(eye_view.z, 0.0, epsilon = 1e-5);
    }

    #[test]
    fn look_at_maps_view_direction_to_negative_z() {
        // Camera at +Z looking at origin: the target should land on the -Z axis.
        let eye = Vec3::new(0.0, 0.0, 3.0);
        let view = Mat4::look_at(eye, Vec3::zeros(), Vec3::new(0.0, 1.0, 0.0));
        let target_view = view.transform_point(&Point3::new(0.0, 0.0, 0.0));
        assert_relative_eq!(target_view.x, 0.0, epsilon = 1e-5);
        assert_relative_eq!(target_view.y, 0.0, epsilon = 1e-5);
        assert_relative_eq!(target_view.z, -3.0, epsilon = 1e-5);
    }

    #[test]
    fn perspective_preserves_center_ray() {
        let proj = Mat4::perspective(utils::deg_to_rad(45.0), 800.0 / 600.0, 0.1, 100.0);
        // A point straight ahead of the camera stays on the view axis.
        let p = proj * Vec4::new(0.0, 0.0, -1.0, 1.0);
        assert_relative_eq!(p.x, 0.0, epsilon = 1e-5);
        assert_relative_eq!(p.y, 0.0, epsilon = 1e-5);
    }

    #[test]
    fn degree_radian_round_trip() {
        assert_relative_eq!(utils::rad_to_deg(utils::deg_to_rad(-90.0)), -90.0, epsilon = 1e-4);
        assert_relative_eq!(utils::deg_to_rad(180.0), constants::PI, epsilon = 1e-6);
    }
}
