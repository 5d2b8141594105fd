//! Engine configuration types

/// Window and context configuration
#[derive(Debug, Clone)]
pub struct WindowConfig {
    /// Window width in pixels
    pub width: u32,

    /// Window height in pixels
    pub height: u32,

    /// Window title
    pub title: String,

    /// VSync enabled
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            title: "gl_engine".to_string(),
            vsync: true,
        }
    }
}

/// Camera stepping configuration
///
/// Fixed per-tick increments applied by the input poll. The defaults match
/// the demo's tuning: half a unit of travel and a tenth of a degree of turn
/// per polled frame.
#[derive(Debug, Clone)]
pub struct CameraConfig {
    /// Translation applied per move tick, in world units
    pub move_step: f32,

    /// Rotation applied per turn tick, in degrees
    pub turn_step_deg: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            move_step: 0.5,
            turn_step_deg: 0.1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_window_is_800_by_600() {
        let config = WindowConfig::default();
        assert_eq!(config.width, 800);
        assert_eq!(config.height, 600);
        assert!(config.vsync);
    }
}
