// Controller configuration

use glam::Vec2;
use rapier2d::prelude::Group;
use thiserror::Error;

use crate::engine::physics::Layer;

/// Configuration error raised when a controller is spawned with
/// out-of-range values
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("jump force must be positive, got {0}")]
    NonPositiveJumpForce(f32),

    #[error("crouch speed factor must be within [0, 1], got {0}")]
    CrouchSpeedOutOfRange(f32),

    #[error("movement smoothing must be within [0, 0.3] seconds, got {0}")]
    SmoothingOutOfRange(f32),

    #[error("probe radius must be positive, got {0}")]
    NonPositiveProbeRadius(f32),

    #[error("body dimensions must be positive, got {0}x{1}")]
    NonPositiveDimensions(f32, f32),
}

/// Tuning values for a [`MotionController`](super::MotionController).
///
/// Immutable once the controller is spawned.
#[derive(Debug, Clone)]
pub struct ControllerConfig {
    /// Magnitude of the vertical jump impulse
    pub jump_force: f32,

    /// Fraction of movement speed kept while crouching (0.0..=1.0)
    pub crouch_speed_factor: f32,

    /// Movement smoothing time constant in seconds (0.0..=0.3)
    pub movement_smoothing: f32,

    /// Whether the character can steer while airborne
    pub air_control: bool,

    /// Layers the ground and ceiling probes test against
    pub ground_mask: Group,

    /// Ground probe center, relative to the body origin
    pub ground_check_offset: Vec2,

    /// Ceiling probe center, relative to the body origin
    pub ceiling_check_offset: Vec2,

    /// Radius of both overlap probes
    pub probe_radius: f32,

    /// Body width in world units
    pub width: f32,

    /// Body height in world units
    pub height: f32,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        let width = 1.0;
        let height = 2.0;
        Self {
            jump_force: 30.0,
            crouch_speed_factor: 0.36,
            movement_smoothing: 0.05,
            air_control: false,
            ground_mask: Layer::Ground.bit(),
            ground_check_offset: Vec2::new(0.0, -height / 2.0),
            ceiling_check_offset: Vec2::new(0.0, height / 2.0),
            probe_radius: 0.2,
            width,
            height,
        }
    }
}

impl ControllerConfig {
    /// Check all values are in range
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jump_force <= 0.0 {
            return Err(ConfigError::NonPositiveJumpForce(self.jump_force));
        }
        if !(0.0..=1.0).contains(&self.crouch_speed_factor) {
            return Err(ConfigError::CrouchSpeedOutOfRange(self.crouch_speed_factor));
        }
        if !(0.0..=0.3).contains(&self.movement_smoothing) {
            return Err(ConfigError::SmoothingOutOfRange(self.movement_smoothing));
        }
        if self.probe_radius <= 0.0 {
            return Err(ConfigError::NonPositiveProbeRadius(self.probe_radius));
        }
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(ConfigError::NonPositiveDimensions(self.width, self.height));
        }
        Ok(())
    }
}
