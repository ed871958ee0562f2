// Animation parameter bridge
//
// The controller does not drive sprite playback itself; it publishes named
// parameters (and a horizontal flip flag) that a host animation system
// reads when choosing clips.

use std::collections::HashMap;

/// Parameter names the controller and relay write
pub mod param {
    /// Absolute horizontal speed intent (float)
    pub const SPEED: &str = "Speed";
    /// True from jump press until the next landing (bool)
    pub const IS_JUMPING: &str = "IsJumping";
    /// Mirrors the controller's crouch state (bool)
    pub const IS_CROUCHING: &str = "IsCrouching";
}

/// Sink for named animation parameters
pub trait AnimationSink {
    /// Set a float parameter
    fn set_float(&mut self, name: &str, value: f32);

    /// Set a bool parameter
    fn set_bool(&mut self, name: &str, value: bool);
}

/// Horizontal sprite flip, owned by whatever renders the character
pub trait SpriteFacing {
    /// Set whether the sprite is mirrored on the x axis
    fn set_flip_x(&mut self, flip: bool);
}

/// Plain parameter store implementing both sinks.
///
/// A renderer-backed game would forward these calls to its animator; the
/// store doubles as the test double.
#[derive(Debug, Default)]
pub struct AnimationParams {
    floats: HashMap<String, f32>,
    bools: HashMap<String, bool>,
    flip_x: bool,
}

impl AnimationParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a float parameter (0.0 if never set)
    pub fn get_float(&self, name: &str) -> f32 {
        self.floats.get(name).copied().unwrap_or(0.0)
    }

    /// Read a bool parameter (false if never set)
    pub fn get_bool(&self, name: &str) -> bool {
        self.bools.get(name).copied().unwrap_or(false)
    }

    /// Current horizontal flip flag
    pub fn flip_x(&self) -> bool {
        self.flip_x
    }
}

impl AnimationSink for AnimationParams {
    fn set_float(&mut self, name: &str, value: f32) {
        self.floats.insert(name.to_string(), value);
    }

    fn set_bool(&mut self, name: &str, value: bool) {
        self.bools.insert(name.to_string(), value);
    }
}

impl SpriteFacing for AnimationParams {
    fn set_flip_x(&mut self, flip: bool) {
        self.flip_x = flip;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_parameters_have_defaults() {
        let params = AnimationParams::new();
        assert_eq!(params.get_float(param::SPEED), 0.0);
        assert!(!params.get_bool(param::IS_JUMPING));
        assert!(!params.flip_x());
    }

    #[test]
    fn test_set_and_get_float() {
        let mut params = AnimationParams::new();
        params.set_float(param::SPEED, 12.5);
        assert_eq!(params.get_float(param::SPEED), 12.5);
    }

    #[test]
    fn test_set_and_get_bool() {
        let mut params = AnimationParams::new();
        params.set_bool(param::IS_CROUCHING, true);
        assert!(params.get_bool(param::IS_CROUCHING));

        params.set_bool(param::IS_CROUCHING, false);
        assert!(!params.get_bool(param::IS_CROUCHING));
    }

    #[test]
    fn test_flip_flag() {
        let mut params = AnimationParams::new();
        params.set_flip_x(true);
        assert!(params.flip_x());
    }
}
