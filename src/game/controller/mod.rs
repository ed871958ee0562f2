// Grounded character controller
//
// `MotionController` resolves grounding, crouching, jumping, and smoothed
// horizontal movement against the physics world once per fixed step.
// `InputRelay` turns per-frame input state into the command the controller
// consumes and mirrors the results into the animation parameters.

mod config;
mod events;
mod motion;
mod relay;

pub use config::{ConfigError, ControllerConfig};
pub use events::MotionEvent;
pub use motion::{MotionCommand, MotionController};
pub use relay::InputRelay;
