// runner2d - a 2D platformer character controller built on rapier2d
//
// The crate is split the same way the binary uses it: `engine` holds the
// physics/input/timing plumbing, `game` holds the controller logic that
// a host game embeds.

pub mod core;
pub mod engine;
pub mod game;

pub use engine::physics::PhysicsWorld;
pub use game::animation::{AnimationParams, AnimationSink, SpriteFacing};
pub use game::controller::{
    ConfigError, ControllerConfig, InputRelay, MotionCommand, MotionController, MotionEvent,
};
