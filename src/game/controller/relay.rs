// Frame-rate input sampling and physics-rate forwarding

use super::events::MotionEvent;
use super::motion::{MotionCommand, MotionController};
use crate::engine::input::{Action, InputState};
use crate::engine::physics::PhysicsWorld;
use crate::game::animation::{param, AnimationSink, SpriteFacing};

/// Default horizontal run speed in units per second
pub const DEFAULT_RUN_SPEED: f32 = 40.0;

/// Samples input once per frame, holds the pending intent, and forwards
/// it to the [`MotionController`] once per physics step.
///
/// Jump is edge-triggered and forwarded at most once per press; crouch is
/// level-triggered and forwarded continuously. `Speed`, `IsJumping`, and
/// `IsCrouching` are mirrored into the animation sink.
pub struct InputRelay {
    /// Horizontal run speed multiplier
    run_speed: f32,

    /// Pending horizontal intent (axis x run speed, no timestep scaling)
    horizontal: f32,

    /// Pending jump, set on press and cleared after one forwarding
    jump: bool,

    /// Crouch held state, forwarded every step
    crouch: bool,
}

impl InputRelay {
    /// Create a relay with the given run speed
    pub fn new(run_speed: f32) -> Self {
        Self {
            run_speed,
            horizontal: 0.0,
            jump: false,
            crouch: false,
        }
    }

    /// Sample the input state; call once per rendered frame.
    ///
    /// Announces the jump to the animation sink immediately on press,
    /// before the physics step consumes it.
    pub fn sample(&mut self, input: &InputState, sink: &mut impl AnimationSink) {
        self.horizontal = input.horizontal_axis() * self.run_speed;
        sink.set_float(param::SPEED, self.horizontal.abs());

        if input.just_pressed(Action::Jump) {
            self.jump = true;
            sink.set_bool(param::IS_JUMPING, true);
        }

        self.crouch = input.is_pressed(Action::Crouch);
    }

    /// Forward the pending intent to the controller; call once per fixed
    /// physics step.
    ///
    /// The horizontal intent is scaled by the fixed timestep here, at the
    /// cadence boundary. The jump flag is cleared unconditionally after
    /// one forwarding, whether or not the controller consumed it.
    pub fn physics_tick(
        &mut self,
        controller: &mut MotionController,
        physics: &mut PhysicsWorld,
        sink: &mut (impl AnimationSink + SpriteFacing),
        dt: f32,
    ) {
        controller.update_grounding(physics);

        let cmd = MotionCommand {
            horizontal: self.horizontal * dt,
            crouch: self.crouch,
            jump: self.jump,
        };
        controller.apply(physics, sink, &cmd, dt);

        self.jump = false;

        for event in controller.take_events() {
            match event {
                MotionEvent::Landed => sink.set_bool(param::IS_JUMPING, false),
                MotionEvent::CrouchChanged(crouching) => {
                    sink.set_bool(param::IS_CROUCHING, crouching)
                }
            }
        }
    }

    /// Pending horizontal intent
    pub fn horizontal(&self) -> f32 {
        self.horizontal
    }

    /// Whether a jump press is waiting to be forwarded
    pub fn pending_jump(&self) -> bool {
        self.jump
    }

    /// Whether crouch is currently held
    pub fn crouch_held(&self) -> bool {
        self.crouch
    }
}

impl Default for InputRelay {
    fn default() -> Self {
        Self::new(DEFAULT_RUN_SPEED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::physics::body::presets;
    use crate::game::animation::AnimationParams;
    use crate::game::controller::ControllerConfig;
    use approx::assert_relative_eq;

    const DT: f32 = 1.0 / 60.0;

    fn spawn_on_ground() -> (PhysicsWorld, MotionController) {
        let mut physics = PhysicsWorld::new();
        let platform = physics.add_rigid_body(presets::platform_body(0.0, -0.55));
        physics.add_collider(presets::platform_collider(20.0, 1.0), platform);
        let controller =
            MotionController::spawn(ControllerConfig::default(), &mut physics, 0.0, 1.0)
                .expect("valid config");
        physics.step();
        (physics, controller)
    }

    /// Run one empty tick to absorb the initial landing event.
    fn settle(
        relay: &mut InputRelay,
        controller: &mut MotionController,
        physics: &mut PhysicsWorld,
        sink: &mut AnimationParams,
    ) {
        let input = InputState::new();
        relay.sample(&input, sink);
        relay.physics_tick(controller, physics, sink, DT);
    }

    #[test]
    fn test_horizontal_intent_and_speed_param() {
        let mut relay = InputRelay::new(40.0);
        let mut sink = AnimationParams::new();
        let mut input = InputState::new();

        input.press(Action::MoveRight);
        relay.sample(&input, &mut sink);

        assert_relative_eq!(relay.horizontal(), 40.0);
        assert_relative_eq!(sink.get_float(param::SPEED), 40.0);

        input.release(Action::MoveRight);
        input.press(Action::MoveLeft);
        relay.sample(&input, &mut sink);

        assert_relative_eq!(relay.horizontal(), -40.0);
        assert_relative_eq!(sink.get_float(param::SPEED), 40.0, epsilon = 1e-6);
    }

    #[test]
    fn test_jump_press_sets_pending_and_animation_flag() {
        let mut relay = InputRelay::default();
        let mut sink = AnimationParams::new();
        let mut input = InputState::new();

        input.press(Action::Jump);
        relay.sample(&input, &mut sink);

        assert!(relay.pending_jump());
        assert!(sink.get_bool(param::IS_JUMPING));
    }

    #[test]
    fn test_jump_forwarded_at_most_once_per_press() {
        let (mut physics, mut controller) = spawn_on_ground();
        let mut relay = InputRelay::default();
        let mut sink = AnimationParams::new();
        settle(&mut relay, &mut controller, &mut physics, &mut sink);

        let mut input = InputState::new();
        input.press(Action::Jump);
        relay.sample(&input, &mut sink);

        relay.physics_tick(&mut controller, &mut physics, &mut sink, DT);
        let (_, vy_after_jump) = controller.velocity(&physics);
        assert!(vy_after_jump > 5.0, "first tick should jump: {vy_after_jump}");
        assert!(!relay.pending_jump(), "flag cleared after forwarding");

        // A second tick without a new press applies no second impulse.
        relay.physics_tick(&mut controller, &mut physics, &mut sink, DT);
        let (_, vy_next) = controller.velocity(&physics);
        assert_relative_eq!(vy_next, vy_after_jump);
    }

    #[test]
    fn test_jump_pending_survives_extra_frames_until_forwarded() {
        let mut relay = InputRelay::default();
        let mut sink = AnimationParams::new();
        let mut input = InputState::new();

        input.press(Action::Jump);
        relay.sample(&input, &mut sink);

        // More frames elapse before the next physics step; the press
        // must not be lost or duplicated.
        input.update();
        relay.sample(&input, &mut sink);
        relay.sample(&input, &mut sink);

        assert!(relay.pending_jump());
    }

    #[test]
    fn test_landing_clears_is_jumping() {
        let (mut physics, mut controller) = spawn_on_ground();
        let mut relay = InputRelay::default();
        let mut sink = AnimationParams::new();

        sink.set_bool(param::IS_JUMPING, true);
        relay.physics_tick(&mut controller, &mut physics, &mut sink, DT);

        assert!(controller.grounded());
        assert!(!sink.get_bool(param::IS_JUMPING));
    }

    #[test]
    fn test_crouch_is_level_triggered_and_mirrored() {
        let (mut physics, mut controller) = spawn_on_ground();
        let mut relay = InputRelay::default();
        let mut sink = AnimationParams::new();
        settle(&mut relay, &mut controller, &mut physics, &mut sink);

        let mut input = InputState::new();
        input.press(Action::Crouch);
        relay.sample(&input, &mut sink);
        relay.physics_tick(&mut controller, &mut physics, &mut sink, DT);

        assert!(relay.crouch_held());
        assert!(controller.crouching());
        assert!(sink.get_bool(param::IS_CROUCHING));

        input.release(Action::Crouch);
        relay.sample(&input, &mut sink);
        relay.physics_tick(&mut controller, &mut physics, &mut sink, DT);

        assert!(!relay.crouch_held());
        assert!(!controller.crouching());
        assert!(!sink.get_bool(param::IS_CROUCHING));
    }

    #[test]
    fn test_movement_builds_speed_through_relay() {
        let (mut physics, mut controller) = spawn_on_ground();
        let mut relay = InputRelay::default();
        let mut sink = AnimationParams::new();
        settle(&mut relay, &mut controller, &mut physics, &mut sink);

        let mut input = InputState::new();
        input.press(Action::MoveRight);
        relay.sample(&input, &mut sink);

        for _ in 0..90 {
            relay.physics_tick(&mut controller, &mut physics, &mut sink, DT);
        }

        // Target velocity: run_speed * dt * MOVE_SCALE = 40/60*10.
        let (vx, _) = controller.velocity(&physics);
        assert_relative_eq!(vx, 40.0 * DT * 10.0, epsilon = 0.1);
    }
}
