// Grounded motion controller

use glam::Vec2;

use super::config::{ConfigError, ControllerConfig};
use super::events::MotionEvent;
use crate::core::math::smooth_damp_vec2;
use crate::engine::physics::{
    body::presets, ColliderHandle, Layer, PhysicsWorld, QueryFilter, Real, RigidBodyHandle, Vector,
};
use crate::game::animation::SpriteFacing;

/// Scale from horizontal intent (already timestep-scaled by the relay) to
/// target velocity
const MOVE_SCALE: f32 = 10.0;

/// Per-step movement command consumed by [`MotionController::apply`]
#[derive(Debug, Clone, Copy, Default)]
pub struct MotionCommand {
    /// Horizontal movement intent, scaled by the fixed timestep
    pub horizontal: f32,
    /// Whether the crouch stance is requested
    pub crouch: bool,
    /// Whether a jump impulse is requested this step
    pub jump: bool,
}

/// Resolves grounding, crouching, jumping, and smoothed horizontal
/// movement for one character, once per fixed physics step.
///
/// The controller owns no physics objects; it holds handles into the
/// [`PhysicsWorld`] passed to each operation.
pub struct MotionController {
    config: ControllerConfig,

    /// The character's rigid body
    body_handle: RigidBodyHandle,

    /// Always-on collider at the feet
    feet_collider: ColliderHandle,

    /// Collider disabled while crouching, shrinking the footprint.
    /// Optional; controllers without one simply skip the toggle.
    crouch_collider: Option<ColliderHandle>,

    /// Whether the ground probe found contact last resolution
    grounded: bool,

    /// Crouch stance as of the previous step, for edge detection
    was_crouching: bool,

    /// Which way the sprite faces (true = right)
    facing_right: bool,

    /// Smooth-damp accumulator, carried across steps
    velocity_smooth: Vec2,

    /// Pending notifications, drained by the caller
    events: Vec<MotionEvent>,
}

impl MotionController {
    /// Create a controller around pre-built physics handles
    pub fn new(
        config: ControllerConfig,
        body_handle: RigidBodyHandle,
        feet_collider: ColliderHandle,
        crouch_collider: Option<ColliderHandle>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            body_handle,
            feet_collider,
            crouch_collider,
            grounded: false,
            was_crouching: false,
            facing_right: true,
            velocity_smooth: Vec2::ZERO,
            events: Vec::new(),
        })
    }

    /// Create the character's body and colliders from presets and wrap
    /// them in a controller
    pub fn spawn(
        config: ControllerConfig,
        physics: &mut PhysicsWorld,
        x: f32,
        y: f32,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let body_handle = physics.add_rigid_body(presets::player_body(x, y));
        let feet = physics.add_collider(
            presets::player_feet_collider(config.width, config.height),
            body_handle,
        );
        let torso = physics.add_collider(
            presets::player_torso_collider(config.width, config.height),
            body_handle,
        );

        log::info!("spawned character controller at ({x}, {y})");
        Self::new(config, body_handle, feet, Some(torso))
    }

    /// Re-run the ground probe and update the grounded flag.
    ///
    /// Pushes [`MotionEvent::Landed`] exactly once on the
    /// airborne-to-grounded edge, no matter how many surfaces overlap the
    /// probe. Call once per physics step, before [`apply`](Self::apply).
    pub fn update_grounding(&mut self, physics: &PhysicsWorld) {
        let was_grounded = self.grounded;
        self.grounded = false;

        let Some(point) = self.probe_point(physics, self.config.ground_check_offset) else {
            return;
        };

        let hits = physics.overlap_circle(point, self.config.probe_radius, self.probe_filter());
        if !hits.is_empty() {
            self.grounded = true;
            if !was_grounded {
                log::debug!("landed");
                self.events.push(MotionEvent::Landed);
            }
        }
    }

    /// Resolve one step of movement.
    ///
    /// Applies the crouch/stand rules, smoothed horizontal velocity,
    /// facing flips, and the jump impulse, mutating the body owned by
    /// `physics`. Crouch and landing transitions are reported through the
    /// drained event queue.
    pub fn apply(
        &mut self,
        physics: &mut PhysicsWorld,
        sprite: &mut impl SpriteFacing,
        cmd: &MotionCommand,
        dt: f32,
    ) {
        let mut crouch = cmd.crouch;

        // A blocked ceiling overrides a stand-up request.
        if !crouch && self.ceiling_blocked(physics) {
            crouch = true;
        }

        // Steering is only allowed on the ground unless air control is on.
        if self.grounded || self.config.air_control {
            let mut horizontal = cmd.horizontal;

            if crouch {
                if !self.was_crouching {
                    self.was_crouching = true;
                    log::debug!("crouching");
                    self.events.push(MotionEvent::CrouchChanged(true));
                }

                horizontal *= self.config.crouch_speed_factor;

                if let Some(handle) = self.crouch_collider {
                    physics.set_collider_enabled(handle, false);
                }
            } else {
                if let Some(handle) = self.crouch_collider {
                    physics.set_collider_enabled(handle, true);
                }

                if self.was_crouching {
                    self.was_crouching = false;
                    log::debug!("standing");
                    self.events.push(MotionEvent::CrouchChanged(false));
                }
            }

            // Horizontal control never touches the vertical axis; the
            // target keeps whatever vertical velocity gravity produced.
            let current = physics.linvel(self.body_handle);
            let target = Vec2::new(horizontal * MOVE_SCALE, current.y);
            let smoothed = smooth_damp_vec2(
                Vec2::new(current.x, current.y),
                target,
                &mut self.velocity_smooth,
                self.config.movement_smoothing,
                dt,
            );
            if let Some(body) = physics.get_rigid_body_mut(self.body_handle) {
                body.set_linvel(Vector::new(smoothed.x, smoothed.y), true);
            }

            // Flip only on a strict sign disagreement with current facing.
            if horizontal > 0.0 && !self.facing_right {
                self.flip(sprite);
            } else if horizontal < 0.0 && self.facing_right {
                self.flip(sprite);
            }
        }

        if self.grounded && cmd.jump {
            // Leave the ground before physics confirms separation so a
            // second jump cannot fire within the same step.
            self.grounded = false;
            physics.apply_impulse(self.body_handle, Vector::new(0.0, self.config.jump_force));
        }
    }

    /// Take all notifications accumulated since the last call
    pub fn take_events(&mut self) -> Vec<MotionEvent> {
        std::mem::take(&mut self.events)
    }

    /// Whether the ground probe found contact last resolution
    pub fn grounded(&self) -> bool {
        self.grounded
    }

    /// Whether the character is currently in the crouch stance
    pub fn crouching(&self) -> bool {
        self.was_crouching
    }

    /// Which way the character faces (true = right)
    pub fn facing_right(&self) -> bool {
        self.facing_right
    }

    /// Handle of the character's rigid body
    pub fn body_handle(&self) -> RigidBodyHandle {
        self.body_handle
    }

    /// Handle of the always-on feet collider
    pub fn feet_collider(&self) -> ColliderHandle {
        self.feet_collider
    }

    /// Handle of the crouch-disable collider, if the character has one
    pub fn crouch_collider(&self) -> Option<ColliderHandle> {
        self.crouch_collider
    }

    /// Get the character's current position
    pub fn position(&self, physics: &PhysicsWorld) -> Option<(f32, f32)> {
        physics.get_rigid_body(self.body_handle).map(|body| {
            let pos = body.translation();
            (pos.x, pos.y)
        })
    }

    /// Get the character's current velocity
    pub fn velocity(&self, physics: &PhysicsWorld) -> (f32, f32) {
        let vel = physics.linvel(self.body_handle);
        (vel.x, vel.y)
    }

    fn flip(&mut self, sprite: &mut impl SpriteFacing) {
        self.facing_right = !self.facing_right;
        sprite.set_flip_x(!self.facing_right);
    }

    fn probe_filter(&self) -> QueryFilter<'static> {
        QueryFilter::default()
            .groups(Layer::probe_groups(self.config.ground_mask))
            .exclude_rigid_body(self.body_handle)
    }

    fn probe_point(&self, physics: &PhysicsWorld, offset: Vec2) -> Option<Vector<Real>> {
        let body = physics.get_rigid_body(self.body_handle)?;
        let pos = body.translation();
        Some(Vector::new(pos.x + offset.x, pos.y + offset.y))
    }

    /// Check whether something solid hangs over the character's head
    fn ceiling_blocked(&self, physics: &PhysicsWorld) -> bool {
        let Some(point) = self.probe_point(physics, self.config.ceiling_check_offset) else {
            return false;
        };
        !physics
            .overlap_circle(point, self.config.probe_radius, self.probe_filter())
            .is_empty()
    }
}
