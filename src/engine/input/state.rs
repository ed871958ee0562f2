// Per-frame input state tracking

use super::action::Action;
use std::collections::HashSet;

/// Snapshot of action state for the current frame.
///
/// Press and release events are registered as they arrive; `update()`
/// rolls the frame over, clearing the just-pressed/just-released edges.
#[derive(Debug, Default)]
pub struct InputState {
    /// Actions that are currently pressed
    pressed: HashSet<Action>,

    /// Actions that were just pressed this frame (press events)
    just_pressed: HashSet<Action>,

    /// Actions that were just released this frame (release events)
    just_released: HashSet<Action>,

    /// Actions that were pressed in the previous frame
    previous_pressed: HashSet<Action>,
}

impl InputState {
    /// Create a new empty input state
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if an action is currently pressed
    pub fn is_pressed(&self, action: Action) -> bool {
        self.pressed.contains(&action)
    }

    /// Check if an action was just pressed this frame
    pub fn just_pressed(&self, action: Action) -> bool {
        self.just_pressed.contains(&action)
    }

    /// Check if an action was just released this frame
    pub fn just_released(&self, action: Action) -> bool {
        self.just_released.contains(&action)
    }

    /// Check if an action is held (pressed for multiple frames)
    pub fn is_held(&self, action: Action) -> bool {
        self.pressed.contains(&action) && self.previous_pressed.contains(&action)
    }

    /// Raw horizontal axis: -1.0 (left), 0.0 (neutral), or 1.0 (right).
    /// Opposing inputs cancel out.
    pub fn horizontal_axis(&self) -> f32 {
        let mut horizontal = 0.0;
        if self.is_pressed(Action::MoveLeft) {
            horizontal -= 1.0;
        }
        if self.is_pressed(Action::MoveRight) {
            horizontal += 1.0;
        }
        horizontal
    }

    /// Register an action press
    pub fn press(&mut self, action: Action) {
        if !self.pressed.contains(&action) {
            self.just_pressed.insert(action);
            self.pressed.insert(action);
        }
    }

    /// Register an action release
    pub fn release(&mut self, action: Action) {
        if self.pressed.contains(&action) {
            self.just_released.insert(action);
            self.pressed.remove(&action);
        }
    }

    /// Update input state for a new frame.
    /// Call this once per frame after the frame's consumers have run.
    pub fn update(&mut self) {
        self.just_pressed.clear();
        self.just_released.clear();
        self.previous_pressed = self.pressed.clone();
    }

    /// Reset all input state
    pub fn reset(&mut self) {
        self.pressed.clear();
        self.just_pressed.clear();
        self.just_released.clear();
        self.previous_pressed.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_state_creation() {
        let input = InputState::new();
        assert!(!input.is_pressed(Action::Jump));
        assert_eq!(input.horizontal_axis(), 0.0);
    }

    #[test]
    fn test_press_action() {
        let mut input = InputState::new();
        input.press(Action::Jump);
        assert!(input.is_pressed(Action::Jump));
        assert!(input.just_pressed(Action::Jump));
    }

    #[test]
    fn test_release_action() {
        let mut input = InputState::new();
        input.press(Action::Jump);
        input.update();
        input.release(Action::Jump);
        assert!(!input.is_pressed(Action::Jump));
        assert!(input.just_released(Action::Jump));
    }

    #[test]
    fn test_just_pressed_cleared_on_update() {
        let mut input = InputState::new();
        input.press(Action::Jump);
        assert!(input.just_pressed(Action::Jump));

        input.update();
        assert!(input.is_pressed(Action::Jump));
        assert!(!input.just_pressed(Action::Jump));
    }

    #[test]
    fn test_held_detection() {
        let mut input = InputState::new();
        input.press(Action::Crouch);
        assert!(!input.is_held(Action::Crouch)); // Not held on first frame

        input.update();
        assert!(input.is_held(Action::Crouch)); // Held after update
    }

    #[test]
    fn test_horizontal_axis() {
        let mut input = InputState::new();
        input.press(Action::MoveRight);
        assert_eq!(input.horizontal_axis(), 1.0);

        input.release(Action::MoveRight);
        input.press(Action::MoveLeft);
        assert_eq!(input.horizontal_axis(), -1.0);
    }

    #[test]
    fn test_opposing_directions_cancel() {
        let mut input = InputState::new();
        input.press(Action::MoveLeft);
        input.press(Action::MoveRight);
        assert_eq!(input.horizontal_axis(), 0.0);
    }

    #[test]
    fn test_repeated_press_is_single_edge() {
        let mut input = InputState::new();
        input.press(Action::Jump);
        input.update();
        input.press(Action::Jump); // Still held; no new edge
        assert!(!input.just_pressed(Action::Jump));
    }

    #[test]
    fn test_release_unpressed_action() {
        let mut input = InputState::new();
        input.release(Action::Jump); // Release without pressing
        assert!(!input.just_released(Action::Jump));
    }

    #[test]
    fn test_reset() {
        let mut input = InputState::new();
        input.press(Action::Jump);
        input.press(Action::MoveLeft);
        input.reset();

        assert!(!input.is_pressed(Action::Jump));
        assert!(!input.is_pressed(Action::MoveLeft));
    }
}
