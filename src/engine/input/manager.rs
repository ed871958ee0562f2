// Input manager - maps winit keyboard events onto action state

use super::action::{default_bindings, Action, InputSource};
use super::state::InputState;
use std::collections::HashMap;
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::PhysicalKey;

/// Translates raw keyboard events into [`InputState`] via a binding table
pub struct InputManager {
    /// Source-to-action bindings (several sources may map to one action)
    bindings: HashMap<InputSource, Action>,

    /// Current action state
    state: InputState,
}

impl InputManager {
    /// Create an input manager with the default bindings
    pub fn new() -> Self {
        Self::with_bindings(default_bindings())
    }

    /// Create an input manager with custom bindings
    pub fn with_bindings(bindings: Vec<(InputSource, Action)>) -> Self {
        Self {
            bindings: bindings.into_iter().collect(),
            state: InputState::new(),
        }
    }

    /// Process a keyboard event from winit
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        // Only process physical key presses
        if let PhysicalKey::Code(key_code) = event.physical_key {
            let source = InputSource::key(key_code);

            if let Some(&action) = self.bindings.get(&source) {
                match event.state {
                    ElementState::Pressed => {
                        if !event.repeat {
                            // Only register if not a key repeat
                            self.state.press(action);
                        }
                    }
                    ElementState::Released => {
                        self.state.release(action);
                    }
                }
            }
        }
    }

    /// Update input state for a new frame.
    /// Call this once per frame after the frame's consumers have run.
    pub fn update(&mut self) {
        self.state.update();
    }

    /// Get the current action state
    pub fn state(&self) -> &InputState {
        &self.state
    }

    /// Get the current action state mutably
    pub fn state_mut(&mut self) -> &mut InputState {
        &mut self.state
    }

    /// Rebind an input source to an action
    pub fn bind(&mut self, source: InputSource, action: Action) {
        self.bindings.insert(source, action);
    }

    /// Look up the action bound to an input source
    pub fn action_for(&self, source: InputSource) -> Option<Action> {
        self.bindings.get(&source).copied()
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}
