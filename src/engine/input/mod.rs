// Input system: actions, per-frame state, and winit key mapping

pub mod action;
mod manager;
mod state;

pub use action::{default_bindings, Action, InputSource};
pub use manager::InputManager;
pub use state::InputState;
