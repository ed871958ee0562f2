// Engine modules: physics, input, timing

pub mod game_loop;
pub mod input;
pub mod physics;
