// Gameplay modules: the character controller and its animation bridge

pub mod animation;
pub mod controller;
