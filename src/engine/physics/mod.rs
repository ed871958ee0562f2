// Physics system using rapier2d

pub mod body;
mod layers;
mod world;

pub use body::{BodyBuilder, ColliderBuilder2D, ColliderHandle, RigidBodyHandle};
pub use layers::Layer;
pub use world::PhysicsWorld;

// Re-export commonly used rapier types for convenience
#[allow(unused_imports)]
pub use rapier2d::prelude::{Group, InteractionGroups, Isometry, QueryFilter, Real, Vector};
