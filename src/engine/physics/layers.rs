use rapier2d::prelude::*;

/// Collision layers for filtering what objects can collide with each other.
///
/// The character's ground and ceiling probes filter against a configurable
/// mask of these layers, so level geometry can opt in or out of counting
/// as ground.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    /// Default layer - interacts with everything
    Default = 0b0001,

    /// Player characters
    Player = 0b0010,

    /// Ground surfaces: platforms, walls, ceilings
    Ground = 0b0100,

    /// Trigger zones - detect but don't block
    Sensor = 0b1000,
}

impl Layer {
    /// The membership bit for this layer
    pub fn bit(self) -> Group {
        Group::from_bits_truncate(self as u32)
    }

    /// Combine several layers into a query mask
    pub fn mask(layers: &[Layer]) -> Group {
        layers
            .iter()
            .fold(Group::empty(), |acc, layer| acc | layer.bit())
    }

    /// Convert to rapier2d's InteractionGroups
    pub fn to_interaction_groups(self) -> InteractionGroups {
        let memberships = self.bit();

        let filter = match self {
            // Players collide with level geometry and sensors,
            // but not with other players
            Layer::Player => Layer::mask(&[Layer::Default, Layer::Ground, Layer::Sensor]),

            // Ground collides with everything solid
            Layer::Ground => Layer::mask(&[Layer::Default, Layer::Player, Layer::Ground]),

            // Sensors detect everything without blocking
            Layer::Sensor => Group::ALL,

            // Default interacts with everything
            Layer::Default => Group::ALL,
        };

        InteractionGroups::new(memberships, filter)
    }

    /// Interaction groups for a probe cast on behalf of a player against
    /// the given ground mask
    pub fn probe_groups(ground_mask: Group) -> InteractionGroups {
        InteractionGroups::new(Layer::Player.bit(), ground_mask)
    }
}
