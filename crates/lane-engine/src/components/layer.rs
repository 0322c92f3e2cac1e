/// Render layer — controls draw order for entities.
///
/// Layers are drawn back-to-front: road tiles first, then the player car,
/// then the decorative traffic. `Overlay` is screen-space and is never
/// drawn through the camera view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum RenderLayer {
    Road = 0,
    #[default]
    Player = 1,
    Traffic = 2,
    Overlay = 3,
}

impl RenderLayer {
    /// Total number of render layers.
    pub const COUNT: usize = 4;

    /// World-space layers in draw order.
    pub const SCENE: [RenderLayer; 3] = [RenderLayer::Road, RenderLayer::Player, RenderLayer::Traffic];

    /// Convert from a u8 value to a RenderLayer.
    /// Returns None if the value is out of range.
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Road),
            1 => Some(Self::Player),
            2 => Some(Self::Traffic),
            3 => Some(Self::Overlay),
            _ => None,
        }
    }

    /// Convert to u8 for protocol serialization.
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Whether this layer is drawn through the camera view.
    pub fn is_world_space(self) -> bool {
        self != RenderLayer::Overlay
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_player() {
        assert_eq!(RenderLayer::default(), RenderLayer::Player);
    }

    #[test]
    fn ordering_is_back_to_front() {
        assert!(RenderLayer::Road < RenderLayer::Player);
        assert!(RenderLayer::Player < RenderLayer::Traffic);
        assert!(RenderLayer::Traffic < RenderLayer::Overlay);
    }

    #[test]
    fn u8_round_trip_and_out_of_range() {
        for layer in [RenderLayer::Road, RenderLayer::Player, RenderLayer::Traffic, RenderLayer::Overlay] {
            assert_eq!(RenderLayer::from_u8(layer.as_u8()), Some(layer));
        }
        assert_eq!(RenderLayer::from_u8(RenderLayer::COUNT as u8), None);
    }

    #[test]
    fn overlay_is_screen_space() {
        assert!(!RenderLayer::Overlay.is_world_space());
        assert!(RenderLayer::SCENE.iter().all(|l| l.is_world_space()));
    }
}
