//! Static point light hung on the side of a pillar.

use bevy_ecs::prelude::Component;
use glam::Vec3;

use crate::components::pillar::Pillar;

/// Gap between the pillar face and the candle.
const SIDE_GAP: f32 = 0.5;
/// How far below the pillar top the candles hang.
const DROP_FROM_TOP: f32 = 14.0;

#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Candle {
    pub position: Vec3,
}

impl Candle {
    pub fn new(position: Vec3) -> Self {
        Self { position }
    }

    /// One candle per side (+X, -X, +Z, -Z) of `pillar`.
    pub fn around_pillar(pillar: &Pillar) -> [Candle; 4] {
        let center = pillar.position();
        let side = pillar.dimensions().x / 2.0 + SIDE_GAP;
        let y = pillar.top() - DROP_FROM_TOP;
        [
            Candle::new(Vec3::new(center.x + side, y, center.z)),
            Candle::new(Vec3::new(center.x - side, y, center.z)),
            Candle::new(Vec3::new(center.x, y, center.z + side)),
            Candle::new(Vec3::new(center.x, y, center.z - side)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_around_pillar_places_four_sides() {
        let pillar = Pillar::new(Vec3::new(0.0, 10.0, 0.0), Vec3::new(5.0, 20.0, 5.0));
        let candles = Candle::around_pillar(&pillar);
        assert_eq!(candles[0].position, Vec3::new(3.0, 6.0, 0.0));
        assert_eq!(candles[1].position, Vec3::new(-3.0, 6.0, 0.0));
        assert_eq!(candles[2].position, Vec3::new(0.0, 6.0, 3.0));
        assert_eq!(candles[3].position, Vec3::new(0.0, 6.0, -3.0));
        for c in candles {
            assert!(!pillar.stops_projectile(c.position));
        }
    }
}
