//! Magic bolt fired by the player.
//!
//! A [`Projectile`] moves in a straight line at constant velocity: no gravity,
//! no drag and no time-to-live. It leaves the world only when the impact
//! system finds it inside an enemy's hit radius, inside a pillar, or below the
//! floor plane.
//!
//! # Related
//!
//! - [`crate::systems::projectile::projectile_impact_system`] – resolves hits
//!   and advances surviving bolts
//! - [`crate::systems::projectile::fire_projectile_system`] – spawns bolts on
//!   the fire edge

use bevy_ecs::prelude::Component;
use glam::Vec3;

use crate::components::pillar::Pillar;

#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Projectile {
    position: Vec3,
    velocity: Vec3,
}

impl Projectile {
    pub fn new(position: Vec3, velocity: Vec3) -> Self {
        Self { position, velocity }
    }

    /// Create a bolt leaving `origin` along `direction` at `speed` units/s.
    ///
    /// A zero `direction` yields a bolt that never moves.
    pub fn fired(origin: Vec3, direction: Vec3, speed: f32) -> Self {
        Self::new(origin, direction.normalize_or_zero() * speed)
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    /// Integrate position linearly over `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        self.position += self.velocity * dt;
    }

    /// Exact-buffer pillar test at the bolt's current position.
    pub fn hits_pillar(&self, pillar: &Pillar) -> bool {
        pillar.stops_projectile(self.position)
    }

    /// True once the bolt has dipped under the floor plane.
    pub fn below_floor(&self) -> bool {
        self.position.y < 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    #[test]
    fn test_advance_is_linear_without_gravity() {
        let start = Vec3::new(1.0, 2.0, 3.0);
        let velocity = Vec3::new(0.0, 0.0, -25.0);
        let mut p = Projectile::new(start, velocity);
        for _ in 0..30 {
            p.advance(1.0 / 60.0);
        }
        let expected = start + velocity * 0.5;
        assert!(p.position().abs_diff_eq(expected, EPSILON));
        assert!((p.position().y - 2.0).abs() < EPSILON);
    }

    #[test]
    fn test_fired_scales_normalized_direction() {
        let p = Projectile::fired(Vec3::ZERO, Vec3::new(0.0, 0.0, -3.0), 25.0);
        assert!(p.velocity().abs_diff_eq(Vec3::new(0.0, 0.0, -25.0), EPSILON));
    }

    #[test]
    fn test_zero_direction_never_moves() {
        let mut p = Projectile::fired(Vec3::ONE, Vec3::ZERO, 25.0);
        p.advance(10.0);
        assert_eq!(p.position(), Vec3::ONE);
    }

    #[test]
    fn test_hits_pillar_uses_exact_box() {
        let pillar = Pillar::new(Vec3::new(5.0, 10.0, 5.0), Vec3::new(5.0, 20.0, 5.0));
        assert!(Projectile::new(Vec3::new(5.0, 0.5, 5.0), Vec3::ZERO).hits_pillar(&pillar));
        // Inside the movement buffer but outside the real wall.
        assert!(!Projectile::new(Vec3::new(7.6, 0.5, 5.0), Vec3::ZERO).hits_pillar(&pillar));
    }

    #[test]
    fn test_below_floor() {
        assert!(!Projectile::new(Vec3::new(0.0, 0.0, 0.0), Vec3::ZERO).below_floor());
        assert!(Projectile::new(Vec3::new(0.0, -0.01, 0.0), Vec3::ZERO).below_floor());
    }
}
