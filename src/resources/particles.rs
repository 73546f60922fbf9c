//! Pooled impact particle bursts.
//!
//! The [`ParticleSystem`] owns a fixed pool of [`MAX_PARTICLES`] slots that is
//! allocated once and never grows. A slot whose `life` is zero or below is
//! free. Emitting scans the pool linearly for free slots; when none are left
//! the remaining requests are dropped without complaint.
//!
//! # Particle motion
//!
//! - Direction is uniform on the unit sphere: `z ∈ [-1, 1)`, azimuth
//!   `θ ∈ [-π, π)`, `r = √(1 - z²)`.
//! - Speed is `2.5 + j · 1.5` with `j ∈ [-1, 1)`.
//! - Color is orange with a random green channel, alpha fading with life.
//! - A constant downward pull is applied while alive; a particle whose life
//!   runs out this tick stays where it is.
//!
//! # Related
//!
//! - [`crate::systems::particles::particle_update_system`] – ages the pool each tick
//! - [`crate::systems::projectile::projectile_impact_system`] – emits bursts on hits

use bevy_ecs::prelude::Resource;
use fastrand::Rng;
use glam::{Vec3, Vec4};

/// Pool capacity.
pub const MAX_PARTICLES: usize = 1000;
/// Seconds a freshly emitted particle lives.
pub const PARTICLE_LIFETIME: f32 = 1.2;
/// Drawn edge length of a particle cube.
pub const PARTICLE_SIZE: f32 = 0.12;
const PARTICLE_GRAVITY: Vec3 = Vec3::new(0.0, -1.5, 0.0);
const BASE_SPEED: f32 = 2.5;
const SPEED_JITTER: f32 = 1.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub position: Vec3,
    pub velocity: Vec3,
    /// RGBA in [0, 1].
    pub color: Vec4,
    /// Seconds left; `<= 0` marks a free slot.
    pub life: f32,
}

impl Default for Particle {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            velocity: Vec3::ZERO,
            color: Vec4::ZERO,
            life: 0.0,
        }
    }
}

impl Particle {
    pub fn is_alive(&self) -> bool {
        self.life > 0.0
    }
}

#[derive(Resource, Debug, Clone)]
pub struct ParticleSystem {
    particles: Vec<Particle>,
    rng: Rng,
}

impl Default for ParticleSystem {
    fn default() -> Self {
        Self::new(0)
    }
}

impl ParticleSystem {
    /// Allocate the whole pool up front with a seeded RNG.
    pub fn new(seed: u64) -> Self {
        Self {
            particles: vec![Particle::default(); MAX_PARTICLES],
            rng: Rng::with_seed(seed),
        }
    }

    pub fn capacity(&self) -> usize {
        self.particles.len()
    }

    /// Sample in [-1, 1).
    #[inline]
    fn signed_unit(&mut self) -> f32 {
        self.rng.f32() * 2.0 - 1.0
    }

    /// Index of the first free slot.
    pub fn find_unused(&self) -> Option<usize> {
        self.particles.iter().position(|p| p.life <= 0.0)
    }

    /// Spawn up to `count` particles at `origin`.
    ///
    /// Returns how many were actually granted; fewer than `count` means the
    /// pool ran out.
    pub fn emit(&mut self, origin: Vec3, count: usize) -> usize {
        for granted in 0..count {
            let Some(index) = self.find_unused() else {
                return granted;
            };

            let z = self.signed_unit();
            let theta = self.signed_unit() * std::f32::consts::PI;
            let r = (1.0 - z * z).sqrt();
            let dir = Vec3::new(r * theta.cos(), r * theta.sin(), z);
            let speed = BASE_SPEED + self.signed_unit() * SPEED_JITTER;
            let green = 0.5 + self.signed_unit() * 0.5;

            self.particles[index] = Particle {
                position: origin,
                velocity: dir * speed,
                color: Vec4::new(1.0, green, 0.1, 1.0),
                life: PARTICLE_LIFETIME,
            };
        }
        count
    }

    /// Age every live particle by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        for p in self.particles.iter_mut().filter(|p| p.life > 0.0) {
            p.life -= dt;
            if p.life > 0.0 {
                p.velocity += PARTICLE_GRAVITY * dt;
                p.position += p.velocity * dt;
                p.color.w = p.life / PARTICLE_LIFETIME;
            }
        }
    }

    pub fn live_count(&self) -> usize {
        self.particles.iter().filter(|p| p.is_alive()).count()
    }

    pub fn iter_alive(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter().filter(|p| p.is_alive())
    }

    /// Every slot, free or not, in pool order.
    pub fn slots(&self) -> &[Particle] {
        &self.particles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn test_pool_is_preallocated_and_empty() {
        let ps = ParticleSystem::new(1);
        assert_eq!(ps.capacity(), MAX_PARTICLES);
        assert_eq!(ps.live_count(), 0);
        assert_eq!(ps.find_unused(), Some(0));
    }

    #[test]
    fn test_emit_fills_first_free_slots() {
        let mut ps = ParticleSystem::new(1);
        assert_eq!(ps.emit(Vec3::new(1.0, 2.0, 3.0), 32), 32);
        assert_eq!(ps.live_count(), 32);
        assert_eq!(ps.find_unused(), Some(32));
        for p in ps.iter_alive() {
            assert_eq!(p.position, Vec3::new(1.0, 2.0, 3.0));
            assert!((p.life - PARTICLE_LIFETIME).abs() < EPSILON);
            assert!((p.color.w - 1.0).abs() < EPSILON);
        }
    }

    #[test]
    fn test_emit_caps_at_capacity() {
        let mut ps = ParticleSystem::new(7);
        assert_eq!(ps.emit(Vec3::ZERO, 2000), MAX_PARTICLES);
        assert_eq!(ps.live_count(), MAX_PARTICLES);
        assert_eq!(ps.find_unused(), None);
        assert_eq!(ps.emit(Vec3::ZERO, 5), 0);
        assert_eq!(ps.capacity(), MAX_PARTICLES);
    }

    #[test]
    fn test_spawn_distribution_bounds() {
        let mut ps = ParticleSystem::new(42);
        ps.emit(Vec3::ZERO, MAX_PARTICLES);
        for p in ps.iter_alive() {
            let speed = p.velocity.length();
            assert!((1.0 - EPSILON..=4.0 + EPSILON).contains(&speed), "speed {speed}");
            assert!((p.color.x - 1.0).abs() < EPSILON);
            assert!((0.0..=1.0).contains(&p.color.y));
            assert!((p.color.z - 0.1).abs() < EPSILON);
        }
    }

    #[test]
    fn test_alpha_tracks_life() {
        let mut ps = ParticleSystem::new(3);
        ps.emit(Vec3::ZERO, 10);
        for _ in 0..30 {
            ps.update(1.0 / 60.0);
            for p in ps.iter_alive() {
                assert!((p.color.w - p.life / PARTICLE_LIFETIME).abs() < EPSILON);
            }
        }
    }

    #[test]
    fn test_gravity_pulls_down() {
        let mut ps = ParticleSystem::new(3);
        ps.emit(Vec3::ZERO, 1);
        let before = ps.slots()[0].velocity;
        ps.update(0.1);
        let after = ps.slots()[0].velocity;
        assert!((after.y - (before.y - 0.15)).abs() < EPSILON);
        assert!((after.x - before.x).abs() < EPSILON);
    }

    #[test]
    fn test_expired_particle_freezes_and_is_reused() {
        let mut ps = ParticleSystem::new(5);
        ps.emit(Vec3::ZERO, 1);
        ps.update(1.0);
        let last_alive = ps.slots()[0];
        assert!(last_alive.is_alive());

        ps.update(0.5);
        let dead = ps.slots()[0];
        assert!(!dead.is_alive());
        assert_eq!(dead.position, last_alive.position);
        assert_eq!(dead.color, last_alive.color);

        ps.update(0.5);
        assert_eq!(ps.slots()[0].position, last_alive.position);

        assert_eq!(ps.find_unused(), Some(0));
        ps.emit(Vec3::ONE, 1);
        assert_eq!(ps.slots()[0].position, Vec3::ONE);
        assert_eq!(ps.live_count(), 1);
    }

    #[test]
    fn test_same_seed_same_burst() {
        let mut a = ParticleSystem::new(11);
        let mut b = ParticleSystem::new(11);
        a.emit(Vec3::ZERO, 16);
        b.emit(Vec3::ZERO, 16);
        assert_eq!(a.slots()[..16], b.slots()[..16]);
    }
}
