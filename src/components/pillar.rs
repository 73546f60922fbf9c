//! Static axis-aligned obstacle component.
//!
//! A [`Pillar`] is spawned for every wall cell of the maze and never changes
//! afterwards. It answers two point-in-box questions:
//!
//! - [`Pillar::blocks_movement`] – forgiving test with a 0.2 horizontal buffer,
//!   used for player sliding collision so the camera never clips into walls.
//! - [`Pillar::stops_projectile`] – exact test (no buffer), used for bolt
//!   impacts so shots grazing a wall do not explode in mid-air.
//!
//! The buffer is only applied on X and Z; the vertical extent is always exact.

use bevy_ecs::prelude::Component;
use glam::Vec3;

/// Horizontal tolerance used when testing player movement against walls.
pub const MOVEMENT_BUFFER: f32 = 0.2;
/// Horizontal tolerance used when testing projectile impacts against walls.
pub const PROJECTILE_BUFFER: f32 = 0.0;

#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Pillar {
    position: Vec3,
    dimensions: Vec3,
}

impl Pillar {
    /// Create a pillar centered at `position` with full extents `dimensions`.
    pub fn new(position: Vec3, dimensions: Vec3) -> Self {
        Self {
            position,
            dimensions,
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn dimensions(&self) -> Vec3 {
        self.dimensions
    }

    /// Box test with `buffer` added to the half extents on X and Z only.
    pub fn is_colliding(&self, point: Vec3, buffer: f32) -> bool {
        let half = self.dimensions * 0.5 + Vec3::new(buffer, 0.0, buffer);
        let d = (point - self.position).abs();
        d.x < half.x && d.y < half.y && d.z < half.z
    }

    /// Same predicate as [`Pillar::is_colliding`], kept as a separate entry
    /// point so projectile callers can tune their tolerance independently.
    pub fn is_colliding_for_projectile(&self, point: Vec3, buffer: f32) -> bool {
        self.is_colliding(point, buffer)
    }

    /// Movement collision with the default [`MOVEMENT_BUFFER`].
    pub fn blocks_movement(&self, point: Vec3) -> bool {
        self.is_colliding(point, MOVEMENT_BUFFER)
    }

    /// Projectile collision with the default [`PROJECTILE_BUFFER`].
    pub fn stops_projectile(&self, point: Vec3) -> bool {
        self.is_colliding_for_projectile(point, PROJECTILE_BUFFER)
    }

    /// Height of the pillar's top face in world units.
    pub fn top(&self) -> f32 {
        self.position.y + self.dimensions.y * 0.5
    }
}
