//! Gameplay messages written by the projectile systems.
//!
//! These are buffered [`Message`]s rather than observer events: nothing reacts
//! to them synchronously. [`stats_system`](crate::systems::stats::stats_system)
//! reads them to keep [`SimulationStats`](crate::resources::stats::SimulationStats)
//! current, and tests read them to check what happened during a tick.
use bevy_ecs::message::Message;
use bevy_ecs::prelude::Entity;
use glam::Vec3;

/// What a projectile struck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImpactSurface {
    Enemy(Entity),
    Wall(Entity),
    Floor,
}

/// A projectile was removed after hitting something.
#[derive(Message, Debug, Clone, Copy, PartialEq)]
pub struct ImpactMessage {
    /// Projectile position on the tick of the hit; also the burst origin.
    pub position: Vec3,
    pub surface: ImpactSurface,
    pub particles_requested: usize,
    /// Fewer than requested when the particle pool was full.
    pub particles_granted: usize,
}

/// A skeleton's health reached zero.
#[derive(Message, Debug, Clone, Copy, PartialEq)]
pub struct EnemyKilledMessage {
    pub entity: Entity,
    pub position: Vec3,
}

#[derive(Message, Debug, Clone, Copy, PartialEq)]
pub struct ProjectileFiredMessage {
    pub entity: Entity,
    pub origin: Vec3,
    pub velocity: Vec3,
}
