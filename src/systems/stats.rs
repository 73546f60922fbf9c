//! Gameplay counters and message queue upkeep.
use bevy_ecs::prelude::*;

use crate::events::impact::{
    EnemyKilledMessage, ImpactMessage, ImpactSurface, ProjectileFiredMessage,
};
use crate::resources::stats::SimulationStats;

/// Fold this tick's messages into [`SimulationStats`].
pub fn stats_system(
    mut stats: ResMut<SimulationStats>,
    mut impacts: MessageReader<ImpactMessage>,
    mut kills: MessageReader<EnemyKilledMessage>,
    mut fired: MessageReader<ProjectileFiredMessage>,
) {
    for impact in impacts.read() {
        match impact.surface {
            ImpactSurface::Enemy(_) => stats.impacts_enemy += 1,
            ImpactSurface::Wall(_) => stats.impacts_wall += 1,
            ImpactSurface::Floor => stats.impacts_floor += 1,
        }
        stats.particles_dropped +=
            impact.particles_requested.saturating_sub(impact.particles_granted) as u64;
    }
    stats.enemies_killed += kills.read().count() as u64;
    stats.shots_fired += fired.read().count() as u64;
}

/// Swap the gameplay message buffers. Runs once per tick after every reader.
pub fn update_gameplay_messages(
    mut impacts: ResMut<Messages<ImpactMessage>>,
    mut kills: ResMut<Messages<EnemyKilledMessage>>,
    mut fired: ResMut<Messages<ProjectileFiredMessage>>,
) {
    impacts.update();
    kills.update();
    fired.update();
}
