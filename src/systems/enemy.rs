//! Skeleton systems.
//!
//! [`enemy_aggro_system`] must run before [`enemy_update_system`] so a
//! skeleton that notices the player this tick already chases this tick.
use bevy_ecs::prelude::*;
use log::debug;

use crate::components::enemy::{SkeletonEnemy, SkeletonState};
use crate::resources::gameconfig::GameConfig;
use crate::resources::player::PlayerState;
use crate::resources::worldtime::WorldTime;

/// Switch living skeletons within `GameConfig::aggro_radius` of the player to
/// pursuit. The switch is permanent.
pub fn enemy_aggro_system(
    config: Res<GameConfig>,
    player: Res<PlayerState>,
    mut enemies: Query<(Entity, &mut SkeletonEnemy)>,
) {
    for (entity, mut enemy) in enemies.iter_mut() {
        if !enemy.is_alive() || enemy.state() == SkeletonState::Agro {
            continue;
        }
        if enemy.position().distance(player.position) < config.aggro_radius {
            enemy.set_agro();
            debug!("Skeleton {:?} spotted the player at {:?}", entity, enemy.position());
        }
    }
}

pub fn enemy_update_system(
    world_time: Res<WorldTime>,
    player: Res<PlayerState>,
    mut enemies: Query<&mut SkeletonEnemy>,
) {
    let dt = world_time.delta;
    for mut enemy in enemies.iter_mut() {
        enemy.update(dt, player.position);
    }
}
