//! Projectile systems.
//!
//! - [`projectile_impact_system`] resolves hits for every live bolt and
//!   advances the ones that hit nothing.
//! - [`fire_projectile_system`] spawns a bolt on the fire edge.
//!
//! # Impact resolution
//!
//! Each bolt is tested at its current position, before it moves, against:
//!
//! 1. every living skeleton (center distance below the hit radius),
//! 2. every pillar (exact box, no buffer),
//! 3. the floor plane (`y < 0`).
//!
//! The first match wins and the remaining tests are skipped, so a bolt that
//! is simultaneously inside a skeleton's radius and a wall only damages the
//! skeleton. A hit emits one particle burst at the bolt's position, writes an
//! [`ImpactMessage`], and despawns the bolt. Collision is point-sampled each
//! tick; a fast bolt can pass through a thin wall between two samples.
use bevy_ecs::prelude::*;
use log::debug;

use crate::components::enemy::SkeletonEnemy;
use crate::components::pillar::Pillar;
use crate::components::projectile::Projectile;
use crate::events::impact::{
    EnemyKilledMessage, ImpactMessage, ImpactSurface, ProjectileFiredMessage,
};
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::InputState;
use crate::resources::particles::ParticleSystem;
use crate::resources::player::PlayerState;
use crate::resources::worldtime::WorldTime;

#[allow(clippy::too_many_arguments)]
pub fn projectile_impact_system(
    mut commands: Commands,
    world_time: Res<WorldTime>,
    config: Res<GameConfig>,
    mut particles: ResMut<ParticleSystem>,
    mut projectiles: Query<(Entity, &mut Projectile)>,
    mut enemies: Query<(Entity, &mut SkeletonEnemy)>,
    pillars: Query<(Entity, &Pillar)>,
    mut impacts: MessageWriter<ImpactMessage>,
    mut kills: MessageWriter<EnemyKilledMessage>,
) {
    let dt = world_time.delta;

    for (bolt, mut projectile) in projectiles.iter_mut() {
        let position = projectile.position();

        let mut surface = None;
        if let Some((enemy_entity, mut enemy)) = enemies
            .iter_mut()
            .find(|(_, e)| e.is_alive() && e.position().distance(position) < config.enemy_hit_radius)
        {
            if enemy.take_damage(config.enemy_damage) {
                debug!("Skeleton {:?} killed at {:?}", enemy_entity, enemy.position());
                kills.write(EnemyKilledMessage {
                    entity: enemy_entity,
                    position: enemy.position(),
                });
            }
            surface = Some(ImpactSurface::Enemy(enemy_entity));
        }
        if surface.is_none() {
            surface = pillars
                .iter()
                .find(|(_, pillar)| projectile.hits_pillar(pillar))
                .map(|(wall, _)| ImpactSurface::Wall(wall));
        }
        if surface.is_none() && projectile.below_floor() {
            surface = Some(ImpactSurface::Floor);
        }

        let Some(surface) = surface else {
            projectile.advance(dt);
            continue;
        };

        let granted = particles.emit(position, config.burst_particles);
        debug!(
            "Bolt {:?} hit {:?} at {:?} ({} particles)",
            bolt, surface, position, granted
        );
        impacts.write(ImpactMessage {
            position,
            surface,
            particles_requested: config.burst_particles,
            particles_granted: granted,
        });
        commands.entity(bolt).try_despawn();
    }
}

/// Spawn a bolt at the player when fire goes from released to held.
///
/// The bolt travels along the player's view direction at
/// `GameConfig::projectile_speed`. It joins the impact loop on the next tick.
pub fn fire_projectile_system(
    mut commands: Commands,
    input: Res<InputState>,
    player: Res<PlayerState>,
    config: Res<GameConfig>,
    mut fired: MessageWriter<ProjectileFiredMessage>,
) {
    if !input.fire.just_pressed {
        return;
    }
    let projectile = Projectile::fired(player.position, player.look_dir, config.projectile_speed);
    let velocity = projectile.velocity();
    let entity = commands.spawn(projectile).id();
    debug!("Fired bolt {:?} from {:?} with velocity {:?}", entity, player.position, velocity);
    fired.write(ProjectileFiredMessage {
        entity,
        origin: player.position,
        velocity,
    });
}
