//! World construction and the per-tick driver.
//!
//! [`build_world`] inserts every resource the systems need and places the
//! level described by the [`MazeLayout`]. [`build_update_schedule`] returns
//! the chained gameplay schedule, and [`tick`] / [`tick_with_input`] advance
//! the simulation by one step. Both the headless binary loop and the raylib
//! window loop go through these functions.
use bevy_ecs::prelude::*;
use log::info;

use crate::components::candle::Candle;
use crate::components::enemy::SkeletonEnemy;
use crate::components::pillar::Pillar;
use crate::events::impact::{EnemyKilledMessage, ImpactMessage, ProjectileFiredMessage};
use crate::resources::drawlist::DrawList;
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::{InputSource, InputState};
use crate::resources::lights::LightSet;
use crate::resources::maze::{CellKind, MazeLayout};
use crate::resources::particles::ParticleSystem;
use crate::resources::player::PlayerState;
use crate::resources::stats::SimulationStats;
use crate::resources::worldtime::WorldTime;
use crate::systems::enemy::{enemy_aggro_system, enemy_update_system};
use crate::systems::lights::collect_lights_system;
use crate::systems::particles::particle_update_system;
use crate::systems::player::player_movement_system;
use crate::systems::projectile::{fire_projectile_system, projectile_impact_system};
use crate::systems::render::build_draw_list_system;
use crate::systems::stats::{stats_system, update_gameplay_messages};
use crate::systems::time::update_world_time;

/// Every n-th pillar, in spawn order, carries candles.
const CANDLE_PILLAR_STRIDE: usize = 6;

/// What [`spawn_level`] placed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LevelSummary {
    pub pillars: usize,
    pub enemies: usize,
    pub candles: usize,
}

/// Create a world holding every simulation resource and the spawned level.
pub fn build_world(config: GameConfig, layout: MazeLayout) -> World {
    let mut world = World::new();

    world.insert_resource(WorldTime::default());
    world.insert_resource(ParticleSystem::new(config.seed));
    world.insert_resource(PlayerState::at(layout.player_spawn_position()));
    world.insert_resource(InputState::default());
    world.insert_resource(LightSet::default());
    world.insert_resource(DrawList::default());
    world.insert_resource(SimulationStats::default());
    world.init_resource::<Messages<ImpactMessage>>();
    world.init_resource::<Messages<EnemyKilledMessage>>();
    world.init_resource::<Messages<ProjectileFiredMessage>>();
    world.insert_resource(config);
    world.insert_resource(layout);

    spawn_level(&mut world);
    world
}

/// Place pillars, skeletons and candles from the world's [`MazeLayout`].
///
/// Cells are visited row by row. Wall cells become pillars standing on the
/// ground; spawn cells become skeletons using the configured tuning. Pillars
/// 0, 6, 12, … get four candles each.
pub fn spawn_level(world: &mut World) -> LevelSummary {
    let layout = world.resource::<MazeLayout>().clone();
    let tuning = world
        .get_resource::<GameConfig>()
        .map(|c| c.enemy)
        .unwrap_or_default();

    let dims = glam::Vec3::new(
        layout.pillar_width,
        layout.pillar_height,
        layout.pillar_width,
    );
    let mut pillars = Vec::new();
    let mut enemies = Vec::new();
    for (row, col, kind) in layout.iter_cells() {
        match kind {
            CellKind::Wall => pillars.push(Pillar::new(
                layout.cell_to_world(row, col, layout.pillar_height / 2.0),
                dims,
            )),
            CellKind::EnemySpawn => enemies.push(SkeletonEnemy::with_tuning(
                layout.cell_to_world(row, col, layout.enemy_spawn_height),
                tuning,
            )),
            CellKind::Open => {}
        }
    }

    let candles: Vec<Candle> = pillars
        .iter()
        .step_by(CANDLE_PILLAR_STRIDE)
        .flat_map(Candle::around_pillar)
        .collect();

    let summary = LevelSummary {
        pillars: pillars.len(),
        enemies: enemies.len(),
        candles: candles.len(),
    };
    world.spawn_batch(pillars);
    world.spawn_batch(enemies);
    world.spawn_batch(candles);

    info!(
        "Spawned level: {} pillars, {} skeletons, {} candles",
        summary.pillars, summary.enemies, summary.candles
    );
    summary
}

/// The gameplay schedule, in its fixed order.
pub fn build_update_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems(
        (
            player_movement_system,
            projectile_impact_system,
            enemy_aggro_system,
            enemy_update_system,
            particle_update_system,
            fire_projectile_system,
            stats_system,
            collect_lights_system,
            build_draw_list_system,
            update_gameplay_messages,
        )
            .chain(),
    );
    schedule
}

/// Advance the clock by `dt` and run one pass of `schedule`.
pub fn tick(world: &mut World, schedule: &mut Schedule, dt: f32) {
    update_world_time(world, dt);
    schedule.run(world);
}

/// Poll `input`, fold it into [`InputState`], then [`tick`].
pub fn tick_with_input(
    world: &mut World,
    schedule: &mut Schedule,
    input: &mut dyn InputSource,
    dt: f32,
) {
    let frame = input.poll(dt);
    world.resource_mut::<InputState>().apply(&frame);
    tick(world, schedule, dt);
}
