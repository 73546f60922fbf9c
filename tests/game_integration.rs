//! Full-schedule tests: level setup from the built-in maze and deterministic
//! headless runs.

use bevy_ecs::prelude::*;
use glam::Vec3;

use spookymaze::components::candle::Candle;
use spookymaze::components::enemy::SkeletonEnemy;
use spookymaze::components::pillar::Pillar;
use spookymaze::game::{build_update_schedule, build_world, spawn_level, tick, tick_with_input};
use spookymaze::render::{HeadlessRenderer, render_draw_list};
use spookymaze::resources::drawlist::{DrawList, MeshHandle};
use spookymaze::resources::gameconfig::GameConfig;
use spookymaze::resources::input::ScriptedInput;
use spookymaze::resources::lights::LightSet;
use spookymaze::resources::maze::MazeLayout;
use spookymaze::resources::particles::{MAX_PARTICLES, ParticleSystem};
use spookymaze::resources::player::PlayerState;
use spookymaze::resources::stats::SimulationStats;
use spookymaze::resources::worldtime::WorldTime;

const DT: f32 = 1.0 / 60.0;
const BUILTIN_PILLARS: usize = 154;
const BUILTIN_CANDLES: usize = 26 * 4;

fn count<C: Component>(world: &mut World) -> usize {
    world.query::<&C>().iter(world).count()
}

#[test]
fn builtin_level_spawns_expected_entities() {
    let mut world = build_world(GameConfig::new(), MazeLayout::default());

    assert_eq!(count::<Pillar>(&mut world), BUILTIN_PILLARS);
    assert_eq!(count::<SkeletonEnemy>(&mut world), 3);
    assert_eq!(count::<Candle>(&mut world), BUILTIN_CANDLES);
    assert_eq!(
        world.resource::<PlayerState>().position,
        Vec3::new(25.0, 1.0, 0.0)
    );

    let mut q = world.query::<&Pillar>();
    for p in q.iter(&world) {
        assert_eq!(p.position().y, 10.0);
        assert_eq!(p.dimensions(), Vec3::new(5.0, 20.0, 5.0));
    }
    let mut q = world.query::<&SkeletonEnemy>();
    let mut spawns: Vec<_> = q.iter(&world).map(|e| e.spawn_position()).collect();
    spawns.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.z.total_cmp(&b.z)));
    assert_eq!(
        spawns,
        vec![
            Vec3::new(-25.0, 0.83, -10.0),
            Vec3::new(-10.0, 0.83, -15.0),
            Vec3::new(-10.0, 0.83, 0.0),
        ]
    );
}

#[test]
fn candles_hang_on_every_sixth_pillar() {
    let mut world = World::new();
    world.insert_resource(MazeLayout::from_rows(&["1111111"]));
    let summary = spawn_level(&mut world);
    assert_eq!(summary.pillars, 7);
    assert_eq!(summary.enemies, 0);
    // Pillars 0 and 6.
    assert_eq!(summary.candles, 8);

    let mut q = world.query::<&Candle>();
    for c in q.iter(&world) {
        assert_eq!(c.position.y, 6.0);
    }
}

#[test]
fn spawned_skeletons_use_configured_tuning() {
    let mut config = GameConfig::new();
    config.enemy.patrol_width = 2.0;
    config.enemy.patrol_length = 2.0;
    let world_layout = MazeLayout::from_rows(&["2"]);
    let mut world = build_world(config, world_layout);

    let mut q = world.query::<&SkeletonEnemy>();
    let enemy = q.single(&world).unwrap();
    let corners = enemy.patrol_corners();
    assert_eq!(corners[2] - corners[0], Vec3::new(2.0, 0.0, 2.0));
}

#[test]
fn full_schedule_tick_updates_everything() {
    let mut world = build_world(GameConfig::new(), MazeLayout::default());
    let mut schedule = build_update_schedule();

    tick(&mut world, &mut schedule, DT);

    let time = world.resource::<WorldTime>();
    assert_eq!(time.frame_count, 1);
    assert!((time.delta - DT).abs() < 1e-6);

    let list = world.resource::<DrawList>();
    assert_eq!(list.count_of(MeshHandle::Ground), 1);
    assert_eq!(list.count_of(MeshHandle::Cube), BUILTIN_PILLARS);
    assert_eq!(list.count_of(MeshHandle::Lantern), BUILTIN_CANDLES);
    assert_eq!(list.count_of(MeshHandle::Skeleton), 3);
    assert_eq!(world.resource::<LightSet>().len(), BUILTIN_CANDLES);
}

#[test]
fn time_scale_slows_every_system() {
    let mut world = build_world(GameConfig::new(), MazeLayout::from_rows(&["0"]));
    world.insert_resource(WorldTime::default().with_time_scale(0.5));
    let mut schedule = build_update_schedule();

    tick(&mut world, &mut schedule, 0.5);
    tick(&mut world, &mut schedule, 0.5);
    let time = world.resource::<WorldTime>();
    assert!((time.delta - 0.25).abs() < 1e-6);
    assert!((time.elapsed - 0.5).abs() < 1e-6);
    assert_eq!(time.frame_count, 2);
}

#[test]
fn headless_run_fires_and_resolves_bolts() {
    let mut world = build_world(GameConfig::new(), MazeLayout::default());
    let mut schedule = build_update_schedule();
    let mut input = ScriptedInput::new(0.25);
    let mut renderer = HeadlessRenderer::new();

    for _ in 0..600 {
        tick_with_input(&mut world, &mut schedule, &mut input, DT);
        render_draw_list(&mut renderer, world.resource::<DrawList>());

        assert!(world.resource::<ParticleSystem>().live_count() <= MAX_PARTICLES);
        assert!(world.resource::<LightSet>().len() <= 512);
    }

    let stats = *world.resource::<SimulationStats>();
    assert!(stats.shots_fired >= 30, "{stats:?}");
    assert!(stats.total_impacts() > 0, "{stats:?}");
    assert!(stats.total_impacts() <= stats.shots_fired);
    assert!(stats.enemies_killed <= 3);
    assert_eq!(renderer.frames(), 600);
    assert_eq!(
        renderer.total_count(MeshHandle::Cube),
        600 * BUILTIN_PILLARS as u64
    );
}

#[test]
fn fire_interval_below_tick_keeps_shooting() {
    let mut world = build_world(GameConfig::new(), MazeLayout::from_rows(&["0"]));
    let mut schedule = build_update_schedule();
    let mut input = ScriptedInput::new(0.01);
    for _ in 0..120 {
        tick_with_input(&mut world, &mut schedule, &mut input, DT);
    }
    assert_eq!(world.resource::<SimulationStats>().shots_fired, 60);
}

#[test]
fn fresh_world_faces_negative_z() {
    let world = build_world(GameConfig::new(), MazeLayout::default());
    assert_eq!(world.resource::<PlayerState>().look_dir, Vec3::NEG_Z);
}

#[test]
fn same_seed_same_run() {
    let run = |seed: u64| {
        let mut config = GameConfig::new();
        config.seed = seed;
        let mut world = build_world(config, MazeLayout::default());
        let mut schedule = build_update_schedule();
        let mut input = ScriptedInput::new(0.2);
        for _ in 0..240 {
            tick_with_input(&mut world, &mut schedule, &mut input, DT);
        }
        let particles: Vec<_> = world
            .resource::<ParticleSystem>()
            .iter_alive()
            .map(|p| p.position)
            .collect();
        (*world.resource::<SimulationStats>(), particles)
    };

    let (stats_a, particles_a) = run(9);
    let (stats_b, particles_b) = run(9);
    assert_eq!(stats_a, stats_b);
    assert_eq!(particles_a, particles_b);
}

#[test]
fn bundled_maze_file_loads_and_spawns() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/assets/mazes/crypt.json");
    let layout = MazeLayout::load_from_file(path).unwrap();
    assert_eq!(layout.rows(), 10);
    assert_eq!(layout.width(), 11);

    let mut world = build_world(GameConfig::new(), layout);
    assert_eq!(count::<SkeletonEnemy>(&mut world), 3);
    assert_eq!(
        world.resource::<PlayerState>().position,
        Vec3::new(15.0, 1.0, 0.0)
    );
}
