//! Spooky Maze entry point.
//!
//! Runs the maze simulation either headless for a fixed number of ticks
//! (default) or in a raylib window when built with the `render` feature and
//! started with `--window`.
//!
//! # Main Loop
//!
//! 1. Load `GameConfig` from INI (defaults on failure) and apply CLI overrides
//! 2. Load the maze from JSON, or use the built-in layout
//! 3. Build the ECS world and the chained update schedule
//! 4. Each tick: poll input, advance time, run the schedule, hand the draw
//!    list to a renderer
//! 5. Log a summary of the run
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --ticks 1200 --fire-interval 0.25
//! cargo run --release --features render -- --window
//! ```

use clap::Parser;
use log::{error, info, warn};
use std::path::PathBuf;

use spookymaze::game::{build_update_schedule, build_world, tick_with_input};
use spookymaze::render::{HeadlessRenderer, render_draw_list};
use spookymaze::resources::drawlist::{DrawList, MeshHandle};
use spookymaze::resources::gameconfig::GameConfig;
use spookymaze::resources::input::ScriptedInput;
use spookymaze::resources::maze::MazeLayout;
use spookymaze::resources::particles::ParticleSystem;
use spookymaze::resources::stats::SimulationStats;

/// Spooky Maze: skeletons, pillars and magic bolts.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// INI configuration file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// JSON maze layout. Uses the built-in maze when omitted.
    #[arg(long, value_name = "PATH")]
    maze: Option<PathBuf>,

    /// Number of ticks to simulate when running headless.
    #[arg(long, default_value_t = 600)]
    ticks: u64,

    /// Particle RNG seed, overriding the config file.
    #[arg(long)]
    seed: Option<u64>,

    /// Seconds between scripted shots when running headless.
    #[arg(long, default_value_t = 0.5)]
    fire_interval: f32,

    /// Open a window instead of running headless.
    #[arg(long)]
    window: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        warn!("{}; using default settings", e);
    }
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }

    let layout = match &cli.maze {
        Some(path) => match MazeLayout::load_from_file(path) {
            Ok(layout) => layout,
            Err(e) => {
                error!("{}", e);
                std::process::exit(1);
            }
        },
        None => MazeLayout::default(),
    };

    let fixed_dt = config.fixed_dt;
    let mut world = build_world(config, layout);
    let mut schedule = build_update_schedule();

    if cli.window {
        run_windowed(&mut world, &mut schedule);
    } else {
        let mut input = ScriptedInput::new(cli.fire_interval);
        let mut renderer = HeadlessRenderer::new();
        info!("Running {} headless ticks at dt={:.4}", cli.ticks, fixed_dt);
        for _ in 0..cli.ticks {
            tick_with_input(&mut world, &mut schedule, &mut input, fixed_dt);
            render_draw_list(&mut renderer, world.resource::<DrawList>());
        }
        info!(
            "Rendered {} frames, {} skeleton draws, {} particle draws",
            renderer.frames(),
            renderer.total_count(MeshHandle::Skeleton),
            renderer.total_count(MeshHandle::ParticleCube)
        );
    }

    let stats = *world.resource::<SimulationStats>();
    info!(
        "Shots fired: {}, impacts: {} (enemy {}, wall {}, floor {}), skeletons killed: {}",
        stats.shots_fired,
        stats.total_impacts(),
        stats.impacts_enemy,
        stats.impacts_wall,
        stats.impacts_floor,
        stats.enemies_killed
    );
    info!(
        "Live particles at exit: {}, particles dropped: {}",
        world.resource::<ParticleSystem>().live_count(),
        stats.particles_dropped
    );
}

#[cfg(feature = "render")]
fn run_windowed(world: &mut bevy_ecs::world::World, schedule: &mut bevy_ecs::schedule::Schedule) {
    if let Err(e) = spookymaze::render::window::run_window(world, schedule) {
        error!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(not(feature = "render"))]
fn run_windowed(_world: &mut bevy_ecs::world::World, _schedule: &mut bevy_ecs::schedule::Schedule) {
    error!("--window needs a build with the `render` feature");
    std::process::exit(1);
}
