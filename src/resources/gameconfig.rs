//! Game configuration resource.
//!
//! Manages game settings loaded from an INI configuration file. Provides
//! defaults for safe startup and methods to load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 1600
//! height = 900
//! target_fps = 60
//!
//! [simulation]
//! fixed_dt = 0.0166667
//! seed = 24301
//!
//! [player]
//! walk_speed = 1.0
//! sprint_speed = 5.0
//! projectile_speed = 25.0
//!
//! [combat]
//! enemy_hit_radius = 1.0
//! enemy_damage = 50.0
//! aggro_radius = 7.0
//! burst_particles = 32
//!
//! [enemy]
//! idle_speed = 1.5
//! agro_speed = 2.5
//! patrol_width = 6.0
//! patrol_length = 10.0
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::{info, warn};
use std::path::PathBuf;

use crate::components::enemy::EnemyTuning;

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 1600;
const DEFAULT_WINDOW_HEIGHT: u32 = 900;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_FIXED_DT: f32 = 1.0 / 60.0;
const DEFAULT_SEED: u64 = 0x5EED;
const DEFAULT_WALK_SPEED: f32 = 1.0;
const DEFAULT_SPRINT_SPEED: f32 = 5.0;
const DEFAULT_PROJECTILE_SPEED: f32 = 25.0;
const DEFAULT_ENEMY_HIT_RADIUS: f32 = 1.0;
const DEFAULT_ENEMY_DAMAGE: f32 = 50.0;
const DEFAULT_AGGRO_RADIUS: f32 = 7.0;
const DEFAULT_BURST_PARTICLES: usize = 32;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Game configuration resource.
///
/// Holds window settings plus every gameplay constant of the simulation so
/// they can be tuned without rebuilding.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Target frames per second.
    pub target_fps: u32,
    /// Seconds simulated per tick when running headless.
    pub fixed_dt: f32,
    /// Seed for the particle RNG.
    pub seed: u64,
    pub walk_speed: f32,
    pub sprint_speed: f32,
    pub projectile_speed: f32,
    /// A bolt closer than this to a living enemy hits it.
    pub enemy_hit_radius: f32,
    pub enemy_damage: f32,
    /// Enemies closer than this to the player start chasing.
    pub aggro_radius: f32,
    /// Particles requested per impact burst.
    pub burst_particles: usize,
    pub enemy: EnemyTuning,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            fixed_dt: DEFAULT_FIXED_DT,
            seed: DEFAULT_SEED,
            walk_speed: DEFAULT_WALK_SPEED,
            sprint_speed: DEFAULT_SPRINT_SPEED,
            projectile_speed: DEFAULT_PROJECTILE_SPEED,
            enemy_hit_radius: DEFAULT_ENEMY_HIT_RADIUS,
            enemy_damage: DEFAULT_ENEMY_DAMAGE,
            aggro_radius: DEFAULT_AGGRO_RADIUS,
            burst_particles: DEFAULT_BURST_PARTICLES,
            enemy: EnemyTuning::default(),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file {:?}: {}", self.config_path, e))?;
        self.apply_ini(&config);

        info!(
            "Loaded config: {}x{} window, fps={}, dt={:.4}, seed={:#x}, bolt speed={}, aggro radius={}",
            self.window_width,
            self.window_height,
            self.target_fps,
            self.fixed_dt,
            self.seed,
            self.projectile_speed,
            self.aggro_radius
        );

        Ok(())
    }

    /// Parse configuration from INI text. Used for embedded defaults and tests.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .read(text.to_string())
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        self.apply_ini(&config);
        Ok(())
    }

    fn apply_ini(&mut self, config: &Ini) {
        let float = |section: &str, key: &str| config.getfloat(section, key).ok().flatten();
        let uint = |section: &str, key: &str| config.getuint(section, key).ok().flatten();
        let uint32 = |section: &str, key: &str| {
            let v = uint(section, key)?;
            let narrowed = u32::try_from(v).ok();
            if narrowed.is_none() {
                warn!("[{}] {} = {} is out of range; keeping the default", section, key, v);
            }
            narrowed
        };

        // [window] section
        if let Some(width) = uint32("window", "width") {
            self.window_width = width;
        }
        if let Some(height) = uint32("window", "height") {
            self.window_height = height;
        }
        if let Some(fps) = uint32("window", "target_fps") {
            self.target_fps = fps;
        }

        // [simulation] section
        if let Some(dt) = float("simulation", "fixed_dt") {
            self.fixed_dt = dt as f32;
        }
        if let Some(seed) = uint("simulation", "seed") {
            self.seed = seed;
        }

        // [player] section
        if let Some(v) = float("player", "walk_speed") {
            self.walk_speed = v as f32;
        }
        if let Some(v) = float("player", "sprint_speed") {
            self.sprint_speed = v as f32;
        }
        if let Some(v) = float("player", "projectile_speed") {
            self.projectile_speed = v as f32;
        }

        // [combat] section
        if let Some(v) = float("combat", "enemy_hit_radius") {
            self.enemy_hit_radius = v as f32;
        }
        if let Some(v) = float("combat", "enemy_damage") {
            self.enemy_damage = v as f32;
        }
        if let Some(v) = float("combat", "aggro_radius") {
            self.aggro_radius = v as f32;
        }
        if let Some(v) = uint("combat", "burst_particles") {
            self.burst_particles = v as usize;
        }

        // [enemy] section
        if let Some(v) = float("enemy", "idle_speed") {
            self.enemy.idle_speed = v as f32;
        }
        if let Some(v) = float("enemy", "agro_speed") {
            self.enemy.agro_speed = v as f32;
        }
        if let Some(v) = float("enemy", "patrol_width") {
            self.enemy.patrol_width = v as f32;
        }
        if let Some(v) = float("enemy", "patrol_length") {
            self.enemy.patrol_length = v as f32;
        }
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        config.set("window", "width", Some(self.window_width.to_string()));
        config.set("window", "height", Some(self.window_height.to_string()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));

        config.set("simulation", "fixed_dt", Some(self.fixed_dt.to_string()));
        config.set("simulation", "seed", Some(self.seed.to_string()));

        config.set("player", "walk_speed", Some(self.walk_speed.to_string()));
        config.set("player", "sprint_speed", Some(self.sprint_speed.to_string()));
        config.set(
            "player",
            "projectile_speed",
            Some(self.projectile_speed.to_string()),
        );

        config.set(
            "combat",
            "enemy_hit_radius",
            Some(self.enemy_hit_radius.to_string()),
        );
        config.set("combat", "enemy_damage", Some(self.enemy_damage.to_string()));
        config.set("combat", "aggro_radius", Some(self.aggro_radius.to_string()));
        config.set(
            "combat",
            "burst_particles",
            Some(self.burst_particles.to_string()),
        );

        config.set("enemy", "idle_speed", Some(self.enemy.idle_speed.to_string()));
        config.set("enemy", "agro_speed", Some(self.enemy.agro_speed.to_string()));
        config.set(
            "enemy",
            "patrol_width",
            Some(self.enemy.patrol_width.to_string()),
        );
        config.set(
            "enemy",
            "patrol_length",
            Some(self.enemy.patrol_length.to_string()),
        );

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_defaults_match_gameplay_constants() {
        let c = GameConfig::new();
        assert!(approx_eq(c.projectile_speed, 25.0));
        assert!(approx_eq(c.enemy_hit_radius, 1.0));
        assert!(approx_eq(c.enemy_damage, 50.0));
        assert!(approx_eq(c.aggro_radius, 7.0));
        assert_eq!(c.burst_particles, 32);
        assert_eq!(c.enemy, EnemyTuning::default());
        assert_eq!(c.window_size(), (1600, 900));
    }

    #[test]
    fn test_load_from_str_overrides_present_keys_only() {
        let mut c = GameConfig::new();
        c.load_from_str(
            "[combat]\nenemy_damage = 25\nburst_particles = 8\n\n[enemy]\nagro_speed = 4.0\n",
        )
        .unwrap();
        assert!(approx_eq(c.enemy_damage, 25.0));
        assert_eq!(c.burst_particles, 8);
        assert!(approx_eq(c.enemy.agro_speed, 4.0));
        assert!(approx_eq(c.enemy.idle_speed, 1.5));
        assert!(approx_eq(c.aggro_radius, 7.0));
    }

    #[test]
    fn test_oversized_window_values_keep_defaults() {
        let mut c = GameConfig::new();
        c.load_from_str("[window]\nwidth = 4294967296\nheight = 720\ntarget_fps = 99999999999\n")
            .unwrap();
        assert_eq!(c.window_size(), (1600, 720));
        assert_eq!(c.target_fps, 60);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let mut c = GameConfig::with_path("./definitely/not/here/config.ini");
        assert!(c.load_from_file().is_err());
        assert!(approx_eq(c.projectile_speed, 25.0));
    }

    #[test]
    fn test_save_then_load_preserves_tuning() {
        let path = std::env::temp_dir().join(format!("spookymaze-config-{}.ini", std::process::id()));
        let mut c = GameConfig::with_path(&path);
        c.aggro_radius = 12.5;
        c.seed = 99;
        c.enemy.patrol_length = 4.0;
        c.save_to_file().unwrap();

        let mut loaded = GameConfig::with_path(&path);
        loaded.load_from_file().unwrap();
        let _ = std::fs::remove_file(&path);
        assert!(approx_eq(loaded.aggro_radius, 12.5));
        assert_eq!(loaded.seed, 99);
        assert!(approx_eq(loaded.enemy.patrol_length, 4.0));
    }
}
