//! Skeleton enemy agent and its behavior state machine.
//!
//! A [`SkeletonEnemy`] starts in [`SkeletonState::Idle`], walking a fixed
//! rectangle centered on its spawn point. Once something calls
//! [`SkeletonEnemy::set_agro`] (the aggro system does so when the player comes
//! close enough) it switches to [`SkeletonState::Agro`] for good and walks
//! straight at the player every tick.
//!
//! # Patrol
//!
//! The four corners are visited in the order 0 → 1 → 2 → 3 → 0:
//!
//! ```text
//!   0 (-w/2, -l/2) ---- 1 (+w/2, -l/2)
//!   |                        |
//!   3 (-w/2, +l/2) ---- 2 (+w/2, +l/2)
//! ```
//!
//! Facing during patrol always looks at the *target* corner, with a ±90°
//! correction depending on the corner's parity so the model's front stays
//! aligned with the rectangle's long edge.
//!
//! # Damage
//!
//! Health only goes down. The first time it reaches zero the enemy is dead
//! for good: it stops updating, stops colliding and is no longer drawn, but
//! the entity itself stays in the world.

use bevy_ecs::prelude::Component;
use glam::{Vec2, Vec3};

pub const START_HEALTH: f32 = 100.0;
/// Seconds the red hit-flash stays on after each hit.
pub const FLASH_DURATION: f32 = 0.2;
/// Distance at which a patrol corner counts as reached.
pub const CORNER_REACH_DIST: f32 = 0.2;
const ROCK_AMPLITUDE_DEG: f32 = 15.0;
const ROCK_SPEED: f32 = 6.0;

/// Behavior mode of a skeleton.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SkeletonState {
    /// Patrolling the spawn rectangle.
    #[default]
    Idle,
    /// Chasing the player. Terminal.
    Agro,
}

impl SkeletonState {
    /// One-way transition taken when the player is spotted.
    pub fn escalate(self) -> Self {
        match self {
            SkeletonState::Idle | SkeletonState::Agro => SkeletonState::Agro,
        }
    }
}

/// Movement tuning shared by all skeletons spawned from one config.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyTuning {
    pub idle_speed: f32,
    pub agro_speed: f32,
    /// Patrol rectangle size along X.
    pub patrol_width: f32,
    /// Patrol rectangle size along Z.
    pub patrol_length: f32,
}

impl Default for EnemyTuning {
    fn default() -> Self {
        Self {
            idle_speed: 1.5,
            agro_speed: 2.5,
            patrol_width: 6.0,
            patrol_length: 10.0,
        }
    }
}

#[derive(Component, Debug, Clone)]
pub struct SkeletonEnemy {
    position: Vec3,
    spawn_position: Vec3,
    health: f32,
    alive: bool,
    flash_timer: f32,
    patrol_corner: usize,
    patrol_timer: f32,
    agro_timer: f32,
    /// Facing in degrees around +Y.
    yaw: f32,
    state: SkeletonState,
    tuning: EnemyTuning,
}

impl SkeletonEnemy {
    pub fn new(spawn_position: Vec3) -> Self {
        Self::with_tuning(spawn_position, EnemyTuning::default())
    }

    pub fn with_tuning(spawn_position: Vec3, tuning: EnemyTuning) -> Self {
        Self {
            position: spawn_position,
            spawn_position,
            health: START_HEALTH,
            alive: true,
            flash_timer: 0.0,
            patrol_corner: 0,
            patrol_timer: 0.0,
            agro_timer: 0.0,
            yaw: 0.0,
            state: SkeletonState::Idle,
            tuning,
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn spawn_position(&self) -> Vec3 {
        self.spawn_position
    }

    pub fn health(&self) -> f32 {
        self.health
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn is_flashing(&self) -> bool {
        self.flash_timer > 0.0
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn state(&self) -> SkeletonState {
        self.state
    }

    pub fn patrol_corner(&self) -> usize {
        self.patrol_corner
    }

    pub fn patrol_timer(&self) -> f32 {
        self.patrol_timer
    }

    /// Corner waypoints of the patrol rectangle, in visiting order.
    pub fn patrol_corners(&self) -> [Vec3; 4] {
        let hw = self.tuning.patrol_width / 2.0;
        let hl = self.tuning.patrol_length / 2.0;
        let s = self.spawn_position;
        [
            s + Vec3::new(-hw, 0.0, -hl),
            s + Vec3::new(hw, 0.0, -hl),
            s + Vec3::new(hw, 0.0, hl),
            s + Vec3::new(-hw, 0.0, hl),
        ]
    }

    /// Switch to pursuit. Calling it again has no effect.
    pub fn set_agro(&mut self) {
        self.state = self.state.escalate();
    }

    /// Apply `amount` damage and restart the hit-flash.
    ///
    /// Returns `true` only on the hit that kills the enemy. Damage dealt to a
    /// dead enemy is ignored, and negative amounts count as zero.
    pub fn take_damage(&mut self, amount: f32) -> bool {
        if !self.alive {
            return false;
        }
        self.health -= amount.max(0.0);
        self.flash_timer = FLASH_DURATION;
        if self.health <= 0.0 {
            self.alive = false;
            return true;
        }
        false
    }

    /// Advance behavior by `dt` seconds toward/around `player_position`.
    pub fn update(&mut self, dt: f32, player_position: Vec3) {
        if !self.alive {
            return;
        }
        match self.state {
            SkeletonState::Idle => self.patrol(dt),
            SkeletonState::Agro => self.pursue(dt, player_position),
        }
        if self.flash_timer > 0.0 {
            self.flash_timer = (self.flash_timer - dt).max(0.0);
        }
    }

    fn patrol(&mut self, dt: f32) {
        let corners = self.patrol_corners();
        let to_target = corners[self.patrol_corner] - self.position;
        if to_target.length() < CORNER_REACH_DIST {
            self.patrol_corner = (self.patrol_corner + 1) % 4;
            self.patrol_timer = 0.0;
        } else {
            self.position += to_target.normalize() * self.tuning.idle_speed * dt;
            self.patrol_timer += dt;
        }

        let face = corners[self.patrol_corner] - self.position;
        if Vec2::new(face.x, face.z).length() > 0.001 {
            let base = face.z.atan2(face.x).to_degrees();
            self.yaw = if self.patrol_corner % 2 == 0 {
                base - 90.0
            } else {
                base + 90.0
            };
        }
    }

    fn pursue(&mut self, dt: f32, player_position: Vec3) {
        self.agro_timer += dt;
        let to_player = player_position - self.position;
        if Vec2::new(to_player.x, to_player.z).length() > 0.001 {
            self.yaw = -to_player.z.atan2(to_player.x).to_degrees() + 90.0;
        }
        if to_player.length() > 0.01 {
            self.position += to_player.normalize() * self.tuning.agro_speed * dt;
        }
    }

    /// Side-to-side sway of the model in degrees, for drawing only.
    pub fn rock_angle(&self) -> f32 {
        let t = match self.state {
            SkeletonState::Idle => self.patrol_timer,
            SkeletonState::Agro => self.agro_timer,
        };
        (t * ROCK_SPEED).sin() * ROCK_AMPLITUDE_DEG
    }
}
