//! Per-tick player intent.
//!
//! The simulation never polls devices. An [`InputSource`] produces one
//! [`InputFrame`] per tick and [`InputState::apply`] folds it into the
//! [`InputState`] resource, deriving press/release edges from the previous
//! tick. Systems read only `InputState`.
//!
//! Two sources exist: [`ScriptedInput`] for headless runs and tests, and a
//! raylib keyboard/mouse source behind the `render` feature
//! ([`crate::render::window::RaylibInputSource`]).
use bevy_ecs::prelude::*;
use glam::Vec3;

use crate::resources::player::DEFAULT_LOOK_DIR;

/// Boolean action state with edge flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoolState {
    /// Whether the action is held this tick.
    pub active: bool,
    /// Whether the action went from released to held this tick.
    pub just_pressed: bool,
    /// Whether the action went from held to released this tick.
    pub just_released: bool,
}

impl BoolState {
    /// Update with this tick's raw level and recompute both edges.
    pub fn set(&mut self, active: bool) {
        let was_active = self.active;
        self.active = active;
        self.just_pressed = active && !was_active;
        self.just_released = !active && was_active;
    }
}

/// Raw levels reported by an input source for one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputFrame {
    pub fire: bool,
    pub sprint: bool,
    /// Forward/backward intent in [-1, 1].
    pub move_forward: f32,
    /// Strafe intent in [-1, 1], positive to the right.
    pub move_right: f32,
    /// Where the player is looking. Need not be normalized.
    pub look_dir: Vec3,
}

impl Default for InputFrame {
    fn default() -> Self {
        Self {
            fire: false,
            sprint: false,
            move_forward: 0.0,
            move_right: 0.0,
            look_dir: DEFAULT_LOOK_DIR,
        }
    }
}

/// Resource holding the gameplay-relevant input for the current tick.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct InputState {
    pub fire: BoolState,
    pub sprint: BoolState,
    pub move_forward: f32,
    pub move_right: f32,
    pub look_dir: Vec3,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            fire: BoolState::default(),
            sprint: BoolState::default(),
            move_forward: 0.0,
            move_right: 0.0,
            look_dir: DEFAULT_LOOK_DIR,
        }
    }
}

impl InputState {
    /// Fold one frame of raw input into the state. Axes are clamped to
    /// [-1, 1]; a zero look direction keeps the previous one.
    pub fn apply(&mut self, frame: &InputFrame) {
        self.fire.set(frame.fire);
        self.sprint.set(frame.sprint);
        self.move_forward = frame.move_forward.clamp(-1.0, 1.0);
        self.move_right = frame.move_right.clamp(-1.0, 1.0);
        if frame.look_dir.length_squared() > f32::EPSILON {
            self.look_dir = frame.look_dir;
        }
    }
}

/// Anything that can report the player's intent once per tick.
pub trait InputSource {
    fn poll(&mut self, dt: f32) -> InputFrame;
}

/// Headless input: holds fire for one tick every `fire_interval` seconds,
/// walks forward and slowly sweeps the look direction around +Y starting
/// from -Z. Fire is always released for at least one tick after a shot, so
/// intervals shorter than the tick fire every other tick.
#[derive(Debug, Clone)]
pub struct ScriptedInput {
    /// Seconds between shots; zero or negative disables firing.
    pub fire_interval: f32,
    /// Look sweep speed in radians per second.
    pub turn_rate: f32,
    pub move_forward: f32,
    pub sprint: bool,
    elapsed: f32,
    since_fire: f32,
    fired_last: bool,
}

impl ScriptedInput {
    pub fn new(fire_interval: f32) -> Self {
        Self {
            fire_interval,
            turn_rate: 0.5,
            move_forward: 0.0,
            sprint: false,
            elapsed: 0.0,
            since_fire: 0.0,
            fired_last: false,
        }
    }

    pub fn with_turn_rate(mut self, turn_rate: f32) -> Self {
        self.turn_rate = turn_rate;
        self
    }

    pub fn with_walk(mut self, move_forward: f32, sprint: bool) -> Self {
        self.move_forward = move_forward;
        self.sprint = sprint;
        self
    }
}

impl Default for ScriptedInput {
    fn default() -> Self {
        Self::new(0.5)
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self, dt: f32) -> InputFrame {
        self.elapsed += dt;
        self.since_fire += dt;

        let fire = !self.fired_last
            && self.fire_interval > 0.0
            && self.since_fire >= self.fire_interval;
        if fire {
            self.since_fire = 0.0;
        }
        self.fired_last = fire;

        let angle = self.elapsed * self.turn_rate;
        InputFrame {
            fire,
            sprint: self.sprint,
            move_forward: self.move_forward,
            move_right: 0.0,
            look_dir: Vec3::new(angle.sin(), -0.05, -angle.cos()),
        }
    }
}
