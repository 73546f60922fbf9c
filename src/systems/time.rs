//! Simulation clock.
//!
//! The clock is advanced outside the schedule, by the tick driver, so every
//! system in a pass sees the same [`WorldTime`](crate::resources::worldtime::WorldTime).
use bevy_ecs::prelude::*;

use crate::resources::worldtime::WorldTime;

/// Advance the simulation clock by one tick.
///
/// `dt` is the unscaled tick length in seconds. Every gameplay system reads
/// the scaled value from `WorldTime::delta`, so this must run before the
/// update schedule.
pub fn update_world_time(world: &mut World, dt: f32) {
    let mut wt = world.resource_mut::<WorldTime>();
    let scaled_dt = dt * wt.time_scale;
    wt.elapsed += scaled_dt;
    wt.delta = scaled_dt;
    wt.frame_count += 1;
}
