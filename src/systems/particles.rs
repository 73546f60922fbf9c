use bevy_ecs::prelude::*;

use crate::resources::particles::ParticleSystem;
use crate::resources::worldtime::WorldTime;

/// Age and integrate every live particle in the pool.
pub fn particle_update_system(world_time: Res<WorldTime>, mut particles: ResMut<ParticleSystem>) {
    particles.update(world_time.delta);
}
