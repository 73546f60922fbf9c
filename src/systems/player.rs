//! Player movement with sliding collision.
//!
//! Movement intent comes from [`InputState`]: `move_forward` walks along the
//! look direction flattened onto the ground plane and `move_right` strafes
//! along `look × up`. The proposed step is resolved one axis at a time, X
//! first and then Z from the accepted X, against every pillar's movement box
//! (which is padded by [`MOVEMENT_BUFFER`](crate::components::pillar::MOVEMENT_BUFFER)).
//! An axis that would end inside a pillar is dropped, which lets the player
//! slide along walls instead of sticking to them. Height never changes.
use bevy_ecs::prelude::*;
use glam::Vec3;

use crate::components::pillar::Pillar;
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::InputState;
use crate::resources::player::PlayerState;
use crate::resources::worldtime::WorldTime;

pub fn player_movement_system(
    world_time: Res<WorldTime>,
    config: Res<GameConfig>,
    input: Res<InputState>,
    mut player: ResMut<PlayerState>,
    pillars: Query<&Pillar>,
) {
    let look = input.look_dir.normalize_or_zero();
    if look != Vec3::ZERO {
        player.look_dir = look;
    }

    let forward = Vec3::new(player.look_dir.x, 0.0, player.look_dir.z).normalize_or_zero();
    let right = forward.cross(Vec3::Y);
    let speed = if input.sprint.active {
        config.sprint_speed
    } else {
        config.walk_speed
    };
    let step = (forward * input.move_forward + right * input.move_right) * speed * world_time.delta;
    if step == Vec3::ZERO {
        return;
    }

    let blocked = |p: Vec3| pillars.iter().any(|pillar| pillar.blocks_movement(p));

    let mut position = player.position;
    let try_x = position + Vec3::new(step.x, 0.0, 0.0);
    if !blocked(try_x) {
        position = try_x;
    }
    let try_z = position + Vec3::new(0.0, 0.0, step.z);
    if !blocked(try_z) {
        position = try_z;
    }
    player.position = position;
}
