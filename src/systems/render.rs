//! Draw list construction.
//!
//! [`build_draw_list_system`] turns the current world into a flat
//! [`DrawList`]. It is the last system of the tick, so the list reflects the
//! state after every update. Draw order is ground, pillars, candles,
//! skeletons, bolts and finally particles (the only translucent objects).
//!
//! Transforms, as `translate · rotate · scale`:
//!
//! | object   | transform                                 | mesh           |
//! |----------|-------------------------------------------|----------------|
//! | ground   | `T(0, -0.01, 0) · S(1000, 0.02, 1000)`     | `Ground`       |
//! | pillar   | `T(pos) · S(dims)`                        | `Cube`         |
//! | candle   | `T(pos)`                                  | `Lantern`      |
//! | skeleton | `T(pos) · Ry(yaw) · Rz(rock)`             | `Skeleton`     |
//! | bolt     | `T(pos) · S(0.75)`                        | `Ball`         |
//! | particle | `T(pos) · S(0.12)`                        | `ParticleCube` |
//!
//! Dead skeletons are skipped.
use bevy_ecs::prelude::*;
use glam::{Mat4, Quat, Vec3};

use crate::components::candle::Candle;
use crate::components::enemy::SkeletonEnemy;
use crate::components::pillar::Pillar;
use crate::components::projectile::Projectile;
use crate::resources::drawlist::{DrawList, MaterialParams, MeshHandle};
use crate::resources::particles::{PARTICLE_SIZE, ParticleSystem};

const GROUND_EXTENT: f32 = 1000.0;
const GROUND_THICKNESS: f32 = 0.02;
const GROUND_TILING: f32 = 100.0;
const PILLAR_TILING: f32 = 4.0;
const PROJECTILE_SCALE: f32 = 0.75;

/// `translate · scale` without rotation.
fn placed(position: Vec3, scale: Vec3) -> Mat4 {
    Mat4::from_scale_rotation_translation(scale, Quat::IDENTITY, position)
}

/// Skeleton model matrix: yaw around +Y then the rocking tilt around +Z.
pub fn skeleton_transform(enemy: &SkeletonEnemy) -> Mat4 {
    Mat4::from_translation(enemy.position())
        * Mat4::from_rotation_y(enemy.yaw().to_radians())
        * Mat4::from_rotation_z(enemy.rock_angle().to_radians())
}

pub fn build_draw_list_system(
    mut list: ResMut<DrawList>,
    pillars: Query<&Pillar>,
    candles: Query<&Candle>,
    enemies: Query<&SkeletonEnemy>,
    projectiles: Query<&Projectile>,
    particles: Res<ParticleSystem>,
) {
    list.clear();

    list.push(
        placed(
            Vec3::new(0.0, -GROUND_THICKNESS / 2.0, 0.0),
            Vec3::new(GROUND_EXTENT, GROUND_THICKNESS, GROUND_EXTENT),
        ),
        MeshHandle::Ground,
        MaterialParams::tiled(GROUND_TILING),
    );

    for pillar in pillars.iter() {
        list.push(
            placed(pillar.position(), pillar.dimensions()),
            MeshHandle::Cube,
            MaterialParams::tiled(PILLAR_TILING),
        );
    }

    for candle in candles.iter() {
        list.push(
            Mat4::from_translation(candle.position),
            MeshHandle::Lantern,
            MaterialParams::default(),
        );
    }

    for enemy in enemies.iter().filter(|e| e.is_alive()) {
        list.push(
            skeleton_transform(enemy),
            MeshHandle::Skeleton,
            MaterialParams {
                flashing: enemy.is_flashing(),
                ..MaterialParams::default()
            },
        );
    }

    for projectile in projectiles.iter() {
        list.push(
            placed(projectile.position(), Vec3::splat(PROJECTILE_SCALE)),
            MeshHandle::Ball,
            MaterialParams::default(),
        );
    }

    for particle in particles.iter_alive() {
        list.push(
            placed(particle.position, Vec3::splat(PARTICLE_SIZE)),
            MeshHandle::ParticleCube,
            MaterialParams::tinted(particle.color),
        );
    }
}
