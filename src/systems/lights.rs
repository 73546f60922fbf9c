use bevy_ecs::prelude::*;
use log::trace;

use crate::components::candle::Candle;
use crate::components::projectile::Projectile;
use crate::resources::lights::LightSet;

/// Rebuild the frame's [`LightSet`]: every candle, then every live bolt.
pub fn collect_lights_system(
    mut lights: ResMut<LightSet>,
    candles: Query<&Candle>,
    projectiles: Query<&Projectile>,
) {
    lights.clear();
    for candle in candles.iter() {
        lights.push(candle.position);
    }
    for projectile in projectiles.iter() {
        lights.push(projectile.position());
    }
    if lights.dropped() > 0 {
        trace!("Light set full, dropped {} lights", lights.dropped());
    }
}
