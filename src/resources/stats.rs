use bevy_ecs::prelude::Resource;

/// Running totals of gameplay events, fed from the message queues by
/// [`stats_system`](crate::systems::stats::stats_system) and logged at exit.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimulationStats {
    pub shots_fired: u64,
    pub impacts_enemy: u64,
    pub impacts_wall: u64,
    pub impacts_floor: u64,
    pub enemies_killed: u64,
    /// Particles requested but refused because the pool was full.
    pub particles_dropped: u64,
}

impl SimulationStats {
    pub fn total_impacts(&self) -> u64 {
        self.impacts_enemy + self.impacts_wall + self.impacts_floor
    }
}
