//! Point lights gathered for the current frame.
//!
//! The shading path has room for a fixed number of lights, so the set is a
//! bounded [`ArrayVec`]. Candles are pushed first and projectiles after them;
//! anything past [`MAX_LIGHTS`] is dropped without error.
use arrayvec::ArrayVec;
use bevy_ecs::prelude::Resource;
use glam::Vec3;

pub const MAX_LIGHTS: usize = 512;

#[derive(Resource, Debug, Clone, Default)]
pub struct LightSet {
    positions: ArrayVec<Vec3, MAX_LIGHTS>,
    dropped: usize,
}

impl LightSet {
    pub fn clear(&mut self) {
        self.positions.clear();
        self.dropped = 0;
    }

    /// Add a light. Returns `false` when the set is full and the light was dropped.
    pub fn push(&mut self, position: Vec3) -> bool {
        if self.positions.try_push(position).is_err() {
            self.dropped += 1;
            return false;
        }
        true
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Lights that did not fit during the last collection.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }
}
