//! Draw calls produced by the simulation each tick.
//!
//! The core never talks to a graphics API. Instead
//! [`build_draw_list_system`](crate::systems::render::build_draw_list_system)
//! rebuilds the [`DrawList`] every tick with one [`DrawCall`] per visible
//! object, and a [`Renderer`](crate::render::Renderer) consumes it.
use bevy_ecs::prelude::Resource;
use glam::{Mat4, Vec4};

/// Which mesh a draw call wants. Loading the actual geometry is up to the
/// renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeshHandle {
    /// Thin slab under the whole maze.
    Ground,
    /// Unit cube scaled to a pillar's dimensions.
    Cube,
    /// Projectile bolt.
    Ball,
    Skeleton,
    /// Candle model.
    Lantern,
    /// Unit cube scaled down to a particle.
    ParticleCube,
}

impl MeshHandle {
    pub fn name(&self) -> &'static str {
        match self {
            MeshHandle::Ground => "ground",
            MeshHandle::Cube => "cube",
            MeshHandle::Ball => "ball",
            MeshHandle::Skeleton => "skeleton",
            MeshHandle::Lantern => "lantern",
            MeshHandle::ParticleCube => "particle",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaterialParams {
    /// RGBA tint in [0, 1].
    pub color: Vec4,
    /// Draw with the red hit-flash.
    pub flashing: bool,
    /// Texture repeat count across each face.
    pub uv_tiling: f32,
}

impl Default for MaterialParams {
    fn default() -> Self {
        Self {
            color: Vec4::ONE,
            flashing: false,
            uv_tiling: 1.0,
        }
    }
}

impl MaterialParams {
    pub fn tinted(color: Vec4) -> Self {
        Self {
            color,
            ..Self::default()
        }
    }

    pub fn tiled(uv_tiling: f32) -> Self {
        Self {
            uv_tiling,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCall {
    pub transform: Mat4,
    pub mesh: MeshHandle,
    pub material: MaterialParams,
}

#[derive(Resource, Debug, Clone, Default)]
pub struct DrawList {
    pub calls: Vec<DrawCall>,
}

impl DrawList {
    pub fn clear(&mut self) {
        self.calls.clear();
    }

    pub fn push(&mut self, transform: Mat4, mesh: MeshHandle, material: MaterialParams) {
        self.calls.push(DrawCall {
            transform,
            mesh,
            material,
        });
    }

    pub fn len(&self) -> usize {
        self.calls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DrawCall> {
        self.calls.iter()
    }

    pub fn count_of(&self, mesh: MeshHandle) -> usize {
        self.calls.iter().filter(|c| c.mesh == mesh).count()
    }
}
