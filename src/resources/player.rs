use bevy_ecs::prelude::Resource;
use glam::Vec3;

/// View direction of a freshly spawned player.
pub const DEFAULT_LOOK_DIR: Vec3 = Vec3::NEG_Z;

/// The player is a resource rather than an entity: there is exactly one, and
/// enemies, projectiles and the draw list only ever need its position.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct PlayerState {
    pub position: Vec3,
    /// Unit-length view direction.
    pub look_dir: Vec3,
    /// Whether the view is first-person. Only the renderer cares.
    pub first_person: bool,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 1.0, 0.0),
            look_dir: DEFAULT_LOOK_DIR,
            first_person: true,
        }
    }
}

impl PlayerState {
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }
}
