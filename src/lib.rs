//! Spooky Maze simulation library.
//!
//! A first-person maze shooter reduced to its simulation core: pillars,
//! magic bolts, patrolling skeletons and pooled impact particles, driven by a
//! `bevy_ecs` schedule. Drawing is delegated to a [`render::Renderer`]; the
//! raylib window renderer is only built with the `render` feature.
//!
//! This module exposes the components, resources, systems and messages for
//! use by the binary and by integration tests.

pub mod components;
pub mod events;
pub mod game;
pub mod render;
pub mod resources;
pub mod systems;
