//! ECS components for entities.
//!
//! Every simulated object in the maze is an entity carrying exactly one of
//! these components. Each component owns its own position so systems can
//! query a single type per kind of object.
//!
//! Submodules overview:
//! - [`candle`] – static point light attached to a pillar side
//! - [`enemy`] – skeleton agent with its Idle/Agro state machine
//! - [`pillar`] – static axis-aligned wall block with movement/projectile tests
//! - [`projectile`] – constant-velocity bolt fired by the player

pub mod candle;
pub mod enemy;
pub mod pillar;
pub mod projectile;
