//! Simulation systems.
//!
//! Every system here runs once per tick in the chained schedule built by
//! [`build_update_schedule`](crate::game::build_update_schedule). Order
//! matters: bolts are resolved before skeletons move, and the draw list is
//! built last.
//!
//! Submodules overview
//! - [`enemy`] – aggro trigger and skeleton behavior update
//! - [`lights`] – collect candle and bolt positions into the light set
//! - [`particles`] – age the impact particle pool
//! - [`player`] – walk/sprint with sliding collision against pillars
//! - [`projectile`] – impact resolution and firing
//! - [`render`] – rebuild the draw list for the renderer
//! - [`stats`] – fold gameplay messages into counters
//! - [`time`] – advance simulation time

pub mod enemy;
pub mod lights;
pub mod particles;
pub mod player;
pub mod projectile;
pub mod render;
pub mod stats;
pub mod time;
