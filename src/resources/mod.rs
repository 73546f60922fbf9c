//! ECS resources made available to systems.
//!
//! This module groups the long-lived, single-instance data of the simulation:
//! configuration, the maze description consumed at setup, the player and its
//! input, the particle pool, and the per-tick outputs handed to a renderer.
//!
//! Overview
//! - `drawlist` – draw calls rebuilt every tick for the renderer
//! - `gameconfig` – gameplay and window settings loaded from INI
//! - `input` – per-tick player intent and the sources that produce it
//! - `lights` – bounded set of point lights for the current frame
//! - `maze` – grid of cell codes used to place pillars and skeletons
//! - `particles` – fixed-capacity pool of impact particles
//! - `player` – player position and view direction
//! - `stats` – running gameplay counters
//! - `worldtime` – simulation time and delta
pub mod drawlist;
pub mod gameconfig;
pub mod input;
pub mod lights;
pub mod maze;
pub mod particles;
pub mod player;
pub mod stats;
pub mod worldtime;
