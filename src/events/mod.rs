//! Messages exchanged between systems.
//!
//! Submodules:
//! - [`impact`] – projectile impacts, enemy kills and shots fired
pub mod impact;
