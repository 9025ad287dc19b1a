//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one tick = one physics step)
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod state;
pub mod tick;

pub use state::{Floor, FloorElement, Player, Sky, SkyElement, Stance, World};
pub use tick::{TickInput, tick};
