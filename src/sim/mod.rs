//! Deterministic simulation module
//!
//! All seesaw logic lives here. This module must be pure and deterministic:
//! - Angle recomputed from the full object list on every change
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod input;
pub mod physics;
pub mod seesaw;
pub mod state;

pub use input::PlankClick;
pub use physics::{SideWeights, Torques, compute_angle_deg, compute_torques, side_weights};
pub use seesaw::{DropEvent, Seesaw};
pub use state::{PlacedObject, RngState, Side, SimulationState};
