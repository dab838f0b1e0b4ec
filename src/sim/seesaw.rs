//! Simulation context
//!
//! Owns the object store, the seeded RNG and the drop history. Every mutation
//! recomputes the tilt from scratch before returning.

use rand_pcg::Pcg32;

use super::input::PlankClick;
use super::physics::{SideWeights, Torques, compute_angle_deg, compute_torques, side_weights};
use super::state::{PlacedObject, RngState, SimulationState};
use crate::history::History;
use crate::tuning::{Tuning, WeightMode};
use crate::{clamp, random_int_inclusive};

/// Result of a single drop
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DropEvent {
    pub object: PlacedObject,
    /// Position in the store (drop order)
    pub index: usize,
    /// Tilt after the drop
    pub angle_deg: f32,
}

#[derive(Debug, Clone)]
pub struct Seesaw {
    tuning: Tuning,
    rng_state: RngState,
    rng: Pcg32,
    state: SimulationState,
    history: History,
}

impl Seesaw {
    /// Create an empty, level seesaw. The seed fixes the whole weight sequence.
    pub fn new(tuning: Tuning, seed: u64) -> Self {
        let rng_state = RngState::new(seed);
        let mut rng = rng_state.to_rng();
        let next = random_int_inclusive(&mut rng, tuning.min_weight_kg, tuning.max_weight_kg);

        log::info!(
            "Seesaw ready (seed {}, {} weights, plank {}px)",
            seed,
            tuning.weight_mode.as_str(),
            tuning.plank_length_px
        );

        Self {
            tuning,
            rng_state,
            rng,
            state: SimulationState::new(next),
            history: History::new(),
        }
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn seed(&self) -> u64 {
        self.rng_state.seed
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn objects(&self) -> &[PlacedObject] {
        &self.state.objects
    }

    pub fn angle_deg(&self) -> f32 {
        self.state.angle_deg
    }

    pub fn next_weight_kg(&self) -> u32 {
        self.state.next_weight_kg
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn torques(&self) -> Torques {
        compute_torques(&self.state.objects)
    }

    pub fn side_weights(&self) -> SideWeights {
        side_weights(&self.state.objects)
    }

    /// Drop an object where the user clicked, scaled onto the nominal plank
    pub fn drop_at(&mut self, click: &PlankClick) -> DropEvent {
        self.place(click.to_plank_offset(self.tuning.plank_length_px))
    }

    /// Drop an object at a given offset from center.
    ///
    /// The offset is clamped onto the nominal plank; non-finite offsets land on
    /// the pivot.
    pub fn place(&mut self, x_from_center_px: f32) -> DropEvent {
        let half = self.tuning.half_plank_length();
        let x = if x_from_center_px.is_finite() {
            clamp(x_from_center_px, -half, half)
        } else {
            0.0
        };

        let weight_kg = match self.tuning.weight_mode {
            WeightMode::PerClick => self.roll_weight(),
            WeightMode::Preview => {
                let weight = self.state.next_weight_kg;
                self.state.next_weight_kg = self.roll_weight();
                weight
            }
        };

        let object = PlacedObject::new(x, weight_kg);
        self.state.objects.push(object);
        self.history.record(&object);
        self.recompute();

        log::debug!(
            "Dropped {}kg at {:.1}px ({} objects, tilt {:.1}°)",
            weight_kg,
            x,
            self.state.objects.len(),
            self.state.angle_deg
        );

        DropEvent {
            object,
            index: self.state.objects.len() - 1,
            angle_deg: self.state.angle_deg,
        }
    }

    /// Clear the plank and history and roll a fresh preview weight
    pub fn reset(&mut self) {
        let cleared = self.state.objects.len();
        self.state.objects.clear();
        self.history.clear();
        self.state.next_weight_kg = self.roll_weight();
        self.recompute();

        log::info!("Seesaw reset ({} objects cleared)", cleared);
    }

    /// Recompute the tilt from the full object list
    pub fn recompute(&mut self) {
        let torques = compute_torques(&self.state.objects);
        self.state.angle_deg = compute_angle_deg(torques.left, torques.right, &self.tuning);
    }

    fn roll_weight(&mut self) -> u32 {
        random_int_inclusive(
            &mut self.rng,
            self.tuning.min_weight_kg,
            self.tuning.max_weight_kg,
        )
    }
}
