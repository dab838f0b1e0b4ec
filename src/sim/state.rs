//! Object store and simulation state types

use rand::SeedableRng;
use rand_pcg::Pcg32;

/// Which half of the plank an object sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Negative offsets are left; zero counts as right.
    #[inline]
    pub fn of(x_from_center_px: f32) -> Self {
        if x_from_center_px < 0.0 {
            Side::Left
        } else {
            Side::Right
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

/// An object resting on the plank. Never mutated after placement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedObject {
    /// Signed distance from the pivot (pixels, negative = left)
    pub x_from_center_px: f32,
    pub weight_kg: u32,
}

impl PlacedObject {
    pub fn new(x_from_center_px: f32, weight_kg: u32) -> Self {
        Self {
            x_from_center_px,
            weight_kg,
        }
    }

    #[inline]
    pub fn side(&self) -> Side {
        Side::of(self.x_from_center_px)
    }

    #[inline]
    pub fn distance_px(&self) -> f32 {
        self.x_from_center_px.abs()
    }

    /// Weight times lever arm
    #[inline]
    pub fn torque(&self) -> f32 {
        self.weight_kg as f32 * self.distance_px()
    }
}

/// Seed the weight sequence is derived from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RngState {
    pub seed: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn to_rng(&self) -> Pcg32 {
        Pcg32::seed_from_u64(self.seed)
    }
}

/// Everything the simulation knows about the plank right now
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationState {
    /// Placed objects in drop order
    pub objects: Vec<PlacedObject>,
    /// Derived tilt (degrees, positive = right side down)
    pub angle_deg: f32,
    /// Weight the next drop will use in preview mode
    pub next_weight_kg: u32,
}

impl SimulationState {
    pub fn new(next_weight_kg: u32) -> Self {
        Self {
            objects: Vec::new(),
            angle_deg: 0.0,
            next_weight_kg,
        }
    }
}
