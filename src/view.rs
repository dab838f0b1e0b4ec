//! Render model
//!
//! A `Frame` is everything the page shows, derived from a `Seesaw` without
//! touching the DOM. The platform layer only copies it onto elements.

use crate::sim::{Seesaw, Side};

/// One dropped object as drawn on the plank
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    /// CSS `left` inside the objects layer (pixels from the plank's left end)
    pub left_px: f32,
    pub weight_kg: u32,
    pub side: Side,
}

impl Marker {
    pub fn label(&self) -> String {
        format!("{}kg", self.weight_kg)
    }

    /// CSS class list for the marker element
    pub fn class_name(&self) -> &'static str {
        match self.side {
            Side::Left => "seesaw__object seesaw__object--left",
            Side::Right => "seesaw__object seesaw__object--right",
        }
    }
}

/// Numbers shown in the stats panel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stats {
    pub left_kg: u32,
    pub right_kg: u32,
    pub angle_deg: f32,
    pub next_weight_kg: u32,
}

impl Stats {
    pub fn left_text(&self) -> String {
        format!("{} kg", self.left_kg)
    }

    pub fn right_text(&self) -> String {
        format!("{} kg", self.right_kg)
    }

    pub fn tilt_text(&self) -> String {
        // Avoid printing "-0.0°" for tiny negative tilts
        let angle = if self.angle_deg.abs() < 0.05 {
            0.0
        } else {
            self.angle_deg
        };
        format!("{angle:.1}°")
    }

    pub fn next_weight_text(&self) -> String {
        format!("{} kg", self.next_weight_kg)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub angle_deg: f32,
    pub markers: Vec<Marker>,
    pub stats: Stats,
    /// Drop log, newest first
    pub history: Vec<String>,
}

impl Frame {
    pub fn build(seesaw: &Seesaw) -> Self {
        let half = seesaw.tuning().half_plank_length();
        let markers = seesaw
            .objects()
            .iter()
            .map(|obj| Marker {
                left_px: obj.x_from_center_px + half,
                weight_kg: obj.weight_kg,
                side: obj.side(),
            })
            .collect();

        let weights = seesaw.side_weights();
        Self {
            angle_deg: seesaw.angle_deg(),
            markers,
            stats: Stats {
                left_kg: weights.left_kg,
                right_kg: weights.right_kg,
                angle_deg: seesaw.angle_deg(),
                next_weight_kg: seesaw.next_weight_kg(),
            },
            history: seesaw.history().lines(),
        }
    }

    /// CSS transform for the plank element
    pub fn plank_transform(&self) -> String {
        format!("rotate({}deg)", self.angle_deg)
    }
}
