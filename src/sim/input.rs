//! Pointer click to plank offset

use glam::Vec2;

use crate::clamp;

/// A click on the plank, in client coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlankClick {
    /// Pointer position
    pub pointer: Vec2,
    /// Top-left corner of the plank's bounding box
    pub rect_origin: Vec2,
    /// On-screen plank width (CSS may stretch it away from the nominal length)
    pub rendered_width: f32,
}

impl PlankClick {
    pub fn new(pointer: Vec2, rect_origin: Vec2, rendered_width: f32) -> Self {
        Self {
            pointer,
            rect_origin,
            rendered_width,
        }
    }

    /// Signed offset from the plank center in rendered pixels.
    ///
    /// Clicks outside the box are pulled to the nearest edge. Non-finite
    /// coordinates land on the center.
    pub fn offset_from_center(&self) -> f32 {
        let width = if self.rendered_width.is_finite() {
            self.rendered_width.max(0.0)
        } else {
            0.0
        };
        let half = width / 2.0;

        let x_within = self.pointer.x - self.rect_origin.x;
        if !x_within.is_finite() {
            return 0.0;
        }

        let x_from_center = clamp(x_within, 0.0, width) - half;
        clamp(x_from_center, -half, half)
    }

    /// Offset from the plank center in nominal plank pixels.
    ///
    /// The rendered offset is scaled by `plank_length_px / rendered_width`, so a
    /// click at the rendered edge always maps to the nominal edge.
    pub fn to_plank_offset(&self, plank_length_px: f32) -> f32 {
        let width = self.rendered_width;
        if !width.is_finite() || width <= 0.0 {
            return 0.0;
        }
        self.offset_from_center() * plank_length_px / width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn click_at(x: f32) -> PlankClick {
        PlankClick::new(Vec2::new(x, 30.0), Vec2::new(100.0, 20.0), 400.0)
    }

    #[test]
    fn test_edges_and_center() {
        assert_eq!(click_at(100.0).offset_from_center(), -200.0);
        assert_eq!(click_at(300.0).offset_from_center(), 0.0);
        assert_eq!(click_at(500.0).offset_from_center(), 200.0);
    }

    #[test]
    fn test_outside_box_clamps_to_edge() {
        assert_eq!(click_at(40.0).offset_from_center(), -200.0);
        assert_eq!(click_at(900.0).offset_from_center(), 200.0);
    }

    #[test]
    fn test_vertical_position_ignored() {
        let a = PlankClick::new(Vec2::new(250.0, 0.0), Vec2::new(100.0, 20.0), 400.0);
        let b = PlankClick::new(Vec2::new(250.0, 999.0), Vec2::new(100.0, 20.0), 400.0);
        assert_eq!(a.offset_from_center(), b.offset_from_center());
        assert_eq!(a.offset_from_center(), -50.0);
    }

    #[test]
    fn test_rendered_width_differs_from_nominal() {
        // Plank squeezed to 300px on screen
        let click = PlankClick::new(Vec2::new(300.0, 0.0), Vec2::ZERO, 300.0);
        assert_eq!(click.offset_from_center(), 150.0);
    }

    #[test]
    fn test_wide_plank_scales_to_nominal() {
        // Plank stretched to 800px on screen, nominal 400px
        let at = |x: f32| PlankClick::new(Vec2::new(x, 0.0), Vec2::ZERO, 800.0);
        assert_eq!(at(800.0).to_plank_offset(400.0), 200.0);
        assert_eq!(at(600.0).to_plank_offset(400.0), 100.0);
        assert_eq!(at(400.0).to_plank_offset(400.0), 0.0);
        assert_eq!(at(0.0).to_plank_offset(400.0), -200.0);
    }

    #[test]
    fn test_narrow_plank_scales_to_nominal() {
        let click = PlankClick::new(Vec2::new(300.0, 0.0), Vec2::ZERO, 300.0);
        assert_eq!(click.to_plank_offset(400.0), 200.0);
    }

    #[test]
    fn test_nominal_width_is_unscaled() {
        assert_eq!(click_at(250.0).to_plank_offset(400.0), -50.0);
    }

    #[test]
    fn test_zero_width_plank_offset_is_center() {
        let click = PlankClick::new(Vec2::new(50.0, 0.0), Vec2::ZERO, 0.0);
        assert_eq!(click.to_plank_offset(400.0), 0.0);
    }

    #[test]
    fn test_degenerate_inputs_land_on_center() {
        let zero_width = PlankClick::new(Vec2::new(50.0, 0.0), Vec2::ZERO, 0.0);
        assert_eq!(zero_width.offset_from_center(), 0.0);

        let negative_width = PlankClick::new(Vec2::new(50.0, 0.0), Vec2::ZERO, -10.0);
        assert_eq!(negative_width.offset_from_center(), 0.0);

        let nan_pointer = PlankClick::new(Vec2::new(f32::NAN, 0.0), Vec2::ZERO, 400.0);
        assert_eq!(nan_pointer.offset_from_center(), 0.0);
    }
}
