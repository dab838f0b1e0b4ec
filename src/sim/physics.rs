//! Torque balance
//!
//! Stateless: the angle is always recomputed from the full object list.

use super::state::{PlacedObject, Side};
use crate::clamp;
use crate::tuning::Tuning;

/// Accumulated torque on each side of the pivot
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Torques {
    pub left: f32,
    pub right: f32,
}

impl Torques {
    /// Positive when the right side dominates
    #[inline]
    pub fn net(&self) -> f32 {
        self.right - self.left
    }
}

/// Plain weight totals per side (display only, independent of lever arm)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SideWeights {
    pub left_kg: u32,
    pub right_kg: u32,
}

pub fn compute_torques(objects: &[PlacedObject]) -> Torques {
    let mut torques = Torques::default();
    for obj in objects {
        match obj.side() {
            Side::Left => torques.left += obj.torque(),
            Side::Right => torques.right += obj.torque(),
        }
    }
    torques
}

/// Map a torque imbalance to a tilt angle, saturating at the tuning's limit
pub fn compute_angle_deg(left_torque: f32, right_torque: f32, tuning: &Tuning) -> f32 {
    let raw = (right_torque - left_torque) / tuning.torque_scale;
    clamp(raw, -tuning.max_angle_deg, tuning.max_angle_deg)
}

/// Totals saturate at `u32::MAX` instead of wrapping
pub fn side_weights(objects: &[PlacedObject]) -> SideWeights {
    let mut weights = SideWeights::default();
    for obj in objects {
        match obj.side() {
            Side::Left => weights.left_kg = weights.left_kg.saturating_add(obj.weight_kg),
            Side::Right => weights.right_kg = weights.right_kg.saturating_add(obj.weight_kg),
        }
    }
    weights
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn angle_of(objects: &[PlacedObject]) -> f32 {
        let t = compute_torques(objects);
        compute_angle_deg(t.left, t.right, &Tuning::default())
    }

    #[test]
    fn test_empty_plank_is_level() {
        assert_eq!(angle_of(&[]), 0.0);
        assert_eq!(side_weights(&[]), SideWeights::default());
    }

    #[test]
    fn test_balanced_torques_level() {
        // 4kg * 50px == 2kg * 100px
        let objects = [PlacedObject::new(-50.0, 4), PlacedObject::new(100.0, 2)];
        let t = compute_torques(&objects);
        assert_eq!(t.left, 200.0);
        assert_eq!(t.right, 200.0);
        assert_eq!(angle_of(&objects), 0.0);
    }

    #[test]
    fn test_heavy_right_saturates() {
        let objects = [PlacedObject::new(100.0, 5)];
        let t = compute_torques(&objects);
        assert_eq!(t.right, 500.0);
        assert_eq!(t.left, 0.0);
        // raw angle would be 50
        assert_eq!(angle_of(&objects), 30.0);
    }

    #[test]
    fn test_light_left_unclamped() {
        let objects = [PlacedObject::new(-50.0, 2)];
        assert_eq!(compute_torques(&objects).left, 100.0);
        assert_eq!(angle_of(&objects), -10.0);
    }

    #[test]
    fn test_heavy_left_saturates_negative() {
        let objects = [PlacedObject::new(-200.0, 10), PlacedObject::new(-150.0, 3)];
        assert_eq!(angle_of(&objects), -30.0);
    }

    #[test]
    fn test_custom_scale_and_limit() {
        let tuning = Tuning {
            torque_scale: 100.0,
            max_angle_deg: 15.0,
            ..Tuning::default()
        };
        assert_eq!(compute_angle_deg(0.0, 500.0, &tuning), 5.0);
        assert_eq!(compute_angle_deg(0.0, 5000.0, &tuning), 15.0);
    }

    #[test]
    fn test_center_object_counts_right_without_torque() {
        let objects = [PlacedObject::new(0.0, 7)];
        assert_eq!(angle_of(&objects), 0.0);
        assert_eq!(
            side_weights(&objects),
            SideWeights {
                left_kg: 0,
                right_kg: 7
            }
        );
    }

    #[test]
    fn test_side_weights_ignore_lever_arm() {
        let objects = [
            PlacedObject::new(-10.0, 3),
            PlacedObject::new(-190.0, 4),
            PlacedObject::new(60.0, 9),
        ];
        assert_eq!(
            side_weights(&objects),
            SideWeights {
                left_kg: 7,
                right_kg: 9
            }
        );
    }

    #[test]
    fn test_side_weights_saturate() {
        let objects = [
            PlacedObject::new(-10.0, 4_000_000_000),
            PlacedObject::new(-20.0, 3_000_000_000),
            PlacedObject::new(5.0, 2),
        ];
        assert_eq!(
            side_weights(&objects),
            SideWeights {
                left_kg: u32::MAX,
                right_kg: 2
            }
        );
    }

    proptest! {
        #[test]
        fn prop_angle_always_bounded(
            objects in prop::collection::vec((-200.0_f32..=200.0, 1_u32..=10), 0..64)
        ) {
            let objects: Vec<PlacedObject> = objects
                .into_iter()
                .map(|(x, w)| PlacedObject::new(x, w))
                .collect();
            let angle = angle_of(&objects);
            prop_assert!((-30.0..=30.0).contains(&angle));
        }

        #[test]
        fn prop_mirrored_plank_negates_angle(
            objects in prop::collection::vec((1.0_f32..=200.0, 1_u32..=10), 1..16)
        ) {
            let right: Vec<PlacedObject> = objects.iter().map(|&(x, w)| PlacedObject::new(x, w)).collect();
            let left: Vec<PlacedObject> = objects.iter().map(|&(x, w)| PlacedObject::new(-x, w)).collect();
            prop_assert_eq!(angle_of(&right), -angle_of(&left));
        }
    }
}
