//! Per-part draw transforms.
//!
//! Pure functions from (part, time) to the 4×4 matrix uploaded before each
//! draw call. The face and small hand stay fixed; the big hand rotates with
//! time; the marker drifts while rotating.

use glam::{Mat4, Vec3};

use crate::model::ClockPart;

/// Transform uploaded before drawing `part` at world time `time`.
pub fn part_transform(part: ClockPart, time: f32) -> Mat4 {
    match part {
        ClockPart::Face | ClockPart::SmallHand => Mat4::IDENTITY,
        ClockPart::BigHand => hand_rotation(time),
        ClockPart::Marker => marker_drift(time),
    }
}

/// Rotation by `time` radians about the normalized (0, 1, 1) axis.
pub fn hand_rotation(time: f32) -> Mat4 {
    Mat4::from_axis_angle(Vec3::new(0.0, 1.0, 1.0).normalize(), time)
}

/// The experimental marker transform: translate by (0.1·t, 0.1·t, 0) applied
/// after the hand rotation.
///
/// TODO: settle the marker composition order; rotating after the translation
/// instead may be what the drifting shape actually wants.
pub fn marker_drift(time: f32) -> Mat4 {
    Mat4::from_translation(Vec3::new(0.1 * time, 0.1 * time, 0.0)) * hand_rotation(time)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Recovers cos(angle) from a pure-rotation matrix via its 3×3 trace
    /// (trace = 1 + 2·cos θ).
    fn cos_angle(m: &Mat4) -> f32 {
        (m.x_axis.x + m.y_axis.y + m.z_axis.z - 1.0) / 2.0
    }

    // ── fixed parts ───────────────────────────────────────────────────────

    #[test]
    fn face_and_small_hand_are_identity_at_any_time() {
        for time in [0.0, 1.0, 5.0, 100.0] {
            assert_eq!(part_transform(ClockPart::Face, time), Mat4::IDENTITY);
            assert_eq!(part_transform(ClockPart::SmallHand, time), Mat4::IDENTITY);
        }
    }

    // ── big hand ──────────────────────────────────────────────────────────

    #[test]
    fn hand_rotation_angle_equals_time() {
        let m = hand_rotation(5.0);
        assert!((cos_angle(&m) - 5.0f32.cos()).abs() < 1e-5);
    }

    #[test]
    fn hand_rotation_has_no_translation() {
        let m = hand_rotation(2.5);
        assert_eq!(m.w_axis.x, 0.0);
        assert_eq!(m.w_axis.y, 0.0);
        assert_eq!(m.w_axis.z, 0.0);
    }

    #[test]
    fn hand_rotation_advances_monotonically_below_pi() {
        // cos is strictly decreasing on (0, π), so the recovered trace must
        // fall as time advances within that window.
        let mut previous = cos_angle(&hand_rotation(0.1));
        for step in 2..=10 {
            let current = cos_angle(&hand_rotation(0.1 * step as f32));
            assert!(current < previous);
            previous = current;
        }
    }

    // ── marker ────────────────────────────────────────────────────────────

    #[test]
    fn marker_translation_tracks_time() {
        let m = marker_drift(5.0);
        assert!((m.w_axis.x - 0.5).abs() < 1e-6);
        assert!((m.w_axis.y - 0.5).abs() < 1e-6);
        assert_eq!(m.w_axis.z, 0.0);
    }

    #[test]
    fn marker_translation_grows_monotonically() {
        let mut previous = marker_drift(0.0).w_axis.x;
        for step in 1..=10 {
            let current = marker_drift(0.5 * step as f32).w_axis.x;
            assert!(current > previous);
            previous = current;
        }
    }

    #[test]
    fn marker_carries_the_hand_rotation() {
        let marker = marker_drift(3.0);
        let rotation = hand_rotation(3.0);
        // Upper-left 3×3 must match the rotation exactly; the translation
        // was applied on the left and cannot touch it.
        assert_eq!(marker.x_axis, rotation.x_axis);
        assert_eq!(marker.y_axis, rotation.y_axis);
        assert_eq!(marker.z_axis, rotation.z_axis);
    }
}
