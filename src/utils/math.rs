// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Math utilities shared by the 2D predicates

use nalgebra::{Point2, Vector2};

/// A position in the plane
pub type Pos = Point2<f64>;

/// A translation in the plane
pub type Delta = Vector2<f64>;

/// Absolute tolerance for every "on the boundary" comparison
pub const EPSILON: f64 = 1e-6;

/// Denominators smaller than this are treated as zero
pub const DEGENERATE_EPSILON: f64 = 1e-12;

/// Clamp a value between min and max
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Convert degrees to radians
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * std::f64::consts::PI / 180.0
}

/// Convert radians to degrees
pub fn rad_to_deg(rad: f64) -> f64 {
    rad * 180.0 / std::f64::consts::PI
}

/// Map any finite angle in degrees into [0, 360)
pub fn normalize_angle_deg(deg: f64) -> f64 {
    let a = deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if a >= 360.0 {
        0.0
    } else {
        a
    }
}

/// Direction from `origin` to `p` in degrees, normalized to [0, 360)
pub fn direction_deg(origin: &Pos, p: &Pos) -> f64 {
    let d = p - origin;
    normalize_angle_deg(rad_to_deg(d.y.atan2(d.x)))
}

/// Inclusive angular range test honoring wraparound through 0°.
///
/// When `start > end` (after normalization) the range crosses 0°.
pub fn angle_between_deg(angle: f64, start: f64, end: f64) -> bool {
    let s = normalize_angle_deg(start);
    let e = normalize_angle_deg(end);
    let within = |a: f64| {
        if s > e {
            a >= s - EPSILON || a <= e + EPSILON
        } else {
            a >= s - EPSILON && a <= e + EPSILON
        }
    };
    let a = normalize_angle_deg(angle);
    within(a) || within(a - 360.0)
}

/// Rotate `p` about `pivot` by `angle_deg` (counter-clockwise)
pub fn rotate_about(p: &Pos, pivot: &Pos, angle_deg: f64) -> Pos {
    let (s, c) = deg_to_rad(angle_deg).sin_cos();
    let r = p - pivot;
    Pos::new(pivot.x + c * r.x - s * r.y, pivot.y + s * r.x + c * r.y)
}

/// `|d| <= r` within [`EPSILON`], given the squared distance `d_sq`.
///
/// The slack applies to the distance, not its square, matching the
/// per-axis slack of the rectangle test.
pub fn within_radius(d_sq: f64, r: f64) -> bool {
    let reach = r + EPSILON;
    d_sq <= reach * reach
}

/// 2D cross product (z component of the 3D cross product)
pub fn cross(u: &Delta, v: &Delta) -> f64 {
    u.x * v.y - u.y * v.x
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(5.0, 0.0, 10.0), 5.0);
        assert_eq!(clamp(-5.0, 0.0, 10.0), 0.0);
        assert_eq!(clamp(15.0, 0.0, 10.0), 10.0);
    }

    #[test]
    fn test_within_radius_slack_is_on_distance() {
        assert!(within_radius(4.0, 2.0));
        assert!(within_radius((2.0 + 0.5e-6) * (2.0 + 0.5e-6), 2.0));
        // zero radius reaches EPSILON, not sqrt(EPSILON)
        assert!(within_radius(0.0, 0.0));
        assert!(!within_radius(1e-6, 0.0));
    }

    #[test]
    fn test_angle_conversion() {
        let rad = deg_to_rad(180.0);
        assert_relative_eq!(rad, std::f64::consts::PI);
        assert_relative_eq!(rad_to_deg(rad), 180.0);
    }

    #[test]
    fn test_normalize_angle() {
        assert_eq!(normalize_angle_deg(0.0), 0.0);
        assert_eq!(normalize_angle_deg(360.0), 0.0);
        assert_eq!(normalize_angle_deg(-90.0), 270.0);
        assert_eq!(normalize_angle_deg(725.0), 5.0);
        assert!(normalize_angle_deg(-1e-20) < 360.0);
    }

    #[test]
    fn test_angle_between_plain_range() {
        assert!(angle_between_deg(45.0, 0.0, 90.0));
        assert!(angle_between_deg(0.0, 0.0, 90.0));
        assert!(angle_between_deg(90.0, 0.0, 90.0));
        assert!(!angle_between_deg(91.0, 0.0, 90.0));
        assert!(!angle_between_deg(270.0, 0.0, 90.0));
    }

    #[test]
    fn test_angle_between_wraparound() {
        assert!(angle_between_deg(350.0, 300.0, 30.0));
        assert!(angle_between_deg(10.0, 300.0, 30.0));
        assert!(!angle_between_deg(180.0, 300.0, 30.0));
        // negative bounds normalize first
        assert!(angle_between_deg(0.0, -45.0, 45.0));
        assert!(angle_between_deg(359.9999999, 0.0, 10.0));
    }

    #[test]
    fn test_rotate_about() {
        let p = rotate_about(&Pos::new(2.0, 1.0), &Pos::new(1.0, 1.0), 90.0);
        assert_relative_eq!(p.x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(p.y, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_direction_deg() {
        let o = Pos::new(1.0, 1.0);
        assert_relative_eq!(direction_deg(&o, &Pos::new(2.0, 1.0)), 0.0);
        assert_relative_eq!(direction_deg(&o, &Pos::new(1.0, 0.0)), 270.0);
    }
}
