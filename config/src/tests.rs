//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of configuration constants
//! and helper functions.

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_epsilon_is_positive() {
    assert!(EPSILON > 0.0, "EPSILON must be positive");
}

#[test]
fn test_degenerate_radius_larger_than_epsilon() {
    assert!(
        DEGENERATE_RADIUS > EPSILON,
        "DEGENERATE_RADIUS should be coarser than EPSILON"
    );
}

// =============================================================================
// LIMIT TESTS
// =============================================================================

#[test]
fn test_min_perimeter_segments_is_triangle() {
    // Three samples is the smallest closed loop
    assert_eq!(MIN_PERIMETER_SEGMENTS, 3);
}

#[test]
fn test_min_radius_segments_nonzero() {
    // Used as a divisor for the radial step
    assert!(MIN_RADIUS_SEGMENTS >= 1);
}

// =============================================================================
// DEFAULT TESTS
// =============================================================================

#[test]
fn test_defaults_within_limits() {
    assert!(DEFAULT_PERIMETER_SEGMENTS >= MIN_PERIMETER_SEGMENTS);
    assert!(DEFAULT_RADIUS_SEGMENTS >= MIN_RADIUS_SEGMENTS);
    assert!(DEFAULT_RADIUS_OUT >= DEFAULT_RADIUS_IN);
}

#[test]
fn test_default_sector_is_full_turn() {
    assert!(approx_equal(
        DEFAULT_SECTOR_TO - DEFAULT_SECTOR_FROM,
        std::f64::consts::TAU
    ));
}

#[test]
fn test_auto_smooth_angle_below_right_angle() {
    assert!(AUTO_SMOOTH_ANGLE > 0.0);
    assert!(AUTO_SMOOTH_ANGLE < std::f64::consts::FRAC_PI_2);
}

// =============================================================================
// APPROX TESTS
// =============================================================================

#[test]
fn test_approx_equal_within_epsilon() {
    let small_diff = EPSILON / 2.0;
    assert!(approx_equal(1.0, 1.0 + small_diff));
    assert!(approx_equal(1.0, 1.0 - small_diff));
    assert!(!approx_equal(1.0, 1.0 + EPSILON * 2.0));
}

#[test]
fn test_approx_zero() {
    assert!(approx_zero(0.0));
    assert!(approx_zero(-EPSILON / 2.0));
    assert!(!approx_zero(DEGENERATE_RADIUS));
}
