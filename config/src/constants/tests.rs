//! Tests for the global configuration snapshot.

use super::*;

/// Ensures default constants are sane and positive.
#[test]
fn default_config_is_valid() {
    let cfg = GlobalConfig::default();
    assert!(cfg.tolerance > 0.0);
    assert_eq!(cfg.smooth_angle, AUTO_SMOOTH_ANGLE);
    assert_eq!(GlobalConfig::new(cfg.tolerance, cfg.smooth_angle), Ok(cfg));
}

/// Validates the builder rejects invalid values.
#[test]
fn new_validates_inputs() {
    assert_eq!(
        GlobalConfig::new(0.0, 0.5).unwrap_err(),
        ConfigError::InvalidTolerance(0.0)
    );
    assert_eq!(
        GlobalConfig::new(1.0e-9, 0.0).unwrap_err(),
        ConfigError::InvalidSmoothAngle(0.0)
    );
    assert_eq!(
        GlobalConfig::new(1.0e-9, 4.0).unwrap_err(),
        ConfigError::InvalidSmoothAngle(4.0)
    );
    assert!(GlobalConfig::new(f64::NAN, 0.5).is_err());
}

#[test]
fn config_error_display_names_the_field() {
    assert!(ConfigError::InvalidTolerance(-1.0)
        .to_string()
        .contains("tolerance"));
    assert!(ConfigError::InvalidSmoothAngle(9.0)
        .to_string()
        .contains("smooth_angle"));
}
