//! Content domain: tests for curve sampling, parsing, and validation.

use std::path::Path;

use approx::assert_relative_eq;
use rstest::rstest;

use super::{
    ConfigError, ControllerConfig, JointScaling, ResponseCurve, parse_json, parse_ron,
    validate_config,
};

const SHIPPED_CONFIG: &str = include_str!("../../assets/data/controller.ron");

// -----------------------------------------------------------------------------
// ResponseCurve tests
// -----------------------------------------------------------------------------

#[rstest]
#[case(-1.0, 10.0)]
#[case(0.0, 10.0)]
#[case(0.5, 15.0)]
#[case(1.0, 20.0)]
#[case(1.5, 10.0)]
#[case(2.0, 0.0)]
#[case(9.0, 0.0)]
fn test_curve_sampling(#[case] time: f32, #[case] expected: f32) {
    let curve = ResponseCurve::new(&[(0.0, 10.0), (1.0, 20.0), (2.0, 0.0)]);
    assert_relative_eq!(curve.sample(time), expected, epsilon = 1e-5);
}

#[test]
fn test_curve_bounds() {
    let curve = ResponseCurve::new(&[(0.25, 1.0), (0.75, 3.0)]);
    assert_eq!(curve.start(), 0.25);
    assert_eq!(curve.end(), 0.75);
}

#[test]
fn test_constant_curve() {
    let curve = ResponseCurve::constant(7.0);
    assert_eq!(curve.sample(-3.0), 7.0);
    assert_eq!(curve.sample(100.0), 7.0);
    assert_eq!(curve.start(), curve.end());
}

// -----------------------------------------------------------------------------
// Parsing tests
// -----------------------------------------------------------------------------

#[test]
fn test_shipped_config_matches_default() {
    let config = parse_ron(Path::new("controller.ron"), SHIPPED_CONFIG).unwrap();
    assert_eq!(config, ControllerConfig::default());
    assert!(validate_config(&config).is_empty());
}

#[test]
fn test_json_round_trip_of_default() {
    let json = serde_json::to_string(&ControllerConfig::default()).unwrap();
    let config = parse_json(Path::new("controller.json"), &json).unwrap();
    assert_eq!(config, ControllerConfig::default());
}

#[test]
fn test_joint_scaling_defaults_to_multiply_when_omitted() {
    let mut value = serde_json::to_value(ControllerConfig::default()).unwrap();
    value["grapple"]
        .as_object_mut()
        .unwrap()
        .remove("joint_scaling");
    let config = parse_json(Path::new("c.json"), &value.to_string()).unwrap();
    assert_eq!(config.grapple.joint_scaling, JointScaling::Multiply);
}

#[test]
fn test_parse_error_names_the_file() {
    let err = parse_ron(Path::new("broken.ron"), "(schema_version: )").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(..)));
    assert!(err.to_string().contains("broken.ron"));
}

// -----------------------------------------------------------------------------
// Validation tests
// -----------------------------------------------------------------------------

#[test]
fn test_empty_curve_is_rejected() {
    let mut config = ControllerConfig::default();
    config.motion.deceleration_curve.keys.clear();

    let errors = validate_config(&config);
    assert_eq!(errors.len(), 1);
    assert!(matches!(
        errors[0],
        ConfigError::EmptyCurve("motion.deceleration_curve")
    ));
}

#[test]
fn test_unordered_curve_is_rejected() {
    let mut config = ControllerConfig::default();
    config.motion.acceleration_curve = ResponseCurve::new(&[(0.0, 1.0), (0.0, 2.0)]);

    let errors = validate_config(&config);
    assert!(errors.iter().any(|e| matches!(
        e,
        ConfigError::UnorderedCurve {
            curve: "motion.acceleration_curve",
            index: 1
        }
    )));
}

#[rstest]
#[case(0.0)]
#[case(-1.0)]
#[case(f32::NAN)]
fn test_bad_jump_duration_is_rejected(#[case] duration: f32) {
    let mut config = ControllerConfig::default();
    config.jump.jump_total_duration = duration;
    assert_eq!(validate_config(&config).len(), 1);
}

#[rstest]
#[case::floaty_fall(0.5, -0.01, 1)]
#[case::plain_fall(1.0, 0.0, 0)]
#[case::threshold_while_rising(1.8, 5.0, 1)]
#[case::both(0.9, 1.0, 2)]
fn test_jump_shaping_bounds(
    #[case] landing_multiplier: f32,
    #[case] fall_threshold: f32,
    #[case] expected_errors: usize,
) {
    let mut config = ControllerConfig::default();
    config.jump.landing_gravity_multiplier = landing_multiplier;
    config.jump.fall_threshold = fall_threshold;

    let errors = validate_config(&config);
    assert_eq!(errors.len(), expected_errors);
    assert!(
        errors
            .iter()
            .all(|e| matches!(e, ConfigError::OutOfRange { .. }))
    );
}

#[test]
fn test_every_problem_is_reported() {
    let mut config = ControllerConfig::default();
    config.schema_version = 99;
    config.jump.jump_height = 0.0;
    config.grapple.shooting_speed = -5.0;
    config.grapple.min_rope_length = 500.0;

    let errors = validate_config(&config);
    assert_eq!(errors.len(), 4);
    assert!(
        errors
            .iter()
            .any(|e| matches!(e, ConfigError::InvertedRopeBounds { .. }))
    );
    assert!(
        errors
            .iter()
            .any(|e| matches!(e, ConfigError::SchemaVersion { found: 99, .. }))
    );
}

#[rstest]
#[case(JointScaling::Multiply, 1)]
#[case(JointScaling::Add, 0)]
fn test_negative_joint_modifier_depends_on_scaling(
    #[case] scaling: JointScaling,
    #[case] expected_errors: usize,
) {
    let mut config = ControllerConfig::default();
    config.grapple.joint_scaling = scaling;
    config.grapple.joint.min_distance_modifier = -20.0;
    assert_eq!(validate_config(&config).len(), expected_errors);
}
