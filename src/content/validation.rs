//! Validation of a loaded controller configuration.
//!
//! Anything that would later divide by zero or sample an empty curve is
//! rejected here, before a simulation is built.

use super::data::*;
use super::error::ConfigError;

/// Pushes an error unless `$value` is finite and strictly positive.
macro_rules! check_positive {
    ($errors:expr, $field:expr, $value:expr) => {
        let value: f32 = $value;
        if !value.is_finite() {
            $errors.push(ConfigError::NotFinite { field: $field });
        } else if value <= 0.0 {
            $errors.push(ConfigError::NotPositive {
                field: $field,
                value,
            });
        }
    };
}

/// Pushes an error unless `$value` is finite and not negative.
macro_rules! check_non_negative {
    ($errors:expr, $field:expr, $value:expr) => {
        let value: f32 = $value;
        if !value.is_finite() {
            $errors.push(ConfigError::NotFinite { field: $field });
        } else if value < 0.0 {
            $errors.push(ConfigError::Negative {
                field: $field,
                value,
            });
        }
    };
}

/// Validate every section of the configuration.
/// Returns all problems found, empty if the configuration is usable.
pub fn validate_config(config: &ControllerConfig) -> Vec<ConfigError> {
    let mut errors = Vec::new();

    if config.schema_version != CONFIG_SCHEMA_VERSION {
        errors.push(ConfigError::SchemaVersion {
            found: config.schema_version,
            expected: CONFIG_SCHEMA_VERSION,
        });
    }

    // Motion
    let motion = &config.motion;
    validate_curve(&mut errors, "motion.acceleration_curve", &motion.acceleration_curve);
    validate_curve(&mut errors, "motion.deceleration_curve", &motion.deceleration_curve);
    check_non_negative!(errors, "motion.turn_acceleration", motion.turn_acceleration);
    check_positive!(errors, "motion.max_horizontal_speed", motion.max_horizontal_speed);
    check_positive!(errors, "motion.max_vertical_speed", motion.max_vertical_speed);

    // Jump
    let jump = &config.jump;
    check_positive!(errors, "jump.jump_height", jump.jump_height);
    check_positive!(errors, "jump.jump_total_duration", jump.jump_total_duration);
    check_non_negative!(errors, "jump.coyote_time", jump.coyote_time);
    check_non_negative!(errors, "jump.jump_buffer", jump.jump_buffer);
    // Falling must never be floatier than rising.
    let multiplier = jump.landing_gravity_multiplier;
    if !multiplier.is_finite() {
        errors.push(ConfigError::NotFinite {
            field: "jump.landing_gravity_multiplier",
        });
    } else if multiplier < 1.0 {
        errors.push(ConfigError::OutOfRange {
            field: "jump.landing_gravity_multiplier",
            value: multiplier,
            expected: "at least 1",
        });
    }
    if !jump.fall_threshold.is_finite() {
        errors.push(ConfigError::NotFinite {
            field: "jump.fall_threshold",
        });
    } else if jump.fall_threshold > 0.0 {
        errors.push(ConfigError::OutOfRange {
            field: "jump.fall_threshold",
            value: jump.fall_threshold,
            expected: "zero or negative",
        });
    }

    // Wall
    check_non_negative!(errors, "wall.jump_impulse", config.wall.jump_impulse);
    check_non_negative!(errors, "wall.reattach_lock", config.wall.reattach_lock);

    // Sensors
    check_positive!(
        errors,
        "sensors.ground_probe_length",
        config.sensors.ground_probe_length
    );
    check_positive!(
        errors,
        "sensors.wall_probe_length",
        config.sensors.wall_probe_length
    );

    validate_grapple(&mut errors, &config.grapple);

    errors
}

fn validate_grapple(errors: &mut Vec<ConfigError>, grapple: &GrappleTuning) {
    check_positive!(errors, "grapple.max_range", grapple.max_range);
    check_positive!(errors, "grapple.shooting_speed", grapple.shooting_speed);
    check_positive!(errors, "grapple.retrieve_speed", grapple.retrieve_speed);
    check_non_negative!(
        errors,
        "grapple.miss_retrieve_delay",
        grapple.miss_retrieve_delay
    );
    check_non_negative!(errors, "grapple.reel_in_speed", grapple.reel_in_speed);
    check_non_negative!(errors, "grapple.pay_out_speed", grapple.pay_out_speed);
    check_non_negative!(errors, "grapple.min_rope_length", grapple.min_rope_length);
    check_positive!(errors, "grapple.max_rope_length", grapple.max_rope_length);
    check_non_negative!(
        errors,
        "grapple.tether_gravity_multiplier",
        grapple.tether_gravity_multiplier
    );
    if grapple.min_rope_length > grapple.max_rope_length {
        errors.push(ConfigError::InvertedRopeBounds {
            min: grapple.min_rope_length,
            max: grapple.max_rope_length,
        });
    }
    for (field, value) in [
        ("grapple.muzzle_offset", grapple.muzzle_offset),
        ("grapple.rest_offset", grapple.rest_offset),
    ] {
        if value.iter().any(|v| !v.is_finite()) {
            errors.push(ConfigError::NotFinite { field });
        }
    }

    let joint = &grapple.joint;
    let modifiers = [
        ("grapple.joint.max_distance_modifier", joint.max_distance_modifier),
        ("grapple.joint.min_distance_modifier", joint.min_distance_modifier),
    ];
    match grapple.joint_scaling {
        // Scale factors must not flip the limits.
        JointScaling::Multiply => {
            for (field, value) in modifiers {
                check_non_negative!(errors, field, value);
            }
        }
        // Offsets may shorten the rope.
        JointScaling::Add => {
            for (field, value) in modifiers {
                if !value.is_finite() {
                    errors.push(ConfigError::NotFinite { field });
                }
            }
        }
    }
    check_non_negative!(errors, "grapple.joint.spring", joint.spring);
    check_non_negative!(errors, "grapple.joint.damper", joint.damper);
    check_positive!(errors, "grapple.joint.mass_scale", joint.mass_scale);
}

fn validate_curve(errors: &mut Vec<ConfigError>, name: &'static str, curve: &ResponseCurve) {
    if curve.keys.is_empty() {
        errors.push(ConfigError::EmptyCurve(name));
        return;
    }

    for (index, key) in curve.keys.iter().enumerate() {
        if !key.time.is_finite() || !key.value.is_finite() {
            errors.push(ConfigError::NotFinite { field: name });
            return;
        }
        if index > 0 && key.time <= curve.keys[index - 1].time {
            errors.push(ConfigError::UnorderedCurve { curve: name, index });
        }
    }
}
