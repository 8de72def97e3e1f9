//! Grapple domain: unit tests for firing, travel, tether, and shot accounting.

use approx::assert_relative_eq;
use bevy::prelude::Vec2;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rstest::rstest;

use super::{
    FireOutcome, FireRejection, GrappleContext, GrappleRig, GrappleState, TetherConstraint,
    TipTravel, TravelFrame,
};
use crate::content::{GrappleTuning, JointScaling, SensorTuning};
use crate::core::{MotionEvent, QueryLayer};
use crate::movement::GroundSensor;
use crate::test_support::FakeWorld;

const AIR: Vec2 = Vec2::new(0.0, 200.0);
const FLOOR: Vec2 = Vec2::new(0.0, 10.0);
const DT: f32 = 0.025;

fn tuning() -> GrappleTuning {
    GrappleTuning {
        enabled: true,
        max_range: 20.0,
        max_ropes: 1,
        shooting_speed: 40.0,
        retrieve_speed: 40.0,
        miss_retrieve_delay: 0.05,
        muzzle_offset: [0.0, 0.0],
        rest_offset: [1.0, 0.0],
        min_rope_length: 1.0,
        max_rope_length: 50.0,
        ..GrappleTuning::default()
    }
}

/// Floor at y = 0 and an anchor wall five units right of both test positions.
fn world() -> FakeWorld {
    FakeWorld::new()
        .with_floor(0.0)
        .with_box(QueryLayer::Attachable, Vec2::new(5.0, 190.0), Vec2::new(15.0, 210.0))
        .with_box(QueryLayer::Attachable, Vec2::new(5.0, 0.0), Vec2::new(15.0, 20.0))
}

fn sensor() -> GroundSensor {
    GroundSensor::new(&SensorTuning::default())
}

fn ctx<'a>(world: &'a FakeWorld, sensor: &'a GroundSensor, body: Vec2) -> GrappleContext<'a> {
    GrappleContext {
        physics: world,
        sensor,
        body_position: body,
        dt: DT,
    }
}

/// Aim right from `body` and fire.
fn fire_right(rig: &mut GrappleRig, tuning: &GrappleTuning, ctx: &GrappleContext<'_>) -> FireOutcome {
    rig.track_aim(Some(ctx.body_position + Vec2::new(100.0, 0.0)));
    rig.fire(tuning, ctx)
}

fn advance_until(
    rig: &mut GrappleRig,
    tuning: &GrappleTuning,
    ctx: &GrappleContext<'_>,
    state: GrappleState,
) -> Vec<MotionEvent> {
    let mut events = Vec::new();
    for _ in 0..200 {
        if rig.state() == state {
            return events;
        }
        events.extend(rig.advance(tuning, ctx));
    }
    panic!("rig never reached {state:?}, stuck in {:?}", rig.state());
}

fn attached_rig(tuning: &GrappleTuning, ctx: &GrappleContext<'_>) -> GrappleRig {
    let mut rig = GrappleRig::new(tuning, ctx.body_position);
    fire_right(&mut rig, tuning, ctx);
    advance_until(&mut rig, tuning, ctx, GrappleState::Attached);
    rig
}

// -----------------------------------------------------------------------------
// Firing
// -----------------------------------------------------------------------------

#[test]
fn test_hit_arrives_after_distance_over_speed() {
    let (tuning, world, sensor) = (tuning(), world(), sensor());
    let ctx = ctx(&world, &sensor, AIR);
    let mut rig = GrappleRig::new(&tuning, AIR);

    let outcome = fire_right(&mut rig, &tuning, &ctx);
    assert_eq!(
        outcome,
        FireOutcome::Hit {
            anchor: Vec2::new(5.0, 200.0),
            distance: 5.0
        }
    );
    assert_eq!(rig.state(), GrappleState::Shooting);
    assert_eq!(rig.remaining_shots(), 0);

    // 5 units at 40 units/s: 0.125 s, five ticks of 0.025 s.
    for _ in 0..4 {
        assert_eq!(rig.advance(&tuning, &ctx), None);
        assert_eq!(rig.state(), GrappleState::Shooting);
    }
    let event = rig.advance(&tuning, &ctx);
    assert_eq!(rig.state(), GrappleState::Attached);
    assert!(matches!(event, Some(MotionEvent::GrappleAttached { anchor, .. }) if anchor == Vec2::new(5.0, 200.0)));
    assert_eq!(rig.tip_position(), Vec2::new(5.0, 200.0));
    assert!(rig.tether().is_some());
}

#[test]
fn test_tip_moves_linearly_while_shooting() {
    let (tuning, world, sensor) = (tuning(), world(), sensor());
    let ctx = ctx(&world, &sensor, AIR);
    let mut rig = GrappleRig::new(&tuning, AIR);
    fire_right(&mut rig, &tuning, &ctx);

    rig.advance(&tuning, &ctx);
    rig.advance(&tuning, &ctx);
    assert_relative_eq!(rig.tip_position().x, 2.0, epsilon = 1e-4);
    assert_relative_eq!(rig.tip_position().y, 200.0);
}

#[test]
fn test_miss_keeps_shot_and_retrieves_after_delay() {
    let (tuning, world, sensor) = (tuning(), world(), sensor());
    let ctx = ctx(&world, &sensor, AIR);
    let mut rig = GrappleRig::new(&tuning, AIR);

    rig.track_aim(Some(AIR + Vec2::new(-100.0, 0.0)));
    assert_eq!(rig.fire(&tuning, &ctx), FireOutcome::Miss);
    assert_eq!(rig.remaining_shots(), 1);

    // 20 units of range at 40 units/s: 0.5 s out.
    for _ in 0..20 {
        rig.advance(&tuning, &ctx);
    }
    assert_eq!(rig.state(), GrappleState::Shooting);
    assert_relative_eq!(rig.tip_position().x, -20.0, epsilon = 1e-3);

    // Then hang for the miss delay before the pull back starts.
    rig.advance(&tuning, &ctx);
    assert_eq!(rig.state(), GrappleState::Shooting);
    let released = rig.advance(&tuning, &ctx);
    assert_eq!(released, None);
    assert_eq!(rig.state(), GrappleState::Retrieving);

    let events = advance_until(&mut rig, &tuning, &ctx, GrappleState::Released);
    assert!(events.is_empty());
    assert_eq!(rig.remaining_shots(), 1);
    assert_eq!(rig.tip_position(), AIR + tuning.rest_offset());
}

#[test]
fn test_disabled_rig_rejects_fire() {
    let (world, sensor) = (world(), sensor());
    let tuning = GrappleTuning {
        enabled: false,
        ..tuning()
    };
    let ctx = ctx(&world, &sensor, AIR);
    let mut rig = GrappleRig::new(&tuning, AIR);

    assert_eq!(
        fire_right(&mut rig, &tuning, &ctx),
        FireOutcome::Rejected(FireRejection::Disabled)
    );
    assert_eq!(rig.state(), GrappleState::Ready);

    rig.enable();
    assert!(matches!(fire_right(&mut rig, &tuning, &ctx), FireOutcome::Hit { .. }));
}

#[rstest]
#[case::shooting(GrappleState::Shooting)]
#[case::attached(GrappleState::Attached)]
#[case::retrieving(GrappleState::Retrieving)]
fn test_fire_rejected_while_busy(#[case] busy: GrappleState) {
    let (world, sensor) = (world(), sensor());
    let tuning = GrappleTuning {
        max_ropes: 3,
        ..tuning()
    };
    let ctx = ctx(&world, &sensor, AIR);
    let mut rig = GrappleRig::new(&tuning, AIR);
    fire_right(&mut rig, &tuning, &ctx);
    if busy == GrappleState::Retrieving {
        rig.retrieve(&tuning, &ctx);
    }
    advance_until(&mut rig, &tuning, &ctx, busy);
    let shots = rig.remaining_shots();

    assert_eq!(
        fire_right(&mut rig, &tuning, &ctx),
        FireOutcome::Rejected(FireRejection::Busy(busy))
    );
    assert_eq!(rig.state(), busy);
    assert_eq!(rig.remaining_shots(), shots);
}

#[test]
fn test_out_of_shots_until_landing() {
    let (tuning, world, sensor) = (tuning(), world(), sensor());
    let ctx = ctx(&world, &sensor, AIR);
    let mut rig = attached_rig(&tuning, &ctx);

    let released = rig.retrieve(&tuning, &ctx);
    assert_eq!(released, Some(MotionEvent::GrappleReleased { refilled: false }));
    advance_until(&mut rig, &tuning, &ctx, GrappleState::Released);
    assert_eq!(rig.remaining_shots(), 0);
    assert_eq!(
        fire_right(&mut rig, &tuning, &ctx),
        FireOutcome::Rejected(FireRejection::OutOfShots)
    );

    rig.on_landed();
    assert_eq!(rig.state(), GrappleState::Ready);
    assert_eq!(rig.remaining_shots(), 1);
}

// -----------------------------------------------------------------------------
// Retrieval
// -----------------------------------------------------------------------------

#[test]
fn test_grounded_retrieval_refills_shots() {
    let (tuning, world, sensor) = (tuning(), world(), sensor());
    let ctx = ctx(&world, &sensor, FLOOR);
    let mut rig = attached_rig(&tuning, &ctx);
    assert_eq!(rig.remaining_shots(), 0);

    let released = rig.retrieve(&tuning, &ctx);
    assert_eq!(released, Some(MotionEvent::GrappleReleased { refilled: true }));
    assert_eq!(rig.remaining_shots(), 1);
    assert_eq!(rig.state(), GrappleState::Retrieving);
    assert!(rig.tether().is_none());

    advance_until(&mut rig, &tuning, &ctx, GrappleState::Released);
    assert_eq!(rig.remaining_shots(), 1);
}

#[test]
fn test_retrieval_travel_time_matches_rest_distance() {
    let (tuning, world, sensor) = (tuning(), world(), sensor());
    let ctx = ctx(&world, &sensor, AIR);
    let mut rig = attached_rig(&tuning, &ctx);
    rig.retrieve(&tuning, &ctx);

    // Tip at +5, rest at +1: 4 units at 40 units/s is four ticks.
    for _ in 0..3 {
        rig.advance(&tuning, &ctx);
        assert_eq!(rig.state(), GrappleState::Retrieving);
    }
    rig.advance(&tuning, &ctx);
    assert_eq!(rig.state(), GrappleState::Released);
}

#[test]
fn test_retrieve_when_stowed_keeps_shots() {
    let (tuning, world, sensor) = (tuning(), world(), sensor());
    let ctx = ctx(&world, &sensor, FLOOR);
    let mut rig = GrappleRig::new(&tuning, FLOOR);

    assert_eq!(rig.retrieve(&tuning, &ctx), None);
    assert_eq!(rig.state(), GrappleState::Retrieving);
    assert_eq!(rig.remaining_shots(), 1);
    advance_until(&mut rig, &tuning, &ctx, GrappleState::Released);
}

#[test]
fn test_landing_while_attached_keeps_state() {
    let (tuning, world, sensor) = (tuning(), world(), sensor());
    let ctx = ctx(&world, &sensor, AIR);
    let mut rig = attached_rig(&tuning, &ctx);

    rig.on_landed();
    assert_eq!(rig.state(), GrappleState::Attached);
    assert_eq!(rig.remaining_shots(), 0);
}

#[test]
fn test_stow_releases_tether() {
    let (tuning, world, sensor) = (tuning(), world(), sensor());
    let ctx = ctx(&world, &sensor, AIR);
    let mut rig = attached_rig(&tuning, &ctx);

    let released = rig.stow(&tuning, FLOOR);
    assert_eq!(released, Some(MotionEvent::GrappleReleased { refilled: false }));
    assert_eq!(rig.state(), GrappleState::Released);
    assert!(rig.tether().is_none());
    assert_eq!(rig.tip_position(), FLOOR + tuning.rest_offset());
    assert_eq!(rig.stow(&tuning, FLOOR), None);
}

// -----------------------------------------------------------------------------
// Rappel and aim
// -----------------------------------------------------------------------------

#[test]
fn test_rappel_reels_in_and_pays_out_within_bounds() {
    let (world, sensor) = (world(), sensor());
    let tuning = GrappleTuning {
        reel_in_speed: 40.0,
        pay_out_speed: 80.0,
        min_rope_length: 2.0,
        max_rope_length: 8.0,
        ..tuning()
    };
    let ctx = ctx(&world, &sensor, AIR);
    let mut rig = attached_rig(&tuning, &ctx);
    let max_of = |rig: &GrappleRig| rig.tether().map(|t| t.max_distance).unwrap_or_default();
    assert_relative_eq!(max_of(&rig), 5.0);

    rig.rappel(&tuning, 1.0, 0.05);
    assert_relative_eq!(max_of(&rig), 3.0);
    rig.rappel(&tuning, 1.0, 1.0);
    assert_relative_eq!(max_of(&rig), 2.0);

    rig.rappel(&tuning, -1.0, 0.025);
    assert_relative_eq!(max_of(&rig), 4.0);
    rig.rappel(&tuning, -5.0, 1.0);
    assert_relative_eq!(max_of(&rig), 8.0);

    let tether = rig.tether().copied().unwrap_or_else(|| panic!("tether missing"));
    assert!(tether.min_distance >= 2.0 && tether.min_distance <= tether.max_distance);
}

#[test]
fn test_rappel_ignored_unless_attached() {
    let tuning = tuning();
    let mut rig = GrappleRig::new(&tuning, AIR);
    let before = rig.clone();

    rig.rappel(&tuning, 1.0, 1.0);
    assert_eq!(rig, before);
}

#[test]
fn test_aim_tracking_per_state() {
    let (tuning, world, sensor) = (tuning(), world(), sensor());
    let ctx = ctx(&world, &sensor, AIR);
    let mut rig = GrappleRig::new(&tuning, AIR);

    rig.track_aim(Some(Vec2::new(3.0, 4.0)));
    assert_eq!(rig.aim_point(), Vec2::new(3.0, 4.0));
    rig.track_aim(None);
    assert_eq!(rig.aim_point(), Vec2::new(3.0, 4.0));

    let mut rig = attached_rig(&tuning, &ctx);
    rig.track_aim(Some(Vec2::new(-50.0, 0.0)));
    assert_eq!(rig.aim_point(), Vec2::new(5.0, 200.0));

    rig.retrieve(&tuning, &ctx);
    rig.advance(&tuning, &ctx);
    rig.track_aim(Some(Vec2::new(-50.0, 0.0)));
    assert_eq!(rig.aim_point(), Vec2::new(5.0, 200.0));
}

#[test]
fn test_rope_segment_only_while_out() {
    let (tuning, world, sensor) = (tuning(), world(), sensor());
    let ctx = ctx(&world, &sensor, AIR);
    let mut rig = GrappleRig::new(&tuning, AIR);
    assert_eq!(rig.rope_segment(&tuning, AIR), None);

    fire_right(&mut rig, &tuning, &ctx);
    rig.advance(&tuning, &ctx);
    let (muzzle, tip) = rig
        .rope_segment(&tuning, AIR)
        .unwrap_or_else(|| panic!("segment missing while shooting"));
    assert_eq!(muzzle, AIR);
    assert_eq!(tip, rig.tip_position());
}

// -----------------------------------------------------------------------------
// Tether and travel
// -----------------------------------------------------------------------------

#[rstest]
#[case::multiply(JointScaling::Multiply, 0.5, 1.2, 120.0, 50.0)]
#[case::add(JointScaling::Add, -20.0, 10.0, 110.0, 80.0)]
fn test_tether_limits_follow_joint_scaling(
    #[case] scaling: JointScaling,
    #[case] min_modifier: f32,
    #[case] max_modifier: f32,
    #[case] expected_max: f32,
    #[case] expected_min: f32,
) {
    let mut tuning = GrappleTuning {
        min_rope_length: 10.0,
        max_rope_length: 500.0,
        joint_scaling: scaling,
        ..GrappleTuning::default()
    };
    tuning.joint.min_distance_modifier = min_modifier;
    tuning.joint.max_distance_modifier = max_modifier;

    let tether = TetherConstraint::attach(Vec2::ZERO, 100.0, &tuning);
    assert_relative_eq!(tether.max_distance, expected_max);
    assert_relative_eq!(tether.min_distance, expected_min);
}

#[test]
fn test_tether_limits_clamped_to_rope_bounds() {
    let tuning = GrappleTuning::default();
    let short = TetherConstraint::attach(Vec2::ZERO, 5.0, &tuning);
    assert_relative_eq!(short.max_distance, tuning.min_rope_length);
    assert_relative_eq!(short.min_distance, tuning.min_rope_length);

    let long = TetherConstraint::attach(Vec2::ZERO, 1_000.0, &tuning);
    assert_relative_eq!(long.max_distance, tuning.max_rope_length);
}

#[test]
fn test_tether_slack_inside_band_and_pulls_outside() {
    let tether = TetherConstraint {
        anchor: Vec2::ZERO,
        min_distance: 0.0,
        max_distance: 10.0,
        spring: 100.0,
        damper: 0.0,
        mass_scale: 1.0,
    };

    assert_eq!(tether.velocity_response(Vec2::new(5.0, 0.0), Vec2::X, 0.1), Vec2::ZERO);

    let pull = tether.velocity_response(Vec2::new(12.0, 0.0), Vec2::ZERO, 0.1);
    assert_relative_eq!(pull.x, -20.0, epsilon = 1e-4);
    assert_relative_eq!(pull.y, 0.0);

    let damped = TetherConstraint {
        damper: 10.0,
        ..tether
    };
    let pull = damped.velocity_response(Vec2::new(0.0, -12.0), Vec2::new(0.0, -3.0), 0.1);
    assert_relative_eq!(pull.y, 23.0, epsilon = 1e-4);
}

#[test]
fn test_body_frame_travel_follows_body() {
    let mut travel = TipTravel::at_speed(Vec2::new(4.0, 0.0), Vec2::ZERO, 8.0, TravelFrame::Body);
    assert_relative_eq!(travel.duration(), 0.5);

    assert!(!travel.advance(0.25));
    assert_eq!(travel.position(Vec2::new(100.0, 0.0)), Vec2::new(102.0, 0.0));
    assert!(travel.advance(0.25));
    assert_eq!(travel.position(Vec2::new(50.0, 5.0)), Vec2::new(50.0, 5.0));
}

// -----------------------------------------------------------------------------
// Randomised operation sequences
// -----------------------------------------------------------------------------

#[test]
fn test_random_operations_keep_shot_and_tether_invariants() {
    let (world, sensor) = (world(), sensor());
    let tuning = GrappleTuning {
        max_ropes: 3,
        ..tuning()
    };

    for seed in 0..8 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut rig = GrappleRig::new(&tuning, AIR);

        for _ in 0..500 {
            let body = if rng.random_bool(0.3) { FLOOR } else { AIR };
            let ctx = ctx(&world, &sensor, body);
            match rng.random_range(0..6) {
                0 => {
                    let aim = body + Vec2::new(rng.random_range(-100.0..100.0), rng.random_range(-10.0..10.0));
                    rig.track_aim(Some(aim));
                    rig.fire(&tuning, &ctx);
                }
                1 => {
                    rig.retrieve(&tuning, &ctx);
                }
                2 => rig.on_landed(),
                3 => rig.rappel(&tuning, rng.random_range(-1.0..1.0), DT),
                _ => {
                    rig.advance(&tuning, &ctx);
                }
            }

            assert!(rig.remaining_shots() <= tuning.max_ropes, "seed {seed}");
            assert_eq!(rig.is_attached(), rig.tether().is_some(), "seed {seed}");
            if let Some(tether) = rig.tether() {
                assert!(tether.min_distance <= tether.max_distance, "seed {seed}");
                assert!(tether.max_distance <= tuning.max_rope_length, "seed {seed}");
            }
        }
    }
}
