//! Grapple domain: the rope gun state machine.

use bevy::prelude::*;

use crate::content::GrappleTuning;
use crate::core::{MotionEvent, PhysicsQuery, QueryLayer};
use crate::movement::GroundSensor;

use super::state::{GrappleState, TipTravel, TravelFrame};
use super::tether::TetherConstraint;

/// What the rig may query during a tick.
pub struct GrappleContext<'a> {
    pub physics: &'a dyn PhysicsQuery,
    pub sensor: &'a GroundSensor,
    pub body_position: Vec2,
    pub dt: f32,
}

impl GrappleContext<'_> {
    /// Pull-based ground check, probed fresh at the moment of asking.
    pub fn is_grounded(&self) -> bool {
        self.sensor.is_grounded(self.physics, self.body_position)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FireRejection {
    Disabled,
    OutOfShots,
    Busy(GrappleState),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FireOutcome {
    Hit { anchor: Vec2, distance: f32 },
    Miss,
    Rejected(FireRejection),
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum PendingShot {
    Hit { anchor: Vec2 },
    Miss,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GrappleRig {
    enabled: bool,
    max_ropes: u32,
    shots: u32,
    state: GrappleState,
    tip: Vec2,
    travel: Option<TipTravel>,
    pending: Option<PendingShot>,
    miss_timer: Option<f32>,
    tether: Option<TetherConstraint>,
    aim_point: Vec2,
    frozen_aim: Vec2,
}

impl GrappleRig {
    pub fn new(tuning: &GrappleTuning, body_position: Vec2) -> Self {
        let tip = body_position + tuning.rest_offset();
        Self {
            enabled: tuning.enabled,
            max_ropes: tuning.max_ropes,
            shots: tuning.max_ropes,
            state: GrappleState::Ready,
            tip,
            travel: None,
            pending: None,
            miss_timer: None,
            tether: None,
            aim_point: tip + Vec2::X,
            frozen_aim: tip,
        }
    }

    pub fn enable(&mut self) {
        self.enabled = true;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn state(&self) -> GrappleState {
        self.state
    }

    pub fn remaining_shots(&self) -> u32 {
        self.shots
    }

    pub fn max_shots(&self) -> u32 {
        self.max_ropes
    }

    pub fn is_attached(&self) -> bool {
        self.state == GrappleState::Attached
    }

    pub fn tether(&self) -> Option<&TetherConstraint> {
        self.tether.as_ref()
    }

    pub fn tip_position(&self) -> Vec2 {
        self.tip
    }

    pub fn aim_point(&self) -> Vec2 {
        self.aim_point
    }

    pub fn muzzle(tuning: &GrappleTuning, body_position: Vec2) -> Vec2 {
        body_position + tuning.muzzle_offset()
    }

    /// Unit direction the gun points in, from the muzzle to the aim point.
    pub fn aim_direction(&self, tuning: &GrappleTuning, body_position: Vec2) -> Vec2 {
        (self.aim_point - Self::muzzle(tuning, body_position))
            .try_normalize()
            .unwrap_or(Vec2::X)
    }

    /// Muzzle and tip while the tip is away from the gun.
    pub fn rope_segment(&self, tuning: &GrappleTuning, body_position: Vec2) -> Option<(Vec2, Vec2)> {
        if self.state.is_stowed() {
            return None;
        }
        Some((Self::muzzle(tuning, body_position), self.tip))
    }

    pub fn gravity_multiplier(&self, tuning: &GrappleTuning) -> f32 {
        tuning.tether_gravity_multiplier
    }

    /// Follow the cursor while stowed, the tip while attached, and the
    /// frozen tip while retrieving. A missing cursor holds the last aim.
    pub fn track_aim(&mut self, cursor: Option<Vec2>) {
        match self.state {
            GrappleState::Ready | GrappleState::Released => {
                if let Some(cursor) = cursor {
                    self.aim_point = cursor;
                }
            }
            GrappleState::Attached => self.aim_point = self.tip,
            GrappleState::Retrieving => self.aim_point = self.frozen_aim,
            GrappleState::Shooting => {}
        }
    }

    pub fn fire(&mut self, tuning: &GrappleTuning, ctx: &GrappleContext<'_>) -> FireOutcome {
        if !self.enabled {
            return FireOutcome::Rejected(FireRejection::Disabled);
        }
        if !self.state.is_stowed() {
            return FireOutcome::Rejected(FireRejection::Busy(self.state));
        }
        if self.shots == 0 {
            return FireOutcome::Rejected(FireRejection::OutOfShots);
        }

        let muzzle = Self::muzzle(tuning, ctx.body_position);
        let direction = self.aim_direction(tuning, ctx.body_position);
        self.state = GrappleState::Shooting;
        self.miss_timer = None;
        self.tip = muzzle;

        match ctx
            .physics
            .cast_ray(muzzle, direction, tuning.max_range, QueryLayer::Attachable)
        {
            Some(hit) => {
                self.shots = self.shots.saturating_sub(1);
                self.pending = Some(PendingShot::Hit { anchor: hit.point });
                self.travel = Some(TipTravel::at_speed(
                    muzzle,
                    hit.point,
                    tuning.shooting_speed,
                    TravelFrame::World,
                ));
                info!(
                    "Grapple hit at {:?} ({} away), {} shots left",
                    hit.point, hit.distance, self.shots
                );
                FireOutcome::Hit {
                    anchor: hit.point,
                    distance: hit.distance,
                }
            }
            None => {
                self.pending = Some(PendingShot::Miss);
                self.travel = Some(TipTravel::at_speed(
                    muzzle,
                    muzzle + direction * tuning.max_range,
                    tuning.shooting_speed,
                    TravelFrame::World,
                ));
                debug!("Grapple missed toward {:?}", direction);
                FireOutcome::Miss
            }
        }
    }

    /// Pull the tip back to the gun. Refills shots when retrieving from an
    /// attached rope while standing on the ground.
    pub fn retrieve(
        &mut self,
        tuning: &GrappleTuning,
        ctx: &GrappleContext<'_>,
    ) -> Option<MotionEvent> {
        let refilled = self.state == GrappleState::Attached && ctx.is_grounded();
        if refilled {
            self.shots = self.max_ropes;
        }

        let released = self.tether.take().map(|_| MotionEvent::GrappleReleased { refilled });
        if released.is_some() {
            info!("Grapple released (refilled: {})", refilled);
        }

        self.pending = None;
        self.miss_timer = None;
        self.frozen_aim = self.tip;
        self.state = GrappleState::Retrieving;
        self.travel = Some(TipTravel::at_speed(
            self.tip - ctx.body_position,
            tuning.rest_offset(),
            tuning.retrieve_speed,
            TravelFrame::Body,
        ));
        released
    }

    /// Advance tip travel and the miss timeout by one tick.
    pub fn advance(
        &mut self,
        tuning: &GrappleTuning,
        ctx: &GrappleContext<'_>,
    ) -> Option<MotionEvent> {
        let arrived = match self.travel.as_mut() {
            Some(travel) => {
                let arrived = travel.advance(ctx.dt);
                self.tip = travel.position(ctx.body_position);
                arrived
            }
            None => false,
        };

        match self.state {
            GrappleState::Shooting if arrived => {
                self.travel = None;
                match self.pending.take() {
                    Some(PendingShot::Hit { anchor }) => return Some(self.attach(tuning, ctx, anchor)),
                    Some(PendingShot::Miss) => {
                        self.miss_timer = Some(tuning.miss_retrieve_delay);
                    }
                    None => {}
                }
            }
            GrappleState::Shooting => {
                if let Some(timer) = self.miss_timer.as_mut() {
                    *timer -= ctx.dt;
                    if *timer <= 0.0 {
                        return self.retrieve(tuning, ctx);
                    }
                }
            }
            GrappleState::Retrieving if arrived => {
                self.travel = None;
                self.state = GrappleState::Released;
                self.tip = ctx.body_position + tuning.rest_offset();
                debug!("Grapple stowed");
            }
            GrappleState::Attached => {
                if let Some(tether) = &self.tether {
                    self.tip = tether.anchor;
                }
            }
            GrappleState::Ready | GrappleState::Released => {
                self.tip = ctx.body_position + tuning.rest_offset();
            }
            GrappleState::Retrieving => {}
        }
        None
    }

    fn attach(&mut self, tuning: &GrappleTuning, ctx: &GrappleContext<'_>, anchor: Vec2) -> MotionEvent {
        let distance = Self::muzzle(tuning, ctx.body_position).distance(anchor);
        let tether = TetherConstraint::attach(anchor, distance, tuning);
        self.tether = Some(tether);
        self.tip = anchor;
        self.state = GrappleState::Attached;
        info!(
            "Grapple attached at {:?}, rope {}..{}",
            anchor, tether.min_distance, tether.max_distance
        );
        MotionEvent::GrappleAttached {
            anchor,
            rope_length: tether.max_distance,
        }
    }

    /// Reel in (positive axis) or pay out (negative axis) while attached.
    pub fn rappel(&mut self, tuning: &GrappleTuning, axis: f32, dt: f32) {
        if self.state != GrappleState::Attached {
            return;
        }
        let Some(tether) = self.tether.as_mut() else {
            return;
        };

        let axis = axis.clamp(-1.0, 1.0);
        let delta = if axis > 0.0 {
            -tuning.reel_in_speed * axis * dt
        } else {
            tuning.pay_out_speed * -axis * dt
        };
        tether.adjust_length(delta, tuning.min_rope_length, tuning.max_rope_length);
    }

    /// Landing refills shots unless a rope is still attached.
    pub fn on_landed(&mut self) {
        if self.state == GrappleState::Attached {
            return;
        }
        self.shots = self.max_ropes;
        if self.state == GrappleState::Released {
            self.state = GrappleState::Ready;
        }
    }

    /// Snap the tip back to the gun without animation, e.g. on respawn.
    pub fn stow(&mut self, tuning: &GrappleTuning, body_position: Vec2) -> Option<MotionEvent> {
        let released = self
            .tether
            .take()
            .map(|_| MotionEvent::GrappleReleased { refilled: false });
        self.travel = None;
        self.pending = None;
        self.miss_timer = None;
        if !self.state.is_stowed() {
            self.state = GrappleState::Released;
        }
        self.tip = body_position + tuning.rest_offset();
        released
    }
}
