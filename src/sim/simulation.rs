//! Sim domain: the explicit context owning one controlled character.

use bevy::prelude::*;

use crate::content::{ConfigError, ControllerConfig, validate_config};
use crate::core::{EventBus, EventKind, GravityChannel, GravityOwner, MotionEvent, PhysicsQuery};
use crate::grapple::{FireOutcome, GrappleContext, GrappleRig};
use crate::movement::{
    Character, GroundSensor, GroundTransition, JumpOrigin, JumpSystem, MotionController,
    MotionState, Skill, WallAttachHandler,
};

use super::input::ControllerInput;

/// Who a bus delivery is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subscriber {
    /// Refills shots on landing.
    GrappleRig,
    /// Handed back to the caller of [`Simulation::resolve`].
    External,
}

/// What happened during one fixed tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickReport {
    pub jump: Option<JumpOrigin>,
    pub fire: Option<FireOutcome>,
    pub wall_attached: bool,
}

/// Locomotion, jump, wall, and grapple state for one character, plus the
/// gravity channel and event bus they share.
///
/// A frame drives it in three steps: [`Simulation::sense`] with fresh probes,
/// one [`Simulation::fixed_tick`] per fixed step, then [`Simulation::resolve`]
/// after the engine has integrated the body.
#[derive(Component, Debug, Clone)]
pub struct Simulation {
    config: ControllerConfig,
    character: Character,
    motion: MotionController,
    jump: JumpSystem,
    wall: WallAttachHandler,
    grapple: GrappleRig,
    sensor: GroundSensor,
    gravity: GravityChannel,
    bus: EventBus<Subscriber>,
}

impl Simulation {
    /// Build a context for a character spawned at `spawn`. Every
    /// configuration problem is reported, not just the first.
    pub fn new(config: ControllerConfig, spawn: Vec2) -> Result<Self, Vec<ConfigError>> {
        let errors = validate_config(&config);
        if !errors.is_empty() {
            return Err(errors);
        }

        let jump = JumpSystem::new(&config.jump);
        let mut bus = EventBus::new();
        bus.subscribe(EventKind::Landed, Subscriber::GrappleRig);
        for kind in [
            EventKind::Landed,
            EventKind::GrappleAttached,
            EventKind::GrappleReleased,
        ] {
            bus.subscribe(kind, Subscriber::External);
        }

        Ok(Self {
            character: Character::spawn(spawn, &config),
            motion: MotionController::new(&config.motion),
            wall: WallAttachHandler::new(&config.wall),
            grapple: GrappleRig::new(&config.grapple, spawn),
            sensor: GroundSensor::new(&config.sensors),
            gravity: GravityChannel::new(jump.timing().gravity),
            jump,
            bus,
            config,
        })
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn character(&self) -> &Character {
        &self.character
    }

    pub fn grapple(&self) -> &GrappleRig {
        &self.grapple
    }

    pub fn gravity(&self) -> &GravityChannel {
        &self.gravity
    }

    pub fn is_attached(&self) -> bool {
        self.grapple.is_attached()
    }

    pub fn remaining_shots(&self) -> u32 {
        self.grapple.remaining_shots()
    }

    pub fn current_motion_state(&self) -> MotionState {
        self.character.motion_state
    }

    /// Muzzle and tip while a shot is out.
    pub fn rope_segment(&self) -> Option<(Vec2, Vec2)> {
        self.grapple
            .rope_segment(&self.config.grapple, self.character.position)
    }

    /// Copy the engine's body state in before a tick.
    pub fn sync_body(&mut self, position: Vec2, velocity: Vec2) {
        self.character.position = position;
        self.character.velocity = velocity;
    }

    pub fn velocity(&self) -> Vec2 {
        self.character.velocity
    }

    // ------------------------------------------------------------------------
    // Frame steps
    // ------------------------------------------------------------------------

    /// Refresh ground and wall probes, then aim and facing. A missing aim
    /// point keeps the previous one.
    pub fn sense(&mut self, physics: &dyn PhysicsQuery, aim: Option<Vec2>) {
        let position = self.character.position;
        self.character.grounded = self.sensor.is_grounded(physics, position);
        self.character.wall_contact = self.sensor.wall_contact(physics, position);

        self.grapple.track_aim(aim);
        if !self.character.is_wall_attached() {
            MotionController::face_towards(&mut self.character, self.grapple.aim_point());
        }
    }

    /// One fixed step: timers, input, locomotion, jump, wall, grapple,
    /// gravity, and the resulting body forces.
    pub fn fixed_tick(
        &mut self,
        input: &ControllerInput,
        physics: &dyn PhysicsQuery,
        dt: f32,
    ) -> TickReport {
        let mut report = TickReport::default();
        let config = &self.config;
        let character = &mut self.character;

        JumpSystem::tick_timers(character, dt);
        if input.jump_pressed {
            self.jump.press(&config.jump, character);
        }
        if input.jump_released {
            self.jump.release();
        }

        if !character.is_wall_attached() {
            self.motion
                .step(&config.motion, input.move_axis, character, dt);
        }

        report.jump = self.jump.try_jump(&config.wall, character);
        if let Some(origin) = report.jump {
            match origin {
                JumpOrigin::Wall => self.wall.detach(&config.wall, character),
                JumpOrigin::Ground | JumpOrigin::Coyote => self.wall.lock_reattach(&config.wall),
            }
            info!("Jump ({:?}) at {:?}", origin, character.position);
        }
        if character.motion_state != MotionState::Grounded {
            self.jump.shape_gravity(&config.jump, character);
        }

        report.wall_attached = self.wall.step(character, self.grapple.is_attached(), dt);
        if report.wall_attached {
            info!(
                "Clinging to {:?} wall, {} charges left",
                character.wall_attached, character.wall_jump_charges
            );
        }

        let ctx = GrappleContext {
            physics,
            sensor: &self.sensor,
            body_position: character.position,
            dt,
        };
        if input.fire_pressed {
            let outcome = self.grapple.fire(&config.grapple, &ctx);
            if let FireOutcome::Rejected(reason) = outcome {
                debug!("Grapple fire rejected: {:?}", reason);
            }
            report.fire = Some(outcome);
        }
        if input.retrieve_pressed {
            if let Some(event) = self.grapple.retrieve(&config.grapple, &ctx) {
                self.bus.publish(event);
            }
        }
        self.grapple
            .rappel(&config.grapple, input.rappel_axis, dt);
        if let Some(event) = self.grapple.advance(&config.grapple, &ctx) {
            if matches!(event, MotionEvent::GrappleAttached { .. }) {
                self.wall.detach(&config.wall, character);
            }
            self.bus.publish(event);
        }

        let owner = if self.grapple.is_attached() {
            GravityOwner::Tether
        } else if character.is_wall_attached() {
            GravityOwner::WallCling
        } else {
            GravityOwner::FreeFall
        };
        self.gravity.begin_tick(owner);
        let multiplier = match owner {
            GravityOwner::FreeFall => self.jump.gravity_multiplier(),
            GravityOwner::WallCling => self.wall.gravity_multiplier(),
            GravityOwner::Tether => self.grapple.gravity_multiplier(&config.grapple),
        };
        self.gravity.write(owner, multiplier);

        self.apply_body_forces(dt);
        MotionController::clamp_velocity(&self.config.motion, &mut self.character);
        report
    }

    /// Gravity from the channel, then the tether's spring response.
    pub fn apply_body_forces(&mut self, dt: f32) {
        let character = &mut self.character;
        character.velocity += self.gravity.acceleration() * dt;

        if let Some(tether) = self.grapple.tether() {
            let muzzle = GrappleRig::muzzle(&self.config.grapple, character.position);
            character.velocity += tether.velocity_response(muzzle, character.velocity, dt);
        }
    }

    /// Late ground/air resolution, then dispatch of everything queued this
    /// frame. Returns the notifications meant for the outside world.
    pub fn resolve(&mut self) -> Vec<MotionEvent> {
        let transition =
            self.jump
                .resolve(&self.config.jump, &self.config.wall, &mut self.character);
        if transition == Some(GroundTransition::Landed) {
            self.bus.publish(MotionEvent::Landed {
                position: self.character.position,
            });
        }

        let mut external = Vec::new();
        for delivery in self.bus.flush() {
            match (delivery.subscriber, delivery.event) {
                (Subscriber::GrappleRig, MotionEvent::Landed { .. }) => self.grapple.on_landed(),
                (Subscriber::GrappleRig, _) => {}
                (Subscriber::External, event) => external.push(event),
            }
        }
        external
    }

    // ------------------------------------------------------------------------
    // Progression and respawn
    // ------------------------------------------------------------------------

    pub fn unlock_wall_jump(&mut self) {
        self.wall.unlock();
    }

    pub fn enable_grapple(&mut self) {
        self.grapple.enable();
    }

    /// Returns false when the skill was already available.
    pub fn unlock_skill(&mut self, skill: Skill) -> bool {
        let newly = match skill {
            Skill::Grapple => !self.grapple.is_enabled(),
            Skill::WallJump => !self.wall.is_unlocked(),
        };
        match skill {
            Skill::Grapple => self.enable_grapple(),
            Skill::WallJump => self.unlock_wall_jump(),
        }
        if newly {
            info!("Skill unlocked: {:?}", skill);
        }
        newly
    }

    pub fn has_skill(&self, skill: Skill) -> bool {
        match skill {
            Skill::Grapple => self.grapple.is_enabled(),
            Skill::WallJump => self.wall.is_unlocked(),
        }
    }

    /// Put the character back on its feet at `position`, stowing the rope.
    pub fn respawn_at(&mut self, position: Vec2) {
        self.character = Character {
            facing: self.character.facing,
            ..Character::spawn(position, &self.config)
        };
        self.motion = MotionController::new(&self.config.motion);
        self.jump.release();
        if let Some(event) = self.grapple.stow(&self.config.grapple, position) {
            self.bus.publish(event);
        }
        self.grapple.on_landed();
        info!("Respawned at {:?}", position);
    }
}
