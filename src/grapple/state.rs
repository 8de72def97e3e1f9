//! Grapple domain: rig states and tip travel.

use bevy::prelude::*;

/// Slack allowed when comparing accumulated tick time against a travel duration.
const ARRIVAL_EPSILON: f32 = 1e-5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GrappleState {
    #[default]
    Ready,
    Shooting,
    Attached,
    Retrieving,
    Released,
}

impl GrappleState {
    /// States in which the tip rests on the gun and the aim follows the cursor.
    pub fn is_stowed(self) -> bool {
        matches!(self, GrappleState::Ready | GrappleState::Released)
    }
}

/// Coordinate frame of a travel's endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TravelFrame {
    /// Fixed world positions (outgoing shots).
    World,
    /// Offsets from the body center (returning to the gun).
    Body,
}

/// Linear tip motion between two points over a fixed duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TipTravel {
    from: Vec2,
    to: Vec2,
    frame: TravelFrame,
    elapsed: f32,
    duration: f32,
}

impl TipTravel {
    /// Travel at `speed` units per second; the duration is `distance / speed`.
    pub fn at_speed(from: Vec2, to: Vec2, speed: f32, frame: TravelFrame) -> Self {
        Self {
            from,
            to,
            frame,
            elapsed: 0.0,
            duration: from.distance(to) / speed,
        }
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Returns true once the destination is reached.
    pub fn advance(&mut self, dt: f32) -> bool {
        self.elapsed = (self.elapsed + dt).min(self.duration);
        self.arrived()
    }

    pub fn arrived(&self) -> bool {
        self.elapsed + ARRIVAL_EPSILON >= self.duration
    }

    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        }
    }

    pub fn position(&self, body_position: Vec2) -> Vec2 {
        let point = self.from.lerp(self.to, self.progress());
        match self.frame {
            TravelFrame::World => point,
            TravelFrame::Body => body_position + point,
        }
    }
}
