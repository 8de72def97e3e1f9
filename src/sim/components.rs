//! Sim domain: ECS markers for the controlled body and the level around it.

use bevy::prelude::*;

use crate::movement::Skill;

#[derive(Component, Debug)]
pub struct Player;

#[derive(Component, Debug)]
pub struct Ground;

#[derive(Component, Debug)]
pub struct Wall;

/// Surface the grapple can bite into.
#[derive(Component, Debug)]
pub struct Anchor;

/// Grants a skill on contact, then disappears.
#[derive(Component, Debug, Clone, Copy)]
pub struct SkillPickup {
    pub skill: Skill,
}

/// Sends the player back to the last checkpoint on contact.
#[derive(Component, Debug)]
pub struct Hazard;

#[derive(Component, Debug)]
pub struct Checkpoint;

/// Where the player reappears after touching a hazard.
#[derive(Component, Debug, Clone, Copy)]
pub struct RespawnPoint(pub Vec2);
